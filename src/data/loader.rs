use std::io::Write;
use std::path::Path;

use anyhow::{Context, Result, bail};

use super::model::{FACTOR_NAME_COLUMN, FACTOR_TYPE_COLUMN, FactorTable, MetadataDocument};

/// Extensions accepted by the upload dialog.
pub const SUPPORTED_EXTENSIONS: &[&str] = &["txt"];

#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error("file {file_name} is not valid UTF-8 (invalid byte at offset {offset})")]
    Decode { file_name: String, offset: usize },
}

// ---------------------------------------------------------------------------
// Public entry-points
// ---------------------------------------------------------------------------

/// Load an OSDR research metadata file.  Dispatch by extension.
///
/// Only `.txt` investigation exports are supported. The content is decoded
/// as UTF-8 and otherwise left untouched.
pub fn load_file(path: &Path) -> Result<MetadataDocument> {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("")
        .to_ascii_lowercase();

    if !SUPPORTED_EXTENSIONS.contains(&ext.as_str()) {
        bail!("Unsupported file extension: .{ext}");
    }

    let bytes = std::fs::read(path)
        .with_context(|| format!("reading metadata file {}", path.display()))?;
    let file_name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();

    Ok(decode_metadata(file_name, bytes)?)
}

/// Decode raw upload bytes into a [`MetadataDocument`].
pub fn decode_metadata(file_name: String, bytes: Vec<u8>) -> Result<MetadataDocument, LoadError> {
    match String::from_utf8(bytes) {
        Ok(text) => Ok(MetadataDocument { file_name, text }),
        Err(e) => Err(LoadError::Decode {
            file_name,
            offset: e.utf8_error().valid_up_to(),
        }),
    }
}

// ---------------------------------------------------------------------------
// CSV export
// ---------------------------------------------------------------------------

/// Write the factor table to `path` as CSV with a header row.
pub fn export_factors_csv(path: &Path, table: &FactorTable) -> Result<()> {
    let file = std::fs::File::create(path)
        .with_context(|| format!("creating {}", path.display()))?;
    write_factors_csv(file, table)
}

/// Write the factor table as CSV to any writer.
pub fn write_factors_csv<W: Write>(writer: W, table: &FactorTable) -> Result<()> {
    let mut wtr = csv::Writer::from_writer(writer);
    wtr.write_record([FACTOR_NAME_COLUMN, FACTOR_TYPE_COLUMN])
        .context("writing CSV header")?;
    for (row_no, row) in table.rows().enumerate() {
        wtr.write_record([row.name, row.kind])
            .with_context(|| format!("writing CSV row {row_no}"))?;
    }
    wtr.flush().context("flushing CSV output")?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn loads_txt_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("OSD-678_metadata.txt");
        std::fs::write(&path, "STUDY FACTORS\n").unwrap();

        let doc = load_file(&path).unwrap();
        assert_eq!(doc.file_name, "OSD-678_metadata.txt");
        assert_eq!(doc.text, "STUDY FACTORS\n");
    }

    #[test]
    fn extension_check_is_case_insensitive() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("META.TXT");
        std::fs::write(&path, "").unwrap();

        assert!(load_file(&path).unwrap().is_empty());
    }

    #[test]
    fn rejects_other_extensions() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("data.csv");
        std::fs::write(&path, "a,b").unwrap();

        let err = load_file(&path).unwrap_err();
        assert!(err.to_string().contains("Unsupported file extension"));
    }

    #[test]
    fn invalid_utf8_reports_offset() {
        let err = decode_metadata("bad.txt".into(), vec![b'o', b'k', 0xff, b'!']).unwrap_err();
        match err {
            LoadError::Decode { file_name, offset } => {
                assert_eq!(file_name, "bad.txt");
                assert_eq!(offset, 2);
            }
        }
    }

    #[test]
    fn invalid_utf8_file_fails_to_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("latin1.txt");
        std::fs::write(&path, [0x53, 0xe9, 0x6f]).unwrap();

        let err = load_file(&path).unwrap_err();
        assert!(err.downcast_ref::<LoadError>().is_some());
    }

    #[test]
    fn csv_export_has_header_and_rows_in_order() {
        let mut table = FactorTable::new();
        table.push("Spaceflight", "Environmental");
        table.push("Diet, high fat", "Nutrition");

        let mut out = Vec::new();
        write_factors_csv(&mut out, &table).unwrap();

        assert_eq!(
            String::from_utf8(out).unwrap(),
            "Study Factor Name,Study Factor Type\n\
Spaceflight,Environmental\n\
\"Diet, high fat\",Nutrition\n"
        );
    }

    #[test]
    fn csv_export_to_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("factors.csv");

        export_factors_csv(&path, &FactorTable::new()).unwrap();

        let written = std::fs::read_to_string(&path).unwrap();
        assert_eq!(written, "Study Factor Name,Study Factor Type\n");
    }
}
