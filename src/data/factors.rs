use super::model::{FACTOR_NAME_COLUMN, FACTOR_TYPE_COLUMN, FactorTable};

/// Literal that opens the study factors section.
pub const SECTION_START_MARKER: &str = "STUDY FACTORS";
/// Literal that closes the study factors section.
pub const SECTION_END_MARKER: &str = "Study Factor Type Term Accession Number";

// ---------------------------------------------------------------------------
// Outcome of an extraction
// ---------------------------------------------------------------------------

/// Result of [`extract_factors`]. Both failure variants are warnings for the
/// UI, never hard errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FactorOutcome {
    /// The section was parsed. The table may still be empty if every data
    /// row was too short.
    Found(FactorTable),
    /// One of the two section markers does not occur in the text.
    MarkerNotFound,
    /// Both markers exist but the header rows lack the expected columns.
    HeaderIncomplete,
}

impl FactorOutcome {
    /// The extracted table, or an empty one for the failure variants.
    pub fn table(&self) -> FactorTable {
        match self {
            FactorOutcome::Found(table) => table.clone(),
            _ => FactorTable::new(),
        }
    }

    /// User-facing warning for the failure variants.
    pub fn warning(&self) -> Option<&'static str> {
        match self {
            FactorOutcome::Found(_) => None,
            FactorOutcome::MarkerNotFound | FactorOutcome::HeaderIncomplete => {
                Some("STUDY FACTORS section not found or incomplete.")
            }
        }
    }
}

// ---------------------------------------------------------------------------
// Extraction
// ---------------------------------------------------------------------------

/// Extract the study factor table from raw metadata text.
///
/// The section runs from the first `STUDY FACTORS` to the first
/// `Study Factor Type Term Accession Number` anywhere in the text. Inside it,
/// line 1 holds the name headers, line 2 the type headers, and every later
/// line is a data row. Rows with too few tab-separated fields are dropped.
pub fn extract_factors(text: &str) -> FactorOutcome {
    let (Some(start), Some(end)) = (
        text.find(SECTION_START_MARKER),
        text.find(SECTION_END_MARKER),
    ) else {
        log::warn!("study factors section markers not found");
        return FactorOutcome::MarkerNotFound;
    };

    // The end marker is searched over the whole text, so it can precede the
    // start marker. That leaves no header rows.
    let section = text.get(start..end).unwrap_or("");
    let lines: Vec<&str> = section.split('\n').collect();

    let header_names = header_fields(&lines, 1);
    let header_types = header_fields(&lines, 2);

    let name_idx = header_names.iter().position(|h| *h == FACTOR_NAME_COLUMN);
    let type_idx = header_types.iter().position(|h| *h == FACTOR_TYPE_COLUMN);
    let (Some(name_idx), Some(type_idx)) = (name_idx, type_idx) else {
        log::warn!("study factors section has incomplete header rows");
        return FactorOutcome::HeaderIncomplete;
    };

    let mut table = FactorTable::new();
    let needed = name_idx.max(type_idx);
    for line in lines.iter().skip(3) {
        let parts: Vec<&str> = line.split('\t').collect();
        if parts.len() > needed {
            table.push(parts[name_idx].trim(), parts[type_idx].trim());
        }
    }

    log::info!("extracted {} study factors", table.len());
    FactorOutcome::Found(table)
}

fn header_fields<'a>(lines: &[&'a str], idx: usize) -> Vec<&'a str> {
    lines
        .get(idx)
        .map(|line| line.trim().split('\t').collect())
        .unwrap_or_default()
}
