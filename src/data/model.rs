use std::collections::BTreeSet;
use std::fmt;

use serde::Serialize;

/// Column heading for factor names, as it appears in the metadata header row.
pub const FACTOR_NAME_COLUMN: &str = "Study Factor Name";
/// Column heading for factor types, as it appears in the metadata header row.
pub const FACTOR_TYPE_COLUMN: &str = "Study Factor Type";

// ---------------------------------------------------------------------------
// MetadataDocument – one uploaded file
// ---------------------------------------------------------------------------

/// The decoded text of an uploaded research metadata file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MetadataDocument {
    /// File name shown in the UI (no directory part).
    pub file_name: String,
    /// Full UTF-8 content. Never validated beyond decoding.
    pub text: String,
}

impl MetadataDocument {
    pub fn new(file_name: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            file_name: file_name.into(),
            text: text.into(),
        }
    }

    /// Size of the decoded text in bytes.
    pub fn len(&self) -> usize {
        self.text.len()
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }
}

// ---------------------------------------------------------------------------
// StudyId – OSDR study accession number
// ---------------------------------------------------------------------------

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
#[error("invalid OSDR number {0:?}: expected digits such as 678 for OSD-678")]
pub struct StudyIdError(pub String);

/// The numeric part of an OSDR accession (`678` for `OSD-678`).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct StudyId(String);

impl StudyId {
    /// Parse user input. Accepts `678`, ` 678 ` and `OSD-678`.
    pub fn parse(input: &str) -> Result<Self, StudyIdError> {
        let trimmed = input.trim();
        let digits = trimmed
            .strip_prefix("OSD-")
            .or_else(|| trimmed.strip_prefix("osd-"))
            .unwrap_or(trimmed);
        if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
            return Err(StudyIdError(input.to_string()));
        }
        Ok(Self(digits.to_string()))
    }

    pub fn digits(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for StudyId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "OSD-{}", self.0)
    }
}

// ---------------------------------------------------------------------------
// FactorRow / FactorTable – the extracted study factors
// ---------------------------------------------------------------------------

/// A borrowed view of one row of a [`FactorTable`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FactorRow<'a> {
    pub name: &'a str,
    pub kind: &'a str,
}

/// Two parallel columns of study factors in source row order.
///
/// Rows can only be appended as complete pairs, so both columns always have
/// the same length.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct FactorTable {
    #[serde(rename = "Study Factor Name")]
    names: Vec<String>,
    #[serde(rename = "Study Factor Type")]
    types: Vec<String>,
}

impl FactorTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append one factor row.
    pub fn push(&mut self, name: impl Into<String>, kind: impl Into<String>) {
        self.names.push(name.into());
        self.types.push(kind.into());
    }

    /// The `Study Factor Name` column.
    pub fn names(&self) -> &[String] {
        &self.names
    }

    /// The `Study Factor Type` column.
    pub fn types(&self) -> &[String] {
        &self.types
    }

    /// Iterate rows in source order.
    pub fn rows(&self) -> impl Iterator<Item = FactorRow<'_>> {
        self.names
            .iter()
            .zip(self.types.iter())
            .map(|(name, kind)| FactorRow { name, kind })
    }

    /// Sorted set of distinct factor types (used for colour assignment).
    pub fn unique_types(&self) -> BTreeSet<String> {
        self.types.iter().cloned().collect()
    }

    /// Number of factor rows.
    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}
