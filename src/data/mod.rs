/// Data layer: core types, loading, and factor extraction.
///
/// Architecture:
/// ```text
///   OSD-xxx metadata .txt
///        │
///        ▼
///   ┌──────────┐
///   │  loader   │  read + UTF-8 decode → MetadataDocument
///   └──────────┘
///        │
///        ▼
///   ┌──────────┐
///   │ factors   │  slice STUDY FACTORS section → FactorOutcome
///   └──────────┘
///        │
///        ▼
///   ┌─────────────┐
///   │ FactorTable  │  name / type columns → UI table, CSV export
///   └─────────────┘
/// ```

pub mod factors;
pub mod loader;
pub mod model;
