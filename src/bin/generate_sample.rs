use std::fmt::Write as _;
use std::path::PathBuf;

use anyhow::{Context, Result};

/// Factor rows written to the sample: (name, type, type term source).
const FACTORS: &[(&str, &str, &str)] = &[
    ("Spaceflight", "Space Flight", "EFO"),
    ("Ground Control", "Control", "EFO"),
    ("Diet", "Nutrition", "NCIT"),
    ("Time of Dissection", "Time", "EFO"),
    ("Ionizing Radiation", "Radiation", "EFO"),
    ("Hindlimb Unloading", "Simulated Microgravity", "OBI"),
];

fn investigation_text(study: &str) -> String {
    let mut out = String::new();

    // ---- Preamble sections the viewer ignores ----
    out.push_str("ONTOLOGY SOURCE REFERENCE\n");
    out.push_str("Term Source Name\tEFO\tNCIT\tOBI\n");
    out.push_str("Term Source File\t\t\t\n");
    out.push_str("INVESTIGATION\n");
    let _ = writeln!(out, "Investigation Identifier\t{study}");
    let _ = writeln!(
        out,
        "Investigation Title\tSynthetic rodent study {study} for viewer testing"
    );
    out.push_str("STUDY\n");
    let _ = writeln!(out, "Study Identifier\t{study}");
    out.push_str("Study Description\tMice were flown for 30 days and compared to ground controls.\n");

    // ---- Factors: names row, types row, then one row per factor ----
    out.push_str("STUDY FACTORS\n");
    out.push_str("Study Factor Name\tStudy Factor Type\tStudy Factor Type Term Source REF\n");
    out.push_str("Study Factor Name\tStudy Factor Type\tStudy Factor Type Term Source REF\n");
    for (name, kind, source) in FACTORS {
        let _ = writeln!(out, "{name}\t{kind}\t{source}");
    }
    // A truncated row, which the viewer drops.
    out.push_str("Incomplete Row\n");
    out.push_str("Study Factor Type Term Accession Number\thttp://www.ebi.ac.uk/efo/EFO_0000001\n");

    out.push_str("STUDY ASSAYS\n");
    out.push_str("Study Assay Measurement Type\ttranscription profiling\n");
    out
}

fn main() -> Result<()> {
    let output_path = std::env::args()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("sample_investigation.txt"));

    let text = investigation_text("OSD-999");
    std::fs::write(&output_path, &text)
        .with_context(|| format!("writing {}", output_path.display()))?;

    println!(
        "Wrote sample investigation with {} study factors to {}",
        FACTORS.len(),
        output_path.display()
    );
    Ok(())
}
