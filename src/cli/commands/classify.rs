use std::path::Path;

use anyhow::{Context, Result};
use ata_risk::case::CaseRecord;
use ata_risk::dosage::DosageTable;
use ata_risk::risk::{Classification, RiskEngine};

use super::load_document;
use crate::cli::args::{ClassifyArgs, OutputFormat};
use crate::exit_codes;

pub fn run(args: ClassifyArgs) -> Result<i32> {
    let from_file = match &args.input {
        Some(path) => load_document::<CaseRecord>(path)?,
        None => CaseRecord::default(),
    };
    let record = args.to_record().or(from_file);

    let inputs = match record.into_inputs() {
        Ok(inputs) => inputs,
        Err(e) => {
            eprintln!("error: {e}");
            return Ok(exit_codes::INPUT_ERROR);
        }
    };

    let engine = match &args.dosage_config {
        Some(path) => load_engine(path)?,
        None => RiskEngine::new(),
    };

    let result = engine.classify(&inputs);
    match args.format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&result)?),
        OutputFormat::Text => print!("{}", render_text(&result)),
    }
    Ok(exit_codes::OK)
}

fn load_engine(path: &Path) -> Result<RiskEngine> {
    let table = load_document::<DosageTable>(path)?;
    RiskEngine::with_dosage(table)
        .with_context(|| format!("invalid dosage table {}", path.display()))
}

fn render_text(result: &Classification) -> String {
    let mut out = format!(
        "Risk category:   {}\nRecommended RAI: {}\nRationale:\n",
        result.category, result.recommended_rai
    );
    for line in &result.rationale {
        out.push_str("  - ");
        out.push_str(line);
        out.push('\n');
    }
    out
}
