use anyhow::Result;
use ata_risk::case::{catalogue, Applicability, FieldOptions};

use crate::cli::args::{OptionsArgs, OutputFormat};
use crate::exit_codes;

pub fn run(args: OptionsArgs) -> Result<i32> {
    let fields = catalogue();
    match args.format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&fields)?),
        OutputFormat::Text => print!("{}", render_text(&fields)),
    }
    Ok(exit_codes::OK)
}

fn render_text(fields: &[FieldOptions]) -> String {
    let mut out = String::new();
    for field in fields {
        let scope = match field.applies_to {
            Applicability::All => "",
            Applicability::PapillaryOnly => " [PTC only]",
            Applicability::FollicularOnly => " [FTC/OTC only]",
        };
        out.push_str(&format!("{} ({}){}\n", field.title, field.field, scope));
        for option in &field.options {
            out.push_str(&format!("  {:<14} {}\n", option.tag, option.label));
        }
    }
    out
}
