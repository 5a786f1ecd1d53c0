pub mod classify;
pub mod options;

use std::path::Path;

use anyhow::{Context, Result};
use serde::de::DeserializeOwned;

use crate::cli::args::{Cli, Command};

pub fn dispatch(cli: Cli) -> Result<i32> {
    match cli.cmd {
        Command::Classify(args) => classify::run(args),
        Command::Options(args) => options::run(args),
    }
}

/// Reads a JSON or YAML document, chosen by file extension.
pub(crate) fn load_document<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let contents = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;
    parse_document(&contents, path)
}

fn parse_document<T: DeserializeOwned>(contents: &str, path: &Path) -> Result<T> {
    let yaml = matches!(
        path.extension().and_then(|e| e.to_str()),
        Some("yaml" | "yml")
    );
    if yaml {
        serde_yaml::from_str(contents).with_context(|| format!("failed to parse {}", path.display()))
    } else {
        serde_json::from_str(contents).with_context(|| format!("failed to parse {}", path.display()))
    }
}
