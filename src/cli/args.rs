//! Command-line arguments.

use std::path::PathBuf;

use ata_risk::case::{CaseRecord, FlagValue};
use clap::{Args, Parser, Subcommand, ValueEnum};

#[derive(Parser, Debug)]
#[command(
    name = "ata-risk",
    version,
    about = "Thyroid cancer recurrence-risk classification and RAI activity recommendation"
)]
pub struct Cli {
    /// Log engine decisions to stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub cmd: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Classify one case from flags and/or a case file
    Classify(ClassifyArgs),
    /// List every input field and its accepted values
    Options(OptionsArgs),
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

// Field values accept either the form label or the short tag shown by
// `ata-risk options`. Flags given here override the input file.
#[derive(Args, Clone, Debug, Default)]
pub struct ClassifyArgs {
    /// Case file (JSON or YAML) using the form field names
    #[arg(short, long)]
    pub input: Option<PathBuf>,

    /// Histology: ptc | ftc | otc
    #[arg(long)]
    pub histology: Option<String>,

    /// Primary tumor extent: t1-t2 | t3a | t3b-t4
    #[arg(long)]
    pub t_group: Option<String>,

    /// Nodal status: n0 | n1a-major | cn1b | n1b-bulky
    #[arg(long)]
    pub nodal: Option<String>,

    /// Distant metastasis: m0 | m1
    #[arg(long)]
    pub m: Option<String>,

    /// Margin: r0 | r1-anterior | r1-posterior | r2
    #[arg(long)]
    pub margin: Option<String>,

    /// Aggressive histology subtype: yes | no
    #[arg(long)]
    pub aggressive_histology: Option<String>,

    /// Poor differentiation / high grade: yes | no
    #[arg(long)]
    pub poor_diff: Option<String>,

    /// Microscopic extrathyroidal extension: yes | no
    #[arg(long)]
    pub microscopic_ete: Option<String>,

    /// PTC multifocality: none | unilateral | bilateral
    #[arg(long)]
    pub multifocality: Option<String>,

    /// PTC vascular invasion: none | present
    #[arg(long)]
    pub vi_ptc: Option<String>,

    /// FTC/OTC invasion: minimal | limited | extensive | widely
    #[arg(long)]
    pub vi_ftc_otc: Option<String>,

    /// FTC/OTC encapsulated angioinvasive: yes | no
    #[arg(long)]
    pub encapsulated_angioinvasive: Option<String>,

    /// Dosage table override (JSON or YAML)
    #[arg(long, env = "ATA_RISK_DOSAGE_CONFIG")]
    pub dosage_config: Option<PathBuf>,

    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,
}

impl ClassifyArgs {
    /// Field values given on the command line.
    pub fn to_record(&self) -> CaseRecord {
        let flag = |v: &Option<String>| v.as_deref().map(FlagValue::from);
        CaseRecord {
            histology: self.histology.clone(),
            t_group: self.t_group.clone(),
            nodal: self.nodal.clone(),
            m: self.m.clone(),
            margin: self.margin.clone(),
            aggressive_histology: flag(&self.aggressive_histology),
            poor_diff_high_grade: flag(&self.poor_diff),
            multifocality_ptc: self.multifocality.clone(),
            microscopic_ete: flag(&self.microscopic_ete),
            vi_ptc: self.vi_ptc.clone(),
            vi_ftc_otc: self.vi_ftc_otc.clone(),
            encapsulated_angioinvasive_ftc_otc: flag(&self.encapsulated_angioinvasive),
        }
    }
}

#[derive(Args, Clone, Debug)]
pub struct OptionsArgs {
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_classify_flags() {
        let cli = Cli::try_parse_from([
            "ata-risk",
            "classify",
            "--histology",
            "ptc",
            "--t-group",
            "t3a",
            "--microscopic-ete",
            "yes",
            "--format",
            "json",
        ])
        .unwrap();

        let Command::Classify(args) = cli.cmd else {
            panic!("expected classify");
        };
        assert_eq!(args.format, OutputFormat::Json);
        let record = args.to_record();
        assert_eq!(record.histology.as_deref(), Some("ptc"));
        assert_eq!(record.t_group.as_deref(), Some("t3a"));
        assert_eq!(record.microscopic_ete, Some(FlagValue::from("yes")));
        assert_eq!(record.nodal, None);
    }

    #[test]
    fn test_verbose_is_global() {
        let cli = Cli::try_parse_from(["ata-risk", "options", "-v"]).unwrap();
        assert!(cli.verbose);
    }

    #[test]
    fn test_unknown_format_rejected() {
        assert!(Cli::try_parse_from(["ata-risk", "options", "--format", "xml"]).is_err());
    }
}
