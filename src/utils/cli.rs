use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use log::LevelFilter;

use crate::chat::agent::AnalysisMode;

#[derive(Parser, Debug)]
#[command(name = "protrack")]
#[command(about = "Check resumes against job descriptions and build simple PDF resumes", long_about = None)]
pub struct Args {
    /// Path to the configuration file
    #[arg(short, long, value_name = "FILE", default_value = "config.toml", global = true)]
    pub config: PathBuf,

    /// Sets the logger's verbosity level
    #[arg(short, long, value_name = "VERBOSITY", default_value_t = LevelFilter::Info, global = true)]
    pub verbosity: LevelFilter,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Build a PDF resume from a filled-in form
    Build(BuildArgs),
    /// Analyze an existing resume against a job description
    Check(CheckArgs),
}

#[derive(clap::Args, Debug)]
pub struct BuildArgs {
    /// Path to the resume form (TOML)
    #[arg(short, long, value_name = "FILE")]
    pub input: PathBuf,

    /// Output PDF file path (defaults to <Name>_Resume.pdf)
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Also write the generated LaTeX source to this path
    #[arg(long, value_name = "FILE")]
    pub latex: Option<PathBuf>,

    /// Print the document's text layer instead of only the preview
    #[arg(long)]
    pub text: bool,

    /// Skip blank contact fields in the header line
    #[arg(long)]
    pub compact_header: bool,
}

#[derive(clap::Args, Debug)]
pub struct CheckArgs {
    /// Resume to analyze (PDF)
    #[arg(short, long, value_name = "FILE")]
    pub resume: PathBuf,

    /// Job description text
    #[arg(long, value_name = "TEXT", conflicts_with_all = ["job_file", "job_url"])]
    pub job_text: Option<String>,

    /// Path to file containing job description
    #[arg(long, value_name = "FILE", conflicts_with = "job_url")]
    pub job_file: Option<PathBuf>,

    /// URL to the job posting
    #[arg(short, long, value_name = "URL")]
    pub job_url: Option<String>,

    /// LinkedIn profile URL
    #[arg(long, value_name = "URL", default_value = "")]
    pub linkedin: String,

    /// GitHub profile URL
    #[arg(long, value_name = "URL", default_value = "")]
    pub github: String,

    /// Kind of analysis to request
    #[arg(short, long, value_enum, default_value_t = ModeArg::Review)]
    pub mode: ModeArg,
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum ModeArg {
    /// HR-manager style evaluation
    Review,
    /// ATS percentage match with missing keywords
    Match,
}

impl From<ModeArg> for AnalysisMode {
    fn from(mode: ModeArg) -> Self {
        match mode {
            ModeArg::Review => AnalysisMode::Review,
            ModeArg::Match => AnalysisMode::Match,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_command_parses() {
        let args = Args::try_parse_from([
            "protrack",
            "build",
            "--input",
            "form.toml",
            "--compact-header",
        ])
        .unwrap();

        match args.command {
            Command::Build(build) => {
                assert_eq!(build.input, PathBuf::from("form.toml"));
                assert!(build.output.is_none());
                assert!(build.compact_header);
            }
            other => panic!("expected build, got {other:?}"),
        }
        assert_eq!(args.config, PathBuf::from("config.toml"));
    }

    #[test]
    fn test_check_command_defaults_to_review() {
        let args = Args::try_parse_from([
            "protrack",
            "check",
            "--resume",
            "cv.pdf",
            "--job-text",
            "Rust developer",
        ])
        .unwrap();

        match args.command {
            Command::Check(check) => {
                assert_eq!(check.mode, ModeArg::Review);
                assert_eq!(check.job_text.as_deref(), Some("Rust developer"));
                assert_eq!(check.linkedin, "");
            }
            other => panic!("expected check, got {other:?}"),
        }
    }

    #[test]
    fn test_job_sources_conflict() {
        let result = Args::try_parse_from([
            "protrack",
            "check",
            "--resume",
            "cv.pdf",
            "--job-text",
            "a",
            "--job-file",
            "jd.txt",
        ]);
        assert!(result.is_err());
    }
}
