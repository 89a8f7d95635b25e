//! CLI argument parsing for fillin

use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "fillin")]
#[command(author, version, about = "Fill placeholders in a text file interactively", long_about = None)]
pub struct Cli {
    /// Input text file containing placeholders
    pub input: PathBuf,

    /// Output file (stdout when omitted)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Seed values from this YAML/JSON file
    #[arg(short, long)]
    pub load: Option<PathBuf>,

    /// Persist collected values to this YAML/JSON file
    #[arg(short, long)]
    pub save: Option<PathBuf>,

    /// Path to config file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Literal text opening a placeholder (default "$<")
    #[arg(short = 'L', long)]
    pub left: Option<String>,

    /// Literal text closing a placeholder (default ">")
    #[arg(short = 'R', long)]
    pub right: Option<String>,

    /// Regex fragment matched as the placeholder key (default \w+)
    #[arg(short = 'p', long)]
    pub pattern: Option<String>,

    /// Use stored values without re-prompting
    #[arg(short = 'd', long)]
    pub use_defaults: bool,

    /// Do not print source lines before prompting
    #[arg(short = 'q', long)]
    pub no_echo: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_parse_input_only() {
        let cli = Cli::parse_from(["fillin", "template.txt"]);
        assert_eq!(cli.input, PathBuf::from("template.txt"));
        assert!(cli.output.is_none());
        assert!(cli.load.is_none());
        assert!(cli.save.is_none());
        assert!(!cli.use_defaults);
        assert!(!cli.no_echo);
    }

    #[test]
    fn test_cli_parse_requires_input() {
        assert!(Cli::try_parse_from(["fillin"]).is_err());
    }

    #[test]
    fn test_cli_parse_output_and_data_files() {
        let cli = Cli::parse_from([
            "fillin", "-o", "out.txt", "-l", "in.yml", "-s", "out.yml", "template.txt",
        ]);
        assert_eq!(cli.output, Some(PathBuf::from("out.txt")));
        assert_eq!(cli.load, Some(PathBuf::from("in.yml")));
        assert_eq!(cli.save, Some(PathBuf::from("out.yml")));
    }

    #[test]
    fn test_cli_parse_delimiters() {
        let cli = Cli::parse_from(["fillin", "--left", "{{", "--right", "}}", "template.txt"]);
        assert_eq!(cli.left.as_deref(), Some("{{"));
        assert_eq!(cli.right.as_deref(), Some("}}"));
    }

    #[test]
    fn test_cli_parse_flags() {
        let cli = Cli::parse_from(["fillin", "-d", "-q", "template.txt"]);
        assert!(cli.use_defaults);
        assert!(cli.no_echo);
    }

    #[test]
    fn test_cli_with_config() {
        let cli = Cli::parse_from(["fillin", "-c", "/path/to/config.yml", "template.txt"]);
        assert_eq!(cli.config, Some(PathBuf::from("/path/to/config.yml")));
    }
}
