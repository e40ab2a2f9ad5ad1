use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "areafield")]
#[command(
    version,
    about = "Grid of axis-aligned areas with containment and overlap queries",
    long_about = None
)]
pub struct CliArgs {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Run a JSON script and print the JSON report
    Run(RunArgs),
    /// Parse a JSON script and check its grid size without running it
    Check(CommonArgs),
}

#[derive(Args, Debug, Clone)]
pub struct CommonArgs {
    /// Script file (JSON)
    pub script: PathBuf,

    /// Override the script's grid width
    #[arg(long, allow_negative_numbers = true)]
    pub width: Option<i32>,

    /// Override the script's grid height
    #[arg(long, allow_negative_numbers = true)]
    pub height: Option<i32>,

    /// Verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

#[derive(Args, Debug, Clone)]
pub struct RunArgs {
    #[command(flatten)]
    pub common: CommonArgs,

    /// Write the report to this file instead of stdout
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Emit single-line JSON
    #[arg(long)]
    pub compact: bool,
}

impl Command {
    pub fn common(&self) -> &CommonArgs {
        match self {
            Command::Run(args) => &args.common,
            Command::Check(args) => args,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_run() {
        let cli = CliArgs::try_parse_from([
            "areafield",
            "run",
            "script.json",
            "--width",
            "50",
            "-o",
            "out.json",
            "--compact",
            "-v",
        ])
        .unwrap();

        let Command::Run(args) = &cli.command else {
            panic!("expected run");
        };
        assert_eq!(args.common.script, PathBuf::from("script.json"));
        assert_eq!(args.common.width, Some(50));
        assert_eq!(args.common.height, None);
        assert_eq!(args.output, Some(PathBuf::from("out.json")));
        assert!(args.compact);
        assert!(cli.command.common().verbose);
    }

    #[test]
    fn test_parse_check_negative_override() {
        let cli =
            CliArgs::try_parse_from(["areafield", "check", "s.json", "--height", "-1"]).unwrap();
        assert_eq!(cli.command.common().height, Some(-1));
    }

    #[test]
    fn test_script_is_required() {
        assert!(CliArgs::try_parse_from(["areafield", "run"]).is_err());
    }
}
