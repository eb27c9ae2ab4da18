//! Command-line arguments.

use std::path::PathBuf;

/// Options for a game run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunOptions {
    /// Seed for pipe placement; `None` draws one from the OS.
    pub seed: Option<u64>,
    /// Write diagnostics to this file.
    pub log_path: Option<PathBuf>,
}

/// What the binary was asked to do.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Run(RunOptions),
    Help,
    Version,
}

pub const USAGE: &str = "\
Flappy - guide the bird through the pipes

Usage: flappy [options]

Options:
  --seed <n>     Seed pipe placement for a reproducible run
  --log <file>   Write diagnostics to <file> (filter with RUST_LOG)
  --version      Show version information
  --help         Show this help message

Controls: Space/Up/Enter to flap or restart, Esc/Q to quit";

/// Parse arguments, excluding the program name.
pub fn parse_args<I, S>(args: I) -> Result<Command, String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut options = RunOptions::default();
    let mut args = args.into_iter();

    while let Some(arg) = args.next() {
        match arg.as_ref() {
            "--help" | "-h" => return Ok(Command::Help),
            "--version" | "-v" => return Ok(Command::Version),
            "--seed" => {
                let value = args.next().ok_or("--seed needs a value")?;
                let seed = value
                    .as_ref()
                    .parse::<u64>()
                    .map_err(|_| format!("Invalid seed: {}", value.as_ref()))?;
                options.seed = Some(seed);
            }
            "--log" => {
                let value = args.next().ok_or("--log needs a file path")?;
                options.log_path = Some(PathBuf::from(value.as_ref()));
            }
            other => return Err(format!("Unknown argument: {}", other)),
        }
    }

    Ok(Command::Run(options))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_args_runs_with_defaults() {
        let empty: [&str; 0] = [];
        assert_eq!(parse_args(empty), Ok(Command::Run(RunOptions::default())));
    }

    #[test]
    fn test_help_and_version() {
        assert_eq!(parse_args(["--help"]), Ok(Command::Help));
        assert_eq!(parse_args(["-v"]), Ok(Command::Version));
        assert_eq!(parse_args(["--seed", "1", "--version"]), Ok(Command::Version));
    }

    #[test]
    fn test_seed_and_log() {
        assert_eq!(
            parse_args(["--seed", "42", "--log", "flappy.log"]),
            Ok(Command::Run(RunOptions {
                seed: Some(42),
                log_path: Some(PathBuf::from("flappy.log")),
            }))
        );
    }

    #[test]
    fn test_bad_arguments() {
        assert_eq!(
            parse_args(["--seed", "abc"]),
            Err("Invalid seed: abc".to_string())
        );
        assert_eq!(
            parse_args(["--seed"]),
            Err("--seed needs a value".to_string())
        );
        assert_eq!(
            parse_args(["--fast"]),
            Err("Unknown argument: --fast".to_string())
        );
    }
}
