//! fetchgen CLI entrypoint
//! Parses command-line arguments and prints the generated stubs to stdout.

// Internal imports (std, crate)
use std::ffi::OsString;
use std::io::{self, Write};
use std::path::PathBuf;

// External imports (alphabetized)
use anyhow::Context;
use clap::Parser;
use fetchgen_core::{config::DEFAULT_INPUT, Config};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "fetchgen")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// The input swagger file (only supports json)
    #[arg(
        long = "in",
        value_name = "PATH",
        default_value = DEFAULT_INPUT,
        allow_hyphen_values = true
    )]
    input: PathBuf,
}

/// Long flags that may be spelled Go-style with a single dash.
const LONG_FLAGS: &[&str] = &["in", "help", "version"];

/// `rest` is an argument with one leading dash removed, e.g. `in=api.json`.
fn is_long_flag(rest: &str) -> bool {
    let name = rest.split_once('=').map_or(rest, |(name, _)| name);
    LONG_FLAGS.contains(&name)
}

/// Accept Go-style single-dash long flags (`-in file`, `-in=file`) by
/// rewriting them to `--in file`. The value following `--in` and everything
/// after a bare `--` are left alone.
fn normalize_args<I>(args: I) -> Vec<OsString>
where
    I: IntoIterator<Item = OsString>,
{
    let mut args = args.into_iter();
    let mut normalized: Vec<OsString> = args.next().into_iter().collect();

    while let Some(arg) = args.next() {
        let Some(s) = arg.to_str() else {
            normalized.push(arg);
            continue;
        };
        if s == "--" {
            normalized.push(arg);
            normalized.extend(args);
            break;
        }

        let flag = match s.strip_prefix('-') {
            Some(rest) if is_long_flag(rest) => format!("-{s}"),
            _ => s.to_string(),
        };
        let takes_value = flag == "--in";
        normalized.push(OsString::from(flag));
        if takes_value {
            normalized.extend(args.next());
        }
    }

    normalized
}

fn main() -> anyhow::Result<()> {
    // Initialize logging; stdout is reserved for generated code
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse_from(normalize_args(std::env::args_os()));
    tracing::debug!("Generating stubs from {}", cli.input.display());

    let config = Config::new(&cli.input);
    let output = fetchgen_core::generate(&config)
        .with_context(|| format!("Failed to generate stubs from {}", cli.input.display()))?;

    let mut stdout = io::stdout().lock();
    stdout
        .write_all(output.as_bytes())
        .context("Failed to write generated stubs to stdout")?;
    stdout.flush()?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> Vec<OsString> {
        list.iter().map(OsString::from).collect()
    }

    #[test]
    fn test_normalize_go_style_flag() {
        assert_eq!(
            normalize_args(args(&["fetchgen", "-in", "api.json"])),
            args(&["fetchgen", "--in", "api.json"])
        );
        assert_eq!(
            normalize_args(args(&["fetchgen", "-in=api.json"])),
            args(&["fetchgen", "--in=api.json"])
        );
    }

    #[test]
    fn test_normalize_leaves_other_args() {
        assert_eq!(
            normalize_args(args(&["fetchgen", "--in", "a.json"])),
            args(&["fetchgen", "--in", "a.json"])
        );
        assert_eq!(
            normalize_args(args(&["fetchgen", "-h"])),
            args(&["fetchgen", "-h"])
        );
        assert_eq!(
            normalize_args(args(&["fetchgen", "--", "-in"])),
            args(&["fetchgen", "--", "-in"])
        );
    }

    #[test]
    fn test_normalize_keeps_hyphenated_value() {
        assert_eq!(
            normalize_args(args(&["fetchgen", "-in", "-spec.json"])),
            args(&["fetchgen", "--in", "-spec.json"])
        );
        assert_eq!(
            normalize_args(args(&["fetchgen", "--in", "-in"])),
            args(&["fetchgen", "--in", "-in"])
        );
        assert_eq!(
            normalize_args(args(&["fetchgen", "-x", "-help"])),
            args(&["fetchgen", "-x", "--help"])
        );
    }

    #[test]
    fn test_cli_accepts_hyphenated_path() {
        let cli = Cli::try_parse_from(normalize_args(args(&["fetchgen", "-in", "-spec.json"])))
            .expect("hyphenated path is a valid value");
        assert_eq!(cli.input, PathBuf::from("-spec.json"));
    }

    #[test]
    fn test_cli_parses_input() {
        let cli = Cli::parse_from(normalize_args(args(&["fetchgen", "-in", "petstore.json"])));
        assert_eq!(cli.input, PathBuf::from("petstore.json"));

        let cli = Cli::parse_from(args(&["fetchgen"]));
        assert_eq!(cli.input, PathBuf::from("swagger.json"));
    }

    #[test]
    fn test_cli_definition() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }
}
