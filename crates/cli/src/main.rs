//! Coloquial CLI — convert Portuguese text line by line into its colloquial
//! Brazilian spelling.

use std::io::{self, IsTerminal, Read, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Parser;

use coloquial_core::{convert_text, TransformResult};

// ─── CLI ─────────────────────────────────────────────────────────

#[derive(Parser, Debug)]
#[command(
    name = "coloquial",
    about = "Respell Portuguese text the way it is spoken in Brazil",
    version
)]
struct Cli {
    /// Text file to convert (reads stdin when omitted)
    input: Option<PathBuf>,

    /// Print one JSON object per input line
    #[arg(long, default_value_t = false)]
    json: bool,

    /// Show verbose output
    #[arg(short, long, default_value_t = false)]
    verbose: bool,
}

// ─── Main ────────────────────────────────────────────────────────

fn main() {
    let cli = Cli::parse();

    let log_level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level))
        .format_timestamp(None)
        .init();

    if let Err(e) = run(&cli) {
        log::error!("{:#}", e);
        std::process::exit(1);
    }
}

fn run(cli: &Cli) -> Result<()> {
    let input = read_input(cli.input.as_deref())?;
    let stdout = io::stdout();
    let mut out = stdout.lock();

    let lines = input_lines(&input);
    log::debug!("Converting {} line(s)", lines.len());

    for line in lines {
        let result = convert_text(line);
        if cli.json {
            write_json(&mut out, &result)?;
        } else {
            write_report(&mut out, &result)?;
        }
    }
    out.flush()?;
    Ok(())
}

// ─── Helpers ─────────────────────────────────────────────────────

/// Read the whole input from a file, or from stdin.
fn read_input(path: Option<&Path>) -> Result<String> {
    match path {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read input file: {}", path.display())),
        None => {
            let mut stdin = io::stdin();
            if stdin.is_terminal() {
                eprintln!("Enter the text to convert (Ctrl+D to end):");
            }
            let mut buf = String::new();
            stdin
                .read_to_string(&mut buf)
                .context("Failed to read stdin")?;
            Ok(buf)
        }
    }
}

/// Split input into lines; empty input still yields one (empty) line.
fn input_lines(input: &str) -> Vec<&str> {
    let lines: Vec<&str> = input.lines().collect();
    if lines.is_empty() {
        vec![""]
    } else {
        lines
    }
}

/// Human-readable block for one converted line.
fn write_report(out: &mut impl Write, result: &TransformResult) -> io::Result<()> {
    writeln!(out, "Word Transformations:")?;
    writeln!(out, "{}", result.before)?;
    writeln!(out, "{}", result.after)?;
    for explanation in &result.explanations {
        writeln!(out, "{}", explanation)?;
    }
    writeln!(out)?;
    writeln!(out, "Word Combinations:")?;
    for combination in &result.combinations {
        writeln!(out, "{}", combination)?;
    }
    writeln!(out)
}

fn write_json(out: &mut impl Write, result: &TransformResult) -> Result<()> {
    serde_json::to_writer(&mut *out, result).context("Failed to serialize result")?;
    writeln!(out)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_read_input_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "estou aqui").unwrap();
        writeln!(file, "não").unwrap();
        let input = read_input(Some(file.path())).unwrap();
        assert_eq!(input_lines(&input), vec!["estou aqui", "não"]);
    }

    #[test]
    fn test_read_input_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("nope.txt");
        let err = read_input(Some(missing.as_path())).unwrap_err();
        assert!(format!("{:#}", err).contains("Failed to read input file"));
    }

    #[test]
    fn test_input_lines_empty() {
        assert_eq!(input_lines(""), vec![""]);
    }

    #[test]
    fn test_report_shape() {
        let result = TransformResult {
            before: "caza amarela".into(),
            after: "cazamarela".into(),
            explanations: vec!["casa: s → z between vowels".into()],
            combinations: vec!["caza + amarela → cazamarela (Join same letter/sound)".into()],
        };
        let mut buf = Vec::new();
        write_report(&mut buf, &result).unwrap();
        let text = String::from_utf8(buf).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(
            lines,
            vec![
                "Word Transformations:",
                "caza amarela",
                "cazamarela",
                "casa: s → z between vowels",
                "",
                "Word Combinations:",
                "caza + amarela → cazamarela (Join same letter/sound)",
                "",
            ]
        );
    }

    #[test]
    fn test_json_line() {
        let result = convert_text("estou");
        let mut buf = Vec::new();
        write_json(&mut buf, &result).unwrap();
        let text = String::from_utf8(buf).unwrap();
        assert!(text.ends_with('\n'));
        let value: serde_json::Value = serde_json::from_str(text.trim_end()).unwrap();
        assert_eq!(value["after"], "tô");
        assert_eq!(value["combinations"].as_array().map(Vec::len), Some(0));
    }

    #[test]
    fn test_cli_parses_flags() {
        let cli = Cli::parse_from(["coloquial", "--json", "-v", "in.txt"]);
        assert!(cli.json);
        assert!(cli.verbose);
        assert_eq!(cli.input, Some(PathBuf::from("in.txt")));
    }
}
