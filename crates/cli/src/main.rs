//! CLI pour le complément inverse

use anyhow::{Context, Result};
use clap::Parser;
use revcomp_core::{init_logging, level_from_verbosity, log_operation, TablePolicy};
use std::io::{self, BufWriter, Read, Write};
use std::path::PathBuf;

mod settings;

#[derive(Parser)]
#[command(name = "revcomp")]
#[command(about = "Complément inverse de séquences nucléotidiques", long_about = None)]
#[command(version)]
struct Cli {
    /// Séquences à traiter; sans argument, l'entrée standard forme une seule séquence
    sequences: Vec<String>,

    /// Table de complémentation (prioritaire sur la configuration)
    #[arg(short, long, value_enum)]
    table: Option<TableArg>,

    /// Fichier de configuration (TOML, JSON ou YAML)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Niveau de verbosité
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

#[derive(clap::ValueEnum, Clone, Copy, Debug)]
enum TableArg {
    Iupac,
    Legacy,
}

impl From<TableArg> for TablePolicy {
    fn from(arg: TableArg) -> Self {
        match arg {
            TableArg::Iupac => TablePolicy::Iupac,
            TableArg::Legacy => TablePolicy::Legacy,
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(level_from_verbosity(cli.verbose));

    let stdout = io::stdout();
    run(cli, io::stdin().lock(), BufWriter::new(stdout.lock()))
}

/// Charge la configuration puis traite les arguments, ou l'entrée si aucun
/// argument n'est donné
fn run<R: Read, W: Write>(cli: Cli, mut input: R, mut writer: W) -> Result<()> {
    let mut config = settings::load(cli.config.as_deref())?;
    if let Some(table) = cli.table {
        config.table = table.into();
    }
    tracing::info!(table = %config.table, "configuration chargée");

    if cli.sequences.is_empty() {
        let mut buffer = Vec::new();
        input
            .read_to_end(&mut buffer)
            .context("Lecture de l'entrée standard")?;

        let rc = log_operation!("stdin", { config.transform(strip_line_ending(&buffer)) })?;
        write_line(&mut writer, &rc)?;
    } else {
        let results = log_operation!("arguments", { config.transform_batch(&cli.sequences) })?;
        for rc in &results {
            write_line(&mut writer, rc)?;
        }
    }

    writer.flush().context("Écriture de la sortie")?;
    Ok(())
}

/// Retire un unique `\n` ou `\r\n` final
fn strip_line_ending(input: &[u8]) -> &[u8] {
    match input.strip_suffix(b"\n") {
        Some(line) => line.strip_suffix(b"\r").unwrap_or(line),
        None => input,
    }
}

fn write_line<W: Write>(writer: &mut W, seq: &[u8]) -> Result<()> {
    writer.write_all(seq).context("Écriture de la sortie")?;
    writer.write_all(b"\n").context("Écriture de la sortie")?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_strip_line_ending() {
        assert_eq!(strip_line_ending(b"ACGT\n"), b"ACGT");
        assert_eq!(strip_line_ending(b"ACGT\r\n"), b"ACGT");
        assert_eq!(strip_line_ending(b"ACGT\n\n"), b"ACGT\n");
        assert_eq!(strip_line_ending(b"ACGT"), b"ACGT");
        assert_eq!(strip_line_ending(b"ACGT\r"), b"ACGT\r");
        assert_eq!(strip_line_ending(b""), b"");
    }

    #[test]
    fn test_parse_arguments() {
        let cli = Cli::try_parse_from(["revcomp", "-t", "legacy", "-vv", "GATTACA", "AC-GT"]).unwrap();
        assert_eq!(cli.sequences, vec!["GATTACA", "AC-GT"]);
        assert!(matches!(cli.table, Some(TableArg::Legacy)));
        assert_eq!(cli.verbose, 2);
    }

    fn run_with(args: &[&str], stdin: &[u8]) -> Vec<u8> {
        let cli = Cli::try_parse_from(args).unwrap();
        let mut out = Vec::new();
        run(cli, stdin, &mut out).unwrap();
        out
    }

    #[test]
    fn test_run_stdin_single_sequence() {
        assert_eq!(run_with(&["revcomp"], b"GATTACA\r\n"), b"TGTAATC\n");
        assert_eq!(run_with(&["revcomp"], b"ACGT\nAC\n"), b"GT\nACGT\n");
        assert_eq!(run_with(&["revcomp"], b""), b"\n");
    }

    #[test]
    fn test_run_arguments_in_order() {
        assert_eq!(
            run_with(&["revcomp", "GATTACA", "A", "AC-GT"], b"ignored"),
            b"TGTAATC\nT\nAC-GT\n"
        );
    }

    #[test]
    fn test_run_table_flag_overrides_config_file() {
        let path = std::env::temp_dir().join(format!("revcomp-run-{}.toml", std::process::id()));
        std::fs::write(&path, "table = \"iupac\"\n").unwrap();
        let config = path.to_str().unwrap();

        let from_file = run_with(&["revcomp", "-c", config, "A`"], b"");
        let overridden = run_with(&["revcomp", "-c", config, "-t", "legacy", "A`"], b"");
        let from_stdin = run_with(&["revcomp", "-c", config, "-t", "legacy"], b"`A\n");
        std::fs::remove_file(&path).unwrap();

        assert_eq!(from_file, b"`T\n");
        assert_eq!(overridden, b"@T\n");
        assert_eq!(from_stdin, b"T@\n");
    }

    #[test]
    fn test_write_line() {
        let mut out = Vec::new();
        write_line(&mut out, b"TGTAATC").unwrap();
        assert_eq!(out, b"TGTAATC\n");
    }
}
