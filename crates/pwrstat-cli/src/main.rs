//! `pwrstat`: decode and report device power telemetry dumps.

use std::io::Read;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::error::ErrorKind;
use clap::{Parser, Subcommand};
use pwrstat_cli::{
    decode_dump, encode_power, parse_hex, parse_status, render_flags, CliConfig, CliError,
    OutputFormat, RecordKind,
};
use pwrstat_protocol::PowerStatus;
use tracing::debug;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "pwrstat", version, about = "Decode device power telemetry dumps")]
struct Cli {
    /// YAML configuration file.
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Output format (overrides the configuration file).
    #[arg(long, global = true, value_enum)]
    format: Option<OutputFormat>,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Decode a hex dump of a record.
    Decode {
        /// Record type held by the dump.
        #[arg(value_enum)]
        kind: RecordKind,
        /// Hex dump; read from stdin when omitted.
        hex: Option<String>,
    },

    /// Encode a power status record to hex.
    Encode {
        /// Status byte (decimal or 0x hex).
        #[arg(long)]
        status: String,
        /// Driver voltage in volts.
        #[arg(long, allow_negative_numbers = true)]
        voltage: f32,
        /// Raw current sense reading.
        #[arg(long)]
        current_sense: u16,
        /// Reference voltage in volts.
        #[arg(long, allow_negative_numbers = true)]
        ref_level: f32,
    },

    /// Print the flag names of a status byte.
    Flags {
        /// Status byte (decimal or 0x hex).
        status: String,
    },
}

fn init_tracing(level: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn run<R: Read>(cli: Cli, format: OutputFormat, mut stdin: R) -> Result<String, CliError> {
    match cli.command {
        Commands::Decode { kind, hex } => {
            let text = match hex {
                Some(text) => text,
                None => {
                    let mut text = String::new();
                    stdin.read_to_string(&mut text)?;
                    text
                }
            };
            let data = parse_hex(&text)?;
            debug!("decoding {} bytes as {:?}", data.len(), kind);
            decode_dump(kind, &data, format)
        }
        Commands::Encode {
            status,
            voltage,
            current_sense,
            ref_level,
        } => {
            let record = PowerStatus {
                status: parse_status(&status)?,
                voltage,
                current_sense,
                ref_level,
            };
            Ok(encode_power(&record))
        }
        Commands::Flags { status } => render_flags(parse_status(&status)?, format),
    }
}

/// Exit code for a command line clap refused to parse.
///
/// Help and version requests succeed; every usage error exits 1.
fn parse_failure_code(err: &clap::Error) -> ExitCode {
    match err.kind() {
        ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => ExitCode::SUCCESS,
        _ => ExitCode::FAILURE,
    }
}

fn main() -> ExitCode {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            let _ = e.print();
            return parse_failure_code(&e);
        }
    };

    let config = match CliConfig::load(cli.config.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("error: {}", e);
            return ExitCode::FAILURE;
        }
    };
    init_tracing(&config.effective_log_level(cli.verbose));
    let format = config.output_format(cli.format);

    match run(cli, format, std::io::stdin()) {
        Ok(output) => {
            println!("{}", output);
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("error: {}", e);
            ExitCode::FAILURE
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::{empty, Cursor};

    const POWER_DUMP: &str = "40 41 45 70 a4 01 f4 40 20 00 00";

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(args).expect("command line should parse")
    }

    #[test]
    fn test_encode_negative_readings() {
        let cli = parse(&[
            "pwrstat",
            "encode",
            "--status",
            "0x40",
            "--voltage",
            "-1.5",
            "--current-sense",
            "1",
            "--ref-level",
            "2.5",
        ]);
        let output = run(cli, OutputFormat::Text, empty()).unwrap();
        assert_eq!(output, "40bfc00000000140200000");

        let cli = parse(&[
            "pwrstat", "encode", "--status", "0", "--voltage", "0", "--current-sense", "0",
            "--ref-level", "-2.5",
        ]);
        let output = run(cli, OutputFormat::Text, empty()).unwrap();
        assert_eq!(output, "00000000000000c0200000");
    }

    #[test]
    fn test_format_flag_overrides_config() {
        let config = CliConfig::from_yaml("format: json\n").unwrap();

        let cli = parse(&["pwrstat", "flags", "0x40"]);
        let format = config.output_format(cli.format);
        assert_eq!(format, OutputFormat::Json);
        assert_eq!(
            run(cli, format, empty()).unwrap(),
            r#"{"status":64,"flags":"powered"}"#
        );

        let cli = parse(&["pwrstat", "--format", "text", "flags", "0x40"]);
        let format = config.output_format(cli.format);
        assert_eq!(format, OutputFormat::Text);
        assert_eq!(run(cli, format, empty()).unwrap(), "+powered");

        // Global flags are accepted after the subcommand too
        let cli = parse(&["pwrstat", "flags", "0x40", "--format", "text"]);
        assert_eq!(cli.format, Some(OutputFormat::Text));
    }

    #[test]
    fn test_decode_reads_stdin_without_argument() {
        let cli = parse(&["pwrstat", "decode", "power"]);
        let output = run(cli, OutputFormat::Text, Cursor::new(format!("{}\n", POWER_DUMP))).unwrap();
        assert_eq!(
            output,
            "Driver voltage=12.3, current sense=500, reference voltage=2.50, status(40)=+powered."
        );

        let cli = parse(&["pwrstat", "decode", "power", POWER_DUMP]);
        let output = run(cli, OutputFormat::Text, empty()).unwrap();
        assert!(output.ends_with("status(40)=+powered."));
    }

    #[test]
    fn test_decode_empty_stdin_fails() {
        let cli = parse(&["pwrstat", "decode", "info"]);
        let err = run(cli, OutputFormat::Text, empty()).unwrap_err();
        match err {
            CliError::Protocol(e) => assert!(e.is_truncated()),
            other => panic!("expected truncated record, got {:?}", other),
        }
    }

    #[test]
    fn test_verbosity_feeds_log_level() {
        let config = CliConfig::default();
        assert_eq!(config.effective_log_level(parse(&["pwrstat", "flags", "1"]).verbose), "warn");
        assert_eq!(config.effective_log_level(parse(&["pwrstat", "-vv", "flags", "1"]).verbose), "debug");
        assert_eq!(
            config.effective_log_level(parse(&["pwrstat", "flags", "1", "-v", "-v", "-v"]).verbose),
            "trace"
        );
    }

    #[test]
    fn test_usage_errors_exit_failure() {
        let err = Cli::try_parse_from(["pwrstat", "encode", "--status", "1"]).unwrap_err();
        assert_eq!(parse_failure_code(&err), ExitCode::FAILURE);

        let err = Cli::try_parse_from(["pwrstat", "decode", "voltage"]).unwrap_err();
        assert_eq!(parse_failure_code(&err), ExitCode::FAILURE);

        let err = Cli::try_parse_from(["pwrstat"]).unwrap_err();
        assert_eq!(parse_failure_code(&err), ExitCode::FAILURE);
    }

    #[test]
    fn test_help_and_version_exit_success() {
        let err = Cli::try_parse_from(["pwrstat", "--help"]).unwrap_err();
        assert_eq!(parse_failure_code(&err), ExitCode::SUCCESS);

        let err = Cli::try_parse_from(["pwrstat", "--version"]).unwrap_err();
        assert_eq!(parse_failure_code(&err), ExitCode::SUCCESS);
    }

    #[test]
    fn test_invalid_status_is_error() {
        let cli = parse(&["pwrstat", "flags", "0x+40"]);
        let err = run(cli, OutputFormat::Text, empty()).unwrap_err();
        assert!(matches!(err, CliError::InvalidStatus(_)));
    }
}
