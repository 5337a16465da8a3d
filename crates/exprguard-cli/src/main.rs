//! CLI entry point for exprguard.
//!
//! This module is intentionally thin: it handles argument parsing, I/O, and exit codes.
//! All business logic lives in the `exprguard-app` crate.

use anyhow::Context;
use camino::{Utf8Path, Utf8PathBuf};
use clap::{Parser, Subcommand};
use exprguard_app::{
    format_summary, run_check, run_explain, serialize_report, verdict_exit_code, CheckInput,
    CheckTarget, ExplainOutput,
};
use exprguard_settings::Overrides;
use exprguard_types::ResourceAddress;
use tracing_subscriber::EnvFilter;

/// Config file read when `--config` is not given.
const DEFAULT_CONFIG_PATH: &str = "exprguard.toml";

/// Environment variable holding the log filter (e.g. `exprguard=debug`).
const LOG_ENV_VAR: &str = "EXPRGUARD_LOG";

#[derive(Parser, Debug)]
#[command(
    name = "exprguard",
    version,
    about = "Reject unresolved ${...} expressions in configuration attributes"
)]
struct Cli {
    /// Path to exprguard config TOML (defaults to exprguard.toml, which may be absent).
    #[arg(long, global = true)]
    config: Option<Utf8PathBuf>,

    /// Additional attribute name to watch (repeatable).
    #[arg(long = "attribute", short = 'a', global = true)]
    attributes: Vec<String>,

    /// Where to write the JSON report (not written if omitted).
    #[arg(long, global = true)]
    report_out: Option<Utf8PathBuf>,

    #[command(subcommand)]
    cmd: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Validate a resource snapshot (JSON object of attribute values).
    CheckResource {
        /// Path to the snapshot JSON.
        #[arg(long)]
        input: Utf8PathBuf,

        /// Address of the resource (e.g. /subsystem=datasources/data-source=ExampleDS).
        #[arg(long, default_value = "/")]
        address: String,
    },

    /// Evaluate an operation (JSON with "operation", optional "address", and parameters).
    CheckOperation {
        /// Path to the operation JSON.
        #[arg(long)]
        input: Utf8PathBuf,
    },

    /// Explain a check_id or code with remediation guidance.
    Explain {
        /// The check_id (e.g., "guard.reject_expressions") or code (e.g., "expression_not_allowed").
        identifier: String,
    },

    /// Print the JSON schema of the config file.
    Schema,
}

fn main() -> anyhow::Result<()> {
    init_tracing();
    let cli = Cli::parse();

    match &cli.cmd {
        Commands::CheckResource { input, address } => {
            cmd_check(&cli, input, Some(address.as_str()))
        }
        Commands::CheckOperation { input } => cmd_check(&cli, input, None),
        Commands::Explain { identifier } => cmd_explain(identifier),
        Commands::Schema => {
            println!("{}", exprguard_settings::config_schema()?);
            Ok(())
        }
    }
}

fn init_tracing() {
    let filter = EnvFilter::try_from_env(LOG_ENV_VAR).unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

/// Check a resource snapshot (when `resource_address` is set) or an operation.
fn cmd_check(
    cli: &Cli,
    input_path: &Utf8Path,
    resource_address: Option<&str>,
) -> anyhow::Result<()> {
    let result = (|| -> anyhow::Result<i32> {
        let cfg_text = read_config(cli.config.as_deref())?;
        let input_text = std::fs::read_to_string(input_path)
            .with_context(|| format!("read input: {}", input_path))?;

        let target = match resource_address {
            Some(address) => CheckTarget::Resource {
                snapshot_json: &input_text,
                address: address
                    .parse::<ResourceAddress>()
                    .context("parse --address")?,
            },
            None => CheckTarget::Operation {
                operation_json: &input_text,
            },
        };

        let output = run_check(CheckInput {
            config_text: &cfg_text,
            overrides: Overrides {
                attributes: cli.attributes.clone(),
            },
            target,
        })?;
        tracing::debug!(verdict = ?output.report.verdict, "check finished");

        if let Some(report_out) = &cli.report_out {
            write_report_file(report_out, &output.report).context("write report json")?;
        }
        print!("{}", format_summary(&output.report));

        Ok(verdict_exit_code(output.report.verdict))
    })();

    match result {
        Ok(code) => {
            if code != 0 {
                std::process::exit(code);
            }
            Ok(())
        }
        Err(err) => {
            eprintln!("exprguard error: {err:#}");
            std::process::exit(1);
        }
    }
}

/// Only an absent default config means an empty watch set; every other read failure is an error.
fn read_config(explicit: Option<&Utf8Path>) -> anyhow::Result<String> {
    let path = explicit.unwrap_or(Utf8Path::new(DEFAULT_CONFIG_PATH));
    match std::fs::read_to_string(path) {
        Ok(text) => Ok(text),
        Err(err) if explicit.is_none() && err.kind() == std::io::ErrorKind::NotFound => {
            tracing::debug!(%path, "no config file; watching only --attribute names");
            Ok(String::new())
        }
        Err(err) => Err(err).with_context(|| format!("read config: {}", path)),
    }
}

fn write_report_file(path: &Utf8Path, report: &exprguard_types::GuardReport) -> anyhow::Result<()> {
    if let Some(parent) = path.parent()
        && !parent.as_str().is_empty()
    {
        std::fs::create_dir_all(parent).with_context(|| format!("create directory: {}", parent))?;
    }
    let data = serialize_report(report).context("serialize report")?;
    std::fs::write(path, data).with_context(|| format!("write report: {}", path))?;
    Ok(())
}

fn cmd_explain(identifier: &str) -> anyhow::Result<()> {
    match run_explain(identifier) {
        ExplainOutput::Found(exp) => {
            print!("{}", exprguard_app::format_explanation(&exp));
            Ok(())
        }
        ExplainOutput::NotFound {
            identifier,
            available_check_ids,
            available_codes,
        } => {
            eprint!(
                "{}",
                exprguard_app::format_not_found(&identifier, available_check_ids, available_codes)
            );
            std::process::exit(1);
        }
    }
}
