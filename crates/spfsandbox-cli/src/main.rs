//! CLI entry point for spfsandbox.
//!
//! This module is intentionally thin: it handles argument parsing, I/O, and exit codes.
//! All business logic lives in the `spfsandbox-app` crate.

use anyhow::Context;
use camino::{Utf8Path, Utf8PathBuf};
use clap::{Parser, Subcommand};
use spfsandbox_app::{
    EvalInput, ExplainOutput, format_explanation, format_not_found, format_rules,
    parse_report_json, render_markdown, render_text, run_eval, run_explain, run_rules,
    serialize_report, to_renderable,
};
use spfsandbox_types::EvalReport;
use tracing::debug;
use tracing_subscriber::{EnvFilter, fmt};

#[derive(Parser, Debug)]
#[command(
    name = "spfsandbox",
    version,
    about = "Evaluate addresses against SPF ip4/ip6 range rules"
)]
struct Cli {
    /// Path to spfsandbox config TOML. A missing file means no rules.
    #[arg(long, default_value = "spfsandbox.toml", global = true)]
    config: Utf8PathBuf,

    #[command(subcommand)]
    cmd: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Evaluate one or more addresses and print `address<TAB>outcome` lines.
    Eval {
        /// Addresses to evaluate, e.g. 192.168.1.10 or 2001:db8::1.
        #[arg(required = true)]
        addresses: Vec<String>,

        /// Where to write the JSON report (not written unless set).
        #[arg(long)]
        report_out: Option<Utf8PathBuf>,

        /// Write a Markdown report as well.
        #[arg(long)]
        write_markdown: bool,

        /// Where to write the Markdown report (if enabled).
        #[arg(long, default_value = "artifacts/spfsandbox/eval.md")]
        markdown_out: Utf8PathBuf,
    },

    /// Render markdown from an existing JSON report.
    Md {
        /// Path to the JSON report file.
        #[arg(long, default_value = "artifacts/spfsandbox/report.json")]
        report: Utf8PathBuf,

        /// Where to write the Markdown output (if not specified, prints to stdout).
        #[arg(long, short)]
        output: Option<Utf8PathBuf>,
    },

    /// Explain what an outcome (allow, softfail, unknown) means for mail delivery.
    Explain {
        /// Outcome name or alias (e.g. "pass", "soft-fail", "ignore").
        outcome: String,
    },

    /// List compiled rules in evaluation order with their derived patterns.
    Rules,
}

fn main() -> anyhow::Result<()> {
    fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let result = match cli.cmd {
        Commands::Eval {
            ref addresses,
            ref report_out,
            write_markdown,
            ref markdown_out,
        } => cmd_eval(
            &cli.config,
            addresses,
            report_out.as_deref(),
            write_markdown.then_some(markdown_out.as_path()),
        ),
        Commands::Md {
            ref report,
            ref output,
        } => cmd_md(report, output.as_deref()),
        Commands::Explain { ref outcome } => cmd_explain(outcome),
        Commands::Rules => cmd_rules(&cli.config),
    };

    if let Err(err) = result {
        eprintln!("spfsandbox error: {err:#}");
        std::process::exit(1);
    }
    Ok(())
}

/// A missing config is allowed (no rules); any other read failure is an error.
fn read_config(path: &Utf8Path) -> anyhow::Result<String> {
    match std::fs::read_to_string(path) {
        Ok(text) => Ok(text),
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
            debug!(%path, "config not found; evaluating without rules");
            Ok(String::new())
        }
        Err(err) => Err(err).with_context(|| format!("read config: {}", path)),
    }
}

fn cmd_eval(
    config: &Utf8Path,
    addresses: &[String],
    report_out: Option<&Utf8Path>,
    markdown_out: Option<&Utf8Path>,
) -> anyhow::Result<()> {
    let config_text = read_config(config)?;

    let output = run_eval(EvalInput {
        config_text: &config_text,
        addresses,
    })?;

    let renderable = to_renderable(&output.report);
    print!("{}", render_text(&renderable));

    if let Some(path) = report_out {
        write_report_file(path, &output.report).context("write report json")?;
    }
    if let Some(path) = markdown_out {
        write_text_file(path, &render_markdown(&renderable)).context("write markdown")?;
    }

    Ok(())
}

fn write_report_file(path: &Utf8Path, report: &EvalReport) -> anyhow::Result<()> {
    let data = serialize_report(report)?;
    write_text_file(path, &data)
}

fn write_text_file(path: &Utf8Path, text: &str) -> anyhow::Result<()> {
    if let Some(parent) = path.parent()
        && !parent.as_str().is_empty()
    {
        std::fs::create_dir_all(parent).with_context(|| format!("create directory: {}", parent))?;
    }
    std::fs::write(path, text).with_context(|| format!("write: {}", path))?;
    Ok(())
}

fn cmd_md(report_path: &Utf8Path, output: Option<&Utf8Path>) -> anyhow::Result<()> {
    let report_text = std::fs::read_to_string(report_path)
        .with_context(|| format!("read report: {}", report_path))?;
    let report = parse_report_json(&report_text)?;
    let md = render_markdown(&to_renderable(&report));

    if let Some(out_path) = output {
        write_text_file(out_path, &md).context("write markdown output")?;
    } else {
        print!("{}", md);
    }

    Ok(())
}

fn cmd_explain(outcome: &str) -> anyhow::Result<()> {
    match run_explain(outcome) {
        ExplainOutput::Found(exp) => {
            print!("{}", format_explanation(&exp));
            Ok(())
        }
        ExplainOutput::NotFound {
            identifier,
            available_outcomes,
        } => {
            eprint!("{}", format_not_found(&identifier, available_outcomes));
            std::process::exit(1);
        }
    }
}

fn cmd_rules(config: &Utf8Path) -> anyhow::Result<()> {
    let config_text = read_config(config)?;
    let lines = run_rules(&config_text)?;
    print!("{}", format_rules(&lines));
    Ok(())
}
