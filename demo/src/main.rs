//! VOUCH reference engines demo CLI
//!
//! Runs the built-in scenarios, or verifies every entity declared in a TOML
//! manifest and exits non-zero if any of them fails.
//!
//! Usage:
//!   cargo run -p demo -- run-all
//!   cargo run -p demo -- port-audit
//!   cargo run -p demo -- payload-readiness
//!   cargo run -p demo -- verify crates/vouch-ref-engines/manifests/sample.toml --json

use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tracing::warn;
use tracing_subscriber::EnvFilter;

use vouch_contracts::error::{VouchError, VouchResult};
use vouch_core::{TracingSink, VerificationEngine};
use vouch_ref_engines::{
    scenarios::{payload_readiness, port_audit},
    ConsoleSink, Entity, Manifest,
};

// ── CLI definition ────────────────────────────────────────────────────────────

/// Deferred, fail-fast verification demo.
#[derive(Parser)]
#[command(
    name = "demo",
    about = "VOUCH reference engines demo",
    long_about = "Runs VOUCH demo scenarios, or verifies the ports and payloads\n\
                  declared in a TOML manifest."
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Run both scenarios in sequence.
    RunAll,
    /// Scenario 1: verify and repair ports.
    PortAudit,
    /// Scenario 2: configure a payload field by field.
    PayloadReadiness,
    /// Verify every entity declared in a manifest.
    Verify {
        /// Path to the TOML manifest.
        manifest: PathBuf,
        /// Print each confirmation as JSON instead of a summary line.
        #[arg(long)]
        json: bool,
    },
}

// ── Entry point ───────────────────────────────────────────────────────────────

fn main() -> ExitCode {
    // Set RUST_LOG=debug to see every rule evaluation.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_target(false)
        .with_writer(io::stderr)
        .compact()
        .init();

    let cli = Cli::parse();

    let result = match cli.command {
        Command::RunAll => run_all().map(|()| true),
        Command::PortAudit => port_audit::run_scenario().map(|()| true),
        Command::PayloadReadiness => payload_readiness::run_scenario().map(|()| true),
        Command::Verify { manifest, json } => verify_manifest(&manifest, json),
    };

    match result {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::FAILURE,
        Err(e) => {
            eprintln!("Demo error: {}", e);
            ExitCode::FAILURE
        }
    }
}

// ── Commands ──────────────────────────────────────────────────────────────────

fn run_all() -> VouchResult<()> {
    port_audit::run_scenario()?;
    payload_readiness::run_scenario()?;
    Ok(())
}

/// Verify each entity in the manifest. Returns `Ok(false)` if any entity
/// failed verification; configuration errors are returned as `Err`.
fn verify_manifest(path: &Path, json: bool) -> VouchResult<bool> {
    let manifest = Manifest::from_file(path)?;
    let entities = manifest.entities()?;

    let failures = report(&entities, json, &mut io::stdout().lock()).map_err(|e| {
        VouchError::ConfigError {
            reason: format!("failed to write report: {}", e),
        }
    })?;
    Ok(failures == 0)
}

/// Verify `entities` and write the outcome to `out`, returning the number of
/// failures.
///
/// With `json` set, `out` receives exactly one JSON confirmation per passing
/// entity. Progress notices go to `tracing` and failures plus the summary go
/// to stderr.
fn report(entities: &[Entity], json: bool, out: &mut impl Write) -> io::Result<usize> {
    let engine = if json {
        VerificationEngine::new(Box::new(TracingSink))
    } else {
        VerificationEngine::new(Box::new(ConsoleSink))
    };

    let mut failures = 0usize;
    for entity in entities {
        match entity.verify_with(&engine) {
            Ok(verified) if json => match serde_json::to_string(&verified) {
                Ok(line) => writeln!(out, "{line}")?,
                Err(e) => warn!(entity = %verified.entity, error = %e, "could not encode confirmation"),
            },
            Ok(verified) => writeln!(
                out,
                "PASS  {} ({} rule(s))",
                verified.entity, verified.rules_checked
            )?,
            Err(e) => {
                failures += 1;
                eprintln!("FAIL  {}: {}", entity.name(), e.message());
            }
        }
    }

    let summary = format!(
        "{} of {} entities verified",
        entities.len() - failures,
        entities.len()
    );
    if json {
        eprintln!("{summary}");
    } else {
        writeln!(out, "{summary}")?;
    }
    Ok(failures)
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use vouch_ref_engines::Manifest;

    use super::report;

    const SAMPLE: &str = include_str!("../../crates/vouch-ref-engines/manifests/sample.toml");

    fn run(json: bool) -> (usize, String) {
        let entities = Manifest::from_toml_str(SAMPLE)
            .unwrap()
            .entities()
            .unwrap();
        let mut out = Vec::new();
        let failures = report(&entities, json, &mut out).unwrap();
        (failures, String::from_utf8(out).unwrap())
    }

    /// In JSON mode every stdout line must be a confirmation object.
    #[test]
    fn test_json_report_is_only_confirmations() {
        let (failures, out) = run(true);

        assert_eq!(failures, 2);
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines.len(), 3, "unexpected output: {out}");
        for line in lines {
            let value: serde_json::Value = serde_json::from_str(line)
                .unwrap_or_else(|e| panic!("line is not JSON ({e}): {line}"));
            assert!(value["entity"].is_string());
            assert!(value["pass_id"].is_string());
        }
    }

    #[test]
    fn test_text_report_ends_with_summary() {
        let (failures, out) = run(false);

        assert_eq!(failures, 2);
        assert_eq!(out.lines().filter(|l| l.starts_with("PASS")).count(), 3);
        assert_eq!(out.lines().last(), Some("3 of 5 entities verified"));
    }
}
