//! Scenario 2: Payload Readiness
//!
//! Configures a payload one field at a time. Each pass reports only the first
//! rule still violated, so the output walks through the missing fields in the
//! order the payload registered its rules.

use vouch_contracts::error::VouchResult;
use vouch_core::VerificationEngine;

use crate::{console::ConsoleSink, entities::PayloadEngine};

/// Run Scenario 2: Payload Readiness.
pub fn run_scenario() -> VouchResult<()> {
    println!("=== Scenario 2: Payload Readiness ===");
    println!();

    let engine = VerificationEngine::new(Box::new(ConsoleSink));
    let mut payload = PayloadEngine::new("bind_shell", "1.0")?;

    let steps: [(&str, fn(&mut PayloadEngine)); 4] = [
        ("description", |p| {
            p.description = "Binds a shell to a TCP port".to_string()
        }),
        ("authors", |p| p.authors.push("alice".to_string())),
        ("arch", |p| p.arch = "x86_64".to_string()),
        ("os", |p| p.os = Some("linux".to_string())),
    ];

    for (field, apply) in steps {
        if let Err(e) = engine.verify(&payload) {
            println!("  FAIL  {}", e.message());
        }
        println!("  set {field}");
        apply(&mut payload);
    }

    let verified = engine.verify(&payload)?;
    println!(
        "  PASS  {} ({} rule(s) checked)",
        verified.entity, verified.rules_checked
    );

    println!();
    println!("  Scenario 2 complete.");
    println!();

    Ok(())
}
