//! Scenario 1: Port Audit
//!
//! Verifies a handful of ports, then repairs a misconfigured one in place and
//! verifies it again to show that rules read the port's current state.

use vouch_contracts::error::VouchResult;
use vouch_core::VerificationEngine;

use crate::{console::ConsoleSink, entities::Port};

/// Run Scenario 1: Port Audit.
pub fn run_scenario() -> VouchResult<()> {
    println!("=== Scenario 1: Port Audit ===");
    println!();

    let engine = VerificationEngine::new(Box::new(ConsoleSink));

    let ports = [Port::tcp(22), Port::udp(161), Port::new("icmp", 0)];
    for port in &ports {
        match engine.verify(port) {
            Ok(verified) => println!("  PASS  {} ({} rule(s))", port, verified.rules_checked),
            Err(e) => println!("  FAIL  {}: {}", port, e.message()),
        }
    }
    println!();

    let mut port = Port::tcp(0);
    println!("  Repairing port with no number set:");
    if let Err(e) = engine.verify(&port) {
        println!("  FAIL  {}", e.message());
    }

    port.number = 8443;
    let verified = engine.verify(&port)?;
    println!("  PASS  {} (pass {})", port, verified.pass_id);

    println!();
    println!("  Scenario 1 complete.");
    println!();

    Ok(())
}
