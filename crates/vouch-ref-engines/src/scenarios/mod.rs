//! Demo scenarios for the reference entities.
//!
//! Each scenario builds entities, verifies them through a console-reporting
//! engine and prints the outcome of every pass.

pub mod payload_readiness;
pub mod port_audit;
