//! # vouch-verify
//!
//! Attribute-based predicate combinators for the VOUCH framework.
//!
//! [`checks::Checks`] extends every [`vouch_core::RuleRegistry`] with the
//! equality, inequality, presence, pattern and membership combinators. Each
//! reads a named [`attribute::Attribute`] of the entity when the pass runs.
//!
//! ## Quick start
//!
//! ```rust,ignore
//! use vouch_verify::{Attribute, Checks};
//!
//! fn protocol(port: &Port) -> &str { &port.protocol }
//!
//! port.rules_mut()
//!     .verify_set(Attribute::new("protocol", protocol), None)
//!     .verify_in(Attribute::new("protocol", protocol), ["tcp", "udp"], None);
//! ```

pub mod attribute;
pub mod checks;
pub mod pattern;

pub use attribute::{Attribute, Presence};
pub use checks::Checks;
pub use pattern::Pattern;

// ── Tests ─────────────────────────────────────────────────────────────────────
