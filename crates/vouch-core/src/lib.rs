//! # vouch-core
//!
//! Deferred, fail-fast verification for stateful entities.
//!
//! This crate provides:
//! - `RuleRegistry`, the append-only list of checks an entity owns
//! - the `Verifiable` and `ProgressSink` traits
//! - `VerificationEngine`, which runs a registry against its entity
//!
//! ## Usage
//!
//! ```rust,ignore
//! use vouch_core::{RuleRegistry, Verifiable};
//!
//! entity.rules_mut().ensure("count must be positive", |e| e.count > 0);
//! let verified = entity.verify()?;
//! ```

pub mod engine;
pub mod registry;
pub mod traits;

pub use engine::{TracingSink, VerificationEngine};
pub use registry::{Rule, RuleRegistry};
pub use traits::{ProgressSink, Verifiable};
