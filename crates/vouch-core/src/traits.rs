//! Trait definitions at the seams of the verification framework.
//!
//! - `Verifiable`: an entity that owns a `RuleRegistry` over itself
//! - `ProgressSink`: where the engine sends its informational notices

use std::sync::Arc;

use vouch_contracts::{error::VouchResult, verify::Verified};

use crate::{engine::VerificationEngine, registry::RuleRegistry};

/// An entity carrying deferred rules about its own state.
///
/// Implementors create an empty registry at construction and populate it
/// during their setup phase. The engine borrows the entity immutably for the
/// whole pass, so the entity cannot be mutated while it is being verified.
pub trait Verifiable: Sized {
    /// Identifier used in progress notices (e.g. `"port 80/tcp"`).
    fn entity_name(&self) -> String;

    /// The rules registered so far, in registration order.
    fn rules(&self) -> &RuleRegistry<Self>;

    /// Mutable access for registering further rules after construction.
    fn rules_mut(&mut self) -> &mut RuleRegistry<Self>;

    /// Run a verification pass with the default engine, which reports
    /// progress through `tracing`.
    fn verify(&self) -> VouchResult<Verified> {
        VerificationEngine::default().verify(self)
    }
}

/// Sink for the engine's "verifying" / "verified" notices.
///
/// The notices carry no functional weight. Implementations must not fail.
pub trait ProgressSink: Send + Sync {
    /// Emit one informational message.
    fn info(&self, message: &str);
}

impl<S: ProgressSink + ?Sized> ProgressSink for Arc<S> {
    fn info(&self, message: &str) {
        (**self).info(message)
    }
}

impl<S: ProgressSink + ?Sized> ProgressSink for Box<S> {
    fn info(&self, message: &str) {
        (**self).info(message)
    }
}
