//! The verification engine: runs an entity's rules in order and stops at the
//! first one that fails.
//!
//! A pass looks like:
//!
//!   notice("Verifying <name> ...") → rule 0 → rule 1 → … → notice("<name> verified!")
//!
//! The first rule whose check returns false ends the pass with
//! `VouchError::VerificationFailed` carrying that rule's message. Later rules
//! are not evaluated and the closing notice is not emitted. Nothing is cached
//! between passes.

use tracing::{debug, info, warn};

use vouch_contracts::{
    error::{VouchError, VouchResult},
    verify::{PassId, Verified},
};

use crate::traits::{ProgressSink, Verifiable};

/// The default sink: forwards notices to `tracing` at info level.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingSink;

impl ProgressSink for TracingSink {
    fn info(&self, message: &str) {
        info!("{message}");
    }
}

/// Runs verification passes, reporting progress through a `ProgressSink`.
pub struct VerificationEngine {
    sink: Box<dyn ProgressSink>,
}

impl VerificationEngine {
    /// Create an engine that sends its notices to `sink`.
    pub fn new(sink: Box<dyn ProgressSink>) -> Self {
        Self { sink }
    }

    /// Run every rule of `entity` in registration order.
    ///
    /// # Errors
    ///
    /// Returns `VouchError::VerificationFailed` for the first rule whose check
    /// evaluates to false. This is the only error the engine produces.
    pub fn verify<E: Verifiable>(&self, entity: &E) -> VouchResult<Verified> {
        let name = entity.entity_name();
        let pass_id = PassId::new();
        let rules = entity.rules();

        self.sink.info(&format!("Verifying {name} ..."));

        for (index, rule) in rules.iter().enumerate() {
            debug!(pass_id = %pass_id, entity = %name, index, "evaluating rule");

            if !rule.check(entity) {
                let message = rule.message(entity);
                warn!(
                    pass_id = %pass_id,
                    entity = %name,
                    index,
                    %message,
                    "rule failed"
                );
                return Err(VouchError::VerificationFailed { message });
            }
        }

        self.sink.info(&format!("{name} verified!"));
        debug!(
            pass_id = %pass_id,
            entity = %name,
            rules_checked = rules.len(),
            "verification complete"
        );

        Ok(Verified::new(pass_id, name, rules.len()))
    }
}

impl Default for VerificationEngine {
    fn default() -> Self {
        Self::new(Box::new(TracingSink))
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use std::sync::{
        atomic::{AtomicUsize, Ordering},
        Arc, Mutex,
    };

    use vouch_contracts::error::VouchError;

    use crate::{
        registry::RuleRegistry,
        traits::{ProgressSink, Verifiable},
    };

    use super::VerificationEngine;

    // ── Mock helpers ─────────────────────────────────────────────────────────

    /// A sink that records every notice for later inspection.
    #[derive(Default)]
    struct RecordingSink {
        notices: Mutex<Vec<String>>,
    }

    impl ProgressSink for RecordingSink {
        fn info(&self, message: &str) {
            self.notices.lock().unwrap().push(message.to_string());
        }
    }

    /// Minimal entity with a single mutable attribute.
    struct Widget {
        count: u32,
        rules: RuleRegistry<Widget>,
    }

    impl Widget {
        fn new(count: u32) -> Self {
            Self {
                count,
                rules: RuleRegistry::new(),
            }
        }
    }

    impl Verifiable for Widget {
        fn entity_name(&self) -> String {
            "widget".to_string()
        }

        fn rules(&self) -> &RuleRegistry<Self> {
            &self.rules
        }

        fn rules_mut(&mut self) -> &mut RuleRegistry<Self> {
            &mut self.rules
        }
    }

    fn engine() -> (VerificationEngine, Arc<RecordingSink>) {
        let sink = Arc::new(RecordingSink::default());
        (VerificationEngine::new(Box::new(Arc::clone(&sink))), sink)
    }

    // ── Tests ────────────────────────────────────────────────────────────────

    #[test]
    fn test_empty_registry_passes() {
        let (engine, _) = engine();
        let widget = Widget::new(0);

        let verified = engine.verify(&widget).unwrap();

        assert_eq!(verified.rules_checked, 0);
        assert_eq!(verified.entity, "widget");
    }

    #[test]
    fn test_all_rules_pass() {
        let (engine, sink) = engine();
        let mut widget = Widget::new(4);
        widget
            .rules_mut()
            .ensure("count must be positive", |w| w.count > 0)
            .ensure("count must be even", |w| w.count % 2 == 0);

        let verified = engine.verify(&widget).unwrap();

        assert_eq!(verified.rules_checked, 2);
        assert_eq!(
            *sink.notices.lock().unwrap(),
            vec!["Verifying widget ...", "widget verified!"]
        );
    }

    #[test]
    fn test_first_failure_is_reported() {
        let (engine, _) = engine();
        let mut widget = Widget::new(0);
        widget
            .rules_mut()
            .ensure("always fine", |_| true)
            .ensure("count must be positive", |w| w.count > 0)
            .ensure("count must be large", |w| w.count > 100);

        let err = engine.verify(&widget).unwrap_err();

        assert_eq!(
            err,
            VouchError::VerificationFailed {
                message: "count must be positive".to_string()
            }
        );
    }

    #[test]
    fn test_registration_order_decides_failure() {
        let (engine, _) = engine();

        let mut a_first = Widget::new(0);
        a_first
            .rules_mut()
            .ensure("rule A", |_| false)
            .ensure("rule B", |_| false);

        let mut b_first = Widget::new(0);
        b_first
            .rules_mut()
            .ensure("rule B", |_| false)
            .ensure("rule A", |_| false);

        assert_eq!(engine.verify(&a_first).unwrap_err().message(), "rule A");
        assert_eq!(engine.verify(&b_first).unwrap_err().message(), "rule B");
    }

    #[test]
    fn test_later_rules_not_evaluated_after_failure() {
        let (engine, sink) = engine();
        let evaluated = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&evaluated);

        let mut widget = Widget::new(0);
        widget
            .rules_mut()
            .ensure("fails", |_| false)
            .ensure("never reached", move |_| {
                counter.fetch_add(1, Ordering::SeqCst);
                true
            });

        assert!(engine.verify(&widget).is_err());
        assert_eq!(evaluated.load(Ordering::SeqCst), 0);
        // Only the opening notice is emitted on failure.
        assert_eq!(*sink.notices.lock().unwrap(), vec!["Verifying widget ..."]);
    }

    #[test]
    fn test_reverify_sees_mutated_state() {
        let (engine, _) = engine();
        let mut widget = Widget::new(0);
        widget
            .rules_mut()
            .register(|w| w.count > 0, |w| format!("count ({}) must be positive", w.count));

        let err = engine.verify(&widget).unwrap_err();
        assert_eq!(err.message(), "count (0) must be positive");

        widget.count = 5;
        assert!(engine.verify(&widget).is_ok());
        // Rules are not consumed by a pass.
        assert_eq!(widget.rules().len(), 1);
    }

    #[test]
    fn test_each_pass_gets_a_fresh_id() {
        let (engine, _) = engine();
        let widget = Widget::new(1);

        let first = engine.verify(&widget).unwrap();
        let second = engine.verify(&widget).unwrap();

        assert_ne!(first.pass_id, second.pass_id);
    }

    #[test]
    fn test_default_engine_via_trait() {
        let mut widget = Widget::new(0);
        widget.rules_mut().ensure("count must be positive", |w| w.count > 0);

        assert!(widget.verify().is_err());
        widget.count = 1;
        assert!(widget.verify().is_ok());
    }
}
