//! The rule registry: an ordered, append-only list of deferred checks.
//!
//! A `Rule` pairs a predicate with a failure message. Both are evaluated
//! against the entity handed in at verification time, so a rule always sees
//! the entity's current state rather than a snapshot taken at registration.

use std::fmt;

/// A predicate over the owning entity. `true` means the rule is satisfied.
pub type CheckFn<E> = Box<dyn Fn(&E) -> bool + Send + Sync>;

/// Produces the failure message for a rule. Only called once the check failed.
pub type MessageFn<E> = Box<dyn Fn(&E) -> String + Send + Sync>;

/// One unit of deferred verification.
pub struct Rule<E> {
    check: CheckFn<E>,
    message: MessageFn<E>,
}

impl<E> Rule<E> {
    /// Wrap a predicate and its lazily computed failure message.
    pub fn new<C, M>(check: C, message: M) -> Self
    where
        C: Fn(&E) -> bool + Send + Sync + 'static,
        M: Fn(&E) -> String + Send + Sync + 'static,
    {
        Self {
            check: Box::new(check),
            message: Box::new(message),
        }
    }

    /// Evaluate the predicate against `entity`.
    pub fn check(&self, entity: &E) -> bool {
        (self.check)(entity)
    }

    /// Render the failure message against `entity`.
    pub fn message(&self, entity: &E) -> String {
        (self.message)(entity)
    }
}

impl<E> fmt::Debug for Rule<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Rule").finish_non_exhaustive()
    }
}

/// The ordered collection of rules owned by one entity.
///
/// Rules can only be appended. Iteration order is registration order, which
/// decides which violation a verification pass reports first. Duplicates are
/// kept.
pub struct RuleRegistry<E> {
    rules: Vec<Rule<E>>,
}

impl<E> RuleRegistry<E> {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self { rules: Vec::new() }
    }

    /// Append a rule whose failure message is computed from the entity.
    ///
    /// This is the single primitive every combinator is built on.
    pub fn register<C, M>(&mut self, check: C, message: M) -> &mut Self
    where
        C: Fn(&E) -> bool + Send + Sync + 'static,
        M: Fn(&E) -> String + Send + Sync + 'static,
    {
        self.rules.push(Rule::new(check, message));
        self
    }

    /// Append a custom predicate with a fixed failure message.
    pub fn ensure<C>(&mut self, message: impl Into<String>, check: C) -> &mut Self
    where
        C: Fn(&E) -> bool + Send + Sync + 'static,
    {
        let message = message.into();
        self.register(check, move |_| message.clone())
    }

    /// Number of registered rules.
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Iterate rules in registration order.
    pub fn iter(&self) -> std::slice::Iter<'_, Rule<E>> {
        self.rules.iter()
    }
}

impl<E> Default for RuleRegistry<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E> fmt::Debug for RuleRegistry<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RuleRegistry")
            .field("len", &self.rules.len())
            .finish()
    }
}

impl<'a, E> IntoIterator for &'a RuleRegistry<E> {
    type Item = &'a Rule<E>;
    type IntoIter = std::slice::Iter<'a, Rule<E>>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::RuleRegistry;

    struct Counter {
        count: u32,
    }

    #[test]
    fn new_registry_is_empty() {
        let rules: RuleRegistry<Counter> = RuleRegistry::new();
        assert!(rules.is_empty());
        assert_eq!(rules.len(), 0);
    }

    #[test]
    fn register_preserves_insertion_order() {
        let mut rules: RuleRegistry<Counter> = RuleRegistry::new();
        rules
            .ensure("first", |_| true)
            .ensure("second", |_| true)
            .ensure("third", |_| true);

        let counter = Counter { count: 0 };
        let messages: Vec<String> = rules.iter().map(|r| r.message(&counter)).collect();
        assert_eq!(messages, vec!["first", "second", "third"]);
    }

    #[test]
    fn duplicate_rules_are_kept() {
        let mut rules: RuleRegistry<Counter> = RuleRegistry::new();
        rules.ensure("same", |_| true).ensure("same", |_| true);
        assert_eq!(rules.len(), 2);
    }

    #[test]
    fn message_is_computed_from_current_state() {
        let mut rules: RuleRegistry<Counter> = RuleRegistry::new();
        rules.register(|c| c.count > 0, |c| format!("count ({}) must be positive", c.count));

        let rule = rules.iter().next().unwrap();
        let mut counter = Counter { count: 0 };
        assert!(!rule.check(&counter));
        assert_eq!(rule.message(&counter), "count (0) must be positive");

        counter.count = 3;
        assert!(rule.check(&counter));
        assert_eq!(rule.message(&counter), "count (3) must be positive");
    }
}
