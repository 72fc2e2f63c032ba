//! The predicate combinator library.
//!
//! Every combinator has the same shape: read one attribute through its
//! accessor, test it, and on failure report either the caller's message or a
//! default one built from the attribute name and the values involved. All of
//! them append through `RuleRegistry::register`.
//!
//! | combinator          | default message                               |
//! |---------------------|-----------------------------------------------|
//! | `verify_equal`      | `<name> (<actual>) must equal <expected>`     |
//! | `verify_not_equal`  | `<name> (<actual>) cannot equal <forbidden>`  |
//! | `verify_set`        | `<name> is not set`                           |
//! | `verify_match`      | `<name> (<actual>) must match <pattern>`      |
//! | `verify_no_match`   | `<name> (<actual>) cannot match <pattern>`    |
//! | `verify_in`         | `<name> (<actual>) must be one of <set>`      |
//! | `verify_not_in`     | `<name> (<actual>) cannot be one of <set>`    |

use std::borrow::Borrow;
use std::fmt::{Debug, Display};
use std::sync::Arc;

use vouch_core::RuleRegistry;

use crate::{
    attribute::{Attribute, Presence},
    pattern::Pattern,
};

/// Attribute-based rule constructors, available on every `RuleRegistry`.
///
/// `message` overrides the default failure message when `Some`.
pub trait Checks<E> {
    /// The attribute must equal `expected`.
    fn verify_equal<V, X>(
        &mut self,
        attr: Attribute<E, V>,
        expected: X,
        message: Option<&str>,
    ) -> &mut Self
    where
        V: PartialEq + Display + ?Sized + 'static,
        X: Borrow<V> + Display + Send + Sync + 'static;

    /// The attribute must differ from `forbidden`.
    fn verify_not_equal<V, X>(
        &mut self,
        attr: Attribute<E, V>,
        forbidden: X,
        message: Option<&str>,
    ) -> &mut Self
    where
        V: PartialEq + Display + ?Sized + 'static,
        X: Borrow<V> + Display + Send + Sync + 'static;

    /// The attribute must be set, per its `Presence` category.
    fn verify_set<V>(&mut self, attr: Attribute<E, V>, message: Option<&str>) -> &mut Self
    where
        V: Presence + ?Sized + 'static;

    /// The attribute must match `pattern`.
    fn verify_match<V>(
        &mut self,
        attr: Attribute<E, V>,
        pattern: Pattern,
        message: Option<&str>,
    ) -> &mut Self
    where
        V: AsRef<str> + Display + ?Sized + 'static;

    /// The attribute must not match `pattern`.
    fn verify_no_match<V>(
        &mut self,
        attr: Attribute<E, V>,
        pattern: Pattern,
        message: Option<&str>,
    ) -> &mut Self
    where
        V: AsRef<str> + Display + ?Sized + 'static;

    /// The attribute must be one of `allowed`.
    fn verify_in<V, X, I>(
        &mut self,
        attr: Attribute<E, V>,
        allowed: I,
        message: Option<&str>,
    ) -> &mut Self
    where
        V: PartialEq + Display + ?Sized + 'static,
        X: Borrow<V> + Debug + Send + Sync + 'static,
        I: IntoIterator<Item = X>;

    /// The attribute must not be one of `forbidden`.
    fn verify_not_in<V, X, I>(
        &mut self,
        attr: Attribute<E, V>,
        forbidden: I,
        message: Option<&str>,
    ) -> &mut Self
    where
        V: PartialEq + Display + ?Sized + 'static,
        X: Borrow<V> + Debug + Send + Sync + 'static,
        I: IntoIterator<Item = X>;
}

/// Register a rule whose check and message both read `state`.
///
/// `custom` replaces the default message when present.
fn attach<'a, E, T, C, M>(
    registry: &'a mut RuleRegistry<E>,
    state: T,
    custom: Option<&str>,
    check: C,
    default_message: M,
) -> &'a mut RuleRegistry<E>
where
    T: Send + Sync + 'static,
    C: Fn(&E, &T) -> bool + Send + Sync + 'static,
    M: Fn(&E, &T) -> String + Send + Sync + 'static,
{
    let state = Arc::new(state);
    let shared = Arc::clone(&state);
    let custom = custom.map(str::to_owned);

    registry.register(
        move |entity| check(entity, &state),
        move |entity| match &custom {
            Some(message) => message.clone(),
            None => default_message(entity, &shared),
        },
    )
}

impl<E: 'static> Checks<E> for RuleRegistry<E> {
    fn verify_equal<V, X>(
        &mut self,
        attr: Attribute<E, V>,
        expected: X,
        message: Option<&str>,
    ) -> &mut Self
    where
        V: PartialEq + Display + ?Sized + 'static,
        X: Borrow<V> + Display + Send + Sync + 'static,
    {
        attach(
            self,
            expected,
            message,
            move |e, expected| attr.get(e) == Borrow::<V>::borrow(expected),
            move |e, expected| {
                format!("{} ({}) must equal {}", attr.name(), attr.get(e), expected)
            },
        )
    }

    fn verify_not_equal<V, X>(
        &mut self,
        attr: Attribute<E, V>,
        forbidden: X,
        message: Option<&str>,
    ) -> &mut Self
    where
        V: PartialEq + Display + ?Sized + 'static,
        X: Borrow<V> + Display + Send + Sync + 'static,
    {
        attach(
            self,
            forbidden,
            message,
            move |e, forbidden| attr.get(e) != Borrow::<V>::borrow(forbidden),
            move |e, forbidden| {
                format!("{} ({}) cannot equal {}", attr.name(), attr.get(e), forbidden)
            },
        )
    }

    fn verify_set<V>(&mut self, attr: Attribute<E, V>, message: Option<&str>) -> &mut Self
    where
        V: Presence + ?Sized + 'static,
    {
        attach(
            self,
            (),
            message,
            move |e, _| attr.get(e).is_set(),
            move |_, _| format!("{} is not set", attr.name()),
        )
    }

    fn verify_match<V>(
        &mut self,
        attr: Attribute<E, V>,
        pattern: Pattern,
        message: Option<&str>,
    ) -> &mut Self
    where
        V: AsRef<str> + Display + ?Sized + 'static,
    {
        attach(
            self,
            pattern,
            message,
            move |e, pattern| pattern.is_match(AsRef::<str>::as_ref(attr.get(e))),
            move |e, pattern| {
                format!("{} ({}) must match {}", attr.name(), attr.get(e), pattern)
            },
        )
    }

    fn verify_no_match<V>(
        &mut self,
        attr: Attribute<E, V>,
        pattern: Pattern,
        message: Option<&str>,
    ) -> &mut Self
    where
        V: AsRef<str> + Display + ?Sized + 'static,
    {
        attach(
            self,
            pattern,
            message,
            move |e, pattern| !pattern.is_match(AsRef::<str>::as_ref(attr.get(e))),
            move |e, pattern| {
                format!("{} ({}) cannot match {}", attr.name(), attr.get(e), pattern)
            },
        )
    }

    fn verify_in<V, X, I>(
        &mut self,
        attr: Attribute<E, V>,
        allowed: I,
        message: Option<&str>,
    ) -> &mut Self
    where
        V: PartialEq + Display + ?Sized + 'static,
        X: Borrow<V> + Debug + Send + Sync + 'static,
        I: IntoIterator<Item = X>,
    {
        let allowed: Vec<X> = allowed.into_iter().collect();
        attach(
            self,
            allowed,
            message,
            move |e, allowed| contains(allowed, attr.get(e)),
            move |e, allowed| {
                format!("{} ({}) must be one of {:?}", attr.name(), attr.get(e), allowed)
            },
        )
    }

    fn verify_not_in<V, X, I>(
        &mut self,
        attr: Attribute<E, V>,
        forbidden: I,
        message: Option<&str>,
    ) -> &mut Self
    where
        V: PartialEq + Display + ?Sized + 'static,
        X: Borrow<V> + Debug + Send + Sync + 'static,
        I: IntoIterator<Item = X>,
    {
        let forbidden: Vec<X> = forbidden.into_iter().collect();
        attach(
            self,
            forbidden,
            message,
            move |e, forbidden| !contains(forbidden, attr.get(e)),
            move |e, forbidden| {
                format!("{} ({}) cannot be one of {:?}", attr.name(), attr.get(e), forbidden)
            },
        )
    }
}

fn contains<V, X>(values: &[X], actual: &V) -> bool
where
    V: PartialEq + ?Sized,
    X: Borrow<V>,
{
    values.iter().any(|value| Borrow::<V>::borrow(value) == actual)
}
