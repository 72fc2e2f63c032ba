//! Named, typed attribute accessors and the presence categories.
//!
//! An `Attribute` records *how* to read a value from an entity, never the
//! value itself. Combinators call the accessor at verification time, so a rule
//! reflects whatever the entity holds when the pass runs.

use std::collections::{BTreeMap, BTreeSet, HashMap, HashSet};
use std::fmt;

/// A display name paired with a getter on the entity's concrete type.
///
/// ```rust,ignore
/// fn protocol(port: &Port) -> &str { &port.protocol }
///
/// const PROTOCOL: Attribute<Port, str> = Attribute::new("protocol", protocol);
/// ```
pub struct Attribute<E, V: ?Sized> {
    name: &'static str,
    get: for<'a> fn(&'a E) -> &'a V,
}

impl<E, V: ?Sized> Attribute<E, V> {
    pub const fn new(name: &'static str, get: for<'a> fn(&'a E) -> &'a V) -> Self {
        Self { name, get }
    }

    /// The name used in failure messages.
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Read the attribute's current value from `entity`.
    pub fn get<'a>(&self, entity: &'a E) -> &'a V {
        (self.get)(entity)
    }
}

impl<E, V: ?Sized> Clone for Attribute<E, V> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<E, V: ?Sized> Copy for Attribute<E, V> {}

impl<E, V: ?Sized> fmt::Debug for Attribute<E, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Attribute").field(&self.name).finish()
    }
}

/// Whether a value counts as "set" for the presence combinator.
///
/// Each value category declares its own notion of unset:
/// - strings, sequences, maps and sets are unset when empty
/// - `Option` is unset when `None`
/// - numbers are unset when zero
///
/// For floats "zero" means `== 0.0`: `-0.0` is unset, `NaN` is set.
pub trait Presence {
    fn is_set(&self) -> bool;
}

impl Presence for str {
    fn is_set(&self) -> bool {
        !self.is_empty()
    }
}

impl Presence for String {
    fn is_set(&self) -> bool {
        !self.is_empty()
    }
}

impl<T> Presence for [T] {
    fn is_set(&self) -> bool {
        !self.is_empty()
    }
}

impl<T> Presence for Vec<T> {
    fn is_set(&self) -> bool {
        !self.is_empty()
    }
}

impl<K, V, S> Presence for HashMap<K, V, S> {
    fn is_set(&self) -> bool {
        !self.is_empty()
    }
}

impl<T, S> Presence for HashSet<T, S> {
    fn is_set(&self) -> bool {
        !self.is_empty()
    }
}

impl<K, V> Presence for BTreeMap<K, V> {
    fn is_set(&self) -> bool {
        !self.is_empty()
    }
}

impl<T> Presence for BTreeSet<T> {
    fn is_set(&self) -> bool {
        !self.is_empty()
    }
}

impl<T> Presence for Option<T> {
    fn is_set(&self) -> bool {
        self.is_some()
    }
}

macro_rules! numeric_presence {
    ($($ty:ty),* $(,)?) => {
        $(
            impl Presence for $ty {
                fn is_set(&self) -> bool {
                    *self != 0
                }
            }
        )*
    };
}

numeric_presence!(u8, u16, u32, u64, u128, usize, i8, i16, i32, i64, i128, isize);

impl Presence for f32 {
    fn is_set(&self) -> bool {
        *self != 0.0
    }
}

impl Presence for f64 {
    fn is_set(&self) -> bool {
        *self != 0.0
    }
}
