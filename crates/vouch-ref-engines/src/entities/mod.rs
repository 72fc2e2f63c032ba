//! Reference entities that carry their own verification rules.

pub mod payload;
pub mod port;

pub use payload::PayloadEngine;
pub use port::{Port, PROTOCOLS};
