//! # vouch-ref-engines
//!
//! Reference entities for the VOUCH verification framework.
//!
//! - [`entities::Port`]: a TCP/UDP port whose protocol and number are checked
//!   on every pass.
//! - [`entities::PayloadEngine`]: a payload configured field by field and
//!   verified once it is believed ready.
//! - [`manifest::Manifest`]: declares entities in TOML so they can be
//!   verified in bulk.

pub mod console;
pub mod entities;
pub mod manifest;
pub mod scenarios;

pub use console::ConsoleSink;
pub use manifest::{Entity, Manifest};
