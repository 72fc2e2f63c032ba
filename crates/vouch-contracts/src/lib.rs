//! # vouch-contracts
//!
//! Shared error and confirmation types for the VOUCH verification framework.
//!
//! All crates in the workspace import from here. No verification logic lives
//! in this crate, only data definitions and error types.

pub mod error;
pub mod verify;
