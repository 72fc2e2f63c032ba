//! Console progress sink used by the scenarios and the demo CLI.

use vouch_core::ProgressSink;

/// Prints each notice on its own line with an `[*]` marker.
#[derive(Debug, Default, Clone, Copy)]
pub struct ConsoleSink;

impl ProgressSink for ConsoleSink {
    fn info(&self, message: &str) {
        println!("  [*] {message}");
    }
}
