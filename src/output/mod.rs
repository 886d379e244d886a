//! Output module
//!
//! Record sinks. The only production format is JSON Lines: one normalized
//! record per line, UTF-8, non-ASCII left unescaped, no envelope.

mod writer;

pub use writer::{open_output, JsonlWriter, RecordSink};
