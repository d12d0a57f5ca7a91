//! Adapters - Implementations of ports and input sources.
//!
//! - `memory` - In-process archive and result table
//! - `payload_source` - File/stdin reader used by the command-line entry point

pub mod memory;
mod payload_source;

pub use memory::{InMemoryResponseArchive, InMemoryResultWriter};
pub use payload_source::read_payload;
