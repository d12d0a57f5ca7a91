//! In-Memory Adapters
//!
//! Implementations of the archive and result ports that keep everything
//! in process memory.
//!
//! ## Usage
//!
//! ```ignore
//! use adapters::memory::{InMemoryResponseArchive, InMemoryResultWriter};
//!
//! let archive = Arc::new(InMemoryResponseArchive::new());
//! let writer = Arc::new(InMemoryResultWriter::new());
//! ```

mod response_archive;
mod result_writer;

pub use response_archive::InMemoryResponseArchive;
pub use result_writer::InMemoryResultWriter;
