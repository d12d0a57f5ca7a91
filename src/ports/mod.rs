//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the weighting engine and the surrounding I/O layer. Adapters implement
//! these ports.
//!
//! - `ResponseArchive` - Raw submissions as received
//! - `ResultWriter` - Computed weights and consistency figures

mod response_archive;
mod result_writer;

pub use response_archive::{ArchivedResponse, ResponseArchive};
pub use result_writer::ResultWriter;
