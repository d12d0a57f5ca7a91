//! Payload source - Reads a raw submission from a file or stdin.

use std::io::Read;
use std::path::Path;

use crate::domain::foundation::DomainError;

/// Reads the submission payload from `path`, or from stdin when `path` is `None`.
pub fn read_payload(path: Option<&Path>) -> Result<String, DomainError> {
    match path {
        Some(path) => std::fs::read_to_string(path).map_err(|e| {
            DomainError::input_unavailable(format!("Failed to read submission file: {}", e))
                .with_detail("path", path.display().to_string())
        }),
        None => {
            let mut payload = String::new();
            std::io::stdin()
                .read_to_string(&mut payload)
                .map_err(|e| DomainError::input_unavailable(format!("Failed to read stdin: {}", e)))?;
            Ok(payload)
        }
    }
}
