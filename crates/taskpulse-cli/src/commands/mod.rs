pub mod analyze;
pub mod config;
pub mod prioritize;

use serde::de::DeserializeOwned;
use std::io::Read;
use std::path::Path;

/// Read a JSON document from a file, or from stdin when the path is `-`.
pub fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T, Box<dyn std::error::Error>> {
    let content = if path.as_os_str() == "-" {
        let mut buf = String::new();
        std::io::stdin().read_to_string(&mut buf)?;
        buf
    } else {
        std::fs::read_to_string(path)
            .map_err(|e| format!("cannot read {}: {e}", path.display()))?
    };

    let value = serde_json::from_str(&content)
        .map_err(|e| format!("invalid input in {}: {e}", path.display()))?;
    Ok(value)
}
