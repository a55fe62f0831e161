use std::path::Path;

use serde::{de::DeserializeOwned, Serialize};

use crate::error::{CompareError, Result};

/// Deserializes an object from a JSON file.
pub fn object_from_json<T: DeserializeOwned, P: AsRef<Path>>(file_path: P) -> Result<T> {
    let file_path = file_path.as_ref();
    let contents = std::fs::read_to_string(file_path).map_err(|source| CompareError::Io {
        path: file_path.to_path_buf(),
        source,
    })?;
    Ok(serde_json::from_str(&contents)?)
}

/// Serializes an object to a pretty JSON string.
pub fn object_to_json_string<T: Serialize>(object: &T) -> Result<String> {
    Ok(serde_json::to_string_pretty(object)?)
}
