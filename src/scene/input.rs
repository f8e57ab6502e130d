use crate::foundation::error::{FormError, FormResult};
use crate::scene::model::FormInput;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

impl FormInput {
    /// Decode an input document from a JSON string.
    pub fn from_json_str(s: &str) -> FormResult<Self> {
        serde_json::from_str(s)
            .map_err(|e| FormError::input_decode(format!("parse form input JSON: {e}")))
    }

    /// Decode an input document from a JSON reader.
    pub fn from_reader<R: std::io::Read>(r: R) -> FormResult<Self> {
        serde_json::from_reader(r)
            .map_err(|e| FormError::input_decode(format!("parse form input JSON: {e}")))
    }

    /// Decode an input document from a JSON file on disk.
    pub fn from_path(path: impl AsRef<Path>) -> FormResult<Self> {
        let path = path.as_ref();
        let f = File::open(path).map_err(|e| {
            FormError::input_decode(format!("open form input JSON '{}': {e}", path.display()))
        })?;
        Self::from_reader(BufReader::new(f))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/scene/input.rs"]
mod tests;
