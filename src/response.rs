//! The single JSON object printed by the CLI.

use std::fmt;
use std::path::Path;

use serde::{Deserialize, Serialize};

/// `{"success": true, "path": ...}` or `{"success": false, "error": ...}`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunResponse {
    pub success: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl RunResponse {
    pub fn ok(path: &Path) -> Self {
        Self {
            success: true,
            path: Some(path.display().to_string()),
            error: None,
        }
    }

    pub fn failure(msg: impl Into<String>) -> Self {
        Self {
            success: false,
            path: None,
            error: Some(msg.into()),
        }
    }
}

impl fmt::Display for RunResponse {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = serde_json::to_string(self).map_err(|_| fmt::Error)?;
        f.write_str(&s)
    }
}
