use std::path::Path;

use crate::error::EvalError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Deserialize)]
pub struct EvalConfig {
    #[serde(default)]
    pub blank_id: usize,
}

impl EvalConfig {
    pub const DEFAULT_BLANK_ID: usize = 0;

    pub fn load(path: &Path) -> Result<Self, EvalError> {
        let data =
            std::fs::read_to_string(path).map_err(|e| EvalError::io("read eval config", e))?;
        serde_json::from_str(&data).map_err(|e| EvalError::json("parse eval config", e))
    }
}

impl Default for EvalConfig {
    fn default() -> Self {
        Self {
            blank_id: Self::DEFAULT_BLANK_ID,
        }
    }
}
