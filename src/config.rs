use crate::error::{RegistryError, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RegistryConfig {
    /// 同名定义后注册者覆盖先注册者（发出警告）；默认拒绝
    pub allow_definition_overriding: bool,
    /// 某类型只有一个定义时，无名解析直接返回它（无论是否 primary）
    pub sole_candidate_fallback: bool,
}

impl Default for RegistryConfig {
    fn default() -> Self {
        Self {
            allow_definition_overriding: false,
            sole_candidate_fallback: true,
        }
    }
}

impl RegistryConfig {
    pub fn from_json_str(s: &str) -> Result<Self> {
        serde_json::from_str(s).map_err(|e| RegistryError::Config(e.to_string()))
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path)
            .map_err(|e| RegistryError::Config(format!("{}: {e}", path.display())))?;
        Self::from_json_str(&raw)
    }
}
