//! Typed component registry: several named definitions per capability type,
//! one of them optionally marked primary for name-less resolution.
pub mod capability;
pub mod config;
pub mod declare;
pub mod definition;
pub mod error;
pub mod registry;

// 允许在本 crate 内通过 `mmg_registry::...` 自引用（供 proc-macro 展开使用）
extern crate self as mmg_registry;

pub mod prelude {
    pub use crate::capability::CapabilityId;
    pub use crate::config::RegistryConfig;
    pub use crate::definition::ComponentDefinition;
    pub use crate::error::{RegistryError, Result};
    pub use crate::registry::{Registry, RegistryBuilder};
}

pub use registry_macros::component;

// 宏展开所需的第三方路径，避免使用方自行依赖
#[doc(hidden)]
pub use anyhow;
#[doc(hidden)]
pub use inventory;
