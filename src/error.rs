//! 统一错误类型：手写 Display，不引入第三方错误派生。
//! 构造失败保留 anyhow 源错误。
use std::{error::Error as StdError, fmt};

#[derive(Debug)]
pub enum RegistryError {
    /// 同一能力类型下名称重复
    DuplicateName {
        capability: &'static str,
        name: String,
    },
    /// 同一能力类型下存在多个 primary
    AmbiguousPrimary {
        capability: &'static str,
        candidates: Vec<String>,
    },
    /// 按类型解析：无 primary 且候选不唯一（候选为空表示该类型未注册）
    NoPrimary {
        capability: &'static str,
        candidates: Vec<String>,
    },
    /// 按名称解析：名称不存在
    NotFound {
        capability: &'static str,
        name: String,
    },
    /// 构造函数失败，build 立即中止
    Construction {
        capability: &'static str,
        name: String,
        source: anyhow::Error,
    },
    /// 实例无法向下转型为请求的类型
    TypeMismatch {
        capability: &'static str,
        name: String,
    },
    /// 配置加载失败
    Config(String),
}

impl fmt::Display for RegistryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RegistryError::DuplicateName { capability, name } => {
                write!(f, "component `{name}` already registered for {capability}")
            }
            RegistryError::AmbiguousPrimary {
                capability,
                candidates,
            } => write!(
                f,
                "more than one primary component for {capability}: {}",
                candidates.join(", ")
            ),
            RegistryError::NoPrimary {
                capability,
                candidates,
            } if candidates.is_empty() => {
                write!(f, "no component registered for {capability}")
            }
            RegistryError::NoPrimary {
                capability,
                candidates,
            } => write!(
                f,
                "{} components registered for {capability} but none is primary: {}",
                candidates.len(),
                candidates.join(", ")
            ),
            RegistryError::NotFound { capability, name } => {
                write!(f, "no component named `{name}` for {capability}")
            }
            RegistryError::Construction {
                capability,
                name,
                source,
            } => write!(f, "failed to construct `{name}` ({capability}): {source}"),
            RegistryError::TypeMismatch { capability, name } => {
                write!(f, "component `{name}` does not hold an instance of {capability}")
            }
            RegistryError::Config(msg) => write!(f, "invalid registry config: {msg}"),
        }
    }
}

impl StdError for RegistryError {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        match self {
            RegistryError::Construction { source, .. } => {
                let inner: &(dyn StdError + 'static) = source.as_ref();
                Some(inner)
            }
            _ => None,
        }
    }
}

pub type Result<T = ()> = std::result::Result<T, RegistryError>;
