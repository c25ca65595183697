//! 单文件示例：两个 HTTP 客户端定义（不同连接超时），无名注入得到 primary，按名注入得到指定实例。

use mmg_registry::prelude::*;
use std::time::Duration;

// ---- 客户端配置：仅携带超时，不做真实网络调用 ----
#[derive(Debug)]
struct RestTemplate {
    connect_timeout: Duration,
}

impl RestTemplate {
    fn builder() -> RestTemplateBuilder {
        RestTemplateBuilder::default()
    }
}

#[derive(Default)]
struct RestTemplateBuilder {
    connect_timeout: Option<Duration>,
}

impl RestTemplateBuilder {
    fn connect_timeout(mut self, d: Duration) -> Self {
        self.connect_timeout = Some(d);
        self
    }
    fn build(self) -> RestTemplate {
        RestTemplate {
            connect_timeout: self.connect_timeout.unwrap_or(Duration::from_secs(30)),
        }
    }
}

// 10 秒：primary
#[mmg_registry::component(name = "fooRestTemplate", primary)]
fn foo_rest_template() -> RestTemplate {
    RestTemplate::builder()
        .connect_timeout(Duration::from_secs(10))
        .build()
}

// 1 秒：需按名获取
#[mmg_registry::component(name = "varRestTemplate")]
fn var_rest_template() -> RestTemplate {
    RestTemplate::builder()
        .connect_timeout(Duration::from_secs(1))
        .build()
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .init();

    let reg = Registry::from_declarations()?;
    let foo = reg.resolve::<RestTemplate>()?;
    let var = reg.resolve_named::<RestTemplate>("varRestTemplate")?;
    tracing::info!(timeout = ?foo.connect_timeout, "unqualified injection -> fooRestTemplate");
    tracing::info!(timeout = ?var.connect_timeout, "named injection -> varRestTemplate");
    tracing::info!(registry = ?reg, "registry contents");
    Ok(())
}
