//! 显式注册示例：配置来自 JSON，定义以普通数据给出，演示失败即停的启动校验。

use mmg_registry::prelude::*;
use std::time::Duration;

#[derive(Debug)]
struct HttpClient {
    connect_timeout: Duration,
}

fn client(name: &str, secs: u64) -> ComponentDefinition {
    ComponentDefinition::new(name, move || HttpClient {
        connect_timeout: Duration::from_secs(secs),
    })
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt().init();

    let cfg = RegistryConfig::from_json_str(r#"{ "allow_definition_overriding": false }"#)?;

    // 1) 正常：一个 primary
    let mut b = RegistryBuilder::new(cfg.clone());
    b.register_many([client("fooClient", 10).primary(), client("varClient", 1)])?;
    let reg = b.build()?;
    tracing::info!(timeout = ?reg.resolve::<HttpClient>()?.connect_timeout, "primary");

    // 2) 两个 primary：build 失败
    let mut b = RegistryBuilder::new(cfg.clone());
    b.register_many([client("fooClient", 10).primary(), client("varClient", 1).primary()])?;
    if let Err(e) = b.build() {
        tracing::warn!(error = %e, "startup aborted");
    }

    // 3) 单一定义：未标记 primary 也可无名解析
    let mut b = RegistryBuilder::new(cfg);
    b.register(client("onlyClient", 5))?;
    let reg = b.build()?;
    tracing::info!(timeout = ?reg.resolve::<HttpClient>()?.connect_timeout, "sole survivor");
    Ok(())
}
