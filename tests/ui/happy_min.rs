use mmg_registry::prelude::*;
use std::sync::Arc;

struct Client;

#[mmg_registry::component(name = "defaultClient", primary)]
fn default_client() -> Client {
    Client
}

#[mmg_registry::component(primary = false)]
fn spare_client() -> std::result::Result<Arc<Client>, std::io::Error> {
    Ok(Arc::new(Client))
}

fn main() -> Result<()> {
    let reg = Registry::from_declarations()?;
    let _primary: Arc<Client> = reg.resolve()?;
    let _spare: Arc<Client> = reg.resolve_named("spare_client")?;
    Ok(())
}
