struct Client;

#[mmg_registry::component]
fn client(timeout_secs: u64) -> Client {
    let _ = timeout_secs;
    Client
}

fn main() {
    let _ = Client;
}
