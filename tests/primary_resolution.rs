use mmg_registry::prelude::*;
use std::sync::Arc;
use std::time::Duration;

#[derive(Debug)]
struct RestClient {
    connect_timeout: Duration,
}

impl RestClient {
    fn with_connect_timeout(connect_timeout: Duration) -> Self {
        Self { connect_timeout }
    }
}

fn foo_and_var() -> Registry {
    let mut b = Registry::builder();
    b.register(
        ComponentDefinition::new("fooClient", || {
            RestClient::with_connect_timeout(Duration::from_secs(10))
        })
        .primary(),
    )
    .expect("register foo");
    b.register(ComponentDefinition::new("varClient", || {
        RestClient::with_connect_timeout(Duration::from_secs(1))
    }))
    .expect("register var");
    b.build().expect("build")
}

#[test]
fn unqualified_resolution_picks_primary() {
    let reg = foo_and_var();
    let client = reg.resolve::<RestClient>().expect("resolve primary");
    assert_eq!(client.connect_timeout, Duration::from_secs(10));
    assert_eq!(reg.primary_name::<RestClient>(), Some("fooClient"));
}

#[test]
fn named_resolution_picks_exact_definition() {
    let reg = foo_and_var();
    let var = reg
        .resolve_named::<RestClient>("varClient")
        .expect("resolve varClient");
    assert_eq!(var.connect_timeout, Duration::from_secs(1));
    let foo = reg.resolve_with::<RestClient>(Some("fooClient")).unwrap();
    assert!(Arc::ptr_eq(&foo, &reg.resolve::<RestClient>().unwrap()));
    assert!(!Arc::ptr_eq(&foo, &var));
}

#[test]
fn resolution_is_memoized_by_identity() {
    let reg = foo_and_var();
    let a = reg.resolve_named::<RestClient>("varClient").unwrap();
    let b = reg.resolve_named::<RestClient>("varClient").unwrap();
    assert!(Arc::ptr_eq(&a, &b));
    // 克隆的 registry 共享同一批实例
    let shared = reg.clone();
    let c = shared.resolve_named::<RestClient>("varClient").unwrap();
    assert!(Arc::ptr_eq(&a, &c));
}

#[test]
fn unknown_name_is_not_found() {
    let reg = foo_and_var();
    match reg.resolve_named::<RestClient>("bazClient") {
        Err(RegistryError::NotFound { name, .. }) => assert_eq!(name, "bazClient"),
        other => panic!("expected NotFound, got {other:?}"),
    }
    assert!(reg.contains::<RestClient>("fooClient"));
    assert!(!reg.contains::<RestClient>("bazClient"));
}

#[test]
fn names_are_scoped_per_capability_type() {
    let mut b = Registry::builder();
    b.register(ComponentDefinition::new("client", || {
        RestClient::with_connect_timeout(Duration::from_secs(3))
    }))
    .unwrap();
    b.register(ComponentDefinition::new("client", || 42u32)).unwrap();
    let reg = b.build().expect("build");
    assert_eq!(*reg.resolve_named::<u32>("client").unwrap(), 42);
    assert_eq!(
        reg.resolve_named::<RestClient>("client").unwrap().connect_timeout,
        Duration::from_secs(3)
    );
    assert!(matches!(
        reg.resolve_named::<u64>("client"),
        Err(RegistryError::NotFound { .. })
    ));
}

#[test]
fn resolve_all_and_names_follow_registration_order() {
    let reg = foo_and_var();
    assert_eq!(reg.names_for::<RestClient>(), vec!["fooClient", "varClient"]);
    let all: Vec<Duration> = reg
        .resolve_all::<RestClient>()
        .iter()
        .map(|c| c.connect_timeout)
        .collect();
    assert_eq!(all, vec![Duration::from_secs(10), Duration::from_secs(1)]);
    assert!(reg.resolve_all::<String>().is_empty());
    assert_eq!(reg.len(), 2);
}

trait Greeter: Send + Sync {
    fn greet(&self) -> String;
}
struct English;
impl Greeter for English {
    fn greet(&self) -> String {
        "hello".into()
    }
}
struct Korean;
impl Greeter for Korean {
    fn greet(&self) -> String {
        "annyeong".into()
    }
}

#[test]
fn trait_object_capabilities() {
    let mut b = Registry::builder();
    let english = || Arc::new(English) as Arc<dyn Greeter>;
    let korean = || Arc::new(Korean) as Arc<dyn Greeter>;
    b.register_many([
        ComponentDefinition::shared::<dyn Greeter, _>("english", english),
        ComponentDefinition::shared::<dyn Greeter, _>("korean", korean).primary(),
    ])
    .unwrap();
    let reg = b.build().unwrap();
    assert_eq!(reg.resolve::<dyn Greeter>().unwrap().greet(), "annyeong");
    let english = reg.resolve_named::<dyn Greeter>("english").unwrap();
    assert_eq!(english.greet(), "hello");
    // 具体类型与 trait 对象是不同的能力类型
    assert!(matches!(
        reg.resolve::<English>(),
        Err(RegistryError::NoPrimary { .. })
    ));
}

#[test]
fn untyped_lookup_by_capability_key() {
    let reg = foo_and_var();
    let inst = reg
        .resolve_instance(CapabilityId::of::<RestClient>(), None)
        .expect("instance");
    let client = inst.downcast::<RestClient>().expect("downcast");
    assert_eq!(client.connect_timeout, Duration::from_secs(10));
    assert!(inst.downcast::<String>().is_none());
}
