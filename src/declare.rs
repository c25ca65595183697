use crate::{capability::CapabilityId, definition::Instance};

/// Compile-time declaration of a component, submitted by `#[component]` on a
/// zero-argument function and collected via inventory.
/// - `name`: explicit `name = "..."` or the function identifier.
/// - `capability`: the function's return type; `T`, `Arc<T>`, `Result<T>` and
///   `Result<Arc<T>>` all map to `T`.
pub struct Declaration {
    pub name: &'static str,
    pub primary: bool,
    pub capability: fn() -> CapabilityId,
    pub construct: fn() -> anyhow::Result<Instance>,
}

inventory::collect!(Declaration);

/// All declarations, ordered by capability type name then component name.
/// Link order is not stable, so the registry never depends on it.
pub fn all() -> Vec<&'static Declaration> {
    let mut out: Vec<&'static Declaration> = inventory::iter::<Declaration>.into_iter().collect();
    out.sort_by(|a, b| {
        (a.capability)()
            .type_name()
            .cmp((b.capability)().type_name())
            .then_with(|| a.name.cmp(b.name))
    });
    out
}

/// Declarations for one capability type.
pub fn declared_for(capability: CapabilityId) -> Vec<&'static Declaration> {
    all()
        .into_iter()
        .filter(|d| (d.capability)() == capability)
        .collect()
}
