use std::{
    any::TypeId,
    fmt,
    hash::{Hash, Hasher},
};

/// Key of a capability type: the abstract type several definitions can satisfy.
///
/// Equality and hashing use the `TypeId` only; the type name is carried for diagnostics.
/// `T` may be unsized, so `dyn Trait` capabilities are keyed the same way as concrete types.
#[derive(Clone, Copy)]
pub struct CapabilityId {
    id: TypeId,
    name: &'static str,
}

impl CapabilityId {
    pub fn of<T: ?Sized + 'static>() -> Self {
        CapabilityId {
            id: TypeId::of::<T>(),
            name: std::any::type_name::<T>(),
        }
    }
    pub fn type_id(&self) -> TypeId {
        self.id
    }
    pub fn type_name(&self) -> &'static str {
        self.name
    }
}

impl PartialEq for CapabilityId {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}
impl Eq for CapabilityId {}
impl Hash for CapabilityId {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

impl fmt::Debug for CapabilityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "CapabilityId({})", self.name)
    }
}

impl fmt::Display for CapabilityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name)
    }
}
