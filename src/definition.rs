use crate::capability::CapabilityId;
use crate::declare::Declaration;
use std::{any::Any, fmt, sync::Arc};

/// 已构造的共享实例：`Arc<T>` 擦除为 `dyn Any`。
/// 解析时克隆 Arc，保证同一身份。
pub struct Instance {
    value: Box<dyn Any + Send + Sync>,
    type_name: &'static str,
}

impl Instance {
    pub fn new<T: ?Sized + Send + Sync + 'static>(value: Arc<T>) -> Self {
        Self {
            value: Box::new(value),
            type_name: std::any::type_name::<T>(),
        }
    }
    pub fn downcast<T: ?Sized + Send + Sync + 'static>(&self) -> Option<Arc<T>> {
        self.value.downcast_ref::<Arc<T>>().cloned()
    }
    pub fn type_name(&self) -> &'static str {
        self.type_name
    }
}

impl fmt::Debug for Instance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Instance({})", self.type_name)
    }
}

/// 构造函数：无参数，仅调用一次（FnOnce）
pub type Constructor = Box<dyn FnOnce() -> anyhow::Result<Instance> + Send>;

/// Where a definition came from; only used in diagnostics.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Origin {
    Registered,
    Declared,
}

/// A named, typed recipe for one component instance.
///
/// ```
/// use mmg_registry::definition::ComponentDefinition;
///
/// struct Client { retries: u32 }
/// let def = ComponentDefinition::new("defaultClient", || Client { retries: 3 }).primary();
/// assert!(def.is_primary());
/// assert_eq!(def.name(), "defaultClient");
/// ```
pub struct ComponentDefinition {
    name: String,
    capability: CapabilityId,
    primary: bool,
    origin: Origin,
    construct: Constructor,
}

impl ComponentDefinition {
    /// Concrete value; the capability type is `T` itself.
    pub fn new<T, F>(name: impl Into<String>, f: F) -> Self
    where
        T: Send + Sync + 'static,
        F: FnOnce() -> T + Send + 'static,
    {
        Self::shared::<T, _>(name, move || Arc::new(f()))
    }

    /// Already shared value, e.g. `Arc<dyn Trait>`; the capability type is `T`.
    pub fn shared<T, F>(name: impl Into<String>, f: F) -> Self
    where
        T: ?Sized + Send + Sync + 'static,
        F: FnOnce() -> Arc<T> + Send + 'static,
    {
        Self::from_parts(
            name.into(),
            CapabilityId::of::<T>(),
            Box::new(move || Ok(Instance::new::<T>(f()))),
        )
    }

    /// Construction that may fail; the error aborts `build()`.
    pub fn fallible<T, F>(name: impl Into<String>, f: F) -> Self
    where
        T: Send + Sync + 'static,
        F: FnOnce() -> anyhow::Result<T> + Send + 'static,
    {
        Self::from_parts(
            name.into(),
            CapabilityId::of::<T>(),
            Box::new(move || f().map(|v| Instance::new::<T>(Arc::new(v)))),
        )
    }

    pub(crate) fn from_declaration(decl: &'static Declaration) -> Self {
        let mut def = Self::from_parts(
            decl.name.to_string(),
            (decl.capability)(),
            Box::new(decl.construct),
        );
        def.primary = decl.primary;
        def.origin = Origin::Declared;
        def
    }

    fn from_parts(name: String, capability: CapabilityId, construct: Constructor) -> Self {
        Self {
            name,
            capability,
            primary: false,
            origin: Origin::Registered,
            construct,
        }
    }

    pub fn primary(self) -> Self {
        self.with_primary(true)
    }
    pub fn with_primary(mut self, primary: bool) -> Self {
        self.primary = primary;
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }
    pub fn capability(&self) -> CapabilityId {
        self.capability
    }
    pub fn is_primary(&self) -> bool {
        self.primary
    }
    pub fn origin(&self) -> Origin {
        self.origin
    }

    pub(crate) fn into_constructor(self) -> (String, CapabilityId, bool, Constructor) {
        (self.name, self.capability, self.primary, self.construct)
    }
}

impl fmt::Debug for ComponentDefinition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ComponentDefinition")
            .field("name", &self.name)
            .field("capability", &self.capability)
            .field("primary", &self.primary)
            .field("origin", &self.origin)
            .finish()
    }
}
