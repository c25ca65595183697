use crate::{
    capability::CapabilityId,
    config::RegistryConfig,
    declare,
    definition::{ComponentDefinition, Instance},
    error::{RegistryError, Result},
};
use smallvec::SmallVec;
use std::{collections::HashMap, sync::Arc};

// 每个能力类型下的定义下标（按注册顺序）
type Slots = SmallVec<[usize; 4]>;

/// Collects definitions before startup. Registration is sequential; `build` consumes the builder.
pub struct RegistryBuilder {
    cfg: RegistryConfig,
    definitions: Vec<ComponentDefinition>,
    by_capability: HashMap<CapabilityId, Slots>,
}

impl RegistryBuilder {
    pub fn new(cfg: RegistryConfig) -> Self {
        Self {
            cfg,
            definitions: Vec::new(),
            by_capability: HashMap::new(),
        }
    }

    /// 注册单个定义：同一能力类型下名称必须唯一。
    /// 允许覆盖时后者替换前者并保留原位置。
    pub fn register(&mut self, def: ComponentDefinition) -> Result<&mut Self> {
        let capability = def.capability();
        let existing = self.by_capability.get(&capability).and_then(|slots| {
            slots
                .iter()
                .copied()
                .find(|&i| self.definitions[i].name() == def.name())
        });
        if let Some(idx) = existing {
            if !self.cfg.allow_definition_overriding {
                return Err(RegistryError::DuplicateName {
                    capability: capability.type_name(),
                    name: def.name().to_string(),
                });
            }
            tracing::warn!(
                component = %def.name(),
                capability = %capability,
                "component definition registered multiple times; overriding"
            );
            self.definitions[idx] = def;
            return Ok(self);
        }
        tracing::debug!(
            component = %def.name(),
            capability = %capability,
            primary = def.is_primary(),
            origin = ?def.origin(),
            "component registered"
        );
        let idx = self.definitions.len();
        self.definitions.push(def);
        self.by_capability.entry(capability).or_default().push(idx);
        Ok(self)
    }

    pub fn register_many<I>(&mut self, defs: I) -> Result<&mut Self>
    where
        I: IntoIterator<Item = ComponentDefinition>,
    {
        for def in defs {
            self.register(def)?;
        }
        Ok(self)
    }

    /// 将 `#[component]` 声明的全部定义纳入本构建器
    pub fn register_declared(&mut self) -> Result<&mut Self> {
        for decl in declare::all() {
            self.register(ComponentDefinition::from_declaration(decl))?;
        }
        Ok(self)
    }

    pub fn len(&self) -> usize {
        self.definitions.len()
    }
    pub fn is_empty(&self) -> bool {
        self.definitions.is_empty()
    }

    /// Validate primaries, then construct every definition exactly once in registration order.
    /// Any failure aborts; no partially built registry is returned.
    pub fn build(self) -> Result<Registry> {
        let RegistryBuilder {
            cfg,
            definitions,
            by_capability,
        } = self;

        // 先校验再构造：歧义配置不触发任何构造副作用
        // 按注册顺序检查，始终报告最先注册的歧义类型
        let mut checked: Vec<CapabilityId> = Vec::with_capacity(by_capability.len());
        for capability in definitions.iter().map(ComponentDefinition::capability) {
            if checked.contains(&capability) {
                continue;
            }
            checked.push(capability);
            let Some(slots) = by_capability.get(&capability) else {
                continue;
            };
            let primaries: Vec<String> = slots
                .iter()
                .map(|&i| &definitions[i])
                .filter(|d| d.is_primary())
                .map(|d| d.name().to_string())
                .collect();
            if primaries.len() > 1 {
                return Err(RegistryError::AmbiguousPrimary {
                    capability: capability.type_name(),
                    candidates: primaries,
                });
            }
        }

        let mut entries = Vec::with_capacity(definitions.len());
        for def in definitions {
            let (name, capability, primary, construct) = def.into_constructor();
            let instance = match construct() {
                Ok(v) => v,
                Err(source) => {
                    tracing::error!(
                        component = %name,
                        capability = %capability,
                        error = %source,
                        "failed to construct component"
                    );
                    return Err(RegistryError::Construction {
                        capability: capability.type_name(),
                        name,
                        source,
                    });
                }
            };
            tracing::debug!(
                component = %name,
                capability = %capability,
                "component constructed"
            );
            entries.push(Entry {
                name,
                capability,
                primary,
                instance,
            });
        }

        tracing::info!(
            components = entries.len(),
            capabilities = by_capability.len(),
            "registry built"
        );
        Ok(Registry {
            inner: Arc::new(Inner {
                entries,
                by_capability,
                sole_candidate_fallback: cfg.sole_candidate_fallback,
            }),
        })
    }
}

impl Default for RegistryBuilder {
    fn default() -> Self {
        Self::new(RegistryConfig::default())
    }
}

struct Entry {
    name: String,
    capability: CapabilityId,
    primary: bool,
    instance: Instance,
}

struct Inner {
    entries: Vec<Entry>,
    by_capability: HashMap<CapabilityId, Slots>,
    sole_candidate_fallback: bool,
}

/// Built, read-only registry. Cloning shares the same instances.
#[derive(Clone)]
pub struct Registry {
    inner: Arc<Inner>,
}

impl Registry {
    pub fn builder() -> RegistryBuilder {
        RegistryBuilder::default()
    }

    /// 仅由 `#[component]` 声明构建（默认配置）
    pub fn from_declarations() -> Result<Self> {
        let mut b = RegistryBuilder::default();
        b.register_declared()?;
        b.build()
    }

    /// Primary instance of `T`, or the sole definition when only one exists.
    pub fn resolve<T: ?Sized + Send + Sync + 'static>(&self) -> Result<Arc<T>> {
        self.resolve_with::<T>(None)
    }

    /// Instance registered under `name` for `T`.
    pub fn resolve_named<T: ?Sized + Send + Sync + 'static>(
        &self,
        name: &str,
    ) -> Result<Arc<T>> {
        self.resolve_with::<T>(Some(name))
    }

    pub fn resolve_with<T: ?Sized + Send + Sync + 'static>(
        &self,
        name: Option<&str>,
    ) -> Result<Arc<T>> {
        let entry = self.lookup(CapabilityId::of::<T>(), name)?;
        entry.instance.downcast::<T>().ok_or_else(|| RegistryError::TypeMismatch {
            capability: entry.capability.type_name(),
            name: entry.name.clone(),
        })
    }

    /// Untyped lookup by capability key.
    pub fn resolve_instance(
        &self,
        capability: CapabilityId,
        name: Option<&str>,
    ) -> Result<&Instance> {
        self.lookup(capability, name).map(|e| &e.instance)
    }

    fn lookup(&self, capability: CapabilityId, name: Option<&str>) -> Result<&Entry> {
        let mut entries = self.entries_of(capability);
        if let Some(name) = name {
            return entries
                .find(|e| e.name == name)
                .ok_or_else(|| RegistryError::NotFound {
                    capability: capability.type_name(),
                    name: name.to_string(),
                });
        }
        let candidates: Vec<&Entry> = entries.collect();
        let mut primaries = candidates.iter().filter(|e| e.primary);
        match (primaries.next(), primaries.next()) {
            (Some(p), None) => return Ok(*p),
            // build() 已拒绝多个 primary，此分支仅在不变量被破坏时可达
            (Some(_), Some(_)) => {
                return Err(RegistryError::AmbiguousPrimary {
                    capability: capability.type_name(),
                    candidates: candidates
                        .iter()
                        .filter(|e| e.primary)
                        .map(|e| e.name.clone())
                        .collect(),
                })
            }
            (None, _) => {}
        }
        match candidates.as_slice() {
            [only] if self.inner.sole_candidate_fallback => Ok(*only),
            _ => Err(RegistryError::NoPrimary {
                capability: capability.type_name(),
                candidates: candidates.iter().map(|e| e.name.clone()).collect(),
            }),
        }
    }

    fn entries_of(&self, capability: CapabilityId) -> impl Iterator<Item = &Entry> + '_ {
        self.inner
            .by_capability
            .get(&capability)
            .into_iter()
            .flat_map(|slots| slots.iter())
            .map(move |&i| &self.inner.entries[i])
    }

    /// Every instance of `T` in registration order.
    pub fn resolve_all<T: ?Sized + Send + Sync + 'static>(&self) -> Vec<Arc<T>> {
        self.entries_of(CapabilityId::of::<T>())
            .filter_map(|e| e.instance.downcast::<T>())
            .collect()
    }

    pub fn names_for<T: ?Sized + 'static>(&self) -> Vec<&str> {
        self.entries_of(CapabilityId::of::<T>())
            .map(|e| e.name.as_str())
            .collect()
    }

    pub fn primary_name<T: ?Sized + 'static>(&self) -> Option<&str> {
        self.entries_of(CapabilityId::of::<T>())
            .find(|e| e.primary)
            .map(|e| e.name.as_str())
    }

    pub fn contains<T: ?Sized + 'static>(&self, name: &str) -> bool {
        self.entries_of(CapabilityId::of::<T>()).any(|e| e.name == name)
    }

    pub fn len(&self) -> usize {
        self.inner.entries.len()
    }
    pub fn is_empty(&self) -> bool {
        self.inner.entries.is_empty()
    }
}

impl std::fmt::Debug for Registry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut list = f.debug_list();
        for e in &self.inner.entries {
            list.entry(&format_args!(
                "{}: {}{}",
                e.name,
                e.capability,
                if e.primary { " (primary)" } else { "" }
            ));
        }
        list.finish()
    }
}
