//! Name → factory registry for logical types.

use std::{
    collections::HashMap,
    sync::{Arc, OnceLock},
};

use arc_swap::ArcSwap;
use tracing::debug;

use crate::{
    builtin::builtin_factories, error::LogicalTypeError, logical_type::LogicalType,
    schema::SchemaNode,
};

/// Builds a [`LogicalType`] from the properties of a schema node.
///
/// Implemented for plain functions and closures taking `&dyn SchemaNode`.
pub trait LogicalTypeFactory: Send + Sync {
    fn from_schema(&self, schema: &dyn SchemaNode) -> Result<LogicalType, LogicalTypeError>;
}

impl<F> LogicalTypeFactory for F
where
    F: Fn(&dyn SchemaNode) -> Result<LogicalType, LogicalTypeError> + Send + Sync,
{
    fn from_schema(&self, schema: &dyn SchemaNode) -> Result<LogicalType, LogicalTypeError> {
        self(schema)
    }
}

type FactoryMap = HashMap<String, Arc<dyn LogicalTypeFactory>>;

/// Registry of logical type factories keyed by annotation name.
///
/// The first registration for a name wins. The map is copy-on-write behind an
/// atomic pointer: lookups read a published snapshot without locking, and
/// concurrent registrations retry until their update lands.
pub struct LogicalTypeRegistry {
    factories: ArcSwap<FactoryMap>,
}

/// Builder for configuring [`LogicalTypeRegistry`].
pub struct LogicalTypeRegistryBuilder {
    factories: Vec<(String, Arc<dyn LogicalTypeFactory>)>,
}

static GLOBAL: OnceLock<LogicalTypeRegistry> = OnceLock::new();

impl LogicalTypeRegistry {
    /// Create a builder for [`LogicalTypeRegistry`].
    pub fn builder() -> LogicalTypeRegistryBuilder {
        LogicalTypeRegistryBuilder {
            factories: Vec::new(),
        }
    }

    /// Create an empty registry.
    pub fn new() -> Self {
        Self {
            factories: ArcSwap::from_pointee(FactoryMap::new()),
        }
    }

    /// Create a registry holding the built-in `decimal`, `uuid`, `date`,
    /// `time-*` and `timestamp-*` factories.
    pub fn with_builtins() -> Self {
        let registry = Self::new();
        for (name, factory) in builtin_factories() {
            registry.install(name.to_string(), factory);
        }
        registry
    }

    /// Process-wide registry preloaded with the built-in factories.
    pub fn global() -> &'static LogicalTypeRegistry {
        GLOBAL.get_or_init(Self::with_builtins)
    }

    /// Register `factory` under `name`.
    ///
    /// Returns `Ok(false)` without replacing anything if `name` is already
    /// registered.
    pub fn register(
        &self,
        name: impl Into<String>,
        factory: impl LogicalTypeFactory + 'static,
    ) -> Result<bool, LogicalTypeError> {
        self.register_shared(name, Arc::new(factory))
    }

    /// Register a shared factory under `name`.
    pub fn register_shared(
        &self,
        name: impl Into<String>,
        factory: Arc<dyn LogicalTypeFactory>,
    ) -> Result<bool, LogicalTypeError> {
        let name = name.into();
        if name.is_empty() {
            return Err(LogicalTypeError::InvalidRegistration {
                detail: "logical type name must not be empty".to_string(),
            });
        }
        Ok(self.install(name, factory))
    }

    fn install(&self, name: String, factory: Arc<dyn LogicalTypeFactory>) -> bool {
        let previous = self.factories.rcu(|current| {
            if current.contains_key(&name) {
                return Arc::clone(current);
            }
            let mut next = FactoryMap::clone(current);
            next.insert(name.clone(), Arc::clone(&factory));
            Arc::new(next)
        });
        let installed = !previous.contains_key(&name);
        if installed {
            debug!(logical_type = %name, "registered logical type factory");
        } else {
            debug!(
                logical_type = %name,
                "logical type already registered, keeping existing factory"
            );
        }
        installed
    }

    /// Return the factory registered under `name`.
    pub fn lookup(&self, name: &str) -> Option<Arc<dyn LogicalTypeFactory>> {
        self.factories.load().get(name).cloned()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.factories.load().contains_key(name)
    }

    /// Registered names, sorted.
    pub fn names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.factories.load().keys().cloned().collect();
        names.sort();
        names
    }
}

impl Default for LogicalTypeRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl LogicalTypeRegistryBuilder {
    /// Register a factory. Earlier registrations of the same name win.
    pub fn with_factory(
        mut self,
        name: impl Into<String>,
        factory: impl LogicalTypeFactory + 'static,
    ) -> Self {
        self.factories.push((name.into(), Arc::new(factory)));
        self
    }

    /// Register all built-in factories at this point in the order.
    pub fn with_builtin_types(mut self) -> Self {
        self.factories.extend(
            builtin_factories()
                .into_iter()
                .map(|(name, factory)| (name.to_string(), factory)),
        );
        self
    }

    /// Build the registry, failing on the first unusable name.
    pub fn build(self) -> Result<LogicalTypeRegistry, LogicalTypeError> {
        let registry = LogicalTypeRegistry::new();
        for (name, factory) in self.factories {
            registry.register_shared(name, factory)?;
        }
        Ok(registry)
    }
}
