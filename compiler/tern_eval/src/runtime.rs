//! Runtime configuration and the entry point for running triggers.

use std::sync::Arc;

use crate::{
    Registry, RunError, RunOutcome, SharedRegistry, Trigger, TriggerContext, VariableStore,
};

/// Knobs for running triggers.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct RuntimeConfig {
    /// Pass `debug = true` to `render` in trace output.
    pub debug_render: bool,
    /// Stop a run after this many statements. `None` runs to completion.
    pub step_limit: Option<u64>,
}

impl RuntimeConfig {
    /// Read `TERN_DEBUG` (`1`/`true`) and `TERN_STEP_LIMIT` (a count).
    /// Unset or malformed values keep their defaults.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let debug_render = lookup("TERN_DEBUG")
            .is_some_and(|v| matches!(v.trim().to_ascii_lowercase().as_str(), "1" | "true" | "yes"));
        let step_limit = lookup("TERN_STEP_LIMIT").and_then(|v| v.trim().parse().ok());
        RuntimeConfig {
            debug_render,
            step_limit,
        }
    }
}

/// Owns what every trigger run shares: the registry, the global variables
/// and the configuration.
#[derive(Debug, Clone)]
pub struct Runtime {
    registry: SharedRegistry<Registry>,
    variables: Arc<VariableStore>,
    config: RuntimeConfig,
}

impl Runtime {
    pub fn builder() -> RuntimeBuilder {
        RuntimeBuilder::default()
    }

    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    pub fn variables(&self) -> &VariableStore {
        &self.variables
    }

    pub fn config(&self) -> &RuntimeConfig {
        &self.config
    }

    /// Run `trigger` for `ctx`. Each call gets its own frame.
    pub fn execute(
        &self,
        trigger: &Trigger,
        ctx: &dyn TriggerContext,
    ) -> Result<RunOutcome, RunError> {
        trigger.execute(self, ctx)
    }
}

/// Builder for [`Runtime`]. Unset parts default to the builtin registry,
/// an empty variable store and [`RuntimeConfig::default`].
#[derive(Debug, Default)]
pub struct RuntimeBuilder {
    registry: Option<SharedRegistry<Registry>>,
    variables: Option<Arc<VariableStore>>,
    config: RuntimeConfig,
}

impl RuntimeBuilder {
    #[must_use]
    pub fn registry(mut self, registry: SharedRegistry<Registry>) -> Self {
        self.registry = Some(registry);
        self
    }

    /// Share global variables with other runtimes.
    #[must_use]
    pub fn variables(mut self, variables: Arc<VariableStore>) -> Self {
        self.variables = Some(variables);
        self
    }

    #[must_use]
    pub fn config(mut self, config: RuntimeConfig) -> Self {
        self.config = config;
        self
    }

    #[must_use]
    pub fn step_limit(mut self, limit: u64) -> Self {
        self.config.step_limit = Some(limit);
        self
    }

    pub fn build(self) -> Runtime {
        Runtime {
            registry: self
                .registry
                .unwrap_or_else(|| SharedRegistry::new(Registry::with_builtins())),
            variables: self.variables.unwrap_or_default(),
            config: self.config,
        }
    }
}
