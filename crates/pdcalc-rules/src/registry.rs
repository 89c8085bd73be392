//! # Jurisdiction Registry
//!
//! Maps jurisdiction codes to calculators. The registry performs no
//! discovery: [`bootstrap()`] registers every shipped jurisdiction
//! explicitly, and callers may register their own implementations before
//! or after it. Registration is last-write-wins.
//!
//! ## Concurrency
//!
//! The map sits behind a `parking_lot::RwLock`, so registrations from
//! several threads are serialized and lookups proceed concurrently.
//! Calculators are handed out as `Arc<dyn Calculator>` and hold no
//! per-call state.

use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use parking_lot::RwLock;

use pdcalc_core::{JurisdictionCode, PdError, PdResult};

use crate::calculator::Calculator;
use crate::config::RulesConfig;
use crate::jurisdiction::France;

/// Thread-safe map from jurisdiction code to calculator.
#[derive(Default)]
pub struct Registry {
    calculators: RwLock<HashMap<JurisdictionCode, Arc<dyn Calculator>>>,
}

impl Registry {
    /// An empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// A registry populated with every shipped jurisdiction, using the
    /// default [`RulesConfig`].
    pub fn with_defaults() -> PdResult<Self> {
        let registry = Self::new();
        bootstrap(&registry, &RulesConfig::default())?;
        Ok(registry)
    }

    /// Register `calculator` under `code`, replacing any earlier
    /// registration. Returns the replaced calculator.
    pub fn register(
        &self,
        code: impl AsRef<str>,
        calculator: Arc<dyn Calculator>,
    ) -> PdResult<Option<Arc<dyn Calculator>>> {
        let code = JurisdictionCode::new(code)?;
        let previous = self.calculators.write().insert(code.clone(), calculator);
        if previous.is_some() {
            tracing::warn!(jurisdiction = %code, "calculator replaced");
        } else {
            tracing::info!(jurisdiction = %code, "calculator registered");
        }
        Ok(previous)
    }

    /// Resolve the calculator registered under `code`.
    ///
    /// # Errors
    ///
    /// [`PdError::UnknownJurisdiction`] when nothing is registered under the
    /// code, including when the code itself is malformed.
    pub fn lookup(&self, code: &str) -> PdResult<Arc<dyn Calculator>> {
        let normalized =
            JurisdictionCode::new(code).map_err(|_| PdError::UnknownJurisdiction(code.to_string()))?;
        self.calculators
            .read()
            .get(&normalized)
            .cloned()
            .ok_or_else(|| PdError::UnknownJurisdiction(code.to_string()))
    }

    /// Registered codes, sorted.
    pub fn codes(&self) -> Vec<JurisdictionCode> {
        let mut codes: Vec<_> = self.calculators.read().keys().cloned().collect();
        codes.sort();
        codes
    }

    pub fn len(&self) -> usize {
        self.calculators.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.calculators.read().is_empty()
    }
}

impl fmt::Debug for Registry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Registry")
            .field("codes", &self.codes())
            .finish()
    }
}

/// Register every shipped jurisdiction into `registry`.
pub fn bootstrap(registry: &Registry, config: &RulesConfig) -> PdResult<()> {
    let france = France::new(config.clone());
    registry.register(france.code(), Arc::new(france))?;
    Ok(())
}
