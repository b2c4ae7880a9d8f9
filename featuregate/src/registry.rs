//! Registry of gated features.
//!
//! Each gated area of the application registers its feature once, keyed by
//! a stable id, and the UI asks the registry for entitlements whenever the
//! license status changes.

use crate::gate::{Entitlement, GatedFeature};
use crate::status::LicenseStatus;
use std::collections::BTreeMap;
use tracing::debug;

/// A catalog of gated features keyed by feature id.
///
/// Iteration follows key order, so repeated evaluations render stably.
/// The registry itself holds no lock; callers own any sharing.
#[derive(Debug, Clone, Default)]
pub struct FeatureRegistry {
    features: BTreeMap<String, GatedFeature>,
}

impl FeatureRegistry {
    /// Creates an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a feature under `id`, replacing any previous entry.
    pub fn register(&mut self, id: impl Into<String>, feature: GatedFeature) {
        let id = id.into();
        debug!("Registered gated feature {} as {}", feature.name(), id);
        self.features.insert(id, feature);
    }

    /// Returns the feature registered under `id`.
    #[must_use]
    pub fn feature(&self, id: &str) -> Option<&GatedFeature> {
        self.features.get(id)
    }

    /// Returns the number of registered features.
    #[must_use]
    pub fn len(&self) -> usize {
        self.features.len()
    }

    /// Returns true if no features are registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.features.is_empty()
    }

    /// Evaluates the feature registered under `id`.
    ///
    /// Returns `None` for ids nothing was registered under; an unknown id
    /// is a caller bug, not a license decision.
    #[must_use]
    pub fn evaluate(&self, id: &str, status: Option<&LicenseStatus>) -> Option<Entitlement> {
        self.features.get(id).map(|f| f.evaluate(status))
    }

    /// Evaluates every registered feature against one license status.
    #[must_use]
    pub fn evaluate_all(&self, status: Option<&LicenseStatus>) -> BTreeMap<String, Entitlement> {
        self.features
            .iter()
            .map(|(id, f)| (id.clone(), f.evaluate(status)))
            .collect()
    }
}
