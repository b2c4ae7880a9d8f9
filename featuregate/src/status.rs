//! License status resolution.
//!
//! The licensing endpoint returns a license document ([`LicenseDoc`]); the
//! evaluator consumes a resolved [`LicenseStatus`]. Resolution derives the
//! active flag from the document's own lifecycle state and its expiry
//! timestamp. Anything that cannot be resolved becomes
//! [`LicenseStatus::Unavailable`], which keeps gated features disabled.

use crate::error::Result;
use crate::tier::LicenseTier;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::warn;

/// Resolved license state, as consumed by the evaluator.
///
/// The tier and active flag only exist in the [`Resolved`](Self::Resolved)
/// state; when license information could not be retrieved there is nothing
/// meaningful to read.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "state", rename_all = "lowercase")]
pub enum LicenseStatus {
    /// License information could not be retrieved.
    Unavailable,
    /// License information is known.
    Resolved {
        /// The license tier.
        tier: LicenseTier,
        /// Whether the license is inside its validity window.
        active: bool,
    },
}

impl LicenseStatus {
    /// Shorthand for a resolved, active license of the given tier.
    #[must_use]
    pub fn active(tier: LicenseTier) -> Self {
        Self::Resolved { tier, active: true }
    }

    /// Shorthand for a resolved but expired license of the given tier.
    #[must_use]
    pub fn expired(tier: LicenseTier) -> Self {
        Self::Resolved {
            tier,
            active: false,
        }
    }
}

/// Lifecycle state reported by the license document itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LicenseState {
    Active,
    Expired,
    Invalid,
}

/// A license document as returned by the licensing endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LicenseDoc {
    /// License tier, e.g. `"gold"`.
    #[serde(rename = "type")]
    pub tier: LicenseTier,
    /// Lifecycle state reported by the endpoint.
    pub status: LicenseState,
    /// Expiry as milliseconds since the Unix epoch; absent means the
    /// license never expires.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expiry_date_in_millis: Option<i64>,
}

impl LicenseDoc {
    /// Parses a license document from the endpoint's JSON.
    ///
    /// # Errors
    ///
    /// Returns an error if the JSON is malformed, a required field is
    /// missing, or the tier name is unknown.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Resolves this document into a [`LicenseStatus`] at the given instant.
    ///
    /// The license counts as active only when the endpoint reports it
    /// active **and** `now` is before the expiry timestamp. A stale
    /// document claiming to be active past its own expiry resolves as
    /// expired.
    #[must_use]
    pub fn status_at(&self, now: DateTime<Utc>) -> LicenseStatus {
        let within_window = match self.expiry_date_in_millis {
            None => true,
            Some(expiry_ms) => now.timestamp_millis() < expiry_ms,
        };
        LicenseStatus::Resolved {
            tier: self.tier,
            active: self.status == LicenseState::Active && within_window,
        }
    }

    /// Resolves this document at the current instant.
    #[must_use]
    pub fn status(&self) -> LicenseStatus {
        self.status_at(Utc::now())
    }
}

/// Parses and resolves a license document, failing closed.
///
/// Any parse failure resolves to [`LicenseStatus::Unavailable`] so that
/// gated features stay disabled when the endpoint returns garbage.
#[must_use]
pub fn status_from_json(json: &str) -> LicenseStatus {
    match LicenseDoc::from_json(json) {
        Ok(doc) => doc.status(),
        Err(e) => {
            warn!("Unreadable license document, treating license as unavailable: {}", e);
            LicenseStatus::Unavailable
        }
    }
}
