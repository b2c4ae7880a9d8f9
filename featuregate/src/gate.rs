//! Gated features and the entitlement check.
//!
//! A [`GatedFeature`] names a feature and the tiers allowed to use it; its
//! [`evaluate`](GatedFeature::evaluate) maps a license status to an
//! [`Entitlement`]. Evaluation is pure and total: no I/O, no interior
//! state, no errors. Exactly one of four outcomes fires per call, checked
//! in order: unavailable, tier not accepted, expired, entitled.

use crate::error::{Error, Result};
use crate::status::LicenseStatus;
use crate::tier::LicenseTier;
use serde::Serialize;
use std::collections::HashSet;
use std::fmt;
use tracing::debug;

/// A feature whose availability depends on the license.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GatedFeature {
    name: String,
    required_tiers: HashSet<LicenseTier>,
}

impl GatedFeature {
    /// Creates a gated feature accepting exactly the given tiers.
    ///
    /// # Errors
    ///
    /// Returns an error if `name` is empty or `tiers` yields no tier.
    pub fn new(
        name: impl Into<String>,
        tiers: impl IntoIterator<Item = LicenseTier>,
    ) -> Result<Self> {
        let name = name.into();
        if name.is_empty() {
            return Err(Error::EmptyFeatureName);
        }
        let required_tiers: HashSet<LicenseTier> = tiers.into_iter().collect();
        if required_tiers.is_empty() {
            return Err(Error::EmptyTierSet(name));
        }
        Ok(Self {
            name,
            required_tiers,
        })
    }

    /// Creates a gated feature accepting `min` and every tier above it.
    ///
    /// # Errors
    ///
    /// Returns an error if `name` is empty.
    pub fn at_least(name: impl Into<String>, min: LicenseTier) -> Result<Self> {
        Self::new(
            name,
            LicenseTier::ALL.into_iter().filter(|t| t.at_least(min)),
        )
    }

    /// Returns the feature's display name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the tiers this feature accepts.
    #[must_use]
    pub fn required_tiers(&self) -> &HashSet<LicenseTier> {
        &self.required_tiers
    }

    /// Decides whether this feature may be used under the given license.
    ///
    /// `None` means license information is absent and is treated exactly
    /// like [`LicenseStatus::Unavailable`]: assume the worst case and
    /// disable the feature rather than guessing open.
    #[must_use]
    pub fn evaluate(&self, status: Option<&LicenseStatus>) -> Entitlement {
        match status {
            // No license information at all. Fail closed.
            None | Some(&LicenseStatus::Unavailable) => {
                debug!("License information unavailable, disabling {}", self.name);
                Entitlement {
                    is_available: false,
                    is_active: None,
                    show_links: true,
                    enable_links: false,
                    denial: Some(DenialReason::InfoUnavailable {
                        feature: self.name.clone(),
                    }),
                }
            }
            // Tier outside the accepted set: upgrade required.
            Some(&LicenseStatus::Resolved { tier, .. })
                if !self.required_tiers.contains(&tier) =>
            {
                debug!("{} license does not cover {}", tier, self.name);
                Entitlement {
                    is_available: false,
                    is_active: Some(false),
                    show_links: true,
                    enable_links: false,
                    denial: Some(DenialReason::TierInsufficient {
                        feature: self.name.clone(),
                        tier,
                    }),
                }
            }
            // Accepted tier, but the license ran out.
            Some(&LicenseStatus::Resolved {
                tier,
                active: false,
            }) => {
                debug!("{} license expired, disabling {}", tier, self.name);
                Entitlement {
                    is_available: true,
                    is_active: Some(false),
                    show_links: true,
                    enable_links: false,
                    denial: Some(DenialReason::LicenseExpired {
                        feature: self.name.clone(),
                        tier,
                    }),
                }
            }
            Some(&LicenseStatus::Resolved { active: true, .. }) => Entitlement {
                is_available: true,
                is_active: Some(true),
                show_links: true,
                enable_links: true,
                denial: None,
            },
        }
    }
}

/// The outcome of an entitlement check.
///
/// Serializes to the camelCase shape the UI layer consumes; optional
/// fields are omitted when absent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Entitlement {
    /// Whether the feature is available under the current license.
    pub is_available: bool,
    /// Whether the license is active; `None` when availability itself is
    /// unknown.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_active: Option<bool>,
    /// Whether the UI should keep the feature's links visible.
    pub show_links: bool,
    /// Whether those links should be clickable.
    pub enable_links: bool,
    /// Why the feature is not usable; absent when fully entitled.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub denial: Option<DenialReason>,
}

impl Entitlement {
    /// Returns true when the feature may actually be used.
    #[must_use]
    pub fn is_entitled(&self) -> bool {
        self.is_available && self.is_active == Some(true)
    }

    /// Renders the default English message for the denial, if any.
    ///
    /// Presentation layers that localize should read the
    /// [`DenialReason`] fields instead.
    #[must_use]
    pub fn message(&self) -> Option<String> {
        self.denial.as_ref().map(ToString::to_string)
    }
}

/// Why a gated feature is not currently usable.
///
/// Variants carry every field a message template needs; `Display` is a
/// default English rendering.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "reason", rename_all = "camelCase")]
pub enum DenialReason {
    /// License information could not be retrieved.
    InfoUnavailable {
        /// Display name of the gated feature.
        feature: String,
    },
    /// The current tier does not include the feature.
    TierInsufficient {
        feature: String,
        /// The tier the license actually has.
        tier: LicenseTier,
    },
    /// The tier includes the feature but the license has expired.
    LicenseExpired { feature: String, tier: LicenseTier },
}

impl fmt::Display for DenialReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InfoUnavailable { feature } => write!(
                f,
                "You cannot use {feature} because license information is not available at this time."
            ),
            Self::TierInsufficient { feature, tier } => write!(
                f,
                "Your {tier} license does not support {feature}. Please upgrade your license."
            ),
            Self::LicenseExpired { feature, tier } => {
                write!(f, "You cannot use {feature} because your {tier} license has expired.")
            }
        }
    }
}
