//! Shared helpers for entitlement tests.

#![allow(dead_code)]

use featuregate::{GatedFeature, LicenseStatus, LicenseTier};

/// A feature gated the way replication is: trial, platinum, or enterprise.
pub fn replication_feature() -> GatedFeature {
    GatedFeature::new(
        "Cross-Cluster Replication",
        [
            LicenseTier::Trial,
            LicenseTier::Platinum,
            LicenseTier::Enterprise,
        ],
    )
    .expect("valid feature")
}

/// A feature available on every tier.
pub fn monitoring_feature() -> GatedFeature {
    GatedFeature::at_least("Stack Monitoring", LicenseTier::Basic).expect("valid feature")
}

/// A resolved, active license of the given tier.
pub fn active(tier: LicenseTier) -> LicenseStatus {
    LicenseStatus::active(tier)
}

/// A resolved but expired license of the given tier.
pub fn expired(tier: LicenseTier) -> LicenseStatus {
    LicenseStatus::expired(tier)
}
