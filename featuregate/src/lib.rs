//! License entitlement evaluation for gated platform features.
//!
//! This crate decides whether a license-gated feature may be used and, when
//! it may not, says why in a form the presentation layer can localize:
//! - A closed tier model for license levels (basic through enterprise, trial)
//! - A pure four-branch entitlement check with a fail-closed default
//! - Resolution of raw license documents into the evaluator's input
//! - A registry of gated features, one entry per feature id
//!
//! # Design Principles
//!
//! - **Fail closed**: absent or unreadable license information disables a
//!   gated feature; it never enables one.
//! - **Denial is data**: evaluation is total and never returns an error.
//!   Only feature construction and wire parsing can fail.
//! - **Locale-agnostic**: results carry structured denial fields, not
//!   rendered text. The `Display` rendering is a default, not the contract.
//!
//! # Evaluation Order
//!
//! Exactly one of four outcomes per check, decided in this order:
//! 1. License information unavailable: feature disabled (worst case)
//! 2. Tier not accepted by the feature: upgrade required
//! 3. Tier accepted but license expired: feature visible, disabled
//! 4. Fully entitled: feature enabled

mod error;
mod gate;
mod registry;
mod status;
mod tier;

pub use error::{Error, Result};
pub use gate::{DenialReason, Entitlement, GatedFeature};
pub use registry::FeatureRegistry;
pub use status::{LicenseDoc, LicenseState, LicenseStatus, status_from_json};
pub use tier::LicenseTier;
