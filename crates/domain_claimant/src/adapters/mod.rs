//! Adapters connecting the claimant domain to external systems

pub mod dvla;

pub use dvla::{DvlaLicenceClient, LicenceServiceConfig};
