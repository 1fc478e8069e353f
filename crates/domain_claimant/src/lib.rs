//! Claimant Domain
//!
//! This crate contains the claimant entity, the validation rules for create
//! and update payloads, the driving-licence verification contract, and the
//! workflow service that ties them together.
//!
//! # Architecture
//!
//! The domain talks to the outside world through two ports:
//!
//! - [`ports::ClaimantStore`]: persistence, keyed by id with exact-match
//!   lookup on `refNo` / `nino` (PostgreSQL adapter in `infra_db`, in-memory
//!   adapter in `test_utils`)
//! - [`ports::LicenceVerifier`]: one-shot call to the external driving
//!   licence verification service (reqwest adapter in [`adapters::dvla`])
//!
//! The create workflow is strictly ordered per request: validate, verify the
//! licence when one is supplied, persist. Validation is fail-fast and the
//! verification result is authoritative; a service-reported rejection is
//! never overridden locally.

pub mod adapters;
pub mod claimant;
pub mod error;
pub mod ports;
pub mod service;
pub mod validation;
pub mod verification;

pub use claimant::{Claimant, ClaimantUpdate, CreateClaimant, NewClaimant};
pub use error::{ClaimantError, ValidationError};
pub use ports::{ClaimantQuery, ClaimantStore, LicenceVerifier, StoreError};
pub use service::ClaimantService;
pub use verification::{VerificationOutcome, VerificationRequest};
