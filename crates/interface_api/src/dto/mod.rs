//! Request/response data transfer objects

pub mod auth;
pub mod claimant;
