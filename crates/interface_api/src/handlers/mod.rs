//! Request handlers

pub mod claimants;
pub mod health;
pub mod login;
