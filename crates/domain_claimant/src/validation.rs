//! Claimant validation rules
//!
//! Two schemas, mirroring the create/update split of the API:
//!
//! ## Create
//! - `firstName`, `lastName`, `street`, `city` required non-empty
//! - `postCode` required, UK postcode pattern
//! - `refNo` required, two letters + six digits + optional trailing letter
//!   (whitespace tolerated around and between the digits)
//! - `drivingLicenceNo` optional; when present and non-empty it must match
//!   the licence pattern. An empty string counts as absent.
//! - `dob` required, a valid `YYYY-MM-DD` date
//!
//! ## Update
//! - only `firstName`, `lastName`, `street`, `city`, `postCode` permitted,
//!   each a non-empty string when present
//! - any other key, `refNo` and `id` included, rejects the payload as a
//!   whole. Immutability of `refNo` is enforced here by strict rejection,
//!   not by silently stripping the field.
//!
//! Both schemas are fail-fast: the first violation aborts validation.

use chrono::NaiveDate;
use once_cell::sync::Lazy;
use regex::Regex;
use serde_json::Value;

use crate::claimant::{ClaimantUpdate, CreateClaimant, NewClaimant};
use crate::error::ValidationError;

/// UK postcode, including the GIR 0AA special case.
static POST_CODE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"^(?:[Gg][Ii][Rr] 0[Aa]{2}|(?:[A-Za-z][0-9]{1,2}|[A-Za-z][A-Ha-hJ-Yj-y][0-9]{1,2}|[A-Za-z][0-9][A-Za-z]|[A-Za-z][A-Ha-hJ-Yj-y][0-9]?[A-Za-z])\s?[0-9][A-Za-z]{2})$",
    )
    .expect("postcode pattern")
});

/// Two letters, six digits, optional trailing letter; interior whitespace
/// between the digits is tolerated.
static REF_NO: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^\s*[A-Za-z]{2}(?:\s*[0-9]\s*){6}[A-Za-z]?\s*$").expect("refNo pattern")
});

/// At least two letters, six digits, six alphanumerics.
static DRIVING_LICENCE_NO: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[A-Za-z]{2,}[0-9]{6}[A-Za-z0-9]{6}$").expect("licence pattern")
});

/// The mutable field subset an update payload may name.
const UPDATABLE_FIELDS: [&str; 5] = ["firstName", "lastName", "street", "city", "postCode"];

fn require_non_empty(
    field: &'static str,
    value: Option<String>,
) -> Result<String, ValidationError> {
    match value {
        Some(v) if !v.trim().is_empty() => Ok(v),
        Some(_) => Err(ValidationError::new(field, "must not be empty")),
        None => Err(ValidationError::required(field)),
    }
}

/// Validates a create payload, producing a [`NewClaimant`] ready for the
/// workflow.
///
/// Fail-fast: returns the first violation found, in declaration order of
/// the schema above.
pub fn validate_create(input: CreateClaimant) -> Result<NewClaimant, ValidationError> {
    let first_name = require_non_empty("firstName", input.first_name)?;
    let last_name = require_non_empty("lastName", input.last_name)?;
    let street = require_non_empty("street", input.street)?;
    let city = require_non_empty("city", input.city)?;

    let post_code = require_non_empty("postCode", input.post_code)?;
    if !POST_CODE.is_match(&post_code) {
        return Err(ValidationError::new(
            "postCode",
            "must be a valid UK postcode",
        ));
    }

    let ref_no = require_non_empty("refNo", input.ref_no)?;
    if !REF_NO.is_match(&ref_no) {
        return Err(ValidationError::new(
            "refNo",
            "must be two letters followed by six digits and an optional letter",
        ));
    }

    // Empty string is how callers omit the licence; normalise it away so the
    // workflow's "is a licence present" check has a single representation.
    let driving_licence_no = match input.driving_licence_no {
        Some(ref v) if v.is_empty() => None,
        Some(v) => {
            if !DRIVING_LICENCE_NO.is_match(&v) {
                return Err(ValidationError::new(
                    "drivingLicenceNo",
                    "must be at least two letters, six digits, then six alphanumerics",
                ));
            }
            Some(v)
        }
        None => None,
    };

    let dob = match input.dob {
        Some(raw) => NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d").map_err(|_| {
            ValidationError::new("dob", "must be a valid date in YYYY-MM-DD format")
        })?,
        None => return Err(ValidationError::required("dob")),
    };

    Ok(NewClaimant {
        first_name,
        last_name,
        street,
        city,
        post_code,
        ref_no,
        driving_licence_no,
        nino: input.nino,
        dob,
    })
}

/// Validates an update payload against the restricted field subset.
///
/// Works on the raw JSON object so that forbidden keys can be rejected by
/// name rather than silently dropped during deserialization.
pub fn validate_update(payload: &Value) -> Result<ClaimantUpdate, ValidationError> {
    let object = payload
        .as_object()
        .ok_or_else(|| ValidationError::new("payload", "must be a JSON object"))?;

    let mut update = ClaimantUpdate::default();

    for (key, value) in object {
        if key == "refNo" {
            return Err(ValidationError::new("refNo", "cannot be updated"));
        }
        if !UPDATABLE_FIELDS.contains(&key.as_str()) {
            return Err(ValidationError::new(key.clone(), "is not permitted"));
        }

        let text = value
            .as_str()
            .ok_or_else(|| ValidationError::new(key.clone(), "must be a string"))?;
        if text.trim().is_empty() {
            return Err(ValidationError::new(key.clone(), "must not be empty"));
        }

        let text = text.to_string();
        match key.as_str() {
            "firstName" => update.first_name = Some(text),
            "lastName" => update.last_name = Some(text),
            "street" => update.street = Some(text),
            "city" => update.city = Some(text),
            "postCode" => update.post_code = Some(text),
            _ => unreachable!("key checked against UPDATABLE_FIELDS"),
        }
    }

    Ok(update)
}
