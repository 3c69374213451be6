use crate::claims::{Payload, Timestamp};
use crate::error::{Error, Result};

/// Temporal claims validator
///
/// A payload is valid in the half-open window `[nbf, exp)`. Either bound is
/// optional; a payload without both is always inside its window.
pub struct ClaimsValidator;

impl ClaimsValidator {
    /// Check if the payload is outside its validity window at `now`
    pub fn is_outside_window(payload: &Payload, now: &Timestamp) -> bool {
        Self::check_window(payload, now).is_err()
    }

    /// Validate the temporal claims of `payload` against `now`
    pub fn validate(payload: &Payload, now: &Timestamp) -> Result<()> {
        Self::check_window(payload, now)
    }

    fn check_window(payload: &Payload, now: &Timestamp) -> Result<()> {
        if let Some(exp) = &payload.expiration_time {
            if now.unix() >= exp.unix() {
                tracing::debug!(exp = exp.unix(), now = now.unix(), "token expired");
                return Err(Error::TokenPeriodInvalid);
            }
        }

        if let Some(nbf) = &payload.not_before {
            if now.unix() < nbf.unix() {
                tracing::debug!(nbf = nbf.unix(), now = now.unix(), "token not yet valid");
                return Err(Error::TokenPeriodInvalid);
            }
        }

        Ok(())
    }
}
