//! Validation helpers that produce API-level errors

use super::types::{Error, Result};

#[cfg(feature = "std")]
use std::string::ToString;

/// Fail with `InvalidParameter` unless `condition` holds
#[inline]
pub fn parameter(condition: bool, context: &'static str, reason: &'static str) -> Result<()> {
    if !condition {
        return Err(Error::InvalidParameter {
            context,
            #[cfg(feature = "std")]
            message: reason.to_string(),
        });
    }
    #[cfg(not(feature = "std"))]
    let _ = reason;
    Ok(())
}

/// Fail with `InvalidLength` unless `actual == expected`
#[inline]
pub fn length(context: &'static str, actual: usize, expected: usize) -> Result<()> {
    if actual != expected {
        return Err(Error::InvalidLength {
            context,
            expected,
            actual,
        });
    }
    Ok(())
}

/// Fail with `InvalidLength` when `actual > max`
#[inline]
pub fn max_length(context: &'static str, actual: usize, max: usize) -> Result<()> {
    if actual > max {
        return Err(Error::InvalidLength {
            context,
            expected: max,
            actual,
        });
    }
    Ok(())
}

/// Fail with `InvalidKey` unless `condition` holds
#[inline]
pub fn key(condition: bool, context: &'static str, reason: &'static str) -> Result<()> {
    if !condition {
        return Err(Error::InvalidKey {
            context,
            #[cfg(feature = "std")]
            message: reason.to_string(),
        });
    }
    #[cfg(not(feature = "std"))]
    let _ = reason;
    Ok(())
}
