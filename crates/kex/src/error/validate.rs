//! Validation utilities for key exchange operations

use super::{Error, Result};
use crate::sm2::{Role, State};

/// Fail with `InvalidState` unless the session is in `expected`
pub fn state(operation: &'static str, current: State, expected: State) -> Result<()> {
    if current != expected {
        return Err(Error::InvalidState {
            operation,
            state: current,
        });
    }
    Ok(())
}

/// Validate a received ephemeral point
pub fn ephemeral_key(condition: bool, role: Role) -> Result<()> {
    if !condition {
        return Err(Error::InvalidEphemeralKey { role });
    }
    Ok(())
}

/// Validate a configuration value
pub fn config(condition: bool, field: &'static str, reason: &'static str) -> Result<()> {
    if !condition {
        return Err(Error::InvalidConfig { field, reason });
    }
    Ok(())
}
