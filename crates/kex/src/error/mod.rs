//! Error handling for key exchange operations

#[cfg(feature = "std")]
use std::string::ToString;

use core::fmt;

use crate::sm2::{Role, State};
use smcrypt_algorithms::error::Error as PrimitiveError;
use smcrypt_api::error::Error as CoreError;

/// Error type for key exchange operations
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Primitive error
    Primitive(PrimitiveError),

    /// An operation needed the peer's long-term public key before it was bound
    NoPeerKey,

    /// A peer public key was already bound to the session
    PeerAlreadyBound,

    /// The peer public key is not an sm2p256v1 point the exchange can use
    UnsupportedPeerKey,

    /// The ephemeral point received from `role` is malformed, off the curve
    /// or the identity
    InvalidEphemeralKey {
        /// Party that sent the point
        role: Role,
    },

    /// The combined point came out as the identity
    InfiniteCombination {
        /// `"V"` on the responder side, `"U"` on the initiator side
        point: &'static str,
    },

    /// The confirmation tag received from `role` did not verify
    InvalidConfirmationTag {
        /// Party that sent the tag
        role: Role,
    },

    /// The random source failed or kept producing out-of-range values
    RandomSource,

    /// The operation is not allowed in the current session state
    InvalidState {
        /// Operation that was attempted
        operation: &'static str,
        /// State the session was in
        state: State,
    },

    /// The requested key length is outside the range of the SM3 KDF
    KeyDerivation,

    /// A configuration value was rejected
    InvalidConfig {
        /// Configuration field
        field: &'static str,
        /// Why it was rejected
        reason: &'static str,
    },
}

/// Result type for key exchange operations
pub type Result<T> = core::result::Result<T, Error>;

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Primitive(e) => write!(f, "Primitive error: {}", e),
            Error::NoPeerKey => f.write_str("no peer public key given"),
            Error::PeerAlreadyBound => f.write_str("'peerPub' already exists"),
            Error::UnsupportedPeerKey => f.write_str("peer public key is not expected/supported"),
            Error::InvalidEphemeralKey { role } => {
                write!(f, "invalid {}'s ephemeral public key", role)
            }
            Error::InfiniteCombination { point } => {
                write!(f, "key exchange failed, {} is infinity point", point)
            }
            Error::InvalidConfirmationTag { role } => write!(f, "invalid {}'s signature", role),
            Error::RandomSource => f.write_str("random source failed or was exhausted"),
            Error::InvalidState { operation, state } => {
                write!(f, "cannot {} while the session is {}", operation, state)
            }
            Error::KeyDerivation => {
                f.write_str("requested key length exceeds the SM3 KDF output range")
            }
            Error::InvalidConfig { field, reason } => {
                write!(f, "invalid configuration for {}: {}", field, reason)
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Primitive(e) => Some(e),
            _ => None,
        }
    }
}

impl From<PrimitiveError> for Error {
    fn from(err: PrimitiveError) -> Self {
        Error::Primitive(err)
    }
}

// From Error to CoreError
impl From<Error> for CoreError {
    fn from(err: Error) -> Self {
        #[cfg(feature = "std")]
        let message = err.to_string();

        match err {
            Error::Primitive(e) => e.into(),
            Error::NoPeerKey | Error::PeerAlreadyBound => CoreError::KeyExchangeFailed {
                context: "SM2 peer binding",
                #[cfg(feature = "std")]
                message,
            },
            Error::UnsupportedPeerKey => CoreError::InvalidKey {
                context: "SM2 peer public key",
                #[cfg(feature = "std")]
                message,
            },
            Error::InvalidEphemeralKey { .. } => CoreError::InvalidKey {
                context: "SM2 ephemeral public key",
                #[cfg(feature = "std")]
                message,
            },
            Error::InfiniteCombination { .. } | Error::InvalidState { .. } => {
                CoreError::KeyExchangeFailed {
                    context: "SM2 key exchange",
                    #[cfg(feature = "std")]
                    message,
                }
            }
            Error::InvalidConfirmationTag { .. } => CoreError::AuthenticationFailed {
                context: "SM2 key confirmation",
                #[cfg(feature = "std")]
                message,
            },
            Error::RandomSource => CoreError::RandomGenerationError {
                context: "SM2 ephemeral key",
                #[cfg(feature = "std")]
                message,
            },
            Error::KeyDerivation | Error::InvalidConfig { .. } => CoreError::InvalidParameter {
                context: "SM2 key exchange configuration",
                #[cfg(feature = "std")]
                message,
            },
        }
    }
}

pub mod validate;


pub use smcrypt_api::error::ResultExt;
