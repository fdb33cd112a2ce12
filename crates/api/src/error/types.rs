//! Error type definitions for cryptographic operations

#[cfg(feature = "std")]
use std::string::String;

/// Primary error type shared by every smcrypt crate
///
/// Crate-local errors (primitives, key exchange) convert into this type so
/// that callers only need to match on one enum at the API boundary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Malformed, out-of-range or unexpected key material
    InvalidKey {
        context: &'static str,
        #[cfg(feature = "std")]
        message: String,
    },

    /// Invalid length error with context
    InvalidLength {
        context: &'static str,
        expected: usize,
        actual: usize,
    },

    /// Invalid parameter error
    InvalidParameter {
        context: &'static str,
        #[cfg(feature = "std")]
        message: String,
    },

    /// Serialization error
    SerializationError {
        context: &'static str,
        #[cfg(feature = "std")]
        message: String,
    },

    /// The random source failed or was exhausted
    RandomGenerationError {
        context: &'static str,
        #[cfg(feature = "std")]
        message: String,
    },

    /// A confirmation value or other authenticator did not verify
    AuthenticationFailed {
        context: &'static str,
        #[cfg(feature = "std")]
        message: String,
    },

    /// A multi-step protocol was aborted or driven out of order
    KeyExchangeFailed {
        context: &'static str,
        #[cfg(feature = "std")]
        message: String,
    },

    /// Other error
    Other {
        context: &'static str,
        #[cfg(feature = "std")]
        message: String,
    },
}

/// Result type for cryptographic operations
pub type Result<T> = core::result::Result<T, Error>;

impl Error {
    /// Replace the context of an existing error, keeping its kind
    pub fn with_context(self, context: &'static str) -> Self {
        match self {
            Self::InvalidKey { .. } => Self::InvalidKey {
                context,
                #[cfg(feature = "std")]
                message: String::new(),
            },
            Self::InvalidLength {
                expected, actual, ..
            } => Self::InvalidLength {
                context,
                expected,
                actual,
            },
            Self::InvalidParameter { .. } => Self::InvalidParameter {
                context,
                #[cfg(feature = "std")]
                message: String::new(),
            },
            Self::SerializationError { .. } => Self::SerializationError {
                context,
                #[cfg(feature = "std")]
                message: String::new(),
            },
            Self::RandomGenerationError { .. } => Self::RandomGenerationError {
                context,
                #[cfg(feature = "std")]
                message: String::new(),
            },
            Self::AuthenticationFailed { .. } => Self::AuthenticationFailed {
                context,
                #[cfg(feature = "std")]
                message: String::new(),
            },
            Self::KeyExchangeFailed { .. } => Self::KeyExchangeFailed {
                context,
                #[cfg(feature = "std")]
                message: String::new(),
            },
            Self::Other { .. } => Self::Other {
                context,
                #[cfg(feature = "std")]
                message: String::new(),
            },
        }
    }

    /// Add a message to an existing error (when std is available)
    #[cfg(feature = "std")]
    pub fn with_message(self, message: impl Into<String>) -> Self {
        let message = message.into();
        match self {
            Self::InvalidKey { context, .. } => Self::InvalidKey { context, message },
            Self::InvalidLength {
                context,
                expected,
                actual,
            } => Self::InvalidLength {
                context,
                expected,
                actual,
            },
            Self::InvalidParameter { context, .. } => Self::InvalidParameter { context, message },
            Self::SerializationError { context, .. } => {
                Self::SerializationError { context, message }
            }
            Self::RandomGenerationError { context, .. } => {
                Self::RandomGenerationError { context, message }
            }
            Self::AuthenticationFailed { context, .. } => {
                Self::AuthenticationFailed { context, message }
            }
            Self::KeyExchangeFailed { context, .. } => Self::KeyExchangeFailed { context, message },
            Self::Other { context, .. } => Self::Other { context, message },
        }
    }

    /// The static context string attached to this error
    pub fn context(&self) -> &'static str {
        match self {
            Self::InvalidKey { context, .. }
            | Self::InvalidLength { context, .. }
            | Self::InvalidParameter { context, .. }
            | Self::SerializationError { context, .. }
            | Self::RandomGenerationError { context, .. }
            | Self::AuthenticationFailed { context, .. }
            | Self::KeyExchangeFailed { context, .. }
            | Self::Other { context, .. } => *context,
        }
    }
}

#[cfg(feature = "std")]
fn write_detail(
    f: &mut core::fmt::Formatter<'_>,
    kind: &str,
    context: &str,
    message: &str,
) -> core::fmt::Result {
    if message.is_empty() {
        write!(f, "{}: {}", kind, context)
    } else {
        write!(f, "{}: {}: {}", kind, context, message)
    }
}

#[cfg(feature = "std")]
impl core::fmt::Display for Error {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::InvalidKey { context, message } => write_detail(f, "Invalid key", context, message),
            Self::InvalidLength {
                context,
                expected,
                actual,
            } => write!(
                f,
                "{}: invalid length (expected {}, got {})",
                context, expected, actual
            ),
            Self::InvalidParameter { context, message } => {
                write_detail(f, "Invalid parameter", context, message)
            }
            Self::SerializationError { context, message } => {
                write_detail(f, "Serialization error", context, message)
            }
            Self::RandomGenerationError { context, message } => {
                write_detail(f, "Random generation error", context, message)
            }
            Self::AuthenticationFailed { context, message } => {
                write_detail(f, "Authentication failed", context, message)
            }
            Self::KeyExchangeFailed { context, message } => {
                write_detail(f, "Key exchange failed", context, message)
            }
            Self::Other { context, message } => write_detail(f, "Error", context, message),
        }
    }
}

#[cfg(not(feature = "std"))]
impl core::fmt::Display for Error {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::InvalidKey { context } => write!(f, "Invalid key: {}", context),
            Self::InvalidLength {
                context,
                expected,
                actual,
            } => write!(
                f,
                "{}: invalid length (expected {}, got {})",
                context, expected, actual
            ),
            Self::InvalidParameter { context } => write!(f, "Invalid parameter: {}", context),
            Self::SerializationError { context } => write!(f, "Serialization error: {}", context),
            Self::RandomGenerationError { context } => {
                write!(f, "Random generation error: {}", context)
            }
            Self::AuthenticationFailed { context } => {
                write!(f, "Authentication failed: {}", context)
            }
            Self::KeyExchangeFailed { context } => write!(f, "Key exchange failed: {}", context),
            Self::Other { context } => write!(f, "Error: {}", context),
        }
    }
}
