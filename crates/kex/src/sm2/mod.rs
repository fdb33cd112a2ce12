//! SM2 authenticated key exchange (GB/T 32918.3)
//!
//! The initiator A and the responder B each drive a [`KeyExchange`] session
//! bound to their long-term key:
//!
//! 1. A: [`KeyExchange::initiate`] draws r_A and sends R_A = r_A·G.
//! 2. B: [`KeyExchange::respond`] draws r_B, computes V, sends R_B and S_B.
//! 3. A: [`KeyExchange::confirm_responder`] computes U = V, checks S_B,
//!    derives K and sends S_A.
//! 4. B: [`KeyExchange::confirm_initiator`] checks S_A and derives K.
//!
//! Any failure moves the session to [`State::Failed`] and wipes its
//! ephemeral secrets.

use core::fmt;

mod config;
mod identity;
mod keys;
mod mqv;
mod session;
mod transcript;

pub use config::ExchangeConfig;
pub use identity::{identity_digest, IdentityDigest};
pub use keys::{ConfirmationTag, EphemeralPublicKey, SharedKey, Sm2PrivateKey, Sm2PublicKey};
pub use mqv::associative_value;
pub use session::KeyExchange;

/// Side of the exchange a session plays
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Role {
    /// Party A, sends the first ephemeral point
    Initiator,
    /// Party B
    Responder,
}

impl Role {
    /// Name of the combined point computed by this role
    pub(crate) fn combined_point_name(self) -> &'static str {
        match self {
            Role::Initiator => "U",
            Role::Responder => "V",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Role::Initiator => "initiator",
            Role::Responder => "responder",
        })
    }
}

/// Session lifecycle
///
/// ```text
/// Constructed --initiate--> Initiated --confirm_responder--> Confirmed
/// Constructed --respond---> Responded --confirm_initiator--> Confirmed
/// any --error or destroy--> Failed
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum State {
    /// Keys bound, no ephemeral drawn yet
    Constructed,
    /// Initiator sent R_A
    Initiated,
    /// Responder sent R_B and holds V
    Responded,
    /// Shared key agreed
    Confirmed,
    /// Aborted; every secret has been wiped
    Failed,
}

impl fmt::Display for State {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            State::Constructed => "constructed",
            State::Initiated => "initiated",
            State::Responded => "responded",
            State::Confirmed => "confirmed",
            State::Failed => "failed",
        })
    }
}
