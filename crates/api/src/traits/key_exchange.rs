//! Trait definition for interactive authenticated key exchange
//!
//! A two-party protocol in which each side holds a long-term key pair, swaps
//! one ephemeral public value with the peer, and optionally proves possession
//! of the agreed secret with a confirmation tag.

use super::serialize::Serialize;
use crate::Result;
use rand::{CryptoRng, RngCore};
use zeroize::Zeroize;

/// Four-step authenticated key exchange driven by the initiator and the
/// responder on their own session objects.
///
/// Flow: `initiate` (A) -> `respond` (B) -> `confirm_responder` (A) ->
/// `confirm_initiator` (B). Any error is terminal for the session.
pub trait AuthenticatedKeyExchange {
    /// Ephemeral public value sent to the peer.
    type EphemeralKey: Clone + Serialize;

    /// Key-confirmation tag sent to the peer.
    type Tag: Clone + AsRef<[u8]>;

    /// Agreed symmetric key.
    type SharedSecret: Zeroize + AsRef<[u8]>;

    /// Algorithm name for diagnostics.
    fn name() -> &'static str;

    /// Initiator: draw an ephemeral key pair and return the public half.
    fn initiate<R: RngCore + CryptoRng>(&mut self, rng: &mut R) -> Result<Self::EphemeralKey>;

    /// Responder: consume the initiator's ephemeral key, return our own and
    /// an optional confirmation tag.
    fn respond<R: RngCore + CryptoRng>(
        &mut self,
        rng: &mut R,
        initiator_ephemeral: &Self::EphemeralKey,
    ) -> Result<(Self::EphemeralKey, Option<Self::Tag>)>;

    /// Initiator: consume the responder's ephemeral key and optional tag,
    /// return the shared key and an optional tag of our own.
    fn confirm_responder(
        &mut self,
        responder_ephemeral: &Self::EphemeralKey,
        responder_tag: Option<&[u8]>,
    ) -> Result<(Self::SharedSecret, Option<Self::Tag>)>;

    /// Responder: check the initiator's optional tag and return the shared key.
    fn confirm_initiator(&mut self, initiator_tag: Option<&[u8]>) -> Result<Self::SharedSecret>;

    /// Wipe every secret held by the session.
    fn destroy(&mut self);
}
