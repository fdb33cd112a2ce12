//! Per-party key exchange session

use rand::{CryptoRng, RngCore};
use tracing::{debug, instrument, trace, warn};
use zeroize::Zeroize;

use super::config::ExchangeConfig;
use super::identity::{identity_digest, IdentityDigest};
use super::keys::{ConfirmationTag, EphemeralPublicKey, SharedKey, Sm2PrivateKey, Sm2PublicKey};
use super::mqv::{combine, MqvParams, SM2_MQV};
use super::transcript::Transcript;
use super::{Role, State};
use crate::error::{validate, Error, Result};
use smcrypt_algorithms::ec::sm2::{scalar_mult_base_g, Point, Scalar};
use smcrypt_algorithms::error::Error as PrimitiveError;
use smcrypt_api::error::{Error as ApiError, Result as ApiResult};
use smcrypt_api::traits::AuthenticatedKeyExchange;
use smcrypt_params::traditional::sm2::{
    SM2_DEFAULT_UID, SM2_KEX_INITIATOR_TAG_PREFIX, SM2_KEX_RESPONDER_TAG_PREFIX,
};

struct PeerKey {
    public: Sm2PublicKey,
    z: IdentityDigest,
}

/// One party's side of an SM2 key exchange
///
/// Borrows the long-term private key for its whole lifetime. Ephemeral
/// scalars and points are wiped when the session fails, is destroyed or is
/// dropped.
///
/// A protocol error moves the session to [`State::Failed`]. The exception
/// is [`Error::InvalidState`]: a step called out of order is rejected and
/// the session keeps its current state.
pub struct KeyExchange<'a> {
    local: &'a Sm2PrivateKey,
    mqv: &'static MqvParams,
    key_len: usize,
    confirmation: bool,
    z: IdentityDigest,
    peer: Option<PeerKey>,
    role: Option<Role>,
    state: State,
    // initiator only, between initiate and confirm_responder
    r: Option<Scalar>,
    own_ephemeral: Option<Point>,
    peer_ephemeral: Option<Point>,
    // V on the responder side, U on the initiator side
    combined: Option<Point>,
}

impl<'a> KeyExchange<'a> {
    /// Create a session for `local`
    ///
    /// When `peer` is given it is bound under `config.peer_uid`; otherwise
    /// call [`bind_peer`](Self::bind_peer) before the peer key is needed.
    pub fn new(
        local: &'a Sm2PrivateKey,
        peer: Option<&Sm2PublicKey>,
        config: &ExchangeConfig,
    ) -> Result<Self> {
        config.validate()?;
        let z = identity_digest(local.public_key().as_point(), uid_or_default(&config.uid))?;

        let mut session = Self {
            local,
            mqv: &SM2_MQV,
            key_len: config.key_len,
            confirmation: config.confirmation,
            z,
            peer: None,
            role: None,
            state: State::Constructed,
            r: None,
            own_ephemeral: None,
            peer_ephemeral: None,
            combined: None,
        };
        if peer.is_some() {
            session.bind_peer(peer, Some(config.peer_uid.as_slice()))?;
        }

        debug!(
            key_len = config.key_len,
            confirmation = config.confirmation,
            "session created"
        );
        Ok(session)
    }

    /// Bind the peer's long-term public key and identifier
    ///
    /// Passing no key is a no-op. A missing or empty `peer_uid` means
    /// `"1234567812345678"`. Errors leave the session untouched, so a
    /// rejected bind can be retried.
    pub fn bind_peer(&mut self, peer: Option<&Sm2PublicKey>, peer_uid: Option<&[u8]>) -> Result<()> {
        let Some(public) = peer else {
            return Ok(());
        };
        if self.state == State::Failed {
            return Err(Error::InvalidState {
                operation: "bind peer",
                state: self.state,
            });
        }
        if self.peer.is_some() {
            return Err(Error::PeerAlreadyBound);
        }
        let uid = uid_or_default(peer_uid.unwrap_or_default());
        let z = identity_digest(public.as_point(), uid)?;

        self.peer = Some(PeerKey {
            public: public.clone(),
            z,
        });
        debug!(uid_len = uid.len(), "peer bound");
        Ok(())
    }

    /// Initiator step: draw r_A and return R_A = r_A·G
    #[instrument(level = "debug", skip_all, name = "sm2_kex_initiate")]
    pub fn initiate<R: RngCore + CryptoRng>(&mut self, rng: &mut R) -> Result<EphemeralPublicKey> {
        self.initiate_with(|| draw_ephemeral(rng))
    }

    pub(super) fn initiate_with<F>(&mut self, draw: F) -> Result<EphemeralPublicKey>
    where
        F: FnOnce() -> Result<Scalar>,
    {
        let outcome = validate::state("initiate", self.state, State::Constructed)
            .and_then(|()| draw())
            .and_then(|r| self.start_initiator(r));
        self.settle("initiate", outcome)
    }

    fn start_initiator(&mut self, r: Scalar) -> Result<EphemeralPublicKey> {
        let ra = scalar_mult_base_g(&r);
        let message = EphemeralPublicKey::from_point(&ra);

        self.r = Some(r);
        self.own_ephemeral = Some(ra);
        self.role = Some(Role::Initiator);
        self.state = State::Initiated;
        debug!("exchange initiated");
        Ok(message)
    }

    /// Responder step: check R_A, draw r_B, compute V and return R_B with
    /// the optional tag S_B
    #[instrument(level = "debug", skip_all, name = "sm2_kex_respond")]
    pub fn respond<R: RngCore + CryptoRng>(
        &mut self,
        rng: &mut R,
        initiator_ephemeral: &EphemeralPublicKey,
    ) -> Result<(EphemeralPublicKey, Option<ConfirmationTag>)> {
        self.respond_with(|| draw_ephemeral(rng), initiator_ephemeral)
    }

    pub(super) fn respond_with<F>(
        &mut self,
        draw: F,
        initiator_ephemeral: &EphemeralPublicKey,
    ) -> Result<(EphemeralPublicKey, Option<ConfirmationTag>)>
    where
        F: FnOnce() -> Result<Scalar>,
    {
        let outcome = self
            .accept_initiator(initiator_ephemeral)
            .and_then(|ra| Ok((ra, draw()?)))
            .and_then(|(ra, r)| self.complete_response(r, ra));
        self.settle("respond", outcome)
    }

    fn accept_initiator(&self, initiator_ephemeral: &EphemeralPublicKey) -> Result<Point> {
        validate::state("respond", self.state, State::Constructed)?;
        if self.peer.is_none() {
            return Err(Error::NoPeerKey);
        }
        initiator_ephemeral.to_point(Role::Initiator)
    }

    fn complete_response(
        &mut self,
        r: Scalar,
        ra: Point,
    ) -> Result<(EphemeralPublicKey, Option<ConfirmationTag>)> {
        let peer = self.peer.as_ref().ok_or(Error::NoPeerKey)?;
        let rb = scalar_mult_base_g(&r);
        let v = combine(
            self.mqv,
            Role::Responder,
            self.local.scalar(),
            &r,
            &rb,
            peer.public.as_point(),
            &ra,
        )?;
        drop(r);

        let message = EphemeralPublicKey::from_point(&rb);
        self.role = Some(Role::Responder);
        self.own_ephemeral = Some(rb);
        self.peer_ephemeral = Some(ra);
        self.combined = Some(v);

        let tag = if self.confirmation {
            Some(self.transcript("respond")?.tag(SM2_KEX_RESPONDER_TAG_PREFIX)?)
        } else {
            None
        };

        self.state = State::Responded;
        debug!(confirmation = tag.is_some(), "exchange responded");
        Ok((message, tag))
    }

    /// Initiator step: check R_B and the optional S_B, derive the shared key
    /// and return it with the optional tag S_A
    ///
    /// An empty `responder_tag` is treated like `None`.
    #[instrument(level = "debug", skip_all, name = "sm2_kex_confirm_responder")]
    pub fn confirm_responder(
        &mut self,
        responder_ephemeral: &EphemeralPublicKey,
        responder_tag: Option<&[u8]>,
    ) -> Result<(SharedKey, Option<ConfirmationTag>)> {
        let outcome = validate::state("confirm responder", self.state, State::Initiated)
            .and_then(|()| self.complete_initiator(responder_ephemeral, responder_tag));
        self.settle("confirm responder", outcome)
    }

    fn complete_initiator(
        &mut self,
        responder_ephemeral: &EphemeralPublicKey,
        responder_tag: Option<&[u8]>,
    ) -> Result<(SharedKey, Option<ConfirmationTag>)> {
        let peer = self.peer.as_ref().ok_or(Error::NoPeerKey)?;
        let rb = responder_ephemeral.to_point(Role::Responder)?;
        let (r, ra) = match (self.r.take(), self.own_ephemeral.as_ref()) {
            (Some(r), Some(ra)) => (r, ra),
            _ => {
                return Err(Error::InvalidState {
                    operation: "confirm responder",
                    state: self.state,
                })
            }
        };
        let u = combine(
            self.mqv,
            Role::Initiator,
            self.local.scalar(),
            &r,
            ra,
            peer.public.as_point(),
            &rb,
        )?;
        drop(r);

        self.peer_ephemeral = Some(rb);
        self.combined = Some(u);

        let transcript = self.transcript("confirm responder")?;
        if let Some(received) = responder_tag.filter(|tag| !tag.is_empty()) {
            let expected = transcript.tag(SM2_KEX_RESPONDER_TAG_PREFIX)?;
            if !expected.verify(received) {
                return Err(Error::InvalidConfirmationTag {
                    role: Role::Responder,
                });
            }
        }
        let key = transcript.shared_key(self.key_len)?;
        let tag = if self.confirmation {
            Some(transcript.tag(SM2_KEX_INITIATOR_TAG_PREFIX)?)
        } else {
            None
        };

        self.state = State::Confirmed;
        debug!(role = %Role::Initiator, "exchange confirmed");
        trace!(key_len = key.len(), "shared key derived");
        Ok((key, tag))
    }

    /// Responder step: check the optional S_A and derive the shared key
    ///
    /// Any `Some` tag is verified, so an empty one is a mismatch.
    #[instrument(level = "debug", skip_all, name = "sm2_kex_confirm_initiator")]
    pub fn confirm_initiator(&mut self, initiator_tag: Option<&[u8]>) -> Result<SharedKey> {
        let outcome = validate::state("confirm initiator", self.state, State::Responded)
            .and_then(|()| self.complete_responder(initiator_tag));
        self.settle("confirm initiator", outcome)
    }

    fn complete_responder(&mut self, initiator_tag: Option<&[u8]>) -> Result<SharedKey> {
        let transcript = self.transcript("confirm initiator")?;
        if let Some(received) = initiator_tag {
            let expected = transcript.tag(SM2_KEX_INITIATOR_TAG_PREFIX)?;
            if !expected.verify(received) {
                return Err(Error::InvalidConfirmationTag {
                    role: Role::Initiator,
                });
            }
        }
        let key = transcript.shared_key(self.key_len)?;

        self.state = State::Confirmed;
        debug!(role = %Role::Responder, "exchange confirmed");
        trace!(key_len = key.len(), "shared key derived");
        Ok(key)
    }

    /// Derive the shared key again from a confirmed session
    pub fn shared_key(&self) -> Result<SharedKey> {
        validate::state("derive shared key", self.state, State::Confirmed)?;
        self.transcript("derive shared key")?
            .shared_key(self.key_len)
    }

    /// Wipe every secret and move to [`State::Failed`]
    pub fn destroy(&mut self) {
        self.wipe_ephemeral();
        self.z.zeroize();
        self.peer = None;
        self.state = State::Failed;
        debug!("session destroyed");
    }

    /// Current lifecycle state
    pub fn state(&self) -> State {
        self.state
    }

    /// Role taken by the first protocol step, if any
    pub fn role(&self) -> Option<Role> {
        self.role
    }

    /// Whether a peer public key is bound
    pub fn is_peer_bound(&self) -> bool {
        self.peer.is_some()
    }

    /// Length in bytes of the key this session derives
    pub fn key_len(&self) -> usize {
        self.key_len
    }

    #[cfg(test)]
    pub(super) fn combined_point(&self) -> Option<&Point> {
        self.combined.as_ref()
    }

    #[cfg(test)]
    pub(super) fn holds_ephemeral_secrets(&self) -> bool {
        self.r.is_some()
            || self.own_ephemeral.is_some()
            || self.peer_ephemeral.is_some()
            || self.combined.is_some()
    }

    fn transcript(&self, operation: &'static str) -> Result<Transcript<'_>> {
        match (
            self.role,
            self.peer.as_ref(),
            self.combined.as_ref(),
            self.own_ephemeral.as_ref(),
            self.peer_ephemeral.as_ref(),
        ) {
            (Some(role), Some(peer), Some(combined), Some(own), Some(theirs)) => Ok(
                Transcript::new(role, combined, self.z.as_ref(), peer.z.as_ref(), own, theirs),
            ),
            _ => Err(Error::InvalidState {
                operation,
                state: self.state,
            }),
        }
    }

    /// Out-of-order calls are rejected as they are; every other error is
    /// terminal
    fn settle<T>(&mut self, operation: &'static str, outcome: Result<T>) -> Result<T> {
        match &outcome {
            Ok(_) => {}
            Err(Error::InvalidState { state, .. }) => {
                warn!(operation, state = %state, "operation rejected");
            }
            Err(err) => {
                warn!(operation, error = %err, "key exchange aborted");
                self.wipe_ephemeral();
                self.state = State::Failed;
            }
        }
        outcome
    }

    fn wipe_ephemeral(&mut self) {
        self.r.zeroize();
        self.own_ephemeral.zeroize();
        self.peer_ephemeral.zeroize();
        self.combined.zeroize();
    }
}

impl Drop for KeyExchange<'_> {
    fn drop(&mut self) {
        self.wipe_ephemeral();
    }
}

fn uid_or_default(uid: &[u8]) -> &[u8] {
    if uid.is_empty() {
        SM2_DEFAULT_UID
    } else {
        uid
    }
}

fn draw_ephemeral<R: RngCore + CryptoRng>(rng: &mut R) -> Result<Scalar> {
    Scalar::random(rng).map_err(|err| match err {
        PrimitiveError::RandomSource { .. } => Error::RandomSource,
        other => Error::Primitive(other),
    })
}

impl AuthenticatedKeyExchange for KeyExchange<'_> {
    type EphemeralKey = EphemeralPublicKey;
    type Tag = ConfirmationTag;
    type SharedSecret = SharedKey;

    fn name() -> &'static str {
        "SM2-KEX"
    }

    fn initiate<R: RngCore + CryptoRng>(&mut self, rng: &mut R) -> ApiResult<EphemeralPublicKey> {
        KeyExchange::initiate(self, rng).map_err(ApiError::from)
    }

    fn respond<R: RngCore + CryptoRng>(
        &mut self,
        rng: &mut R,
        initiator_ephemeral: &EphemeralPublicKey,
    ) -> ApiResult<(EphemeralPublicKey, Option<ConfirmationTag>)> {
        KeyExchange::respond(self, rng, initiator_ephemeral).map_err(ApiError::from)
    }

    fn confirm_responder(
        &mut self,
        responder_ephemeral: &EphemeralPublicKey,
        responder_tag: Option<&[u8]>,
    ) -> ApiResult<(SharedKey, Option<ConfirmationTag>)> {
        KeyExchange::confirm_responder(self, responder_ephemeral, responder_tag)
            .map_err(ApiError::from)
    }

    fn confirm_initiator(&mut self, initiator_tag: Option<&[u8]>) -> ApiResult<SharedKey> {
        KeyExchange::confirm_initiator(self, initiator_tag).map_err(ApiError::from)
    }

    fn destroy(&mut self) {
        KeyExchange::destroy(self)
    }
}
