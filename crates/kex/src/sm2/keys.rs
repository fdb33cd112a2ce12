//! Long-term and ephemeral key types for the SM2 key exchange

use core::fmt;

#[cfg(not(feature = "std"))]
use alloc::{string::String, vec::Vec};

use rand::{CryptoRng, RngCore};
use zeroize::{Zeroize, Zeroizing};

use super::Role;
use crate::error::{validate, Error, Result};
use smcrypt_algorithms::ec::sm2::{
    self as ec, Point, Scalar, SM2_POINT_UNCOMPRESSED_SIZE, SM2_SCALAR_SIZE,
};
use smcrypt_algorithms::error::validate as primitive_validate;
use smcrypt_api::error::Result as ApiResult;
use smcrypt_api::traits::{Serialize, SerializeSecret};
use smcrypt_internal::constant_time::ct_eq;
use smcrypt_params::utils::hash::SM3_OUTPUT_SIZE;

/// Shared key produced by a completed exchange
pub type SharedKey = smcrypt_api::Key;

/// SM2 long-term private key d ∈ [1, n) together with its public point d·G
#[derive(Clone)]
pub struct Sm2PrivateKey {
    d: Scalar,
    public: Sm2PublicKey,
}

impl Sm2PrivateKey {
    /// Draw a fresh key pair
    pub fn generate<R: RngCore + CryptoRng>(rng: &mut R) -> Result<Self> {
        let (d, point) = ec::generate_keypair(rng).map_err(|_| Error::RandomSource)?;
        Ok(Self {
            d,
            public: Sm2PublicKey { point },
        })
    }

    /// Parse a 32-byte big-endian private scalar
    ///
    /// Zero and values ≥ n are rejected rather than reduced.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        primitive_validate::length("SM2 private key", bytes.len(), SM2_SCALAR_SIZE)?;
        let mut buf = Zeroizing::new([0u8; SM2_SCALAR_SIZE]);
        buf.copy_from_slice(bytes);
        let d = Scalar::from_canonical_bytes(*buf)?;
        let point = ec::scalar_mult_base_g(&d);
        Ok(Self {
            d,
            public: Sm2PublicKey { point },
        })
    }

    /// The matching public key
    pub fn public_key(&self) -> &Sm2PublicKey {
        &self.public
    }

    pub(crate) fn scalar(&self) -> &Scalar {
        &self.d
    }
}

impl SerializeSecret for Sm2PrivateKey {
    fn from_bytes(bytes: &[u8]) -> ApiResult<Self> {
        Sm2PrivateKey::from_bytes(bytes).map_err(Into::into)
    }

    fn to_bytes_zeroizing(&self) -> Zeroizing<Vec<u8>> {
        let mut bytes = self.d.serialize();
        let out = Zeroizing::new(bytes.to_vec());
        bytes.zeroize();
        out
    }
}

impl fmt::Debug for Sm2PrivateKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Sm2PrivateKey")
            .field("d", &"[REDACTED]")
            .field("public", &self.public)
            .finish()
    }
}

/// SM2 long-term public key, always a non-identity point on sm2p256v1
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Sm2PublicKey {
    point: Point,
}

impl Sm2PublicKey {
    /// Wrap an already validated curve point
    pub fn from_point(point: Point) -> Result<Self> {
        if point.is_identity() {
            return Err(Error::UnsupportedPeerKey);
        }
        Ok(Self { point })
    }

    /// Parse an uncompressed `04 ‖ X ‖ Y` encoding
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        let point = Point::deserialize_uncompressed(bytes).map_err(|_| Error::UnsupportedPeerKey)?;
        Self::from_point(point)
    }

    /// Uncompressed encoding
    pub fn to_bytes(&self) -> [u8; SM2_POINT_UNCOMPRESSED_SIZE] {
        self.point.serialize_uncompressed()
    }

    /// The underlying curve point
    pub fn as_point(&self) -> &Point {
        &self.point
    }
}

impl Serialize for Sm2PublicKey {
    fn from_bytes(bytes: &[u8]) -> ApiResult<Self> {
        Sm2PublicKey::from_bytes(bytes).map_err(Into::into)
    }

    fn to_bytes(&self) -> Vec<u8> {
        Sm2PublicKey::to_bytes(self).to_vec()
    }
}

/// Ephemeral point R = r·G as it travels between the parties
///
/// Parsing only checks the length; curve membership is checked by the
/// operation that consumes the point so that a bad point aborts the
/// session.
#[derive(Clone, PartialEq, Eq, Zeroize)]
pub struct EphemeralPublicKey {
    bytes: [u8; SM2_POINT_UNCOMPRESSED_SIZE],
}

impl EphemeralPublicKey {
    /// Accept a 65-byte uncompressed encoding
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        primitive_validate::length(
            "SM2 ephemeral public key",
            bytes.len(),
            SM2_POINT_UNCOMPRESSED_SIZE,
        )?;
        let mut out = [0u8; SM2_POINT_UNCOMPRESSED_SIZE];
        out.copy_from_slice(bytes);
        Ok(Self { bytes: out })
    }

    /// Raw encoding
    pub fn as_bytes(&self) -> &[u8; SM2_POINT_UNCOMPRESSED_SIZE] {
        &self.bytes
    }

    pub(crate) fn from_point(point: &Point) -> Self {
        Self {
            bytes: point.serialize_uncompressed(),
        }
    }

    /// Decode and validate a point sent by `sender`
    pub(crate) fn to_point(&self, sender: Role) -> Result<Point> {
        let point =
            Point::deserialize_uncompressed(&self.bytes).map_err(|_| Error::InvalidEphemeralKey {
                role: sender,
            })?;
        validate::ephemeral_key(!point.is_identity(), sender)?;
        Ok(point)
    }
}

impl AsRef<[u8]> for EphemeralPublicKey {
    fn as_ref(&self) -> &[u8] {
        &self.bytes
    }
}

impl Serialize for EphemeralPublicKey {
    fn from_bytes(bytes: &[u8]) -> ApiResult<Self> {
        EphemeralPublicKey::from_bytes(bytes).map_err(Into::into)
    }

    fn to_bytes(&self) -> Vec<u8> {
        self.bytes.to_vec()
    }
}

impl fmt::Debug for EphemeralPublicKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "EphemeralPublicKey({})", hex::encode(self.bytes))
    }
}

/// 32-byte key confirmation tag S_A or S_B
///
/// Equality is constant-time.
#[derive(Clone, Zeroize)]
pub struct ConfirmationTag([u8; SM3_OUTPUT_SIZE]);

impl ConfirmationTag {
    pub(crate) fn new(bytes: [u8; SM3_OUTPUT_SIZE]) -> Self {
        Self(bytes)
    }

    /// Accept a tag received from the peer
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        primitive_validate::length("SM2 confirmation tag", bytes.len(), SM3_OUTPUT_SIZE)?;
        let mut out = [0u8; SM3_OUTPUT_SIZE];
        out.copy_from_slice(bytes);
        Ok(Self(out))
    }

    /// Raw tag bytes
    pub fn as_bytes(&self) -> &[u8; SM3_OUTPUT_SIZE] {
        &self.0
    }

    /// Lowercase hex encoding
    pub fn to_hex(&self) -> String {
        hex::encode(self.0)
    }

    /// Constant-time comparison against a received tag of any length
    pub fn verify(&self, candidate: &[u8]) -> bool {
        ct_eq(self.0, candidate)
    }
}

impl AsRef<[u8]> for ConfirmationTag {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl PartialEq for ConfirmationTag {
    fn eq(&self, other: &Self) -> bool {
        ct_eq(self.0, other.0)
    }
}

impl Eq for ConfirmationTag {}

impl fmt::Debug for ConfirmationTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ConfirmationTag({})", self.to_hex())
    }
}
