//! Confirmation tags and key derivation over the exchange transcript
//!
//! Both parties hash the same ordered values: the initiator's identity
//! digest and ephemeral point always come first, whichever side computes.

#[cfg(not(feature = "std"))]
use alloc::vec;

use super::keys::{ConfirmationTag, SharedKey};
use super::Role;
use crate::error::{Error, Result};
use smcrypt_algorithms::ec::sm2::{Point, SM2_FIELD_ELEMENT_SIZE};
use smcrypt_algorithms::hash::{HashFunction, Sm3};
use smcrypt_algorithms::kdf::{KdfAlgorithm, Sm3Kdf};
use smcrypt_common::security::SecretVec;
use smcrypt_params::utils::hash::SM3_OUTPUT_SIZE;

/// Values bound into the tags and the shared key, in protocol order
pub(crate) struct Transcript<'t> {
    combined: &'t Point,
    za: &'t [u8],
    zb: &'t [u8],
    ra: &'t Point,
    rb: &'t Point,
}

impl<'t> Transcript<'t> {
    /// Arrange the caller's and the peer's values by `role`
    pub(crate) fn new(
        role: Role,
        combined: &'t Point,
        own_z: &'t [u8],
        peer_z: &'t [u8],
        own_ephemeral: &'t Point,
        peer_ephemeral: &'t Point,
    ) -> Self {
        match role {
            Role::Initiator => Self {
                combined,
                za: own_z,
                zb: peer_z,
                ra: own_ephemeral,
                rb: peer_ephemeral,
            },
            Role::Responder => Self {
                combined,
                za: peer_z,
                zb: own_z,
                ra: peer_ephemeral,
                rb: own_ephemeral,
            },
        }
    }

    /// S = SM3(prefix ‖ y ‖ SM3(x ‖ Z_A ‖ Z_B ‖ x_A ‖ y_A ‖ x_B ‖ y_B))
    pub(crate) fn tag(&self, prefix: u8) -> Result<ConfirmationTag> {
        let mut inner = Sm3::new();
        inner
            .update(&self.combined.x_coordinate_bytes())?
            .update(self.za)?
            .update(self.zb)?
            .update(&self.ra.x_coordinate_bytes())?
            .update(&self.ra.y_coordinate_bytes())?
            .update(&self.rb.x_coordinate_bytes())?
            .update(&self.rb.y_coordinate_bytes())?;
        let inner = inner.finalize()?;

        let mut outer = Sm3::new();
        outer
            .update(&[prefix])?
            .update(&self.combined.y_coordinate_bytes())?
            .update(inner.as_ref())?;
        Ok(ConfirmationTag::new(outer.finalize()?.into_array()))
    }

    /// K = KDF(x ‖ y ‖ Z_A ‖ Z_B, key_len)
    pub(crate) fn shared_key(&self, key_len: usize) -> Result<SharedKey> {
        if key_len as u64 > Sm3Kdf::max_output_size() {
            return Err(Error::KeyDerivation);
        }

        let mut z = SecretVec::with_capacity(2 * SM2_FIELD_ELEMENT_SIZE + 2 * SM3_OUTPUT_SIZE);
        z.extend_from_slice(&self.combined.x_coordinate_bytes());
        z.extend_from_slice(&self.combined.y_coordinate_bytes());
        z.extend_from_slice(self.za);
        z.extend_from_slice(self.zb);

        let mut key = vec![0u8; key_len];
        Sm3Kdf::derive_into(z.as_slice(), &mut key).map_err(|_| Error::KeyDerivation)?;
        Ok(SharedKey::from_vec(key))
    }
}
