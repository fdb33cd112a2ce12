//! Identity digest Z = SM3(ENTL ‖ uid ‖ a ‖ b ‖ Gx ‖ Gy ‖ Px ‖ Py)

use crate::error::{Error, Result};
use smcrypt_algorithms::ec::sm2::Point;
use smcrypt_algorithms::error::validate as primitive_validate;
use smcrypt_algorithms::hash::{HashFunction, Sm3};
use smcrypt_api::SecretBytes;
use smcrypt_params::traditional::sm2::{SM2P256V1, SM2_MAX_UID_LEN};
use smcrypt_params::utils::hash::SM3_OUTPUT_SIZE;

/// Hash of a party's distinguishing identifier, the curve and its public key
pub type IdentityDigest = SecretBytes<SM3_OUTPUT_SIZE>;

/// Compute the identity digest of `public` under `uid`
///
/// ENTL is the bit length of `uid` as a big-endian u16, so identifiers
/// longer than 8191 bytes are rejected. The identity point has no
/// coordinates to hash and is rejected too.
pub fn identity_digest(public: &Point, uid: &[u8]) -> Result<IdentityDigest> {
    primitive_validate::max_length("SM2 distinguishing identifier", uid.len(), SM2_MAX_UID_LEN)?;
    if public.is_identity() {
        return Err(Error::UnsupportedPeerKey);
    }

    let entl = ((uid.len() * 8) as u16).to_be_bytes();
    let mut hasher = Sm3::new();
    hasher
        .update(&entl)?
        .update(uid)?
        .update(&SM2P256V1.a)?
        .update(&SM2P256V1.b)?
        .update(&SM2P256V1.g_x)?
        .update(&SM2P256V1.g_y)?
        .update(&public.x_coordinate_bytes())?
        .update(&public.y_coordinate_bytes())?;
    let digest = hasher.finalize()?;
    Ok(SecretBytes::new(digest.into_array()))
}
