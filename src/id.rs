//! Participant identifier encoding.
//!
//! Participants are tagged with externally assigned `u64` identifiers. The
//! sharing polynomial is evaluated at field points, so each identifier must
//! map to a distinct nonzero element of the scalar field: zero is the
//! evaluation point of the secret itself and can never belong to a
//! participant.
//!
//! The mapping interprets the identifier's little-endian bytes as the low
//! bytes of a canonical field encoding. Over the 64-bit identifier range this
//! is injective for any field wider than 64 bits, and the decode path rejects
//! rather than reduces, so an encoding that collides with the modulus can
//! never alias another identifier.

use crate::arith::FieldElement;
use crate::errors::Error;

/// Encodes a participant identifier as a nonzero field element.
///
/// The identifier's little-endian bytes fill the low end of a zeroed
/// canonical-width buffer, which is then decoded canonically.
///
/// # Errors
///
/// [`Error::InvalidIdentifier`] if the bytes do not decode to a canonical
/// field element, or if they decode to the additive identity (in particular
/// for `id == 0`).
pub fn encode_id<F: FieldElement>(id: u64) -> Result<F, Error> {
    let mut bytes = vec![0u8; F::NUM_BYTES];
    bytes[..8].copy_from_slice(&id.to_le_bytes());

    let element = F::from_le_bytes(&bytes).map_err(|_| Error::InvalidIdentifier {
        id,
        reason: "identifier does not encode to a canonical field element",
    })?;

    if element.is_zero() {
        return Err(Error::InvalidIdentifier {
            id,
            reason: "identifier encodes to the zero element",
        });
    }

    Ok(element)
}
