//! Distributed-wallet import boundary.
//!
//! A remote signer imports one distributed account per participant. The
//! import call consumes everything the signer needs to hold its slice of the
//! key and to find its peers: the participant's share, the session's public
//! verification vector, the threshold, and the peer endpoint map. This
//! module materializes that tuple as [`AccountBundle`]; the wallet store
//! itself (authentication, locking, persistence) stays outside the crate,
//! and its failure is opaque and fatal to the overall operation.

use std::collections::HashMap;

use crate::backend::KeyBackend;
use crate::errors::Error;
use crate::split::{Share, SplitKey, VerificationVector};

/// Everything one participant's signer needs to import its distributed
/// account.
///
/// Serializable (see [`crate::serde_impl`]): the share scalar as
/// little-endian bytes, verification-vector entries as compressed points.
#[derive(Clone, Debug)]
pub struct AccountBundle<B: KeyBackend> {
    /// Participant this bundle is addressed to.
    pub participant: u64,
    /// The participant's secret share.
    pub share: Share<B>,
    /// Public verification vector of the sharing session.
    pub verification_vector: VerificationVector<B>,
    /// Number of shares required to sign.
    pub threshold: usize,
    /// Peer endpoints, keyed by participant identifier.
    pub peers: HashMap<u64, String>,
}

impl<B: KeyBackend> SplitKey<B> {
    /// Assembles the wallet-import bundle for one participant.
    ///
    /// # Errors
    ///
    /// [`Error::InvalidConfig`] if no share was derived for `id` in this
    /// session, or if `id` is missing from the peer map.
    pub fn export_bundle(
        &self,
        id: u64,
        peers: &HashMap<u64, String>,
    ) -> Result<AccountBundle<B>, Error> {
        let share = self
            .share(id)
            .ok_or_else(|| {
                Error::InvalidConfig(format!("participant {id} has no share in this session"))
            })?
            .clone();

        if !peers.contains_key(&id) {
            return Err(Error::InvalidConfig(format!(
                "participant {id} is missing from the peer map"
            )));
        }

        Ok(AccountBundle {
            participant: id,
            share,
            verification_vector: self.verification_vector().clone(),
            threshold: self.threshold(),
            peers: peers.clone(),
        })
    }
}
