//! Serde serialization support for boundary types.
//!
//! Implements `Serialize` and `Deserialize` for the types that cross the
//! wallet-import boundary, so a bundle can be persisted or shipped to a
//! remote signer.
//!
//! # Serialization Strategy
//!
//! - **Share scalars**: canonical little-endian bytes via `to_le_bytes()`
//! - **Verification-vector points**: compressed bytes via `to_compressed()`
//! - **Identifiers, threshold, peers**: native serde representations
//!
//! Deserialization rejects non-canonical scalar bytes, invalid points, and
//! an empty verification vector.

use std::collections::HashMap;

use serde::de;
use serde::ser::SerializeStruct;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::arith::{CurvePoint, FieldElement};
use crate::backend::KeyBackend;
use crate::split::{Share, VerificationVector};
use crate::wallet::AccountBundle;

fn field_from_bytes<F, E>(bytes: &[u8]) -> Result<F, E>
where
    F: FieldElement,
    E: de::Error,
{
    F::from_le_bytes(bytes).map_err(E::custom)
}

fn point_from_bytes<P, F, E>(bytes: &[u8]) -> Result<P, E>
where
    P: CurvePoint<F>,
    F: FieldElement,
    E: de::Error,
{
    P::from_compressed(bytes).map_err(E::custom)
}

#[derive(Deserialize)]
struct ShareHelper {
    id: u64,
    scalar: Vec<u8>,
}

#[derive(Deserialize)]
struct VectorHelper {
    points: Vec<Vec<u8>>,
}

fn share_from_helper<B, E>(helper: ShareHelper) -> Result<Share<B>, E>
where
    B: KeyBackend,
    E: de::Error,
{
    let scalar = field_from_bytes::<B::Scalar, E>(&helper.scalar)?;
    Ok(Share {
        id: helper.id,
        scalar,
    })
}

fn vector_from_helper<B, E>(helper: VectorHelper) -> Result<VerificationVector<B>, E>
where
    B: KeyBackend,
    E: de::Error,
{
    if helper.points.is_empty() {
        return Err(E::custom("verification vector must not be empty"));
    }
    let points = helper
        .points
        .iter()
        .map(|bytes| point_from_bytes::<B::Public, B::Scalar, E>(bytes))
        .collect::<Result<Vec<_>, E>>()?;
    Ok(VerificationVector::new(points))
}

impl<B: KeyBackend> Serialize for Share<B> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut state = serializer.serialize_struct("Share", 2)?;
        state.serialize_field("id", &self.id)?;
        state.serialize_field("scalar", &self.scalar.to_le_bytes())?;
        state.end()
    }
}

impl<'de, B: KeyBackend> Deserialize<'de> for Share<B> {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let helper = ShareHelper::deserialize(deserializer)?;
        share_from_helper::<B, D::Error>(helper)
    }
}

impl<B: KeyBackend> Serialize for VerificationVector<B> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let points: Vec<Vec<u8>> = self
            .points()
            .iter()
            .map(|point| point.to_compressed())
            .collect();

        let mut state = serializer.serialize_struct("VerificationVector", 1)?;
        state.serialize_field("points", &points)?;
        state.end()
    }
}

impl<'de, B: KeyBackend> Deserialize<'de> for VerificationVector<B> {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let helper = VectorHelper::deserialize(deserializer)?;
        vector_from_helper::<B, D::Error>(helper)
    }
}

impl<B: KeyBackend> Serialize for AccountBundle<B> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut state = serializer.serialize_struct("AccountBundle", 5)?;
        state.serialize_field("participant", &self.participant)?;
        state.serialize_field("share", &self.share)?;
        state.serialize_field("verification_vector", &self.verification_vector)?;
        state.serialize_field("threshold", &self.threshold)?;
        state.serialize_field("peers", &self.peers)?;
        state.end()
    }
}

impl<'de, B: KeyBackend> Deserialize<'de> for AccountBundle<B> {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        struct BundleHelper {
            participant: u64,
            share: ShareHelper,
            verification_vector: VectorHelper,
            threshold: usize,
            peers: HashMap<u64, String>,
        }

        let helper = BundleHelper::deserialize(deserializer)?;
        Ok(AccountBundle {
            participant: helper.participant,
            share: share_from_helper::<B, D::Error>(helper.share)?,
            verification_vector: vector_from_helper::<B, D::Error>(helper.verification_vector)?,
            threshold: helper.threshold,
            peers: helper.peers,
        })
    }
}
