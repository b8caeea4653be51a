use std::collections::HashMap;

use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::info;
use tracing_subscriber::fmt;

use keysplit::{
    reconstruct_public_key, BlstBackend, CurvePoint, FieldElement, Fr, KeyBackend, KeygenSeed,
    SplitKey, SplitParameters,
};

const THRESHOLD: usize = 3;
const PARTICIPANTS: [u64; 5] = [1, 2, 3, 4, 5];

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize logging
    fmt()
        .with_max_level(tracing::Level::INFO)
        .with_target(false)
        .with_ansi(false)
        .init();

    let mut rng = StdRng::seed_from_u64(42);

    // In production the secret comes from a decrypted keystore.
    let secret = Fr::random(&mut rng);
    let public = BlstBackend::public_key(&secret);

    info!(
        threshold = THRESHOLD,
        participants = PARTICIPANTS.len(),
        "starting threshold split"
    );

    // Deterministic split: the same seed always reproduces these shares.
    let seed = KeygenSeed::from_hex(
        "000102030405060708090a0b0c0d0e0f101112131415161718191a1b1c1d1e1f",
    )?;
    let params = SplitParameters::new(THRESHOLD, PARTICIPANTS.to_vec(), Some(seed))?;
    let split = SplitKey::<BlstBackend>::split(&mut rng, secret, &params)?;

    // Sanity check before anything leaves the process.
    split.verify(&public)?;
    info!("reconstruction self-check passed");

    // Any threshold coalition recovers the original key.
    let coalition: Vec<_> = split.public_shares().into_iter().take(THRESHOLD).collect();
    let recovered = reconstruct_public_key::<BlstBackend>(&coalition)?;
    info!(
        matches = (recovered == public),
        "coalition of {} recovered the public key",
        coalition.len()
    );

    // Assemble the wallet-import bundle for participant 1.
    let peers: HashMap<u64, String> = PARTICIPANTS
        .iter()
        .map(|&id| (id, format!("signer-{id}.example.net:13141")))
        .collect();
    let bundle = split.export_bundle(1, &peers)?;
    let json = serde_json::to_string_pretty(&bundle)?;
    info!(bytes = json.len(), "serialized bundle for participant 1");

    println!(
        "Public key share: {}, Public key: {}",
        hex::encode(bundle.share.public().to_compressed()),
        hex::encode(recovered.to_compressed())
    );

    Ok(())
}
