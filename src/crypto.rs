//! Hashing and signature primitives
//!
//! The 32-byte script hash is the equality key for lock/type identity;
//! the 20-byte hash160 is the pubkey commitment carried in the payment
//! lock's args. Signature checking is ECDSA over secp256k1 against a
//! fixed signing digest supplied by the host environment.

use ripemd::Ripemd160;
use secp256k1::ecdsa::Signature;
use secp256k1::{Message, PublicKey, Secp256k1, VerifyOnly};
use sha2::{Digest, Sha256};

use crate::constants::{LOCK_HASH_SIZE, PUBKEY_HASH_SIZE};
use crate::error::{Result, ValidationError};
use crate::host::SignatureVerifier;
use crate::types::{Hash, PubkeyHash};

/// Compressed public key length within the witness lock bytes
const PUBKEY_LEN: usize = 33;

/// Compact ECDSA signature length within the witness lock bytes
const SIGNATURE_LEN: usize = 64;

/// 32-byte identity of a script, used as a cell's lock or type hash.
pub fn script_hash(script: &[u8]) -> Hash {
    let digest = Sha256::digest(script);
    let mut hash = [0u8; LOCK_HASH_SIZE];
    hash.copy_from_slice(&digest);
    hash
}

/// SHA-256 followed by RIPEMD-160: the 20-byte public key commitment.
pub fn hash160(data: &[u8]) -> PubkeyHash {
    let sha = Sha256::digest(data);
    let ripe = Ripemd160::digest(sha);
    let mut hash = [0u8; PUBKEY_HASH_SIZE];
    hash.copy_from_slice(&ripe);
    hash
}

/// ECDSA verifier over a fixed 32-byte signing digest.
///
/// Witness lock bytes are a 33-byte compressed public key followed by a
/// 64-byte compact signature. The key must hash160 to the pubkey hash in
/// the script args and the signature must verify against the digest.
pub struct Secp256k1Verifier {
    secp: Secp256k1<VerifyOnly>,
    digest: [u8; 32],
}

impl Secp256k1Verifier {
    pub fn new(digest: [u8; 32]) -> Self {
        Secp256k1Verifier {
            secp: Secp256k1::verification_only(),
            digest,
        }
    }
}

impl SignatureVerifier for Secp256k1Verifier {
    fn verify(&self, pubkey_hash: &PubkeyHash, lock_bytes: &[u8]) -> Result<()> {
        if lock_bytes.len() != PUBKEY_LEN + SIGNATURE_LEN {
            return Err(ValidationError::Encoding);
        }
        let pubkey = PublicKey::from_slice(&lock_bytes[..PUBKEY_LEN])
            .map_err(|_| ValidationError::Encoding)?;
        if hash160(&pubkey.serialize()) != *pubkey_hash {
            return Err(ValidationError::SignatureMismatch);
        }
        let signature = Signature::from_compact(&lock_bytes[PUBKEY_LEN..])
            .map_err(|_| ValidationError::Encoding)?;
        let message = Message::from_digest(self.digest);
        self.secp
            .verify_ecdsa(&message, &signature, &pubkey)
            .map_err(|_| ValidationError::SignatureMismatch)
    }
}
