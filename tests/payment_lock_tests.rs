//! Integration tests for the payment lock script

use canvas_scripts::constants::OFFICIAL_LOCK_HASH;
use canvas_scripts::crypto::{hash160, script_hash, Secp256k1Verifier};
use canvas_scripts::memory::{
    encode_script, encode_witness, MemoryTransaction, PlainScriptDecoder, PlainWitnessDecoder,
    ScriptRole,
};
use canvas_scripts::payment::verify_payment_lock;
use canvas_scripts::types::{Cell, Hash};
use canvas_scripts::{Result, ValidationError};
use secp256k1::{Message, PublicKey, Secp256k1, SecretKey};

const SIGNING_DIGEST: [u8; 32] = [0x5d; 32];
const TOKEN_A: Hash = [0xa1; 32];
const TOKEN_B: Hash = [0xb2; 32];

fn keypair() -> (SecretKey, PublicKey) {
    let secp = Secp256k1::new();
    let secret = SecretKey::from_slice(&[0x2f; 32]).unwrap();
    let public = PublicKey::from_secret_key(&secp, &secret);
    (secret, public)
}

fn wallet_script() -> Vec<u8> {
    let (_, public) = keypair();
    encode_script(&hash160(&public.serialize()))
}

fn own_lock_hash() -> Hash {
    script_hash(&wallet_script())
}

fn wallet_cell(type_hash: Hash, capacity: u64) -> Cell {
    Cell {
        capacity,
        lock_hash: own_lock_hash(),
        type_hash: Some(type_hash),
        data: vec![],
    }
}

fn treasury_cell(capacity: u64) -> Cell {
    Cell {
        capacity,
        lock_hash: OFFICIAL_LOCK_HASH,
        type_hash: None,
        data: vec![],
    }
}

fn tx(inputs: Vec<Cell>, outputs: Vec<Cell>) -> MemoryTransaction {
    let witnesses = vec![vec![]; inputs.len()];
    MemoryTransaction {
        script: wallet_script(),
        role: ScriptRole::Lock,
        inputs,
        outputs,
        witnesses,
    }
}

fn verify(tx: &MemoryTransaction) -> Result<()> {
    let verifier = Secp256k1Verifier::new(SIGNING_DIGEST);
    verify_payment_lock(tx, &PlainScriptDecoder, &PlainWitnessDecoder, &verifier)
}

fn signature_witness(digest: [u8; 32]) -> Vec<u8> {
    let (secret, public) = keypair();
    let secp = Secp256k1::new();
    let signature = secp.sign_ecdsa(&Message::from_digest(digest), &secret);
    let mut lock_bytes = public.serialize().to_vec();
    lock_bytes.extend_from_slice(&signature.serialize_compact());
    encode_witness(&lock_bytes)
}

#[test]
fn test_signature_unlock() {
    // With a valid signature the wallet spends freely: no replacement
    // output, no treasury fee.
    let mut tx = tx(vec![wallet_cell(TOKEN_A, 1000)], vec![]);
    tx.witnesses[0] = signature_witness(SIGNING_DIGEST);
    assert!(verify(&tx).is_ok());
}

#[test]
fn test_signature_verdict_returned_verbatim() {
    // A bad signature rejects even if the payment-path rules would pass.
    let mut tx = tx(
        vec![wallet_cell(TOKEN_A, 1000)],
        vec![wallet_cell(TOKEN_A, 1200), treasury_cell(100)],
    );
    tx.witnesses[0] = signature_witness([0x00; 32]);
    assert_eq!(verify(&tx), Err(ValidationError::SignatureMismatch));
}

#[test]
fn test_forced_payout_happy_path() {
    let tx = tx(
        vec![wallet_cell(TOKEN_A, 1000)],
        vec![wallet_cell(TOKEN_A, 1200), treasury_cell(100)],
    );
    assert!(verify(&tx).is_ok());
}

#[test]
fn test_forced_payout_premium_one_short() {
    let tx = tx(
        vec![wallet_cell(TOKEN_A, 1000)],
        vec![wallet_cell(TOKEN_A, 1199), treasury_cell(100)],
    );
    assert_eq!(verify(&tx), Err(ValidationError::OutputAmountNotEnough));
}

#[test]
fn test_forced_payout_fee_one_short() {
    let tx = tx(
        vec![wallet_cell(TOKEN_A, 1000)],
        vec![wallet_cell(TOKEN_A, 1200), treasury_cell(99)],
    );
    assert_eq!(verify(&tx), Err(ValidationError::OfficialFeeInsufficient));
}

#[test]
fn test_forced_payout_fee_floor_division() {
    // total input 1009 -> required fee floor(1009 / 10) = 100
    let tx = tx(
        vec![wallet_cell(TOKEN_A, 1009)],
        vec![wallet_cell(TOKEN_A, 1210), treasury_cell(100)],
    );
    assert!(verify(&tx).is_ok());
}

#[test]
fn test_forced_payout_multiple_wallets() {
    let tx = tx(
        vec![wallet_cell(TOKEN_A, 1000), wallet_cell(TOKEN_B, 2000)],
        vec![
            wallet_cell(TOKEN_B, 2400),
            wallet_cell(TOKEN_A, 1200),
            treasury_cell(300),
        ],
    );
    assert!(verify(&tx).is_ok());
}

#[test]
fn test_forced_payout_input_without_replacement() {
    let tx = tx(
        vec![wallet_cell(TOKEN_A, 1000), wallet_cell(TOKEN_B, 2000)],
        vec![wallet_cell(TOKEN_A, 1200), treasury_cell(300)],
    );
    assert_eq!(verify(&tx), Err(ValidationError::PairingInputFailed));
}

#[test]
fn test_forced_payout_replacement_without_input() {
    let tx = tx(
        vec![wallet_cell(TOKEN_A, 1000)],
        vec![
            wallet_cell(TOKEN_A, 1200),
            wallet_cell(TOKEN_B, 5),
            treasury_cell(100),
        ],
    );
    assert_eq!(verify(&tx), Err(ValidationError::PairingOutputFailed));
}

#[test]
fn test_forced_payout_duplicate_inputs_rejected() {
    let tx = tx(
        vec![wallet_cell(TOKEN_A, 600), wallet_cell(TOKEN_A, 400)],
        vec![wallet_cell(TOKEN_A, 1200), treasury_cell(100)],
    );
    assert_eq!(verify(&tx), Err(ValidationError::DuplicatedInputTypeHash));
}

#[test]
fn test_forced_payout_duplicate_outputs_rejected() {
    let tx = tx(
        vec![wallet_cell(TOKEN_A, 1000)],
        vec![
            wallet_cell(TOKEN_A, 1200),
            wallet_cell(TOKEN_A, 1300),
            treasury_cell(100),
        ],
    );
    assert_eq!(verify(&tx), Err(ValidationError::DuplicatedOutputTypeHash));
}

#[test]
fn test_foreign_outputs_ignored_by_pairing() {
    // Outputs under other locks neither pair nor interfere.
    let tx = tx(
        vec![wallet_cell(TOKEN_A, 1000)],
        vec![
            Cell {
                capacity: 7,
                lock_hash: [0x99; 32],
                type_hash: Some(TOKEN_B),
                data: vec![],
            },
            wallet_cell(TOKEN_A, 1200),
            treasury_cell(100),
        ],
    );
    assert!(verify(&tx).is_ok());
}

#[test]
fn test_verdict_is_idempotent() {
    let accept = tx(
        vec![wallet_cell(TOKEN_A, 1000)],
        vec![wallet_cell(TOKEN_A, 1200), treasury_cell(100)],
    );
    let reject = tx(
        vec![wallet_cell(TOKEN_A, 1000)],
        vec![wallet_cell(TOKEN_A, 1199), treasury_cell(100)],
    );
    assert_eq!(verify(&accept), verify(&accept));
    assert_eq!(verify(&reject), verify(&reject));
}

#[test]
fn test_snapshot_serde_roundtrip() {
    // Snapshots serialize cleanly for fixtures; the verdict survives a
    // JSON round trip.
    let original = tx(
        vec![wallet_cell(TOKEN_A, 1000)],
        vec![wallet_cell(TOKEN_A, 1200), treasury_cell(100)],
    );
    let json = serde_json::to_string(&original).unwrap();
    let restored: MemoryTransaction = serde_json::from_str(&json).unwrap();
    assert_eq!(original, restored);
    assert_eq!(verify(&original), verify(&restored));
}
