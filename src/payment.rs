//! Wallet lock script: signature unlock or forced payout
//!
//! Runs as the lock verifier of value-holding wallet cells. A non-empty
//! lock payload in the group's first witness selects the signature path,
//! judged entirely by the external signature primitive. Without one, the
//! spender must instead satisfy the payment path: return every wallet
//! input's capacity plus a 20% premium to a same-type output still under
//! this lock, and pay a 10% fee of the total spent capacity to the
//! official treasury.

use crate::constants::{
    CAPACITY_SIZE, LOCK_HASH_SIZE, MAX_SCRIPT_SIZE, MAX_WALLET_INPUTS, MAX_WITNESS_SIZE,
    OFFICIAL_FEE_DENOMINATOR, OFFICIAL_LOCK_HASH, PREMIUM_DENOMINATOR, PREMIUM_NUMERATOR,
    PUBKEY_HASH_SIZE,
};
use crate::error::{Result, ValidationError};
use crate::host::{
    ScriptDecoder, SignatureVerifier, TransactionQuery, WitnessDecoder, STATUS_INDEX_OUT_OF_BOUND,
};
use crate::types::{ByteString, CellField, Hash, PubkeyHash, Source, WalletEntry};

/// Verify spending of the wallet cells guarded by this lock.
///
/// Script args must be the 20-byte hashed public key of the wallet
/// owner. Dispatch:
/// 1. Load the first witness of the group-input source; absent or empty
///    means no signature.
/// 2. With a non-empty lock payload, delegate to `verifier` and return
///    its verdict verbatim.
/// 3. Otherwise run the payment path.
pub fn verify_payment_lock<Q, D, W, V>(
    query: &Q,
    script_decoder: &D,
    witness_decoder: &W,
    verifier: &V,
) -> Result<()>
where
    Q: TransactionQuery,
    D: ScriptDecoder,
    W: WitnessDecoder,
    V: SignatureVerifier,
{
    let pubkey_hash = read_pubkey_hash(query, script_decoder)?;
    match witness_signature(query, witness_decoder)? {
        Some(lock_bytes) => verifier.verify(&pubkey_hash, &lock_bytes),
        None => check_payment_unlock(query),
    }
}

/// Extract the 20-byte hashed public key from the running script's args.
fn read_pubkey_hash<Q, D>(query: &Q, decoder: &D) -> Result<PubkeyHash>
where
    Q: TransactionQuery,
    D: ScriptDecoder,
{
    let script = query.load_script()?;
    if script.len() > MAX_SCRIPT_SIZE {
        return Err(ValidationError::ScriptTooLong);
    }
    let args = decoder.decode_args(&script)?;
    if args.len() != PUBKEY_HASH_SIZE {
        return Err(ValidationError::ArgumentLength);
    }
    let mut pubkey_hash = [0u8; PUBKEY_HASH_SIZE];
    pubkey_hash.copy_from_slice(&args);
    Ok(pubkey_hash)
}

/// Lock payload of the group's first witness, if a signature is present.
fn witness_signature<Q, W>(query: &Q, decoder: &W) -> Result<Option<ByteString>>
where
    Q: TransactionQuery,
    W: WitnessDecoder,
{
    let witness = match query.load_witness(0, Source::GroupInput)? {
        Some(witness) => witness,
        None => return Ok(None),
    };
    if witness.is_empty() {
        return Ok(None);
    }
    if witness.len() > MAX_WITNESS_SIZE {
        return Err(ValidationError::WitnessTooLarge);
    }
    let lock_bytes = decoder.extract_lock(&witness)?;
    if lock_bytes.is_empty() {
        Ok(None)
    } else {
        Ok(Some(lock_bytes))
    }
}

/// Payment path: premium-paying replacement of every wallet input plus
/// the official treasury fee.
///
/// State machine: scan group inputs into the wallet table, scan all
/// outputs pairing wallet outputs 1:1 against the table by type hash,
/// verify every entry paired exactly once, then verify the fee. The
/// first violated invariant rejects with its specific kind.
fn check_payment_unlock<Q: TransactionQuery>(query: &Q) -> Result<()> {
    let lock_hash = query.load_script_hash()?;
    if lock_hash.len() != LOCK_HASH_SIZE {
        return Err(ValidationError::ScriptTooLong);
    }

    let (mut wallet, total_input) = load_input_wallets(query)?;

    // Pair every output under our own lock against exactly one wallet input.
    let mut i = 0;
    while let Some(output_lock) = query.load_cell_field(i, Source::Output, CellField::LockHash)? {
        if output_lock.len() != LOCK_HASH_SIZE {
            return Err(ValidationError::Encoding);
        }
        if output_lock != lock_hash {
            i += 1;
            continue;
        }

        let capacity = load_capacity(query, i, Source::Output)?;
        let type_hash = load_type_hash(query, i, Source::Output)?;

        let mut matched: Option<usize> = None;
        for (j, entry) in wallet.iter().enumerate() {
            if entry.type_hash != type_hash {
                continue;
            }
            if matched.is_some() {
                return Err(ValidationError::DuplicatedInputTypeHash);
            }
            matched = Some(j);
        }
        let j = match matched {
            Some(j) => j,
            None => return Err(ValidationError::PairingOutputFailed),
        };

        if capacity < minimum_replacement(wallet[j].capacity)? {
            return Err(ValidationError::OutputAmountNotEnough);
        }
        if wallet[j].output_count > 0 {
            return Err(ValidationError::DuplicatedOutputTypeHash);
        }
        wallet[j].output_count += 1;
        i += 1;
    }

    // Every spent wallet input needs its replacement output.
    for entry in &wallet {
        if entry.output_count == 0 {
            return Err(ValidationError::PairingInputFailed);
        }
        if entry.output_count > 1 {
            return Err(ValidationError::DuplicatedOutputTypeHash);
        }
    }

    check_official_fee(query, total_input)
}

/// Build the wallet table from the group inputs and total their
/// capacity. A 257th entry is fatal; exactly 256 is accepted.
fn load_input_wallets<Q: TransactionQuery>(query: &Q) -> Result<(Vec<WalletEntry>, u64)> {
    let mut wallet: Vec<WalletEntry> = Vec::with_capacity(8);
    let mut total: u64 = 0;
    let mut i = 0;
    while let Some(type_hash) =
        query.load_cell_field(i, Source::GroupInput, CellField::TypeHash)?
    {
        if wallet.len() >= MAX_WALLET_INPUTS {
            return Err(ValidationError::TooManyTypeHashInputs);
        }
        if type_hash.len() != LOCK_HASH_SIZE {
            return Err(ValidationError::Encoding);
        }
        let capacity = load_capacity(query, i, Source::GroupInput)?;
        total = total
            .checked_add(capacity)
            .ok_or(ValidationError::Overflow)?;

        let mut hash: Hash = [0; LOCK_HASH_SIZE];
        hash.copy_from_slice(&type_hash);
        wallet.push(WalletEntry {
            type_hash: hash,
            capacity,
            output_count: 0,
        });
        i += 1;
    }
    Ok((wallet, total))
}

/// Sum every output paying the official treasury lock and require the
/// total to cover one tenth of the spent capacity.
fn check_official_fee<Q: TransactionQuery>(query: &Q, total_input: u64) -> Result<()> {
    let mut total_official: u64 = 0;
    let mut i = 0;
    while let Some(output_lock) = query.load_cell_field(i, Source::Output, CellField::LockHash)? {
        if output_lock.len() != LOCK_HASH_SIZE {
            return Err(ValidationError::Encoding);
        }
        if output_lock[..] == OFFICIAL_LOCK_HASH[..] {
            let capacity = load_capacity(query, i, Source::Output)?;
            total_official = total_official
                .checked_add(capacity)
                .ok_or(ValidationError::Overflow)?;
        }
        i += 1;
    }
    if total_official < total_input / OFFICIAL_FEE_DENOMINATOR {
        return Err(ValidationError::OfficialFeeInsufficient);
    }
    Ok(())
}

/// Minimum capacity a replacement output must carry: the input capacity
/// plus a 20% premium, with truncating division. Overflow is fatal
/// rather than wrapping, since wrapping would allow value creation.
fn minimum_replacement(capacity: u64) -> Result<u64> {
    let premium = capacity
        .checked_mul(PREMIUM_NUMERATOR)
        .ok_or(ValidationError::Overflow)?
        / PREMIUM_DENOMINATOR;
    capacity
        .checked_add(premium)
        .ok_or(ValidationError::Overflow)
}

fn load_capacity<Q: TransactionQuery>(query: &Q, index: usize, source: Source) -> Result<u64> {
    let bytes = query
        .load_cell_field(index, source, CellField::Capacity)?
        .ok_or(ValidationError::Syscall(STATUS_INDEX_OUT_OF_BOUND))?;
    if bytes.len() != CAPACITY_SIZE {
        return Err(ValidationError::Encoding);
    }
    let mut raw = [0u8; CAPACITY_SIZE];
    raw.copy_from_slice(&bytes);
    Ok(u64::from_le_bytes(raw))
}

fn load_type_hash<Q: TransactionQuery>(query: &Q, index: usize, source: Source) -> Result<Hash> {
    let bytes = query
        .load_cell_field(index, source, CellField::TypeHash)?
        .ok_or(ValidationError::Syscall(STATUS_INDEX_OUT_OF_BOUND))?;
    if bytes.len() != LOCK_HASH_SIZE {
        return Err(ValidationError::Encoding);
    }
    let mut hash: Hash = [0; LOCK_HASH_SIZE];
    hash.copy_from_slice(&bytes);
    Ok(hash)
}
