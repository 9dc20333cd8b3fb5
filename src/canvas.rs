//! Canvas type script: who may create or repaint pixel cells
//!
//! Runs as the type verifier of canvas-pixel cells. The canvas owner
//! (named by the 32-byte lock hash in the script args) may create or
//! overwrite any pixels; everyone else may only repaint coordinates the
//! transaction already spends within this script's group.

use crate::constants::{LOCK_HASH_SIZE, MAX_SCRIPT_SIZE};
use crate::error::{Result, ValidationError};
use crate::host::{ScriptDecoder, TransactionQuery};
use crate::types::{CellField, Pixel, Source};

/// Verify a transaction touching canvas cells.
///
/// 1. Script args must be the 32-byte owner lock hash.
/// 2. If any input of the whole transaction is locked by the owner,
///    accept unconditionally (owner-mode).
/// 3. Otherwise every group-output pixel must reuse the (x, y) of some
///    group-input pixel; the color payload is unconstrained.
///
/// The per-output scan over group inputs is O(n * m) in pixel counts,
/// bounded by the transaction's actual cell counts.
pub fn verify_canvas<Q, D>(query: &Q, decoder: &D) -> Result<()>
where
    Q: TransactionQuery,
    D: ScriptDecoder,
{
    let script = query.load_script()?;
    if script.len() > MAX_SCRIPT_SIZE {
        return Err(ValidationError::ScriptTooLong);
    }
    let args = decoder.decode_args(&script)?;
    if args.len() != LOCK_HASH_SIZE {
        return Err(ValidationError::ArgumentLength);
    }

    if owner_mode(query, &args)? {
        return Ok(());
    }

    // Group-input pixels are materialized once, on the first output that
    // needs them; a transaction with no group outputs never touches them.
    let mut group_inputs: Vec<Pixel> = Vec::new();
    let mut i = 0;
    while let Some(data) = query.load_cell_field(i, Source::GroupOutput, CellField::Data)? {
        let pixel = Pixel::parse(&data)?;
        if i == 0 {
            group_inputs = load_group_input_pixels(query)?;
        }
        if !group_inputs
            .iter()
            .any(|p| p.x == pixel.x && p.y == pixel.y)
        {
            return Err(ValidationError::CoordinateMismatch);
        }
        i += 1;
    }
    Ok(())
}

/// Scan every input of the whole transaction for a lock hash equal to
/// the owner lock hash in the script args.
fn owner_mode<Q: TransactionQuery>(query: &Q, owner_lock_hash: &[u8]) -> Result<bool> {
    let mut i = 0;
    while let Some(lock_hash) = query.load_cell_field(i, Source::Input, CellField::LockHash)? {
        if lock_hash.len() != LOCK_HASH_SIZE {
            return Err(ValidationError::Encoding);
        }
        if lock_hash == owner_lock_hash {
            return Ok(true);
        }
        i += 1;
    }
    Ok(false)
}

fn load_group_input_pixels<Q: TransactionQuery>(query: &Q) -> Result<Vec<Pixel>> {
    let mut pixels = Vec::new();
    let mut i = 0;
    while let Some(data) = query.load_cell_field(i, Source::GroupInput, CellField::Data)? {
        pixels.push(Pixel::parse(&data)?);
        i += 1;
    }
    Ok(pixels)
}
