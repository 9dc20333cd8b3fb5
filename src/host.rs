//! Seams to the external collaborators: host queries, decoders, signatures
//!
//! The validators never parse the structured script/transaction encoding
//! themselves and never touch cryptography directly; both concerns sit
//! behind the traits here so every input path stays mockable and the
//! validators stay pure functions of the transaction snapshot.

use crate::error::Result;
use crate::types::{ByteString, CellField, PubkeyHash, Source};

/// Host status code for a missing optional field (e.g. the type hash of
/// a cell that carries no type script). Surfaced via `Syscall`.
pub const STATUS_ITEM_MISSING: i32 = 2;

/// Host status code for an index past the end of a sequence, when a
/// caller expected the item to exist. Surfaced via `Syscall`.
pub const STATUS_INDEX_OUT_OF_BOUND: i32 = 1;

/// Read-only access to the transaction under validation.
///
/// `Ok(None)` signals index out of bounds, the distinguished
/// end-of-sequence status; any other host failure is returned as
/// `ValidationError::Syscall` and aborts validation fail-closed.
/// Index iteration always proceeds from 0 upward with no gaps.
pub trait TransactionQuery {
    /// Raw bytes of the currently executing script.
    fn load_script(&self) -> Result<ByteString>;

    /// Hash of the currently executing script, the equality key for
    /// lock/type identity.
    fn load_script_hash(&self) -> Result<ByteString>;

    /// One field of the cell at `index` within `source`.
    fn load_cell_field(
        &self,
        index: usize,
        source: Source,
        field: CellField,
    ) -> Result<Option<ByteString>>;

    /// Witness at `index` within `source`.
    fn load_witness(&self, index: usize, source: Source) -> Result<Option<ByteString>>;
}

/// Structural validation of a raw script and extraction of its args.
pub trait ScriptDecoder {
    /// Fails with `Encoding` on malformed input.
    fn decode_args(&self, script: &[u8]) -> Result<ByteString>;
}

/// Extraction of the optional lock payload embedded in a witness.
pub trait WitnessDecoder {
    /// Returns the embedded lock byte-string, empty when none is
    /// present. Fails with `Encoding` on malformed input.
    fn extract_lock(&self, witness: &[u8]) -> Result<ByteString>;
}

/// Opaque signature check keyed by a hashed public key.
///
/// The payment lock returns this primitive's verdict verbatim on the
/// signature path; it adds no constraint of its own.
pub trait SignatureVerifier {
    fn verify(&self, pubkey_hash: &PubkeyHash, lock_bytes: &[u8]) -> Result<()>;
}
