//! In-memory transaction snapshot implementing the host interfaces
//!
//! `MemoryTransaction` materializes a full transaction so the validators
//! can run hermetically: fixtures in tests, reference behavior for real
//! host bindings. The plain decoders use a minimal length-prefixed
//! framing in place of the production schema encoding; the framing keeps
//! real `Encoding` failure paths while the validators stay parse-free.

use serde::{Deserialize, Serialize};

use crate::crypto::script_hash;
use crate::error::{Result, ValidationError};
use crate::host::{ScriptDecoder, TransactionQuery, WitnessDecoder, STATUS_ITEM_MISSING};
use crate::types::{ByteString, Cell, CellField, Hash, Source};

/// Which of a cell's two authorities the executing script fills.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ScriptRole {
    Lock,
    Type,
}

/// Materialized transaction snapshot.
///
/// Group membership is derived, not stored: a cell belongs to the group
/// when its lock hash (lock role) or type hash (type role) equals the
/// hash of the executing script. One witness slot per input position;
/// an empty slot is an empty witness.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MemoryTransaction {
    pub script: ByteString,
    pub role: ScriptRole,
    pub inputs: Vec<Cell>,
    pub outputs: Vec<Cell>,
    pub witnesses: Vec<ByteString>,
}

impl MemoryTransaction {
    fn own_hash(&self) -> Hash {
        script_hash(&self.script)
    }

    fn in_group(&self, cell: &Cell) -> bool {
        let own = self.own_hash();
        match self.role {
            ScriptRole::Lock => cell.lock_hash == own,
            ScriptRole::Type => cell.type_hash == Some(own),
        }
    }

    fn cell_at(&self, index: usize, source: Source) -> Option<&Cell> {
        match source {
            Source::Input => self.inputs.get(index),
            Source::Output => self.outputs.get(index),
            Source::GroupInput => self.inputs.iter().filter(|c| self.in_group(c)).nth(index),
            Source::GroupOutput => self.outputs.iter().filter(|c| self.in_group(c)).nth(index),
        }
    }
}

impl TransactionQuery for MemoryTransaction {
    fn load_script(&self) -> Result<ByteString> {
        Ok(self.script.clone())
    }

    fn load_script_hash(&self) -> Result<ByteString> {
        Ok(self.own_hash().to_vec())
    }

    fn load_cell_field(
        &self,
        index: usize,
        source: Source,
        field: CellField,
    ) -> Result<Option<ByteString>> {
        let cell = match self.cell_at(index, source) {
            Some(cell) => cell,
            None => return Ok(None),
        };
        let bytes = match field {
            CellField::Capacity => cell.capacity.to_le_bytes().to_vec(),
            CellField::LockHash => cell.lock_hash.to_vec(),
            CellField::TypeHash => match cell.type_hash {
                Some(hash) => hash.to_vec(),
                // Matches the host convention for absent optional fields.
                None => return Err(ValidationError::Syscall(STATUS_ITEM_MISSING)),
            },
            CellField::Data => cell.data.clone(),
        };
        Ok(Some(bytes))
    }

    fn load_witness(&self, index: usize, source: Source) -> Result<Option<ByteString>> {
        let input_index = match source {
            Source::Input => {
                if index < self.inputs.len() {
                    Some(index)
                } else {
                    None
                }
            }
            Source::GroupInput => self
                .inputs
                .iter()
                .enumerate()
                .filter(|(_, c)| self.in_group(c))
                .map(|(i, _)| i)
                .nth(index),
            Source::Output | Source::GroupOutput => None,
        };
        let input_index = match input_index {
            Some(i) => i,
            None => return Ok(None),
        };
        Ok(self.witnesses.get(input_index).cloned())
    }
}

/// Plain script framing: 4-byte little-endian args length, then args.
#[derive(Debug, Default, Clone, Copy)]
pub struct PlainScriptDecoder;

impl ScriptDecoder for PlainScriptDecoder {
    fn decode_args(&self, script: &[u8]) -> Result<ByteString> {
        if script.len() < 4 {
            return Err(ValidationError::Encoding);
        }
        let mut raw = [0u8; 4];
        raw.copy_from_slice(&script[..4]);
        let len = u32::from_le_bytes(raw) as usize;
        if script.len() != 4 + len {
            return Err(ValidationError::Encoding);
        }
        Ok(script[4..].to_vec())
    }
}

/// Plain witness framing: 4-byte little-endian lock length, lock bytes,
/// then a free-form remainder the validators never inspect.
#[derive(Debug, Default, Clone, Copy)]
pub struct PlainWitnessDecoder;

impl WitnessDecoder for PlainWitnessDecoder {
    fn extract_lock(&self, witness: &[u8]) -> Result<ByteString> {
        if witness.len() < 4 {
            return Err(ValidationError::Encoding);
        }
        let mut raw = [0u8; 4];
        raw.copy_from_slice(&witness[..4]);
        let len = u32::from_le_bytes(raw) as usize;
        if witness.len() < 4 + len {
            return Err(ValidationError::Encoding);
        }
        Ok(witness[4..4 + len].to_vec())
    }
}

/// Build a script in the plain framing from its args.
pub fn encode_script(args: &[u8]) -> ByteString {
    let mut script = Vec::with_capacity(4 + args.len());
    script.extend_from_slice(&(args.len() as u32).to_le_bytes());
    script.extend_from_slice(args);
    script
}

/// Build a witness in the plain framing from its lock payload.
pub fn encode_witness(lock: &[u8]) -> ByteString {
    let mut witness = Vec::with_capacity(4 + lock.len());
    witness.extend_from_slice(&(lock.len() as u32).to_le_bytes());
    witness.extend_from_slice(lock);
    witness
}
