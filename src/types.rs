//! Core cell-model types shared by both validators

use serde::{Deserialize, Serialize};

use crate::constants::PIXEL_DATA_SIZE;
use crate::error::{Result, ValidationError};

/// Hash type: 256-bit script identity (lock hash / type hash)
pub type Hash = [u8; 32];

/// Hashed-public-key identifier carried in a lock script's args
pub type PubkeyHash = [u8; 20];

/// Byte string type
pub type ByteString = Vec<u8>;

/// Cell capacity in base units
pub type Capacity = u64;

/// Which cell sequence of the transaction a query addresses
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Source {
    Input,
    Output,
    GroupInput,
    GroupOutput,
}

/// Which field of a cell a query addresses
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CellField {
    Capacity,
    LockHash,
    TypeHash,
    Data,
}

/// Cell: immutable value-and-data unit of the ledger
///
/// Created once as an output, consumed once as an input. The lock hash
/// names the spending authority, the optional type hash names the
/// content-validation authority.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cell {
    pub capacity: Capacity,
    pub lock_hash: Hash,
    pub type_hash: Option<Hash>,
    pub data: ByteString,
}

/// Parsed view of 5-byte canvas cell data: coordinate plus color payload
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pixel {
    pub x: u8,
    pub y: u8,
    pub color: [u8; 3],
}

impl Pixel {
    /// Parse canvas cell data. Any length other than 5 bytes is malformed.
    pub fn parse(data: &[u8]) -> Result<Self> {
        if data.len() != PIXEL_DATA_SIZE {
            return Err(ValidationError::Encoding);
        }
        Ok(Pixel {
            x: data[0],
            y: data[1],
            color: [data[2], data[3], data[4]],
        })
    }
}

/// Transient per-run record pairing a wallet input's type identity with
/// its capacity, used to enforce 1:1 spend/replace accounting.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WalletEntry {
    pub type_hash: Hash,
    pub capacity: Capacity,
    pub output_count: u32,
}
