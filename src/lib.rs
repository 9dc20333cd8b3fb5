//! # Canvas-Scripts
//!
//! Deterministic transaction validators for a cell-based pixel-canvas
//! ledger: a canvas type script deciding which pixel coordinates may be
//! written and by whom, and a payment lock script deciding whether a
//! wallet cell may be spent, by signature or by an economically
//! constrained forced-payout path.
//!
//! ## Design Principles
//!
//! 1. **Pure Functions**: each validator runs once per transaction,
//!    read-only, with no side effects beyond its verdict
//! 2. **Adversarial Inputs**: every byte comes from the transaction
//!    submitter; arithmetic is overflow-checked and all loops are
//!    bounded by hard ceilings
//! 3. **Specific Rejections**: every violated rule maps to its own
//!    numeric-coded error kind, never a generic failure
//! 4. **Exact Version Pinning**: consensus-critical crypto dependencies
//!    pinned to exact versions
//!
//! Structural decoding, cryptography, and the transaction query
//! mechanism sit behind the traits in [`host`]; [`memory`] provides an
//! in-memory backend for tests and reference use.
//!
//! ## Usage
//!
//! ```rust
//! use canvas_scripts::canvas::verify_canvas;
//! use canvas_scripts::crypto::script_hash;
//! use canvas_scripts::memory::{encode_script, MemoryTransaction, PlainScriptDecoder, ScriptRole};
//! use canvas_scripts::types::Cell;
//!
//! // Repaint pixel (4, 2): allowed because the group inputs already
//! // hold that coordinate.
//! let owner_lock_hash = [7u8; 32];
//! let script = encode_script(&owner_lock_hash);
//! let canvas = script_hash(&script);
//! let tx = MemoryTransaction {
//!     script,
//!     role: ScriptRole::Type,
//!     inputs: vec![Cell {
//!         capacity: 100,
//!         lock_hash: [9; 32],
//!         type_hash: Some(canvas),
//!         data: vec![4, 2, 0x00, 0x00, 0x00],
//!     }],
//!     outputs: vec![Cell {
//!         capacity: 100,
//!         lock_hash: [9; 32],
//!         type_hash: Some(canvas),
//!         data: vec![4, 2, 0xff, 0x00, 0x00],
//!     }],
//!     witnesses: vec![vec![]],
//! };
//! assert!(verify_canvas(&tx, &PlainScriptDecoder).is_ok());
//! ```

pub mod canvas;
pub mod constants;
pub mod crypto;
pub mod error;
pub mod host;
pub mod memory;
pub mod payment;
pub mod types;

// Re-export commonly used items
pub use canvas::verify_canvas;
pub use error::{Result, ValidationError};
pub use payment::verify_payment_lock;
pub use types::*;
