//! Hard resource ceilings and protocol constants

/// Maximum serialized script size
pub const MAX_SCRIPT_SIZE: usize = 32_768;

/// Maximum witness size
pub const MAX_WITNESS_SIZE: usize = 32_768;

/// Maximum number of wallet entries built from group inputs
pub const MAX_WALLET_INPUTS: usize = 256;

/// Canvas cell data width: x, y, 3-byte color payload
pub const PIXEL_DATA_SIZE: usize = 5;

/// Lock/type hash width
pub const LOCK_HASH_SIZE: usize = 32;

/// Hashed-public-key width in lock script args
pub const PUBKEY_HASH_SIZE: usize = 20;

/// Serialized capacity width: little-endian u64
pub const CAPACITY_SIZE: usize = 8;

/// Forced-payout premium numerator: replacement outputs must return
/// capacity + capacity * 2 / 10 (a 20% premium, truncating)
pub const PREMIUM_NUMERATOR: u64 = 2;

/// Forced-payout premium denominator
pub const PREMIUM_DENOMINATOR: u64 = 10;

/// Official fee divisor: treasury outputs must cover total input capacity / 10
pub const OFFICIAL_FEE_DENOMINATOR: u64 = 10;

/// Lock hash of the official treasury that collects the forced-payout fee
pub const OFFICIAL_LOCK_HASH: [u8; 32] = [
    106, 36, 43, 87, 34, 116, 132, 233, 4, 180, 224, 139, 169, 111, 25, 166,
    35, 195, 103, 220, 189, 24, 103, 94, 198, 242, 167, 26, 15, 244, 236, 38,
];
