use primitive_types::{H160, H256, U256};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// 160-bit account or asset address.
pub type Address = H160;

/// 256-bit resource lock identifier: lock tag in the high 96 bits, token
/// address in the low 160.
pub type TokenId = U256;

/// 256-bit claim recipient designation. Same layout as a token id, but the
/// low 160 bits hold the recipient rather than an asset.
pub type Claimant = U256;

/// keccak256 of the canonical Compact type string.
pub type TypeHash = H256;

/// keccak256 over the encoded fields of a Compact.
pub type StructHash = H256;

/// 0x-prefixed hex string (e.g. "0x1234...").
pub type Hex = String;

/// Compact SDK error types.
#[derive(Debug, Error)]
pub enum CompactError {
    #[error("invalid hex string: {0}")]
    InvalidHex(String),

    #[error("invalid decimal string: {0}")]
    InvalidDecimal(String),

    #[error("allocator id exceeds 92 bits: {0}")]
    AllocatorIdOutOfRange(u128),

    #[error("scope value out of range: {0}")]
    ScopeOutOfRange(u8),

    #[error("reset period value out of range: {0}")]
    ResetPeriodOutOfRange(u8),

    #[error("lock tag exceeds 96 bits")]
    LockTagOutOfRange,

    #[error("address exceeds 160 bits")]
    AddressOutOfRange,

    #[error("value exceeds 256 bits")]
    ValueOutOfRange,
}

pub type Result<T> = std::result::Result<T, CompactError>;

/// Whether a resource lock is usable on one chain or across chains.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[repr(u8)]
pub enum Scope {
    SingleChain = 0,
    Multichain = 1,
}

impl Scope {
    pub fn value(self) -> u8 {
        self as u8
    }
}

impl TryFrom<u8> for Scope {
    type Error = CompactError;

    fn try_from(raw: u8) -> Result<Self> {
        match raw {
            0 => Ok(Scope::SingleChain),
            1 => Ok(Scope::Multichain),
            other => Err(CompactError::ScopeOutOfRange(other)),
        }
    }
}

/// Cooldown category governing forced-withdrawal timing.
///
/// The contract reserves the full 3-bit range; values 1, 2 and 7 have no
/// assigned duration but still round-trip through the codec.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[repr(u8)]
pub enum ResetPeriod {
    OneMinute = 0,
    Reserved1 = 1,
    Reserved2 = 2,
    TenMinutes = 3,
    OneHour = 4,
    OneDay = 5,
    OneWeek = 6,
    Reserved7 = 7,
}

impl ResetPeriod {
    pub fn value(self) -> u8 {
        self as u8
    }
}

impl TryFrom<u8> for ResetPeriod {
    type Error = CompactError;

    fn try_from(raw: u8) -> Result<Self> {
        match raw {
            0 => Ok(ResetPeriod::OneMinute),
            1 => Ok(ResetPeriod::Reserved1),
            2 => Ok(ResetPeriod::Reserved2),
            3 => Ok(ResetPeriod::TenMinutes),
            4 => Ok(ResetPeriod::OneHour),
            5 => Ok(ResetPeriod::OneDay),
            6 => Ok(ResetPeriod::OneWeek),
            7 => Ok(ResetPeriod::Reserved7),
            other => Err(CompactError::ResetPeriodOutOfRange(other)),
        }
    }
}

/// 96-bit lock tag: scope at bit 95, reset period at bits 92-94, allocator
/// id in bits 0-91. Stored as 12 big-endian bytes (the contract's `bytes12`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct LockTag([u8; 12]);

impl LockTag {
    /// The all-zero tag. On a claimant it directs the claim to pay out the
    /// underlying asset instead of a new resource lock.
    pub fn zero() -> Self {
        LockTag([0u8; 12])
    }

    pub fn is_zero(&self) -> bool {
        self.0 == [0u8; 12]
    }

    /// Build from a packed 96-bit value; rejects anything wider.
    pub fn from_raw(raw: u128) -> Result<Self> {
        if raw >> 96 != 0 {
            return Err(CompactError::LockTagOutOfRange);
        }
        let be = raw.to_be_bytes();
        let mut tag = [0u8; 12];
        tag.copy_from_slice(&be[4..16]);
        Ok(LockTag(tag))
    }

    pub fn from_bytes(bytes: [u8; 12]) -> Self {
        LockTag(bytes)
    }

    pub fn to_bytes(self) -> [u8; 12] {
        self.0
    }

    pub fn as_u128(self) -> u128 {
        let mut be = [0u8; 16];
        be[4..16].copy_from_slice(&self.0);
        u128::from_be_bytes(be)
    }

    /// Parse from hex (at most 24 hex chars, left-zero-padded if shorter).
    pub fn from_hex(hex_str: &str) -> Result<Self> {
        let bytes = hex_to_bytes(hex_str)?;
        if bytes.len() > 12 {
            return Err(CompactError::LockTagOutOfRange);
        }
        let mut tag = [0u8; 12];
        tag[12 - bytes.len()..].copy_from_slice(&bytes);
        Ok(LockTag(tag))
    }

    /// Render as a 0x-prefixed, 24-character hex string.
    pub fn to_hex(self) -> Hex {
        format!("0x{}", hex::encode(self.0))
    }
}

/// Parse a hex string to a big-endian byte array.
pub fn hex_to_bytes(hex_str: &str) -> Result<Vec<u8>> {
    let hex_str = hex_str.strip_prefix("0x").unwrap_or(hex_str);
    hex::decode(hex_str).map_err(|e| CompactError::InvalidHex(e.to_string()))
}

/// Convert bytes to a 0x-prefixed hex string.
pub fn bytes_to_hex(bytes: &[u8]) -> Hex {
    format!("0x{}", hex::encode(bytes))
}

/// Parse a hex string into a 160-bit address (left-zero-padded if shorter).
pub fn hex_to_address(hex_str: &str) -> Result<Address> {
    let bytes = hex_to_bytes(hex_str)?;
    if bytes.len() > 20 {
        return Err(CompactError::AddressOutOfRange);
    }
    let mut padded = [0u8; 20];
    padded[20 - bytes.len()..].copy_from_slice(&bytes);
    Ok(Address::from(padded))
}

/// Convert an address to a 0x-prefixed hex string (40 chars).
pub fn address_to_hex(addr: &Address) -> Hex {
    format!("0x{}", hex::encode(addr.as_bytes()))
}

/// Parse a hex string into a U256 (left-zero-padded if shorter).
pub fn hex_to_u256(hex_str: &str) -> Result<U256> {
    let bytes = hex_to_bytes(hex_str)?;
    if bytes.len() > 32 {
        return Err(CompactError::ValueOutOfRange);
    }
    Ok(U256::from_big_endian(&bytes))
}

/// Convert a U256 to a 0x-prefixed hex string (64 chars).
pub fn u256_to_hex(value: &U256) -> Hex {
    format!("0x{}", hex::encode(value.to_big_endian()))
}

/// Parse a decimal string into a U256 (amounts, token ids).
pub fn dec_to_u256(dec_str: &str) -> Result<U256> {
    U256::from_dec_str(dec_str).map_err(|e| CompactError::InvalidDecimal(e.to_string()))
}

/// Parse a decimal string into a u128 (allocator ids).
pub fn dec_to_u128(dec_str: &str) -> Result<u128> {
    dec_str
        .parse::<u128>()
        .map_err(|e| CompactError::InvalidDecimal(e.to_string()))
}
