//! Compact struct hashing (EIP-712 style).
//!
//! claim_hash = keccak256(
//!     type_hash || arbiter || sponsor || nonce || expires || lock_tag || token || amount
//! )
//!
//! The field order is fixed by the canonical type string. Field widths
//! depend on the encode mode; see `EncodeMode`.

use compact_types::{bytes_to_hex, Address, Hex, LockTag, StructHash, TypeHash};
use primitive_types::{H256, U256};
use sha3::{Digest, Keccak256};

/// Canonical Compact type signature. Field order and the absence of spaces
/// after commas are normative; the contract hashes this exact string.
pub const COMPACT_TYPESTRING: &str = "Compact(address arbiter,address sponsor,uint256 nonce,uint256 expires,bytes12 lockTag,address token,uint256 amount)";

/// A compact: a sponsor's signable commitment that locked funds may be
/// claimed through an arbiter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Compact {
    pub arbiter: Address,
    pub sponsor: Address,
    pub nonce: U256,
    /// Unix timestamp. Freshness is the caller's concern, not the codec's.
    pub expires: U256,
    pub lock_tag: LockTag,
    pub token: Address,
    pub amount: U256,
}

/// Field concatenation layout for `claim_hash`.
///
/// The reference client packs fields at their minimal widths; canonical
/// EIP-712 `encodeData` would pad every field to a 32-byte slot. The two
/// disagree on the resulting hash for any field narrower than 32 bytes, so
/// the choice stays explicit here until the verifying contract's expectation
/// is confirmed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EncodeMode {
    /// Minimal widths: 20-byte addresses, 12-byte lock tag (200 bytes total).
    Packed,
    /// 32-byte slots: addresses left-padded, the lock tag right-padded
    /// (256 bytes total).
    Padded,
}

/// keccak256 of the canonical type string.
///
/// Constant for the lifetime of the protocol version.
pub fn type_hash() -> TypeHash {
    keccak256(COMPACT_TYPESTRING.as_bytes())
}

/// Concatenate the compact's fields in canonical order.
pub fn encode(compact: &Compact, type_hash: TypeHash, mode: EncodeMode) -> Vec<u8> {
    match mode {
        EncodeMode::Packed => {
            let mut out = Vec::with_capacity(200);
            out.extend_from_slice(type_hash.as_bytes());
            out.extend_from_slice(compact.arbiter.as_bytes());
            out.extend_from_slice(compact.sponsor.as_bytes());
            out.extend_from_slice(&compact.nonce.to_big_endian());
            out.extend_from_slice(&compact.expires.to_big_endian());
            out.extend_from_slice(&compact.lock_tag.to_bytes());
            out.extend_from_slice(compact.token.as_bytes());
            out.extend_from_slice(&compact.amount.to_big_endian());
            out
        }
        EncodeMode::Padded => {
            let mut out = Vec::with_capacity(256);
            out.extend_from_slice(type_hash.as_bytes());
            extend_address_slot(&mut out, &compact.arbiter);
            extend_address_slot(&mut out, &compact.sponsor);
            out.extend_from_slice(&compact.nonce.to_big_endian());
            out.extend_from_slice(&compact.expires.to_big_endian());
            // bytesN slots are right-padded, unlike value types
            out.extend_from_slice(&compact.lock_tag.to_bytes());
            out.extend_from_slice(&[0u8; 20]);
            extend_address_slot(&mut out, &compact.token);
            out.extend_from_slice(&compact.amount.to_big_endian());
            out
        }
    }
}

/// Hash a compact against a type hash.
///
/// Deterministic: identical compacts always hash identically, and any
/// single-bit field change changes the result.
pub fn claim_hash(compact: &Compact, type_hash: TypeHash, mode: EncodeMode) -> StructHash {
    keccak256(&encode(compact, type_hash, mode))
}

/// Hash a compact and return the 0x-prefixed hex digest.
pub fn claim_hash_hex(compact: &Compact, type_hash: TypeHash, mode: EncodeMode) -> Hex {
    bytes_to_hex(claim_hash(compact, type_hash, mode).as_bytes())
}

fn extend_address_slot(out: &mut Vec<u8>, addr: &Address) {
    out.extend_from_slice(&[0u8; 12]);
    out.extend_from_slice(addr.as_bytes());
}

fn keccak256(data: &[u8]) -> H256 {
    H256::from_slice(&Keccak256::digest(data))
}
