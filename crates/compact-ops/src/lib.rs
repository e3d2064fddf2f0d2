//! Operation preparation: deposit, withdrawal, claim.
//!
//! Translates human-level parameters into the identifiers and hashes the
//! contract-call layer submits. Everything here is pure and stateless; the
//! caller is responsible for signing and for the on-chain transaction.

use compact_types::{
    Address, Claimant, Hex, LockTag, ResetPeriod, Result, Scope, StructHash, TokenId, TypeHash,
};
use compact_codec::{
    claim_hash::{self, Compact, EncodeMode},
    lock_tag, token_id,
};
use primitive_types::U256;

/// Prepared deposit (ready for on-chain submission).
///
/// A zero token address selects the native-asset deposit path.
#[derive(Debug, Clone)]
pub struct PreparedDeposit {
    pub lock_tag: LockTag,
    pub lock_tag_hex: Hex,
    pub token_id: TokenId,
    pub token: Address,
    pub recipient: Address,
}

impl PreparedDeposit {
    pub fn is_native(&self) -> bool {
        self.token.is_zero()
    }
}

/// Prepared allocated-transfer withdrawal.
///
/// The claimant carries the all-zero lock tag, which directs the claim to
/// pay out the underlying asset to the recipient.
#[derive(Debug, Clone)]
pub struct PreparedWithdrawal {
    pub token_id: TokenId,
    pub claimant: Claimant,
    pub recipient: Address,
    pub amount: U256,
}

/// Prepared forced withdrawal. Enabling and executing use the same
/// identifier; the contract enforces the reset-period wait in between.
#[derive(Debug, Clone)]
pub struct PreparedForcedWithdrawal {
    pub token_id: TokenId,
    pub recipient: Address,
    pub amount: U256,
}

/// Prepared claim: the compact with its hashes and the recipient claimant,
/// ready for off-chain signing and submission.
#[derive(Debug, Clone)]
pub struct PreparedClaim {
    pub compact: Compact,
    pub type_hash: TypeHash,
    pub claim_hash: StructHash,
    pub claimant: Claimant,
}

/// Prepare a deposit: derive the lock tag and the token id the depositor
/// will see on-chain.
pub fn prepare_deposit(
    allocator_id: u128,
    scope: Scope,
    reset_period: ResetPeriod,
    token: Address,
    recipient: Address,
) -> Result<PreparedDeposit> {
    let tag = lock_tag::encode(allocator_id, scope, reset_period)?;
    let id = token_id::make_token_id(tag, token);

    Ok(PreparedDeposit {
        lock_tag: tag,
        lock_tag_hex: tag.to_hex(),
        token_id: id,
        token,
        recipient,
    })
}

/// Prepare an allocated-transfer withdrawal of the underlying asset.
pub fn prepare_withdrawal(
    token_id: TokenId,
    recipient: Address,
    amount: U256,
) -> PreparedWithdrawal {
    let claimant = token_id::make_claimant(LockTag::zero(), recipient);

    PreparedWithdrawal {
        token_id,
        claimant,
        recipient,
        amount,
    }
}

/// Prepare a forced withdrawal.
pub fn prepare_forced_withdrawal(
    token_id: TokenId,
    recipient: Address,
    amount: U256,
) -> PreparedForcedWithdrawal {
    PreparedForcedWithdrawal {
        token_id,
        recipient,
        amount,
    }
}

/// Prepare a claim: hash the compact and encode the recipient claimant
/// (zero lock tag, so the claim pays out the underlying asset).
pub fn prepare_claim(compact: Compact, recipient: Address) -> PreparedClaim {
    let th = claim_hash::type_hash();
    let ch = claim_hash::claim_hash(&compact, th, EncodeMode::Packed);
    let claimant = token_id::make_claimant(LockTag::zero(), recipient);

    PreparedClaim {
        compact,
        type_hash: th,
        claim_hash: ch,
        claimant,
    }
}
