//! Lock tag packing.
//!
//! lock_tag = (scope << 95) | (reset_period << 92) | allocator_id
//!
//! Bit 95 holds the scope, bits 92-94 the reset period, bits 0-91 the
//! allocator id.

use compact_types::{CompactError, LockTag, ResetPeriod, Result, Scope};

const ALLOCATOR_ID_MASK: u128 = (1u128 << 92) - 1;

/// Pack allocator id, scope and reset period into a lock tag.
///
/// Fails if the allocator id does not fit in 92 bits.
pub fn encode(allocator_id: u128, scope: Scope, reset_period: ResetPeriod) -> Result<LockTag> {
    if allocator_id > ALLOCATOR_ID_MASK {
        return Err(CompactError::AllocatorIdOutOfRange(allocator_id));
    }
    let packed = (u128::from(scope.value()) << 95)
        | (u128::from(reset_period.value()) << 92)
        | allocator_id;
    LockTag::from_raw(packed)
}

/// Pack from unvalidated raw integers; scope and reset period go through the
/// closed enums first so out-of-range values are rejected, not truncated.
pub fn encode_raw(allocator_id: u128, scope: u8, reset_period: u8) -> Result<LockTag> {
    let scope = Scope::try_from(scope)?;
    let reset_period = ResetPeriod::try_from(reset_period)?;
    encode(allocator_id, scope, reset_period)
}

/// Extract (allocator_id, scope, reset_period) from a lock tag.
///
/// Total over any 96-bit value; exact inverse of `encode`.
pub fn decode(lock_tag: LockTag) -> (u128, Scope, ResetPeriod) {
    let raw = lock_tag.as_u128();

    let scope = match (raw >> 95) & 1 {
        0 => Scope::SingleChain,
        _ => Scope::Multichain,
    };

    let reset_period = match ((raw >> 92) & 0b111) as u8 {
        0 => ResetPeriod::OneMinute,
        1 => ResetPeriod::Reserved1,
        2 => ResetPeriod::Reserved2,
        3 => ResetPeriod::TenMinutes,
        4 => ResetPeriod::OneHour,
        5 => ResetPeriod::OneDay,
        6 => ResetPeriod::OneWeek,
        _ => ResetPeriod::Reserved7,
    };

    (raw & ALLOCATOR_ID_MASK, scope, reset_period)
}

#[cfg(test)]
mod tests {
    use super::*;
    use compact_types::dec_to_u128;

    #[test]
    fn test_lock_tag_vectors_from_json() {
        let data = include_str!("../../../tests/vectors/lock_tag.json");
        let vectors: Vec<serde_json::Value> = serde_json::from_str(data).unwrap();

        for v in &vectors {
            let allocator_id = dec_to_u128(v["allocator_id"].as_str().unwrap()).unwrap();
            let scope = v["scope"].as_u64().unwrap() as u8;
            let reset_period = v["reset_period"].as_u64().unwrap() as u8;
            let expected = v["lock_tag"].as_str().unwrap();

            let tag = encode_raw(allocator_id, scope, reset_period).unwrap();
            assert_eq!(
                tag.to_hex(),
                expected,
                "encode mismatch for '{}'",
                v["name"].as_str().unwrap()
            );

            let (a, s, r) = decode(tag);
            assert_eq!(a, allocator_id, "allocator roundtrip mismatch");
            assert_eq!(s.value(), scope, "scope roundtrip mismatch");
            assert_eq!(r.value(), reset_period, "reset period roundtrip mismatch");
        }
    }

    #[test]
    fn test_roundtrip_all_scope_and_period_combinations() {
        for scope in 0u8..=1 {
            for period in 0u8..=7 {
                let tag = encode_raw(0x1234_5678_9abc_def0, scope, period).unwrap();
                let (a, s, r) = decode(tag);
                assert_eq!(a, 0x1234_5678_9abc_def0);
                assert_eq!(s.value(), scope);
                assert_eq!(r.value(), period);
            }
        }
    }

    #[test]
    fn test_range_rejection() {
        assert!(matches!(
            encode_raw(1u128 << 92, 0, 3),
            Err(CompactError::AllocatorIdOutOfRange(_))
        ));
        assert!(matches!(
            encode_raw(1, 2, 3),
            Err(CompactError::ScopeOutOfRange(2))
        ));
        assert!(matches!(
            encode_raw(1, 0, 8),
            Err(CompactError::ResetPeriodOutOfRange(8))
        ));

        // One below each limit is fine
        assert!(encode_raw((1u128 << 92) - 1, 1, 7).is_ok());
    }

    #[test]
    fn test_scope_bit_isolation() {
        let tag = encode(555, Scope::Multichain, ResetPeriod::OneHour).unwrap();
        let flipped = LockTag::from_raw(tag.as_u128() ^ (1u128 << 95)).unwrap();

        let (a, s, r) = decode(flipped);
        assert_eq!(s, Scope::SingleChain);
        assert_eq!(r, ResetPeriod::OneHour);
        assert_eq!(a, 555);
    }
}
