use rand::Rng;

/// Default identifier width in decimal digits.
pub const ID_DIGITS: u32 = 6;

/// Generate a random identifier with exactly `digits` decimal digits.
///
/// Draws uniformly from `[10^(digits-1), 10^digits)`. Uniqueness against
/// identifiers already handed out is the caller's concern. `digits` is
/// clamped to `1..=19` so the range fits in a `u64`.
pub fn gen_id(digits: u32) -> u64 {
    let digits = digits.clamp(1, 19);
    let low = 10u64.pow(digits - 1);
    let high = 10u64.pow(digits);

    rand::thread_rng().gen_range(low..high)
}

/// Number of distinct identifiers `gen_id(digits)` can produce.
pub fn id_space(digits: u32) -> u64 {
    let digits = digits.clamp(1, 19);
    10u64.pow(digits) - 10u64.pow(digits - 1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gen_id_width() {
        for _ in 0..1_000 {
            let id = gen_id(ID_DIGITS);
            assert!((100_000..1_000_000).contains(&id));
        }
    }

    #[test]
    fn test_gen_id_single_digit() {
        for _ in 0..100 {
            assert!((1..10).contains(&gen_id(1)));
        }
    }

    #[test]
    fn test_gen_id_clamps_width() {
        assert!(gen_id(0) < 10);
        assert!(gen_id(40) >= 10u64.pow(18));
    }

    #[test]
    fn test_id_space() {
        assert_eq!(id_space(1), 9);
        assert_eq!(id_space(ID_DIGITS), 900_000);
    }
}
