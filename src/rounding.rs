//! Boundary selection for increment rounding.
//!
//! A rounding operation brackets the input between the two timestamps
//! sitting on the rounding grid (`lower` and `upper` in timeline order)
//! and picks one of them based on the instant distances and the
//! rounding mode.

use crate::options::{RoundingMode, UnsignedRoundingMode};
use core::cmp::Ordering;

/// The grid boundary chosen by a rounding operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Boundary {
    Lower,
    Upper,
}

/// Picks a grid boundary for an input strictly between the two.
///
/// `d_lower` and `d_upper` are the non-negative instant distances from
/// the input to each boundary; `lower_even` is the parity of the lower
/// boundary's grid index (used by half-even); `is_positive` is the sign
/// of the value being rounded, which orients the zero/infinity modes on
/// the timeline.
pub(crate) fn choose_boundary(
    d_lower: i128,
    d_upper: i128,
    lower_even: bool,
    mode: RoundingMode,
    is_positive: bool,
) -> Boundary {
    debug_assert!(d_lower > 0 && d_upper > 0);
    let unsigned = mode.get_unsigned_round_mode(is_positive);
    // In timeline order, "infinity" (away from zero) is the upper
    // boundary for non-negative values and the lower for negative ones.
    let (away, toward) = if is_positive {
        (Boundary::Upper, Boundary::Lower)
    } else {
        (Boundary::Lower, Boundary::Upper)
    };
    match unsigned {
        UnsignedRoundingMode::Zero => toward,
        UnsignedRoundingMode::Infinity => away,
        _ => match d_lower.cmp(&d_upper) {
            Ordering::Less => Boundary::Lower,
            Ordering::Greater => Boundary::Upper,
            Ordering::Equal => match unsigned {
                UnsignedRoundingMode::HalfZero => toward,
                UnsignedRoundingMode::HalfInfinity => away,
                UnsignedRoundingMode::HalfEven => {
                    if lower_even {
                        Boundary::Lower
                    } else {
                        Boundary::Upper
                    }
                }
                _ => unreachable!(),
            },
        },
    }
}

#[cfg(test)]
mod tests {
    use super::{choose_boundary, Boundary};
    use crate::options::RoundingMode;

    #[derive(Debug)]
    struct TestCase {
        d_lower: i128,
        d_upper: i128,
        lower_even: bool,
        ceil: Boundary,
        floor: Boundary,
        expand: Boundary,
        trunc: Boundary,
        half_expand: Boundary,
        half_trunc: Boundary,
        half_even: Boundary,
    }

    impl TestCase {
        fn run(&self, is_positive: bool) {
            let modes = [
                (RoundingMode::Ceil, self.ceil),
                (RoundingMode::Floor, self.floor),
                (RoundingMode::Expand, self.expand),
                (RoundingMode::Trunc, self.trunc),
                (RoundingMode::HalfExpand, self.half_expand),
                (RoundingMode::HalfTrunc, self.half_trunc),
                (RoundingMode::HalfEven, self.half_even),
            ];
            for (mode, expected) in modes {
                assert_eq!(
                    choose_boundary(self.d_lower, self.d_upper, self.lower_even, mode, is_positive),
                    expected,
                    "testing distances {}/{} with mode {mode}",
                    self.d_lower,
                    self.d_upper,
                );
            }
        }
    }

    #[test]
    fn positive_value_boundaries() {
        use Boundary::{Lower, Upper};
        // Below the midpoint.
        TestCase {
            d_lower: 1,
            d_upper: 9,
            lower_even: true,
            ceil: Upper,
            floor: Lower,
            expand: Upper,
            trunc: Lower,
            half_expand: Lower,
            half_trunc: Lower,
            half_even: Lower,
        }
        .run(true);
        // Above the midpoint.
        TestCase {
            d_lower: 7,
            d_upper: 3,
            lower_even: true,
            ceil: Upper,
            floor: Lower,
            expand: Upper,
            trunc: Lower,
            half_expand: Upper,
            half_trunc: Upper,
            half_even: Upper,
        }
        .run(true);
        // Exactly on the midpoint, even lower index.
        TestCase {
            d_lower: 5,
            d_upper: 5,
            lower_even: true,
            ceil: Upper,
            floor: Lower,
            expand: Upper,
            trunc: Lower,
            half_expand: Upper,
            half_trunc: Lower,
            half_even: Lower,
        }
        .run(true);
        // Exactly on the midpoint, odd lower index.
        TestCase {
            d_lower: 5,
            d_upper: 5,
            lower_even: false,
            ceil: Upper,
            floor: Lower,
            expand: Upper,
            trunc: Lower,
            half_expand: Upper,
            half_trunc: Lower,
            half_even: Upper,
        }
        .run(true);
    }

    #[test]
    fn negative_value_boundaries() {
        use Boundary::{Lower, Upper};
        // For a negative value, away-from-zero is the earlier boundary.
        TestCase {
            d_lower: 5,
            d_upper: 5,
            lower_even: true,
            ceil: Upper,
            floor: Lower,
            expand: Lower,
            trunc: Upper,
            half_expand: Lower,
            half_trunc: Upper,
            half_even: Lower,
        }
        .run(false);
    }
}
