//! Delta and spacing operations over timestamp sequences.

use crate::{DateError, DateResult, SignedDuration, Timestamp};
use alloc::vec::Vec;

/// Returns the signed differences between consecutive timestamps.
///
/// For a sequence of length `n` the result has length `n - 1`, with
/// entry `i` equal to `sequence[i + 1] - sequence[i]`. Sequences shorter
/// than two yield an empty result.
#[must_use]
pub fn time_deltas(sequence: &[Timestamp]) -> Vec<SignedDuration> {
    sequence
        .windows(2)
        .map(|pair| pair[1].since(&pair[0]))
        .collect()
}

/// Returns the sum of the consecutive deltas of a sequence, which
/// telescopes to `last - first`. Sequences shorter than two yield zero.
#[must_use]
pub fn total_time(sequence: &[Timestamp]) -> SignedDuration {
    match (sequence.first(), sequence.last()) {
        (Some(first), Some(last)) => last.since(first),
        _ => SignedDuration::ZERO,
    }
}

/// Produces `count` evenly spaced timestamps starting at `start`, with
/// entry `i` equal to `start + i * spacing`.
///
/// A zero `count` is an argument error; results that leave the valid
/// epoch range are range errors.
pub fn evenly_spaced(
    start: Timestamp,
    spacing: SignedDuration,
    count: usize,
) -> DateResult<Vec<Timestamp>> {
    if count == 0 {
        return Err(DateError::argument().with_message("sequence count must be at least one"));
    }
    let mut values = Vec::with_capacity(count);
    values.push(start);
    let mut last = start;
    for _ in 1..count {
        last = last.checked_add(&spacing)?;
        values.push(last);
    }
    Ok(values)
}

#[cfg(test)]
mod tests {
    use super::{evenly_spaced, time_deltas, total_time};
    use crate::{error::ErrorKind, SignedDuration, Timestamp, NS_MAX_TIMESTAMP};
    use alloc::vec;

    fn at(hour: u8, minute: u8) -> Timestamp {
        Timestamp::from_utc(2021, 5, 10, hour, minute, 0).unwrap()
    }

    #[test]
    fn deltas_between_consecutive_entries() {
        let sequence = vec![at(10, 0), at(10, 5), at(10, 3)];
        assert_eq!(
            time_deltas(&sequence),
            vec![
                SignedDuration::from_minutes(5),
                SignedDuration::from_minutes(-2),
            ]
        );
    }

    #[test]
    fn short_sequences_are_empty_or_zero() {
        assert!(time_deltas(&[]).is_empty());
        assert!(time_deltas(&[at(10, 0)]).is_empty());
        assert_eq!(total_time(&[]), SignedDuration::ZERO);
        assert_eq!(total_time(&[at(10, 0)]), SignedDuration::ZERO);
    }

    #[test]
    fn total_time_matches_the_delta_sum() {
        let sequence = vec![at(10, 0), at(10, 5), at(10, 3), at(11, 30)];
        let mut sum = SignedDuration::ZERO;
        for delta in time_deltas(&sequence) {
            sum = sum.checked_add(&delta).unwrap();
        }
        assert_eq!(total_time(&sequence), sum);
        assert_eq!(total_time(&sequence), SignedDuration::from_minutes(90));
    }

    #[test]
    fn evenly_spaced_entries() {
        let spacing = SignedDuration::from_minutes(15);
        let values = evenly_spaced(at(10, 0), spacing, 4).unwrap();
        assert_eq!(values, vec![at(10, 0), at(10, 15), at(10, 30), at(10, 45)]);

        assert_eq!(evenly_spaced(at(10, 0), spacing, 1).unwrap(), vec![at(10, 0)]);
    }

    #[test]
    fn zero_count_is_an_argument_error() {
        let err = evenly_spaced(at(10, 0), SignedDuration::from_minutes(1), 0).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Argument);
    }

    #[test]
    fn out_of_range_results_are_range_errors() {
        let start = Timestamp::try_new(NS_MAX_TIMESTAMP).unwrap();
        let err = evenly_spaced(start, SignedDuration::from_days(1), 2).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Range);
    }
}
