use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;
use thiserror::Error;

use super::model::{Dataset, Record};

/// Allowed deviation of the proportion sum from 1.0.
const PROPORTION_TOLERANCE: f64 = 1e-6;

// ---------------------------------------------------------------------------
// Split result & error
// ---------------------------------------------------------------------------

/// Train/test/validation proportions did not sum to 1.0.
#[derive(Debug, Clone, PartialEq, Error)]
#[error("split proportions must sum to 1.0, got {sum}")]
pub struct SplitProportionError {
    /// The offending computed sum.
    pub sum: f64,
}

/// The three disjoint subsets produced by [`Dataset::split`]. Their
/// concatenation is a permutation of the source records.
#[derive(Debug, Clone, PartialEq)]
pub struct Splits {
    pub train: Vec<Record>,
    pub test: Vec<Record>,
    pub validation: Vec<Record>,
}

// ---------------------------------------------------------------------------
// Partitioning
// ---------------------------------------------------------------------------

impl Dataset {
    /// Partition the records into training/test/validation subsets by
    /// proportion.
    ///
    /// The records are copied, shuffled uniformly (Fisher–Yates), and cut at
    /// `floor(n * train_pct)` and `floor(n * (train_pct + test_pct))`; the
    /// validation subset absorbs any rounding remainder. The dataset itself
    /// is never mutated, so `split` is a repeatable query.
    ///
    /// With `seed` the RNG is seeded deterministically and the output is
    /// bit-for-bit reproducible; without it, process-ambient entropy is
    /// used. The RNG is local to this call, so seeding one split cannot
    /// affect any other.
    pub fn split(
        &self,
        train_pct: f64,
        test_pct: f64,
        val_pct: f64,
        seed: Option<u64>,
    ) -> Result<Splits, SplitProportionError> {
        let sum = train_pct + test_pct + val_pct;
        if (sum - 1.0).abs() > PROPORTION_TOLERANCE {
            return Err(SplitProportionError { sum });
        }

        let mut shuffled = self.records.clone();
        let mut rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        shuffled.shuffle(&mut rng);

        let n = shuffled.len();
        let test_cut = cut_index(n, train_pct + test_pct).min(n);
        let train_cut = cut_index(n, train_pct).min(test_cut);

        let validation = shuffled.split_off(test_cut);
        let test = shuffled.split_off(train_cut);
        Ok(Splits {
            train: shuffled,
            test,
            validation,
        })
    }
}

/// `floor(n * fraction)`, snapping products that sit within representation
/// noise of an integer (0.7 + 0.2 is not exactly 0.9 in binary, and 10x
/// that must still cut at 9, not 8).
fn cut_index(n: usize, fraction: f64) -> usize {
    let scaled = n as f64 * fraction;
    if (scaled - scaled.round()).abs() < 1e-9 {
        scaled.round() as usize
    } else {
        scaled.floor() as usize
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    fn numbered_dataset(n: usize) -> Dataset {
        Dataset {
            labels: vec!["id".into(), "class".into()],
            records: (0..n)
                .map(|i| vec![i.to_string(), format!("class_{}", i % 3)])
                .collect(),
            class_index: -1,
        }
    }

    fn sorted(mut records: Vec<Record>) -> Vec<Record> {
        records.sort();
        records
    }

    #[test]
    fn ten_records_at_70_20_10_split_7_2_1() {
        let ds = numbered_dataset(10);
        let splits = ds.split(0.7, 0.2, 0.1, Some(42)).unwrap();
        assert_eq!(splits.train.len(), 7);
        assert_eq!(splits.test.len(), 2);
        assert_eq!(splits.validation.len(), 1);
    }

    #[test]
    fn union_of_subsets_is_a_permutation_of_the_input() {
        let ds = numbered_dataset(10);
        let splits = ds.split(0.7, 0.2, 0.1, Some(42)).unwrap();

        let mut union = splits.train;
        union.extend(splits.test);
        union.extend(splits.validation);
        assert_eq!(sorted(union), sorted(ds.records.clone()));
    }

    #[test]
    fn same_seed_reproduces_the_same_ordered_output() {
        let ds = numbered_dataset(25);
        let first = ds.split(0.6, 0.3, 0.1, Some(7)).unwrap();
        let second = ds.split(0.6, 0.3, 0.1, Some(7)).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn different_seeds_generally_disagree() {
        let ds = numbered_dataset(25);
        let first = ds.split(0.6, 0.3, 0.1, Some(1)).unwrap();
        let second = ds.split(0.6, 0.3, 0.1, Some(2)).unwrap();
        assert_ne!(first.train, second.train);
    }

    #[test]
    fn split_does_not_mutate_the_dataset() {
        let ds = numbered_dataset(10);
        let before = ds.records.clone();
        ds.split(0.7, 0.2, 0.1, Some(42)).unwrap();
        assert_eq!(ds.records, before);
    }

    #[test]
    fn proportions_off_by_a_tenth_fail_with_the_computed_sum() {
        let ds = numbered_dataset(10);
        let err = ds.split(0.7, 0.3, 0.1, Some(42)).unwrap_err();
        assert_eq!(err.sum, 0.7 + 0.3 + 0.1);
        assert_eq!(
            err.to_string(),
            "split proportions must sum to 1.0, got 1.1"
        );
    }

    #[test]
    fn sums_within_tolerance_are_accepted() {
        let ds = numbered_dataset(10);
        assert!(ds.split(0.7, 0.2, 0.1 + 5e-7, Some(42)).is_ok());
        assert!(ds.split(0.7, 0.2, 0.1 - 5e-7, Some(42)).is_ok());
        assert!(ds.split(0.7, 0.2, 0.1 + 1e-5, Some(42)).is_err());
    }

    #[test]
    fn validation_absorbs_the_rounding_remainder() {
        // 7 records: floor(7 * 0.5) = 3, floor(7 * 0.75) = 5, rest = 2.
        let ds = numbered_dataset(7);
        let splits = ds.split(0.5, 0.25, 0.25, Some(3)).unwrap();
        assert_eq!(splits.train.len(), 3);
        assert_eq!(splits.test.len(), 2);
        assert_eq!(splits.validation.len(), 2);
    }

    #[test]
    fn empty_dataset_splits_into_three_empty_subsets() {
        let ds = Dataset::new();
        let splits = ds.split(0.7, 0.2, 0.1, None).unwrap();
        assert!(splits.train.is_empty());
        assert!(splits.test.is_empty());
        assert!(splits.validation.is_empty());
    }

    #[test]
    fn unseeded_split_still_partitions_completely() {
        let ds = numbered_dataset(12);
        let splits = ds.split(0.5, 0.25, 0.25, None).unwrap();
        assert_eq!(
            splits.train.len() + splits.test.len() + splits.validation.len(),
            12
        );
    }
}
