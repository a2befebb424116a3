//! Labeled samples and the seeded train/test split.

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;

use outlook_core::ScoreInputs;

use crate::classifier::Label;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sample {
    pub features: [f64; 4],
    pub label: Label,
}

impl Sample {
    pub fn new(scores: ScoreInputs, label: Label) -> Self {
        Self {
            features: scores.as_features(),
            label,
        }
    }

    pub fn target(&self) -> f64 {
        f64::from(self.label.as_u8())
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Dataset {
    samples: Vec<Sample>,
}

impl Dataset {
    pub fn new(samples: Vec<Sample>) -> Self {
        Self { samples }
    }

    /// The ten-row reference set the shipped artifact is fitted on.
    pub fn reference() -> Self {
        const ROWS: [([f64; 4], u8); 10] = [
            ([90.0, 85.0, 88.0, 90.0], 1),
            ([85.0, 80.0, 78.0, 82.0], 1),
            ([40.0, 35.0, 30.0, 33.0], 0),
            ([60.0, 55.0, 50.0, 58.0], 0),
            ([75.0, 70.0, 72.0, 74.0], 1),
            ([50.0, 45.0, 40.0, 48.0], 0),
            ([95.0, 92.0, 94.0, 96.0], 1),
            ([30.0, 25.0, 28.0, 29.0], 0),
            ([70.0, 65.0, 68.0, 69.0], 1),
            ([88.0, 84.0, 86.0, 89.0], 1),
        ];
        ROWS.iter()
            .map(|&(features, label)| Sample {
                features,
                label: Label::from_bool(label == 1),
            })
            .collect()
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    pub fn samples(&self) -> &[Sample] {
        &self.samples
    }

    /// True when both labels occur at least once.
    pub fn has_both_classes(&self) -> bool {
        let positives = self.samples.iter().filter(|s| s.label == Label::High).count();
        positives > 0 && positives < self.samples.len()
    }

    /// Shuffle with a seeded PRNG and hold out `ceil(n * test_fraction)` rows,
    /// keeping at least one row on each side when `n >= 2`.
    pub fn split(&self, test_fraction: f64, seed: u64) -> (Dataset, Dataset) {
        let n = self.samples.len();
        if n < 2 {
            return (self.clone(), Dataset::default());
        }
        let test_len = ((n as f64) * test_fraction).ceil() as usize;
        let test_len = test_len.clamp(1, n - 1);

        let mut order: Vec<usize> = (0..n).collect();
        let mut rng = StdRng::seed_from_u64(seed);
        order.shuffle(&mut rng);

        let (test_idx, train_idx) = order.split_at(test_len);
        let pick = |idx: &[usize]| idx.iter().map(|&i| self.samples[i]).collect::<Dataset>();
        (pick(train_idx), pick(test_idx))
    }
}

impl FromIterator<Sample> for Dataset {
    fn from_iter<I: IntoIterator<Item = Sample>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}
