//! Strategy sampler
//!
//! Draws values outside the `proptest!` macro, with an optional fixed seed,
//! and tallies how path values spread across variants.

use crate::error::{Result, SampleError};
use crate::path::{PathValue, Variant};
use proptest::strategy::{Strategy, ValueTree};
use proptest::test_runner::{
    Config, RngAlgorithm, TestCaseError, TestError, TestRng, TestRunner,
};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::time::Instant;
use tracing::{debug, info};

// ============================================================================
// Configuration
// ============================================================================

/// Sampling configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SampleConfig {
    /// Number of values to draw, and the case budget for `Sampler::find`
    pub samples: u32,
    /// Maximum shrink iterations for `Sampler::find`
    pub max_shrink_iters: u32,
    /// Random seed (0 = random)
    pub seed: u64,
}

impl Default for SampleConfig {
    fn default() -> Self {
        Self {
            samples: 1000,
            max_shrink_iters: 1000,
            seed: 0,
        }
    }
}

impl SampleConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn samples(mut self, n: u32) -> Self {
        self.samples = n;
        self
    }

    pub fn seed(mut self, s: u64) -> Self {
        self.seed = s;
        self
    }

    pub fn max_shrink_iters(mut self, n: u32) -> Self {
        self.max_shrink_iters = n;
        self
    }

    /// Generate proptest config from this
    pub fn to_proptest_config(&self) -> Config {
        let mut config = Config::default();
        config.cases = self.samples;
        config.max_shrink_iters = self.max_shrink_iters;
        if self.seed != 0 {
            config.rng_algorithm = RngAlgorithm::ChaCha;
        }
        config
    }

    fn runner(&self) -> TestRunner {
        let config = self.to_proptest_config();
        if self.seed == 0 {
            return TestRunner::new(config);
        }

        let mut seed = [0u8; 32];
        for chunk in seed.chunks_mut(8) {
            chunk.copy_from_slice(&self.seed.to_le_bytes());
        }
        let rng = TestRng::from_seed(RngAlgorithm::ChaCha, &seed);
        TestRunner::new_with_rng(config, rng)
    }
}

// ============================================================================
// Tally
// ============================================================================

/// Per-variant counts over a sample of path values
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct VariantTally {
    pub counts: BTreeMap<Variant, u64>,
    pub total: u64,
    /// Values with zero-length content
    pub empty: u64,
    pub max_len: usize,
}

impl VariantTally {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, value: &PathValue) {
        *self.counts.entry(value.variant()).or_insert(0) += 1;
        self.total += 1;

        let len = value.content_len();
        if len == 0 {
            self.empty += 1;
        }
        self.max_len = self.max_len.max(len);
    }

    pub fn count(&self, variant: Variant) -> u64 {
        self.counts.get(&variant).copied().unwrap_or(0)
    }

    /// Number of variants seen at least once
    pub fn distinct(&self) -> usize {
        self.counts.values().filter(|&&n| n > 0).count()
    }

    /// Variants from `expected` that never appeared
    pub fn missing(&self, expected: &[Variant]) -> Vec<Variant> {
        expected
            .iter()
            .copied()
            .filter(|v| self.count(*v) == 0)
            .collect()
    }

    pub fn covers(&self, expected: &[Variant]) -> bool {
        self.missing(expected).is_empty()
    }
}

impl<'a> FromIterator<&'a PathValue> for VariantTally {
    fn from_iter<I: IntoIterator<Item = &'a PathValue>>(iter: I) -> Self {
        let mut tally = VariantTally::new();
        for value in iter {
            tally.record(value);
        }
        tally
    }
}

// ============================================================================
// Sampler
// ============================================================================

/// Draws values from strategies with a single runner
pub struct Sampler {
    config: SampleConfig,
    runner: TestRunner,
}

impl Sampler {
    pub fn new(config: SampleConfig) -> Self {
        let runner = config.runner();
        Self { config, runner }
    }

    pub fn with_default_config() -> Self {
        Self::new(SampleConfig::default())
    }

    pub fn config(&self) -> &SampleConfig {
        &self.config
    }

    /// Draw a single value
    pub fn draw<S: Strategy>(&mut self, strategy: &S) -> Result<S::Value> {
        let tree = strategy
            .new_tree(&mut self.runner)
            .map_err(|reason| SampleError::Generation(reason.message().to_string()))?;
        Ok(tree.current())
    }

    /// Draw `samples` values
    pub fn sample<S: Strategy>(&mut self, strategy: &S) -> Result<Vec<S::Value>> {
        let start = Instant::now();
        let values = (0..self.config.samples)
            .map(|_| self.draw(strategy))
            .collect::<Result<Vec<_>>>()?;

        debug!(
            "Drew {} values in {} ms",
            values.len(),
            start.elapsed().as_millis()
        );
        Ok(values)
    }

    /// Draw `samples` path values and count them per variant
    pub fn tally<S>(&mut self, strategy: &S) -> Result<VariantTally>
    where
        S: Strategy<Value = PathValue>,
    {
        if self.config.samples == 0 {
            return Err(SampleError::NoSamples);
        }

        let tally: VariantTally = self.sample(strategy)?.iter().collect();
        info!(
            "Tallied {} path values across {} variants ({} empty, longest {})",
            tally.total,
            tally.distinct(),
            tally.empty,
            tally.max_len
        );
        Ok(tally)
    }

    /// Search up to `samples` draws for a value matching `predicate` and
    /// shrink it toward a minimal match. `None` when no draw matched.
    pub fn find<S, F>(&mut self, strategy: &S, predicate: F) -> Result<Option<S::Value>>
    where
        S: Strategy,
        F: Fn(&S::Value) -> bool,
    {
        let result = self.runner.run(strategy, |value| {
            if predicate(&value) {
                Err(TestCaseError::fail("matched"))
            } else {
                Ok(())
            }
        });

        match result {
            Ok(()) => {
                debug!("No match in {} draws", self.config.samples);
                Ok(None)
            }
            Err(TestError::Fail(_, value)) => Ok(Some(value)),
            Err(TestError::Abort(reason)) => {
                Err(SampleError::Generation(reason.message().to_string()))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::params::PathParams;
    use crate::strategy::{paths, paths_with};

    fn init_tracing() {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .with_test_writer()
            .try_init();
    }

    #[test]
    fn test_config_defaults() {
        let config = SampleConfig::default();
        assert_eq!(config.samples, 1000);
        assert_eq!(config.seed, 0);
        assert_eq!(config.to_proptest_config().cases, 1000);
    }

    #[test]
    fn test_all_variants_over_thousand_draws() {
        init_tracing();
        let mut sampler = Sampler::new(SampleConfig::new().samples(1000).seed(7));

        let tally = sampler.tally(&paths(true)).unwrap();
        assert_eq!(tally.total, 1000);
        assert!(tally.covers(&Variant::ALL), "missing {:?}", tally.missing(&Variant::ALL));
        assert_eq!(tally.distinct(), 4);
    }

    #[test]
    fn test_primitive_only_over_hundred_draws() {
        init_tracing();
        let mut sampler = Sampler::new(SampleConfig::new().samples(100).seed(11));

        let tally = sampler.tally(&paths(false)).unwrap();
        assert_eq!(tally.total, 100);
        assert_eq!(tally.count(Variant::WrappedBytes), 0);
        assert_eq!(tally.count(Variant::WrappedText), 0);
        assert!(tally.distinct() <= 2);
        assert_eq!(tally.count(Variant::Bytes) + tally.count(Variant::Text), 100);
    }

    #[test]
    fn test_same_seed_same_values() {
        let config = SampleConfig::new().samples(50).seed(42);
        let first = Sampler::new(config.clone()).sample(&paths(true)).unwrap();
        let second = Sampler::new(config).sample(&paths(true)).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_zero_size_yields_empty_values() {
        let mut sampler = Sampler::new(SampleConfig::new().samples(200).seed(3));
        let strategy = paths_with(PathParams::new().with_size(0..=0));

        let tally = sampler.tally(&strategy).unwrap();
        assert_eq!(tally.empty, 200);
        assert_eq!(tally.max_len, 0);
    }

    #[test]
    fn test_zero_samples_rejected() {
        let mut sampler = Sampler::new(SampleConfig::new().samples(0));
        assert!(matches!(sampler.tally(&paths(true)), Err(SampleError::NoSamples)));
    }

    #[test]
    fn test_find_shrinks_to_minimal_match() {
        let mut sampler = Sampler::new(SampleConfig::new().seed(13));

        let found = sampler
            .find(&paths(true), |v| {
                v.variant() == Variant::WrappedBytes && v.content_len() >= 3
            })
            .unwrap()
            .expect("wrapped bytes of length 3 are common");
        assert_eq!(found.variant(), Variant::WrappedBytes);
        assert_eq!(found.content_len(), 3);
    }

    #[test]
    fn test_find_without_match() {
        let mut sampler = Sampler::new(SampleConfig::new().samples(100).seed(17));

        let found = sampler.find(&paths(false), |v| v.is_wrapped()).unwrap();
        assert!(found.is_none());
    }

    #[test]
    fn test_config_reaches_runner() {
        let config = SampleConfig::new().samples(64).max_shrink_iters(10).seed(1);
        let runner_config = config.to_proptest_config();
        assert_eq!(runner_config.cases, 64);
        assert_eq!(runner_config.max_shrink_iters, 10);
        assert_eq!(runner_config.rng_algorithm, RngAlgorithm::ChaCha);
    }

    #[test]
    fn test_tally_from_iter() {
        let values = vec![
            PathValue::Text(String::new()),
            PathValue::Bytes(vec![1, 2, 3]),
            PathValue::wrapped_text("abc".into()),
        ];

        let tally: VariantTally = values.iter().collect();
        assert_eq!(tally.total, 3);
        assert_eq!(tally.empty, 1);
        assert_eq!(tally.max_len, 3);
        assert_eq!(tally.missing(&Variant::ALL), vec![Variant::WrappedBytes]);
    }
}
