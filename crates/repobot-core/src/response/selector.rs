//! Trending batch selection.
//!
//! Trending lists are dominated by the same few repositories on repeated
//! queries. The selector applies a uniform random permutation to the whole
//! candidate list and keeps a prefix of at most `cap` items, so repeated
//! `/trend` commands show different samples.

use std::num::NonZeroUsize;

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;

use repobot_types::config::TrendingConfig;
use repobot_types::error::{ConfigError, SelectError};
use repobot_types::repo::RepoRecord;

/// An ordered, bounded set of records selected for rendering.
///
/// Only [`Selector::select`] constructs batches, so `len() <= cap()` always
/// holds.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResultBatch {
    records: Vec<RepoRecord>,
    cap: usize,
}

impl ResultBatch {
    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn cap(&self) -> usize {
        self.cap
    }

    pub fn records(&self) -> &[RepoRecord] {
        &self.records
    }

    pub fn iter(&self) -> std::slice::Iter<'_, RepoRecord> {
        self.records.iter()
    }

    pub fn into_records(self) -> Vec<RepoRecord> {
        self.records
    }
}

/// Shuffle-then-truncate selection policy.
#[derive(Debug, Clone)]
pub struct Selector {
    cap: NonZeroUsize,
    shuffle: bool,
    seed: Option<u64>,
}

impl Selector {
    /// A shuffling selector drawing randomness from the OS on every call.
    pub fn new(cap: NonZeroUsize) -> Self {
        Self {
            cap,
            shuffle: true,
            seed: None,
        }
    }

    /// Build from the `[trending]` config section.
    pub fn from_config(config: &TrendingConfig) -> Result<Self, ConfigError> {
        let cap = NonZeroUsize::new(config.cap)
            .ok_or_else(|| ConfigError::Invalid("trending.cap must be at least 1".to_string()))?;
        Ok(Self {
            cap,
            shuffle: config.shuffle,
            seed: config.seed,
        })
    }

    /// Use a fixed seed; every call then produces the same permutation.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Keep the service's ordering and only truncate.
    pub fn without_shuffle(mut self) -> Self {
        self.shuffle = false;
        self
    }

    pub fn cap(&self) -> usize {
        self.cap.get()
    }

    /// Select a batch from `candidates`.
    ///
    /// Fails with [`SelectError::NoResults`] on an empty candidate list.
    pub fn select(&self, mut candidates: Vec<RepoRecord>) -> Result<ResultBatch, SelectError> {
        if candidates.is_empty() {
            return Err(SelectError::NoResults);
        }

        if self.shuffle {
            match self.seed {
                Some(seed) => candidates.shuffle(&mut StdRng::seed_from_u64(seed)),
                None => candidates.shuffle(&mut rand::thread_rng()),
            }
        }

        let total = candidates.len();
        candidates.truncate(self.cap.get());
        tracing::debug!(total, selected = candidates.len(), cap = self.cap.get(), "selected trending batch");

        Ok(ResultBatch {
            records: candidates,
            cap: self.cap.get(),
        })
    }
}
