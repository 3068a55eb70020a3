//! Cross-search sizing hints.
//!
//! A [`CapacityOracle`] keeps a rolling average of how many nodes recent
//! successful searches touched. New searches use it to pre-size their
//! collections and to pick how many expansions one poll performs, so
//! repeated queries of a similar size stop paying for regrowth without any
//! hand tuning.

use std::collections::VecDeque;
use std::sync::{Mutex, MutexGuard};

/// Average expansions per poll are `average / ITERATION_FANOUT`: each
/// expansion touches roughly this many nodes.
pub const ITERATION_FANOUT: f32 = 15.0;

/// Samples reported on success are the touched-node count times this.
pub const EXPERIENCE_MARGIN: f32 = 1.2;

/// Oracle tuning.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct OracleConfig {
    /// Initial sample, used until real experience arrives.
    pub seed: u32,
    /// Number of most recent samples averaged. Clamped to at least 1.
    pub window: usize,
}

impl Default for OracleConfig {
    fn default() -> Self {
        Self {
            seed: 256,
            window: 32,
        }
    }
}

struct Samples {
    recent: VecDeque<u32>,
    sum: u64,
    window: usize,
}

impl Samples {
    fn push(&mut self, sample: u32) {
        if self.recent.len() == self.window {
            if let Some(old) = self.recent.pop_front() {
                self.sum -= u64::from(old);
            }
        }
        self.recent.push_back(sample);
        self.sum += u64::from(sample);
    }

    fn average(&self) -> f32 {
        // Never empty: seeded on construction and only ever rotated.
        (self.sum as f64 / self.recent.len().max(1) as f64) as f32
    }
}

/// Rolling average of recent search sizes.
///
/// Methods take `&self`; the samples sit behind a mutex so one oracle can be
/// shared by searches driven from different threads.
pub struct CapacityOracle {
    samples: Mutex<Samples>,
}

impl Default for CapacityOracle {
    fn default() -> Self {
        Self::new(OracleConfig::default())
    }
}

impl CapacityOracle {
    /// Create an oracle seeded with `config.seed`.
    pub fn new(config: OracleConfig) -> Self {
        let window = config.window.max(1);
        let mut samples = Samples {
            recent: VecDeque::with_capacity(window),
            sum: 0,
            window,
        };
        samples.push(config.seed);
        Self {
            samples: Mutex::new(samples),
        }
    }

    fn lock(&self) -> MutexGuard<'_, Samples> {
        // A panic while holding the lock cannot leave the samples
        // inconsistent, so a poisoned lock is still usable.
        self.samples.lock().unwrap_or_else(|e| e.into_inner())
    }

    /// Current average search size.
    pub fn average(&self) -> f32 {
        self.lock().average()
    }

    /// Record the size of a finished search.
    pub fn add_experience(&self, sample: u32) {
        let mut samples = self.lock();
        samples.push(sample);
        log::debug!(
            "capacity oracle: sample {sample}, average now {:.1}",
            samples.average()
        );
    }

    /// Number of samples currently averaged (including the seed until it
    /// ages out).
    pub fn samples(&self) -> usize {
        self.lock().recent.len()
    }

    /// Initial capacity for per-search collections.
    pub fn capacity_hint(&self) -> usize {
        self.average().ceil() as usize
    }

    /// Expansions a single poll performs. Always at least 1.
    pub fn iteration_budget(&self) -> usize {
        ((self.average() / ITERATION_FANOUT) as usize).max(1)
    }
}

/// Experience sample for a search that touched `touched` nodes.
pub(crate) fn experience_sample(touched: usize) -> u32 {
    (touched as f32 * EXPERIENCE_MARGIN) as u32
}
