//! Random processes that feed the simulator.
//!
//! The simulator pulls one `(interarrival, service)` pair per arrival through the
//! [`TaskSource`] trait. [`StochasticSource`] draws both from exponential
//! distributions; [`ScriptedSource`] replays fixed sequences so a run can be
//! checked by hand.

use std::collections::VecDeque;

use rand::distributions::Open01;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::errors::ConfigError;
use super::types::SimTime;

/// Supplies inter-arrival and service times to the simulator.
///
/// The simulator always calls `next_interarrival` before `next_service` for the
/// same arrival.
pub trait TaskSource {
    fn next_interarrival(&mut self) -> SimTime;
    fn next_service(&mut self) -> SimTime;
}

/// Exponential sampler using inverse-transform sampling.
pub struct ExponentialGenerator {
    rng: StdRng,
}

impl ExponentialGenerator {
    /// Create a generator, seeded for reproducibility when `seed` is given
    pub fn new(seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Self { rng }
    }

    /// Draw one sample with the given mean: `-mean * ln(U)`, U in (0, 1).
    ///
    /// `Open01` never yields 0 or 1, so the result is always finite and positive.
    pub fn sample(&mut self, mean: f64) -> SimTime {
        let u: f64 = self.rng.sample(Open01);
        -mean * u.ln()
    }
}

/// Exponential inter-arrival and service times with fixed means.
pub struct StochasticSource {
    generator: ExponentialGenerator,
    mean_interarrival: f64,
    mean_service_time: f64,
}

impl StochasticSource {
    pub fn new(
        generator: ExponentialGenerator,
        mean_interarrival: f64,
        mean_service_time: f64,
    ) -> Result<Self, ConfigError> {
        check_mean("mean_interarrival", mean_interarrival)?;
        check_mean("mean_service_time", mean_service_time)?;
        Ok(Self {
            generator,
            mean_interarrival,
            mean_service_time,
        })
    }
}

impl TaskSource for StochasticSource {
    fn next_interarrival(&mut self) -> SimTime {
        self.generator.sample(self.mean_interarrival)
    }

    fn next_service(&mut self) -> SimTime {
        self.generator.sample(self.mean_service_time)
    }
}

/// Replays fixed inter-arrival and service sequences.
///
/// Once the inter-arrival script runs out, every further arrival is infinitely
/// far away, which ends any run with a finite horizon. A service script that
/// runs out yields zero-length services.
#[derive(Debug, Clone, Default)]
pub struct ScriptedSource {
    interarrivals: VecDeque<SimTime>,
    services: VecDeque<SimTime>,
}

impl ScriptedSource {
    pub fn new(
        interarrivals: impl IntoIterator<Item = SimTime>,
        services: impl IntoIterator<Item = SimTime>,
    ) -> Self {
        Self {
            interarrivals: interarrivals.into_iter().collect(),
            services: services.into_iter().collect(),
        }
    }

    /// Number of scripted arrivals not yet drawn
    pub fn remaining(&self) -> usize {
        self.interarrivals.len()
    }
}

impl TaskSource for ScriptedSource {
    fn next_interarrival(&mut self) -> SimTime {
        self.interarrivals.pop_front().unwrap_or(SimTime::INFINITY)
    }

    fn next_service(&mut self) -> SimTime {
        self.services.pop_front().unwrap_or(0.0)
    }
}

pub(crate) fn check_mean(name: &'static str, value: f64) -> Result<(), ConfigError> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(ConfigError::InvalidMean { name, value })
    }
}
