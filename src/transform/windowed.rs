//! Stateful transform stage owning one windowed engine
//!
//! The engine is bound lazily on the first sample and the binding is
//! immutable afterwards; reconfiguring a stage means building a new one. All
//! engine mutation happens inside one mutex scope so a concurrent runtime
//! cannot interleave a partial rebalance with a deque mutation.

use log::debug;
use parking_lot::Mutex;

use super::{Transform, TransformError};
use crate::average::RunningAverage;
use crate::extremes::{RunningMax, RunningMin};
use crate::median::RunningMedian;
use crate::traits::{ConfigError, WindowAggregate};

/// Windowed aggregate computed by a [`WindowedTransform`]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum WindowedOp {
    Median,
    Min,
    Max,
    Average,
}

impl WindowedOp {
    fn name(self) -> &'static str {
        match self {
            WindowedOp::Median => "median",
            WindowedOp::Min => "min",
            WindowedOp::Max => "max",
            WindowedOp::Average => "average",
        }
    }
}

/// Configuration for a [`WindowedTransform`]
///
/// Supplied once by the pipeline's configuration layer; the window size
/// cannot change after construction.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct WindowedConfig {
    /// Which aggregate the stage computes
    pub op: WindowedOp,
    /// Number of most-recent samples the aggregate covers
    pub window_size: usize,
}

/// One bound engine, selected by the configured operation
#[derive(Debug)]
enum Engine {
    Median(RunningMedian),
    Min(RunningMin),
    Max(RunningMax),
    Average(RunningAverage),
}

impl Engine {
    fn build(config: WindowedConfig) -> Result<Self, ConfigError> {
        Ok(match config.op {
            WindowedOp::Median => Engine::Median(RunningMedian::new(config.window_size)?),
            WindowedOp::Min => Engine::Min(RunningMin::new(config.window_size)?),
            WindowedOp::Max => Engine::Max(RunningMax::new(config.window_size)?),
            WindowedOp::Average => Engine::Average(RunningAverage::new(config.window_size)?),
        })
    }

    fn update(&mut self, sample: f64) -> Result<f64, TransformError> {
        let result = match self {
            Engine::Median(engine) => engine.update(sample),
            Engine::Min(engine) => engine.update(sample),
            Engine::Max(engine) => engine.update(sample),
            Engine::Average(engine) => engine.update(sample),
        };
        Ok(result?)
    }

    fn reset(&mut self) {
        match self {
            Engine::Median(engine) => engine.reset(),
            Engine::Min(engine) => engine.reset(),
            Engine::Max(engine) => engine.reset(),
            Engine::Average(engine) => engine.reset(),
        }
    }
}

/// Two-phase binding state: configured but unbound, or bound exactly once
#[derive(Debug)]
enum Binding {
    Unbound,
    Bound(Engine),
}

/// Stateful per-sample stage owning exactly one windowed engine
///
/// The configuration is validated eagerly, so a bad window size fails at
/// construction, before any sample can be accepted. The engine itself is
/// built on the first [`apply`](Transform::apply) and reused for every
/// subsequent sample.
///
/// # Example
///
/// ```
/// use windowstats::transform::{Transform, WindowedConfig, WindowedOp, WindowedTransform};
///
/// let stage = WindowedTransform::new(WindowedConfig {
///     op: WindowedOp::Min,
///     window_size: 3,
/// })
/// .unwrap();
///
/// let outputs: Vec<f64> = [5.0, 1.0, 3.0, 2.0, 8.0]
///     .into_iter()
///     .map(|v| stage.apply(v).unwrap())
///     .collect();
///
/// assert_eq!(outputs, vec![5.0, 1.0, 1.0, 1.0, 2.0]);
/// ```
#[derive(Debug)]
pub struct WindowedTransform {
    config: WindowedConfig,
    state: Mutex<Binding>,
}

impl WindowedTransform {
    /// Create a stage from its configuration
    ///
    /// Fails with [`ConfigError::ZeroWindow`] for a zero window size; the
    /// engine itself is not built until the first sample arrives.
    pub fn new(config: WindowedConfig) -> Result<Self, ConfigError> {
        if config.window_size == 0 {
            return Err(ConfigError::ZeroWindow);
        }

        Ok(Self {
            config,
            state: Mutex::new(Binding::Unbound),
        })
    }

    /// The stage's configuration
    pub fn config(&self) -> WindowedConfig {
        self.config
    }
}

impl Transform for WindowedTransform {
    fn apply(&self, sample: f64) -> Result<f64, TransformError> {
        let mut state = self.state.lock();

        if let Binding::Unbound = *state {
            // Window size was validated at construction, so binding cannot
            // fail here
            let engine = Engine::build(self.config)?;
            debug!(
                "bound {} engine with window size {}",
                self.config.op.name(),
                self.config.window_size
            );
            *state = Binding::Bound(engine);
        }

        match *state {
            Binding::Bound(ref mut engine) => engine.update(sample),
            Binding::Unbound => unreachable!("engine bound above"),
        }
    }

    fn reset(&self) {
        let mut state = self.state.lock();
        if let Binding::Bound(ref mut engine) = *state {
            debug!("reset {} engine", self.config.op.name());
            engine.reset();
        }
    }
}
