//! Main simulator interface.

use tracing::{debug, info_span, warn};

use crate::converter::{validate_design, DesignParameters};
use crate::error::{BoostError, Result};

use super::euler::{step, ConverterState};
use super::trajectory::Trajectory;
use super::{
    DEFAULT_DIVISIONS, DEFAULT_T_END, MAX_SAMPLES, MIN_RECOMMENDED_DIVISIONS,
    SAMPLE_COUNT_TOLERANCE, STABILITY_MARGIN,
};

/// How the integration step is chosen.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum StepSize {
    /// Explicit step in seconds.
    Fixed(f64),
    /// Number of steps per switching period, `dt = Ts/N`.
    PerPeriod(usize),
}

/// Configuration for a transient run.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SimulationConfig {
    /// Simulated duration (s).
    pub t_end: f64,
    /// Integration step.
    pub step: StepSize,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            t_end: DEFAULT_T_END,
            step: StepSize::PerPeriod(DEFAULT_DIVISIONS),
        }
    }
}

impl SimulationConfig {
    /// Create a new configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the simulated duration (in seconds).
    pub fn with_t_end(mut self, t_end: f64) -> Self {
        self.t_end = t_end;
        self
    }

    /// Use an explicit step size (in seconds).
    pub fn with_dt(mut self, dt: f64) -> Self {
        self.step = StepSize::Fixed(dt);
        self
    }

    /// Use `divisions` steps per switching period.
    ///
    /// Keeps the switching instants on the sample grid when `D·N` is an
    /// integer. At least 10 divisions are recommended.
    pub fn with_divisions(mut self, divisions: usize) -> Self {
        self.step = StepSize::PerPeriod(divisions);
        self
    }

    /// Resolve the step size against a switching period and validate it.
    ///
    /// Fails if the duration or step is non-positive or non-finite, or if the
    /// step exceeds the period (the mode boundary would not be resolved).
    pub fn resolve_dt(&self, period: f64) -> Result<f64> {
        if !self.t_end.is_finite() || self.t_end <= 0.0 {
            return Err(BoostError::invalid_config(format!(
                "t_end must be positive and finite, got {}",
                self.t_end
            )));
        }

        let dt = match self.step {
            StepSize::Fixed(dt) => dt,
            StepSize::PerPeriod(0) => {
                return Err(BoostError::invalid_config(
                    "divisions per period must be at least 1",
                ));
            }
            StepSize::PerPeriod(n) => period / n as f64,
        };

        if !dt.is_finite() || dt <= 0.0 {
            return Err(BoostError::invalid_config(format!(
                "dt must be positive and finite, got {}",
                dt
            )));
        }

        if dt > period * (1.0 + SAMPLE_COUNT_TOLERANCE) {
            return Err(BoostError::invalid_config(format!(
                "dt ({:e} s) exceeds the switching period ({:e} s)",
                dt, period
            )));
        }

        Ok(dt)
    }
}

/// Number of samples in `[0, t_end)` on a grid of spacing `dt`, `ceil(t_end/dt)`.
///
/// Ratios within a relative [`SAMPLE_COUNT_TOLERANCE`] of an integer are
/// rounded down to it so that `t_end` itself is never sampled because of
/// rounding.
pub fn sample_count(t_end: f64, dt: f64) -> usize {
    let ratio = t_end / dt;
    (ratio * (1.0 - SAMPLE_COUNT_TOLERANCE)).ceil().max(1.0) as usize
}

/// Fixed-step transient simulator for one converter design.
///
/// Owns the validated parameters and the resolved step. Each call to
/// [`run`](Simulator::run) starts fresh from rest; nothing carries over
/// between runs.
#[derive(Debug, Clone)]
pub struct Simulator {
    params: DesignParameters,
    t_end: f64,
    dt: f64,
    samples: usize,
}

impl Simulator {
    /// Create a simulator for the given design with default configuration.
    pub fn new(params: DesignParameters) -> Result<Self> {
        Self::with_config(params, &SimulationConfig::default())
    }

    /// Create a simulator for the given design with custom configuration.
    ///
    /// Fails fast on design parameters that would produce non-finite
    /// derivatives and on invalid time settings.
    pub fn with_config(params: DesignParameters, config: &SimulationConfig) -> Result<Self> {
        validate_design(&params)?;
        let dt = config.resolve_dt(params.period)?;

        let samples = sample_count(config.t_end, dt);
        if samples > MAX_SAMPLES {
            return Err(BoostError::invalid_config(format!(
                "{} samples requested, limit is {}",
                samples, MAX_SAMPLES
            )));
        }

        if dt > params.period / MIN_RECOMMENDED_DIVISIONS as f64 {
            warn!(
                dt,
                period = params.period,
                "fewer than {} steps per switching period; switching instants will be coarse",
                MIN_RECOMMENDED_DIVISIONS
            );
        }

        let time_constant = params
            .inductor_time_constant()
            .min(params.output_time_constant());
        if dt > STABILITY_MARGIN * time_constant {
            warn!(
                dt,
                time_constant,
                "step is large relative to circuit time constants; explicit Euler may diverge"
            );
        }

        Ok(Self {
            params,
            t_end: config.t_end,
            dt,
            samples,
        })
    }

    /// Get the design parameters.
    pub fn params(&self) -> &DesignParameters {
        &self.params
    }

    /// Get the resolved step size.
    pub fn dt(&self) -> f64 {
        self.dt
    }

    /// Get the number of samples a run produces.
    pub fn sample_count(&self) -> usize {
        self.samples
    }

    /// Run the simulation from rest.
    ///
    /// Always executes the full number of steps. Divergence is not detected
    /// here; see [`Trajectory::check_finite`].
    pub fn run(&self) -> Trajectory {
        let _span = info_span!(
            "transient",
            t_end = self.t_end,
            dt = self.dt,
            samples = self.samples
        )
        .entered();

        let mut trajectory = Trajectory::with_capacity(self.dt, self.samples);
        let mut state = ConverterState::INITIAL;

        for k in 0..self.samples {
            // Time from the integer index; accumulating dt would drift the
            // switching instants over long runs.
            let t = k as f64 * self.dt;
            trajectory.push(t, state);
            if k + 1 < self.samples {
                state = step(state, t, &self.params, self.dt);
            }
        }

        if state.is_finite() {
            debug!(final_state = %state, "transient complete");
        } else {
            warn!(final_state = %state, "transient diverged");
        }

        trajectory
    }
}

/// Simulate a design in one call.
pub fn simulate(params: &DesignParameters, config: &SimulationConfig) -> Result<Trajectory> {
    Ok(Simulator::with_config(*params, config)?.run())
}
