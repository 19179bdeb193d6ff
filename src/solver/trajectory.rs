//! Simulation output: sampled trajectories and their steady-state summary.

use crate::converter::DesignParameters;
use crate::error::{BoostError, Result};

use super::euler::ConverterState;

/// Time-indexed inductor current and output voltage of one run.
///
/// All three sequences have the same length; sample `k` is taken at
/// `t = k·dt`. Immutable once the run completes.
#[derive(Debug, Clone, PartialEq)]
pub struct Trajectory {
    dt: f64,
    time: Vec<f64>,
    inductor_current: Vec<f64>,
    output_voltage: Vec<f64>,
}

impl Trajectory {
    pub(crate) fn with_capacity(dt: f64, samples: usize) -> Self {
        Self {
            dt,
            time: Vec::with_capacity(samples),
            inductor_current: Vec::with_capacity(samples),
            output_voltage: Vec::with_capacity(samples),
        }
    }

    pub(crate) fn push(&mut self, t: f64, state: ConverterState) {
        self.time.push(t);
        self.inductor_current.push(state.inductor_current);
        self.output_voltage.push(state.output_voltage);
    }

    /// Step size used for the run.
    pub fn dt(&self) -> f64 {
        self.dt
    }

    /// Number of samples.
    pub fn len(&self) -> usize {
        self.time.len()
    }

    /// Check if the trajectory holds no samples.
    pub fn is_empty(&self) -> bool {
        self.time.is_empty()
    }

    /// Sample times (s).
    pub fn time(&self) -> &[f64] {
        &self.time
    }

    /// Inductor current per sample (A).
    pub fn inductor_current(&self) -> &[f64] {
        &self.inductor_current
    }

    /// Output voltage per sample (V).
    pub fn output_voltage(&self) -> &[f64] {
        &self.output_voltage
    }

    /// State at sample `k`.
    pub fn state(&self, k: usize) -> Option<ConverterState> {
        Some(ConverterState::new(
            *self.inductor_current.get(k)?,
            *self.output_voltage.get(k)?,
        ))
    }

    /// State at the last sample.
    pub fn final_state(&self) -> Option<ConverterState> {
        self.len().checked_sub(1).and_then(|k| self.state(k))
    }

    /// Iterate over `(t, iL, vO)` samples.
    pub fn samples(&self) -> impl Iterator<Item = (f64, f64, f64)> + '_ {
        self.time
            .iter()
            .zip(&self.inductor_current)
            .zip(&self.output_voltage)
            .map(|((&t, &i), &v)| (t, i, v))
    }

    /// Check every sample for non-finite values.
    ///
    /// Returns [`BoostError::NumericInstability`] naming the first offending
    /// sample. Typically the result of a step size too coarse for the
    /// circuit time constants.
    pub fn check_finite(&self) -> Result<()> {
        for (k, (t, i, v)) in self.samples().enumerate() {
            let bad = if !i.is_finite() {
                Some(("inductor_current", i))
            } else if !v.is_finite() {
                Some(("output_voltage", v))
            } else {
                None
            };
            if let Some((quantity, value)) = bad {
                return Err(BoostError::NumericInstability {
                    step: k,
                    time: t,
                    quantity: quantity.to_string(),
                    value,
                });
            }
        }
        Ok(())
    }

    /// Summarize the run against the design it was produced from.
    ///
    /// Returns `None` for an empty trajectory.
    pub fn summary(&self, params: &DesignParameters) -> Option<TrajectorySummary> {
        let final_state = self.final_state()?;
        let final_time = *self.time.last()?;

        let (peak_index, peak_output_voltage) = self
            .output_voltage
            .iter()
            .copied()
            .enumerate()
            .fold((0, f64::NEG_INFINITY), |best, (k, v)| if v > best.1 { (k, v) } else { best });

        let per_period = (params.period / self.dt).round().max(1.0) as usize;
        let last_period = if self.len() >= per_period {
            let start = self.len() - per_period;
            Some(PeriodStatistics::from_samples(
                &self.inductor_current[start..],
                &self.output_voltage[start..],
            ))
        } else {
            None
        };

        Some(TrajectorySummary {
            target_voltage: params.vout,
            final_time,
            final_state,
            peak_output_voltage,
            peak_time: self.time[peak_index],
            last_period,
        })
    }
}

/// Statistics over one switching period of samples.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PeriodStatistics {
    pub mean_inductor_current: f64,
    pub mean_output_voltage: f64,
    pub min_output_voltage: f64,
    pub max_output_voltage: f64,
}

impl PeriodStatistics {
    fn from_samples(inductor_current: &[f64], output_voltage: &[f64]) -> Self {
        let n = output_voltage.len() as f64;
        Self {
            mean_inductor_current: inductor_current.iter().sum::<f64>() / n,
            mean_output_voltage: output_voltage.iter().sum::<f64>() / n,
            min_output_voltage: output_voltage.iter().copied().fold(f64::INFINITY, f64::min),
            max_output_voltage: output_voltage.iter().copied().fold(f64::NEG_INFINITY, f64::max),
        }
    }

    /// Peak-to-peak output voltage ripple (V).
    pub fn output_ripple(&self) -> f64 {
        self.max_output_voltage - self.min_output_voltage
    }
}

/// Condensed view of a trajectory for reports.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TrajectorySummary {
    /// Design output voltage (V)
    pub target_voltage: f64,
    /// Time of the last sample (s)
    pub final_time: f64,
    /// State at the last sample
    pub final_state: ConverterState,
    /// Highest output voltage seen (V)
    pub peak_output_voltage: f64,
    /// Time of the output voltage peak (s)
    pub peak_time: f64,
    /// Statistics over the last switching period, if the run covers one
    pub last_period: Option<PeriodStatistics>,
}

impl TrajectorySummary {
    /// Relative deviation of the last-period mean output from the target.
    pub fn output_error(&self) -> Option<f64> {
        self.last_period
            .map(|p| (p.mean_output_voltage - self.target_voltage) / self.target_voltage)
    }

    /// Overshoot of the peak above the target, as a fraction of the target.
    pub fn overshoot(&self) -> f64 {
        ((self.peak_output_voltage - self.target_voltage) / self.target_voltage).max(0.0)
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;

    fn params() -> DesignParameters {
        DesignParameters {
            vin: 10.0,
            vout: 20.0,
            duty: 0.5,
            period: 4.0,
            load_resistance: 10.0,
            input_current: 4.0,
            output_current: 2.0,
            inductance: 1.0,
            capacitance: 1.0,
        }
    }

    fn trajectory(values: &[(f64, f64)]) -> Trajectory {
        let mut t = Trajectory::with_capacity(1.0, values.len());
        for (k, &(i, v)) in values.iter().enumerate() {
            t.push(k as f64, ConverterState::new(i, v));
        }
        t
    }

    #[test]
    fn test_accessors() {
        let t = trajectory(&[(0.0, 0.0), (1.0, 2.0), (3.0, 5.0)]);
        assert_eq!(t.len(), 3);
        assert!(!t.is_empty());
        assert_eq!(t.time(), &[0.0, 1.0, 2.0]);
        assert_eq!(t.output_voltage(), &[0.0, 2.0, 5.0]);
        assert_eq!(t.final_state(), Some(ConverterState::new(3.0, 5.0)));
        assert_eq!(t.state(3), None);
    }

    #[test]
    fn test_check_finite_reports_first_bad_sample() {
        let t = trajectory(&[(0.0, 0.0), (1.0, f64::INFINITY), (f64::NAN, 1.0)]);
        match t.check_finite() {
            Err(BoostError::NumericInstability { step, quantity, .. }) => {
                assert_eq!(step, 1);
                assert_eq!(quantity, "output_voltage");
            }
            other => panic!("expected instability, got {:?}", other),
        }
    }

    #[test]
    fn test_summary_last_period() {
        let t = trajectory(&[
            (0.0, 0.0),
            (1.0, 30.0),
            (2.0, 18.0),
            (2.0, 19.0),
            (2.0, 21.0),
            (4.0, 22.0),
        ]);
        let s = t.summary(&params()).unwrap();
        assert_eq!(s.peak_output_voltage, 30.0);
        assert_eq!(s.peak_time, 1.0);
        assert_eq!(s.final_time, 5.0);

        let last = s.last_period.unwrap();
        assert_relative_eq!(last.mean_output_voltage, 20.0);
        assert_relative_eq!(last.mean_inductor_current, 2.5);
        assert_relative_eq!(last.output_ripple(), 4.0);
        assert_relative_eq!(s.output_error().unwrap(), 0.0);
        assert_relative_eq!(s.overshoot(), 0.5);
    }

    #[test]
    fn test_summary_short_run() {
        let t = trajectory(&[(0.0, 0.0), (1.0, 1.0)]);
        let s = t.summary(&params()).unwrap();
        assert!(s.last_period.is_none());
        assert!(s.output_error().is_none());
        assert_eq!(s.overshoot(), 0.0);
    }

    #[test]
    fn test_summary_empty() {
        let t = Trajectory::with_capacity(1.0, 0);
        assert!(t.summary(&params()).is_none());
    }
}
