//! Plain-text reports and CSV export.
//!
//! All writers take any [`Write`] sink so the CLI can target stdout or a
//! file and tests can capture into a buffer.

use std::io::Write;

use crate::converter::DesignParameters;
use crate::error::Result;
use crate::solver::{Trajectory, TrajectorySummary};

/// CSV header row for trajectory export.
pub const CSV_HEADER: &str = "time,inductor_current,output_voltage";

/// Write the computed design parameters.
///
/// Format:
/// ```text
/// Calculated parameters:
/// Duty ratio D = 0.760
/// Inductor L = 87.55 µH
/// Capacitor C = 10.13 µF
/// Resistance R = 50.00 Ω
/// Input current Iin = 16.67 A
/// Output current Iout = 4.00 A
/// ```
pub fn write_design_report<W: Write>(params: &DesignParameters, writer: &mut W) -> Result<()> {
    writeln!(writer, "Calculated parameters:")?;
    writeln!(writer, "Duty ratio D = {:.3}", params.duty)?;
    writeln!(writer, "Inductor L = {:.2} µH", params.inductance * 1e6)?;
    writeln!(writer, "Capacitor C = {:.2} µF", params.capacitance * 1e6)?;
    writeln!(writer, "Resistance R = {:.2} Ω", params.load_resistance)?;
    writeln!(writer, "Input current Iin = {:.2} A", params.input_current)?;
    writeln!(writer, "Output current Iout = {:.2} A", params.output_current)?;
    Ok(())
}

/// Write the transient summary.
pub fn write_summary<W: Write>(summary: &TrajectorySummary, writer: &mut W) -> Result<()> {
    writeln!(writer, "Transient response:")?;
    writeln!(writer, "Final time = {:.3} ms", summary.final_time * 1e3)?;
    writeln!(writer, "Final state: {}", summary.final_state)?;
    writeln!(
        writer,
        "Peak output vO = {:.2} V at {:.3} ms (overshoot {:.1}%)",
        summary.peak_output_voltage,
        summary.peak_time * 1e3,
        summary.overshoot() * 100.0
    )?;

    match (summary.last_period, summary.output_error()) {
        (Some(period), Some(error)) => {
            writeln!(
                writer,
                "Last period: mean vO = {:.2} V ({:+.2}% vs {:.1} V target), ripple = {:.3} V, mean iL = {:.2} A",
                period.mean_output_voltage,
                error * 100.0,
                summary.target_voltage,
                period.output_ripple(),
                period.mean_inductor_current
            )?;
        }
        _ => writeln!(writer, "Last period: run shorter than one switching period")?,
    }

    Ok(())
}

/// Write a trajectory as CSV.
///
/// Keeps every `decimation`-th sample (values below 1 keep every sample);
/// the last sample is always written.
///
/// Format:
/// ```csv
/// time,inductor_current,output_voltage
/// 0,0,0
/// 0.00000005,0.0274,0
/// ```
pub fn write_trajectory_csv<W: Write>(
    trajectory: &Trajectory,
    decimation: usize,
    writer: &mut W,
) -> Result<()> {
    let decimation = decimation.max(1);
    let last = trajectory.len().saturating_sub(1);

    writeln!(writer, "{}", CSV_HEADER)?;
    for (k, (t, i, v)) in trajectory.samples().enumerate() {
        if k % decimation == 0 || k == last {
            writeln!(writer, "{},{},{}", t, i, v)?;
        }
    }
    writer.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use std::io;

    use super::*;
    use crate::converter::{design, Specification};
    use crate::error::BoostError;
    use crate::solver::{simulate, SimulationConfig};

    struct FailingWriter;

    impl Write for FailingWriter {
        fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
            Err(io::Error::new(io::ErrorKind::BrokenPipe, "closed"))
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    fn reference() -> DesignParameters {
        design(&Specification::default()).unwrap()
    }

    #[test]
    fn test_design_report() {
        let mut out = Vec::new();
        write_design_report(&reference(), &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("Duty ratio D = 0.760"));
        assert!(text.contains("Inductor L = 87.55 µH"));
        assert!(text.contains("Capacitor C = 10.13 µF"));
        assert!(text.contains("Resistance R = 50.00 Ω"));
        assert!(text.contains("Input current Iin = 16.67 A"));
        assert!(text.contains("Output current Iout = 4.00 A"));
    }

    #[test]
    fn test_csv_decimation_keeps_last_sample() {
        let params = reference();
        let config = SimulationConfig::new().with_t_end(1e-5).with_divisions(10);
        let trajectory = simulate(&params, &config).unwrap();
        assert_eq!(trajectory.len(), 10);

        let mut out = Vec::new();
        write_trajectory_csv(&trajectory, 4, &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines[0], CSV_HEADER);
        // Samples 0, 4, 8 and the final sample 9
        assert_eq!(lines.len(), 1 + 4);
        assert_eq!(lines[1], "0,0,0");
        assert!(lines[4].starts_with(&format!("{},", trajectory.time()[9])));
    }

    #[test]
    fn test_csv_zero_decimation_writes_everything() {
        let params = reference();
        let config = SimulationConfig::new().with_t_end(1e-5).with_divisions(10);
        let trajectory = simulate(&params, &config).unwrap();

        let mut out = Vec::new();
        write_trajectory_csv(&trajectory, 0, &mut out).unwrap();
        assert_eq!(String::from_utf8(out).unwrap().lines().count(), 11);
    }

    #[test]
    fn test_summary_report() {
        let params = reference();
        let config = SimulationConfig::new().with_t_end(1e-4);
        let summary = simulate(&params, &config).unwrap().summary(&params).unwrap();

        let mut out = Vec::new();
        write_summary(&summary, &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(text.starts_with("Transient response:"));
        assert!(text.contains("Final time = 0.100 ms"));
        assert!(text.contains("200.0 V target"));
    }

    #[test]
    fn test_write_failure_is_output_error() {
        let result = write_design_report(&reference(), &mut FailingWriter);
        assert!(matches!(result, Err(BoostError::OutputError { .. })));
    }
}
