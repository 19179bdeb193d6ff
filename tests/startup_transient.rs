//! End-to-end checks of the design calculator and startup simulation.

use approx::assert_relative_eq;
use boostsim::solver::ConverterState;
use boostsim::{design, dsl, simulate, DesignParameters, SimulationConfig, Specification, Trajectory};

fn reference() -> DesignParameters {
    design(&Specification::new(48.0, 200.0, 800.0, 100e3, 0.25, 0.015)).unwrap()
}

fn run(params: &DesignParameters, t_end: f64, divisions: usize) -> Trajectory {
    let config = SimulationConfig::new()
        .with_t_end(t_end)
        .with_divisions(divisions);
    simulate(params, &config).unwrap()
}

/// Largest output voltage difference from `reference` on the grid of
/// `trajectory`. Both runs use divisions that divide evenly.
fn max_output_error(trajectory: &Trajectory, reference: &Trajectory) -> f64 {
    let stride = (trajectory.dt() / reference.dt()).round() as usize;
    trajectory
        .output_voltage()
        .iter()
        .enumerate()
        .map(|(k, v)| (v - reference.output_voltage()[k * stride]).abs())
        .fold(0.0, f64::max)
}

#[test]
fn reference_startup_settles_near_target() {
    let params = reference();
    let trajectory = run(&params, 15e-3, 200);

    assert_eq!(trajectory.len(), 300_000);
    assert_eq!(trajectory.state(0), Some(ConverterState::INITIAL));
    trajectory.check_finite().unwrap();

    let summary = trajectory.summary(&params).unwrap();
    let last = summary.last_period.unwrap();

    // Lossless open-loop converter settles at Vin/(1-D) = Vout on average
    assert!(
        summary.output_error().unwrap().abs() < 0.02,
        "mean output {} V",
        last.mean_output_voltage
    );
    assert_relative_eq!(last.mean_inductor_current, params.input_current, max_relative = 0.05);

    // Underdamped startup overshoots but stays bounded
    assert!(summary.peak_output_voltage > params.vout);
    assert!(summary.peak_output_voltage < 2.0 * params.vout);

    // Steady-state ripple close to the 1.5 % design target
    let ripple = last.output_ripple() / params.vout;
    assert!(ripple > 0.005 && ripple < 0.03, "ripple {}", ripple);
}

#[test]
fn output_converges_as_step_shrinks() {
    let params = reference();
    let t_end = 3e-3;

    let fine_reference = run(&params, t_end, 640);
    let coarse = run(&params, t_end, 20);
    let finer = run(&params, t_end, 40);

    let coarse_error = max_output_error(&coarse, &fine_reference);
    let finer_error = max_output_error(&finer, &fine_reference);

    assert!(
        finer_error < coarse_error,
        "dt/2 error {} not below dt error {}",
        finer_error,
        coarse_error
    );
}

#[test]
fn initial_state_is_rest_for_any_design() {
    let specs = [
        Specification::new(5.0, 12.0, 10.0, 500e3, 0.3, 0.01),
        Specification::new(12.0, 48.0, 100.0, 250e3, 0.2, 0.02),
    ];
    for spec in specs {
        let params = design(&spec).unwrap();
        let trajectory = run(&params, 1e-4, 50);
        assert_eq!(trajectory.state(0), Some(ConverterState::INITIAL));
    }
}

#[test]
fn design_file_drives_full_pipeline() {
    let ast = dsl::parse(
        "\
# reference design, short run
.spec vin=48 vout=200 pout=800
.spec fs=100k ripple_i=0.25 ripple_v=0.015
.tran tstop=200u dt=50n
",
    )
    .unwrap();

    let spec = ast.specification().unwrap();
    let params = design(&spec).unwrap();
    assert_eq!(params, reference());

    let trajectory = simulate(&params, &ast.simulation_config().unwrap()).unwrap();
    assert_eq!(trajectory.len(), 4000);
    assert_relative_eq!(trajectory.dt(), 50e-9, max_relative = 1e-12);
}

#[test]
fn bundled_reference_design_parses() {
    let ast = dsl::parse(include_str!("../designs/reference.boost")).unwrap();
    assert_eq!(design(&ast.specification().unwrap()).unwrap(), reference());
    assert_eq!(ast.simulation_config().unwrap(), SimulationConfig::default());
}

#[test]
fn missing_spec_key_is_reported() {
    let ast = dsl::parse(".spec vin=48 vout=200 pout=800 fs=100k ripple_i=0.25").unwrap();
    match ast.specification() {
        Err(boostsim::BoostError::MissingParameter { param }) => assert_eq!(param, "ripple_v"),
        other => panic!("expected missing parameter, got {:?}", other),
    }
}

#[test]
fn parallel_sweep_matches_sequential() {
    let outputs = [150.0, 200.0, 250.0];
    let config = SimulationConfig::new().with_t_end(5e-4);

    let sequential: Vec<Trajectory> = outputs
        .iter()
        .map(|&vout| {
            let spec = Specification {
                vout,
                ..Specification::default()
            };
            simulate(&design(&spec).unwrap(), &config).unwrap()
        })
        .collect();

    let parallel: Vec<Trajectory> = std::thread::scope(|scope| {
        let handles: Vec<_> = outputs
            .iter()
            .map(|&vout| {
                scope.spawn(move || {
                    let spec = Specification {
                        vout,
                        ..Specification::default()
                    };
                    simulate(&design(&spec).unwrap(), &config).unwrap()
                })
            })
            .collect();
        handles.into_iter().map(|h| h.join().unwrap()).collect()
    });

    assert_eq!(sequential, parallel);
}
