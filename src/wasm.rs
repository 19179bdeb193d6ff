//! WASM bindings for Boostsim.
//!
//! This module provides JavaScript-friendly bindings for running designs
//! in the browser and handing the trajectories to a charting library.
//!
//! ## Usage (JavaScript)
//!
//! ```javascript
//! import init, { WasmBoostSim } from 'boostsim';
//!
//! await init();
//!
//! const sim = new WasmBoostSim(`
//!   .spec vin=48 vout=200 pout=800 fs=100k
//!   .spec ripple_i=0.25 ripple_v=0.015
//!   .tran tstop=15m divisions=200
//! `);
//!
//! sim.simulate();
//! plot(sim.time(), sim.output_voltage());
//! ```

use wasm_bindgen::prelude::*;

use crate::converter::{design, DesignParameters};
use crate::dsl;
use crate::error::BoostError;
use crate::solver::{Simulator, Trajectory};

/// Initialize panic hook for better error messages in browser console.
#[wasm_bindgen(start)]
pub fn init_panic_hook() {
    console_error_panic_hook::set_once();
}

fn to_js(err: BoostError) -> JsValue {
    JsValue::from_str(&err.to_string())
}

/// WASM-compatible boost converter design and simulation.
///
/// Holds the parsed design and, after [`simulate`](WasmBoostSim::simulate),
/// the most recent trajectory.
#[wasm_bindgen]
pub struct WasmBoostSim {
    simulator: Simulator,
    trajectory: Option<Trajectory>,
}

impl WasmBoostSim {
    fn params(&self) -> &DesignParameters {
        self.simulator.params()
    }
}

#[wasm_bindgen]
impl WasmBoostSim {
    /// Create a new simulator from a design file string.
    ///
    /// # Arguments
    /// * `design_source` - The design description (`.spec` and optional `.tran`)
    ///
    /// # Returns
    /// A new `WasmBoostSim` instance or an error if the design is invalid.
    #[wasm_bindgen(constructor)]
    pub fn new(design_source: &str) -> Result<WasmBoostSim, JsValue> {
        let ast = dsl::parse(design_source).map_err(to_js)?;
        let spec = ast.specification().map_err(to_js)?;
        let config = ast.simulation_config().map_err(to_js)?;

        let params = design(&spec).map_err(to_js)?;
        let simulator = Simulator::with_config(params, &config).map_err(to_js)?;

        Ok(WasmBoostSim {
            simulator,
            trajectory: None,
        })
    }

    /// Run the transient simulation, replacing any previous result.
    ///
    /// Returns an error string if the trajectory contains non-finite values;
    /// the arrays remain available for inspection either way.
    #[wasm_bindgen]
    pub fn simulate(&mut self) -> Result<(), JsValue> {
        let trajectory = self.simulator.run();
        let status = trajectory.check_finite().map_err(to_js);
        self.trajectory = Some(trajectory);
        status
    }

    /// Sample times of the last run (empty before the first run).
    #[wasm_bindgen]
    pub fn time(&self) -> Vec<f64> {
        self.trajectory.as_ref().map(|t| t.time().to_vec()).unwrap_or_default()
    }

    /// Inductor current of the last run.
    #[wasm_bindgen]
    pub fn inductor_current(&self) -> Vec<f64> {
        self.trajectory
            .as_ref()
            .map(|t| t.inductor_current().to_vec())
            .unwrap_or_default()
    }

    /// Output voltage of the last run.
    #[wasm_bindgen]
    pub fn output_voltage(&self) -> Vec<f64> {
        self.trajectory
            .as_ref()
            .map(|t| t.output_voltage().to_vec())
            .unwrap_or_default()
    }

    /// Duty ratio.
    #[wasm_bindgen(getter)]
    pub fn duty(&self) -> f64 {
        self.params().duty
    }

    /// Inductance in henries.
    #[wasm_bindgen(getter)]
    pub fn inductance(&self) -> f64 {
        self.params().inductance
    }

    /// Capacitance in farads.
    #[wasm_bindgen(getter)]
    pub fn capacitance(&self) -> f64 {
        self.params().capacitance
    }

    /// Load resistance in ohms.
    #[wasm_bindgen(getter)]
    pub fn load_resistance(&self) -> f64 {
        self.params().load_resistance
    }

    /// Target output voltage, for annotating plots.
    #[wasm_bindgen(getter)]
    pub fn target_voltage(&self) -> f64 {
        self.params().vout
    }

    /// Integration step in seconds.
    #[wasm_bindgen(getter)]
    pub fn dt(&self) -> f64 {
        self.simulator.dt()
    }
}

/// Get the library version.
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}
