//! Build a fully-initialized simulation scenario from configuration
//!
//! Takes a `ScenarioConfig` (YAML-facing) and produces the runtime bundle
//! (`Scenario`) containing:
//! - runtime parameters (`Parameters`)
//! - system state (`System` with the chain at its rest geometry)
//!
//! The scenario is inserted into Bevy as a `Resource` and consumed by the
//! integration and visualization systems

use bevy::prelude::Resource;

use crate::configuration::config::ScenarioConfig;
use crate::simulation::params::Parameters;
use crate::simulation::states::System;

/// Bevy resource representing a fully-initialized scenario
///
/// This is the runtime bundle constructed from a [`ScenarioConfig`]: the
/// live parameter set plus the current body state. The integrator mutates
/// `system` in place each frame; the controls mutate `parameters`
#[derive(Resource)]
pub struct Scenario {
    pub parameters: Parameters,
    pub system: System,
}

impl Scenario {
    pub fn build_scenario(cfg: ScenarioConfig) -> Self {
        // Parameters (runtime) from ParametersConfig
        let p_cfg = cfg.parameters;
        let parameters = Parameters {
            gravity: p_cfg.gravity,
            mass1: p_cfg.mass1,
            mass2: p_cfg.mass2,
            length1: p_cfg.length1,
            length2: p_cfg.length2,
            stiffness1: p_cfg.stiffness1,
            stiffness2: p_cfg.stiffness2,
            damping1: p_cfg.damping1,
            damping2: p_cfg.damping2,
            sim_speed: p_cfg.sim_speed,
        };

        // Initial system state: chain hanging at rest along +x
        let system = System::initialize(parameters.length1, parameters.length2);

        Self { parameters, system }
    }
}
