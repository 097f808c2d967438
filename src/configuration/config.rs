//! Configuration types for loading simulation scenarios from YAML.
//!
//! This module defines a thin, `serde`-deserializable representation of a
//! simulation scenario. A scenario consists of:
//!
//! - [`ParametersConfig`] – physical parameters and the simulation speed
//! - [`ScenarioConfig`]   – top-level wrapper used to load a scenario from YAML
//!
//! # YAML format
//! An example scenario YAML matching these types:
//!
//! ```yaml
//! parameters:
//!   gravity: 9.81         # downward acceleration
//!   mass1: 2.0
//!   mass2: 2.0
//!   length1: 200.0        # rest length origin -> body1, pixels
//!   length2: 200.0        # rest length body1 -> body2, pixels
//!   stiffness1: 10.0
//!   stiffness2: 10.0
//!   damping1: 0.01
//!   damping2: 0.01
//!   sim_speed: 0.2        # integration step size
//! ```
//!
//! The engine then maps this configuration into its internal runtime scenario
//! representation; initial body positions follow from the rest lengths.

use serde::Deserialize;

/// Physical and numerical parameters for a scenario
#[derive(Deserialize, Debug, Clone)]
pub struct ParametersConfig {
    pub gravity: f64,    // downward acceleration, +y points down
    pub mass1: f64,      // mass of body1
    pub mass2: f64,      // mass of body2
    pub length1: f64,    // rest length of the origin spring
    pub length2: f64,    // rest length of the middle spring
    pub stiffness1: f64, // Hooke coefficient of the origin spring
    pub stiffness2: f64, // Hooke coefficient of the middle spring
    pub damping1: f64,   // damping coefficient on body1
    pub damping2: f64,   // damping coefficient on body2
    pub sim_speed: f64,  // integration step size dt
}

/// Top-level scenario configuration loaded from YAML.
#[derive(Deserialize, Debug)]
pub struct ScenarioConfig {
    pub parameters: ParametersConfig, // physical parameters and step size
}
