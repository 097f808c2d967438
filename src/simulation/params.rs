//! Physical and numerical parameters for the simulation
//!
//! `Parameters` holds the ten runtime settings:
//! - gravity strength,
//! - the two body masses,
//! - rest length, stiffness and damping for both springs,
//! - the simulation speed, which doubles as the integration step size
//!
//! The integrator reads the current values on every step, so edits take
//! effect on the next frame. Rest lengths also seed the initial geometry,
//! which only changes on restart. `OPTIONS` carries the label, range and
//! default of every setting for the interactive controls

#[derive(Debug, Clone)]
pub struct Parameters {
    pub gravity: f64,    // downward acceleration on both bodies
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

/// Identifies one adjustable setting
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Param {
    Gravity,
    Mass1,
    Mass2,
    Length1,
    Length2,
    Stiffness1,
    Stiffness2,
    Damping1,
    Damping2,
    SimSpeed,
}

/// Display label and value range of one adjustable setting
#[derive(Debug, Clone, Copy)]
pub struct OptionSpec {
    pub param: Param,
    pub label: &'static str,
    pub min: f64,
    pub max: f64,
    pub default: f64,
}

/// All adjustable settings in display order (same order as `Param`)
pub const OPTIONS: [OptionSpec; 10] = [
    OptionSpec { param: Param::Gravity, label: "Gravity", min: 0.0, max: 20.0, default: 9.81 },
    OptionSpec { param: Param::Mass1, label: "Mass 1", min: 1.0, max: 10.0, default: 2.0 },
    OptionSpec { param: Param::Mass2, label: "Mass 2", min: 1.0, max: 10.0, default: 2.0 },
    OptionSpec { param: Param::Length1, label: "Length 1", min: 100.0, max: 300.0, default: 200.0 },
    OptionSpec { param: Param::Length2, label: "Length 2", min: 100.0, max: 300.0, default: 200.0 },
    OptionSpec { param: Param::Stiffness1, label: "Stiffness 1", min: 1.0, max: 20.0, default: 10.0 },
    OptionSpec { param: Param::Stiffness2, label: "Stiffness 2", min: 1.0, max: 20.0, default: 10.0 },
    OptionSpec { param: Param::Damping1, label: "Damping 1", min: 0.001, max: 0.5, default: 0.01 },
    OptionSpec { param: Param::Damping2, label: "Damping 2", min: 0.001, max: 0.5, default: 0.01 },
    OptionSpec { param: Param::SimSpeed, label: "Simulation speed", min: 0.0, max: 0.5, default: 0.2 },
];

impl Param {
    /// Look up this setting's entry in [`OPTIONS`]
    pub fn spec(self) -> OptionSpec {
        OPTIONS[self as usize]
    }
}

impl Parameters {
    /// Current value of one setting
    pub fn get(&self, param: Param) -> f64 {
        match param {
            Param::Gravity => self.gravity,
            Param::Mass1 => self.mass1,
            Param::Mass2 => self.mass2,
            Param::Length1 => self.length1,
            Param::Length2 => self.length2,
            Param::Stiffness1 => self.stiffness1,
            Param::Stiffness2 => self.stiffness2,
            Param::Damping1 => self.damping1,
            Param::Damping2 => self.damping2,
            Param::SimSpeed => self.sim_speed,
        }
    }

    /// Set one setting, clamped into its range like a slider would
    pub fn set(&mut self, param: Param, value: f64) {
        let spec = param.spec();
        let value = value.clamp(spec.min, spec.max);
        match param {
            Param::Gravity => self.gravity = value,
            Param::Mass1 => self.mass1 = value,
            Param::Mass2 => self.mass2 = value,
            Param::Length1 => self.length1 = value,
            Param::Length2 => self.length2 = value,
            Param::Stiffness1 => self.stiffness1 = value,
            Param::Stiffness2 => self.stiffness2 = value,
            Param::Damping1 => self.damping1 = value,
            Param::Damping2 => self.damping2 = value,
            Param::SimSpeed => self.sim_speed = value,
        }
    }
}

impl Default for Parameters {
    /// The defaults column of [`OPTIONS`]
    fn default() -> Self {
        Self {
            gravity: 9.81,
            mass1: 2.0,
            mass2: 2.0,
            length1: 200.0,
            length2: 200.0,
            stiffness1: 10.0,
            stiffness2: 10.0,
            damping1: 0.01,
            damping2: 0.01,
            sim_speed: 0.2,
        }
    }
}
