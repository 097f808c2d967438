pub mod simulation;
pub mod configuration;
pub mod visualization;
pub mod benchmark;

pub use simulation::states::{Body, System, NVec2};
pub use simulation::forces::spring_force;
pub use simulation::integrator::euler_step;
pub use simulation::params::{Parameters, Param, OptionSpec, OPTIONS};
pub use simulation::scenario::Scenario;

pub use configuration::config::{ParametersConfig, ScenarioConfig};

pub use visualization::springsim_vis2d::run_2d;

pub use benchmark::benchmark::{bench_spring_force, bench_euler_step};
