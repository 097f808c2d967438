use std::time::Instant;
use crate::simulation::states::{System, NVec2};
use crate::simulation::params::Parameters;
use crate::simulation::forces::spring_force;
use crate::simulation::integrator::euler_step;

/// Helper to build a stretched, moving chain so forces are nonzero
fn make_system() -> System {
    let mut sys = System::initialize(200.0, 200.0);
    sys.body1.position = NVec2::new(210.0, 40.0);
    sys.body2.position = NVec2::new(430.0, 90.0);
    sys.body1.velocity = NVec2::new(1.0, -2.0);
    sys.body2.velocity = NVec2::new(-3.0, 0.5);
    sys
}

pub fn bench_spring_force() {
    // Different batch sizes to test
    let batches = [1_000_000_usize, 10_000_000];

    let sys = make_system();

    for n in batches {
        // Accumulate into a running sum so the calls cannot be optimized away
        let mut acc = NVec2::zeros();

        let t0 = Instant::now();
        for i in 0..n {
            // Vary the input a little so the pure call cannot be hoisted
            let wobble = (i % 16) as f64 * 0.25;
            acc += spring_force(
                sys.body1.position + NVec2::new(wobble, 0.0),
                NVec2::zeros(),
                sys.body1.velocity,
                200.0,
                10.0,
                0.01,
            );
        }
        let elapsed = t0.elapsed().as_secs_f64();
        let ns_per_call = elapsed / n as f64 * 1e9;

        println!(
            "spring_force: n = {n:9}, total = {:8.6} s, {:7.2} ns/call (checksum {:.3})",
            elapsed,
            ns_per_call,
            acc.norm()
        );
    }
}

pub fn bench_euler_step() {
    // Different run lengths to test
    let runs = [100_000_usize, 1_000_000, 10_000_000];

    let params = Parameters::default();

    for steps in runs {
        let mut sys = make_system();

        // Warm up
        for _ in 0..1_000 {
            euler_step(&mut sys, &params);
        }

        let t0 = Instant::now();
        for _ in 0..steps {
            euler_step(&mut sys, &params);
        }
        let elapsed = t0.elapsed().as_secs_f64();
        let steps_per_s = steps as f64 / elapsed;

        println!(
            "euler_step: steps = {steps:9}, total = {:8.6} s, {:12.0} steps/s (body2 at {:.1}, {:.1})",
            elapsed, steps_per_s, sys.body2.position.x, sys.body2.position.y
        );
    }
}
