use magnetostatics::constants::{INCHES_PER_METRE, MILLITESLA_PER_TESLA};
use magnetostatics::math::R3;
use magnetostatics::sweep::{run_angle_sweep, AngleSweepConfig};
use tracing_subscriber::EnvFilter;

fn main() -> magnetostatics::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    // Two 1/4" cubes at 4601 G, magnets on a 1.8" radius, sensor on 1.3".
    let config = AngleSweepConfig::default();
    let [first, _] = config.magnets()?;
    println!(
        "remanence {:.4} T, magnet spacing {:.3} in",
        first.magnet.remanence(),
        config.magnet_spacing() * INCHES_PER_METRE
    );

    // Single magnet, on axis at two cube widths from its centre
    let on_axis = R3::new(0.0, 0.0, 2.0 * config.magnet_edge_m);
    let sample = first.magnet.sample(&on_axis)?;
    let dir = sample.direction();
    println!(
        "|B| at {:.1} mm on axis: {:.3} mT along ({:.2}, {:.2}, {:.2}), |H| {:.1} A/m",
        on_axis.z * 1.0e3,
        sample.magnitude() * MILLITESLA_PER_TESLA,
        dir.x,
        dir.y,
        dir.z,
        sample.h().norm()
    );

    println!("angle(deg), B(mT), Vout(V), linear");
    for r in run_angle_sweep(&config)? {
        println!(
            "{:>6.1}, {:>8.3}, {:.3}, {}",
            r.angle_deg,
            r.field_t * MILLITESLA_PER_TESLA,
            r.output_v,
            r.in_linear_range
        );
    }
    Ok(())
}
