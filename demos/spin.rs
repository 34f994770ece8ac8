//! Spin a direction in small steps, watch the drift, and repair it.
//!
//! Run with `RUST_LOG=linal=debug cargo run --example spin --features tracing`
//! to see the library's debug output for rejected operations. Warnings are
//! shown without `RUST_LOG`.

use linal::{Direction2, Matrix2x2, MathError, Rotator2, Vector2};

fn main() -> miette::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::WARN.into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let steps: usize = std::env::args()
        .nth(1)
        .and_then(|arg| arg.parse().ok())
        .unwrap_or(100_000);

    let step = Rotator2::from_radians(0.001f32);
    let mut direction = Direction2::<f32>::right();
    for _ in 0..steps {
        direction *= step;
    }

    println!("after {steps} steps: {direction}");
    println!("  angle:        {}", direction.as_rotator().angle());
    println!("  length² - 1:  {:e}", direction.length_squared() - 1.0);

    direction.repair_fast();
    println!("  fast repair:  {:e}", direction.length_squared() - 1.0);
    direction.repair();
    println!("  exact repair: {:e}", direction.length_squared() - 1.0);

    let matrix = direction.as_rotator().make_matrix();
    let buffer = matrix.make_transform_2d(&Vector2::new(10.0, -4.0));
    println!("uniform: {buffer:?}");

    // Singular matrices have no inverse; show the diagnostic
    let singular = Matrix2x2::new(Vector2::new(1.0, 2.0), Vector2::new(2.0, 4.0));
    if let Err(err) = singular.inversed() {
        eprintln!("{:?}", miette::Report::new(err));
    }

    let rotator = Rotator2::from_to(&Vector2::new(1.0, 1.0), &Vector2::new(-2.0, 0.5))?;
    println!("from_to angle: {}", rotator.angle());

    let zero: Result<_, MathError> = Vector2::<f64>::zero().normalized();
    println!("normalizing zero: {zero:?}");

    Ok(())
}
