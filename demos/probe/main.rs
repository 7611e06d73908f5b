//! Landmark distance probe.
//!
//! Usage:
//! ```text
//! cargo run --example probe -- 0 0 3 4                  # prints 5
//! cargo run --example probe -- 0 0 0.3 0.4 --image 1280x720
//! ```

use landmark_distance::error::InputError;
use landmark_distance::{distance, ImageSize, Point2D, Result};

fn main() {
    // Default: WARN for everything, INFO for the probe and the library.
    // Override with RUST_LOG env var (e.g. RUST_LOG=probe=debug).
    let env_filter = tracing_subscriber::EnvFilter::from_default_env()
        .add_directive(tracing_subscriber::filter::LevelFilter::WARN.into())
        .add_directive("probe=info".parse().unwrap_or_default())
        .add_directive("landmark_distance=info".parse().unwrap_or_default());
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    if let Err(err) = run(std::env::args().skip(1)) {
        tracing::error!("{err}");
        std::process::exit(1);
    }
}

fn run(mut args: impl Iterator<Item = String>) -> Result<()> {
    let mut coords = Vec::with_capacity(4);
    let mut image = None;

    while let Some(arg) = args.next() {
        if arg == "--image" {
            let spec = args.next().ok_or(InputError::MissingArgument("--image WxH"))?;
            image = Some(spec.parse::<ImageSize>()?);
        } else if coords.len() == 4 {
            return Err(InputError::UnexpectedArgument(arg).into());
        } else {
            coords.push(parse_number(&arg)?);
        }
    }

    let &[ax, ay, bx, by] = coords.as_slice() else {
        return Err(InputError::MissingArgument("AX AY BX BY").into());
    };
    let a = Point2D::new(ax, ay);
    let b = Point2D::new(bx, by);
    tracing::debug!(?a, ?b, "measuring");

    if !a.is_finite() || !b.is_finite() {
        tracing::warn!("non-finite coordinate; result is propagated as-is");
    }

    let d = distance(&a, &b);
    tracing::info!(distance = d, "normalized");
    println!("{d}");

    if let Some(size) = image {
        let px = size.pixel_distance(&a, &b);
        tracing::info!(
            distance = px,
            width = size.width(),
            height = size.height(),
            "pixels"
        );
        println!("{px}");
    }
    Ok(())
}

fn parse_number(s: &str) -> Result<f64> {
    s.parse::<f64>()
        .map_err(|_| InputError::InvalidNumber(s.to_owned()).into())
}
