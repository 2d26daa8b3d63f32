use anyhow::{bail, Result};
use clap::{Parser, Subcommand};
use pipmath::point::{self, Point2};
use pipmath::rng::{random, random_with, SeedToken};
use pipmath::scalar;
use pipmath::{Interpolation, DEFAULT_DECIMALS};
use serde::Serialize;
use serde_json::{json, Value};
use std::io::IsTerminal;
use tracing_subscriber::fmt::SubscriberBuilder;

#[derive(Parser)]
#[command(name = "pipmath-cli")]
#[command(about = "Quick checks for the pipmath angle, rounding, random and point helpers")]
struct Cmd {
    #[command(subcommand)]
    action: Action,
}

#[derive(Subcommand)]
enum Action {
    /// Convert an angle between degrees and radians
    Convert {
        #[arg(long, allow_negative_numbers = true, conflicts_with = "radians")]
        degrees: Option<f64>,
        #[arg(long, allow_negative_numbers = true)]
        radians: Option<f64>,
    },
    /// Draw uniform random values between two bounds
    Random {
        #[arg(long, allow_negative_numbers = true, default_value_t = 0.0)]
        from: f64,
        #[arg(long, allow_negative_numbers = true, default_value_t = 1.0)]
        to: f64,
        #[arg(long, default_value_t = 1)]
        count: usize,
        /// Seed for a reproducible stream
        #[arg(long)]
        seed: Option<u64>,
    },
    /// Smallest signed rotation between two angles
    Angle {
        #[arg(long, allow_negative_numbers = true)]
        from: f64,
        #[arg(long, allow_negative_numbers = true)]
        to: f64,
        /// Inputs and output are in degrees instead of radians
        #[arg(long)]
        degrees: bool,
    },
    /// Round a value to a number of decimal places
    Round {
        #[arg(long, allow_negative_numbers = true)]
        value: f64,
        #[arg(long, allow_negative_numbers = true, default_value_t = DEFAULT_DECIMALS)]
        decimals: i32,
    },
    /// Interpolate between two scalars
    Interp {
        #[arg(long, allow_negative_numbers = true)]
        start: f64,
        #[arg(long, allow_negative_numbers = true)]
        end: f64,
        #[arg(long, allow_negative_numbers = true)]
        position: f64,
        #[arg(long, default_value = "linear")]
        strategy: Interpolation,
    },
    /// Describe a point, optionally relative to a second one
    Point {
        #[arg(long, allow_negative_numbers = true)]
        x: f64,
        #[arg(long, allow_negative_numbers = true)]
        y: f64,
        #[arg(long, allow_negative_numbers = true, requires = "to_y")]
        to_x: Option<f64>,
        #[arg(long, allow_negative_numbers = true, requires = "to_x")]
        to_y: Option<f64>,
        #[arg(long, allow_negative_numbers = true, default_value_t = 0.5)]
        position: f64,
        #[arg(long, default_value = "linear")]
        strategy: Interpolation,
        #[arg(long, allow_negative_numbers = true)]
        scale: Option<f64>,
    },
    /// Print version information
    Report,
}

fn main() -> Result<()> {
    // Logs go to stderr; stdout carries only the JSON document.
    SubscriberBuilder::default()
        .with_target(false)
        .with_writer(std::io::stderr)
        .with_ansi(std::io::stderr().is_terminal())
        .init();
    let cmd = Cmd::parse();
    let out = run(cmd.action)?;
    println!("{}", render(&out)?);
    Ok(())
}

fn run(action: Action) -> Result<Value> {
    let out = match action {
        Action::Convert { degrees, radians } => convert(degrees, radians)?,
        Action::Random {
            from,
            to,
            count,
            seed,
        } => draw(from, to, count, seed),
        Action::Angle { from, to, degrees } => angle(from, to, degrees),
        Action::Round { value, decimals } => round(value, decimals),
        Action::Interp {
            start,
            end,
            position,
            strategy,
        } => interp(start, end, position, &strategy),
        Action::Point {
            x,
            y,
            to_x,
            to_y,
            position,
            strategy,
            scale,
        } => {
            let other = to_x.zip(to_y).map(|(tx, ty)| point::point(tx, ty));
            describe_point(point::point(x, y), other, position, &strategy, scale)?
        }
        Action::Report => report(),
    };
    Ok(out)
}

fn render(out: &Value) -> Result<String> {
    Ok(serde_json::to_string_pretty(out)?)
}

fn convert(degrees: Option<f64>, radians: Option<f64>) -> Result<Value> {
    tracing::info!(?degrees, ?radians, "convert");
    match (degrees, radians) {
        (Some(d), None) => Ok(json!({ "degrees": d, "radians": scalar::degrees_to_radians(d) })),
        (None, Some(r)) => Ok(json!({ "degrees": scalar::radians_to_degrees(r), "radians": r })),
        _ => bail!("pass exactly one of --degrees or --radians"),
    }
}

fn draw(from: f64, to: f64, count: usize, seed: Option<u64>) -> Value {
    tracing::info!(from, to, count, ?seed, "random");
    let values: Vec<f64> = match seed {
        Some(s) => {
            let mut rng = SeedToken::new(s).to_std_rng();
            (0..count).map(|_| random_with(&mut rng, from, to)).collect()
        }
        None => (0..count).map(|_| random(from, to)).collect(),
    };
    json!({ "from": from, "to": to, "seed": seed, "values": values })
}

fn angle(from: f64, to: f64, degrees: bool) -> Value {
    tracing::info!(from, to, degrees, "angle");
    if degrees {
        let rad = scalar::smallest_angle_between(
            scalar::degrees_to_radians(from),
            scalar::degrees_to_radians(to),
        );
        json!({ "unit": "degrees", "smallest_angle": scalar::radians_to_degrees(rad) })
    } else {
        json!({ "unit": "radians", "smallest_angle": scalar::smallest_angle_between(from, to) })
    }
}

fn round(value: f64, decimals: i32) -> Value {
    tracing::info!(value, decimals, "round");
    json!({
        "value": value,
        "decimals": decimals,
        "rounded": scalar::round_to_decimals(value, decimals),
    })
}

fn interp(start: f64, end: f64, position: f64, strategy: &Interpolation) -> Value {
    tracing::info!(start, end, position, strategy = strategy.name(), "interp");
    json!({
        "strategy": strategy.name(),
        "value": scalar::interpolate_between(start, end, position, strategy),
    })
}

#[derive(Serialize)]
struct PointReport {
    point: [f64; 2],
    distance_from_origin: f64,
    normalized: [f64; 2],
    angle: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    scaled: Option<[f64; 2]>,
    #[serde(skip_serializing_if = "Option::is_none")]
    relative: Option<RelativeReport>,
}

#[derive(Serialize)]
struct RelativeReport {
    other: [f64; 2],
    distance: f64,
    sum: [f64; 2],
    difference: [f64; 2],
    strategy: &'static str,
    position: f64,
    interpolated: [f64; 2],
}

fn xy(p: Point2) -> [f64; 2] {
    [p.x, p.y]
}

fn describe_point(
    p: Point2,
    other: Option<Point2>,
    position: f64,
    strategy: &Interpolation,
    scale: Option<f64>,
) -> Result<Value> {
    tracing::info!(x = p.x, y = p.y, ?other, position, "point");
    let relative = other.map(|q| RelativeReport {
        other: xy(q),
        distance: point::distance_between(p, q),
        sum: xy(point::add(p, q)),
        difference: xy(point::subtract(p, q)),
        strategy: strategy.name(),
        position,
        interpolated: xy(point::interpolate_between(p, q, position, strategy)),
    });
    let report = PointReport {
        point: xy(p),
        distance_from_origin: point::distance_from_origin(p),
        normalized: xy(point::normalized(p)),
        angle: point::angle_of(p),
        scaled: scale.map(|s| xy(point::multiply(p, s))),
        relative,
    };
    Ok(serde_json::to_value(report)?)
}

fn report() -> Value {
    let rev = option_env!("GIT_COMMIT").unwrap_or("unknown");
    json!({
        "name": "pipmath",
        "version": pipmath::VERSION,
        "code_rev": rev,
    })
}
