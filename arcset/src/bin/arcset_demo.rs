//! Evaluates interval expressions from the command line.
//!
//! # Usage
//!
//! ```bash
//! # One expression: <interval> <op> <interval>, op is one of + - in ==
//! arcset-demo "[0, pi/2]" + "[pi/3, pi]"
//! arcset-demo "(270°, 45°]" in "[0, 2pi]"
//!
//! # No arguments: run the built-in demonstration scenarios
//! RUST_LOG=debug arcset-demo
//! ```
//!
//! # Environment Variables
//!
//! - `RUST_LOG`: log filter for the library's `log` records (default: warn)

use anyhow::{bail, Context, Result};
use arcset::{Angle, AngleInterval};
use core::f64::consts::PI;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

fn main() -> Result<()> {
    FmtSubscriber::builder()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .with_target(true)
        .init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    match args.as_slice() {
        [] => {
            run_scenarios();
            Ok(())
        }
        [lhs, op, rhs] => evaluate(lhs, op, rhs),
        _ => bail!("usage: arcset-demo <interval> <+|-|in|==> <interval>"),
    }
}

fn evaluate(lhs: &str, op: &str, rhs: &str) -> Result<()> {
    let a: AngleInterval = lhs
        .parse()
        .with_context(|| format!("left operand {:?}", lhs))?;
    let b: AngleInterval = rhs
        .parse()
        .with_context(|| format!("right operand {:?}", rhs))?;

    match op {
        "+" => println!("{}", a + b),
        "-" => println!("{}", a - b),
        "in" => println!("{}", b.contains(&a)),
        "==" => println!("{}", a == b),
        other => bail!("unknown operator {:?} (expected one of + - in ==)", other),
    }
    Ok(())
}

// ========================================
// Demonstration scenarios
// ========================================

fn closed(start: f64, end: f64) -> AngleInterval {
    AngleInterval::closed(start, end)
}

fn run_scenarios() {
    println!("=== Union ===");
    let unions = [
        ("simple overlap", closed(0.0, PI / 2.0), closed(PI / 3.0, PI)),
        ("adjacent", closed(0.0, PI), closed(PI, 3.0 * PI / 2.0)),
        ("with wrapping", closed(5.0 * PI / 3.0, PI / 3.0), closed(0.0, PI / 2.0)),
        ("disjoint", closed(PI, 3.0 * PI / 2.0), closed(0.0, PI / 4.0)),
        ("full turn", closed(0.0, 2.0 * PI), closed(PI / 2.0, PI)),
    ];
    for (name, a, b) in unions {
        println!("{:<16} {} + {} = {}", name, a, b, a + b);
    }

    println!();
    println!("=== Difference ===");
    let upper = closed(0.0, PI);
    let wrap = closed(3.0 * PI / 2.0, PI / 2.0);
    let differences = [
        ("touching at 0", upper, closed(PI, 2.0 * PI)),
        ("full cover", upper, closed(0.0, PI)),
        ("endpoints remain", upper, AngleInterval::new(0.0, PI, false, false)),
        ("left overlap", upper, closed(0.0, PI / 2.0)),
        ("right overlap", upper, closed(PI / 2.0, PI)),
        ("middle cut", upper, closed(PI / 3.0, 2.0 * PI / 3.0)),
        ("same left bound", upper, AngleInterval::new(0.0, PI / 2.0, false, true)),
        ("same right bound", upper, AngleInterval::new(PI / 2.0, PI, true, false)),
        ("point", upper, AngleInterval::point(PI / 2.0)),
        ("wrapping cover", closed(PI / 2.0, 3.0 * PI / 2.0), wrap),
        ("wrapping minuend", wrap, closed(0.0, PI / 4.0)),
        ("both wrapping", wrap, closed(PI, 0.0)),
    ];
    for (name, a, b) in differences {
        println!("{:<16} {} - {} = {}", name, a, b, a - b);
    }

    println!();
    println!("=== Containment and equality ===");
    for inner in [
        AngleInterval::closed(PI / 4.0, PI / 2.0),
        AngleInterval::closed(3.0 * PI / 2.0, PI / 2.0),
        AngleInterval::closed(PI / 6.0, 5.0 * PI / 6.0),
    ] {
        println!("{} in {}: {}", inner, upper, upper.contains(&inner));
    }
    let e1 = AngleInterval::closed(PI / 2.0, PI);
    let e2 = AngleInterval::closed(5.0 * PI / 2.0, 3.0 * PI);
    println!("{} == {}: {}", e1, e2, e1 == e2);

    let q = AngleInterval::closed(3.0 * PI / 2.0, 5.0 * PI / 4.0);
    for degrees in [180.0, 270.0] {
        let sweep = AngleInterval::from_angle(Angle::from_degrees(degrees));
        println!("{} in {}: {}", sweep, q, q.contains(&sweep));
    }

    println!();
    println!("=== Angle arithmetic ===");
    let half = Angle::new(PI / 2.0);
    let other = Angle::new(PI / 2.0);
    let straight = Angle::new(PI);
    println!("{} + {} = {}", half, other, half + other);
    println!("{} + pi = {}", half, half + PI);
    println!("{} * 2 = {}", half, half * 2.0);
    println!("{} - {} = {}", straight, other, straight - other);
    println!("{} > {}: {}", straight, half, straight > half);
    println!("{} == {}: {}", half, other, half == other);
    println!("as f64: {}, as i64: {}", half.to_f64(), half.to_i64());
}
