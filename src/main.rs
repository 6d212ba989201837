//! # numlab
//!
//! Runs the textbook exercises and prints their results:
//!
//! - `cubic`: discriminant test for three distinct real roots of a cubic.
//! - `log-integral`: fixed-step sum of `ln x / (1 + ln x)^2` on `[1, e]`
//!   against its closed form.
//! - `simpson`: Simpson error bound and the least subinterval count meeting
//!   a tolerance for `int_0^1 ln(1 + x^2) dx`.
//! - `ode`: midpoint (RK2) solution of `y' = y cos t` plotted against
//!   `e^{sin t}`.
//!
//! ## Usage
//! ```sh
//! numlab                  # everything
//! numlab simpson --tol 1e-10
//! numlab ode --step 0.1 --json
//! ```
//!
//! Set `RUST_LOG=debug` (or pass `--verbose`) for solver diagnostics.

use std::io::{self, Write};

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use log::{info, LevelFilter};

use numlab::{
    exercises::{
        cubic_roots, log_integral, midpoint_ode, simpson_error, CubicConfig, LogIntegralConfig, OdeConfig,
        SimpsonConfig,
    },
    solve::Method,
    Float,
};

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
enum Exercise {
    All,
    Cubic,
    LogIntegral,
    Simpson,
    Ode,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
enum MethodArg {
    Midpoint,
    Rk4,
}

impl From<MethodArg> for Method {
    fn from(m: MethodArg) -> Self {
        match m {
            MethodArg::Midpoint => Method::Midpoint,
            MethodArg::Rk4 => Method::RK4,
        }
    }
}

#[derive(Parser, Debug)]
#[command(version, about = "Numerical methods exercises", long_about = None)]
struct Args {
    /// Exercise to run
    #[arg(value_enum, default_value_t = Exercise::All)]
    exercise: Exercise,

    /// Cubic coefficients in ascending powers: d c b a
    #[arg(long, num_args = 4, allow_negative_numbers = true,
          default_values_t = [1.0, -1.0, 0.0, 1.0])]
    coeffs: Vec<Float>,

    /// Upper limit c of int_1^c ln x / (1 + ln x)^2 dx
    #[arg(long, default_value_t = std::f64::consts::E)]
    upper: Float,

    /// Subintervals for the fixed-step sum
    #[arg(long, default_value_t = 1000)]
    n: usize,

    /// Absolute error target for Simpson's rule
    #[arg(long, default_value_t = 1e-8)]
    tol: Float,

    /// Grid points used to estimate max |f''''|
    #[arg(long, default_value_t = 10_000)]
    samples: usize,

    /// ODE step size
    #[arg(long, default_value_t = 0.2)]
    step: Float,

    /// ODE method
    #[arg(long, value_enum, default_value_t = MethodArg::Midpoint)]
    method: MethodArg,

    /// Chart width in columns
    #[arg(long, default_value_t = 72)]
    width: usize,

    /// Chart height in rows
    #[arg(long, default_value_t = 20)]
    height: usize,

    /// Print reports as JSON instead of text
    #[arg(long)]
    json: bool,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let mut logger = env_logger::Builder::from_default_env();
    if args.verbose {
        logger.filter_level(LevelFilter::Debug);
    }
    logger.init();

    let stdout = io::stdout();
    run(&args, &mut stdout.lock())
}

/// Text-mode banner before each exercise.
fn header(out: &mut impl Write, problem: &mut usize, title: &str) -> io::Result<()> {
    *problem += 1;
    if *problem > 1 {
        writeln!(out, "---------------------------")?;
    }
    writeln!(out, "Problem {problem}: {title}")
}

fn run(args: &Args, out: &mut impl Write) -> Result<()> {
    let selected = |e: Exercise| args.exercise == Exercise::All || args.exercise == e;
    let mut reports = serde_json::Map::new();
    let mut problem = 0;

    if selected(Exercise::Cubic) {
        let coeffs: [Float; 4] = args
            .coeffs
            .as_slice()
            .try_into()
            .context("--coeffs takes exactly four values")?;
        let report = cubic_roots(&CubicConfig { coeffs });
        if args.json {
            reports.insert("cubic".into(), serde_json::to_value(&report)?);
        } else {
            header(out, &mut problem, "cubic discriminant")?;
            writeln!(out, "{report}")?;
        }
    }

    if selected(Exercise::LogIntegral) {
        let config = LogIntegralConfig {
            upper: args.upper,
            n: args.n,
        };
        let report = log_integral(&config).context("fixed-step integral")?;
        if args.json {
            reports.insert("log_integral".into(), serde_json::to_value(&report)?);
        } else {
            header(out, &mut problem, "fixed-step integral")?;
            writeln!(out, "{report}")?;
        }
    }

    if selected(Exercise::Simpson) {
        let config = SimpsonConfig {
            tol: args.tol,
            samples: args.samples,
        };
        let report = simpson_error(&config).context("Simpson error study")?;
        if args.json {
            reports.insert("simpson".into(), serde_json::to_value(&report)?);
        } else {
            header(out, &mut problem, "Simpson error bound")?;
            writeln!(out, "{report}")?;
        }
    }

    if selected(Exercise::Ode) {
        let config = OdeConfig {
            method: args.method.into(),
            h: args.step,
            ..Default::default()
        };
        let report = midpoint_ode(&config).context("ODE integration")?;
        info!("ODE solved with {} steps", report.nstep);
        if args.json {
            reports.insert("ode".into(), serde_json::to_value(&report)?);
        } else {
            header(out, &mut problem, "midpoint ODE solver")?;
            writeln!(out, "{report}")?;
            writeln!(out)?;
            write!(out, "{}", report.chart()?.render(args.width, args.height))?;
        }
    }

    if args.json {
        writeln!(out, "{}", serde_json::to_string_pretty(&serde_json::Value::Object(reports))?)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run_to_string(argv: &[&str]) -> Result<String> {
        let args = Args::try_parse_from(std::iter::once("numlab").chain(argv.iter().copied()))?;
        let mut out = Vec::new();
        run(&args, &mut out)?;
        Ok(String::from_utf8(out)?)
    }

    #[test]
    fn cubic_text_output() {
        let text = run_to_string(&["cubic"]).unwrap();
        assert!(text.starts_with("Problem 1: cubic discriminant"));
        assert!(text.contains("discriminant = -23"));
        assert!(text.contains("three distinct real roots: false"));
        assert!(!text.contains("----"));
    }

    #[test]
    fn custom_coefficients_with_negatives() {
        // (x - 1)(x - 2)(x - 3)
        let text = run_to_string(&["cubic", "--coeffs", "-6", "11", "-6", "1"]).unwrap();
        assert!(text.contains("three distinct real roots: true"));
    }

    #[test]
    fn coeffs_need_exactly_four_values() {
        assert!(Args::try_parse_from(["numlab", "cubic", "--coeffs", "1", "2", "3"]).is_err());
        assert!(Args::try_parse_from(["numlab", "cubic", "--coeffs", "1", "2", "3", "4", "5"]).is_err());
    }

    #[test]
    fn all_exercises_in_order() {
        let text = run_to_string(&["--width", "40", "--height", "10"]).unwrap();
        let positions: Vec<usize> = (1..=4)
            .map(|i| text.find(&format!("Problem {i}:")).unwrap())
            .collect();
        assert!(positions.windows(2).all(|w| w[0] < w[1]));
        assert_eq!(text.lines().filter(|l| *l == "---------------------------").count(), 3);
        assert!(text.contains("least number of subintervals to satisfy error is 28"));
        assert!(text.contains("o approx"));
    }

    #[test]
    fn json_output_shape() {
        let text = run_to_string(&["--json"]).unwrap();
        let value: serde_json::Value = serde_json::from_str(&text).unwrap();
        let keys: Vec<&str> = value.as_object().unwrap().keys().map(String::as_str).collect();
        assert_eq!(keys.len(), 4);
        for key in ["cubic", "log_integral", "simpson", "ode"] {
            assert!(keys.contains(&key), "missing {key}");
        }
        assert_eq!(value["cubic"]["three_real_roots"], false);
        assert_eq!(value["simpson"]["bound"], 52);
        assert_eq!(value["ode"]["t"].as_array().unwrap().len(), 33);
        assert_eq!(value["ode"]["method"], "Midpoint");
        assert!(!text.contains("Problem"));
    }

    #[test]
    fn invalid_tolerance_is_reported() {
        let err = run_to_string(&["simpson", "--tol", "0"]).unwrap_err();
        assert!(format!("{err:#}").contains("tolerance must be positive"));
    }
}
