mod output;
mod provenance;

use anyhow::Result;
use clap::{Parser, Subcommand};
use ndfront::prelude::*;
use rand::{rngs::StdRng, SeedableRng};
use serde::Serialize;
use std::path::{Path, PathBuf};
use tracing_subscriber::fmt::SubscriberBuilder;

#[derive(Parser)]
#[command(name = "ndfront")]
#[command(about = "Generate sets of mutually non-dominated points on fronts of different shapes")]
struct Cmd {
    /// Log every generation attempt
    #[arg(long, short, global = true)]
    verbose: bool,

    #[command(subcommand)]
    action: Action,
}

#[derive(Subcommand)]
enum Action {
    /// Generate a front and write it under <out>/<label>/
    Generate {
        /// Output directory
        #[arg(long)]
        out: PathBuf,
        /// Number of objectives (d)
        #[arg(long)]
        dim: usize,
        /// Number of points (n)
        #[arg(long)]
        count: usize,
        /// concave | convex | linear | wave-<k> | cliff
        #[arg(long)]
        shape: String,
        /// RNG seed; drawn from entropy and logged when omitted
        #[arg(long)]
        seed: Option<u64>,
        /// Coordinates are scaled to [0, max-value]
        #[arg(long, default_value_t = 1.0)]
        max_value: f64,
        /// Run the dominance check even for shapes that cannot produce dominated points
        #[arg(long)]
        full_check: bool,
        /// With --full-check, keep the non-dominated subset instead of regenerating
        #[arg(long, requires = "full_check")]
        prune: bool,
        /// Largest set checked with the n×n dominance matrix
        #[arg(long, default_value_t = MATRIX_THRESHOLD)]
        matrix_threshold: usize,
        #[arg(long, default_value_t = 64)]
        max_attempts: u32,
    },
    /// Report repeated and dominated points in an existing point file
    Check {
        #[arg(long)]
        input: PathBuf,
        #[arg(long, default_value_t = DUPLICATE_TOL)]
        tolerance: f64,
    },
    /// Print a small provenance JSON block
    Report,
}

/// Parameters recorded in the provenance sidecar.
#[derive(Serialize)]
struct GenerateParams<'a> {
    shape: &'a str,
    dim: usize,
    requested: usize,
    written: usize,
    seed: u64,
    max_value: f64,
    full_check: bool,
    prune: bool,
    attempts: u32,
}

fn main() -> Result<()> {
    let cmd = Cmd::parse();
    let level = if cmd.verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::INFO
    };
    SubscriberBuilder::default()
        .with_target(false)
        .with_max_level(level)
        .init();
    match cmd.action {
        Action::Generate {
            out,
            dim,
            count,
            shape,
            seed,
            max_value,
            full_check,
            prune,
            matrix_threshold,
            max_attempts,
        } => {
            let cfg = EnforceCfg {
                check: if full_check {
                    CheckPolicy::Full
                } else {
                    CheckPolicy::ShapeDefault
                },
                on_dominated: if prune {
                    DominatedPolicy::Prune
                } else {
                    DominatedPolicy::Regenerate
                },
                matrix_threshold,
                max_attempts,
                ..EnforceCfg::default()
            };
            run_generate(&out, &shape, count, dim, seed, max_value, &cfg).map(|_| ())
        }
        Action::Check { input, tolerance } => check_file(&input, tolerance),
        Action::Report => report(),
    }
}

fn run_generate(
    out: &Path,
    shape: &str,
    count: usize,
    dim: usize,
    seed: Option<u64>,
    max_value: f64,
    cfg: &EnforceCfg,
) -> Result<PathBuf> {
    anyhow::ensure!(
        max_value.is_finite() && max_value > 0.0,
        "max-value must be finite and positive"
    );
    let seed = seed.unwrap_or_else(rand::random);
    tracing::info!(shape, count, dim, seed, "generate");
    let mut rng = StdRng::seed_from_u64(seed);
    let front = generate_named(shape, count, dim, cfg, &mut rng)?;
    if front.len() < count {
        tracing::warn!(
            requested = count,
            written = front.len(),
            "only the non-dominated points will be written"
        );
    }

    let points = front.points.scaled(max_value);
    let label = front.label();
    let path = output::data_path(out, &label, dim, points.len());
    output::write_points(&path, &points)?;

    let params = GenerateParams {
        shape,
        dim,
        requested: count,
        written: points.len(),
        seed,
        max_value,
        full_check: cfg.check == CheckPolicy::Full,
        prune: cfg.on_dominated == DominatedPolicy::Prune,
        attempts: front.attempts,
    };
    let sidecar = provenance::write_sidecar(&path, serde_json::to_value(&params)?)?;
    tracing::info!(
        path = %path.display(),
        sidecar = %sidecar.display(),
        attempts = front.attempts,
        "wrote front"
    );
    Ok(path)
}

fn check_file(input: &Path, tolerance: f64) -> Result<()> {
    let points = output::read_points(input)?;
    let repeated = count_duplicates(&points, tolerance);
    let algorithm = Algorithm::for_size(points.len(), MATRIX_THRESHOLD);
    let verdict = check(&points, algorithm, DuplicatePolicy::KeepFirst);
    let summary = serde_json::json!({
        "input": input.to_string_lossy(),
        "points": points.len(),
        "dim": points.dim(),
        "repeated": repeated,
        "dominated": verdict.dominated.len(),
        "non_dominated": verdict.non_dominated.len(),
        "clean": repeated == 0 && verdict.is_clean(),
    });
    println!("{}", serde_json::to_string_pretty(&summary)?);
    Ok(())
}

fn report() -> Result<()> {
    let mut obj = provenance::header();
    obj["params"] = serde_json::json!({});
    obj["outputs"] = serde_json::json!([]);
    println!("{}", serde_json::to_string_pretty(&obj)?);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn generate_writes_scaled_front_and_sidecar() {
        let dir = tempdir().unwrap();
        let cfg = EnforceCfg::default();
        let path = run_generate(dir.path(), "linear", 5, 2, Some(1), 10.0, &cfg).unwrap();
        assert_eq!(path, dir.path().join("linear").join("linear.2d.5.dat"));
        let back = output::read_points(&path).unwrap();
        assert_eq!(back.len(), 5);
        for p in &back {
            assert!((p[0] + p[1] - 10.0).abs() < 1e-9);
        }
        let sidecar = dir.path().join("linear").join("linear.2d.5.provenance.json");
        let doc: serde_json::Value = serde_json::from_slice(&fs::read(sidecar).unwrap()).unwrap();
        assert_eq!(doc["params"]["seed"], 1);
        assert_eq!(doc["params"]["written"], 5);
        assert_eq!(doc["params"]["shape"], "linear");
        assert!(doc.get("inputs").is_none());
    }

    #[test]
    fn four_dimensional_cliff_uses_its_own_label() {
        let dir = tempdir().unwrap();
        let cfg = EnforceCfg::default();
        let path = run_generate(dir.path(), "cliff", 8, 4, Some(2), 1.0, &cfg).unwrap();
        assert!(path.ends_with("cliffFour/cliffFour.4d.8.dat"));
    }

    #[test]
    fn invalid_request_writes_nothing() {
        let dir = tempdir().unwrap();
        let cfg = EnforceCfg::default();
        let err = run_generate(dir.path(), "wave-3", 8, 3, Some(2), 1.0, &cfg).unwrap_err();
        assert!(err.downcast_ref::<FrontError>().is_some());
        assert_eq!(fs::read_dir(dir.path()).unwrap().count(), 0);
    }

    #[test]
    fn cli_flags_parse() {
        let cmd = Cmd::try_parse_from([
            "ndfront", "generate", "--out", "sets", "--dim", "2", "--count", "10", "--shape",
            "wave-2", "--full-check", "--prune",
        ])
        .unwrap();
        assert!(matches!(cmd.action, Action::Generate { prune: true, .. }));
        let prune_alone = Cmd::try_parse_from([
            "ndfront", "generate", "--out", "o", "--dim", "2", "--count", "1", "--shape", "linear",
            "--prune",
        ]);
        assert!(prune_alone.is_err());
    }
}
