use anyhow::Result;
use clap::{Parser, Subcommand};
use rand::rngs::StdRng;
use rand::{RngCore, SeedableRng};
use serde::Serialize;
use std::path::{Path, PathBuf};
use tracing_subscriber::fmt::SubscriberBuilder;

mod points;
mod provenance;

use points::{read_points, Columns};
use provenance::{current_git_rev, write_sidecar, Payload};

/// Circle as written to JSON outputs.
#[derive(Serialize)]
struct CircleRow {
    x: f64,
    y: f64,
    r: f64,
}

#[derive(Parser)]
#[command(name = "cli")]
#[command(about = "Minimum enclosing circles and compactness for point tables")]
struct Cmd {
    /// Seed for the point permutation; drawn from entropy when omitted
    #[arg(long, global = true)]
    seed: Option<u64>,

    #[command(subcommand)]
    action: Action,
}

#[derive(Subcommand)]
enum Action {
    /// Smallest circle enclosing every row of a CSV/Parquet point table
    Circle {
        #[arg(long)]
        input: PathBuf,
        #[arg(long, default_value = "x")]
        x_col: String,
        #[arg(long, default_value = "y")]
        y_col: String,
        /// Also write the result JSON here (plus a provenance sidecar)
        #[arg(long)]
        out: Option<PathBuf>,
    },
    /// Area over enclosing-circle area for a polygon ring stored row by row
    Compactness {
        #[arg(long)]
        input: PathBuf,
        #[arg(long, default_value = "x")]
        x_col: String,
        #[arg(long, default_value = "y")]
        y_col: String,
        #[arg(long)]
        out: Option<PathBuf>,
    },
    /// Print a small provenance JSON block
    Report,
}

fn main() -> Result<()> {
    SubscriberBuilder::default().with_target(false).init();
    let cmd = Cmd::parse();
    let seed = cmd.seed.unwrap_or_else(|| StdRng::from_entropy().next_u64());
    match cmd.action {
        Action::Circle {
            input,
            x_col,
            y_col,
            out,
        } => {
            let doc = circle(&input, &Columns { x: x_col, y: y_col }, seed)?;
            emit(doc, out, "circle", &input, seed)
        }
        Action::Compactness {
            input,
            x_col,
            y_col,
            out,
        } => {
            let doc = compactness(&input, &Columns { x: x_col, y: y_col }, seed)?;
            emit(doc, out, "compactness", &input, seed)
        }
        Action::Report => report(),
    }
}

fn circle(input: &Path, cols: &Columns, seed: u64) -> Result<serde_json::Value> {
    let pts = read_points(input, cols)?;
    tracing::info!(input = %input.display(), points = pts.len(), seed, "circle");
    let mut rng = StdRng::seed_from_u64(seed);
    let circle = mincircle::circle::minimum_enclosing_circle(&pts, &mut rng);
    match &circle {
        Some(c) => tracing::info!(x = c.center.x, y = c.center.y, r = c.radius, "enclosing_circle"),
        None => tracing::info!("empty input, no circle"),
    }
    Ok(serde_json::json!({
        "circle": circle.map(|c| CircleRow {
            x: c.center.x,
            y: c.center.y,
            r: c.radius,
        }),
        "points": pts.len(),
        "seed": seed,
        "code_rev": current_git_rev(),
    }))
}

fn compactness(input: &Path, cols: &Columns, seed: u64) -> Result<serde_json::Value> {
    let ring = read_points(input, cols)?;
    tracing::info!(input = %input.display(), vertices = ring.len(), seed, "compactness");
    let mut rng = StdRng::seed_from_u64(seed);
    let index = mincircle::circle::compactness_index(&ring, &mut rng)?;
    tracing::info!(index, "compactness_index");
    Ok(serde_json::json!({
        "compactness": index,
        "vertices": ring.len(),
        "seed": seed,
        "code_rev": current_git_rev(),
    }))
}

fn emit(
    doc: serde_json::Value,
    out: Option<PathBuf>,
    algo: &str,
    input: &Path,
    seed: u64,
) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(&doc)?);
    if let Some(out) = out {
        if let Some(parent) = out.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }
        std::fs::write(&out, serde_json::to_vec_pretty(&doc)?)?;
        let payload = Payload::new(serde_json::json!({
            "algo": algo,
            "input": input.to_string_lossy(),
            "seed": seed,
        }));
        let prov = write_sidecar(&out, payload)?;
        tracing::info!(out = %out.display(), provenance = %prov.display(), "wrote");
    }
    Ok(())
}

fn report() -> Result<()> {
    let obj = serde_json::json!({
        "code_rev": current_git_rev(),
        "version": mincircle::VERSION,
        "contain_eps": mincircle::circle::CONTAIN_EPS,
        "params": {},
        "outputs": []
    });
    println!("{}", serde_json::to_string_pretty(&obj)?);
    Ok(())
}
