use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use enclosed::EnclosedShape;
use std::path::Path;
use tracing_subscriber::fmt::SubscriberBuilder;

mod input;
mod provenance;
mod script;

use script::{BoxRecord, Report};

#[derive(Parser)]
#[command(name = "shape")]
#[command(about = "Inspect enclosed 2D shapes and replay transform/query scripts")]
struct Cmd {
    #[command(subcommand)]
    action: Action,
}

#[derive(Subcommand)]
enum Action {
    /// Print the closed path and bounding box of a shape file (.csv or .json)
    Inspect {
        #[arg(long)]
        input: String,
    },
    /// Replay a JSON step script against a shape and write a report
    Run {
        #[arg(long)]
        input: String,
        #[arg(long)]
        script: String,
        #[arg(long)]
        out: String,
    },
    /// Print a small provenance JSON block
    Report,
}

fn main() -> Result<()> {
    SubscriberBuilder::default().with_target(false).init();
    let cmd = Cmd::parse();
    match cmd.action {
        Action::Inspect { input } => inspect(input),
        Action::Run { input, script, out } => run(input, script, out),
        Action::Report => report(),
    }
}

fn load_shape(input: &str) -> Result<EnclosedShape> {
    let points = input::load_path(input)?;
    EnclosedShape::new(&points).with_context(|| format!("building shape from {input}"))
}

fn inspect(input: String) -> Result<()> {
    tracing::info!(input, "inspect");
    let shape = load_shape(&input)?;
    let doc = serde_json::json!({
        "path": shape.path().iter().map(|p| [p.x, p.y]).collect::<Vec<_>>(),
        "bounding_box": BoxRecord::from(shape.bounding_box()),
    });
    println!("{}", serde_json::to_string_pretty(&doc)?);
    Ok(())
}

fn run(input: String, script_path: String, out: String) -> Result<()> {
    tracing::info!(input, script = script_path, out, "run");
    let mut shape = load_shape(&input)?;
    let bytes = std::fs::read(&script_path).with_context(|| format!("reading {script_path}"))?;
    let steps = script::parse_script(&bytes)?;
    let outcomes = script::replay(&mut shape, &steps)?;
    let report = Report::snapshot(&shape, outcomes);
    tracing::info!(steps = steps.len(), points = report.path.len(), "replayed");

    let out_path = Path::new(&out);
    if let Some(parent) = out_path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }
    std::fs::write(out_path, serde_json::to_vec_pretty(&report)?)
        .with_context(|| format!("writing {out}"))?;

    let payload = provenance::Payload::new(serde_json::json!({
        "script": script_path,
        "steps": steps.len(),
    }))
    .with_input(input);
    let sidecar = provenance::write_sidecar(out_path, payload)?;
    tracing::info!(sidecar = %sidecar.display(), "wrote provenance");
    Ok(())
}

fn report() -> Result<()> {
    let doc = provenance::document(serde_json::json!({}), &[], &[]);
    println!("{}", serde_json::to_string_pretty(&doc)?);
    Ok(())
}
