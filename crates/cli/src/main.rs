use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use gauge::api::{evaluate, Domain, FuzzyInterval, GaugeLayout};
use serde_json::json;
use std::path::{Path, PathBuf};
use tracing_subscriber::fmt::SubscriberBuilder;

mod batch;
mod input;
mod provenance;
mod report;

use input::{parse_json, DomainSpec, IntervalSpec, DEFAULT_DOMAIN, DEFAULT_NORM, DEFAULT_VALUE};

#[derive(Parser)]
#[command(name = "gauge")]
#[command(about = "Evaluate fuzzy gauges: angles, zones and compatibility verdicts")]
struct Cmd {
    #[command(subcommand)]
    action: Action,
}

#[derive(Subcommand)]
enum Action {
    /// Evaluate one reading and print a JSON report
    Eval {
        #[arg(long, default_value = DEFAULT_DOMAIN)]
        domain: String,
        #[arg(long, default_value = DEFAULT_NORM)]
        norm: String,
        #[arg(long, default_value = DEFAULT_VALUE)]
        value: String,
        /// Label shown in the gauge footer
        #[arg(long, default_value = "UNNAMED")]
        name: String,
        /// Needle radius; defaults to the layout's needle length
        #[arg(long)]
        radius: Option<f64>,
        /// Displayed side of the gauge drawing
        #[arg(long, default_value_t = 120.0)]
        size: f64,
    },
    /// Classify every row of a CSV (columns d1,d2,dt1,dt2) against one norm
    Batch {
        #[arg(long, default_value = DEFAULT_DOMAIN)]
        domain: String,
        #[arg(long, default_value = DEFAULT_NORM)]
        norm: String,
        #[arg(long)]
        input: PathBuf,
        #[arg(long)]
        out: PathBuf,
    },
    /// Print a small provenance JSON block
    Report,
}

fn main() -> Result<()> {
    SubscriberBuilder::default()
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
    let cmd = Cmd::parse();
    match cmd.action {
        Action::Eval {
            domain,
            norm,
            value,
            name,
            radius,
            size,
        } => eval(&domain, &norm, &value, &name, radius, size),
        Action::Batch {
            domain,
            norm,
            input,
            out,
        } => run_batch(&domain, &norm, &input, &out),
        Action::Report => report(),
    }
}

fn shared_inputs(domain: &str, norm: &str) -> Result<(Domain, FuzzyInterval)> {
    let domain = parse_json::<DomainSpec>("domain", domain)?.to_domain()?;
    let norm = parse_json::<IntervalSpec>("norm", norm)?.to_interval();
    norm.validate().context("norm")?;
    Ok((domain, norm))
}

fn eval(
    domain: &str,
    norm: &str,
    value: &str,
    name: &str,
    radius: Option<f64>,
    size: f64,
) -> Result<()> {
    if !(size.is_finite() && size > 0.0) {
        anyhow::bail!("size must be a positive number, got {size}");
    }
    let (domain, norm) = shared_inputs(domain, norm)?;
    let value = parse_json::<IntervalSpec>("value", value)?.to_interval();
    let reading = evaluate(&domain, &norm, &value).context("value")?;
    tracing::info!(name, verdict = %reading.verdict, mid = reading.value.kernel_mid, "eval");

    let layout = GaugeLayout::default().with_size(size);
    let r = radius.unwrap_or_else(|| layout.scaled(layout.needle_radius));
    let doc = report::reading(name, &reading, &layout, r);
    println!("{}", serde_json::to_string_pretty(&doc)?);
    Ok(())
}

fn run_batch(domain: &str, norm: &str, input: &Path, out: &Path) -> Result<()> {
    let (domain_v, norm_v) = shared_inputs(domain, norm)?;
    tracing::info!(input = %input.display(), out = %out.display(), "batch");

    let rows = batch::read_rows(input)?;
    let results = batch::classify_rows(&domain_v, &norm_v, &rows);
    let summary = batch::summarize(&results);
    tracing::info!(rows = results.len(), summary = %summary, "batch_done");

    if let Some(parent) = out.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("creating {}", parent.display()))?;
        }
    }
    std::fs::write(out, serde_json::to_vec_pretty(&results)?)
        .with_context(|| format!("writing {}", out.display()))?;

    let payload = provenance::Payload::new(input, domain_v, norm_v, summary);
    let prov = provenance::write_sidecar(out, payload)?;
    tracing::info!(provenance = %prov.display(), "wrote");
    Ok(())
}

fn report() -> Result<()> {
    let obj = json!({
        "code_rev": provenance::current_git_rev(),
        "version": gauge::VERSION,
        "params": {},
        "outputs": []
    });
    println!("{}", serde_json::to_string_pretty(&obj)?);
    Ok(())
}
