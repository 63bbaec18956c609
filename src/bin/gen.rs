use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;

use fido_knownapps::{codegen, curated};

/// Regenerate the checked-in Relying Party table from the curated list.
#[derive(clap::Parser, Debug)]
struct Args {
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
    /// Curated list to read.
    #[arg(long, default_value = "data/apps.json")]
    apps: PathBuf,
    /// Generated table module to write.
    #[arg(long, default_value = "src/data.rs")]
    out: PathBuf,
    /// Verify that the generated file is current instead of writing it.
    #[arg(long)]
    check: bool,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    use tracing_subscriber::EnvFilter;
    let level = match args.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(level))
        .init();

    let list = curated::load(&args.apps)
        .with_context(|| format!("loading {}", args.apps.display()))?;
    let keys = list.resolve().context("curated list is invalid")?;
    tracing::info!(apps = list.apps.len(), keys = keys.len(), "Curated list resolved");
    for key in &keys {
        tracing::debug!(
            app = key.app_name,
            kind = key.kind.as_str(),
            hash = hex::encode(key.rp_id_hash),
            "Resolved key"
        );
    }

    let rendered = codegen::render(&keys);
    if args.check {
        let current = std::fs::read_to_string(&args.out)
            .with_context(|| format!("reading {}", args.out.display()))?;
        if current != rendered {
            anyhow::bail!("{} is stale; rerun knownapps-gen", args.out.display());
        }
        println!("{} is current ({} keys)", args.out.display(), keys.len());
    } else {
        std::fs::write(&args.out, &rendered)
            .with_context(|| format!("writing {}", args.out.display()))?;
        println!("Wrote {} keys to {}", keys.len(), args.out.display());
    }
    Ok(())
}
