use ideal_gas::app::GasApp;
use ideal_gas::{PartnerSelection, SimulationConfig};

use anyhow::{Context, Result};
use clap::Parser;

use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(about = "2D ideal gas simulation with live speed histograms")]
struct Args {
    /// TOML file with simulation settings; defaults are used when omitted.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Number of particles to spawn.
    #[arg(long)]
    particles: Option<usize>,

    /// Seed for the initial particle layout.
    #[arg(long)]
    seed: Option<u64>,

    /// Number of histogram bins.
    #[arg(long)]
    bins: Option<usize>,

    /// How a particle picks its collision partner.
    #[arg(long, value_enum)]
    partner: Option<PartnerSelection>,
}

// load here to keep main clean
fn load_config(args: &Args) -> Result<SimulationConfig> {
    let mut config = SimulationConfig::load(args.config.as_deref())
        .with_context(|| format!("failed to load config {:?}", args.config))?;

    if let Some(particles) = args.particles {
        config.spawn.particle_count = particles;
    }
    if let Some(seed) = args.seed {
        config.spawn.seed = seed;
    }
    if let Some(bins) = args.bins {
        config.histogram.bins = bins;
    }
    if let Some(partner) = args.partner {
        config.engine.partner_selection = partner;
    }

    config.validate().context("invalid simulation settings")?;
    Ok(config)
}

fn main() -> Result<()> {
    env_logger::init();

    let args = Args::parse();
    let config = load_config(&args)?;
    log::debug!("{:?}", config);

    let native_options = eframe::NativeOptions {
        ..Default::default()
    };

    eframe::run_native(
        "Ideal Gas",
        native_options,
        Box::new(|_cc| Ok(Box::new(GasApp::new(config)))),
    )
    .map_err(|e| anyhow::anyhow!("failed to start the GUI: {e}"))
}
