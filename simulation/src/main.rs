//! super-collider - headless blob collision simulation

use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;
use rand::rngs::StdRng;
use rand::SeedableRng;
use simulation::{parse_script, BlobKind, CollisionHandler, Config, RunSummary, World};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(name = "super-collider", version, about = "Headless blob collision simulation")]
struct Args {
    /// TOML configuration file; defaults are used when it does not exist.
    #[arg(short, long, default_value = "collider.toml")]
    config: PathBuf,

    #[arg(long)]
    ticks: Option<u64>,

    #[arg(long)]
    seed: Option<u64>,

    /// Initial number of blobs.
    #[arg(long)]
    blobs: Option<usize>,

    #[arg(long, value_enum)]
    kind: Option<BlobKind>,

    #[arg(long, value_enum)]
    handler: Option<CollisionHandler>,

    /// Command keys applied before the first tick (f s r c d i b w).
    #[arg(long)]
    commands: Option<String>,

    /// Sleep for the tick delay between ticks.
    #[arg(long)]
    realtime: bool,

    /// Exact circle contact instead of the doubled-extent threshold.
    #[arg(long)]
    exact: bool,
}

impl Args {
    fn apply(&self, config: &mut Config) {
        if let Some(ticks) = self.ticks {
            config.run.ticks = ticks;
        }
        if self.seed.is_some() {
            config.run.seed = self.seed;
        }
        if let Some(blobs) = self.blobs {
            config.blobs.initial = blobs;
        }
        if let Some(kind) = self.kind {
            config.blobs.kind = kind;
        }
        if let Some(handler) = self.handler {
            config.run.handler = handler;
        }
        if let Some(commands) = &self.commands {
            config.run.commands = commands.clone();
        }
        config.run.realtime |= self.realtime;
        config.run.exact_contact |= self.exact;
    }
}

fn main() -> anyhow::Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    info!("super-collider v{}", env!("CARGO_PKG_VERSION"));

    let args = Args::parse();
    let mut config = Config::load(&args.config)?;
    args.apply(&mut config);
    info!(
        "Universe: {}x{}",
        config.universe.width, config.universe.height
    );
    info!("Blobs: {} {:?}", config.blobs.initial, config.blobs.kind);
    info!("Handler: {:?}", config.run.handler);

    let mut rng = match config.run.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    let mut world = World::new(&config)?;
    world.scatter(config.blobs.initial, &mut rng);
    for command in parse_script(&config.run.commands)? {
        world.apply(command, &mut rng);
    }

    let mut summary = RunSummary::starting_with(world.blobs().len());
    for _ in 0..config.run.ticks {
        let report = world.tick(&mut rng);
        summary.record(&report);
        if config.run.realtime {
            std::thread::sleep(Duration::from_millis(world.delay_ms()));
        }
    }

    let ever_collided = world.blobs().iter().filter(|blob| blob.collided).count();
    info!(
        ticks = summary.ticks,
        skipped = summary.skipped_ticks,
        removed = summary.removed,
        peak_colliders = summary.peak_colliders,
        population = summary.final_population,
        ever_collided,
        "Simulation finished"
    );
    Ok(())
}
