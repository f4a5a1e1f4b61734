use clap::Parser;
use glam::DVec3;
use leafdrift_config::{load_config, Config};
use leafdrift_core::{DirectionalWindField, FluidSample, GustingWind, LeafParticle, Phase};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::path::PathBuf;
use std::process;
use std::thread::sleep;
use std::time::{Duration, Instant};

mod world;
use world::{FlatWorld, FluidPool, VortexField};

#[derive(Parser, Debug)]
#[command(author, version, about = "Headless falling-leaf simulation", long_about = None)]
struct Args {
    /// Path to the simulation configuration file (defaults apply when omitted)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Number of ticks to simulate
    #[arg(short, long, default_value_t = 600)]
    ticks: u64,

    /// RNG seed for reproducible runs
    #[arg(long)]
    seed: Option<u64>,

    /// Swirl the wind around the origin via a directional wind field
    #[arg(long)]
    vortex: bool,

    /// Print a JSON snapshot of every leaf each tick
    #[arg(long)]
    emit_state: bool,

    /// Pace ticks to the configured tick rate instead of free-running
    #[arg(long)]
    realtime: bool,
}

fn main() {
    env_logger::init();
    let args = Args::parse();

    let config = match &args.config {
        Some(path) => match load_config(path) {
            Ok(config) => config,
            Err(e) => {
                eprintln!("failed to load config: {e}");
                process::exit(1);
            }
        },
        None => Config::default(),
    };

    let mut rng = match args.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    let mut world = demo_world();
    let mut wind = GustingWind::new(config.wind.base_strength, config.wind.gust_strength);
    let vortex = VortexField { strength: 1.0 };

    let mut leaves = spawn_leaves(&mut rng, &config);
    log::info!(
        "spawned {} leaves over radius {} at height {}",
        leaves.len(),
        config.spawn.radius,
        config.spawn.height
    );

    let tick_duration = Duration::from_secs_f64(1.0 / f64::from(config.tick_rate));

    for tick in 1..=args.ticks {
        let tick_start = Instant::now();

        // ambient wind advances before any particle sees it
        wind.update(&mut rng);

        // the wind field integration is re-resolved every tick
        let field: Option<&dyn DirectionalWindField> = if args.vortex {
            Some(&vortex)
        } else {
            None
        };

        for leaf in &mut leaves {
            leaf.tick(&mut world, &wind, field);
        }
        leaves.retain(|leaf| !leaf.is_dead());

        if args.emit_state {
            let snapshots: Vec<_> = leaves.iter().map(LeafParticle::snapshot).collect();
            match serde_json::to_string(&snapshots) {
                Ok(line) => println!("{line}"),
                Err(e) => log::error!("failed to serialize state: {e}"),
            }
        }

        if tick % 100 == 0 {
            let stuck = leaves.iter().filter(|l| l.phase() == Phase::Stuck).count();
            let in_water = leaves.iter().filter(|l| l.phase() == Phase::InWater).count();
            log::info!(
                "tick {tick}: {} alive ({stuck} stuck, {in_water} in water), {} lava splashes",
                leaves.len(),
                world.emitted
            );
        }

        if leaves.is_empty() {
            log::info!("all leaves gone after {tick} ticks, {} lava splashes", world.emitted);
            break;
        }

        if args.realtime {
            let elapsed = tick_start.elapsed();
            if elapsed < tick_duration {
                sleep(tick_duration - elapsed);
            }
        }
    }
}

/// Flat ground with a still water pond and a small lava pocket.
fn demo_world() -> FlatWorld {
    FlatWorld::new(0.0)
        .with_pool(FluidPool {
            x_min: 4,
            x_max: 12,
            z_min: -12,
            z_max: -4,
            sample: FluidSample::still_water(0.8),
        })
        .with_pool(FluidPool {
            x_min: -12,
            x_max: -4,
            z_min: 4,
            z_max: 12,
            sample: FluidSample::lava(0.5),
        })
}

fn spawn_leaves(rng: &mut StdRng, config: &Config) -> Vec<LeafParticle> {
    (0..config.spawn.count)
        .map(|_| {
            // uniform over the spawn disc
            let angle = rng.gen_range(0.0..std::f64::consts::TAU);
            let distance = config.spawn.radius * rng.gen::<f64>().sqrt();
            let pos = DVec3::new(
                angle.cos() * distance,
                config.spawn.height,
                angle.sin() * distance,
            );

            // vary the tint slightly per leaf
            let shade = 0.9 + 0.2 * rng.gen::<f32>();
            let color = config.spawn.color.map(|c| (c * shade).min(1.0));

            LeafParticle::new(rng, pos, color, config.leaf_lifespan, config.leaf_size)
        })
        .collect()
}
