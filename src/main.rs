//! PhysiLab CLI - thin front end over the laboratory service
//!
//! Builds the candidate record from arguments, invokes exactly one service
//! operation, and renders either the completed record or the error message.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use physilab::experiment::{
    FreeFallExperiment, ProjectileMotionExperiment, UniformMotionExperiment, STANDARD_GRAVITY,
};
use physilab::storage::JsonStorage;
use physilab::Laboratory;

#[derive(Parser)]
#[command(name = "physilab", version, about = "Physics experiment laboratory")]
struct Cli {
    /// Path to the experiment store file
    #[arg(
        long,
        global = true,
        env = "PHYSILAB_DATA",
        default_value = "data/experiments.json"
    )]
    data_path: PathBuf,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Register a uniform rectilinear motion experiment.
    ///
    /// Exactly one of --velocity, --time and --distance may be omitted;
    /// the laboratory computes the missing quantity.
    Mru {
        /// Unique experiment id
        #[arg(long)]
        id: i64,
        /// Descriptive name
        #[arg(long)]
        name: String,
        /// Velocity in m/s
        #[arg(long)]
        velocity: Option<f64>,
        /// Time in seconds
        #[arg(long)]
        time: Option<f64>,
        /// Distance in metres
        #[arg(long)]
        distance: Option<f64>,
    },
    /// Register a projectile motion experiment
    Projectile {
        /// Unique experiment id
        #[arg(long)]
        id: i64,
        /// Descriptive name
        #[arg(long)]
        name: String,
        /// Launch velocity in m/s
        #[arg(long)]
        velocity: f64,
        /// Launch angle in degrees
        #[arg(long)]
        angle: f64,
        /// Gravitational acceleration in m/s²
        #[arg(long, default_value_t = STANDARD_GRAVITY)]
        gravity: f64,
    },
    /// Register a free fall experiment
    FreeFall {
        /// Unique experiment id
        #[arg(long)]
        id: i64,
        /// Descriptive name
        #[arg(long)]
        name: String,
        /// Drop height in metres
        #[arg(long)]
        height: f64,
        /// Initial downward velocity in m/s
        #[arg(long, default_value_t = 0.0)]
        velocity: f64,
        /// Gravitational acceleration in m/s²
        #[arg(long, default_value_t = STANDARD_GRAVITY)]
        gravity: f64,
    },
    /// List all stored experiments
    List,
    /// Delete an experiment by id
    Delete {
        /// Id of the experiment to delete
        id: i64,
    },
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();
    if let Err(e) = run(cli) {
        eprintln!("error: {e}");
        return ExitCode::FAILURE;
    }
    ExitCode::SUCCESS
}

fn run(cli: Cli) -> anyhow::Result<()> {
    // Composition root: one storage, one laboratory, passed explicitly.
    let lab = Laboratory::new(JsonStorage::new(cli.data_path));

    match cli.command {
        Command::Mru {
            id,
            name,
            velocity,
            time,
            distance,
        } => {
            let mut builder = UniformMotionExperiment::builder(id, name);
            if let Some(v) = velocity {
                builder = builder.velocity(v);
            }
            if let Some(t) = time {
                builder = builder.time(t);
            }
            if let Some(d) = distance {
                builder = builder.distance(d);
            }

            let completed = lab.register_uniform_motion(builder.build())?;
            println!("experiment {} registered", completed.id());
            println!(
                "  v = {:?} m/s, t = {:?} s, d = {:?} m",
                completed.velocity(),
                completed.time(),
                completed.distance()
            );
        }
        Command::Projectile {
            id,
            name,
            velocity,
            angle,
            gravity,
        } => {
            let candidate = ProjectileMotionExperiment::builder(id, name, velocity, angle)
                .gravity(gravity)
                .build();
            let completed = lab.register_projectile(candidate)?;
            println!("experiment {} registered", completed.id());
            println!(
                "  range = {:.3} m, max height = {:.3} m, flight time = {:.3} s",
                completed.max_range(),
                completed.max_height(),
                completed.flight_time()
            );
        }
        Command::FreeFall {
            id,
            name,
            height,
            velocity,
            gravity,
        } => {
            let candidate = FreeFallExperiment::builder(id, name, height)
                .initial_velocity(velocity)
                .gravity(gravity)
                .build();
            let completed = lab.register_free_fall(candidate)?;
            println!("experiment {} registered", completed.id());
        }
        Command::List => {
            let experiments = lab.list()?;
            if experiments.is_empty() {
                println!("no experiments registered yet");
            } else {
                println!(
                    "{:<6} {:<24} {:<18} {:<24} {}",
                    "ID", "Name", "Kind", "Result", "Created"
                );
                for experiment in &experiments {
                    println!(
                        "{:<6} {:<24} {:<18} {:<24} {}",
                        experiment.id(),
                        experiment.name(),
                        experiment.kind(),
                        experiment.result_summary(),
                        experiment.created_at().format("%Y-%m-%d %H:%M")
                    );
                }
            }
        }
        Command::Delete { id } => {
            lab.delete(id)?;
            println!("experiment {id} deleted");
        }
    }

    Ok(())
}
