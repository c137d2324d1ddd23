use std::error::Error;
use std::path::PathBuf;
use std::process;

use clap::{ArgAction, Parser, ValueEnum};
use log::info;

use spire_obs::{
    ObservationEncoder, Snapshot, SnapshotFormat, VisualOptions, bounds, encode_map, render_map,
    render_observation_with_options, synthetic,
};

/// What to print for the loaded snapshot.
#[derive(Clone, Copy, Debug, ValueEnum)]
enum Output {
    /// Raw observation vector, one line of comma separated integers
    Observation,
    /// Per-dimension maxima of the observation vector
    Bounds,
    /// Map bit vector
    Map,
    /// Human readable rendering of the observation and map
    Summary,
}

#[derive(Parser, Debug)]
#[command(
    name = "spire-encode",
    about = "Encode a run snapshot into the agent observation vector."
)]
struct Args {
    /// Snapshot file (JSON or bincode)
    input: Option<PathBuf>,

    /// Snapshot format (inferred from the file extension when omitted)
    #[arg(long = "format", value_enum)]
    format: Option<SnapshotFormat>,

    /// Encode a synthetic snapshot generated from this seed instead of a file
    #[arg(short = 's', long = "seed", conflicts_with = "input")]
    seed: Option<u64>,

    /// What to print
    #[arg(short = 'o', long = "output", value_enum, default_value_t = Output::Summary)]
    output: Output,

    /// Include all-zero battle segments and bounds in the summary
    #[arg(long = "verbose", action = ArgAction::SetTrue)]
    verbose: bool,

    /// Write the snapshot that was encoded to this path (format from extension)
    #[arg(long = "save")]
    save: Option<PathBuf>,
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    let args = Args::parse();
    if let Err(err) = run(args) {
        eprintln!("Error: {err}");
        process::exit(1);
    }
}

fn run(args: Args) -> Result<(), Box<dyn Error>> {
    let snapshot = match (&args.input, args.seed) {
        (Some(path), _) => Snapshot::load(path, args.format)?,
        (None, Some(seed)) => {
            info!("generating synthetic snapshot from seed {seed}");
            synthetic::snapshot(seed)
        }
        (None, None) => return Err("provide a snapshot file or --seed".into()),
    };

    if let Some(path) = &args.save {
        snapshot.save(path, None)?;
        info!("snapshot saved -> {}", path.display());
    }

    let encoder = ObservationEncoder::global();
    match args.output {
        Output::Observation => {
            let observation = encoder.encode(&snapshot.run, snapshot.battle.as_ref())?;
            println!("{}", join(&observation));
        }
        Output::Bounds => println!("{}", join(&bounds())),
        Output::Map => {
            let map = snapshot.map.as_ref().ok_or("snapshot has no map")?;
            println!("{}", join(&encode_map(map)));
        }
        Output::Summary => {
            let observation = encoder.encode(&snapshot.run, snapshot.battle.as_ref())?;
            let options = VisualOptions {
                show_empty_segments: args.verbose,
                show_bounds: args.verbose,
            };
            println!(
                "Floor {} (act {}), screen {:?}, outcome {:?}",
                snapshot.run.floor_num,
                snapshot.run.act,
                snapshot.run.screen_state,
                snapshot.run.outcome
            );
            print!("{}", render_observation_with_options(encoder, &observation, options));
            if let Some(map) = &snapshot.map {
                println!("\nMap:");
                print!("{}", render_map(map));
            }
        }
    }
    Ok(())
}

fn join<T: ToString>(values: &[T]) -> String {
    values
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(",")
}
