//! carol CLI - decode MML or play the ornament on the terminal

use std::fs;
use std::path::{Path, PathBuf};
use std::process;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use carol::player::{ConsoleRing, ConsoleTone, FixedSwitch, Hardware, Player, SystemClock};
use carol::{decode, get_song, list_songs, MmlError, OrnamentConfig};

#[derive(Parser)]
#[command(name = "carol")]
#[command(about = "Music Macro Language ornament player", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the events an MML file or embedded song decodes to
    Decode {
        /// MML source file
        #[arg(required_unless_present = "song", conflicts_with = "song")]
        input: Option<PathBuf>,

        /// Embedded song name (see `carol list`)
        #[arg(long)]
        song: Option<String>,

        /// One JSON object per line instead of a table
        #[arg(long)]
        json: bool,
    },

    /// Simulate the ornament: random songs, logged tones, lights on stderr
    Play {
        /// YAML configuration file
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Only play these songs (repeatable)
        #[arg(long = "song")]
        songs: Vec<String>,

        /// Number of songs to play (default: forever)
        #[arg(short, long)]
        rounds: Option<usize>,

        /// Random seed for song choice and lights
        #[arg(long)]
        seed: Option<u64>,

        /// Playback speed multiplier
        #[arg(long, default_value = "1.0")]
        speed: f64,

        /// Do not sleep between events
        #[arg(long)]
        no_sleep: bool,

        /// Flip the switch off (lights only)
        #[arg(long)]
        off: bool,
    },

    /// List embedded songs
    List,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Decode { input, song, json } => run_decode(input, song, json),
        Commands::Play {
            config,
            songs,
            rounds,
            seed,
            speed,
            no_sleep,
            off,
        } => run_play(config, songs, rounds, seed, if no_sleep { 0.0 } else { speed }, off),
        Commands::List => {
            for name in list_songs() {
                println!("{}", name);
            }
            Ok(())
        }
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

fn read_file(path: &Path) -> Result<String, String> {
    fs::read_to_string(path).map_err(|e| format!("reading '{}': {}", path.display(), e))
}

fn run_decode(input: Option<PathBuf>, song: Option<String>, json: bool) -> Result<(), String> {
    let source = match (input, song) {
        (_, Some(name)) => get_song(&name)
            .ok_or_else(|| MmlError::UnknownSong(name).to_string())?
            .mml
            .to_string(),
        (Some(path), None) => read_file(&path)?,
        (None, None) => return Err("no input given".to_string()),
    };

    let mut elapsed = 0.0;
    for event in decode(&source) {
        let event = event.map_err(|e| e.to_string())?;
        if json {
            let line = serde_json::to_string(&event).map_err(|e| e.to_string())?;
            println!("{}", line);
        } else if event.is_rest() {
            println!("{:>9.3}s  rest        {:>6.3}s", elapsed, event.duration);
        } else {
            println!(
                "{:>9.3}s  {:>8.2}Hz  {:>6.3}s  vol {}",
                elapsed, event.frequency, event.duration, event.volume
            );
        }
        elapsed += event.duration;
    }
    Ok(())
}

fn run_play(
    config_path: Option<PathBuf>,
    songs: Vec<String>,
    rounds: Option<usize>,
    seed: Option<u64>,
    speed: f64,
    off: bool,
) -> Result<(), String> {
    let mut config = match config_path {
        Some(path) => OrnamentConfig::from_yaml(&read_file(&path)?).map_err(|e| e.to_string())?,
        None => OrnamentConfig::default(),
    };
    if !songs.is_empty() {
        config.songs = songs;
    }
    if rounds.is_some() {
        config.rounds = rounds;
    }
    if seed.is_some() {
        config.seed = seed;
    }

    let hardware = Hardware {
        tone: ConsoleTone::default(),
        ring: ConsoleRing::with_echo(config.pixel_count),
        switch: FixedSwitch(!off),
        clock: SystemClock { speed },
    };
    let mut player = Player::from_config(hardware, &config).map_err(|e| e.to_string())?;
    let playlist = config.selected_songs().map_err(|e| e.to_string())?;
    let result = player.run(&playlist, config.rounds);
    eprintln!();
    result.map_err(|e| e.to_string())
}
