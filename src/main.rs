use anyhow::Result;
use clap::Parser;
use std::io;
use std::path::PathBuf;
use video_library::{PlayerConfig, Shell};

#[derive(Parser, Debug)]
#[command(name = "video-library")]
#[command(about = "Interactive in-memory video player", long_about = None)]
struct Args {
    /// Path to the videos file (one `title | id | tags` entry per line)
    #[arg(long, default_value = "data/videos.txt")]
    videos: String,

    /// Seed for PLAY_RANDOM, for reproducible sessions
    #[arg(long)]
    seed: Option<u64>,

    /// Prompt shown before each command
    #[arg(long, default_value = "> ")]
    prompt: String,

    /// Verbose logging
    #[arg(short = 'v', long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    // Initialize logging
    let log_level = if args.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level)).init();

    // Expand ~ in paths
    let videos_path = shellexpand::tilde(&args.videos);

    let mut config = PlayerConfig::new(PathBuf::from(videos_path.as_ref())).with_prompt(args.prompt);
    if let Some(seed) = args.seed {
        log::info!("Random play seeded with {}", seed);
        config = config.with_seed(seed);
    }

    let manager = video_library::open_library(&config)?;
    log::info!("Library ready: {} videos", manager.number_of_videos());

    let stdin = io::stdin();
    let mut shell = Shell::new(manager, stdin.lock(), io::stdout()).with_prompt(config.prompt);
    shell.run()
}
