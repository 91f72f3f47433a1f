//! Command-line and environment configuration.

use std::path::PathBuf;
use std::time::Duration;

use clap::{Parser, ValueEnum};
use rehearse_player::PlayerOptions;

/// Replay a conversation practice scene and report how each cut-in went.
#[derive(Parser, Debug)]
#[command(name = "rehearse", version)]
pub struct Args {
    /// Path to the scene file (JSON, or YAML with a .yaml/.yml extension)
    pub scene_file: PathBuf,

    /// Answer every cut-in automatically with its best choice
    #[arg(long, conflicts_with_all = ["auto_choices", "auto_random"])]
    pub auto: bool,

    /// Answer cut-ins from a {"cutin_id": "choice_id"} mapping file; unmapped cut-ins are asked interactively
    #[arg(long, value_name = "FILE", conflicts_with = "auto_random")]
    pub auto_choices: Option<PathBuf>,

    /// Answer every cut-in automatically with a random choice
    #[arg(long)]
    pub auto_random: bool,

    /// Seed for reproducible --auto-random draws; ignored by the other modes
    /// (random from the OS when omitted)
    #[arg(long, env = "REHEARSE_SEED")]
    pub seed: Option<u64>,

    /// Simulated answer latency of the automatic modes, in milliseconds
    #[arg(long, value_name = "MS", env = "REHEARSE_AUTO_DELAY_MS", default_value_t = 500)]
    pub auto_delay_ms: u64,

    /// Treat each cut-in's timer as a hard deadline (late answers count as no selection)
    #[arg(long, env = "REHEARSE_ENFORCE_TIMER")]
    pub enforce_timer: bool,

    /// Check the scene for authoring problems and exit without playing it
    #[arg(long)]
    pub check: bool,

    /// Format of diagnostics written to stderr
    #[arg(long, value_enum, env = "REHEARSE_LOG_FORMAT", default_value_t = LogFormat::Text)]
    pub log_format: LogFormat,
}

/// Diagnostics output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LogFormat {
    /// Human-readable lines.
    Text,
    /// One JSON object per event.
    Json,
}

/// Where cut-in answers come from when not typed by the learner.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AutoMode {
    /// Every cut-in is asked interactively.
    Off,
    /// Every cut-in is answered with its best choice.
    Best,
    /// Answers are read from a mapping file.
    Mapping(PathBuf),
    /// Answers are drawn at random.
    Random {
        /// Seed for reproducible draws.
        seed: Option<u64>,
    },
}

/// Resolved settings for one invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunConfig {
    /// The scene to load.
    pub scene_file: PathBuf,
    /// Automatic answering mode.
    pub auto: AutoMode,
    /// Player tunables.
    pub options: PlayerOptions,
    /// Only lint the scene.
    pub check_only: bool,
    /// Diagnostics format.
    pub log_format: LogFormat,
}

impl From<Args> for RunConfig {
    fn from(args: Args) -> Self {
        let auto = if args.auto {
            AutoMode::Best
        } else if let Some(path) = args.auto_choices {
            AutoMode::Mapping(path)
        } else if args.auto_random {
            AutoMode::Random { seed: args.seed }
        } else {
            AutoMode::Off
        };

        Self {
            scene_file: args.scene_file,
            auto,
            options: PlayerOptions {
                auto_delay: Duration::from_millis(args.auto_delay_ms),
                enforce_timer: args.enforce_timer,
            },
            check_only: args.check,
            log_format: args.log_format,
        }
    }
}
