use clap::{Args, Parser, Subcommand, ValueEnum};
use clap_complete::Shell;
use declarative::ResourceState;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "flatctl")]
#[command(author = "Alberto Cavalcante")]
#[command(version)]
#[command(about = "Declaratively manage a flatpak remote and application", long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Verbosity level
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress non-essential output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// flatpak executable to run
    #[arg(long, global = true, env = "FLATCTL_FLATPAK", default_value = "flatpak")]
    pub flatpak: String,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Converge the remote and application to the desired state
    Apply(ApplyArgs),

    /// Show current vs desired state without changing anything
    Status(TargetArgs),

    /// Print the derived remote alias and application id
    Keys(KeysArgs),

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

// ============================================================================
// Targets
// ============================================================================

/// What to manage. Flags override values from `--args-file`.
#[derive(Args, Clone, Default)]
pub struct TargetArgs {
    /// Application: URL to a .flatpakref file or a reverse-DNS id
    #[arg(short, long)]
    pub name: Option<String>,

    /// Remote: URL to a .flatpakrepo file or a bare alias
    #[arg(short, long)]
    pub remote: Option<String>,

    /// Desired state for both
    #[arg(short, long, value_enum)]
    pub state: Option<StateArg>,

    /// Load parameters from a JSON or TOML module arguments file
    #[arg(long, value_name = "PATH")]
    pub args_file: Option<PathBuf>,
}

#[derive(Args)]
pub struct ApplyArgs {
    #[command(flatten)]
    pub target: TargetArgs,

    /// Report whether anything would change without changing it
    #[arg(long, alias = "dry-run")]
    pub check: bool,

    /// Emit a single JSON result object on stdout
    #[arg(long)]
    pub json: bool,
}

#[derive(Args)]
pub struct KeysArgs {
    /// Application reference
    #[arg(short, long)]
    pub name: Option<String>,

    /// Remote reference
    #[arg(short, long)]
    pub remote: Option<String>,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum StateArg {
    Present,
    Absent,
}

impl From<StateArg> for ResourceState {
    fn from(arg: StateArg) -> Self {
        match arg {
            StateArg::Present => ResourceState::Present,
            StateArg::Absent => ResourceState::Absent,
        }
    }
}
