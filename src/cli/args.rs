use std::path::PathBuf;

use clap::{Parser, Subcommand};
use clap_complete::Shell;

#[derive(Parser)]
#[command(name = "pomw")]
#[command(about = "A Timewarrior Pomodoro timer for the terminal")]
#[command(long_about = "pomw - a Timewarrior Pomodoro timer

Alternates timed focus and break intervals, keeps Timewarrior's clock in
step with them, and plays a cue at each phase transition.

KEYS:
  c    continue - start or resume a focus session
  p    pause the countdown and stop Timewarrior tracking
  e    exit

Sending SIGUSR1 (e.g. from a cron job) pauses the timer and queues a
fresh session resolved against Timewarrior's current state.

DURATIONS take the form \"25m\", \"1h30m\", \"90s\"; a bare number means
minutes.")]
#[command(version, propagate_version = true)]
pub struct Cli {
    /// Focus interval length; overrides the config file
    #[arg(short, long, value_name = "DURATION")]
    pub focus: Option<String>,

    /// Break interval length; overrides the config file
    #[arg(short = 'b', long = "break", value_name = "DURATION")]
    pub rest: Option<String>,

    /// Directory containing the cue sound files
    #[arg(long, value_name = "DIR")]
    pub sounds_dir: Option<PathBuf>,

    /// Disable audio cues
    #[arg(long)]
    pub no_sound: bool,

    /// Use DIR instead of ~/.pomw for configuration
    #[arg(long, value_name = "DIR", env = "POMW_HOME")]
    pub config_dir: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Generate shell completions
    ///
    /// # Examples
    ///
    ///   pomw completions bash > ~/.local/share/bash-completion/completions/pomw
    ///   pomw completions zsh > ~/.zfunc/_pomw
    Completions {
        /// Target shell
        #[arg(value_enum)]
        shell: Shell,
    },
}
