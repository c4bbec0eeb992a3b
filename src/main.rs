use std::io;
use std::sync::Arc;
use std::thread;
use std::time::Duration as StdDuration;

use anyhow::Result;
use clap::{CommandFactory, Parser};
use colored::Colorize;

use pomw::audio::AudioPlayer;
use pomw::cli::{Cli, Commands};
use pomw::config::{Config, Paths};
use pomw::core::datetime::parse_duration;
use pomw::core::{
    BlockingQueue, Cue, Flags, Row, Screen, SessionRequest, TimewCommand, Worker,
};
use pomw::error::PomwError;
use pomw::signals;
use pomw::timew::TimewClient;
use pomw::tui::{self, event, TerminalScreen};

fn main() {
    if let Err(e) = run() {
        eprintln!("{}: {}", "error".red().bold(), e);
        std::process::exit(1);
    }
}

fn run() -> Result<(), PomwError> {
    let cli = Cli::parse();

    if let Some(Commands::Completions { shell }) = cli.command {
        let mut cmd = Cli::command();
        let name = cmd.get_name().to_string();
        clap_complete::generate(shell, &mut cmd, name, &mut io::stdout());
        return Ok(());
    }

    let paths = match cli.config_dir {
        Some(root) => Paths::with_root(root),
        None => Paths::new()?,
    };
    let config = Config::load(&paths.config_file)?;

    let focus = resolve_duration(cli.focus.as_deref(), config.focus_duration())?;
    let rest = resolve_duration(cli.rest.as_deref(), config.break_duration())?;
    let sounds_dir = cli
        .sounds_dir
        .or_else(|| config.sounds_dir.clone())
        .unwrap_or_else(|| paths.sounds.clone());
    let sound = config.sound && !cli.no_sound;

    let queue = Arc::new(BlockingQueue::new());
    let flags = Arc::new(Flags::new());
    let screen = TerminalScreen::new()?;

    let worker = {
        let queue = Arc::clone(&queue);
        let flags = Arc::clone(&flags);
        let screen = screen.clone();
        thread::Builder::new()
            .name("session-worker".to_string())
            .spawn(move || {
                // The audio output stream is not Send; the player lives
                // and dies on this thread.
                let mut player = if sound {
                    AudioPlayer::new()
                } else {
                    AudioPlayer::muted()
                };
                if sound {
                    for cue in [Cue::FocusEnd, Cue::BreakEnd] {
                        let _ = player.load(cue, &sounds_dir.join(cue.file_name()));
                    }
                }

                Worker::new(queue, flags, TimewClient::new(), screen, player).run();
            })?
    };

    if signals::install(
        Arc::clone(&queue),
        Arc::clone(&flags),
        SessionRequest::new(focus, rest, TimewCommand::Query),
    )
    .is_err()
    {
        screen.put_for(
            Row::Notice,
            "Unable to handle signals",
            StdDuration::from_secs(1),
        );
    }

    screen.put_centered(Row::Commands, tui::COMMANDS_HELP);
    let result = event::run(&screen, &TimewClient::new(), &queue, &flags, focus, rest);

    // Shutdown protocol: clear the flag, then unblock the worker with
    // the sentinel. Omitting the push would leave it waiting forever.
    flags.shut_down();
    queue.push(SessionRequest::shutdown());
    let _ = worker.join();

    screen.restore();
    result
}

fn resolve_duration(
    arg: Option<&str>,
    fallback: chrono::Duration,
) -> Result<chrono::Duration, PomwError> {
    match arg {
        None => Ok(fallback),
        Some(raw) => {
            parse_duration(raw).ok_or_else(|| PomwError::Config(format!("Invalid duration: {raw}")))
        }
    }
}
