// Interactive loop. Three sources feed one channel: stdin lines, a
// one-second ticker, and the background leaderboard write.

use anyhow::Result;
use std::io::{self, BufRead, Write};
use std::sync::mpsc::{self, Sender};
use std::sync::Arc;
use std::thread;
use std::time::Duration;

use pw_core::{
    format_time, render_board, GameSession, LeaderboardEntry, LeaderboardStore, NewEntry,
    SessionContext, StoreError, SubmissionFlag, SubmissionRequest, SystemClock,
};

use crate::render;

enum Event {
    Line(String),
    Eof,
    Tick,
    Submitted(Result<LeaderboardEntry, StoreError>),
}

/// What the next input line means.
#[derive(Debug, PartialEq, Eq)]
pub enum Input {
    Candidate(String),
    Remove,
    Board,
    Copy,
    Hint,
    Help,
    Quit,
    Unknown(String),
}

pub fn parse_input(line: &str) -> Input {
    if let Some(rest) = line.strip_prefix("//") {
        return Input::Candidate(format!("/{}", rest));
    }
    match line.trim() {
        "/remove" => Input::Remove,
        "/board" => Input::Board,
        "/copy" => Input::Copy,
        "/hint" => Input::Hint,
        "/help" => Input::Help,
        "/quit" | "/exit" => Input::Quit,
        cmd if cmd.starts_with('/') => Input::Unknown(cmd.to_string()),
        _ => Input::Candidate(line.to_string()),
    }
}

enum Mode {
    Playing,
    AwaitingName(SubmissionRequest),
    Submitting,
}

pub fn run(
    context: SessionContext,
    store: Arc<dyn LeaderboardStore>,
    flag: SubmissionFlag,
    limit: usize,
) -> Result<()> {
    let already_submitted = flag.is_submitted().unwrap_or_else(|e| {
        log::warn!("Could not read submission flag: {}", e);
        false
    });

    let clock = SystemClock;
    let mut session = GameSession::new(context, already_submitted, &clock);
    let mut mode = Mode::Playing;
    // Lines typed while a score write is in flight.
    let mut pending: Vec<String> = Vec::new();

    let (tx, rx) = mpsc::channel();
    spawn_stdin_reader(tx.clone());
    spawn_ticker(tx.clone());

    println!("PASSWORD GAUNTLET  (/help for commands)");
    println!("{}", render::status(&session));
    prompt("> ");

    for event in rx {
        match event {
            Event::Tick => session.tick(),

            Event::Eof => break,

            Event::Submitted(Ok(entry)) => {
                match flag.mark_submitted() {
                    Ok(()) => session.mark_submitted(),
                    Err(e) => log::warn!("Score saved but flag write failed: {}", e),
                }
                println!("Saved {} at {}.", entry.name, format_time(entry.elapsed_seconds));
                print_board(store.as_ref(), limit);
                mode = Mode::Playing;
                if !replay_pending(&mut pending, &mut session, &mut mode, store.as_ref(), limit) {
                    break;
                }
                prompt("> ");
            }

            Event::Submitted(Err(e)) => {
                log::warn!("Leaderboard write failed: {}", e);
                println!("Could not save your score ({}).", e);
                mode = Mode::Playing;
                if !replay_pending(&mut pending, &mut session, &mut mode, store.as_ref(), limit) {
                    break;
                }
                prompt("> ");
            }

            Event::Line(line) => match mode {
                Mode::AwaitingName(request) => {
                    let name = line.trim();
                    if name.is_empty() {
                        prompt("Name cannot be empty. Your name: ");
                        continue;
                    }
                    spawn_submit(tx.clone(), Arc::clone(&store), name.to_string(), request);
                    mode = Mode::Submitting;
                }

                Mode::Submitting => {
                    println!("Saving your score... this line will run once it is stored.");
                    pending.push(line);
                }

                Mode::Playing => {
                    if !handle_line(&line, &mut session, &mut mode, store.as_ref(), limit) {
                        break;
                    }
                    if matches!(mode, Mode::Playing) {
                        prompt("> ");
                    }
                }
            },
        }
    }

    log::info!("Leaving after {}", format_time(session.elapsed_seconds()));
    Ok(())
}

/// Returns false when the player quits.
fn handle_line(
    line: &str,
    session: &mut GameSession,
    mode: &mut Mode,
    store: &dyn LeaderboardStore,
    limit: usize,
) -> bool {
    let clock = SystemClock;
    match parse_input(line) {
        Input::Quit => return false,
        Input::Help => println!("{}", render::HELP),
        Input::Board => print_board(store, limit),
        Input::Copy => println!("{}", session.candidate()),
        Input::Hint => match session.hint() {
            Some(hint) => println!("hint: {}", hint),
            None => println!("No hint for this rule."),
        },
        Input::Unknown(cmd) => println!("Unknown command {}. Try /help.", cmd),

        Input::Remove => match session.remove_rule(&clock) {
            Ok(outcome) => {
                println!("Rule removal used.");
                println!("{}", render::status(session));
                if let Some(request) = outcome.submission {
                    ask_name(mode, request);
                }
            }
            Err(e) => println!("{}", e),
        },

        Input::Candidate(candidate) => {
            let outcome = session.edit(candidate, &clock);
            println!("{}", render::status(session));
            if outcome.completed_now {
                match outcome.submission {
                    Some(request) => ask_name(mode, request),
                    None => println!("Score already submitted from this machine."),
                }
            }
        }
    }
    true
}

/// Handle queued lines in order. Returns false if one of them quits.
fn replay_pending(
    pending: &mut Vec<String>,
    session: &mut GameSession,
    mode: &mut Mode,
    store: &dyn LeaderboardStore,
    limit: usize,
) -> bool {
    for line in pending.drain(..) {
        if !handle_line(&line, session, mode, store, limit) {
            return false;
        }
    }
    true
}

fn ask_name(mode: &mut Mode, request: SubmissionRequest) {
    println!(
        "Cleared in {} for {} points.",
        format_time(request.elapsed_seconds),
        request.score
    );
    *mode = Mode::AwaitingName(request);
    prompt("Your name: ");
}

fn print_board(store: &dyn LeaderboardStore, limit: usize) {
    match store.top(limit) {
        Ok(entries) => println!("{}", render_board(&entries).trim_end()),
        Err(e) => {
            log::warn!("Leaderboard read failed: {}", e);
            println!("Leaderboard unavailable.");
        }
    }
}

fn prompt(text: &str) {
    print!("{}", text);
    let _ = io::stdout().flush();
}

fn spawn_stdin_reader(tx: Sender<Event>) {
    thread::spawn(move || {
        for line in io::stdin().lock().lines() {
            let event = match line {
                Ok(line) => Event::Line(line),
                Err(e) => {
                    log::warn!("stdin read failed: {}", e);
                    break;
                }
            };
            if tx.send(event).is_err() {
                return;
            }
        }
        let _ = tx.send(Event::Eof);
    });
}

fn spawn_ticker(tx: Sender<Event>) {
    thread::spawn(move || loop {
        thread::sleep(Duration::from_secs(1));
        if tx.send(Event::Tick).is_err() {
            break;
        }
    });
}

/// Fire and forget. The result comes back as an event.
fn spawn_submit(
    tx: Sender<Event>,
    store: Arc<dyn LeaderboardStore>,
    name: String,
    request: SubmissionRequest,
) {
    thread::spawn(move || {
        let entry = NewEntry { name, elapsed_seconds: request.elapsed_seconds, score: request.score };
        let _ = tx.send(Event::Submitted(store.append(entry)));
    });
}
