use std::io::{self, BufRead, Write};
use std::path::Path;
use std::sync::mpsc;
use std::thread;

use client_logging::client_info;
use paperdrop_core::{update, AppState, Msg, SelectedFile};
use paperdrop_engine::ServiceEndpoints;

use super::effects::EffectRunner;
use super::logging::{self, LogDestination};
use super::ui;

/// Everything the main loop can receive: core messages from the stdin
/// reader and the engine event pump, plus shell-only commands.
pub(super) enum AppMsg {
    Core(Msg),
    Help,
    Quit,
    Unknown(String),
}

pub fn run_app() -> anyhow::Result<()> {
    logging::initialize(LogDestination::File);

    let endpoints = ServiceEndpoints::from_env();
    client_info!(
        "starting with upload base {} and status base {}",
        endpoints.upload_base,
        endpoints.status_base
    );

    let (msg_tx, msg_rx) = mpsc::channel::<AppMsg>();
    let runner = EffectRunner::new(endpoints, msg_tx.clone());
    spawn_stdin_reader(msg_tx);

    let mut state = AppState::new();
    println!("{}", ui::render::help());
    prompt()?;

    while let Ok(msg) = msg_rx.recv() {
        match msg {
            AppMsg::Quit => break,
            AppMsg::Help => println!("{}", ui::render::help()),
            AppMsg::Unknown(line) => println!("Unknown command: {line} (try `help`)"),
            AppMsg::Core(msg) => {
                let (next, effects) = update(std::mem::take(&mut state), msg);
                state = next;
                runner.run(effects);
                if state.consume_dirty() {
                    println!("{}", ui::render::render(&state.view()));
                }
            }
        }
        prompt()?;
    }

    Ok(())
}

fn prompt() -> io::Result<()> {
    let mut stdout = io::stdout();
    write!(stdout, "> ")?;
    stdout.flush()
}

fn spawn_stdin_reader(msg_tx: mpsc::Sender<AppMsg>) {
    thread::spawn(move || {
        let stdin = io::stdin();
        for line in stdin.lock().lines() {
            let Ok(line) = line else { break };
            if line.trim().is_empty() {
                continue;
            }
            if msg_tx.send(parse_line(&line)).is_err() {
                return;
            }
        }
        // End of stdin behaves like `quit`.
        let _ = msg_tx.send(AppMsg::Quit);
    });
}

fn parse_line(line: &str) -> AppMsg {
    let trimmed = line.trim();
    match trimmed {
        "help" => return AppMsg::Help,
        "quit" | "exit" => return AppMsg::Quit,
        "submit" => return AppMsg::Core(Msg::SubmitClicked),
        "status" => return AppMsg::Core(Msg::StatusViewOpened),
        _ => {}
    }
    if let Some(path) = trimmed.strip_prefix("select ") {
        let path = path.trim();
        if !path.is_empty() {
            return AppMsg::Core(Msg::FileChosen(SelectedFile {
                path: path.to_string(),
                name: display_name(path),
            }));
        }
    }
    AppMsg::Unknown(trimmed.to_string())
}

fn display_name(path: &str) -> String {
    Path::new(path)
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn select_parses_the_path_and_derives_the_display_name() {
        let parsed = parse_line("select /tmp/docs/report.pdf");
        match parsed {
            AppMsg::Core(Msg::FileChosen(file)) => {
                assert_eq!(file.path, "/tmp/docs/report.pdf");
                assert_eq!(file.name, "report.pdf");
            }
            _ => panic!("expected FileChosen"),
        }
    }

    #[test]
    fn bare_words_map_to_their_commands() {
        assert!(matches!(
            parse_line("submit"),
            AppMsg::Core(Msg::SubmitClicked)
        ));
        assert!(matches!(
            parse_line(" status "),
            AppMsg::Core(Msg::StatusViewOpened)
        ));
        assert!(matches!(parse_line("exit"), AppMsg::Quit));
        assert!(matches!(parse_line("frobnicate"), AppMsg::Unknown(_)));
    }

    #[test]
    fn select_without_a_path_is_unknown() {
        assert!(matches!(parse_line("select   "), AppMsg::Unknown(_)));
    }
}
