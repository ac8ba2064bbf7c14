//! Terminal front end: argument parsing, the input loop, and the template-backed render sink.
//! Not part of the library API.

pub mod args;
pub mod input;
pub mod render;
pub mod styles;
pub mod templates;

use input::{parse_line, Action};
use plantfinder::session::Session;
use render::TerminalSink;
use std::io::{self, BufRead, Write};
use std::sync::mpsc::{self, Receiver, RecvTimeoutError};
use std::thread;
use std::time::Instant;

/// Feeds stdin lines into the session until `quit` or end of input.
///
/// Stdin is read on a helper thread that only forwards lines; all session work happens here,
/// between lines or when a debounced search comes due.
pub fn run_loop<W: Write>(session: &mut Session<TerminalSink<W>>) {
    let lines = spawn_line_reader();
    loop {
        let received = match session.next_deadline() {
            Some(due) => lines.recv_timeout(due.saturating_duration_since(Instant::now())),
            None => lines.recv().map_err(|_| RecvTimeoutError::Disconnected),
        };

        match received {
            Ok(line) => match parse_line(&line) {
                Action::Dispatch(event) => session.dispatch(event, Instant::now()),
                Action::Help => session.sink_mut().help(),
                Action::Unknown(line) => session.sink_mut().hint(&line),
                Action::Nothing => {}
                Action::Quit => break,
            },
            Err(RecvTimeoutError::Timeout) => {}
            Err(RecvTimeoutError::Disconnected) => {
                session.flush();
                break;
            }
        }
        session.tick(Instant::now());
    }
}

fn spawn_line_reader() -> Receiver<String> {
    let (tx, rx) = mpsc::channel();
    thread::spawn(move || {
        for line in io::stdin().lock().lines() {
            let Ok(line) = line else { break };
            if tx.send(line).is_err() {
                break;
            }
        }
    });
    rx
}
