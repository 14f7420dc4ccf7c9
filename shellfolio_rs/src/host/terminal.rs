//! Interactive host on a raw-mode terminal.
//!
//! One `select!` loop polls key events and every in-flight interpreter future
//! (boot, submissions, interrupts). Nothing is spawned, so the interpreter is
//! only ever borrowed, and a new submission preempts the previous one through
//! its cancellation token rather than through task aborts.
//!
//! In-flight futures are polled before the next key, so a submitted line is in
//! history before a following arrow key reads it.

use std::io::{self, Write};

use anyhow::{Context, Result};
use crossterm::event::{Event, EventStream};
use crossterm::terminal::{disable_raw_mode, enable_raw_mode};
use futures::future::LocalBoxFuture;
use futures::{Stream, StreamExt};
use futures::stream::FuturesUnordered;
use tracing::{debug, info, warn};

use super::keys::{HostAction, map_key};
use crate::ShellSettings;
use crate::colors::Painter;
use crate::content::ContentProvider;
use crate::interpreter::Interpreter;
use crate::render::OutputSink;
use crate::sink::StreamSink;

/// Restores cooked mode on drop, including on early returns.
struct RawModeGuard;

impl RawModeGuard {
    fn enable() -> Result<Self> {
        enable_raw_mode().context("failed to enable raw terminal mode")?;
        Ok(Self)
    }
}

impl Drop for RawModeGuard {
    fn drop(&mut self) {
        if let Err(err) = disable_raw_mode() {
            warn!(error = %err, "failed to restore terminal mode");
        }
    }
}

type Shell<W, C> = Interpreter<StreamSink<W>, C>;

pub async fn run_terminal<C: ContentProvider>(
    settings: ShellSettings,
    content: C,
    painter: Painter,
) -> Result<()> {
    let _raw = RawModeGuard::enable()?;
    let shell = Interpreter::new(settings, StreamSink::raw_mode(io::stdout(), painter), content)?;
    info!("terminal host started");

    let result = event_loop(&shell, EventStream::new()).await;
    shell.with_sink(|sink| sink.finish());
    result
}

async fn event_loop<W, C, E>(shell: &Shell<W, C>, events: E) -> Result<()>
where
    W: Write + Send,
    C: ContentProvider,
    E: Stream<Item = io::Result<Event>>,
{
    let mut events = std::pin::pin!(events);
    let mut in_flight: FuturesUnordered<LocalBoxFuture<'_, ()>> = FuturesUnordered::new();
    let mut input = String::new();

    in_flight.push(Box::pin(async move {
        shell.boot().await;
    }));

    loop {
        tokio::select! {
            biased;
            Some(()) = in_flight.next(), if !in_flight.is_empty() => {}
            event = events.next() => {
                let key = match event {
                    Some(Ok(Event::Key(key))) => key,
                    Some(Ok(_)) => continue,
                    Some(Err(err)) => return Err(err).context("failed to read terminal event"),
                    None => break,
                };
                match map_key(key, input.is_empty()) {
                    HostAction::Submit => {
                        let line = std::mem::take(&mut input);
                        in_flight.push(Box::pin(async move {
                            shell.submit(&line).await;
                        }));
                    }
                    HostAction::HistoryPrev => {
                        if let Some(entry) = shell.history_previous() {
                            input = entry;
                        }
                    }
                    HostAction::HistoryNext => input = shell.history_next(),
                    HostAction::Interrupt => {
                        if shell.is_rendering() {
                            in_flight.push(Box::pin(async move {
                                shell.interrupt().await;
                            }));
                        } else {
                            input.clear();
                        }
                    }
                    HostAction::ClearScreen => shell.with_sink(|sink| sink.clear()),
                    HostAction::Quit => {
                        debug!("quit requested");
                        break;
                    }
                    HostAction::Backspace => {
                        input.pop();
                    }
                    HostAction::Insert(ch) => input.push(ch),
                    HostAction::Ignore => {}
                }
            }
        }

        if shell.exit_requested() && in_flight.is_empty() {
            break;
        }
        if !shell.is_rendering() {
            let prompt = shell.prompt();
            shell.with_sink(|sink| sink.draw_input(&prompt, &input));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
    use futures::stream;

    use super::*;
    use crate::content::BundledContent;

    fn shell() -> Shell<Vec<u8>, BundledContent> {
        let settings = ShellSettings::new().with_instant(true).with_banner(false);
        let sink = StreamSink::raw_mode(Vec::new(), Painter::plain());
        Interpreter::new(settings, sink, BundledContent).unwrap()
    }

    fn keys(codes: impl IntoIterator<Item = KeyCode>) -> Vec<io::Result<Event>> {
        codes
            .into_iter()
            .map(|code| Ok(Event::Key(KeyEvent::new(code, KeyModifiers::NONE))))
            .collect()
    }

    fn typed(line: &str) -> Vec<KeyCode> {
        line.chars()
            .map(KeyCode::Char)
            .chain([KeyCode::Enter])
            .collect()
    }

    #[tokio::test]
    async fn up_arrow_recalls_line_submitted_just_before() {
        let shell = shell();
        let mut codes = typed("pwd");
        codes.extend([KeyCode::Up, KeyCode::Enter]);

        event_loop(&shell, stream::iter(keys(codes))).await.unwrap();

        assert_eq!(shell.history_entries(), vec!["pwd", "pwd"]);
    }

    #[tokio::test]
    async fn exit_stops_reading_keys() {
        let shell = shell();
        let mut codes = typed("exit");
        codes.extend(typed("ls"));

        event_loop(&shell, stream::iter(keys(codes))).await.unwrap();

        assert!(shell.exit_requested());
        assert_eq!(shell.history_entries(), vec!["exit"]);
    }

    #[tokio::test]
    async fn ctrl_d_quits_on_empty_input() {
        let shell = shell();
        let mut events = keys(typed("pwd"));
        events.push(Ok(Event::Key(KeyEvent::new(
            KeyCode::Char('d'),
            KeyModifiers::CONTROL,
        ))));
        events.extend(keys(typed("whoami")));

        event_loop(&shell, stream::iter(events)).await.unwrap();

        assert!(!shell.exit_requested());
        assert_eq!(shell.history_entries(), vec!["pwd"]);
    }

    #[tokio::test]
    async fn event_error_is_returned() {
        let shell = shell();
        let events = vec![Err(io::Error::other("tty gone"))];

        let err = event_loop(&shell, stream::iter(events)).await.unwrap_err();

        assert!(err.to_string().contains("failed to read terminal event"));
    }
}
