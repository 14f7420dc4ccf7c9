//! Typewriter renderer.
//!
//! At most one render streams into the sink at a time. Starting a new render
//! silently cancels the active one and waits for it to stop; every suspension
//! point observes the render's cancellation token, so a cancelled render stops
//! before its next line or character and leaves the partial line on screen.

use std::hash::BuildHasher;
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::{Mutex, MutexGuard, PoisonError};
use std::time::Duration;

use tokio_util::sync::CancellationToken;
use tracing::trace;

/// Visual class of an output line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LineStyle {
    #[default]
    Normal,
    /// Echo of a submitted command line.
    Echo,
    Error,
    /// The `^C` marker left by a user interrupt.
    Interrupt,
}

/// Surface the renderer writes to.
pub trait OutputSink: Send {
    /// Start a fresh output line.
    fn open_line(&mut self, style: LineStyle);

    /// Append one character to the current line.
    fn push_char(&mut self, ch: char);

    fn push_str(&mut self, text: &str) {
        for ch in text.chars() {
            self.push_char(ch);
        }
    }

    /// Keep the newest output in view.
    fn scroll_to_bottom(&mut self);

    /// Drop everything shown so far.
    fn clear(&mut self);
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RenderOutcome {
    Completed,
    Cancelled,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RenderState {
    Idle,
    Rendering,
}

/// Character pacing applied to every render.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pacing {
    /// Skip all delays.
    pub instant: bool,
    /// Scales the per-command speed; 100 keeps it as is.
    pub speed_percent: u32,
    /// Upper bound of the random extra delay per character.
    pub jitter_ms: u64,
    /// Characters between scroll-to-bottom calls.
    pub scroll_every: usize,
}

impl Default for Pacing {
    fn default() -> Self {
        Self {
            instant: false,
            speed_percent: 100,
            jitter_ms: 0,
            scroll_every: 5,
        }
    }
}

impl Pacing {
    pub fn instant() -> Self {
        Self {
            instant: true,
            ..Self::default()
        }
    }

    /// Delay after one character at `speed_ms`, or `None` when nothing to wait.
    pub fn delay(&self, speed_ms: u64) -> Option<Duration> {
        if self.instant {
            return None;
        }
        let base = speed_ms.saturating_mul(u64::from(self.speed_percent)) / 100;
        let jitter = if self.jitter_ms > 0 {
            std::hash::RandomState::new().hash_one(base) % self.jitter_ms.saturating_add(1)
        } else {
            0
        };
        match base.saturating_add(jitter) {
            0 => None,
            ms => Some(Duration::from_millis(ms)),
        }
    }
}

struct ActiveRender {
    ticket: u64,
    cancel: CancellationToken,
}

pub struct Renderer<S> {
    sink: Mutex<S>,
    pacing: Pacing,
    slot: tokio::sync::Mutex<()>,
    active: Mutex<Option<ActiveRender>>,
    rendering: AtomicBool,
    next_ticket: AtomicU64,
}

impl<S: OutputSink> Renderer<S> {
    pub fn new(sink: S, pacing: Pacing) -> Self {
        Self {
            sink: Mutex::new(sink),
            pacing: Pacing {
                scroll_every: pacing.scroll_every.max(1),
                ..pacing
            },
            slot: tokio::sync::Mutex::new(()),
            active: Mutex::new(None),
            rendering: AtomicBool::new(false),
            next_ticket: AtomicU64::new(0),
        }
    }

    pub fn pacing(&self) -> Pacing {
        self.pacing
    }

    pub fn state(&self) -> RenderState {
        if self.is_rendering() {
            RenderState::Rendering
        } else {
            RenderState::Idle
        }
    }

    pub fn is_rendering(&self) -> bool {
        self.rendering.load(Ordering::SeqCst)
    }

    /// Run `f` against the sink. The lock is never held across an await.
    pub fn with_sink<R>(&self, f: impl FnOnce(&mut S) -> R) -> R {
        let mut sink = self.sink.lock().unwrap_or_else(PoisonError::into_inner);
        f(&mut sink)
    }

    /// Render with a token of its own.
    pub async fn render(&self, text: &str, speed_ms: u64) -> RenderOutcome {
        self.render_scoped(text, speed_ms, &CancellationToken::new())
            .await
    }

    /// Render `text` line by line, stopping early once `scope` (or a newer
    /// render) cancels it.
    pub async fn render_scoped(
        &self,
        text: &str,
        speed_ms: u64,
        scope: &CancellationToken,
    ) -> RenderOutcome {
        let cancel = scope.child_token();
        let ticket = self.next_ticket.fetch_add(1, Ordering::SeqCst);
        let previous = self.active_slot().replace(ActiveRender {
            ticket,
            cancel: cancel.clone(),
        });
        if let Some(previous) = previous {
            previous.cancel.cancel();
        }

        let _slot = self.slot.lock().await;
        let _active = ActiveGuard {
            renderer: self,
            ticket,
        };
        self.rendering.store(true, Ordering::SeqCst);
        let _flag = FlagGuard(&self.rendering);

        let outcome = self.stream(text, speed_ms, &cancel).await;
        trace!(ticket, ?outcome, chars = text.chars().count(), "render finished");
        outcome
    }

    async fn stream(
        &self,
        text: &str,
        speed_ms: u64,
        cancel: &CancellationToken,
    ) -> RenderOutcome {
        let scroll_every = self.pacing.scroll_every;
        for line in text.split('\n') {
            if cancel.is_cancelled() {
                return self.stop();
            }
            self.with_sink(|sink| sink.open_line(LineStyle::Normal));

            let len = line.chars().count();
            for (index, ch) in line.chars().enumerate() {
                if cancel.is_cancelled() {
                    return self.stop();
                }
                self.with_sink(|sink| sink.push_char(ch));

                if let Some(delay) = self.pacing.delay(speed_ms) {
                    tokio::select! {
                        _ = cancel.cancelled() => return self.stop(),
                        _ = tokio::time::sleep(delay) => {}
                    }
                }

                let revealed = index + 1;
                if revealed % scroll_every == 0 || revealed == len {
                    self.with_sink(|sink| sink.scroll_to_bottom());
                }
            }
            self.with_sink(|sink| sink.scroll_to_bottom());
        }
        self.with_sink(|sink| sink.scroll_to_bottom());
        RenderOutcome::Completed
    }

    fn stop(&self) -> RenderOutcome {
        self.with_sink(|sink| sink.scroll_to_bottom());
        RenderOutcome::Cancelled
    }

    /// Cancel whatever render is active, without waiting for it.
    pub fn preempt(&self) {
        if let Some(active) = self.active_slot().as_ref() {
            active.cancel.cancel();
        }
    }

    /// Wait until no render holds the output.
    pub async fn wait_idle(&self) {
        let _slot = self.slot.lock().await;
    }

    /// Write a whole line at once (echo, errors, markers).
    pub fn emit_line(&self, text: &str, style: LineStyle) {
        self.with_sink(|sink| {
            sink.open_line(style);
            sink.push_str(text);
            sink.scroll_to_bottom();
        });
    }

    pub fn clear(&self) {
        self.with_sink(|sink| sink.clear());
    }

    pub fn into_sink(self) -> S {
        self.sink.into_inner().unwrap_or_else(PoisonError::into_inner)
    }

    fn active_slot(&self) -> MutexGuard<'_, Option<ActiveRender>> {
        self.active.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

struct ActiveGuard<'a, S: OutputSink> {
    renderer: &'a Renderer<S>,
    ticket: u64,
}

impl<S: OutputSink> Drop for ActiveGuard<'_, S> {
    fn drop(&mut self) {
        let mut active = self.renderer.active_slot();
        if active.as_ref().is_some_and(|a| a.ticket == self.ticket) {
            *active = None;
        }
    }
}

struct FlagGuard<'a>(&'a AtomicBool);

impl Drop for FlagGuard<'_> {
    fn drop(&mut self) {
        self.0.store(false, Ordering::SeqCst);
    }
}
