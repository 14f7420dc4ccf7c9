//! Output sinks: an in-memory buffer and a byte stream (stdout or a raw
//! terminal).

use std::io::Write;

use crossterm::cursor::MoveTo;
use crossterm::queue;
use crossterm::terminal::{Clear, ClearType};
use tracing::warn;

use crate::colors::{Painter, RESET};
use crate::render::{LineStyle, OutputSink};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputLine {
    pub style: LineStyle,
    pub text: String,
}

/// Keeps every line in memory. Used by tests and embedders.
#[derive(Debug, Default)]
pub struct BufferSink {
    lines: Vec<OutputLine>,
    scrolls: usize,
    clears: usize,
}

impl BufferSink {
    pub fn lines(&self) -> &[OutputLine] {
        &self.lines
    }

    pub fn text(&self) -> String {
        self.lines
            .iter()
            .map(|line| line.text.as_str())
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// Lines of one style, in order.
    pub fn styled(&self, style: LineStyle) -> Vec<&str> {
        self.lines
            .iter()
            .filter(|line| line.style == style)
            .map(|line| line.text.as_str())
            .collect()
    }

    pub fn scroll_count(&self) -> usize {
        self.scrolls
    }

    pub fn clear_count(&self) -> usize {
        self.clears
    }
}

impl OutputSink for BufferSink {
    fn open_line(&mut self, style: LineStyle) {
        self.lines.push(OutputLine {
            style,
            text: String::new(),
        });
    }

    fn push_char(&mut self, ch: char) {
        match self.lines.last_mut() {
            Some(line) => line.text.push(ch),
            None => self.lines.push(OutputLine {
                style: LineStyle::Normal,
                text: ch.to_string(),
            }),
        }
    }

    fn scroll_to_bottom(&mut self) {
        self.scrolls += 1;
    }

    fn clear(&mut self) {
        self.lines.clear();
        self.clears += 1;
    }
}

/// Writes output to a byte stream with optional ANSI styling.
///
/// In raw mode lines end in `\r\n` and `clear` wipes the screen. The sink also
/// owns the bottom input row in raw mode: output erases the row before
/// writing, and [`StreamSink::draw_input`] puts it back.
pub struct StreamSink<W: Write> {
    out: W,
    painter: Painter,
    raw: bool,
    line_open: bool,
    style_open: bool,
    input_shown: bool,
    failed: bool,
}

impl<W: Write> StreamSink<W> {
    pub fn new(out: W, painter: Painter) -> Self {
        Self {
            out,
            painter,
            raw: false,
            line_open: false,
            style_open: false,
            input_shown: false,
            failed: false,
        }
    }

    pub fn raw_mode(out: W, painter: Painter) -> Self {
        Self {
            raw: true,
            ..Self::new(out, painter)
        }
    }

    fn newline(&self) -> &'static str {
        if self.raw { "\r\n" } else { "\n" }
    }

    fn write(&mut self, text: &str) {
        let result = self.out.write_all(text.as_bytes());
        self.check(result);
    }

    fn check(&mut self, result: std::io::Result<()>) {
        if let Err(err) = result
            && !self.failed
        {
            self.failed = true;
            warn!(error = %err, "output write failed; further errors suppressed");
        }
    }

    fn close_line(&mut self) {
        if self.style_open {
            self.write(RESET);
            self.style_open = false;
        }
        if self.line_open {
            let newline = self.newline();
            self.write(newline);
            self.line_open = false;
        }
    }

    fn hide_input(&mut self) {
        if self.input_shown {
            let result = queue!(self.out, Clear(ClearType::CurrentLine));
            self.check(result);
            self.write("\r");
            self.input_shown = false;
        }
    }

    /// Redraw the input row below the output.
    pub fn draw_input(&mut self, prompt: &str, input: &str) {
        self.close_line();
        if self.input_shown {
            self.hide_input();
        }
        let prompt = self.painter.ok(prompt);
        self.write(&format!("{prompt} {input}"));
        self.input_shown = true;
        self.flush();
    }

    /// Terminate the last line and flush.
    pub fn finish(&mut self) {
        self.hide_input();
        self.close_line();
        self.flush();
    }

    fn flush(&mut self) {
        let result = self.out.flush();
        self.check(result);
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write + Send> OutputSink for StreamSink<W> {
    fn open_line(&mut self, style: LineStyle) {
        self.hide_input();
        self.close_line();
        if let Some(code) = self.painter.style_code(style) {
            self.write(code);
            self.style_open = true;
        }
        self.line_open = true;
    }

    fn push_char(&mut self, ch: char) {
        if !self.line_open {
            self.open_line(LineStyle::Normal);
        }
        let mut buf = [0u8; 4];
        let encoded: &str = ch.encode_utf8(&mut buf);
        self.write(encoded);
    }

    fn scroll_to_bottom(&mut self) {
        self.flush();
    }

    fn clear(&mut self) {
        self.hide_input();
        if self.style_open {
            self.write(RESET);
            self.style_open = false;
        }
        self.line_open = false;
        if self.raw {
            let result = queue!(self.out, Clear(ClearType::All), MoveTo(0, 0));
            self.check(result);
        }
        self.flush();
    }
}
