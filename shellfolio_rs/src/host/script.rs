//! Non-interactive host: runs lines one after another and writes plain
//! output to a stream.

use std::io::Write;

use anyhow::Result;
use tracing::debug;

use crate::ShellSettings;
use crate::colors::Painter;
use crate::content::ContentProvider;
use crate::interpreter::Interpreter;
use crate::sink::StreamSink;

/// Run `lines` in order and hand the writer back. Stops after `exit`.
pub async fn run_script<C, W, I>(
    settings: ShellSettings,
    content: C,
    lines: I,
    out: W,
    painter: Painter,
) -> Result<W>
where
    C: ContentProvider,
    W: Write + Send,
    I: IntoIterator,
    I::Item: AsRef<str>,
{
    let shell = Interpreter::new(settings, StreamSink::new(out, painter), content)?;
    shell.boot().await;

    let mut ran = 0usize;
    for line in lines {
        shell.submit(line.as_ref()).await;
        ran += 1;
        if shell.exit_requested() {
            break;
        }
    }
    debug!(lines = ran, "script finished");

    let mut sink = shell.into_sink();
    sink.finish();
    Ok(sink.into_inner())
}
