//! Interactive read-eval-print loop.

use std::future::Future;
use std::io::Write;

use tokio::io::{AsyncBufRead, AsyncBufReadExt as _};

use jirabot_chat::{ChatOrchestrator, Reply};

use crate::output::Painter;

/// Why the loop stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Ending {
    ExitCommand,
    EndOfInput,
    Interrupted,
    InputError,
}

/// Read lines from `input` until exit, end of input, or `interrupt`
/// resolves. Every ending prints the goodbye line.
pub async fn run<R, W, S>(
    orchestrator: &mut ChatOrchestrator,
    input: R,
    out: &mut W,
    painter: Painter,
    interrupt: S,
) -> std::io::Result<Ending>
where
    R: AsyncBufRead + Unpin,
    W: Write,
    S: Future,
{
    let mut lines = input.lines();
    tokio::pin!(interrupt);

    writeln!(out, "{}\n", painter.banner())?;

    let ending = loop {
        write!(out, "{}", painter.prompt())?;
        out.flush()?;

        let line = tokio::select! {
            biased;
            _ = &mut interrupt => {
                writeln!(out)?;
                break Ending::Interrupted;
            }
            line = lines.next_line() => line,
        };

        let line = match line {
            Ok(Some(line)) => line,
            Ok(None) => {
                writeln!(out)?;
                break Ending::EndOfInput;
            }
            Err(e) => {
                tracing::warn!(error = %e, "Failed to read input");
                writeln!(out, "{}", painter.error(&e.to_string()))?;
                break Ending::InputError;
            }
        };

        let reply = tokio::select! {
            biased;
            _ = &mut interrupt => {
                writeln!(out)?;
                break Ending::Interrupted;
            }
            reply = orchestrator.handle(&line) => reply,
        };

        match reply {
            Reply::Exit => break Ending::ExitCommand,
            Reply::Nothing => {}
            other => {
                if let Some(text) = other.text() {
                    writeln!(out, "{}\n", painter.reply(&text))?;
                }
            }
        }
    };

    writeln!(out, "\n{}", painter.goodbye())?;
    tracing::info!(ending = ?ending, session_id = %orchestrator.session().id, "Chat session ended");
    Ok(ending)
}
