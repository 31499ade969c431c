//! Shared stdin reader and the yes/no confirmation built on it.

use std::io::Write;
use std::sync::Arc;

use async_trait::async_trait;
use jobpost_core::Confirm;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, BufReader, Lines, Stdin};
use tokio::sync::Mutex;
use tracing::warn;

/// Line source shared by the command loop and confirmations.
pub struct Input<R = BufReader<Stdin>> {
    lines: Mutex<Lines<R>>,
}

impl Input {
    pub fn stdin() -> Arc<Self> {
        Self::new(BufReader::new(tokio::io::stdin()))
    }
}

impl<R: AsyncBufRead + Unpin> Input<R> {
    pub fn new(reader: R) -> Arc<Self> {
        Arc::new(Self {
            lines: Mutex::new(reader.lines()),
        })
    }

    /// Print `prompt` and wait for the next line. `None` at end of input.
    pub async fn read_line(&self, prompt: &str) -> std::io::Result<Option<String>> {
        print!("{prompt}");
        std::io::stdout().flush()?;
        self.lines.lock().await.next_line().await
    }
}

/// Asks on the terminal; anything but `y`/`yes` declines.
pub struct TerminalConfirm<R = BufReader<Stdin>> {
    input: Arc<Input<R>>,
}

impl<R> TerminalConfirm<R> {
    pub fn new(input: Arc<Input<R>>) -> Self {
        Self { input }
    }
}

#[async_trait]
impl<R: AsyncBufRead + Unpin + Send> Confirm for TerminalConfirm<R> {
    async fn confirm(&self, prompt: &str) -> bool {
        match self.input.read_line(&format!("{prompt} [y/N] ")).await {
            Ok(Some(answer)) => is_yes(&answer),
            Ok(None) => false,
            Err(e) => {
                warn!(error = %e, "could not read confirmation");
                false
            }
        }
    }
}

fn is_yes(answer: &str) -> bool {
    matches!(answer.trim().to_ascii_lowercase().as_str(), "y" | "yes")
}
