//! Terminal rendition of the two consent prompts and the error notice.
//!
//! 终端提示：阻塞读取标准输入，非交互环境下一律视为“否”。

use std::io::{self, BufRead, IsTerminal, Write};

use async_trait::async_trait;
use lg_core::ports::UserPromptPort;
use tracing::{debug, warn};

/// Reads answers from stdin. Without a terminal every confirmation is
/// answered "no".
#[derive(Debug, Default, Clone)]
pub struct TerminalPrompt;

impl TerminalPrompt {
    pub fn new() -> Self {
        Self
    }
}

/// `y`/`yes` (any case) is consent; everything else, including EOF, is not.
pub fn parse_answer(line: &str) -> bool {
    matches!(line.trim().to_ascii_lowercase().as_str(), "y" | "yes")
}

fn ask_blocking(title: &str, message: &str) -> io::Result<bool> {
    if !io::stdin().is_terminal() {
        debug!(%title, "stdin is not a terminal, declining");
        return Ok(false);
    }

    let mut stdout = io::stdout().lock();
    writeln!(stdout, "\n== {title} ==")?;
    write!(stdout, "{message} [y/N] ")?;
    stdout.flush()?;

    let mut line = String::new();
    io::stdin().lock().read_line(&mut line)?;
    Ok(parse_answer(&line))
}

fn show_error_blocking(title: &str, message: &str) -> io::Result<()> {
    let mut stderr = io::stderr().lock();
    writeln!(stderr, "\n== {title} ==")?;
    writeln!(stderr, "{message}")?;

    if io::stdin().is_terminal() {
        write!(stderr, "Press Enter to continue...")?;
        stderr.flush()?;
        let mut line = String::new();
        io::stdin().lock().read_line(&mut line)?;
    }
    Ok(())
}

#[async_trait]
impl UserPromptPort for TerminalPrompt {
    async fn confirm(&self, title: &str, message: &str) -> bool {
        let (title, message) = (title.to_string(), message.to_string());
        match tokio::task::spawn_blocking(move || ask_blocking(&title, &message)).await {
            Ok(Ok(answer)) => answer,
            Ok(Err(e)) => {
                warn!(error = %e, "prompt failed, treating as declined");
                false
            }
            Err(e) => {
                warn!(error = %e, "prompt task failed, treating as declined");
                false
            }
        }
    }

    async fn notify_error(&self, title: &str, message: &str) {
        let (title, message) = (title.to_string(), message.to_string());
        match tokio::task::spawn_blocking(move || show_error_blocking(&title, &message)).await {
            Ok(Ok(())) => {}
            Ok(Err(e)) => warn!(error = %e, "failed to show error notice"),
            Err(e) => warn!(error = %e, "error notice task failed"),
        }
    }
}
