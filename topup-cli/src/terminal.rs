//! Line-oriented terminal I/O: prompts, notices and the clipboard.

use std::future::Future;
use std::io::{IsTerminal, Write};
use tokio::io::{AsyncBufRead, AsyncBufReadExt, BufReader, Lines};
use tokio::sync::watch;
use topup_core::clipboard::{Clipboard, ClipboardError};
use topup_core::events::{Notice, NoticeLevel, NoticeReceiver};

type Input = Box<dyn AsyncBufRead + Send + Unpin>;
type Output = Box<dyn Write + Send>;

/// Screens write through the terminal with `write!`/`writeln!`.
pub struct Terminal {
    lines: Lines<Input>,
    out: Output,
    notices: NoticeReceiver,
}

impl Terminal {
    pub fn new(
        input: impl AsyncBufRead + Send + Unpin + 'static,
        out: impl Write + Send + 'static,
        notices: NoticeReceiver,
    ) -> Self {
        let input: Input = Box::new(input);
        Self {
            lines: input.lines(),
            out: Box::new(out),
            notices,
        }
    }

    /// Attach to the process's stdin and stdout.
    pub fn stdio(notices: NoticeReceiver) -> Self {
        Self::new(
            BufReader::new(tokio::io::stdin()),
            std::io::stdout(),
            notices,
        )
    }

    /// Print `label` and read one line. `None` at end of input.
    pub async fn prompt(&mut self, label: &str) -> std::io::Result<Option<String>> {
        write!(self.out, "{label}")?;
        self.out.flush()?;
        self.lines.next_line().await
    }

    /// Drive `fut` to completion, printing notices as they arrive.
    ///
    /// When `busy` is given, a progress line is printed each time it turns on.
    pub async fn drive<F: Future>(
        &mut self,
        fut: F,
        mut busy: Option<watch::Receiver<bool>>,
    ) -> F::Output {
        tokio::pin!(fut);
        loop {
            tokio::select! {
                biased;
                Some(notice) = self.notices.recv() => self.print_notice(notice),
                Ok(()) = wait_busy(busy.as_mut()) => {
                    if busy.as_ref().is_some_and(|b| *b.borrow()) {
                        self.print_line("Processing...");
                    }
                }
                output = &mut fut => {
                    self.flush_notices();
                    return output;
                }
            }
        }
    }

    /// Print every notice already queued.
    pub fn flush_notices(&mut self) {
        while let Ok(notice) = self.notices.try_recv() {
            self.print_notice(notice);
        }
    }

    fn print_notice(&mut self, notice: Notice) {
        let line = match notice.level {
            NoticeLevel::Success => format!("✔ {notice}"),
            NoticeLevel::Error => format!("✖ {notice}"),
        };
        self.print_line(&line);
    }

    fn print_line(&mut self, line: &str) {
        if let Err(e) = writeln!(self.out, "{line}") {
            tracing::debug!(error = %e, "Terminal output closed");
        }
    }
}

impl Write for Terminal {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        self.out.write(buf)
    }

    fn flush(&mut self) -> std::io::Result<()> {
        self.out.flush()
    }
}

async fn wait_busy(busy: Option<&mut watch::Receiver<bool>>) -> Result<(), watch::error::RecvError> {
    match busy {
        Some(busy) => busy.changed().await,
        None => std::future::pending().await,
    }
}

/// Copies through the OSC 52 escape sequence understood by most terminal
/// emulators, including over SSH.
pub struct Osc52Clipboard;

impl Clipboard for Osc52Clipboard {
    fn write_text(&self, text: &str) -> Result<(), ClipboardError> {
        let stdout = std::io::stdout();
        if !stdout.is_terminal() {
            return Err(ClipboardError::Unavailable(
                "stdout is not a terminal".to_string(),
            ));
        }
        let encoded = fast32::base64::RFC4648.encode(text.as_bytes());
        let mut out = stdout.lock();
        write!(out, "{}", osc52_sequence(&encoded))?;
        out.flush()?;
        Ok(())
    }
}

fn osc52_sequence(encoded: &str) -> String {
    format!("\x1b]52;c;{encoded}\x07")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::Captured;
    use std::io::Cursor;
    use topup_core::events::{NoticeKind, Notifier, notice_channel};

    #[tokio::test]
    async fn test_prompt_reads_lines_until_end_of_input() {
        let (_tx, rx) = notice_channel();
        let out = Captured::default();
        let mut term = Terminal::new(Cursor::new(b"Player1\n".to_vec()), out.clone(), rx);

        assert_eq!(term.prompt("Nickname: ").await.unwrap().as_deref(), Some("Player1"));
        assert_eq!(term.prompt("Amount: ").await.unwrap(), None);
        assert_eq!(out.text(), "Nickname: Amount: ");
    }

    #[tokio::test]
    async fn test_drive_prints_notices_raised_by_the_future() {
        let (tx, rx) = notice_channel();
        let notifier = Notifier::new(tx);
        let out = Captured::default();
        let mut term = Terminal::new(Cursor::new(Vec::new()), out.clone(), rx);

        let value = term
            .drive(
                async {
                    notifier.notify(NoticeKind::Copied);
                    notifier.notify(NoticeKind::ConnectionFailed);
                    7
                },
                None,
            )
            .await;

        assert_eq!(value, 7);
        assert_eq!(
            out.text(),
            "✔ Copied to clipboard\n✖ Connection error\n"
        );
    }

    #[test]
    fn test_osc52_sequence() {
        let encoded = fast32::base64::RFC4648.encode(b"1234567890123456");
        assert_eq!(encoded, "MTIzNDU2Nzg5MDEyMzQ1Ng==");
        assert_eq!(
            osc52_sequence(&encoded),
            "\x1b]52;c;MTIzNDU2Nzg5MDEyMzQ1Ng==\x07"
        );
    }
}
