//! Terminal input for interactive cut-ins.

use std::io::{self, BufRead, BufReader, Stdin};
use std::sync::mpsc::{self, Receiver, RecvTimeoutError};
use std::thread;
use std::time::Duration;

use rehearse_core::error::SelectionError;
use rehearse_core::input::ChoiceInput;
use tracing::debug;

/// Reads answers line by line, from stdin unless built over another reader.
///
/// Untimed reads block on the reader directly. The first timed read moves
/// the reader onto a background thread so the wait can be bounded; from
/// then on every read goes through that thread. An answer that arrives
/// after its deadline is discarded before the next prompt.
#[derive(Debug)]
pub struct ConsoleInput<R = BufReader<Stdin>> {
    reader: Option<R>,
    lines: Option<Receiver<io::Result<String>>>,
    stale: bool,
}

impl ConsoleInput {
    /// Creates a reader over stdin.
    #[must_use]
    pub fn new() -> Self {
        Self::from_reader(BufReader::new(io::stdin()))
    }
}

impl Default for ConsoleInput {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: BufRead + Send + 'static> ConsoleInput<R> {
    /// Creates a console input over any line source.
    #[must_use]
    pub fn from_reader(reader: R) -> Self {
        Self {
            reader: Some(reader),
            lines: None,
            stale: false,
        }
    }

    fn read_blocking(reader: &mut R) -> Result<String, SelectionError> {
        let mut line = String::new();
        if reader.read_line(&mut line)? == 0 {
            return Err(SelectionError::Closed);
        }
        Ok(line)
    }

    fn read_threaded(&mut self, timeout: Option<Duration>) -> Result<String, SelectionError> {
        if self.lines.is_none() {
            let reader = self.reader.take().ok_or(SelectionError::Closed)?;
            self.lines = Some(spawn_reader(reader)?);
        }
        let Some(lines) = &self.lines else {
            return Err(SelectionError::Closed);
        };

        if self.stale {
            let dropped = lines.try_iter().count();
            debug!(dropped, "discarded late answers");
            self.stale = false;
        }

        let received = match timeout {
            Some(limit) => lines.recv_timeout(limit).map_err(|err| match err {
                RecvTimeoutError::Timeout => {
                    self.stale = true;
                    SelectionError::TimedOut(limit)
                }
                RecvTimeoutError::Disconnected => SelectionError::Closed,
            })?,
            None => lines.recv().map_err(|_| SelectionError::Closed)?,
        };
        Ok(received?)
    }
}

impl<R: BufRead + Send + 'static> ChoiceInput for ConsoleInput<R> {
    fn read_choice(&mut self, timeout: Option<Duration>) -> Result<String, SelectionError> {
        match self.reader.as_mut() {
            Some(reader) if timeout.is_none() && self.lines.is_none() => {
                Self::read_blocking(reader)
            }
            _ => self.read_threaded(timeout),
        }
    }
}

/// Starts a thread that forwards lines from `reader` until end of input.
fn spawn_reader<R: BufRead + Send + 'static>(
    mut reader: R,
) -> io::Result<Receiver<io::Result<String>>> {
    let (tx, rx) = mpsc::channel();
    thread::Builder::new()
        .name("stdin-reader".to_owned())
        .spawn(move || {
            loop {
                let mut line = String::new();
                match reader.read_line(&mut line) {
                    Ok(0) => break,
                    Ok(_) => {
                        if tx.send(Ok(line)).is_err() {
                            break;
                        }
                    }
                    Err(err) => {
                        let _ = tx.send(Err(err));
                        break;
                    }
                }
            }
        })?;
    Ok(rx)
}
