//! Interactive session loop
//!
//! Reads one line at a time, answers the literal `help`, `exit` and `close`
//! commands itself and hands everything else to the interpreter and
//! executor. Bad commands are reported and the loop keeps going; only an
//! explicit quit, end of input, or an I/O failure ends the session.

use crate::{
    config::{Config, SessionConfig},
    core::{Catalog, CommandExecutor, CommandInterpreter, Outcome},
    error::{FlashcardError, Result},
};
use anyhow::Context;
use std::{
    borrow::Cow,
    fs::File,
    io::{self, BufRead, BufReader, Write},
};
use tracing::{debug, info, instrument};

const HELP_TEXT: &[&str] = &[
    "You can perform the following actions:",
    "1) Add deckName Deck",
    "2) Add flashcard-front/flashcard-back flashcard to deckName Deck",
    "3) Remove deckName Deck",
    "4) Remove flashcard-front/flashcard-back flashcard from deckName Deck",
    "Type 'exit' or 'close' to quit.",
];

/// Where the session loop currently is
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    /// Between commands, ready for the next line
    WaitingForInput,
    /// Applying a command; only held inside [`Session::handle_line`]
    Dispatching,
    /// Quit, `close`, or end of input seen; no further lines are read
    Closed,
}

/// One interactive session and the catalog it owns
#[derive(Debug)]
pub struct Session {
    config: SessionConfig,
    interpreter: CommandInterpreter,
    executor: CommandExecutor,
    catalog: Catalog,
    state: SessionState,
}

impl Session {
    /// Create a session with an empty catalog
    pub fn new(config: &Config) -> Self {
        Self {
            config: config.session.clone(),
            interpreter: CommandInterpreter::new(),
            executor: CommandExecutor::new(config.card_matching),
            catalog: Catalog::new(),
            state: SessionState::WaitingForInput,
        }
    }

    /// Decks created so far
    pub const fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Current state; from outside a call this is `WaitingForInput` or `Closed`
    pub const fn state(&self) -> SessionState {
        self.state
    }

    /// Run until the user quits or input ends
    #[instrument(skip_all)]
    pub fn run<R: BufRead, W: Write>(&mut self, mut input: R, output: &mut W) -> Result<()> {
        if self.config.show_banner {
            emit(output, "Welcome to the flashcard application!")?;
            emit(output, "What would you like to do?")?;
        }

        let mut buffer = Vec::new();
        while self.state != SessionState::Closed {
            write!(output, "{}", self.config.prompt)
                .and_then(|()| output.flush())
                .map_err(|e| FlashcardError::io("write prompt", e))?;

            buffer.clear();
            let read = input
                .read_until(b'\n', &mut buffer)
                .map_err(|e| FlashcardError::io("read input", e))?;

            if read == 0 {
                debug!("Input ended, closing session");
                emit(output, "")?;
                self.close(output)?;
            } else {
                let line = decode_line(&buffer);
                self.handle_line(&line, output)?;
            }
        }

        Ok(())
    }

    /// Handle a single input line
    pub fn handle_line<W: Write>(&mut self, line: &str, output: &mut W) -> Result<()> {
        match line.trim() {
            "" => Ok(()),
            "help" => self.print_help(output),
            "exit" | "close" => self.close(output),
            command => {
                self.state = SessionState::Dispatching;
                let result = self.dispatch(command);
                self.state = SessionState::WaitingForInput;

                match result {
                    Ok(outcome) => emit(output, &outcome.to_string()),
                    Err(e) if e.is_recoverable() => {
                        debug!("Recovered from: {}", e);
                        emit(output, &format!("Error: {e}"))
                    }
                    Err(e) => Err(e),
                }
            }
        }
    }

    fn dispatch(&mut self, command: &str) -> Result<Outcome> {
        let parsed = self.interpreter.parse(command)?;
        self.executor.execute(&parsed, &mut self.catalog)
    }

    fn print_help<W: Write>(&self, output: &mut W) -> Result<()> {
        for line in HELP_TEXT {
            emit(output, line)?;
        }

        emit(output, "You have the following decks:")?;
        for deck in self.catalog.decks() {
            emit(
                output,
                &format!("Deck name: {} ({} card(s))", deck.name(), deck.len()),
            )?;
        }
        Ok(())
    }

    fn close<W: Write>(&mut self, output: &mut W) -> Result<()> {
        self.state = SessionState::Closed;
        info!("Session closed with {} deck(s)", self.catalog.len());
        emit(output, "Goodbye!")
    }
}

/// Decode one raw input line, replacing invalid UTF-8 and dropping the line ending
fn decode_line(raw: &[u8]) -> Cow<'_, str> {
    let raw = raw.strip_suffix(b"\n").unwrap_or(raw);
    let raw = raw.strip_suffix(b"\r").unwrap_or(raw);
    let line = String::from_utf8_lossy(raw);
    if matches!(line, Cow::Owned(_)) {
        debug!("Replaced invalid UTF-8 in input line");
    }
    line
}

fn emit<W: Write>(output: &mut W, text: &str) -> Result<()> {
    writeln!(output, "{text}").map_err(|e| FlashcardError::io("write output", e))
}

/// Run a session on stdout, reading from the configured script or stdin
#[instrument(skip(config))]
pub fn run_session(config: &Config) -> anyhow::Result<()> {
    let mut session = Session::new(config);
    let stdout = io::stdout();
    let mut output = stdout.lock();

    match &config.input.script {
        Some(path) => {
            info!("Reading commands from: {}", path.display());
            let file = File::open(path)
                .with_context(|| format!("Failed to open script {}", path.display()))?;
            session
                .run(BufReader::new(file), &mut output)
                .context("Session failed")?;
        }
        None => {
            let stdin = io::stdin();
            session
                .run(stdin.lock(), &mut output)
                .context("Session failed")?;
        }
    }

    Ok(())
}
