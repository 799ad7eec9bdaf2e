//! Key sources - the single polling seam between the loops and the keyboard.

use std::collections::VecDeque;
use std::io;
use std::time::Duration;

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind};

/// Something that yields key presses.
pub trait KeySource {
    /// Wait for the next key press.
    ///
    /// With `Some(timeout)` this returns `Ok(None)` if nothing arrives in time;
    /// a zero timeout makes it a pure non-blocking check. With `None` it blocks
    /// until a key is pressed.
    fn next_key(&mut self, timeout: Option<Duration>) -> io::Result<Option<KeyEvent>>;
}

/// Keys from the real terminal via crossterm.
///
/// Expects raw mode to be enabled by the caller.
#[derive(Debug, Default)]
pub struct TerminalKeys;

impl TerminalKeys {
    pub fn new() -> Self {
        Self
    }
}

impl KeySource for TerminalKeys {
    fn next_key(&mut self, timeout: Option<Duration>) -> io::Result<Option<KeyEvent>> {
        loop {
            if let Some(timeout) = timeout {
                if !event::poll(timeout)? {
                    return Ok(None);
                }
            }
            match event::read()? {
                // Release/repeat events only show up with keyboard enhancement flags.
                Event::Key(key) if key.kind == KeyEventKind::Press => return Ok(Some(key)),
                _ if timeout.is_some() => return Ok(None),
                _ => continue,
            }
        }
    }
}

/// Pre-recorded keys, for driving loops in tests.
///
/// Each `Some` entry is one key press; each `None` entry is one poll that
/// times out. Blocking reads skip `None` entries and fail with
/// `UnexpectedEof` once the script is exhausted.
#[derive(Debug, Default, Clone)]
pub struct ScriptedKeys {
    queue: VecDeque<Option<KeyEvent>>,
    polls: usize,
}

impl ScriptedKeys {
    pub fn new() -> Self {
        Self::default()
    }

    /// Script of plain character presses.
    pub fn from_chars(chars: &str) -> Self {
        let mut keys = Self::new();
        for ch in chars.chars() {
            keys.push_char(ch);
        }
        keys
    }

    pub fn push_key(&mut self, key: KeyEvent) -> &mut Self {
        self.queue.push_back(Some(key));
        self
    }

    pub fn push_char(&mut self, ch: char) -> &mut Self {
        self.push_key(KeyEvent::from(KeyCode::Char(ch)))
    }

    /// Queue `n` polls that see no key.
    pub fn push_idle(&mut self, n: usize) -> &mut Self {
        self.queue.extend(std::iter::repeat(None).take(n));
        self
    }

    /// Number of `next_key` calls served so far.
    pub fn polls(&self) -> usize {
        self.polls
    }

    pub fn remaining(&self) -> usize {
        self.queue.len()
    }
}

impl KeySource for ScriptedKeys {
    fn next_key(&mut self, timeout: Option<Duration>) -> io::Result<Option<KeyEvent>> {
        self.polls += 1;
        match timeout {
            Some(_) => Ok(self.queue.pop_front().flatten()),
            None => {
                while let Some(entry) = self.queue.pop_front() {
                    if entry.is_some() {
                        return Ok(entry);
                    }
                }
                Err(io::Error::new(
                    io::ErrorKind::UnexpectedEof,
                    "key script exhausted",
                ))
            }
        }
    }
}
