//! Command mailbox between the transport and the render loop
//!
//! The transport (BLE task, UART interrupt, ...) posts raw command lines; the
//! render loop takes at most one per frame. Backed by a fixed `heapless::Deque`
//! of fixed-capacity strings and guarded by `critical-section`, so posting is
//! safe from interrupts and other executors.

use core::cell::RefCell;

use critical_section::Mutex;
use heapless::{Deque, String};

/// Longest command line the mailbox accepts, in bytes
pub const COMMAND_CAPACITY: usize = 32;

/// One queued command line
pub type CommandText = String<COMMAND_CAPACITY>;

/// Error returned when a command line cannot be queued
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PostError {
    /// Line is longer than [`COMMAND_CAPACITY`]
    TooLong,
    /// Mailbox already holds `SIZE` lines
    Full,
}

/// Bounded queue of command lines
pub struct CommandMailbox<const SIZE: usize> {
    inner: Mutex<RefCell<Deque<CommandText, SIZE>>>,
}

impl<const SIZE: usize> CommandMailbox<SIZE> {
    pub const fn new() -> Self {
        Self {
            inner: Mutex::new(RefCell::new(Deque::new())),
        }
    }

    /// Handle for the transport side
    pub const fn sender(&self) -> CommandSender<'_, SIZE> {
        CommandSender { mailbox: self }
    }

    /// Handle for the render loop
    pub const fn receiver(&self) -> CommandReceiver<'_, SIZE> {
        CommandReceiver { mailbox: self }
    }

    /// Queue a command line, trimmed of surrounding whitespace
    ///
    /// Blank lines are accepted and dropped.
    pub fn try_post(&self, text: &str) -> Result<(), PostError> {
        let text = text.trim();
        if text.is_empty() {
            return Ok(());
        }

        let mut line = CommandText::new();
        line.push_str(text).map_err(|()| PostError::TooLong)?;

        critical_section::with(|cs| {
            let mut queue = self.inner.borrow(cs).borrow_mut();
            queue.push_back(line).map_err(|_| PostError::Full)
        })
    }

    /// Take the oldest queued line
    pub fn try_take(&self) -> Option<CommandText> {
        critical_section::with(|cs| self.inner.borrow(cs).borrow_mut().pop_front())
    }

    /// Number of queued lines
    pub fn len(&self) -> usize {
        critical_section::with(|cs| self.inner.borrow(cs).borrow().len())
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl<const SIZE: usize> Default for CommandMailbox<SIZE> {
    fn default() -> Self {
        Self::new()
    }
}

/// Posting handle for a [`CommandMailbox`]
#[derive(Clone, Copy)]
pub struct CommandSender<'a, const SIZE: usize> {
    mailbox: &'a CommandMailbox<SIZE>,
}

impl<const SIZE: usize> CommandSender<'_, SIZE> {
    pub fn try_post(&self, text: &str) -> Result<(), PostError> {
        self.mailbox.try_post(text)
    }
}

/// Receiving handle for a [`CommandMailbox`]
#[derive(Clone, Copy)]
pub struct CommandReceiver<'a, const SIZE: usize> {
    mailbox: &'a CommandMailbox<SIZE>,
}

impl<const SIZE: usize> CommandReceiver<'_, SIZE> {
    pub fn try_take(&self) -> Option<CommandText> {
        self.mailbox.try_take()
    }
}
