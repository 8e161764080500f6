use crate::error::Error;
use libc::{ioctl, winsize, STDOUT_FILENO, TIOCGWINSZ};
use std::fmt;
use std::io;
use std::mem;

/// The ioctl command that asks the terminal driver for its window size.
pub const QUERY_COMMAND: libc::c_ulong = TIOCGWINSZ;

/// Size of the struct the driver fills in for QUERY_COMMAND.
pub const RESULT_STRUCT_SIZE: usize = mem::size_of::<winsize>();

/// Terminal size in character cells, as reported by the driver.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TerminalDimensions {
    pub rows: u16,
    pub columns: u16,
}

impl fmt::Display for TerminalDimensions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}, {}", self.rows, self.columns)
    }
}

pub fn query_terminal_size() -> Result<TerminalDimensions, Error> {
    interpret(raw_winsize())
}

fn raw_winsize() -> Result<winsize, io::Error> {
    unsafe {
        let mut winsize = mem::zeroed();
        if ioctl(STDOUT_FILENO, TIOCGWINSZ, &mut winsize) == -1 {
            return Err(io::Error::last_os_error());
        }
        Ok(winsize)
    }
}

// A terminal reporting zero columns is as unusable as no terminal at
// all, so that counts as a failed query even when the ioctl succeeds.
// Zero rows passes through untouched.
fn interpret(raw: Result<winsize, io::Error>) -> Result<TerminalDimensions, Error> {
    let winsize = raw?;
    log::trace!("ioctl reported {}x{} cells", winsize.ws_row, winsize.ws_col);
    if winsize.ws_col == 0 {
        return Err(Error::zero_columns());
    }
    Ok(TerminalDimensions {
        rows: winsize.ws_row,
        columns: winsize.ws_col,
    })
}
