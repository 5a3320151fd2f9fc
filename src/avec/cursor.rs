//! A budgeted sequential reader.

use std::io::{self, Read};

use super::Error;

/// Reads bytes in sequence, refusing to read past a budget of remaining bytes.
#[derive(Debug)]
pub struct ByteCursor<R> {
    inner: R,
    remaining: u64,
}

impl<R: Read> ByteCursor<R> {
    /// Wrap a reader with an initial budget.
    pub fn new(inner: R, remaining: u64) -> Self {
        Self { inner, remaining }
    }

    /// Bytes left in the budget.
    pub fn remaining(&self) -> u64 {
        self.remaining
    }

    /// Replace the budget.
    pub fn set_remaining(&mut self, remaining: u64) {
        self.remaining = remaining;
    }

    /// Take an exact number of bytes, advancing the cursor.
    pub fn take<const N: usize>(&mut self) -> Result<[u8; N], Error> {
        self.charge(N)?;

        let mut buf = [0; N];
        self.inner.read_exact(&mut buf)?;

        Ok(buf)
    }

    /// Take a run of bytes of a length known only at runtime.
    pub fn take_vec(&mut self, n: usize) -> Result<Vec<u8>, Error> {
        self.charge(n)?;

        let mut buf = vec![0; n];
        self.inner.read_exact(&mut buf)?;

        Ok(buf)
    }

    /// Skip over bytes without keeping them.
    pub fn skip(&mut self, n: usize) -> Result<(), Error> {
        self.charge(n)?;

        let skipped = io::copy(&mut self.inner.by_ref().take(n as u64), &mut io::sink())?;
        if skipped != n as u64 {
            Err(io::Error::from(io::ErrorKind::UnexpectedEof))?;
        }

        Ok(())
    }

    /// Deduct bytes from the budget, failing if too few remain.
    fn charge(&mut self, n: usize) -> Result<(), Error> {
        let requested = n as u64;

        self.remaining = self
            .remaining
            .checked_sub(requested)
            .ok_or(Error::Overrun {
                requested,
                remaining: self.remaining,
            })?;

        Ok(())
    }
}
