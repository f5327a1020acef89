//! Budget-tracked byte source.

use std::io::{self, Read};

use crate::error::{Result, WireError};

/// Wraps a sequential byte source with a remaining-byte budget.
///
/// The budget is typically seeded from a frame header's declared size. Every
/// decode step requests bytes through this reader, which refuses any read
/// that would overrun the budget. This is what makes it safe to decode a
/// value embedded inside a larger framed stream without eating into the next
/// frame's bytes.
///
/// The reader never blocks on its own; blocking is whatever the underlying
/// source does.
pub struct BudgetedReader<R> {
    src: R,
    remaining: usize,
}

impl<R: Read> BudgetedReader<R> {
    pub fn new(src: R, budget: usize) -> Self {
        Self {
            src,
            remaining: budget,
        }
    }

    /// Bytes still available to the current decoding scope.
    ///
    /// Callers inspect this after a top-level decode to detect trailing
    /// bytes; whether leftovers are an error is the caller's call, not ours.
    pub fn remaining(&self) -> usize {
        self.remaining
    }

    /// Fill `buf` exactly, charging its length against the budget.
    pub fn read_exact(&mut self, buf: &mut [u8]) -> Result<()> {
        if buf.len() > self.remaining {
            return Err(WireError::BudgetExceeded {
                needed: buf.len(),
                remaining: self.remaining,
            });
        }
        self.src.read_exact(buf).map_err(|e| {
            if e.kind() == io::ErrorKind::UnexpectedEof {
                WireError::TruncatedInput { needed: buf.len() }
            } else {
                WireError::Io(e)
            }
        })?;
        self.remaining -= buf.len();
        Ok(())
    }

    /// Read exactly `len` raw bytes, no length prefix involved.
    pub fn read_raw(&mut self, len: usize) -> Result<Vec<u8>> {
        let mut buf = vec![0u8; len];
        self.read_exact(&mut buf)?;
        Ok(buf)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn charges_budget_per_read() {
        let data = [1u8, 2, 3, 4, 5, 6];
        let mut reader = BudgetedReader::new(&data[..], 6);

        let mut buf = [0u8; 2];
        reader.read_exact(&mut buf).unwrap();
        assert_eq!(buf, [1, 2]);
        assert_eq!(reader.remaining(), 4);

        let rest = reader.read_raw(4).unwrap();
        assert_eq!(rest, vec![3, 4, 5, 6]);
        assert_eq!(reader.remaining(), 0);
    }

    #[test]
    fn refuses_reads_past_the_budget() {
        let data = [1u8, 2, 3, 4];
        let mut reader = BudgetedReader::new(&data[..], 2);

        let mut buf = [0u8; 3];
        let err = reader.read_exact(&mut buf).unwrap_err();
        assert!(matches!(
            err,
            WireError::BudgetExceeded {
                needed: 3,
                remaining: 2
            }
        ));
        // a failed read leaves the budget untouched
        assert_eq!(reader.remaining(), 2);
    }

    #[test]
    fn truncated_source_is_not_a_budget_error() {
        let data = [1u8, 2];
        let mut reader = BudgetedReader::new(&data[..], 10);

        let mut buf = [0u8; 4];
        let err = reader.read_exact(&mut buf).unwrap_err();
        assert!(matches!(err, WireError::TruncatedInput { needed: 4 }));
    }
}
