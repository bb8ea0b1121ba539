//! Full-read adapter over a byte source.
//!
//! A single `read` call may return fewer bytes than asked for even when more
//! are on the way. The adapter keeps reading until the buffer is full, and only
//! reports a short read once the source signals end of stream.

use std::io::{ErrorKind, Read};

use snafu::ResultExt;

use crate::error::DecodeResult;
use crate::error::decode::{IoSnafu, ShortReadSnafu};

#[derive(Debug)]
pub(crate) struct FullRead<R> {
    inner: R,
    consumed: usize,
}

impl<R: Read> FullRead<R> {
    pub(crate) fn new(inner: R) -> Self {
        Self { inner, consumed: 0 }
    }

    /// Fill `buf` completely.
    ///
    /// Retries `Interrupted`. Fails with `ShortRead` if the source ends first;
    /// the bytes already read stay in `buf` and are counted as consumed.
    pub(crate) fn fill(&mut self, buf: &mut [u8]) -> DecodeResult {
        let mut filled = 0;
        while filled < buf.len() {
            match self.inner.read(&mut buf[filled..]) {
                Ok(0) => break,
                Ok(n) => filled += n,
                Err(e) if e.kind() == ErrorKind::Interrupted => {}
                Err(e) => {
                    self.consumed += filled;
                    return Err(e).context(IoSnafu);
                }
            }
        }
        self.consumed += filled;

        if filled < buf.len() {
            return ShortReadSnafu {
                needed: buf.len(),
                available: filled,
            }
            .fail();
        }
        Ok(())
    }

    pub(crate) fn consumed(&self) -> usize {
        self.consumed
    }

    pub(crate) fn into_inner(self) -> R {
        self.inner
    }
}
