use bytes::Buf;

use crate::{AdjustHeadError, PktBuf, Truncated};

/// A bounds-checked reader over one packet.
///
/// Every read re-checks `cursor + len <= end` itself, regardless of what was
/// checked before it. A failed check is reported as [`Truncated`].
#[derive(Debug, Clone, Copy)]
pub struct Cursor<'a> {
    buf: &'a [u8],
    pos: usize,
}

impl<'a> Cursor<'a> {
    /// Start reading at the beginning of `buf`.
    #[inline]
    pub fn new(buf: &'a [u8]) -> Self {
        Cursor { buf, pos: 0 }
    }

    /// The whole packet, including the bytes already consumed.
    #[inline]
    pub fn buf(&self) -> &'a [u8] {
        self.buf
    }

    /// Current offset from the start of the packet.
    #[inline]
    pub fn cursor(&self) -> usize {
        self.pos
    }

    /// Check that `len` bytes are available at the cursor.
    #[inline]
    pub fn ensure(&self, len: usize) -> Result<(), Truncated> {
        let available = self.buf.len() - self.pos;
        if len > available {
            return Err(Truncated {
                offset: self.pos,
                needed: len,
                available,
            });
        }
        Ok(())
    }

    /// A view of the `len` bytes at the cursor, without advancing.
    #[inline]
    pub fn peek(&self, len: usize) -> Result<&'a [u8], Truncated> {
        self.ensure(len)?;
        Ok(&self.buf[self.pos..self.pos + len])
    }

    /// Move the cursor forward by `len` bytes.
    #[inline]
    pub fn skip(&mut self, len: usize) -> Result<(), Truncated> {
        self.ensure(len)?;
        self.pos += len;
        Ok(())
    }

    /// A view of the `len` bytes at the cursor, advancing past them.
    #[inline]
    pub fn take(&mut self, len: usize) -> Result<&'a [u8], Truncated> {
        let view = self.peek(len)?;
        self.pos += len;
        Ok(view)
    }
}

impl<'a> Buf for Cursor<'a> {
    #[inline]
    fn remaining(&self) -> usize {
        self.buf.len() - self.pos
    }

    #[inline]
    fn chunk(&self) -> &[u8] {
        &self.buf[self.pos..]
    }

    #[inline]
    fn advance(&mut self, cnt: usize) {
        assert!(cnt <= self.remaining());
        self.pos += cnt;
    }
}

/// A mutable packet buffer whose head can be moved forward.
///
/// `min_len` bounds how short an adjustment may leave the packet. XDP for
/// instance refuses to shrink a frame below an Ethernet header.
#[derive(Debug)]
pub struct CursorMut<'a> {
    buf: &'a mut [u8],
    pos: usize,
    min_len: usize,
}

impl<'a> CursorMut<'a> {
    /// Wrap `buf`, allowing its head to move all the way to the end.
    #[inline]
    pub fn new(buf: &'a mut [u8]) -> Self {
        Self::with_min_len(buf, 0)
    }

    /// Wrap `buf`, refusing head moves that leave fewer than `min_len` bytes.
    #[inline]
    pub fn with_min_len(buf: &'a mut [u8], min_len: usize) -> Self {
        CursorMut {
            buf,
            pos: 0,
            min_len,
        }
    }

    /// The whole underlying buffer, including the discarded head.
    #[inline]
    pub fn buf(&self) -> &[u8] {
        self.buf
    }

    /// Bytes discarded from the head so far.
    #[inline]
    pub fn cursor(&self) -> usize {
        self.pos
    }
}

impl<'a> Buf for CursorMut<'a> {
    #[inline]
    fn remaining(&self) -> usize {
        self.buf.len() - self.pos
    }

    #[inline]
    fn chunk(&self) -> &[u8] {
        &self.buf[self.pos..]
    }

    #[inline]
    fn advance(&mut self, cnt: usize) {
        assert!(cnt <= self.remaining());
        self.pos += cnt;
    }
}

impl<'a> PktBuf for CursorMut<'a> {
    #[inline]
    fn data(&self) -> &[u8] {
        &self.buf[self.pos..]
    }

    fn adjust_head(&mut self, cnt: usize) -> Result<(), AdjustHeadError> {
        let len = self.remaining();
        if cnt > len {
            return Err(AdjustHeadError::OutOfRange {
                requested: cnt,
                len,
            });
        }
        if len - cnt < self.min_len {
            return Err(AdjustHeadError::BelowMinimum {
                requested: cnt,
                left: len - cnt,
                min: self.min_len,
            });
        }
        self.pos += cnt;
        Ok(())
    }
}
