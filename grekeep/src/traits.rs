pub use bytes::Buf;

use bytes::BytesMut;

use crate::AdjustHeadError;

/// A packet buffer whose head can be moved forward.
///
/// This is the only mutation the keepalive reflector performs: the bytes in
/// front of the tunneled payload are discarded and nothing else is touched.
pub trait PktBuf {
    /// The packet bytes, from the current head to the end of the packet.
    fn data(&self) -> &[u8];

    /// Discard `cnt` bytes from the head of the packet.
    ///
    /// On error the buffer must be left as it was.
    fn adjust_head(&mut self, cnt: usize) -> Result<(), AdjustHeadError>;
}

impl<T: PktBuf + ?Sized> PktBuf for &mut T {
    #[inline]
    fn data(&self) -> &[u8] {
        (**self).data()
    }

    #[inline]
    fn adjust_head(&mut self, cnt: usize) -> Result<(), AdjustHeadError> {
        (**self).adjust_head(cnt)
    }
}

impl PktBuf for BytesMut {
    #[inline]
    fn data(&self) -> &[u8] {
        &self[..]
    }

    #[inline]
    fn adjust_head(&mut self, cnt: usize) -> Result<(), AdjustHeadError> {
        if cnt > self.len() {
            return Err(AdjustHeadError::OutOfRange {
                requested: cnt,
                len: self.len(),
            });
        }
        Buf::advance(self, cnt);
        Ok(())
    }
}
