use thiserror::Error;

/// A header read that would run past the end of the packet.
///
/// This is the only way classification fails. A truncated packet is dropped,
/// never passed on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("truncated packet: need {needed} bytes at offset {offset}, {available} available")]
pub struct Truncated {
    /// Cursor position of the failed read.
    pub offset: usize,
    /// Bytes the read required.
    pub needed: usize,
    /// Bytes left between the cursor and the end of the packet.
    pub available: usize,
}

/// The packet buffer refused to move its head.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum AdjustHeadError {
    /// More bytes were requested than the packet holds.
    #[error("cannot discard {requested} bytes from a {len} byte packet")]
    OutOfRange {
        /// Bytes to discard.
        requested: usize,
        /// Packet length before the adjustment.
        len: usize,
    },
    /// The buffer has a lower bound on the packet length.
    #[error("discarding {requested} bytes leaves {left}, below the {min} byte minimum")]
    BelowMinimum {
        /// Bytes to discard.
        requested: usize,
        /// Packet length the adjustment would leave.
        left: usize,
        /// Smallest packet the buffer accepts.
        min: usize,
    },
}
