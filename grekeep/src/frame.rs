//! Recognise how the tunnel packet is framed.

use crate::ether::{EtherHeader, EtherType, ETHER_HEADER_LEN};
use crate::{Cursor, Truncated, TunnelModes};

/// The outer shape of a GRE tunnel packet.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TunnelFrame {
    /// An Ethernet header carrying IPv6, then GRE.
    EtherIpv6,
    /// An IPv4 header, then GRE.
    RawIpv4,
    /// An IPv6 header, then GRE.
    RawIpv6,
}

impl TunnelFrame {
    /// IP version of the tunnel header.
    pub fn ip_version(&self) -> u8 {
        match self {
            TunnelFrame::RawIpv4 => 4,
            TunnelFrame::EtherIpv6 | TunnelFrame::RawIpv6 => 6,
        }
    }

    /// Bytes of link layer framing before the tunnel header.
    pub fn link_header_len(&self) -> usize {
        match self {
            TunnelFrame::EtherIpv6 => ETHER_HEADER_LEN,
            TunnelFrame::RawIpv4 | TunnelFrame::RawIpv6 => 0,
        }
    }
}

/// Determine the outer framing at the cursor and skip any link layer header.
///
/// `Ok(None)` means the packet is not tunnel traffic of an accepted shape.
/// An empty packet is [`Truncated`].
///
/// The Ethernet check comes first: a packet with `0x86DD` at offset 12 and
/// version 6 at offset 14 is taken to be Ethernet framed, even if it would
/// also read as a raw IP header.
pub fn delimit(
    cursor: &mut Cursor<'_>,
    modes: &TunnelModes,
) -> Result<Option<TunnelFrame>, Truncated> {
    cursor.ensure(1)?;

    if modes.ether_ipv6 {
        if let Ok(prefix) = cursor.peek(ETHER_HEADER_LEN + 1) {
            let eth = EtherHeader::parse_unchecked(prefix);
            if eth.ethertype() == EtherType::IPV6 && prefix[ETHER_HEADER_LEN] >> 4 == 6 {
                cursor.skip(ETHER_HEADER_LEN)?;
                return Ok(Some(TunnelFrame::EtherIpv6));
            }
        }
    }

    let version = cursor.peek(1)?[0] >> 4;
    let frame = match version {
        4 if modes.raw_ipv4 => Some(TunnelFrame::RawIpv4),
        6 if modes.raw_ipv6 => Some(TunnelFrame::RawIpv6),
        _ => None,
    };
    Ok(frame)
}
