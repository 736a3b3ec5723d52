use core::fmt;

use crate::ether::EtherType;

/// What the caller should do with a packet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Verdict {
    /// Hand the packet, unmodified, to the network stack.
    Pass,
    /// The head of the packet was discarded; send the rest back out of the
    /// interface it arrived on.
    Transmit,
    /// Discard the packet.
    Drop,
}

impl Verdict {
    /// The matching XDP action code.
    #[inline]
    pub const fn xdp_action(self) -> u32 {
        match self {
            Verdict::Drop => 1,
            Verdict::Pass => 2,
            Verdict::Transmit => 3,
        }
    }
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Verdict::Pass => "pass",
            Verdict::Transmit => "transmit",
            Verdict::Drop => "drop",
        };
        f.write_str(s)
    }
}

/// Why a well-formed packet is not a keepalive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PassReason {
    /// The packet does not start with an accepted tunnel framing.
    UnknownFraming,
    /// The outer GRE header carries neither IPv4 nor IPv6.
    UnsupportedProtocol(EtherType),
    /// The tunneled packet is not GRE over the same IP version as the tunnel.
    NotNestedGre,
    /// The inner IPv4 header declares a length below 20 bytes.
    InnerHeaderLen(u8),
    /// The inner GRE protocol type is not the keepalive marker.
    NotKeepalive(u16),
    /// The inner addresses are not the reverse of the outer ones.
    AddressMismatch,
}

impl fmt::Display for PassReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PassReason::UnknownFraming => f.write_str("unknown outer framing"),
            PassReason::UnsupportedProtocol(proto) => {
                write!(f, "gre carries unsupported protocol {:?}", proto)
            }
            PassReason::NotNestedGre => f.write_str("tunneled packet is not gre"),
            PassReason::InnerHeaderLen(len) => write!(f, "inner ipv4 header length {}", len),
            PassReason::NotKeepalive(proto) => {
                write!(f, "inner gre protocol {:#06x} is not a keepalive", proto)
            }
            PassReason::AddressMismatch => f.write_str("inner addresses do not mirror outer"),
        }
    }
}

/// Outcome of classifying a well-formed packet.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Decision {
    /// Leave the packet alone.
    Pass(PassReason),
    /// A keepalive: discard the first `cutoff` bytes and transmit the rest.
    Reflect {
        /// Offset of the first byte after the outer GRE header.
        cutoff: usize,
    },
}
