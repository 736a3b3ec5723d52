#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::ether::EtherType;

/// Outer framings accepted by the frame delimiter.
///
/// Enable the framings of the device the classifier is attached to. The
/// Ethernet check runs first, so with `ether_ipv6` and `raw_ipv4` both on, an
/// IPv4 packet whose source address starts `134.221.96-111` reads as an
/// Ethernet frame carrying IPv6. Such a packet is mistaken for a truncated
/// IPv6 tunnel packet and dropped, keepalives from that range included.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize), serde(default))]
pub struct TunnelModes {
    /// GRE over IPv4, starting directly with the IPv4 header.
    pub raw_ipv4: bool,
    /// GRE over IPv6, starting directly with the IPv6 header.
    pub raw_ipv6: bool,
    /// GRE over IPv6 behind a 14 byte Ethernet header, as delivered on
    /// `ip6gre` tunnel devices.
    pub ether_ipv6: bool,
}

impl TunnelModes {
    /// An IPv4 `gre` tunnel device. This is the default.
    pub const GRE: Self = Self {
        raw_ipv4: true,
        raw_ipv6: false,
        ether_ipv6: false,
    };

    /// An `ip6gre` tunnel device, where packets arrive Ethernet framed.
    pub const IP6GRE: Self = Self {
        raw_ipv4: false,
        raw_ipv6: false,
        ether_ipv6: true,
    };
}

impl Default for TunnelModes {
    fn default() -> Self {
        Self::GRE
    }
}

/// Classifier configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize), serde(default))]
pub struct Config {
    /// Accepted outer framings.
    pub tunnels: TunnelModes,

    /// Accept IPv4 keepalives whose inner addresses are not the reverse of
    /// the outer ones.
    ///
    /// VeloCloud edges (firmware 4.3.0 talking to Zscaler) build keepalives
    /// from their physical and tunnel addresses, which fails the reversal
    /// check. The IPv6 path has no such switch.
    pub velocloud_compat: bool,

    /// Inner GRE protocol type that marks an IPv6 keepalive.
    ///
    /// MikroTik RouterOS sends `0x86DD`. Other vendors are unverified.
    pub ipv6_keepalive_proto: u16,

    /// Log every classification step at trace level.
    pub trace: bool,

    /// Hex dump this many leading bytes of every packet at trace level.
    pub dump_header_len: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            tunnels: TunnelModes::default(),
            velocloud_compat: false,
            ipv6_keepalive_proto: EtherType::IPV6.raw(),
            trace: false,
            dump_header_len: 0,
        }
    }
}
