//! Build the keepalive probes a tunnel endpoint sends.
//!
//! A probe from `local` to `remote` is a GRE packet whose payload is a second
//! GRE packet addressed from `remote` back to `local`. The receiving end
//! strips the outer headers and the inner packet routes itself home.

use crate::ether::{EtherAddr, EtherHeader, EtherType, ETHER_HEADER_LEN, ETHER_HEADER_TEMPLATE};
use crate::gre::{GreHeader, GRE_HEADER_LEN, GRE_HEADER_TEMPLATE};
use crate::ipv4::{IpProtocol, Ipv4Addr, Ipv4Header, IPV4_HEADER_LEN, IPV4_HEADER_TEMPLATE};
use crate::ipv6::{Ipv6Addr, Ipv6Header, IPV6_HEADER_LEN, IPV6_HEADER_TEMPLATE};
use crate::Truncated;

const PROBE_TTL: u8 = 255;

/// A GRE keepalive probe.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Probe {
    /// Cisco style IPv4 keepalive, inner GRE protocol type 0.
    Ipv4 {
        /// The sending tunnel endpoint.
        local: Ipv4Addr,
        /// The endpoint expected to reflect the probe.
        remote: Ipv4Addr,
    },
    /// MikroTik style IPv6 keepalive.
    Ipv6 {
        /// The sending tunnel endpoint.
        local: Ipv6Addr,
        /// The endpoint expected to reflect the probe.
        remote: Ipv6Addr,
        /// Inner GRE protocol type, `0x86DD` for RouterOS.
        marker: u16,
        /// Destination and source link address, to prepend an Ethernet header.
        link: Option<(EtherAddr, EtherAddr)>,
    },
}

impl Probe {
    /// Total length of the probe in bytes.
    pub fn len(&self) -> usize {
        match self {
            Probe::Ipv4 { .. } => 2 * (IPV4_HEADER_LEN + GRE_HEADER_LEN),
            Probe::Ipv6 { link, .. } => {
                let link_len = if link.is_some() { ETHER_HEADER_LEN } else { 0 };
                link_len + 2 * (IPV6_HEADER_LEN + GRE_HEADER_LEN)
            }
        }
    }

    /// Bytes the receiving end strips before sending the probe back.
    pub fn outer_len(&self) -> usize {
        match self {
            Probe::Ipv4 { .. } => IPV4_HEADER_LEN + GRE_HEADER_LEN,
            Probe::Ipv6 { .. } => self.len() - (IPV6_HEADER_LEN + GRE_HEADER_LEN),
        }
    }

    /// Write the probe to the front of `out`, returning its length.
    pub fn write(&self, out: &mut [u8]) -> Result<usize, Truncated> {
        let len = self.len();
        if out.len() < len {
            return Err(Truncated {
                offset: 0,
                needed: len,
                available: out.len(),
            });
        }

        match *self {
            Probe::Ipv4 { local, remote } => {
                let (outer, inner) = out[..len].split_at_mut(IPV4_HEADER_LEN + GRE_HEADER_LEN);
                let inner_len = inner.len();
                write_ipv4_gre(outer, local, remote, len, EtherType::IPV4.raw());
                write_ipv4_gre(inner, remote, local, inner_len, 0);
            }
            Probe::Ipv6 {
                local,
                remote,
                marker,
                link,
            } => {
                let ip = match link {
                    Some((dst, src)) => {
                        let (frame, ip) = out[..len].split_at_mut(ETHER_HEADER_LEN);
                        frame.copy_from_slice(&ETHER_HEADER_TEMPLATE);
                        let mut eth = EtherHeader::parse_unchecked(frame);
                        eth.set_dst_addr(dst);
                        eth.set_src_addr(src);
                        eth.set_ethertype(EtherType::IPV6);
                        ip
                    }
                    None => &mut out[..len],
                };
                let (outer, inner) = ip.split_at_mut(IPV6_HEADER_LEN + GRE_HEADER_LEN);
                let outer_payload_len = GRE_HEADER_LEN + inner.len();
                write_ipv6_gre(outer, local, remote, outer_payload_len, EtherType::IPV6.raw());
                write_ipv6_gre(inner, remote, local, GRE_HEADER_LEN, marker);
            }
        }
        Ok(len)
    }
}

fn write_ipv4_gre(out: &mut [u8], src: Ipv4Addr, dst: Ipv4Addr, packet_len: usize, proto: u16) {
    let (ip, gre) = out.split_at_mut(IPV4_HEADER_LEN);
    ip.copy_from_slice(&IPV4_HEADER_TEMPLATE);
    let mut ip = Ipv4Header::parse_unchecked(ip);
    ip.set_packet_len(packet_len as u16);
    ip.set_ttl(PROBE_TTL);
    ip.set_protocol(IpProtocol::GRE);
    ip.set_src_addr(src);
    ip.set_dst_addr(dst);
    ip.fill_checksum();

    gre[..GRE_HEADER_LEN].copy_from_slice(&GRE_HEADER_TEMPLATE);
    GreHeader::parse_unchecked(&mut gre[..GRE_HEADER_LEN]).set_protocol(proto);
}

fn write_ipv6_gre(out: &mut [u8], src: Ipv6Addr, dst: Ipv6Addr, payload_len: usize, proto: u16) {
    let (ip, gre) = out.split_at_mut(IPV6_HEADER_LEN);
    ip.copy_from_slice(&IPV6_HEADER_TEMPLATE);
    let mut ip = Ipv6Header::parse_unchecked(ip);
    ip.set_payload_len(payload_len as u16);
    ip.set_next_header(IpProtocol::GRE);
    ip.set_hop_limit(PROBE_TTL);
    ip.set_src_addr(src);
    ip.set_dst_addr(dst);

    gre[..GRE_HEADER_LEN].copy_from_slice(&GRE_HEADER_TEMPLATE);
    GreHeader::parse_unchecked(&mut gre[..GRE_HEADER_LEN]).set_protocol(proto);
}
