#![allow(dead_code)]

use std::net::{Ipv4Addr, Ipv6Addr};
use std::{fs::File, io::Read};

use pnet::packet::ethernet::{EtherTypes, MutableEthernetPacket};
use pnet::packet::gre::MutableGrePacket;
use pnet::packet::ip::IpNextHeaderProtocols;
use pnet::packet::ipv4::{self, MutableIpv4Packet};
use pnet::packet::ipv6::MutableIpv6Packet;
use pnet::util::MacAddr;

pub const GRE_PROTO_IPV4: u16 = 0x0800;
pub const GRE_PROTO_IPV6: u16 = 0x86dd;

/// Load a packet stored as a hex dump under `tests/packet_examples`.
pub fn file_to_packet(fname: &str) -> Vec<u8> {
    // The test is executed under the crate root directory.
    let mut program_path = std::env::current_dir().unwrap();
    program_path.push("tests");
    program_path.push("packet_examples");
    program_path.push(fname);

    let mut file = File::open(program_path).unwrap();
    let mut content = String::new();
    file.read_to_string(&mut content).unwrap();
    let digits: Vec<u8> = content
        .bytes()
        .filter(|b| !b.is_ascii_whitespace())
        .collect();

    digits
        .chunks(2)
        .map(|pair| u8::from_str_radix(std::str::from_utf8(pair).unwrap(), 16).unwrap())
        .collect()
}

fn write_ipv4(buf: &mut [u8], src: Ipv4Addr, dst: Ipv4Addr) {
    let total_len = buf.len() as u16;
    let mut ip = MutableIpv4Packet::new(buf).unwrap();
    ip.set_version(4);
    ip.set_header_length(5);
    ip.set_total_length(total_len);
    ip.set_ttl(255);
    ip.set_next_level_protocol(IpNextHeaderProtocols::Gre);
    ip.set_source(src);
    ip.set_destination(dst);
    let checksum = ipv4::checksum(&ip.to_immutable());
    ip.set_checksum(checksum);
}

fn write_ipv6(buf: &mut [u8], src: Ipv6Addr, dst: Ipv6Addr) {
    let payload_len = (buf.len() - 40) as u16;
    let mut ip = MutableIpv6Packet::new(buf).unwrap();
    ip.set_version(6);
    ip.set_payload_length(payload_len);
    ip.set_next_header(IpNextHeaderProtocols::Gre);
    ip.set_hop_limit(64);
    ip.set_source(src);
    ip.set_destination(dst);
}

fn write_gre(buf: &mut [u8], proto: u16) {
    let mut gre = MutableGrePacket::new(buf).unwrap();
    gre.set_protocol_type(proto);
}

/// GRE over IPv4 carrying GRE over IPv4, assembled with pnet.
///
/// `payload` follows the inner GRE header.
pub fn gre4_nested(
    outer: (Ipv4Addr, Ipv4Addr),
    inner: (Ipv4Addr, Ipv4Addr),
    inner_proto: u16,
    payload: &[u8],
) -> Vec<u8> {
    let mut pkt = vec![0u8; 48 + payload.len()];
    write_ipv4(&mut pkt[..], outer.0, outer.1);
    write_gre(&mut pkt[20..24], GRE_PROTO_IPV4);
    write_ipv4(&mut pkt[24..], inner.0, inner.1);
    write_gre(&mut pkt[44..48], inner_proto);
    pkt[48..].copy_from_slice(payload);
    pkt
}

/// GRE over IPv6 carrying GRE over IPv6, optionally behind an Ethernet
/// header, assembled with pnet.
pub fn gre6_nested(
    outer: (Ipv6Addr, Ipv6Addr),
    inner: (Ipv6Addr, Ipv6Addr),
    inner_proto: u16,
    ether: bool,
) -> Vec<u8> {
    let link_len = if ether { 14 } else { 0 };
    let mut pkt = vec![0u8; link_len + 88];
    if ether {
        let mut eth = MutableEthernetPacket::new(&mut pkt[..]).unwrap();
        eth.set_destination(MacAddr::new(0, 0, 0, 0, 0, 0));
        eth.set_source(MacAddr::new(0, 0, 0, 0, 0, 0));
        eth.set_ethertype(EtherTypes::Ipv6);
    }
    let ip = &mut pkt[link_len..];
    write_ipv6(&mut ip[..], outer.0, outer.1);
    write_gre(&mut ip[40..44], GRE_PROTO_IPV6);
    write_ipv6(&mut ip[44..], inner.0, inner.1);
    write_gre(&mut ip[84..88], inner_proto);
    pkt
}

pub fn v4(s: &str) -> Ipv4Addr {
    s.parse().unwrap()
}

pub fn v6(s: &str) -> Ipv6Addr {
    s.parse().unwrap()
}
