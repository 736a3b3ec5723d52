//! IPv4 headers of GRE tunnels and of the packets they carry.

pub use core::net::Ipv4Addr;

enum_sim! {
    /// An enum-like type for representing different protocols in IPv4/v6.
    pub struct IpProtocol (u8) {
        /// IP packet payload is ICMP protocol.
        ICMP = 1,

        /// IP packet payload is TCP protocol.
        TCP = 6,

        /// IP packet payload is UDP protocol.
        UDP =  17,

        /// IP packet payload is GRE protocol.
        GRE = 47,

        /// IP packet payload is ICMPv6 protocol.
        ICMPV6 = 58,
    }
}

mod generated;
pub use generated::{Ipv4Header, IPV4_HEADER_LEN, IPV4_HEADER_TEMPLATE};

#[cfg(test)]
mod tests {
    use super::*;
    use crate::checksum_utils;

    // 10.0.0.1 -> 10.0.0.2, GRE, with a single 4 byte option.
    static HEADER_BYTES: [u8; 24] = [
        0x46, 0x00, 0x00, 0x30, 0x12, 0x34, 0x40, 0x00, 0xff, 0x2f, 0x00, 0x00, 0x0a, 0x00, 0x00,
        0x01, 0x0a, 0x00, 0x00, 0x02, 0x01, 0x01, 0x01, 0x00,
    ];

    #[test]
    fn header_parse() {
        let ip = Ipv4Header::parse(&HEADER_BYTES[..]).unwrap();
        assert_eq!(ip.version(), 4);
        assert_eq!(ip.header_len(), 24);
        assert_eq!(ip.packet_len(), 0x30);
        assert_eq!(ip.ident(), 0x1234);
        assert_eq!(ip.ttl(), 255);
        assert_eq!(ip.protocol(), IpProtocol::GRE);
        assert_eq!(ip.src_addr(), Ipv4Addr::new(10, 0, 0, 1));
        assert_eq!(ip.dst_addr(), Ipv4Addr::new(10, 0, 0, 2));
        assert_eq!(ip.option_slice(), &[0x01, 0x01, 0x01, 0x00]);
    }

    #[test]
    fn header_parse_rejects_bad_ihl() {
        assert!(Ipv4Header::parse(&HEADER_BYTES[..20]).is_err());

        let mut bytes = HEADER_BYTES;
        bytes[0] = 0x44;
        assert!(Ipv4Header::parse(&bytes[..]).is_err());
    }

    #[test]
    fn header_build() {
        let mut bytes = IPV4_HEADER_TEMPLATE;
        let mut ip = Ipv4Header::parse_unchecked(&mut bytes[..]);
        ip.set_packet_len(48);
        ip.set_ttl(255);
        ip.set_protocol(IpProtocol::GRE);
        ip.set_src_addr(Ipv4Addr::new(192, 0, 2, 1));
        ip.set_dst_addr(Ipv4Addr::new(192, 0, 2, 2));
        ip.fill_checksum();

        let ip = Ipv4Header::parse(&bytes[..]).unwrap();
        assert_eq!(ip.header_len(), 20);
        assert_eq!(ip.protocol(), IpProtocol::GRE);
        assert_eq!(!checksum_utils::from_slice(ip.header_slice()), 0);
    }
}
