#![allow(missing_docs)]
#![allow(unused_parens)]

use byteorder::{ByteOrder, NetworkEndian};

use super::{IpProtocol, Ipv4Addr};
use crate::checksum_utils;

/// A constant that defines the fixed byte length of the Ipv4 protocol header.
pub const IPV4_HEADER_LEN: usize = 20;
/// A fixed Ipv4 header.
pub const IPV4_HEADER_TEMPLATE: [u8; 20] = [
    0x45, 0x00, 0x00, 0x14, 0x00, 0x00, 0x00, 0x00, 0x40, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x00, 0x00,
];

#[derive(Debug, Clone, Copy)]
pub struct Ipv4Header<T> {
    buf: T,
}
impl<T: AsRef<[u8]>> Ipv4Header<T> {
    #[inline]
    pub fn parse_unchecked(buf: T) -> Self {
        Self { buf }
    }
    #[inline]
    pub fn buf(&self) -> &T {
        &self.buf
    }
    #[inline]
    pub fn release(self) -> T {
        self.buf
    }
    #[inline]
    pub fn parse(buf: T) -> Result<Self, T> {
        let remaining_len = buf.as_ref().len();
        if remaining_len < 20 {
            return Err(buf);
        }
        let container = Self { buf };
        if ((container.header_len() as usize) < 20)
            || ((container.header_len() as usize) > remaining_len)
        {
            return Err(container.buf);
        }
        Ok(container)
    }
    #[inline]
    pub fn header_slice(&self) -> &[u8] {
        &self.buf.as_ref()[0..(self.header_len() as usize)]
    }
    #[inline]
    pub fn option_slice(&self) -> &[u8] {
        let header_len = (self.header_len() as usize);
        &self.buf.as_ref()[20..header_len]
    }
    #[inline]
    pub fn version(&self) -> u8 {
        self.buf.as_ref()[0] >> 4
    }
    #[inline]
    pub fn ident(&self) -> u16 {
        NetworkEndian::read_u16(&self.buf.as_ref()[4..6])
    }
    #[inline]
    pub fn ttl(&self) -> u8 {
        self.buf.as_ref()[8]
    }
    #[inline]
    pub fn protocol(&self) -> IpProtocol {
        IpProtocol::from(self.buf.as_ref()[9])
    }
    #[inline]
    pub fn checksum(&self) -> u16 {
        NetworkEndian::read_u16(&self.buf.as_ref()[10..12])
    }
    #[inline]
    pub fn src_addr(&self) -> Ipv4Addr {
        Ipv4Addr::from(NetworkEndian::read_u32(&self.buf.as_ref()[12..16]))
    }
    #[inline]
    pub fn dst_addr(&self) -> Ipv4Addr {
        Ipv4Addr::from(NetworkEndian::read_u32(&self.buf.as_ref()[16..20]))
    }
    /// The header length in bytes, `ihl * 4`.
    #[inline]
    pub fn header_len(&self) -> u8 {
        (self.buf.as_ref()[0] & 0xf) * 4
    }
    #[inline]
    pub fn packet_len(&self) -> u16 {
        NetworkEndian::read_u16(&self.buf.as_ref()[2..4])
    }
}
impl<T: AsRef<[u8]> + AsMut<[u8]>> Ipv4Header<T> {
    #[inline]
    pub fn set_version(&mut self, value: u8) {
        assert!(value == 4);
        self.buf.as_mut()[0] = (self.buf.as_mut()[0] & 0x0f) | (value << 4);
    }
    #[inline]
    pub fn set_ident(&mut self, value: u16) {
        NetworkEndian::write_u16(&mut self.buf.as_mut()[4..6], value);
    }
    #[inline]
    pub fn set_ttl(&mut self, value: u8) {
        self.buf.as_mut()[8] = value;
    }
    #[inline]
    pub fn set_protocol(&mut self, value: IpProtocol) {
        self.buf.as_mut()[9] = u8::from(value);
    }
    #[inline]
    pub fn set_checksum(&mut self, value: u16) {
        NetworkEndian::write_u16(&mut self.buf.as_mut()[10..12], value);
    }
    #[inline]
    pub fn set_src_addr(&mut self, value: Ipv4Addr) {
        (&mut self.buf.as_mut()[12..16]).copy_from_slice(&value.octets());
    }
    #[inline]
    pub fn set_dst_addr(&mut self, value: Ipv4Addr) {
        (&mut self.buf.as_mut()[16..20]).copy_from_slice(&value.octets());
    }
    #[inline]
    pub fn set_header_len(&mut self, value: u8) {
        assert!((value >= 20) && (value <= 60) && (value % 4 == 0));
        self.buf.as_mut()[0] = (self.buf.as_mut()[0] & 0xf0) | (value / 4);
    }
    #[inline]
    pub fn set_packet_len(&mut self, value: u16) {
        NetworkEndian::write_u16(&mut self.buf.as_mut()[2..4], value);
    }
    /// Compute the header checksum and store it.
    #[inline]
    pub fn fill_checksum(&mut self) {
        self.set_checksum(0);
        let checksum = !checksum_utils::from_slice(self.header_slice());
        self.set_checksum(checksum);
    }
}
