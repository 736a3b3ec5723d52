#![allow(missing_docs)]

use byteorder::{ByteOrder, NetworkEndian};

use super::Ipv6Addr;
use crate::ipv4::IpProtocol;

/// A constant that defines the fixed byte length of the Ipv6 protocol header.
pub const IPV6_HEADER_LEN: usize = 40;
/// A fixed Ipv6 header.
pub const IPV6_HEADER_TEMPLATE: [u8; 40] = [
    0x60, 0x00, 0x00, 0x00, 0x00, 0x00, 0x3b, 0x40, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
];

#[derive(Debug, Clone, Copy)]
pub struct Ipv6Header<T> {
    buf: T,
}
impl<T: AsRef<[u8]>> Ipv6Header<T> {
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
        if buf.as_ref().len() < 40 {
            return Err(buf);
        }
        Ok(Self { buf })
    }
    #[inline]
    pub fn header_slice(&self) -> &[u8] {
        &self.buf.as_ref()[0..40]
    }
    #[inline]
    pub fn version(&self) -> u8 {
        self.buf.as_ref()[0] >> 4
    }
    #[inline]
    pub fn payload_len(&self) -> u16 {
        NetworkEndian::read_u16(&self.buf.as_ref()[4..6])
    }
    #[inline]
    pub fn next_header(&self) -> IpProtocol {
        IpProtocol::from(self.buf.as_ref()[6])
    }
    #[inline]
    pub fn hop_limit(&self) -> u8 {
        self.buf.as_ref()[7]
    }
    /// The raw 16 source address octets.
    #[inline]
    pub fn src_addr_bytes(&self) -> &[u8] {
        &self.buf.as_ref()[8..24]
    }
    /// The raw 16 destination address octets.
    #[inline]
    pub fn dst_addr_bytes(&self) -> &[u8] {
        &self.buf.as_ref()[24..40]
    }
    #[inline]
    pub fn src_addr(&self) -> Ipv6Addr {
        Ipv6Addr::from(NetworkEndian::read_u128(self.src_addr_bytes()))
    }
    #[inline]
    pub fn dst_addr(&self) -> Ipv6Addr {
        Ipv6Addr::from(NetworkEndian::read_u128(self.dst_addr_bytes()))
    }
}
impl<T: AsRef<[u8]> + AsMut<[u8]>> Ipv6Header<T> {
    #[inline]
    pub fn set_version(&mut self, value: u8) {
        assert!(value == 6);
        self.buf.as_mut()[0] = (self.buf.as_mut()[0] & 0x0f) | (value << 4);
    }
    #[inline]
    pub fn set_payload_len(&mut self, value: u16) {
        NetworkEndian::write_u16(&mut self.buf.as_mut()[4..6], value);
    }
    #[inline]
    pub fn set_next_header(&mut self, value: IpProtocol) {
        self.buf.as_mut()[6] = u8::from(value);
    }
    #[inline]
    pub fn set_hop_limit(&mut self, value: u8) {
        self.buf.as_mut()[7] = value;
    }
    #[inline]
    pub fn set_src_addr(&mut self, value: Ipv6Addr) {
        (&mut self.buf.as_mut()[8..24]).copy_from_slice(&value.octets());
    }
    #[inline]
    pub fn set_dst_addr(&mut self, value: Ipv6Addr) {
        (&mut self.buf.as_mut()[24..40]).copy_from_slice(&value.octets());
    }
}
