#![allow(missing_docs)]

use byteorder::{ByteOrder, NetworkEndian};

use crate::ether::EtherType;

/// A constant that defines the fixed byte length of the Gre protocol header.
pub const GRE_HEADER_LEN: usize = 4;
/// A fixed Gre header.
pub const GRE_HEADER_TEMPLATE: [u8; 4] = [0x00, 0x00, 0x00, 0x00];

#[derive(Debug, Clone, Copy)]
pub struct GreHeader<T> {
    buf: T,
}
impl<T: AsRef<[u8]>> GreHeader<T> {
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
        if buf.as_ref().len() < 4 {
            return Err(buf);
        }
        Ok(Self { buf })
    }
    #[inline]
    pub fn header_slice(&self) -> &[u8] {
        &self.buf.as_ref()[0..4]
    }
    /// The flag bits and version, as one field.
    #[inline]
    pub fn flags_version(&self) -> u16 {
        NetworkEndian::read_u16(&self.buf.as_ref()[0..2])
    }
    #[inline]
    pub fn checksum_present(&self) -> bool {
        self.buf.as_ref()[0] & 0x80 != 0
    }
    #[inline]
    pub fn key_present(&self) -> bool {
        self.buf.as_ref()[0] & 0x20 != 0
    }
    #[inline]
    pub fn sequence_present(&self) -> bool {
        self.buf.as_ref()[0] & 0x10 != 0
    }
    #[inline]
    pub fn version(&self) -> u8 {
        self.buf.as_ref()[1] & 0x7
    }
    /// The protocol type field as a plain integer.
    ///
    /// Keepalive markers are compared against this, since they need not be
    /// a meaningful Ethertype.
    #[inline]
    pub fn protocol(&self) -> u16 {
        NetworkEndian::read_u16(&self.buf.as_ref()[2..4])
    }
    #[inline]
    pub fn protocol_type(&self) -> EtherType {
        EtherType::from(self.protocol())
    }
}
impl<T: AsRef<[u8]> + AsMut<[u8]>> GreHeader<T> {
    #[inline]
    pub fn set_protocol(&mut self, value: u16) {
        NetworkEndian::write_u16(&mut self.buf.as_mut()[2..4], value);
    }
    #[inline]
    pub fn set_protocol_type(&mut self, value: EtherType) {
        self.set_protocol(u16::from(value));
    }
}
