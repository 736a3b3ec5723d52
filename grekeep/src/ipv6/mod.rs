//! IPv6 headers of GRE tunnels and of the packets they carry.

pub use core::net::Ipv6Addr;

mod generated;
pub use generated::{Ipv6Header, IPV6_HEADER_LEN, IPV6_HEADER_TEMPLATE};
