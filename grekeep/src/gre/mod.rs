//! The GRE base header.
//!
//! Only the fixed four bytes are read. Keepalives never carry checksum, key
//! or sequence fields, so their presence bits are exposed but not followed.

mod generated;
pub use generated::{GreHeader, GRE_HEADER_LEN, GRE_HEADER_TEMPLATE};
