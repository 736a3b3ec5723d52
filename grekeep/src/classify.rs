use log::{debug, trace};

use crate::ether::EtherType;
use crate::frame::{self, TunnelFrame};
use crate::gre::{GreHeader, GRE_HEADER_LEN};
use crate::ipv4::{IpProtocol, Ipv4Header, IPV4_HEADER_LEN};
use crate::ipv6::{Ipv6Header, IPV6_HEADER_LEN};
use crate::{Config, Cursor, Decision, PassReason, PktBuf, Truncated, Verdict};

// Per-step diagnostics, only emitted when `Config::trace` is set.
macro_rules! step {
    ($config:expr, $($arg:tt)+) => {
        if $config.trace {
            trace!($($arg)+);
        }
    };
}

const DUMP_ROW_LEN: usize = 16;

#[derive(Debug, Clone, Copy)]
enum OuterHeader<'a> {
    V4(Ipv4Header<&'a [u8]>),
    V6(Ipv6Header<&'a [u8]>),
}

/// Classifies packets and reflects GRE keepalives.
///
/// Holds only its configuration, so one instance can serve any number of
/// threads, each processing its own packets.
#[derive(Debug, Clone, Default)]
pub struct Classifier {
    config: Config,
}

impl Classifier {
    /// Create a classifier.
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    /// The configuration in use.
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Classify the packet in `buf` and, for a keepalive, strip the headers
    /// in front of the tunneled payload.
    ///
    /// `buf` is only modified when the result is [`Verdict::Transmit`]. If the
    /// buffer cannot drop the headers the keepalive is dropped rather than
    /// sent back whole.
    pub fn process<B: PktBuf + ?Sized>(&self, buf: &mut B) -> Verdict {
        let decision = match self.classify(buf.data()) {
            Ok(decision) => decision,
            Err(err) => {
                debug!("dropping malformed packet: {}", err);
                return Verdict::Drop;
            }
        };

        match decision {
            Decision::Pass(reason) => {
                step!(self.config, "pass: {}", reason);
                Verdict::Pass
            }
            Decision::Reflect { cutoff } => match buf.adjust_head(cutoff) {
                Ok(()) => {
                    step!(self.config, "keepalive, stripped {} bytes", cutoff);
                    Verdict::Transmit
                }
                Err(err) => {
                    debug!("dropping keepalive: {}", err);
                    Verdict::Drop
                }
            },
        }
    }

    /// Decide whether `packet` is a keepalive, without touching it.
    ///
    /// Fails only when a header the packet announces runs past its end.
    pub fn classify(&self, packet: &[u8]) -> Result<Decision, Truncated> {
        if self.config.dump_header_len > 0 {
            self.dump_header(packet);
        }

        let mut cursor = Cursor::new(packet);
        let frame = match frame::delimit(&mut cursor, &self.config.tunnels)? {
            Some(frame) => frame,
            None => return Ok(Decision::Pass(PassReason::UnknownFraming)),
        };
        step!(self.config, "outer framing {:?}", frame);

        // Outer IPv4 options are not skipped: the tunnel header is taken to
        // be exactly 20 bytes.
        let outer = match frame {
            TunnelFrame::RawIpv4 => {
                OuterHeader::V4(Ipv4Header::parse_unchecked(cursor.take(IPV4_HEADER_LEN)?))
            }
            TunnelFrame::EtherIpv6 | TunnelFrame::RawIpv6 => {
                OuterHeader::V6(Ipv6Header::parse_unchecked(cursor.take(IPV6_HEADER_LEN)?))
            }
        };

        let outer_gre = GreHeader::parse_unchecked(cursor.take(GRE_HEADER_LEN)?);
        step!(
            self.config,
            "outer gre flags={:#06x} proto={:?}",
            outer_gre.flags_version(),
            outer_gre.protocol_type()
        );

        // Everything up to here goes if the packet turns out to be a keepalive.
        let cutoff = cursor.cursor();

        match outer_gre.protocol_type() {
            EtherType::IPV4 => self.inner_ipv4(&mut cursor, outer, cutoff),
            EtherType::IPV6 => self.inner_ipv6(&mut cursor, outer, cutoff),
            other => Ok(Decision::Pass(PassReason::UnsupportedProtocol(other))),
        }
    }

    fn inner_ipv4(
        &self,
        cursor: &mut Cursor<'_>,
        outer: OuterHeader<'_>,
        cutoff: usize,
    ) -> Result<Decision, Truncated> {
        cursor.ensure(1)?;
        let inner = Ipv4Header::parse_unchecked(cursor.peek(IPV4_HEADER_LEN)?);
        let header_len = inner.header_len();
        if (header_len as usize) < IPV4_HEADER_LEN {
            return Ok(Decision::Pass(PassReason::InnerHeaderLen(header_len)));
        }
        cursor.skip(header_len as usize)?;
        step!(
            self.config,
            "inner ipv4 header_len={} proto={:?}",
            header_len,
            inner.protocol()
        );

        let outer = match outer {
            OuterHeader::V4(outer) if inner.protocol() == IpProtocol::GRE => outer,
            _ => return Ok(Decision::Pass(PassReason::NotNestedGre)),
        };

        let inner_gre = GreHeader::parse_unchecked(cursor.take(GRE_HEADER_LEN)?);
        step!(self.config, "inner gre proto={:#06x}", inner_gre.protocol());
        if inner_gre.protocol() != 0 {
            return Ok(Decision::Pass(PassReason::NotKeepalive(inner_gre.protocol())));
        }

        if !self.config.velocloud_compat
            && (inner.src_addr() != outer.dst_addr() || inner.dst_addr() != outer.src_addr())
        {
            return Ok(Decision::Pass(PassReason::AddressMismatch));
        }

        Ok(Decision::Reflect { cutoff })
    }

    fn inner_ipv6(
        &self,
        cursor: &mut Cursor<'_>,
        outer: OuterHeader<'_>,
        cutoff: usize,
    ) -> Result<Decision, Truncated> {
        cursor.ensure(IPV6_HEADER_LEN + 1)?;
        let inner = Ipv6Header::parse_unchecked(cursor.take(IPV6_HEADER_LEN)?);
        step!(self.config, "inner ipv6 next_header={:?}", inner.next_header());

        let outer = match outer {
            OuterHeader::V6(outer) if inner.next_header() == IpProtocol::GRE => outer,
            _ => return Ok(Decision::Pass(PassReason::NotNestedGre)),
        };

        let inner_gre = GreHeader::parse_unchecked(cursor.take(GRE_HEADER_LEN)?);
        step!(self.config, "inner gre proto={:#06x}", inner_gre.protocol());
        if inner_gre.protocol() != self.config.ipv6_keepalive_proto {
            return Ok(Decision::Pass(PassReason::NotKeepalive(inner_gre.protocol())));
        }

        if outer.src_addr() != inner.dst_addr() || outer.dst_addr() != inner.src_addr() {
            return Ok(Decision::Pass(PassReason::AddressMismatch));
        }

        Ok(Decision::Reflect { cutoff })
    }

    fn dump_header(&self, packet: &[u8]) {
        let len = self.config.dump_header_len.min(packet.len());
        if len < self.config.dump_header_len {
            trace!(
                "packet is {} bytes, shorter than the {} byte dump",
                packet.len(),
                self.config.dump_header_len
            );
        }
        for (row, bytes) in packet[..len].chunks(DUMP_ROW_LEN).enumerate() {
            trace!("{:04x}: {:02x?}", row * DUMP_ROW_LEN, bytes);
        }
    }
}
