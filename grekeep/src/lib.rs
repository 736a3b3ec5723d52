#![warn(missing_docs, missing_debug_implementations, rust_2018_idioms)]
#![no_std]

//! Detect GRE tunnel keepalives and reflect them back to the sender.
//!
//! A keepalive is a GRE packet that carries another GRE packet addressed back
//! to the tunnel endpoint that sent it. Answering one only requires stripping
//! the outer headers and transmitting the rest out of the ingress interface,
//! which is what [`Classifier::process`] does. Every other packet is left
//! untouched.
//!
//! ```
//! use grekeep::{Classifier, Config, CursorMut, Verdict};
//! use grekeep::probe::Probe;
//!
//! let probe = Probe::Ipv4 {
//!     local: [192, 0, 2, 1].into(),
//!     remote: [198, 51, 100, 7].into(),
//! };
//! let mut frame = [0u8; 64];
//! let len = probe.write(&mut frame).unwrap();
//!
//! let classifier = Classifier::new(Config::default());
//! let mut buf = CursorMut::new(&mut frame[..len]);
//! assert_eq!(classifier.process(&mut buf), Verdict::Transmit);
//! assert_eq!(buf.cursor(), 24);
//! ```

#[cfg(any(test, feature = "std"))]
extern crate std;

#[macro_use]
mod macros;

mod traits;
pub use traits::{Buf, PktBuf};

mod cursors;
pub use cursors::{Cursor, CursorMut};

mod error;
pub use error::{AdjustHeadError, Truncated};

mod config;
pub use config::{Config, TunnelModes};

mod verdict;
pub use verdict::{Decision, PassReason, Verdict};

pub mod checksum_utils;

pub mod ether;
pub mod gre;
pub mod ipv4;
pub mod ipv6;

pub mod frame;
pub use frame::TunnelFrame;

mod classify;
pub use classify::Classifier;

pub mod probe;
