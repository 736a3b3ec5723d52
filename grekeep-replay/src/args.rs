//! Command line arguments.

use std::net::IpAddr;
use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "grekeep-replay")]
#[command(version, about = "Classify recorded packets and build GRE keepalive probes", long_about = None)]
pub struct Cli {
    /// TOML file with classifier settings, overridden by the flags below
    #[arg(short, long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    #[command(flatten)]
    pub classifier: ClassifierArgs,

    /// Verbose output (-v, -vv, -vvv for increasing verbosity)
    #[arg(short = 'v', long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Args, Debug, Default)]
pub struct ClassifierArgs {
    /// Accept IPv4 keepalives without mirrored inner addresses
    #[arg(long, global = true)]
    pub velocloud: bool,

    /// Accept GRE over IPv6 without an Ethernet header
    #[arg(long, global = true)]
    pub raw_ipv6: bool,

    /// Ignore GRE over IPv4
    #[arg(long, global = true)]
    pub no_raw_ipv4: bool,

    /// Accept Ethernet framed GRE over IPv6, as seen on ip6gre devices
    #[arg(long, global = true)]
    pub ether_ipv6: bool,

    /// Inner GRE protocol type marking an IPv6 keepalive
    #[arg(long, global = true, value_name = "HEX", value_parser = parse_u16_hex)]
    pub ipv6_marker: Option<u16>,

    /// Log each classification step (needs -vvv to show)
    #[arg(long, global = true)]
    pub trace: bool,

    /// Hex dump this many leading bytes of each packet (needs -vvv to show)
    #[arg(long, global = true, value_name = "N")]
    pub dump: Option<usize>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Classify packets stored as hex dumps
    Classify {
        /// Packet files, one packet per file
        #[arg(required = true, value_name = "FILE")]
        files: Vec<PathBuf>,

        /// Print the packet that would be transmitted
        #[arg(short, long)]
        show: bool,
    },

    /// Print a keepalive probe as a hex dump
    Probe {
        /// Address of the sending tunnel endpoint
        #[arg(short, long)]
        local: IpAddr,

        /// Address of the endpoint that should reflect the probe
        #[arg(short, long)]
        remote: IpAddr,

        /// Prepend an Ethernet header (IPv6 only)
        #[arg(long)]
        ether: bool,

        /// Destination link address for --ether
        #[arg(long, value_name = "MAC", default_value = "00:00:00:00:00:00")]
        dst_mac: String,

        /// Source link address for --ether
        #[arg(long, value_name = "MAC", default_value = "00:00:00:00:00:00")]
        src_mac: String,

        /// Inner GRE protocol type of an IPv6 probe
        #[arg(long, value_name = "HEX", default_value = "86dd", value_parser = parse_u16_hex)]
        marker: u16,
    },
}

fn parse_u16_hex(s: &str) -> Result<u16, String> {
    let digits = s
        .strip_prefix("0x")
        .or_else(|| s.strip_prefix("0X"))
        .unwrap_or(s);
    u16::from_str_radix(digits, 16).map_err(|e| format!("invalid hex value {:?}: {}", s, e))
}
