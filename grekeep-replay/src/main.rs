//! Offline driver for the keepalive classifier.
//!
//! Runs recorded packets through the same code path the datapath uses, and
//! builds keepalive probes to feed it with.

mod args;
mod dump;
mod settings;

use std::net::IpAddr;
use std::path::Path;

use anyhow::{bail, Context, Result};
use clap::Parser;
use grekeep::ether::EtherAddr;
use grekeep::probe::Probe;
use grekeep::{Classifier, CursorMut, Verdict};
use log::{error, info, LevelFilter};

use crate::args::{Cli, Command};

fn main() {
    let cli = Cli::parse();

    let level = match cli.verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .init();

    if let Err(err) = run(cli) {
        error!("Error: {err}");
        for (i, cause) in err.chain().skip(1).enumerate() {
            error!("  {}: {}", i.saturating_add(1), cause);
        }
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    let config = settings::resolve(cli.config.as_deref(), &cli.classifier)?;

    match cli.command {
        Command::Classify { files, show } => {
            let classifier = Classifier::new(config);
            for path in files.iter() {
                classify_file(&classifier, path, show)?;
            }
        }
        Command::Probe {
            local,
            remote,
            ether,
            dst_mac,
            src_mac,
            marker,
        } => {
            let probe = build_probe(local, remote, ether, &dst_mac, &src_mac, marker)?;
            let mut bytes = vec![0u8; probe.len()];
            probe.write(&mut bytes)?;
            info!(
                "{} byte probe, {} bytes stripped on reflection",
                probe.len(),
                probe.outer_len()
            );
            println!("{}", dump::encode(&bytes));
        }
    }
    Ok(())
}

fn classify_file(classifier: &Classifier, path: &Path, show: bool) -> Result<()> {
    let mut packet = read_packet(path)?;
    let len = packet.len();

    let mut buf = CursorMut::new(&mut packet[..]);
    let verdict = classifier.process(&mut buf);
    let trimmed = buf.cursor();
    println!("{}: {} ({} bytes, {} trimmed)", path.display(), verdict, len, trimmed);

    if show && verdict == Verdict::Transmit {
        println!("{}", dump::encode(&packet[trimmed..]));
    }
    Ok(())
}

fn read_packet(path: &Path) -> Result<Vec<u8>> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read packet file: {}", path.display()))?;
    dump::decode(&text)
        .with_context(|| format!("Failed to decode packet file: {}", path.display()))
}

fn build_probe(
    local: IpAddr,
    remote: IpAddr,
    ether: bool,
    dst_mac: &str,
    src_mac: &str,
    marker: u16,
) -> Result<Probe> {
    let probe = match (local, remote) {
        (IpAddr::V4(local), IpAddr::V4(remote)) => {
            if ether {
                bail!("--ether only applies to IPv6 probes");
            }
            Probe::Ipv4 { local, remote }
        }
        (IpAddr::V6(local), IpAddr::V6(remote)) => {
            let link = if ether {
                Some((parse_mac(dst_mac)?, parse_mac(src_mac)?))
            } else {
                None
            };
            Probe::Ipv6 {
                local,
                remote,
                marker,
                link,
            }
        }
        _ => bail!("{} and {} are not the same address family", local, remote),
    };
    Ok(probe)
}

fn parse_mac(s: &str) -> Result<EtherAddr> {
    EtherAddr::parse_from(s).with_context(|| format!("invalid link address {:?}", s))
}
