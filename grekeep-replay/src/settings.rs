//! Build the classifier configuration from a file and the command line.

use std::path::Path;

use anyhow::{Context, Result};
use grekeep::Config;
use log::debug;

use crate::args::ClassifierArgs;

/// Load a configuration from a TOML file.
///
/// Missing keys keep their default value.
pub fn load<P: AsRef<Path>>(path: P) -> Result<Config> {
    let content = std::fs::read_to_string(&path)
        .with_context(|| format!("Failed to read config file: {}", path.as_ref().display()))?;

    let config: Config = toml::from_str(&content)
        .with_context(|| format!("Failed to parse config file: {}", path.as_ref().display()))?;

    Ok(config)
}

/// The file configuration, or the default one, with the flags applied on top.
pub fn resolve(path: Option<&Path>, args: &ClassifierArgs) -> Result<Config> {
    let mut config = match path {
        Some(path) => {
            debug!("loading config from {}", path.display());
            load(path)?
        }
        None => Config::default(),
    };

    if args.velocloud {
        config.velocloud_compat = true;
    }
    if args.raw_ipv6 {
        config.tunnels.raw_ipv6 = true;
    }
    if args.no_raw_ipv4 {
        config.tunnels.raw_ipv4 = false;
    }
    if args.ether_ipv6 {
        config.tunnels.ether_ipv6 = true;
    }
    if let Some(marker) = args.ipv6_marker {
        config.ipv6_keepalive_proto = marker;
    }
    if args.trace {
        config.trace = true;
    }
    if let Some(len) = args.dump {
        config.dump_header_len = len;
    }

    debug!("{:?}", config);
    Ok(config)
}
