//! Packet hex dumps: hex digits with any whitespace in between.

use anyhow::{Context, Result};

const ROW_LEN: usize = 16;

pub fn decode(text: &str) -> Result<Vec<u8>> {
    let digits: String = text.chars().filter(|c| !c.is_ascii_whitespace()).collect();
    hex::decode(&digits).context("invalid hex dump")
}

/// Format `bytes` as rows of 16 space separated bytes.
pub fn encode(bytes: &[u8]) -> String {
    bytes
        .chunks(ROW_LEN)
        .map(|row| {
            row.iter()
                .map(|b| hex::encode([*b]))
                .collect::<Vec<_>>()
                .join(" ")
        })
        .collect::<Vec<_>>()
        .join("\n")
}
