use std::path::PathBuf;

use clap::Parser;
use clap::Subcommand;

#[derive(Debug, Subcommand, PartialEq)]
pub enum Command {
    /// Replay a capture file through the driver and print every reported state.
    Replay {
        /// Capture file, one frame of hex bytes per line
        capture: PathBuf,
        /// Honor the handshake delay instead of firing the timer at once
        #[arg(long)]
        realtime: bool,
    },
    /// Check whether a vendor/product pair is handled by the driver.
    Probe {
        /// Vendor id, hex (0x056e) or decimal
        #[arg(value_parser = parse_u16)]
        vid: u16,
        /// Product id, hex (0x2004) or decimal
        #[arg(value_parser = parse_u16)]
        pid: u16,
    },
    /// Print the capabilities the driver advertises.
    Describe,
}

/// Host harness for the IINE Pro Max drum driver.
#[derive(Parser)]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Turn debugging information on
    #[arg(short, long)]
    pub verbose: bool,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,

    /// Driver settings file (yaml)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// The command to run
    #[clap(subcommand)]
    pub command: Command,
}

/// Parse `0x`-prefixed hex or plain decimal.
pub fn parse_u16(input: &str) -> Result<u16, String> {
    let input = input.trim();
    let parsed = match input
        .strip_prefix("0x")
        .or_else(|| input.strip_prefix("0X"))
    {
        Some(hex) => u16::from_str_radix(hex, 16),
        None => input.parse::<u16>(),
    };
    parsed.map_err(|e| format!("invalid id \"{input}\": {e}"))
}
