use clap::Parser;
use std::path::PathBuf;

use crate::api::Order;

/// Basketball roster browser
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Base URL of the stats API, including the version prefix
    #[arg(
        short = 's',
        long = "server",
        value_name = "URL",
        default_value = "http://127.0.0.1:8000/api/v1"
    )]
    pub server: String,

    /// Players per page (clamped to at least 1)
    #[arg(short = 'n', long = "page-size", value_name = "N", default_value_t = 10)]
    pub page_size: u32,

    /// Initial offset into the player collection (0-based)
    #[arg(long = "offset", value_name = "N", default_value_t = 0)]
    pub offset: u32,

    /// Sort order requested from the server
    #[arg(short = 'o', long = "order", value_enum, default_value = "asc")]
    pub order: Order,

    /// Enable debug logging to file (default: courtside.log)
    #[arg(short = 'l', long = "log", value_name = "LOG_FILE")]
    pub log_file: Option<Option<PathBuf>>,

    /// Increase logging verbosity (default: warn, -v: info, -vv: debug, -vvv+: trace)
    #[arg(short = 'v', long = "verbose", action = clap::ArgAction::Count)]
    pub verbosity: u8,

    /// Custom configuration directory (overrides default platform paths)
    #[arg(short = 'c', long = "config-dir", value_name = "DIR")]
    pub config_dir: Option<PathBuf>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let args = Args::parse_from(["courtside"]);
        assert_eq!(args.server, "http://127.0.0.1:8000/api/v1");
        assert_eq!(args.page_size, 10);
        assert_eq!(args.offset, 0);
        assert_eq!(args.order, Order::Asc);
        assert_eq!(args.verbosity, 0);
    }

    #[test]
    fn test_order_values() {
        let args = Args::parse_from(["courtside", "--order", "desc"]);
        assert_eq!(args.order, Order::Desc);
    }

    #[test]
    fn test_page_size_flag() {
        let args = Args::parse_from(["courtside", "-n", "25", "--offset", "50"]);
        assert_eq!(args.page_size, 25);
        assert_eq!(args.offset, 50);
    }
}
