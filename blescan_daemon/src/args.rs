use blescan::{ScanMode, DEFAULT_EVENT_CAPACITY};
use clap::{Parser, ValueEnum};

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Adapter to scan on, e.g. hci0
    #[arg(short, long)]
    pub adapter: Option<String>,
    #[arg(short, long, value_enum, default_value_t = Mode::LowLatency)]
    pub mode: Mode,
    /// Events buffered between BlueZ and the dispatcher
    #[arg(long, default_value_t = DEFAULT_EVENT_CAPACITY)]
    pub capacity: usize,
    #[arg(short, long, default_value_t = false)]
    pub verbose: bool,
}
#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum Mode {
    LowPower,
    Balanced,
    LowLatency,
}
impl From<Mode> for ScanMode {
    fn from(value: Mode) -> Self {
        match value {
            Mode::LowPower => ScanMode::LowPower,
            Mode::Balanced => ScanMode::Balanced,
            Mode::LowLatency => ScanMode::LowLatency,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_to_low_latency() {
        let args = Args::parse_from(["blescan_daemon"]);
        assert_eq!(args.mode, Mode::LowLatency);
        assert_eq!(args.adapter, None);
        assert!(!args.verbose);
        assert_eq!(args.capacity, DEFAULT_EVENT_CAPACITY);
    }

    #[test]
    fn parses_adapter_and_mode() {
        let args = Args::parse_from(["blescan_daemon", "-a", "hci1", "--mode", "low-power"]);
        assert_eq!(args.adapter.as_deref(), Some("hci1"));
        assert_eq!(ScanMode::from(args.mode), ScanMode::LowPower);
    }
}
