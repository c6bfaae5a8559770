use clap::Parser;
use relay::Peer;
use simplelog::{ConfigBuilder, LevelFilter, WriteLogger};
use std::fs::File;

#[derive(Parser)]
#[command(name = "relay", about = "A minimal unidirectional chat loop")]
struct Args {
    /// Counterpart on the far side of the message boundary
    #[arg(short, long, default_value_t, value_enum)]
    peer: Peer,
}

fn main() -> std::io::Result<()> {
    let args = Args::parse();

    // Initialize file logger - writes to relay.log in current directory
    let log_config = ConfigBuilder::new().set_time_format_rfc3339().build();

    if let Ok(log_file) = File::create("relay.log") {
        let _ = WriteLogger::init(LevelFilter::Debug, log_config, log_file);
    }

    log::info!("Relay starting up with peer: {:?}", args.peer);

    relay::tui::run(args.peer)
}
