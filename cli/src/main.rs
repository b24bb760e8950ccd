mod commands;
mod terminal;

use commands::{CommandLine, scan};
use terminal::logging;

#[tokio::main]
async fn main() {
    let commands = CommandLine::parse_args();
    logging::init();

    if commands.list {
        commands::list_interfaces();
        return;
    }

    if let Err(e) = scan::scan(commands.interface.as_deref()).await {
        eprintln!("Error. {e}");
        std::process::exit(1);
    }
}
