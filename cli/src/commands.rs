pub mod scan;

use clap::Parser;

#[derive(Parser)]
#[command(name = "netwatch")]
#[command(about = "Sweep the local subnet and report who is on it.")]
pub struct CommandLine {
    /// Network interface to scan (defaults to the default-route interface)
    #[arg(short = 'i', value_name = "IFACE")]
    pub interface: Option<String>,

    /// List available interfaces and exit
    #[arg(short = 'l')]
    pub list: bool,
}

impl CommandLine {
    pub fn parse_args() -> Self {
        Self::parse()
    }
}

pub fn list_interfaces() {
    for (index, name) in netwatch_core::system::list_interfaces() {
        println!("{index}. {name}");
    }
}
