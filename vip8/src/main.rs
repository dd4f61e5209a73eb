use std::path::PathBuf;
use std::process;

use structopt::StructOpt;
use tracing_subscriber::EnvFilter;

mod keymap;
mod run;

#[derive(Debug, StructOpt)]
#[structopt(name = "vip8", about = "CHIP-8 virtual machine")]
struct Opt {
    /// ROM image to execute
    rom: PathBuf,

    /// Interpreter steps per second
    #[structopt(long, default_value = "500")]
    clock_hz: u32,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let opt = Opt::from_args();
    if let Err(e) = run::run(&opt.rom, opt.clock_hz) {
        tracing::error!("{}", e);
        process::exit(1);
    }
}
