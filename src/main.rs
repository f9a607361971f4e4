use clap::Parser;
use log::debug;

use twd_lfsr::driver::Driver;
use twd_lfsr::Error;

/// Print the 6-bit LFSR connect key as hex byte literals
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {}

fn main() -> Result<(), Error> {
    env_logger::init();

    let args = Args::parse();
    debug!("{:?}", args);

    let line = Driver::default().render()?;
    println!("{}", line);

    Ok(())
}
