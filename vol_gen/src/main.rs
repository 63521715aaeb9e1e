use config::Config;

mod args;
mod config;
mod file;
mod generators;
mod header;

use crate::{args::get_command, generators::generate_channels};

pub fn main() {
    let cmd = get_command();

    let args = cmd.get_matches();

    let cfg = Config::from_args(args);

    let cfg = match cfg {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Error: {e}");
            return;
        }
    };

    println!("Generating volume...");
    println!("{:?}", cfg);

    if let Err(e) = generate_channels(cfg) {
        eprintln!("Error: {e}");
    }
}
