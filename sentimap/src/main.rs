use std::process;

use clap::Parser;
use sentimap::config::Config;
use sentimap_core::scheduler::quiet_worker_panics;

fn main() {
    let config = Config::parse();

    env_logger::Builder::new()
        .filter_level(config.log_level())
        .parse_default_env()
        .init();
    quiet_worker_panics();

    match sentimap::run(&config) {
        Ok(report) => print!("{}", report),
        Err(e) => {
            eprintln!("error: {}", e);
            process::exit(1);
        }
    }
}
