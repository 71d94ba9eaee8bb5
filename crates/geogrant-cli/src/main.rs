//! GeoGrant binary entry point

use colored::Colorize;

fn main() {
    if let Err(err) = geogrant_cli::run() {
        eprintln!("{} {}", "✗".red(), err);
        std::process::exit(1);
    }
}
