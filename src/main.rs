//! listcomp-tour - a guided tour of collection-building iterator chains

use listcomp_tour::{cli, logging};

fn main() -> anyhow::Result<()> {
    // WARN by default, use RUST_LOG=debug to trace examples
    logging::init();

    cli::run()
}
