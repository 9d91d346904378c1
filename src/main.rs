use clap::Parser;
use eqweight::cli::{run, Cli};

fn main() -> std::process::ExitCode {
    init_logger();
    run(Cli::parse())
}

fn init_logger() {
    env_logger::Builder::new()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .init();
}
