use clap::Parser;
use log::error;
use mir_cookie_tool::cli::CliArgs;

pub fn main() {
    let args = CliArgs::parse();

    // RUST_LOG applies unless a level was given on the command line
    let mut log_builder = env_logger::Builder::from_default_env();
    if let Some(level) = args.get_log_level() {
        log_builder.filter_level(level);
    }
    log_builder.init();

    if let Err(err) = args.run() {
        error!("{err:?}");
        std::process::exit(1);
    }
}
