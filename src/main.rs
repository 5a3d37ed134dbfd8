use clap::Parser;
use subnet_calc::cli::Cli;
use subnet_calc::config::Config;
use subnet_calc::logging::init_logging;
use subnet_calc::{run, SubnetError};

fn main() {
    // Do as little as possible in main.rs as it can't contain any tests
    dotenv::dotenv().ok();
    let cli = Cli::parse();

    let config = Config::from_env().unwrap_or_else(|e| fail(&e));
    if let Err(e) = init_logging(&config, cli.log_level()) {
        eprintln!("Logging disabled: {e}");
    }
    if cli.no_color {
        colored::control::set_override(false);
    }

    match run(&cli, &config) {
        Ok(out) => print!("{out}"),
        Err(e) => fail(&e),
    }
}

fn fail(err: &SubnetError) -> ! {
    eprintln!("{}", err.report());
    std::process::exit(1)
}
