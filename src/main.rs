use clap::Parser;
use tracing_subscriber::EnvFilter;

use doxy_guard::cli::{Cli, Commands};
use doxy_guard::commands::{run_check, run_config, run_fix, run_guidelines, run_init};

const LOG_ENV: &str = "DOXY_GUARD_LOG";

fn init_tracing(quiet: bool, verbose: u8) {
    let level = match (quiet, verbose) {
        (true, _) => "error",
        (false, 0) => "warn",
        (false, 1) => "info",
        (false, _) => "debug",
    };
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(level));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.quiet, cli.verbose);

    let exit_code = match &cli.command {
        Commands::Check(args) => run_check(args, &cli),
        Commands::Fix(args) => run_fix(args, &cli),
        Commands::Init(args) => run_init(args),
        Commands::Config(args) => run_config(args, &cli),
        Commands::Guidelines(args) => run_guidelines(args, &cli),
    };

    std::process::exit(exit_code);
}
