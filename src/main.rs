use anyhow::Result;
use bizdoctor::cli::{Cli, Commands};
use bizdoctor::commands::compute::{run_computation, Computation};
use bizdoctor::commands::report::{run_report, ReportConfig};
use bizdoctor::config::load_config;
use bizdoctor::observability::{init_tracing, install_panic_hook};
use clap::Parser;

fn main() -> Result<()> {
    let cli = Cli::parse();
    install_panic_hook(cli.command.name());

    let config = load_config(cli.config.as_deref())?;
    init_tracing(cli.verbosity, config.log_level());

    match cli.command {
        Commands::Report { io, format, plain } => run_report(ReportConfig::resolve(
            io.input,
            io.output,
            format.map(Into::into),
            plain,
            &config,
        )),
        Commands::Portfolio { io } => run_computation(Computation::Portfolio, io.input, io.output),
        Commands::Benchmark { io } => run_computation(Computation::Benchmark, io.input, io.output),
        Commands::Profile { io } => run_computation(Computation::Profile, io.input, io.output),
        Commands::Annualize { io } => run_computation(Computation::Annualize, io.input, io.output),
        Commands::Init { force } => bizdoctor::commands::init::init_config(force),
    }
}
