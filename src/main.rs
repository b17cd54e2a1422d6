use amplicon_align::cli;
use clap::Parser;
use tracing_subscriber::EnvFilter;

fn main() -> anyhow::Result<()> {
    let cli = cli::Cli::parse();

    // Initialize logging based on verbosity flag
    let filter = if cli.verbose {
        EnvFilter::new("amplicon_align=debug,info")
    } else {
        EnvFilter::new("amplicon_align=warn")
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time()
        .init();

    match cli.command {
        cli::Commands::Align(args) => {
            cli::align::run(args, cli.format, cli.verbose)?;
        }
        cli::Commands::Ispcr(args) => {
            cli::ispcr::run(args, cli.format, cli.verbose)?;
        }
        cli::Commands::Nw(args) => {
            cli::nw::run(args, cli.format, cli.verbose)?;
        }
    }

    Ok(())
}
