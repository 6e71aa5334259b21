use clap::Parser;
use epubmeta_cli::Cli;
use epubmeta_cli::command::Commands;
use tracing_subscriber::EnvFilter;

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.commands {
        Commands::Show(show) => show.show()?,
        Commands::Cover(cover) => cover.cover()?,
    }

    Ok(())
}
