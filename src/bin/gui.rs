use clap::Parser;

#[derive(Debug, Parser)]
#[command(name = "julia_explorer_gui", about = "Interactive Julia set explorer")]
struct Args {
    /// Share link or query string to open.
    #[arg(long, default_value = "")]
    link: String,
}

fn main() -> anyhow::Result<()> {
    julia_explorer::init_logging();
    let args = Args::parse();

    let config = julia_explorer::ExplorerConfig::from_query(&args.link);
    let command = julia_explorer::RunGuiCommand::new(julia_explorer::PixelsPresenterFactory::new(), config);

    command.execute()?;

    Ok(())
}
