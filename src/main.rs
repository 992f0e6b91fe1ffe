use std::io;

use anyhow::Result;
use clap::Parser;
use colored::Colorize;
use tracing::{debug, info, Level};

#[derive(Parser)]
#[command(
    name = "fuse",
    author,
    version = env!("CARGO_PKG_VERSION"),
    about = "Jump start a React project",
    long_about = None
)]
struct Cli {
    /// The name of the react project you want to jump start
    project_name: String,

    /// Install Tailwind CSS
    #[arg(short, long)]
    tailwind: bool,

    /// Install Lucide React
    #[arg(short, long)]
    lucide: bool,

    /// Configure GitHub Pages deployment
    #[arg(short, long)]
    deploy: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Diagnostics are scoped to this run: the guard drops when main returns
    let subscriber = tracing_subscriber::fmt()
        .with_max_level(Level::DEBUG)
        .with_writer(io::stderr)
        .with_target(false)
        .finish();
    let _guard = tracing::subscriber::set_default(subscriber);

    info!("🍍 fuse v{}", env!("CARGO_PKG_VERSION"));
    debug!("Parameters:");
    debug!("  project_name    {}", cli.project_name);
    debug!("  tailwind        {}", cli.tailwind);
    debug!("  lucide          {}", cli.lucide);
    debug!("  deploy          {}", cli.deploy);

    fuse::create_project(&cli.project_name, cli.tailwind, cli.lucide)?;
    println!(
        "💥 successfully created {}",
        cli.project_name.green().bold()
    );

    if cli.deploy {
        fuse::configure_github_pages(&cli.project_name)?;
        println!(
            "🚀 GitHub Pages deployment configured. To deploy, run '{}' after committing your changes.",
            "npm run deploy".bold()
        );
    }

    Ok(())
}
