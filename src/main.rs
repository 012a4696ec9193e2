use std::path::PathBuf;

use clap::Parser;

use folio::app::App;
use folio::config::Config;
use folio::content::load_profile;
use folio::error::AppResult;
use folio::theme::Theme;

/// Terminal portfolio viewer.
#[derive(Debug, Parser)]
#[command(name = "folio", version, about)]
struct Cli {
    /// Profile JSON file; the embedded profile is shown when omitted.
    content: Option<PathBuf>,

    /// Config file overriding the default lookup locations.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Start with this theme instead of the configured default.
    #[arg(long, value_parser = ["light", "dark"])]
    theme: Option<String>,
}

#[tokio::main(flavor = "multi_thread")]
async fn main() {
    if let Err(err) = run().await {
        eprintln!("{err}");
        std::process::exit(1);
    }
}

async fn run() -> AppResult<()> {
    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => Config::load_from_path(path)?,
        None => Config::load()?,
    };
    let profile = load_profile(cli.content.as_deref())?;
    let theme = cli.theme.as_deref().map(Theme::parse);

    let mut app = App::new(profile, config, theme);
    app.run().await
}
