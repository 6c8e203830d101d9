use crate::prelude::*;
use clap::Parser;

mod config;
mod error;
mod jokes;
mod prelude;
mod provider;
mod serve;
mod service;

#[derive(Debug, clap::Parser)]
#[command(
    author,
    version,
    about,
    long_about = "Chuck Norris jokes, rewritten for the office mascots"
)]
pub struct App {
    #[command(subcommand)]
    pub command: SubCommands,

    #[clap(flatten)]
    global: Global,
}

#[derive(Debug, Clone, clap::Args)]
pub struct Global {
    /// Base URL of the joke provider
    #[clap(
        long,
        env = "MEOWNORRIS_PROVIDER_URL",
        global = true,
        default_value = config::DEFAULT_PROVIDER_URL
    )]
    provider_url: String,

    /// Provider request timeout, in seconds
    #[clap(long, env = "MEOWNORRIS_TIMEOUT", global = true, default_value = "10")]
    timeout: u64,

    /// Whether to display additional information.
    #[clap(long, env = "MEOWNORRIS_VERBOSE", global = true, default_value = "false")]
    verbose: bool,
}

#[derive(Debug, clap::Parser)]
pub enum SubCommands {
    /// Start the joke API HTTP server
    Serve(crate::serve::ServeOptions),

    /// Print a random joke
    Random(crate::jokes::RandomOptions),

    /// Print a random joke from a category
    Category(crate::jokes::CategoryOptions),

    /// List the provider's joke categories
    Categories(crate::jokes::ListOptions),

    /// List the registered mascots
    Mascots(crate::jokes::ListOptions),
}

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();
    color_eyre::install()?;

    let app = App::parse();

    match app.command {
        SubCommands::Serve(options) => crate::serve::run(options, app.global).await,
        SubCommands::Random(options) => crate::jokes::random(options, app.global).await,
        SubCommands::Category(options) => crate::jokes::category(options, app.global).await,
        SubCommands::Categories(options) => crate::jokes::categories(options, app.global).await,
        SubCommands::Mascots(options) => crate::jokes::mascots(options),
    }
    .map_err(|err: color_eyre::eyre::Report| eyre!(err))
}
