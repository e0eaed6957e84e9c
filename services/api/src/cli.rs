use crate::report::{run_catalog_listing, run_recommendation, CatalogArgs, RecommendArgs};
use crate::server;
use clap::{Args, Parser, Subcommand};
use scheme_finder::error::AppError;

#[derive(Parser, Debug)]
#[command(
    name = "Scheme Finder",
    about = "Match applicant profiles against government welfare schemes",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Start the HTTP service (default command)
    Serve(ServeArgs),
    /// Rank the scheme catalog for a profile stored as JSON
    Recommend(RecommendArgs),
    /// List the schemes and categories in the catalog
    Catalog(CatalogArgs),
}

#[derive(Args, Debug, Default)]
pub(crate) struct ServeArgs {
    /// Override the configured host for the HTTP server
    #[arg(long)]
    pub(crate) host: Option<String>,
    /// Override the configured port for the HTTP server
    #[arg(long)]
    pub(crate) port: Option<u16>,
}

pub(crate) async fn run() -> Result<(), AppError> {
    let cli = Cli::parse();
    let command = cli
        .command
        .unwrap_or_else(|| Command::Serve(ServeArgs::default()));

    match command {
        Command::Serve(args) => server::run(args).await,
        Command::Recommend(args) => run_recommendation(args),
        Command::Catalog(args) => run_catalog_listing(args),
    }
}
