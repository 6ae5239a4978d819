use anyhow::Result;
use clap::Parser;

use slidedex::browse;
use slidedex::cli::{Cli, Commands, SessionAction};
use slidedex::config::find_catalog_root;
use slidedex::filter::Selection;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        None => {
            let root = find_catalog_root(cli.path).await?;
            browse::summary(&root, &Selection::default()).await?;
        }
        Some(Commands::Summary { facets, path }) => {
            let root = find_catalog_root(path).await?;
            browse::summary(&root, &facets.into_selection()).await?;
        }
        Some(Commands::Gallery {
            facets,
            confirm,
            threshold,
            path,
        }) => {
            let root = find_catalog_root(path).await?;
            browse::gallery(&root, &facets.into_selection(), confirm, threshold).await?;
        }
        Some(Commands::Facets { path }) => {
            let root = find_catalog_root(path).await?;
            browse::facets(&root).await?;
        }
        Some(Commands::Status { path }) => {
            let root = find_catalog_root(path).await?;
            browse::status(&root).await?;
        }
        Some(Commands::Session { action }) => match action {
            SessionAction::Reset { path } => {
                let root = find_catalog_root(path).await?;
                browse::reset_session(&root).await?;
            }
        },
    }

    Ok(())
}
