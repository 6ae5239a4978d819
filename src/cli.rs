use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

use crate::filter::Selection;

#[derive(Parser)]
#[command(
    name = "slidedex",
    about = "Faceted browser for a consulting-slide catalog"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    #[arg(help = "Catalog root (default: auto-detect from cwd)")]
    pub path: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    #[command(about = "Summary statistics for the slides matching the selected facets")]
    Summary {
        #[command(flatten)]
        facets: FacetArgs,
        #[arg(help = "Catalog root (default: auto-detect from cwd)")]
        path: Option<PathBuf>,
    },
    #[command(about = "Render the gallery of slides matching the selected facets")]
    Gallery {
        #[command(flatten)]
        facets: FacetArgs,
        #[arg(long, help = "Confirm displaying a large gallery")]
        confirm: bool,
        #[arg(long, help = "Row count above which the gallery asks for confirmation")]
        threshold: Option<usize>,
        #[arg(help = "Catalog root (default: auto-detect from cwd)")]
        path: Option<PathBuf>,
    },
    #[command(about = "List the selectable values for every facet")]
    Facets {
        #[arg(help = "Catalog root (default: auto-detect from cwd)")]
        path: Option<PathBuf>,
    },
    #[command(about = "Quick summary: dataset path, slide count, session state")]
    Status {
        #[arg(help = "Catalog root (default: auto-detect from cwd)")]
        path: Option<PathBuf>,
    },
    #[command(about = "Manage session state")]
    Session {
        #[command(subcommand)]
        action: SessionAction,
    },
}

#[derive(Subcommand)]
pub enum SessionAction {
    #[command(about = "Clear the persisted gallery confirmation state")]
    Reset {
        #[arg(help = "Catalog root (default: auto-detect from cwd)")]
        path: Option<PathBuf>,
    },
}

#[derive(Args)]
pub struct FacetArgs {
    #[arg(long, help = "Keep only slides from this company")]
    pub company: Option<String>,
    #[arg(long, help = "Keep only slides of this slide type")]
    pub slide_type: Option<String>,
    #[arg(long, help = "Keep only slides for this industry")]
    pub industry: Option<String>,
    #[arg(long, help = "Keep only slides for this use case")]
    pub use_case: Option<String>,
    #[arg(long, help = "Keep only slides carrying this tag")]
    pub tag: Option<String>,
}

impl FacetArgs {
    pub fn into_selection(self) -> Selection {
        Selection {
            company: self.company,
            slide_type: self.slide_type,
            industry: self.industry,
            use_case: self.use_case,
            tag: self.tag,
        }
    }
}
