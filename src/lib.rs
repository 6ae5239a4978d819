pub mod browse;
pub mod catalog;
pub mod cli;
pub mod config;
pub mod filter;
pub mod gate;
pub mod output;
pub mod session;
pub mod summary;

pub use catalog::{Catalog, Facet, LoadError, Slide};
pub use filter::{Selection, filter, filter_view};
pub use gate::{
    DEFAULT_GALLERY_THRESHOLD, DisplayState, Verdict, confirm, evaluate, view_fingerprint,
};
pub use summary::{FacetCount, Summary, summarize};
