use anyhow::{Context, Result};
use std::path::Path;

use crate::catalog::{Catalog, Facet};
use crate::config::{self, Config};
use crate::filter::{self, Selection};
use crate::gate::{self, Verdict};
use crate::output;
use crate::session::Session;
use crate::summary::summarize;

async fn load_catalog(root: &Path, config: &Config) -> Result<Catalog> {
    let dataset = config.dataset_path(root);
    let catalog = Catalog::load(&dataset, &config.image_base_url)
        .await
        .with_context(|| format!("Failed to load catalog from {}", dataset.display()))?;
    Ok(catalog)
}

pub async fn summary(root: &Path, selection: &Selection) -> Result<()> {
    let config = config::load_config(root).await?;
    let catalog = load_catalog(root, &config).await?;

    let view = filter::filter(&catalog, selection);
    output::summary::render(&summarize(&view));

    Ok(())
}

/// One full gallery pass: filter, evaluate the display gate against the
/// persisted session state, save the updated state, render the verdict.
/// `confirm` is the fire-once confirmation action; applying it re-runs the
/// gate immediately for the same view.
pub async fn gallery(
    root: &Path,
    selection: &Selection,
    confirm: bool,
    threshold: Option<usize>,
) -> Result<()> {
    let config = config::load_config(root).await?;
    let threshold = threshold.unwrap_or(config.gallery_threshold);
    let catalog = load_catalog(root, &config).await?;

    let view = filter::filter(&catalog, selection);

    let mut session = Session::load(root).await;
    let (mut state, mut verdict) = gate::evaluate(session.display.clone(), &view, threshold);

    if confirm && matches!(verdict, Verdict::NeedsConfirmation { .. }) {
        state = gate::confirm(state);
        (state, verdict) = gate::evaluate(state, &view, threshold);
    }

    session.display = state;
    session.touch();
    session.save(root).await?;

    output::gallery::render(&view, &verdict);

    Ok(())
}

pub async fn facets(root: &Path) -> Result<()> {
    let config = config::load_config(root).await?;
    let catalog = load_catalog(root, &config).await?;

    output::facets::render(&catalog);

    Ok(())
}

pub async fn status(root: &Path) -> Result<()> {
    let config = config::load_config(root).await?;
    let catalog = load_catalog(root, &config).await?;
    let session = Session::load(root).await;

    println!("Catalog: {}", config.dataset_path(root).display());
    println!("Slides: {}", catalog.len());
    println!();

    for facet in Facet::ALL {
        println!(
            "Distinct {} values: {}",
            facet.label().to_lowercase(),
            catalog.distinct_values(facet).len()
        );
    }
    println!();

    println!(
        "Session started: {}",
        session.started_at.format("%Y-%m-%d %H:%M:%S UTC")
    );
    if let Some(last) = session.last_evaluated_at {
        println!("Last evaluated: {}", last.format("%Y-%m-%d %H:%M:%S UTC"));
    }
    println!(
        "Gallery confirmed: {}",
        if session.display.confirmed { "yes" } else { "no" }
    );
    if session.display.last_view_fingerprint.is_some() {
        println!("Last view fingerprint: set");
    }

    Ok(())
}

pub async fn reset_session(root: &Path) -> Result<()> {
    Session::reset(root).await?;
    println!("Session state cleared.");
    Ok(())
}
