use serde::{Deserialize, Serialize};

use crate::catalog::Slide;

pub const DEFAULT_GALLERY_THRESHOLD: usize = 300;

/// Session-scoped gallery confirmation state. Passed into and returned from
/// `evaluate` so the state machine is testable without a UI harness.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DisplayState {
    pub confirmed: bool,
    pub last_view_fingerprint: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Verdict {
    Render,
    NeedsConfirmation { rows: usize },
}

/// Order-independent identity of a view: equal for two views iff they hold
/// exactly the same set of slide ids. Ids are unique per load, so this
/// never under-distinguishes two different filter results.
pub fn view_fingerprint(view: &[&Slide]) -> String {
    let mut ids: Vec<&str> = view.iter().map(|s| s.slide_id.as_str()).collect();
    ids.sort_unstable();

    let mut hasher = blake3::Hasher::new();
    for id in ids {
        hasher.update(id.as_bytes());
        hasher.update(&[0]);
    }
    hasher.finalize().to_hex().to_string()
}

/// One gate transition, run on every recomputation of the view.
///
/// A changed view identity clears any prior confirmation before the size
/// check. Views at or under the threshold always render and are marked
/// confirmed; larger views render only once confirmed for that exact
/// identity, otherwise the caller shows the warning and confirm action.
pub fn evaluate(
    mut state: DisplayState,
    view: &[&Slide],
    threshold: usize,
) -> (DisplayState, Verdict) {
    let fingerprint = view_fingerprint(view);

    if state.last_view_fingerprint.as_deref() != Some(fingerprint.as_str()) {
        state.confirmed = false;
        state.last_view_fingerprint = Some(fingerprint);
    }

    if view.len() <= threshold {
        state.confirmed = true;
        return (state, Verdict::Render);
    }

    if state.confirmed {
        return (state, Verdict::Render);
    }

    let rows = view.len();
    (state, Verdict::NeedsConfirmation { rows })
}

/// The user-triggered "confirm and display" action: marks the currently
/// evaluated view confirmed. The caller re-runs `evaluate` immediately.
pub fn confirm(mut state: DisplayState) -> DisplayState {
    state.confirmed = true;
    state
}
