//! Project tile - one catalog entry as an outbound link

use leptos::prelude::*;

use super::{ICON_ARROW_SQUARE_OUT, ICON_CARET_RIGHT, Icon};
use crate::catalog::ProjectEntry;

/// Entrance delay step between consecutive cards, in milliseconds.
pub const REVEAL_STEP_MS: usize = 50;

/// CSS custom property consumed by the `.reveal` transition.
pub fn reveal_delay_style(index: usize) -> String {
    format!("--reveal-delay: {}ms", index * REVEAL_STEP_MS)
}

/// Link tile for one project.
///
/// Opens in a new browsing context with `noopener noreferrer`, so the
/// destination gets neither `window.opener` nor a `Referer` header.
/// `index` only staggers the entrance transition.
#[component]
pub fn ProjectCard(entry: ProjectEntry, index: usize) -> impl IntoView {
    view! {
        <a
            class="project-card glass-card reveal"
            href=entry.url().to_string()
            target="_blank"
            rel="noopener noreferrer"
            style=reveal_delay_style(index)
        >
            <span class="card-corner">
                <Icon path=ICON_ARROW_SQUARE_OUT size="16" class="icon-accent" />
            </span>
            <h3 class="card-title">
                {entry.name().to_string()}
                <Icon path=ICON_CARET_RIGHT size="16" class="card-caret" />
            </h3>
            <p class="card-description">{entry.description().to_string()}</p>
            <div class="card-footer">
                <span class="card-label">"Project Link"</span>
                <span class="card-pulse"></span>
            </div>
        </a>
    }
}
