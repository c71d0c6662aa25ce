//! Catalog sections: a header banner followed by a grid of project tiles.

use leptos::prelude::*;

use super::{Icon, ProjectCard};
use crate::catalog::{Group, ProjectEntry};

/// Section banner: icon badge, title and subtitle.
///
/// Empty strings render as empty text.
#[component]
pub fn SectionHeader(
    /// SVG path data for the badge icon
    icon: &'static str,
    #[prop(into)] title: String,
    #[prop(into)] subtitle: String,
) -> impl IntoView {
    view! {
        <div class="section-header">
            <div class="section-heading">
                <div class="section-icon">
                    <Icon path=icon size="24" class="icon-accent" />
                </div>
                <h2 class="section-title">{title}</h2>
            </div>
            <p class="section-subtitle">{subtitle}</p>
        </div>
    }
}

/// One catalog group: header plus tile grid, tiles in catalog order.
///
/// An empty `entries` list renders the header and an empty grid.
#[component]
pub fn ProjectSection(group: Group, entries: Vec<ProjectEntry>) -> impl IntoView {
    let section_id = format!("section-{}", group.key());

    view! {
        <section id=section_id class="project-section">
            <SectionHeader icon=group.icon() title=group.title() subtitle=group.subtitle() />
            <div class="project-grid" data-group=group.key()>
                {entries.into_iter().enumerate().map(|(index, entry)| {
                    view! { <ProjectCard entry=entry index=index /> }
                }).collect::<Vec<_>>()}
            </div>
        </section>
    }
}
