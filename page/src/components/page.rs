//! Page shell: hero, one section per catalog group, footer.

use leptos::prelude::*;

use super::{Footer, Hero, ProjectSection};
use crate::catalog::Group;
use crate::profile::Site;

/// The whole page body. Pure function of `site` and `year`.
#[component]
pub fn PortfolioPage(site: Site, year: i32) -> impl IntoView {
    let Site { profile, catalog } = site;

    view! {
        <div class="page">
            <Hero profile=profile.clone() />
            <main class="container main">
                {Group::ALL.into_iter().map(|group| {
                    view! {
                        <ProjectSection group=group entries=catalog.entries(group).to_vec() />
                    }
                }).collect::<Vec<_>>()}
            </main>
            <Footer profile=profile year=year />
        </div>
    }
}
