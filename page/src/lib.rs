//! # portfolio-page
//!
//! Leptos SSR renderer for the TinaRen AI portfolio: a hero banner, two
//! grids of project links (games and apps) and a footer, emitted as one
//! self-contained HTML document.
//!
//! ## Features
//!
//! - **Static output** - Pure SSR, no hydration, no runtime fetches
//! - **Compiled-in catalog** - Project links live in [`catalog::Catalog::builtin`]
//! - **Hardened links** - Every outbound tile uses `noopener noreferrer`
//! - **Cascading entrance** - Tiles fade in once, staggered by position
//!
//! ## Quick Start
//!
//! ```rust
//! use portfolio_page::{render_page, Site};
//!
//! let html = render_page(&Site::default());
//! assert!(html.starts_with("<!DOCTYPE html>"));
//! assert!(html.contains("消消乐"));
//! ```
//!
//! ## Architecture
//!
//! - [`catalog`] - Project entries and their groups
//! - [`profile`] - Hero/footer copy and the [`Site`] bundle
//! - [`components`] - Leptos UI components
//! - [`styles`] - CSS and Content-Security-Policy constants
//!
//! Rendering goes through Leptos 0.8's `RenderHtml` trait:
//!
//! ```rust,ignore
//! use leptos::tachys::view::RenderHtml;
//!
//! let html: String = view! { <PortfolioPage site=site year=2026 /> }.to_html();
//! ```

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod catalog;
pub mod components;
pub mod profile;
pub mod styles;

pub use catalog::{Catalog, CatalogError, Group, ProjectEntry};
pub use profile::{Profile, Site};

use chrono::Datelike;
use components::PortfolioDocument;
use leptos::prelude::*;
use leptos::tachys::view::RenderHtml;

/// Current calendar year in local time.
pub fn current_year() -> i32 {
    chrono::Local::now().year()
}

/// Render the full page, stamping the footer with [`current_year`].
///
/// The year is read on every call, never cached.
///
/// # Example
///
/// ```rust
/// use portfolio_page::{current_year, render_page, Site};
///
/// let html = render_page(&Site::default());
/// assert!(html.contains(&format!("© {}", current_year())));
/// ```
pub fn render_page(site: &Site) -> String {
    render_page_for_year(site, current_year())
}

/// Render the full page with a fixed footer year.
///
/// Useful for reproducible builds and tests.
pub fn render_page_for_year(site: &Site, year: i32) -> String {
    let doc = view! {
        <PortfolioDocument site=site.clone() year=year />
    };

    let html = doc.to_html();

    // Leptos doesn't include DOCTYPE, so we add it
    format!("<!DOCTYPE html>\n{}", html)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn default_page() -> String {
        render_page_for_year(&Site::default(), 2026)
    }

    #[test]
    fn renders_complete_document() {
        let html = default_page();

        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains("<html"));
        assert!(html.contains("<title>TinaRen的AI作品集</title>"));
        assert!(html.contains("Content-Security-Policy"));
    }

    #[test]
    fn every_entry_links_to_its_exact_url() {
        let html = default_page();
        for (_, entry) in Catalog::builtin().iter() {
            let href = format!(r#"href="{}""#, entry.url());
            assert_eq!(html.matches(&href).count(), 1, "{}", entry.url());
            assert!(html.contains(entry.name()));
            assert!(html.contains(entry.description()));
        }
    }

    #[test]
    fn every_tile_opens_hardened_new_context() {
        let html = default_page();
        assert_eq!(html.matches(r#"target="_blank""#).count(), 12);
        assert_eq!(html.matches(r#"rel="noopener noreferrer""#).count(), 12);
    }

    #[test]
    fn sections_follow_group_order() {
        let html = default_page();
        let games = html.find("我的AI游戏").expect("games section");
        let apps = html.find("我的AI应用").expect("apps section");
        let last_game = html
            .find("https://gitd2p7yoixz4.ok.kimi.link/")
            .expect("last game tile");
        let first_app = html
            .find("https://www.doubao.com/share/code/201655d002efc315")
            .expect("first app tile");

        assert!(games < last_game);
        assert!(last_game < apps);
        assert!(apps < first_app);
    }

    #[test]
    fn renders_example_entry() {
        let html = default_page();
        assert!(html.contains(r#"href="https://match.tina-ai.xyz/""#));
        assert!(html.contains("消消乐"));
        assert!(html.contains("经典三消益智游戏"));
    }

    #[test]
    fn hero_contacts_and_avatar() {
        let html = default_page();
        assert!(html.contains(r#"href="mailto:renhong6@gmail.com""#));
        assert!(html.contains("小红书：@Tina读书时间"));
        assert!(html.contains(r#"src="https://picsum.photos/seed/tina/400/400""#));
        assert!(html.contains(r#"referrerpolicy="no-referrer""#));
        assert!(html.contains("欢迎和我一起玩AI~~"));
    }

    #[test]
    fn footer_uses_given_year() {
        let html = render_page_for_year(&Site::default(), 2031);
        assert!(html.contains("© 2031 Built with AI for the Future."));
    }

    #[test]
    fn footer_year_is_current_year() {
        let before = current_year();
        let html = render_page(&Site::default());
        let after = current_year();

        let stamped = [before, after]
            .iter()
            .any(|year| html.contains(&copyright(*year)));
        assert!(stamped);
    }

    fn copyright(year: i32) -> String {
        components::copyright_line(year, &Profile::default().footer_note)
    }

    #[test]
    fn empty_catalog_renders_without_tiles() {
        let site = Site {
            profile: Profile::default(),
            catalog: Catalog::empty(),
        };
        let html = render_page_for_year(&site, 2026);
        assert!(html.contains("我的AI游戏"));
        assert!(html.contains("我的AI应用"));
        assert_eq!(html.matches(r#"rel="noopener noreferrer""#).count(), 0);
    }

    #[test]
    fn tiles_cascade_by_position_within_group() {
        let html = default_page();
        // Six tiles per group, so each delay step appears twice
        for step in 0..6 {
            let style = components::reveal_delay_style(step);
            assert_eq!(html.matches(&style).count(), 2, "{style}");
        }
    }
}
