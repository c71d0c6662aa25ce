//! Leptos UI components for the portfolio page.
//!
//! Every component is a plain `#[component]` function with no signals, so
//! the tree renders to static HTML in one pass.
//!
//! # Component Hierarchy
//!
//! ```text
//! PortfolioDocument
//! └── PortfolioPage
//!     ├── Hero (avatar, headline, contact pills)
//!     ├── ProjectSection (per catalog group)
//!     │   ├── SectionHeader
//!     │   └── ProjectCard (per entry)
//!     └── Footer
//! ```
//!
//! # Usage
//!
//! Components are normally reached through [`crate::render_page`], but can
//! be rendered on their own:
//!
//! ```rust,ignore
//! use leptos::prelude::*;
//! use portfolio_page::components::SectionHeader;
//!
//! view! { <SectionHeader icon=ICON_APP_WINDOW title="Tools" subtitle="Small utilities" /> }
//! ```

mod document;
mod footer;
mod hero;
mod icons;
mod page;
mod project_card;
mod section;

pub use document::PortfolioDocument;
pub use footer::{Footer, copyright_line};
pub use hero::Hero;
pub use icons::*;
pub use page::PortfolioPage;
pub use project_card::{ProjectCard, REVEAL_STEP_MS, reveal_delay_style};
pub use section::{ProjectSection, SectionHeader};
