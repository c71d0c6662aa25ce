//! Root document component - the complete HTML page

use leptos::prelude::*;

use super::PortfolioPage;
use crate::profile::Site;
use crate::styles::{CSP, PAGE_CSS};

/// The complete HTML document for the portfolio
#[component]
pub fn PortfolioDocument(site: Site, year: i32) -> impl IntoView {
    let title = site.profile.page_title();

    view! {
        <html lang="zh-CN">
            <head>
                <meta charset="UTF-8" />
                <meta name="viewport" content="width=device-width, initial-scale=1.0" />
                <meta http-equiv="Content-Security-Policy" content=CSP />
                <title>{title}</title>
                <style>{PAGE_CSS}</style>
                // Must run before first paint so tiles start hidden
                <script>{REVEAL_FLAG_SCRIPT}</script>
            </head>
            <body>
                <PortfolioPage site=site year=year />
                <script>{REVEAL_SCRIPT}</script>
            </body>
        </html>
    }
}

/// Opts the document into the hidden-until-visible tile state.
/// Without it (no JS) tiles are plainly visible.
const REVEAL_FLAG_SCRIPT: &str = "document.documentElement.classList.add('js-reveal');";

/// Reveals each `.reveal` tile the first time it enters the viewport.
const REVEAL_SCRIPT: &str = r#"
(function () {
  var tiles = document.querySelectorAll('.reveal');
  if (!('IntersectionObserver' in window)) {
    tiles.forEach(function (tile) { tile.classList.add('is-visible'); });
    return;
  }
  // Unobserve after the first hit: the entrance plays once per tile
  var observer = new IntersectionObserver(function (entries) {
    entries.forEach(function (entry) {
      if (!entry.isIntersecting) { return; }
      entry.target.classList.add('is-visible');
      observer.unobserve(entry.target);
    });
  });
  tiles.forEach(function (tile) { observer.observe(tile); });
})();
"#;
