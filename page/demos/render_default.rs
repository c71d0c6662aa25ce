//! Render the built-in portfolio to a local file.
//!
//! Run with: `cargo run -p portfolio-page --example render_default`

use portfolio_page::{Site, render_page};

fn main() {
    let site = Site::default();
    let html = render_page(&site);

    let output_path = "portfolio.html";
    std::fs::write(output_path, &html).expect("Failed to write page");

    println!("Page written to: {}", output_path);
    println!("{} projects, {} bytes", site.catalog.len(), html.len());
}
