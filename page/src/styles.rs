//! CSS and security policy for the portfolio page.
//!
//! # Customization
//!
//! ```rust
//! use portfolio_page::styles::PAGE_CSS;
//!
//! let my_css = ".card-title { letter-spacing: 0.02em; }";
//! let combined = format!("{}\n{}", PAGE_CSS, my_css);
//! ```
//!
//! # Features
//!
//! - Dark zinc theme with emerald accent
//! - Glass cards in a 1/2/3 column responsive grid
//! - Entrance transitions gated on the `js-reveal` root class
//! - Reduced-motion users get no transitions

/// Complete CSS for the page.
///
/// Kept free of `<`, `>` and `&` so it survives text escaping inside
/// `<style>`.
pub const PAGE_CSS: &str = r#"
:root {
    --bg: #09090b;
    --bg-card: rgba(24, 24, 27, 0.6);
    --text: #f4f4f5;
    --text-dim: #a1a1aa;
    --text-muted: #71717a;
    --text-faint: #52525b;
    --border-subtle: rgba(255, 255, 255, 0.05);
    --border: rgba(255, 255, 255, 0.1);
    --accent: #34d399;
    --accent-strong: #10b981;
    --accent-soft: rgba(16, 185, 129, 0.1);
    --accent-cyan: #06b6d4;
    --social: #f87171;
    --font-sans: 'Inter', system-ui, -apple-system, 'PingFang SC', 'Microsoft YaHei', sans-serif;
    --font-display: 'Space Grotesk', var(--font-sans);
    --container-max: 64rem;
}

*, *::before, *::after {
    box-sizing: border-box;
}

body {
    margin: 0;
    min-height: 100vh;
    background: var(--bg);
    color: var(--text);
    font-family: var(--font-sans);
    -webkit-font-smoothing: antialiased;
}

::selection {
    background: rgba(16, 185, 129, 0.3);
}

a {
    color: inherit;
    text-decoration: none;
}

.container {
    max-width: var(--container-max);
    margin: 0 auto;
    padding: 0 1.5rem;
}

.icon-accent { color: var(--accent); }
.icon-social { color: var(--social); }

/* Hero */

.hero {
    position: relative;
    padding: 6rem 0 4rem;
    overflow: hidden;
}

.hero-gradient {
    position: absolute;
    inset: 0;
    pointer-events: none;
    background: radial-gradient(circle at 50% 0%, rgba(16, 185, 129, 0.15), transparent 60%);
}

.hero-inner {
    position: relative;
    z-index: 1;
    display: flex;
    flex-direction: column;
    align-items: center;
    gap: 2rem;
}

.hero-info {
    text-align: center;
}

.hero-title {
    font-family: var(--font-display);
    font-size: 2.25rem;
    font-weight: 700;
    letter-spacing: -0.05em;
    margin: 0 0 1rem;
}

.gradient-text {
    background: linear-gradient(90deg, var(--accent), var(--accent-cyan));
    -webkit-background-clip: text;
    background-clip: text;
    color: transparent;
}

.hero-tagline {
    color: var(--text-dim);
    font-size: 1.125rem;
    font-weight: 300;
    margin: 0 0 2rem;
}

.hero-contacts {
    display: flex;
    flex-wrap: wrap;
    justify-content: center;
    gap: 1rem;
}

.pill {
    display: flex;
    align-items: center;
    gap: 0.5rem;
    padding: 0.5rem 1rem;
    border-radius: 9999px;
    background: rgba(255, 255, 255, 0.05);
    border: 1px solid var(--border);
    font-size: 0.875rem;
}

.pill-link {
    transition: background 0.2s, border-color 0.2s;
}

.pill-link:hover {
    background: rgba(255, 255, 255, 0.1);
    border-color: rgba(255, 255, 255, 0.2);
}

/* Avatar */

.avatar {
    position: relative;
}

.avatar-glow {
    position: absolute;
    inset: -4px;
    border-radius: 9999px;
    background: linear-gradient(90deg, var(--accent-strong), var(--accent-cyan));
    filter: blur(8px);
    opacity: 0.25;
    transition: opacity 1s;
}

.avatar:hover .avatar-glow {
    opacity: 0.5;
    transition-duration: 0.2s;
}

.avatar-frame {
    position: relative;
    width: 8rem;
    height: 8rem;
    border-radius: 9999px;
    overflow: hidden;
    border: 2px solid var(--border);
    background: #18181b;
}

.avatar-img {
    width: 100%;
    height: 100%;
    object-fit: cover;
}

.avatar-badge {
    position: absolute;
    right: -0.5rem;
    bottom: -0.5rem;
    display: flex;
    padding: 0.5rem;
    border-radius: 9999px;
    background: var(--accent-strong);
    color: #000;
    box-shadow: 0 10px 15px rgba(0, 0, 0, 0.4);
}

/* Sections */

.main {
    padding-bottom: 6rem;
}

.project-section {
    margin-bottom: 5rem;
}

.project-section:last-child {
    margin-bottom: 0;
}

.section-header {
    display: flex;
    flex-direction: column;
    margin-bottom: 2rem;
}

.section-heading {
    display: flex;
    align-items: center;
    gap: 0.75rem;
    margin-bottom: 0.5rem;
}

.section-icon {
    display: flex;
    padding: 0.5rem;
    border-radius: 0.5rem;
    background: var(--accent-soft);
    border: 1px solid rgba(16, 185, 129, 0.2);
}

.section-title {
    font-family: var(--font-display);
    font-size: 1.5rem;
    font-weight: 700;
    letter-spacing: -0.025em;
    margin: 0;
}

.section-subtitle {
    color: var(--text-dim);
    font-size: 0.875rem;
    margin: 0;
}

.project-grid {
    display: grid;
    grid-template-columns: 1fr;
    gap: 1rem;
}

/* Cards */

.glass-card {
    background: var(--bg-card);
    border: 1px solid var(--border);
    border-radius: 1rem;
    backdrop-filter: blur(12px);
    transition: border-color 0.3s, background 0.3s;
}

.glass-card:hover {
    border-color: rgba(52, 211, 153, 0.3);
    background: rgba(39, 39, 42, 0.6);
}

.project-card {
    position: relative;
    display: flex;
    flex-direction: column;
    padding: 1.5rem;
    overflow: hidden;
}

.card-corner {
    position: absolute;
    top: 0;
    right: 0;
    padding: 1rem;
    opacity: 0;
    transition: opacity 0.2s;
}

.project-card:hover .card-corner {
    opacity: 1;
}

.card-title {
    display: flex;
    align-items: center;
    gap: 0.5rem;
    font-size: 1.125rem;
    font-weight: 600;
    margin: 0 0 0.5rem;
    transition: color 0.2s;
}

.project-card:hover .card-title {
    color: var(--accent);
}

.card-caret {
    opacity: 0;
    transform: translateX(-0.5rem);
    transition: opacity 0.2s, transform 0.2s;
}

.project-card:hover .card-caret {
    opacity: 1;
    transform: translateX(0);
}

.card-description {
    color: var(--text-muted);
    font-size: 0.875rem;
    line-height: 1.625;
    margin: 0;
}

.card-footer {
    display: flex;
    align-items: center;
    justify-content: space-between;
    margin-top: 1rem;
    padding-top: 1rem;
    border-top: 1px solid var(--border-subtle);
}

.card-label {
    font-size: 10px;
    font-weight: 700;
    text-transform: uppercase;
    letter-spacing: 0.1em;
    color: var(--text-faint);
}

.card-pulse {
    width: 6px;
    height: 6px;
    border-radius: 9999px;
    background: rgba(16, 185, 129, 0.5);
    animation: pulse 2s cubic-bezier(0.4, 0, 0.6, 1) infinite;
}

.project-card:hover .card-pulse {
    background: var(--accent);
}

@keyframes pulse {
    50% { opacity: 0.5; }
}

/* Footer */

.footer {
    border-top: 1px solid var(--border-subtle);
    padding: 3rem 0;
}

.footer-inner {
    display: flex;
    flex-direction: column;
    align-items: center;
    justify-content: space-between;
    gap: 1.5rem;
}

.footer-brand {
    display: flex;
    align-items: center;
    gap: 0.5rem;
}

.footer-logo {
    display: flex;
    align-items: center;
    justify-content: center;
    width: 2rem;
    height: 2rem;
    border-radius: 0.25rem;
    background: var(--accent-strong);
    color: #000;
}

.footer-title {
    font-family: var(--font-display);
    font-weight: 700;
    letter-spacing: -0.025em;
}

.footer-copyright {
    color: var(--text-faint);
    font-size: 0.875rem;
    margin: 0;
}

.footer-links {
    display: flex;
    gap: 1rem;
}

.footer-profile {
    display: flex;
    color: var(--text-faint);
    transition: color 0.2s;
}

.footer-profile:hover {
    color: #fff;
}

/* Entrance */

.js-reveal .intro {
    animation: intro 0.5s ease-out both;
    animation-delay: var(--intro-delay, 0ms);
}

@keyframes intro {
    from { opacity: 0; transform: translateY(10px); }
    to { opacity: 1; transform: none; }
}

.js-reveal .reveal {
    opacity: 0;
    transform: translateY(20px);
    transition: opacity 0.5s ease, transform 0.5s ease, border-color 0.3s, background 0.3s;
    transition-delay: var(--reveal-delay, 0ms), var(--reveal-delay, 0ms), 0s, 0s;
}

.js-reveal .reveal.is-visible {
    opacity: 1;
    transform: none;
}

@media (prefers-reduced-motion: reduce) {
    .js-reveal .intro,
    .js-reveal .reveal {
        animation: none;
        transition: none;
        opacity: 1;
        transform: none;
    }
}

@media (min-width: 640px) {
    .project-grid { grid-template-columns: repeat(2, 1fr); }
}

@media (min-width: 768px) {
    .hero-inner { flex-direction: row; gap: 3rem; }
    .hero-info { text-align: left; }
    .hero-title { font-size: 3.75rem; }
    .hero-tagline { font-size: 1.25rem; }
    .hero-contacts { justify-content: flex-start; }
    .avatar-frame { width: 10rem; height: 10rem; }
    .footer-inner { flex-direction: row; }
}

@media (min-width: 1024px) {
    .project-grid { grid-template-columns: repeat(3, 1fr); }
}
"#;

/// Content Security Policy for the generated page.
///
/// Images may come from any https origin (the avatar is remote); styles and
/// scripts are inline only; nothing else loads.
pub const CSP: &str = "default-src 'none'; img-src 'self' https: data:; style-src 'unsafe-inline'; script-src 'unsafe-inline'; base-uri 'none'; form-action 'none';";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn css_has_no_escaped_characters() {
        assert!(!PAGE_CSS.contains('<'));
        assert!(!PAGE_CSS.contains('>'));
        assert!(!PAGE_CSS.contains('&'));
    }

    #[test]
    fn csp_allows_remote_images_only() {
        assert!(CSP.contains("img-src 'self' https:"));
        assert!(CSP.contains("default-src 'none'"));
        assert!(!CSP.contains("connect-src"));
    }
}
