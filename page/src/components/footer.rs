//! Page footer.

use leptos::prelude::*;

use super::{ICON_GITHUB_LOGO, ICON_LIGHTNING, Icon};
use crate::profile::Profile;

/// Footer line: `© {year} {note}`.
pub fn copyright_line(year: i32, note: &str) -> String {
    format!("© {} {}", year, note)
}

/// Brand mark, copyright notice and the optional profile link.
#[component]
pub fn Footer(profile: Profile, year: i32) -> impl IntoView {
    let notice = copyright_line(year, &profile.footer_note);

    let profile_icon = match profile.profile_url.clone() {
        Some(url) => view! {
            <a
                href=url
                target="_blank"
                rel="noopener noreferrer"
                class="footer-profile"
                aria-label="Profile"
            >
                <Icon path=ICON_GITHUB_LOGO size="20" />
            </a>
        }
        .into_any(),
        None => view! {
            <span class="footer-profile">
                <Icon path=ICON_GITHUB_LOGO size="20" />
            </span>
        }
        .into_any(),
    };

    view! {
        <footer class="footer">
            <div class="container footer-inner">
                <div class="footer-brand">
                    <span class="footer-logo">
                        <Icon path=ICON_LIGHTNING size="20" />
                    </span>
                    <span class="footer-title">{profile.brand.clone()}</span>
                </div>
                <p class="footer-copyright">{notice}</p>
                <div class="footer-links">{profile_icon}</div>
            </div>
        </footer>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use leptos::tachys::view::RenderHtml;
    use pretty_assertions::assert_eq;

    #[test]
    fn copyright_line_format() {
        assert_eq!(
            copyright_line(2031, "Built with AI for the Future."),
            "© 2031 Built with AI for the Future."
        );
    }

    #[test]
    fn bare_icon_without_profile_url() {
        let html = view! { <Footer profile=Profile::default() year=2030 /> }.to_html();
        assert!(html.contains("© 2030 Built with AI for the Future."));
        assert!(html.contains("TinaRen AI"));
        assert!(!html.contains("<a"));
    }

    #[test]
    fn profile_link_is_hardened() {
        let profile = Profile {
            profile_url: Some("https://github.com/example".into()),
            ..Profile::default()
        };
        let html = view! { <Footer profile=profile year=2030 /> }.to_html();
        assert!(html.contains(r#"href="https://github.com/example""#));
        assert!(html.contains(r#"rel="noopener noreferrer""#));
    }
}
