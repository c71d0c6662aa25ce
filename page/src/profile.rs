//! Owner profile and the site bundle handed to the renderer.
//!
//! [`Profile`] carries the hero and footer copy. Every field has a default,
//! so a config file only needs to name what it changes.

use serde::{Deserialize, Serialize};

use crate::catalog::Catalog;

/// Hero and footer copy for the page owner.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Profile {
    /// Owner name, also used for the document title.
    pub owner: String,
    /// Plain part of the headline.
    pub headline: String,
    /// Gradient-highlighted part of the headline.
    pub headline_accent: String,
    /// One-line introduction under the headline.
    pub tagline: String,
    /// Remote avatar image, loaded with `referrerpolicy="no-referrer"`.
    pub avatar_url: String,
    /// Alt text for the avatar.
    pub avatar_alt: String,
    /// Address behind the `mailto:` contact pill.
    pub email: String,
    /// Social handle badge text (not a link).
    pub social_badge: String,
    /// Brand label next to the footer logo.
    pub brand: String,
    /// Text after the year in the footer.
    pub footer_note: String,
    /// External profile behind the footer icon. `None` renders a bare icon.
    pub profile_url: Option<String>,
}

impl Default for Profile {
    fn default() -> Self {
        Self {
            owner: "TinaRen".into(),
            headline: "TinaRen的".into(),
            headline_accent: "AI作品集".into(),
            tagline: "欢迎和我一起玩AI~~".into(),
            avatar_url: "https://picsum.photos/seed/tina/400/400".into(),
            avatar_alt: "TinaRen Avatar".into(),
            email: "renhong6@gmail.com".into(),
            social_badge: "小红书：@Tina读书时间".into(),
            brand: "TinaRen AI".into(),
            footer_note: "Built with AI for the Future.".into(),
            profile_url: None,
        }
    }
}

impl Profile {
    /// `<title>` text for the document.
    pub fn page_title(&self) -> String {
        format!("{}的AI作品集", self.owner)
    }

    /// `mailto:` href for the contact pill.
    pub fn mailto(&self) -> String {
        format!("mailto:{}", self.email)
    }
}

/// Everything the page renders: profile copy plus the project catalog.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Site {
    /// Hero and footer copy
    pub profile: Profile,
    /// Project tiles
    pub catalog: Catalog,
}

impl Default for Site {
    fn default() -> Self {
        Self {
            profile: Profile::default(),
            catalog: Catalog::builtin().clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn default_profile_matches_page_copy() {
        let profile = Profile::default();
        assert_eq!(profile.page_title(), "TinaRen的AI作品集");
        assert_eq!(profile.mailto(), "mailto:renhong6@gmail.com");
        assert_eq!(profile.profile_url, None);
    }

    #[test]
    fn partial_profile_keeps_defaults() {
        let profile: Profile = toml::from_str(
            r#"
            tagline = "Hello"
            profile_url = "https://github.com/example"
            "#,
        )
        .expect("valid toml");
        assert_eq!(profile.tagline, "Hello");
        assert_eq!(profile.profile_url.as_deref(), Some("https://github.com/example"));
        assert_eq!(profile.email, "renhong6@gmail.com");
    }

    #[test]
    fn misspelled_field_is_rejected() {
        let err = toml::from_str::<Profile>("taglin = \"Hello\"").unwrap_err();
        assert!(err.to_string().contains("taglin"));
    }

    #[test]
    fn default_site_uses_builtin_catalog() {
        assert_eq!(&Site::default().catalog, Catalog::builtin());
    }
}
