//! Page header with avatar, headline and contact badges.

use leptos::prelude::*;

use super::{ICON_BOOK_OPEN, ICON_ENVELOPE, ICON_SPARKLE, Icon};
use crate::profile::Profile;

/// Hero header built from the profile copy.
#[component]
pub fn Hero(profile: Profile) -> impl IntoView {
    view! {
        <header class="hero">
            <div class="hero-gradient"></div>
            <div class="container hero-inner intro" style="--intro-delay: 0ms">
                <Avatar url=profile.avatar_url.clone() alt=profile.avatar_alt.clone() />
                <div class="hero-info">
                    <h1 class="hero-title intro" style="--intro-delay: 200ms">
                        {profile.headline.clone()}
                        <span class="gradient-text">{profile.headline_accent.clone()}</span>
                    </h1>
                    <p class="hero-tagline intro" style="--intro-delay: 300ms">
                        {profile.tagline.clone()}
                    </p>
                    <div class="hero-contacts intro" style="--intro-delay: 400ms">
                        <a href=profile.mailto() class="pill pill-link">
                            <Icon path=ICON_ENVELOPE size="16" class="icon-accent" />
                            {profile.email.clone()}
                        </a>
                        <div class="pill">
                            <Icon path=ICON_BOOK_OPEN size="16" class="icon-social" />
                            {profile.social_badge.clone()}
                        </div>
                    </div>
                </div>
            </div>
        </header>
    }
}

/// Round avatar with glow and sparkle badge.
///
/// The image is decorative; a failed load falls back to the browser's
/// broken-image rendering.
#[component]
fn Avatar(url: String, alt: String) -> impl IntoView {
    view! {
        <div class="avatar">
            <div class="avatar-glow"></div>
            <div class="avatar-frame">
                <img src=url alt=alt class="avatar-img" referrerpolicy="no-referrer" />
            </div>
            <div class="avatar-badge">
                <Icon path=ICON_SPARKLE size="16" />
            </div>
        </div>
    }
}
