//! Stock customizer sections

use crate::section::SectionDefinition;

/// Section ids
pub mod ids {
    pub const PAGE_BACKGROUND: &str = "page-background";
    pub const TYPOGRAPHY: &str = "typography";
    pub const PAGE_TITLE: &str = "page-title";
    pub const PROFILE_IMAGE: &str = "profile-image";
    pub const WIDGETS: &str = "widgets";
    pub const SOCIAL_ICONS: &str = "social-icons";
    pub const SPACING: &str = "spacing";
    pub const PODCAST_PLAYER: &str = "podcast-player";
}

pub fn sections() -> Vec<SectionDefinition> {
    vec![
        SectionDefinition::new(ids::PAGE_BACKGROUND, "Page Background", &["page-background"])
            .order(0)
            .collapsible(false),
        SectionDefinition::new(
            ids::TYPOGRAPHY,
            "Typography",
            &[
                "heading-font",
                "heading-color",
                "heading-size",
                "heading-weight",
                "body-font",
                "body-color",
                "body-size",
                "body-weight",
            ],
        )
        .order(1),
        SectionDefinition::new(
            ids::PAGE_TITLE,
            "Page Title",
            &[
                "page-title-font",
                "page-title-color",
                "page-title-size",
                "page-title-weight",
                "page-title-uppercase",
                "page-title-effect",
                "page-title-border-width",
                "page-title-border-color",
                "page-title-shadow-color",
                "page-title-shadow-depth",
                "page-title-shadow-blur",
                "page-title-shadow-intensity",
                "page-title-glow-color",
                "page-title-glow-width",
            ],
        )
        .order(2),
        SectionDefinition::new(
            ids::PROFILE_IMAGE,
            "Profile Image",
            &[
                "profile-image-size",
                "profile-image-radius",
                "profile-image-effect",
                "profile-image-shadow-color",
                "profile-image-shadow-intensity",
                "profile-image-shadow-depth",
                "profile-image-shadow-blur",
                "profile-image-glow-color",
                "profile-image-glow-width",
            ],
        )
        .order(3)
        .default_expanded(false),
        SectionDefinition::new(
            ids::WIDGETS,
            "Widgets",
            &[
                "widget-background",
                "widget-text-color",
                "widget-border-color",
                "widget-border-width",
                "widget-border-radius",
                "widget-border-effect",
                "widget-shadow-depth",
                "widget-glow-color",
                "widget-glow-width",
                "widget-glow-intensity",
            ],
        )
        .order(4),
        SectionDefinition::new(
            ids::SOCIAL_ICONS,
            "Social Icons",
            &["social-icon-color", "social-icon-size", "social-icon-spacing"],
        )
        .order(5)
        .default_expanded(false),
        SectionDefinition::new(
            ids::SPACING,
            "Spacing",
            &["page-padding", "widget-gap", "widget-padding"],
        )
        .order(6)
        .default_expanded(false),
        SectionDefinition::new(
            ids::PODCAST_PLAYER,
            "Podcast Player",
            &[
                "podcast-player-background",
                "podcast-player-text",
                "podcast-player-accent",
            ],
        )
        .order(7)
        .default_expanded(false),
    ]
}
