//! Page title effects
//!
//! Every effect is a closed-form recipe producing a `text-shadow` stack and,
//! for some effects, a replacement title color. Background-dependent effects
//! (`retro`, `pretty`, `flat`, `deep`) take the effective page background,
//! which the renderer resolves to a neutral gray for gradient backgrounds.

use std::fmt::{Display, Formatter};
use std::str::FromStr;

use castpage_core::{generate_party_colors, hex_to_rgba, Color};

use crate::shadow::Shadow;

/// Background substituted when the page background is a gradient
pub const GRADIENT_FALLBACK_BACKGROUND: &str = "#f5f5f5";

/// Number of points in the text outline ring
pub const BORDER_RING_STEPS: usize = 24;

const WHITE: &str = "#ffffff";

/// Error returned when parsing an unknown effect name
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown page title effect `{0}`")]
pub struct UnknownEffect(pub String);

/// Page title treatment
#[derive(Clone, Copy, Debug, Default, Hash, Eq, PartialEq)]
pub enum PageTitleEffect {
    #[default]
    None,
    Shadow,
    Glow,
    Retro,
    Anaglyphic,
    Elegant,
    Deep,
    Game,
    Comic,
    Fancy,
    Pretty,
    Flat,
    Long,
    Party,
}

impl PageTitleEffect {
    pub const ALL: [PageTitleEffect; 14] = [
        PageTitleEffect::None,
        PageTitleEffect::Shadow,
        PageTitleEffect::Glow,
        PageTitleEffect::Retro,
        PageTitleEffect::Anaglyphic,
        PageTitleEffect::Elegant,
        PageTitleEffect::Deep,
        PageTitleEffect::Game,
        PageTitleEffect::Comic,
        PageTitleEffect::Fancy,
        PageTitleEffect::Pretty,
        PageTitleEffect::Flat,
        PageTitleEffect::Long,
        PageTitleEffect::Party,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::None => "none",
            Self::Shadow => "shadow",
            Self::Glow => "glow",
            Self::Retro => "retro",
            Self::Anaglyphic => "anaglyphic",
            Self::Elegant => "elegant",
            Self::Deep => "deep",
            Self::Game => "game",
            Self::Comic => "comic",
            Self::Fancy => "fancy",
            Self::Pretty => "pretty",
            Self::Flat => "flat",
            Self::Long => "long",
            Self::Party => "party",
        }
    }

    /// `page-title-effect-<name>`, empty for `none`
    pub fn class_name(self) -> String {
        match self {
            Self::None => String::new(),
            effect => format!("page-title-effect-{}", effect.as_str()),
        }
    }

    pub fn uses_background(self) -> bool {
        matches!(self, Self::Retro | Self::Pretty | Self::Flat | Self::Deep)
    }

    /// Build the shadow stack and optional color override for this effect.
    pub fn render(self, ctx: &EffectContext) -> EffectStyle {
        match self {
            Self::None => EffectStyle::default(),
            Self::Shadow => shadow(ctx),
            Self::Glow => glow(ctx),
            Self::Retro => retro(ctx),
            Self::Anaglyphic => anaglyphic(),
            Self::Elegant => elegant(),
            Self::Deep => deep(ctx),
            Self::Game => game(),
            Self::Comic => comic(),
            Self::Fancy => fancy(),
            Self::Pretty => pretty(ctx),
            Self::Flat => flat(ctx),
            Self::Long => long(ctx),
            Self::Party => party(ctx),
        }
    }
}

impl Display for PageTitleEffect {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PageTitleEffect {
    type Err = UnknownEffect;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim();
        Self::ALL
            .into_iter()
            .find(|effect| effect.as_str().eq_ignore_ascii_case(name))
            .ok_or_else(|| UnknownEffect(s.to_string()))
    }
}

/// Tunable inputs for the `shadow`, `glow` and `long` effects
#[derive(Clone, Debug, PartialEq)]
pub struct EffectTokens {
    pub shadow_color: String,
    pub depth: f64,
    pub blur: f64,
    pub intensity: f64,
    pub glow_color: String,
    pub glow_width: f64,
}

impl Default for EffectTokens {
    fn default() -> Self {
        Self {
            shadow_color: "#000000".to_string(),
            depth: 4.0,
            blur: 4.0,
            intensity: 0.5,
            glow_color: WHITE.to_string(),
            glow_width: 6.0,
        }
    }
}

/// Everything an effect recipe may read
#[derive(Clone, Debug, PartialEq)]
pub struct EffectContext {
    /// Title color before any override
    pub base_color: String,
    /// Effective page background (never a gradient)
    pub background: String,
    /// Title font size in px
    pub font_size: f64,
    pub tokens: EffectTokens,
}

/// Output of an effect recipe
#[derive(Clone, Debug, Default, PartialEq)]
pub struct EffectStyle {
    /// Replacement title color
    pub color: Option<String>,
    pub shadows: Vec<Shadow>,
}

impl EffectStyle {
    fn from_shadows(shadows: Vec<Shadow>) -> Self {
        Self {
            color: None,
            shadows,
        }
    }

    fn recolored(color: impl Into<String>, shadows: Vec<Shadow>) -> Self {
        Self {
            color: Some(color.into()),
            shadows,
        }
    }
}

/// Background usable by effects; gradients fall back to a neutral gray
pub fn effective_background(background: &str) -> String {
    if background.contains("gradient") {
        GRADIENT_FALLBACK_BACKGROUND.to_string()
    } else {
        background.to_string()
    }
}

/// Outline emulated with point shadows every 15 degrees at `width` radius.
///
/// Listed before the effect stack so it paints beneath it.
pub fn border_ring(width: f64, color: &str) -> Vec<Shadow> {
    if width <= 0.0 || !width.is_finite() {
        return Vec::new();
    }
    (0..BORDER_RING_STEPS)
        .map(|step| {
            let angle = (step as f64 * 15.0).to_radians();
            Shadow::offset(width * angle.cos(), width * angle.sin(), color)
        })
        .collect()
}

fn shadow(ctx: &EffectContext) -> EffectStyle {
    let t = &ctx.tokens;
    EffectStyle::from_shadows(vec![Shadow::new(
        t.depth,
        t.depth,
        t.blur,
        hex_to_rgba(&t.shadow_color, t.intensity),
    )])
}

fn glow(ctx: &EffectContext) -> EffectStyle {
    let t = &ctx.tokens;
    let color = hex_to_rgba(&t.glow_color, 0.8);
    let shadows = [1.0, 1.0, 2.0, 3.0, 4.0]
        .into_iter()
        .map(|scale| Shadow::glow(t.glow_width * scale, color.clone()))
        .collect();
    EffectStyle::from_shadows(shadows)
}

fn retro(ctx: &EffectContext) -> EffectStyle {
    EffectStyle::from_shadows(vec![
        Shadow::offset(3.0, 3.0, ctx.background.clone()),
        Shadow::offset(6.0, 6.0, "#363636"),
    ])
}

fn anaglyphic() -> EffectStyle {
    EffectStyle::recolored(
        "rgba(128, 0, 255, 0.5)",
        vec![Shadow::offset(3.0, 3.0, "rgba(0, 200, 255, 0.5)")],
    )
}

fn elegant() -> EffectStyle {
    let shadows = (1..=28u8)
        .map(|i| {
            let step = i as f64;
            Shadow::new(step, step, 1.0, Color::gray(80 + 5 * i).to_hex())
        })
        .collect();
    EffectStyle::from_shadows(shadows)
}

fn deep(ctx: &EffectContext) -> EffectStyle {
    let mut shadows = vec![Shadow::offset(0.0, -1.0, WHITE)];
    shadows.extend((1..=15u8).map(|i| {
        Shadow::offset(0.0, i as f64, Color::gray(46 - 2 * (i - 1)).to_hex())
    }));
    shadows.push(Shadow::new(0.0, 22.0, 30.0, "rgba(0, 0, 0, 0.9)"));
    EffectStyle::recolored(ctx.background.clone(), shadows)
}

fn game() -> EffectStyle {
    EffectStyle::recolored(
        WHITE,
        vec![
            Shadow::offset(5.0, 5.0, "#ffd217"),
            Shadow::offset(9.0, 9.0, "#5ac7ff"),
            Shadow::offset(13.0, 13.0, "#ffd217"),
            Shadow::offset(17.0, 17.0, "#5ac7ff"),
        ],
    )
}

const COMIC_OUTLINE: [(f64, f64); 15] = [
    (0.0, -3.0),
    (1.0, -3.0),
    (2.0, -2.0),
    (3.0, -1.0),
    (3.0, 0.0),
    (3.0, 1.0),
    (2.0, 2.0),
    (1.0, 3.0),
    (0.0, 3.0),
    (-1.0, 3.0),
    (-2.0, 2.0),
    (-3.0, 1.0),
    (-3.0, 0.0),
    (-3.0, -1.0),
    (-2.0, -2.0),
];

fn comic() -> EffectStyle {
    let outline = COMIC_OUTLINE
        .into_iter()
        .map(|(x, y)| Shadow::offset(x, y, "#000000"));
    let drops = (1..=7).map(|i| {
        let step = 2.0 * i as f64;
        Shadow::new(0.0, step, step, "rgba(0, 0, 0, 0.15)")
    });
    EffectStyle::recolored(WHITE, outline.chain(drops).collect())
}

fn fancy() -> EffectStyle {
    EffectStyle::recolored(
        WHITE,
        vec![Shadow::new(0.0, 4.0, 24.0, "rgba(128, 128, 128, 0.9)")],
    )
}

fn pretty(ctx: &EffectContext) -> EffectStyle {
    EffectStyle::from_shadows(vec![
        Shadow::offset(3.0, 3.0, ctx.background.clone()),
        Shadow::offset(6.0, 6.0, "#3a50d9"),
        Shadow::offset(9.0, 9.0, ctx.background.clone()),
    ])
}

fn flat(ctx: &EffectContext) -> EffectStyle {
    EffectStyle::recolored(
        ctx.background.clone(),
        vec![
            Shadow::new(0.0, 4.0, 8.0, "rgba(255, 140, 60, 0.4)"),
            Shadow::offset(0.0, -1.0, "rgba(255, 255, 255, 0.6)"),
        ],
    )
}

const LONG_STEPS: u32 = 50;

fn long(ctx: &EffectContext) -> EffectStyle {
    let shadows = (0..LONG_STEPS)
        .map(|i| {
            let step = (i + 1) as f64;
            let opacity = 0.5 * (1.0 - i as f64 / (LONG_STEPS - 1) as f64);
            Shadow::offset(step, step, hex_to_rgba(&ctx.tokens.shadow_color, opacity))
        })
        .collect();
    EffectStyle::from_shadows(shadows)
}

fn party(ctx: &EffectContext) -> EffectStyle {
    let unit = ctx.font_size / 16.0;
    let shadows = generate_party_colors(&ctx.base_color)
        .into_iter()
        .enumerate()
        .map(|(i, color)| {
            let offset = 0.5 * (i as f64 + 1.0) * unit;
            Shadow::offset(offset, offset, color)
        })
        .collect();
    EffectStyle::recolored(WHITE, shadows)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shadow::shadow_list;
    use pretty_assertions::assert_eq;

    fn context() -> EffectContext {
        EffectContext {
            base_color: "#ff0000".to_string(),
            background: "#123456".to_string(),
            font_size: 32.0,
            tokens: EffectTokens::default(),
        }
    }

    #[test]
    fn names_parse_case_insensitively() {
        for effect in PageTitleEffect::ALL {
            assert_eq!(effect.as_str().parse::<PageTitleEffect>(), Ok(effect));
        }
        assert_eq!("Glow".parse::<PageTitleEffect>(), Ok(PageTitleEffect::Glow));
        assert_eq!(
            "sparkle".parse::<PageTitleEffect>(),
            Err(UnknownEffect("sparkle".to_string()))
        );
    }

    #[test]
    fn names_match_the_field_options() {
        let names: Vec<&str> = PageTitleEffect::ALL.iter().map(|e| e.as_str()).collect();
        assert_eq!(names, castpage_registry::PAGE_TITLE_EFFECTS);
    }

    #[test]
    fn class_names() {
        assert_eq!(PageTitleEffect::None.class_name(), "");
        assert_eq!(PageTitleEffect::Long.class_name(), "page-title-effect-long");
    }

    #[test]
    fn game_is_four_hard_shadows_on_white() {
        let style = PageTitleEffect::Game.render(&context());
        assert_eq!(style.color.as_deref(), Some("#ffffff"));
        assert_eq!(
            shadow_list(&style.shadows),
            "5px 5px 0 #ffd217, 9px 9px 0 #5ac7ff, 13px 13px 0 #ffd217, 17px 17px 0 #5ac7ff"
        );
    }

    #[test]
    fn shadow_uses_effect_tokens() {
        let style = PageTitleEffect::Shadow.render(&context());
        assert_eq!(shadow_list(&style.shadows), "4px 4px 4px rgba(0, 0, 0, 0.5)");
        assert_eq!(style.color, None);
    }

    #[test]
    fn glow_has_five_layers() {
        let style = PageTitleEffect::Glow.render(&context());
        let blurs: Vec<f64> = style.shadows.iter().map(|s| s.blur).collect();
        assert_eq!(blurs, vec![6.0, 6.0, 12.0, 18.0, 24.0]);
        assert!(style
            .shadows
            .iter()
            .all(|s| s.color == "rgba(255, 255, 255, 0.8)"));
    }

    #[test]
    fn background_effects_read_the_background() {
        let ctx = context();
        let retro = PageTitleEffect::Retro.render(&ctx);
        assert_eq!(retro.shadows[0].color, "#123456");
        let deep = PageTitleEffect::Deep.render(&ctx);
        assert_eq!(deep.color.as_deref(), Some("#123456"));
        assert_eq!(deep.shadows.len(), 17);
        assert_eq!(deep.shadows[1].color, "#2e2e2e");
        assert_eq!(deep.shadows[15].color, "#121212");
        let flat = PageTitleEffect::Flat.render(&ctx);
        assert_eq!(flat.color.as_deref(), Some("#123456"));
        let pretty = PageTitleEffect::Pretty.render(&ctx);
        assert_eq!(pretty.shadows.len(), 3);
        assert!(PageTitleEffect::ALL
            .iter()
            .filter(|e| e.uses_background())
            .count()
            == 4);
    }

    #[test]
    fn recipe_sizes() {
        let ctx = context();
        assert_eq!(PageTitleEffect::Elegant.render(&ctx).shadows.len(), 28);
        assert_eq!(PageTitleEffect::Comic.render(&ctx).shadows.len(), 22);
        assert_eq!(PageTitleEffect::Long.render(&ctx).shadows.len(), 50);
        assert_eq!(PageTitleEffect::Party.render(&ctx).shadows.len(), 9);
        assert!(PageTitleEffect::None.render(&ctx).shadows.is_empty());
    }

    #[test]
    fn elegant_lightens_step_by_step() {
        let style = PageTitleEffect::Elegant.render(&context());
        assert_eq!(style.shadows[0].to_string(), "1px 1px 1px #555555");
        assert_eq!(style.shadows[27].to_string(), "28px 28px 1px #dcdcdc");
    }

    #[test]
    fn long_shadow_fades_out() {
        let style = PageTitleEffect::Long.render(&context());
        assert_eq!(style.shadows[0].to_string(), "1px 1px 0 rgba(0, 0, 0, 0.5)");
        assert_eq!(style.shadows[49].to_string(), "50px 50px 0 rgba(0, 0, 0, 0)");
    }

    #[test]
    fn party_offsets_scale_with_font_size() {
        let style = PageTitleEffect::Party.render(&context());
        assert_eq!(style.color.as_deref(), Some("#ffffff"));
        let offsets: Vec<f64> = style.shadows.iter().map(|s| s.offset_x).collect();
        assert_eq!(offsets, vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0, 9.0]);
        assert_eq!(
            style.shadows.iter().map(|s| s.color.clone()).collect::<Vec<_>>(),
            generate_party_colors("#ff0000")
        );
    }

    #[test]
    fn ring_circles_the_text() {
        let ring = border_ring(2.0, "#000");
        assert_eq!(ring.len(), BORDER_RING_STEPS);
        assert_eq!(ring[0].to_string(), "2px 0 0 #000");
        assert_eq!(ring[6].to_string(), "0 2px 0 #000");
        assert_eq!(ring[12].to_string(), "-2px 0 0 #000");
        assert!(border_ring(0.0, "#000").is_empty());
    }

    #[test]
    fn gradients_fall_back_to_gray() {
        assert_eq!(effective_background("linear-gradient(#000, #fff)"), "#f5f5f5");
        assert_eq!(effective_background("#101010"), "#101010");
    }
}
