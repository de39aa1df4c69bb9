use once_cell::sync::Lazy;
use serde_json::{json, Value};

use crate::domain::entities::FunnelTheme;

/// A theme with every field present, ready to hand to the page template.
#[derive(Clone, Debug, PartialEq)]
pub struct ResolvedTheme {
    pub primary_color: String,
    pub primary_color_hover: String,
    pub accent_color: String,
    pub background_color: String,
    pub surface_color: String,
    pub text_color: String,
    pub text_muted_color: String,
    pub headline_font: String,
    pub body_font: String,
    pub cta_gradient_start: String,
    pub cta_gradient_end: String,
    pub hero_bg: String,
    pub urgency_bar_bg: String,
    pub urgency_bar_text: String,
}

static DEFAULT_THEME: Lazy<ResolvedTheme> = Lazy::new(|| ResolvedTheme {
    primary_color: String::from("#e84010"),
    primary_color_hover: String::from("#c73509"),
    accent_color: String::from("#f5a623"),
    background_color: String::from("#0a0a0a"),
    surface_color: String::from("#141414"),
    text_color: String::from("#ffffff"),
    text_muted_color: String::from("#a3a3a3"),
    headline_font: String::from("'Montserrat', 'Helvetica Neue', Arial, sans-serif"),
    body_font: String::from("'Inter', 'Helvetica Neue', Arial, sans-serif"),
    cta_gradient_start: String::from("#e84010"),
    cta_gradient_end: String::from("#f5a623"),
    hero_bg: String::from("linear-gradient(135deg, #0f0f0f 0%, #1a0a00 100%)"),
    urgency_bar_bg: String::from("#b71c1c"),
    urgency_bar_text: String::from("#ffffff"),
});

fn pick(value: &Option<String>, fallback: &str) -> String {
    value.clone().unwrap_or_else(|| fallback.to_string())
}

/// Merges funnel overrides on top of the default dark theme.
pub fn resolve(theme: &FunnelTheme) -> ResolvedTheme {
    let defaults = &*DEFAULT_THEME;
    ResolvedTheme {
        primary_color: pick(&theme.primary_color, &defaults.primary_color),
        primary_color_hover: pick(&theme.primary_color_hover, &defaults.primary_color_hover),
        accent_color: pick(&theme.accent_color, &defaults.accent_color),
        background_color: pick(&theme.background_color, &defaults.background_color),
        surface_color: pick(&theme.surface_color, &defaults.surface_color),
        text_color: pick(&theme.text_color, &defaults.text_color),
        text_muted_color: pick(&theme.text_muted_color, &defaults.text_muted_color),
        headline_font: pick(&theme.headline_font, &defaults.headline_font),
        body_font: pick(&theme.body_font, &defaults.body_font),
        cta_gradient_start: pick(&theme.cta_gradient_start, &defaults.cta_gradient_start),
        cta_gradient_end: pick(&theme.cta_gradient_end, &defaults.cta_gradient_end),
        hero_bg: pick(&theme.hero_bg, &defaults.hero_bg),
        urgency_bar_bg: pick(&theme.urgency_bar_bg, &defaults.urgency_bar_bg),
        urgency_bar_text: pick(&theme.urgency_bar_text, &defaults.urgency_bar_text),
    }
}

/// Flattens a theme into the CSS custom properties the page stylesheet
/// reads, keyed the way the templates expect them.
pub fn css_variables(theme: &FunnelTheme) -> Value {
    let resolved = resolve(theme);
    json!({
        "--color-primary": resolved.primary_color,
        "--color-primary-hover": resolved.primary_color_hover,
        "--color-accent": resolved.accent_color,
        "--color-bg": resolved.background_color,
        "--color-surface": resolved.surface_color,
        "--color-text": resolved.text_color,
        "--color-text-muted": resolved.text_muted_color,
        "--font-headline": resolved.headline_font,
        "--font-body": resolved.body_font,
        "--cta-gradient-start": resolved.cta_gradient_start,
        "--cta-gradient-end": resolved.cta_gradient_end,
        "--hero-bg": resolved.hero_bg,
        "--urgency-bar-bg": resolved.urgency_bar_bg,
        "--urgency-bar-text": resolved.urgency_bar_text,
    })
}

/// The same map rendered as an inline `style` attribute value.
pub fn css_variables_inline(theme: &FunnelTheme) -> String {
    match css_variables(theme) {
        Value::Object(map) => map
            .into_iter()
            .map(|(name, value)| {
                format!("{}: {};", name, value.as_str().unwrap_or_default())
            })
            .collect::<Vec<String>>()
            .join(" "),
        _ => String::new(),
    }
}
