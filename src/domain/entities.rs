use serde::{Deserialize, Serialize};

use crate::scheduler::WeeklySchedule;

/// Browser-tab and share metadata for one funnel.
#[derive(Deserialize, Serialize, Clone, Debug, PartialEq)]
pub struct FunnelMeta {
    pub title: String,
    pub description: String,
    pub og_title: Option<String>,
    pub og_description: Option<String>,
    pub og_image: Option<String>,
    pub canonical_url: Option<String>,
    pub favicon: Option<String>,
    pub twitter_card: Option<String>,
}

impl FunnelMeta {
    pub fn og_title(&self) -> &str {
        self.og_title.as_deref().unwrap_or(&self.title)
    }

    pub fn og_description(&self) -> &str {
        self.og_description.as_deref().unwrap_or(&self.description)
    }

    pub fn twitter_card(&self) -> &str {
        self.twitter_card.as_deref().unwrap_or("summary_large_image")
    }
}

#[derive(Deserialize, Serialize, Clone, Debug, PartialEq)]
pub struct FunnelSpeaker {
    pub name: String,
    pub title: String,
    pub bio: String,
    pub headshot_url: String,
    #[serde(default)]
    pub credentials: Vec<String>,
    pub company_logo_url: Option<String>,
    pub social_proof: Option<String>,
}

#[derive(Deserialize, Serialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "lowercase")]
pub enum WebinarType {
    Live,
    Automated,
}

#[derive(Deserialize, Serialize, Clone, Debug, PartialEq)]
pub struct FunnelWebinar {
    pub title: String,
    pub timezone: String,
    pub duration_minutes: u32,
    /// Static RFC 3339 start, for one-off webinars. Recurring funnels leave
    /// this unset and carry `dynamic: true` instead.
    pub datetime: Option<String>,
    #[serde(default)]
    pub dynamic: bool,
    pub webinar_type: Option<WebinarType>,
    pub platform: Option<String>,
    /// Overrides the built-in weekly table for this funnel.
    pub schedule: Option<WeeklySchedule>,
}

#[derive(Deserialize, Serialize, Clone, Debug, PartialEq)]
pub struct Testimonial {
    pub name: String,
    pub title: Option<String>,
    pub quote: String,
    pub image_url: Option<String>,
    pub result: Option<String>,
    pub stars: Option<u8>,
}

#[derive(Deserialize, Serialize, Clone, Debug, PartialEq)]
pub struct TrustBadge {
    pub label: String,
    pub icon: Option<String>,
}

#[derive(Deserialize, Serialize, Clone, Debug, PartialEq)]
pub struct FooterLink {
    pub label: String,
    pub url: String,
}

/// Per-funnel color and font overrides. Everything is optional; resolution
/// against the default dark theme happens in `domain::theme`.
#[derive(Deserialize, Serialize, Clone, Debug, Default, PartialEq)]
pub struct FunnelTheme {
    pub primary_color: Option<String>,
    pub primary_color_hover: Option<String>,
    pub accent_color: Option<String>,
    pub background_color: Option<String>,
    pub surface_color: Option<String>,
    pub text_color: Option<String>,
    pub text_muted_color: Option<String>,
    pub headline_font: Option<String>,
    pub body_font: Option<String>,
    pub cta_gradient_start: Option<String>,
    pub cta_gradient_end: Option<String>,
    pub hero_bg: Option<String>,
    pub urgency_bar_bg: Option<String>,
    pub urgency_bar_text: Option<String>,
}

/// The single source of truth for one funnel: everything a landing page
/// needs, read from one JSON document. Missing optional fields always
/// resolve to a safe default so an incomplete config never breaks a page.
#[derive(Deserialize, Serialize, Clone, Debug, PartialEq)]
pub struct FunnelConfig {
    pub slug: String,
    pub meta: FunnelMeta,
    pub gtm_container_id: String,
    /// Webinar-platform id, injected into the CRM form's hidden field.
    pub webinar_fuel_id: Option<String>,
    pub webinar: FunnelWebinar,

    pub hero_badge_text: Option<String>,
    pub hero_headline: String,
    pub hero_subheadline: Option<String>,
    #[serde(default)]
    pub hero_bullets: Vec<String>,
    pub hero_cta_text: Option<String>,
    pub hero_background_image: Option<String>,

    /// Raw CRM form embed, rendered verbatim. Submission handling stays
    /// entirely with the CRM provider.
    pub form_embed_code: String,
    pub form_title: Option<String>,
    pub form_subtext: Option<String>,
    pub form_privacy_note: Option<String>,

    pub speaker: FunnelSpeaker,

    pub learn_section_title: Option<String>,
    #[serde(default)]
    pub learning_points: Vec<String>,

    #[serde(default)]
    pub testimonials: Vec<Testimonial>,
    pub testimonials_section_title: Option<String>,

    #[serde(default)]
    pub urgency_enabled: bool,
    pub urgency_headline: Option<String>,
    pub urgency_subtext: Option<String>,
    pub urgency_spots_remaining: Option<u32>,

    #[serde(default)]
    pub trust_badges: Vec<TrustBadge>,

    #[serde(default)]
    pub theme: FunnelTheme,

    pub footer_disclaimer: Option<String>,
    pub footer_copyright: Option<String>,
    #[serde(default)]
    pub footer_links: Vec<FooterLink>,
}

impl FunnelConfig {
    /// The weekly table this funnel runs on: its own override, or the
    /// built-in table re-homed to the funnel's timezone.
    pub fn schedule(&self) -> WeeklySchedule {
        match &self.webinar.schedule {
            Some(schedule) => schedule.clone(),
            None => WeeklySchedule {
                timezone: self.webinar.timezone.clone(),
                ..WeeklySchedule::default()
            },
        }
    }

    pub fn hero_cta_text(&self) -> &str {
        self.hero_cta_text
            .as_deref()
            .unwrap_or("YES! RESERVE MY FREE SEAT NOW →")
    }

    pub fn hero_badge_text(&self) -> &str {
        self.hero_badge_text
            .as_deref()
            .unwrap_or("🔴 FREE LIVE TRAINING")
    }

    pub fn form_title(&self) -> &str {
        self.form_title
            .as_deref()
            .unwrap_or("Reserve Your Free Spot Now")
    }

    pub fn form_subtext(&self) -> &str {
        self.form_subtext.as_deref().unwrap_or(
            "Seats are limited. Enter your details below to claim your spot on the next available session.",
        )
    }

    pub fn form_privacy_note(&self) -> &str {
        self.form_privacy_note
            .as_deref()
            .unwrap_or("🔒 Your information is 100% secure and will never be shared.")
    }

    pub fn learn_section_title(&self) -> &str {
        self.learn_section_title
            .as_deref()
            .unwrap_or("Here's What You'll Discover on This Free Training:")
    }

    pub fn testimonials_section_title(&self) -> &str {
        self.testimonials_section_title
            .as_deref()
            .unwrap_or("Real Results From Real Students")
    }

    pub fn urgency_headline(&self) -> String {
        if let Some(headline) = &self.urgency_headline {
            return headline.clone();
        }
        match self.urgency_spots_remaining {
            Some(spots) => format!(
                "⚠️ Only {} Spots Remaining — Register Now Before It's Full",
                spots
            ),
            None => String::from("⚠️ Seats Are Filling Up Fast — Register Now"),
        }
    }
}
