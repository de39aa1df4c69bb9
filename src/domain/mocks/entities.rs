use crate::domain::entities::{
    FunnelConfig, FunnelMeta, FunnelSpeaker, FunnelTheme, FunnelWebinar, Testimonial, WebinarType,
};
use crate::scheduler::WeeklySchedule;

pub fn mock_funnel() -> FunnelConfig {
    FunnelConfig {
        slug: String::from("income-stacking"),
        meta: FunnelMeta {
            title: String::from("Free Live Training"),
            description: String::from("A free training on stacking income streams."),
            og_title: Some(String::from("FREE Training")),
            og_description: None,
            og_image: None,
            canonical_url: None,
            favicon: None,
            twitter_card: None,
        },
        gtm_container_id: String::from("GTM-TEST123"),
        webinar_fuel_id: Some(String::from("18569")),
        webinar: FunnelWebinar {
            title: String::from("The Income Stacking Blueprint"),
            timezone: String::from("America/New_York"),
            duration_minutes: 90,
            datetime: None,
            dynamic: true,
            webinar_type: Some(WebinarType::Live),
            platform: Some(String::from("Zoom Webinar")),
            schedule: Some(WeeklySchedule::default()),
        },
        hero_badge_text: None,
        hero_headline: String::from("How to Stack Multiple Income Streams"),
        hero_subheadline: None,
        hero_bullets: vec![String::from("The 3 low-friction income streams")],
        hero_cta_text: None,
        hero_background_image: None,
        form_embed_code: String::from("<form id=\"inf_form_test\"></form>"),
        form_title: None,
        form_subtext: None,
        form_privacy_note: None,
        speaker: FunnelSpeaker {
            name: String::from("Ryan Bradshaw"),
            title: String::from("Investor & Educator"),
            bio: String::from("Ryan teaches income stacking."),
            headshot_url: String::from("/assets/headshot.jpg"),
            credentials: vec![],
            company_logo_url: None,
            social_proof: None,
        },
        learn_section_title: None,
        learning_points: vec![String::from("How to pick your first stream")],
        testimonials: vec![Testimonial {
            name: String::from("Dana W."),
            title: Some(String::from("Teacher")),
            quote: String::from("This changed how I think about money."),
            image_url: None,
            result: Some(String::from("Made $11,000 in 60 days")),
            stars: Some(5),
        }],
        testimonials_section_title: None,
        urgency_enabled: true,
        urgency_headline: None,
        urgency_subtext: None,
        urgency_spots_remaining: None,
        trust_badges: vec![],
        theme: FunnelTheme::default(),
        footer_disclaimer: None,
        footer_copyright: Some(String::from("© 2026 The Cashflow Academy")),
        footer_links: vec![],
    }
}
