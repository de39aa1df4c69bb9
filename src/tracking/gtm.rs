use std::fmt::Display;

use serde_json::{json, Value};

/// Every custom event this platform pushes to the tag-manager dataLayer.
/// The analytics pipeline is a one-way sink; nothing here reads back.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Event {
    PageView,
    FormView,
    FormStart,
    FormSubmit,
    RegistrationComplete,
    CtaClick,
    ScrollToForm,
    ScrollDepth,
    CountdownExpired,
    VideoPlay,
    VideoComplete,
}

impl Event {
    pub fn name(&self) -> &'static str {
        match self {
            Event::PageView => "page_view",
            Event::FormView => "form_view",
            Event::FormStart => "form_start",
            Event::FormSubmit => "form_submit",
            Event::RegistrationComplete => "registration_complete",
            Event::CtaClick => "cta_click",
            Event::ScrollToForm => "scroll_to_form",
            Event::ScrollDepth => "scroll_depth",
            Event::CountdownExpired => "countdown_expired",
            Event::VideoPlay => "video_play",
            Event::VideoComplete => "video_complete",
        }
    }
}

impl Display for Event {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Base dataLayer payload: the event name plus the funnel it fired on.
pub fn payload(event: Event, funnel_slug: &str) -> Value {
    json!({
        "event": event.name(),
        "funnel_slug": funnel_slug,
    })
}

pub fn page_view(funnel_slug: &str) -> Value {
    payload(Event::PageView, funnel_slug)
}

pub fn registration_complete(funnel_slug: &str) -> Value {
    payload(Event::RegistrationComplete, funnel_slug)
}

pub fn cta_click(funnel_slug: &str, cta_label: &str, cta_location: Option<&str>) -> Value {
    let mut value = payload(Event::CtaClick, funnel_slug);
    value["cta_label"] = json!(cta_label);
    if let Some(location) = cta_location {
        value["cta_location"] = json!(location);
    }
    value
}

pub fn scroll_depth(funnel_slug: &str, depth_percent: u8) -> Value {
    let mut value = payload(Event::ScrollDepth, funnel_slug);
    value["scroll_depth_percent"] = json!(depth_percent);
    value
}

pub fn countdown_expired(funnel_slug: &str, webinar_datetime: Option<&str>) -> Value {
    let mut value = payload(Event::CountdownExpired, funnel_slug);
    if let Some(datetime) = webinar_datetime {
        value["webinar_datetime"] = json!(datetime);
    }
    value
}

/// The inline bootstrap placed in `<head>`; the container picks events off
/// `window.dataLayer` from there on.
pub fn head_script(container_id: &str) -> String {
    format!(
        "(function(w,d,s,l,i){{w[l]=w[l]||[];w[l].push({{'gtm.start':\n\
new Date().getTime(),event:'gtm.js'}});var f=d.getElementsByTagName(s)[0],\n\
j=d.createElement(s),dl=l!='dataLayer'?'&l='+l:'';j.async=true;j.src=\n\
'https://www.googletagmanager.com/gtm.js?id='+i+dl;f.parentNode.insertBefore(j,f);\n\
}})(window,document,'script','dataLayer','{}');",
        container_id
    )
}

/// Source of the `<noscript>` iframe fallback placed after `<body>`.
pub fn noscript_src(container_id: &str) -> String {
    format!(
        "https://www.googletagmanager.com/ns.html?id={}",
        container_id
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn it_should_name_events_in_snake_case() {
        assert_eq!(Event::PageView.name(), "page_view");
        assert_eq!(Event::RegistrationComplete.to_string(), "registration_complete");
        assert_eq!(Event::CountdownExpired.name(), "countdown_expired");
    }

    #[test]
    fn it_should_tag_every_payload_with_the_funnel_slug() {
        let value = page_view("income-stacking");

        assert_eq!(value["event"], "page_view");
        assert_eq!(value["funnel_slug"], "income-stacking");
    }

    #[test]
    fn it_should_attach_cta_extras_only_when_present() {
        let with_location = cta_click("f", "RESERVE", Some("hero"));
        assert_eq!(with_location["cta_label"], "RESERVE");
        assert_eq!(with_location["cta_location"], "hero");

        let without = cta_click("f", "RESERVE", None);
        assert!(without.get("cta_location").is_none());
    }

    #[test]
    fn it_should_record_scroll_depth_milestones() {
        let value = scroll_depth("f", 75);
        assert_eq!(value["scroll_depth_percent"], 75);
    }

    #[test]
    fn it_should_embed_the_container_id_in_both_snippets() {
        let script = head_script("GTM-ABC1234");
        assert!(script.contains("'GTM-ABC1234'"));
        assert!(script.contains("googletagmanager.com/gtm.js"));

        assert_eq!(
            noscript_src("GTM-ABC1234"),
            "https://www.googletagmanager.com/ns.html?id=GTM-ABC1234"
        );
    }
}
