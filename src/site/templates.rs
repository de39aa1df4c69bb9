use std::sync::Arc;

use chrono::Utc;
use hyper::StatusCode;
use serde_json::{json, Value};

use crate::domain::{find_all_funnels, find_funnel, theme};
use crate::helpers::date;
use crate::repository::funnel::Repository;
use crate::scheduler::SessionFinder;
use crate::tracking::{crm, gtm};

pub async fn funnel_page(
    repo: Arc<dyn Repository>,
    slug: String,
    utm: crm::UtmParams,
) -> Result<String, Error> {
    let funnel = find_funnel::execute(repo, find_funnel::Request { slug })
        .await?
        .funnel;

    let schedule = funnel.schedule();
    let finder = SessionFinder::new(schedule.clone());
    let session = finder.next_session();

    let countdown = match date::time_left(session.starts_at, Utc::now()) {
        Some(left) => json!({
            "days": left.days,
            "hours": left.hours,
            "minutes": left.minutes,
            "seconds": left.seconds,
        }),
        None => Value::Null,
    };

    let urgency = if funnel.urgency_enabled {
        json!({
            "headline": funnel.urgency_headline(),
            "subtext": &funnel.urgency_subtext,
        })
    } else {
        Value::Null
    };

    let template = read_file(FUNNEL_HBS)?;
    let result = super::render_template(
        &template,
        json!({
            "slug": &funnel.slug,
            "meta": {
                "title": &funnel.meta.title,
                "description": &funnel.meta.description,
                "og_title": funnel.meta.og_title(),
                "og_description": funnel.meta.og_description(),
                "og_image": &funnel.meta.og_image,
                "canonical_url": &funnel.meta.canonical_url,
                "favicon": &funnel.meta.favicon,
                "twitter_card": funnel.meta.twitter_card(),
            },
            "gtm": {
                "head_script": gtm::head_script(&funnel.gtm_container_id),
                "noscript_src": gtm::noscript_src(&funnel.gtm_container_id),
                // Serialized here; handlebars renders raw JSON objects as "[object]".
                "page_view": gtm::page_view(&funnel.slug).to_string(),
            },
            "theme_style": theme::css_variables_inline(&funnel.theme),
            "session": {
                "starts_at": session.starts_at.to_rfc3339(),
                "starts_at_local": session.starts_at.with_timezone(&schedule.tz()).to_rfc3339(),
                "session_id": &session.session_id,
                "display_date": &session.display_date,
                "display_time": &session.display_time,
            },
            "countdown": countdown,
            "hero": {
                "badge": funnel.hero_badge_text(),
                "headline": &funnel.hero_headline,
                "subheadline": &funnel.hero_subheadline,
                "bullets": &funnel.hero_bullets,
                "cta_text": funnel.hero_cta_text(),
                "background_image": &funnel.hero_background_image,
            },
            "webinar": {
                "title": &funnel.webinar.title,
                "duration_minutes": funnel.webinar.duration_minutes,
                "platform": &funnel.webinar.platform,
            },
            "form": {
                "title": funnel.form_title(),
                "subtext": funnel.form_subtext(),
                "privacy_note": funnel.form_privacy_note(),
                "embed": &funnel.form_embed_code,
                "hidden_fields": crm::hidden_fields_json(
                    funnel.webinar_fuel_id.as_deref(),
                    &session.session_id,
                    &utm,
                )
                .to_string(),
            },
            "speaker": &funnel.speaker,
            "learn": {
                "title": funnel.learn_section_title(),
                "points": &funnel.learning_points,
            },
            "testimonials": {
                "title": funnel.testimonials_section_title(),
                "items": &funnel.testimonials,
            },
            "urgency": urgency,
            "trust_badges": &funnel.trust_badges,
            "footer": {
                "disclaimer": &funnel.footer_disclaimer,
                "copyright": &funnel.footer_copyright,
                "links": &funnel.footer_links,
            },
        }),
    )
    .map_err(|err| {
        log::error!("could not render template {}: {}", FUNNEL_HBS, err);
        Error::RenderTemplate
    })?;

    Ok(result)
}

pub async fn index_page(repo: Arc<dyn Repository>) -> Result<String, Error> {
    let funnels = find_all_funnels::execute(repo).await?.data;

    let template = read_file(INDEX_HBS)?;
    let result = super::render_template(
        &template,
        json!({
            "funnels": funnels
                .into_iter()
                .map(|funnel| json!({
                    "slug": funnel.slug,
                    "title": funnel.title,
                    "webinar_title": funnel.webinar_title,
                }))
                .collect::<Vec<Value>>(),
        }),
    )
    .map_err(|err| {
        log::error!("could not render template {}: {}", INDEX_HBS, err);
        Error::RenderTemplate
    })?;

    Ok(result)
}

pub async fn confirmation_page(repo: Arc<dyn Repository>, slug: String) -> Result<String, Error> {
    let funnel = find_funnel::execute(repo, find_funnel::Request { slug })
        .await?
        .funnel;

    let finder = SessionFinder::new(funnel.schedule());
    let session = finder.next_session();

    let template = read_file(CONFIRMATION_HBS)?;
    let result = super::render_template(
        &template,
        json!({
            "slug": &funnel.slug,
            "meta": {
                "title": format!("You're Registered | {}", funnel.webinar.title),
                "favicon": &funnel.meta.favicon,
            },
            "gtm": {
                "head_script": gtm::head_script(&funnel.gtm_container_id),
                "noscript_src": gtm::noscript_src(&funnel.gtm_container_id),
                "registration_complete": gtm::registration_complete(&funnel.slug).to_string(),
            },
            "theme_style": theme::css_variables_inline(&funnel.theme),
            "webinar": {
                "title": &funnel.webinar.title,
                "duration_minutes": funnel.webinar.duration_minutes,
                "platform": &funnel.webinar.platform,
            },
            "session": {
                "display_date": &session.display_date,
                "display_time": &session.display_time,
            },
            "speaker_name": &funnel.speaker.name,
        }),
    )
    .map_err(|err| {
        log::error!("could not render template {}: {}", CONFIRMATION_HBS, err);
        Error::RenderTemplate
    })?;

    Ok(result)
}

pub enum Error {
    Query,
    QueryNotFound,
    ReadFile,
    RenderTemplate,
}

impl From<Error> for StatusCode {
    fn from(value: Error) -> Self {
        match value {
            Error::QueryNotFound => Self::NOT_FOUND,
            Error::ReadFile | Error::Query | Error::RenderTemplate => Self::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<find_funnel::Error> for Error {
    fn from(value: find_funnel::Error) -> Self {
        match value {
            find_funnel::Error::NotFound => Self::QueryNotFound,
            find_funnel::Error::Unknown => Self::Query,
        }
    }
}

impl From<find_all_funnels::Error> for Error {
    fn from(value: find_all_funnels::Error) -> Self {
        match value {
            find_all_funnels::Error::Unknown => Self::Query,
        }
    }
}

const HBS_BASE_PATHS: &str = "src/assets";
const FUNNEL_HBS: &str = "funnel.html.hbs";
const INDEX_HBS: &str = "index.html.hbs";
const CONFIRMATION_HBS: &str = "confirmation.html.hbs";

fn hbs_path(filename: &str) -> String {
    format!("{}/{}", HBS_BASE_PATHS, filename)
}

fn read_file(filename: &str) -> Result<String, Error> {
    std::fs::read_to_string(hbs_path(filename)).map_err(|err| {
        log::error!("could not read file {}: {}", filename, err);
        Error::ReadFile
    })
}
