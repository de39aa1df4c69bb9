use serde::Deserialize;
use serde_json::{json, Value};

/// Hidden-field names the CRM form carries for the webinar platform.
pub const WEBINAR_ID_FIELD: &str = "inf_custom_WebinarFuelWebinarID";
pub const SESSION_ID_FIELD: &str = "inf_custom_WebinarFuelSessionId";

/// Attribution query parameters forwarded into the CRM form untouched.
#[derive(Deserialize, Debug, Default, Clone, PartialEq)]
pub struct UtmParams {
    pub utm_source: Option<String>,
    pub utm_medium: Option<String>,
    pub utm_campaign: Option<String>,
    pub utm_term: Option<String>,
    pub utm_content: Option<String>,
    pub utm_id: Option<String>,
    pub gclid: Option<String>,
    pub fbclid: Option<String>,
}

impl UtmParams {
    /// Lenient: a malformed query string carries no attribution.
    pub fn from_query(query: &str) -> Self {
        serde_urlencoded::from_str(query).unwrap_or_default()
    }

    /// The campaign id falls back to the ad-click id when absent.
    pub fn campaign_id(&self) -> Option<String> {
        self.utm_id.clone().or_else(|| self.gclid.clone())
    }
}

/// Values for the form's hidden fields: which webinar and which session the
/// registrant targeted, plus whatever attribution arrived on the URL.
/// Fields with no source value are omitted so the form's own defaults
/// survive. The browser-side injector adds the visitor-only fields
/// (timezone, referrer) before writing the lot into the form.
pub fn hidden_fields(
    webinar_fuel_id: Option<&str>,
    session_id: &str,
    utm: &UtmParams,
) -> Vec<(String, String)> {
    let mut fields: Vec<(String, String)> = Vec::new();

    if let Some(id) = webinar_fuel_id {
        fields.push((WEBINAR_ID_FIELD.to_string(), id.to_string()));
    }
    fields.push((SESSION_ID_FIELD.to_string(), session_id.to_string()));

    let attribution = [
        ("inf_custom_GaSource", &utm.utm_source),
        ("inf_custom_GaMedium", &utm.utm_medium),
        ("inf_custom_GaCampaign", &utm.utm_campaign),
        ("inf_custom_GaTerm", &utm.utm_term),
        ("inf_custom_GaContent", &utm.utm_content),
        ("inf_custom_fbclid", &utm.fbclid),
    ];
    for (name, value) in attribution {
        if let Some(value) = value {
            if !value.is_empty() {
                fields.push((name.to_string(), value.clone()));
            }
        }
    }

    if let Some(id) = utm.campaign_id() {
        fields.push((String::from("inf_custom_GaCampaignID"), id));
    }

    fields
}

/// The same fields as a JSON object for the page's injector script.
pub fn hidden_fields_json(
    webinar_fuel_id: Option<&str>,
    session_id: &str,
    utm: &UtmParams,
) -> Value {
    let mut map = serde_json::Map::new();
    for (name, value) in hidden_fields(webinar_fuel_id, session_id, utm) {
        map.insert(name, json!(value));
    }
    Value::Object(map)
}
