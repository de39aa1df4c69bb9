use handlebars::Handlebars;

pub fn render_template(
    template: &str,
    context: serde_json::Value,
) -> Result<String, Box<dyn std::error::Error>> {
    let reg = Handlebars::new();
    Ok(reg.render_template(template, &context)?)
}
