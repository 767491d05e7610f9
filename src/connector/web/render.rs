use crate::connector::api::controller::discover_controller::MISSING_CREDENTIAL_WARNING;
use crate::domain::{Discovery, ExplanationModel, ExplanationOutcome, Session};

const STYLESHEET: &str = include_str!("assets/style.css");
/// Inline SVG ✨.
const FAVICON: &str = "data:image/svg+xml,%3Csvg xmlns='http://www.w3.org/2000/svg' viewBox='0 0 100 100'%3E%3Ctext y='.9em' font-size='90'%3E✨%3C/text%3E%3C/svg%3E";

/// Render the whole page for a session.
///
/// Pure function of the session: rendering twice without an intervening
/// action yields identical markup. Every piece of third-party text (quote,
/// author, explanation, error messages) goes through [`escape_html`].
pub fn render_page(session: &Session) -> String {
    let main = match session.discovery() {
        Some(discovery) => render_discovery(discovery),
        None => "<div class=\"info\">Click the button above to discover a timeless quote and \
                 receive an elegant explanation of its deeper meaning.</div>"
            .to_string(),
    };

    let error = session
        .error()
        .map(|message| format!("<div class=\"error\" role=\"alert\">{}</div>", escape_html(message)))
        .unwrap_or_default();

    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<meta name="viewport" content="width=device-width, initial-scale=1">
<title>Elegant Quote Insights</title>
<link rel="icon" href="{favicon}">
<style>
{stylesheet}
</style>
</head>
<body>
<form method="post" action="/discover" class="layout">
<aside class="settings">
<h3>Settings</h3>
<label for="model">AI Model</label>
<select id="model" name="model">
{options}
</select>
<h4>About</h4>
<p>This elegant app provides AI-powered insights into the profound meanings behind timeless quotes, helping you discover wisdom in the words of great thinkers.</p>
</aside>
<main class="block-container">
<h1 class="title">Elegant Quote Insights</h1>
<p class="subtitle">Discover the profound wisdom behind timeless quotes</p>
<div class="divider"><span></span></div>
<div class="actions"><button type="submit" class="discover-button">✨ Discover New Quote</button></div>
{error}
{main}
<div class="footer">Crafted with elegance | Quotes from <a href="https://github.com/lukePeavey/quotable" target="_blank" rel="noopener">Quotable API</a></div>
</main>
</form>
</body>
</html>
"#,
        favicon = FAVICON,
        stylesheet = STYLESHEET,
        options = render_model_options(session.model()),
        error = error,
        main = main,
    )
}

fn render_model_options(selected: ExplanationModel) -> String {
    ExplanationModel::ALL
        .iter()
        .map(|model| {
            format!(
                "<option value=\"{}\"{}>{}</option>",
                model.as_str(),
                if *model == selected { " selected" } else { "" },
                model.provider_id()
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

fn render_discovery(discovery: &Discovery) -> String {
    let quote = discovery.quote();
    let card = format!(
        "<div class=\"quote-container\">\n<div class=\"quote-text\">\"{}\"</div>\n<div class=\"quote-author\">— {}</div>\n</div>",
        escape_html(quote.content()),
        escape_html(quote.author())
    );

    let explanation = match discovery.explanation() {
        ExplanationOutcome::Generated(explanation) => format!(
            "<div class=\"explanation-container\">\n<h3>Illumination</h3>\n<p>{}</p>\n</div>",
            escape_html(explanation.text())
        ),
        ExplanationOutcome::MissingCredential => {
            format!("<div class=\"warning\">{}</div>", MISSING_CREDENTIAL_WARNING)
        }
        ExplanationOutcome::Failed(message) => format!(
            "<div class=\"error\">The illumination could not be crafted: {}</div>",
            escape_html(message)
        ),
    };

    format!("{}\n{}", card, explanation)
}

/// Escape text for use in HTML element content and quoted attribute values.
pub fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}
