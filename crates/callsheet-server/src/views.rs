//! HTML rendering for the submission form and the list view.
//!
//! Pages are self-contained strings; every piece of user-provided text goes
//! through [`escape_html`] before it is interpolated.

use callsheet_domain::{ActorSummary, FieldErrors};

/// Banner shown on the list view after a successful submission
pub const SUCCESS_MESSAGE: &str = "Actor information submitted successfully!";

const STYLE: &str = "\
body{margin:0;font-family:-apple-system,BlinkMacSystemFont,'Segoe UI',Roboto,sans-serif;background:#f8f9fa;color:#212529}\
.container{max-width:860px;margin:40px auto;padding:0 16px}\
.card{background:#fff;border-radius:8px;box-shadow:0 2px 12px rgba(0,0,0,.08);padding:24px}\
label{display:block;font-weight:600;margin:16px 0 6px}\
input,textarea{width:100%;box-sizing:border-box;padding:8px;border:1px solid #ced4da;border-radius:4px;font:inherit}\
.is-invalid{border-color:#dc3545}\
.invalid-feedback{color:#dc3545;font-size:.875rem;margin-top:4px}\
.form-text{color:#6c757d;font-size:.875rem}\
.btn{display:inline-block;margin-top:16px;padding:8px 16px;border:none;border-radius:4px;background:#0d6efd;color:#fff;text-decoration:none;cursor:pointer}\
.alert{background:#d1e7dd;color:#0f5132;border-radius:4px;padding:12px;margin-bottom:16px}\
table{width:100%;border-collapse:collapse}\
th,td{text-align:left;padding:8px;border-bottom:1px solid #dee2e6}\
.empty{text-align:center;padding:32px}";

/// Values echoed back into the form after a failed submission
#[derive(Debug, Clone, Default)]
pub struct FormValues {
    /// Email as submitted
    pub email: String,
    /// Description as submitted
    pub description: String,
}

/// Escape text for safe inclusion in HTML content and attribute values
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

fn page(title: &str, body: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<meta name="viewport" content="width=device-width, initial-scale=1">
<title>{title}</title>
<style>{STYLE}</style>
</head>
<body>
<div class="container">
{body}
</div>
</body>
</html>
"#
    )
}

fn feedback<'a>(messages: impl Iterator<Item = &'a String>) -> String {
    messages
        .map(|message| format!(r#"<div class="invalid-feedback">{}</div>"#, escape_html(message)))
        .collect()
}

// Everything except email was derived from the description, so record
// constraint failures (address, age, ...) are shown under that textarea.
fn description_messages<'a>(errors: &'a FieldErrors) -> impl Iterator<Item = &'a String> + 'a {
    errors
        .iter()
        .filter(|(field, _)| *field != "email")
        .flat_map(|(_, messages)| messages)
}

fn invalid_class(invalid: bool) -> &'static str {
    if invalid {
        " is-invalid"
    } else {
        ""
    }
}

/// Render the submission form, optionally with errors and previous input
pub fn render_form(values: &FormValues, errors: &FieldErrors) -> String {
    let body = format!(
        r#"<div class="card">
<h2>Actor Information Submission</h2>
<form method="POST" action="/actors">
<label for="email">Email Address</label>
<input type="email" id="email" name="email" class="form-control{email_class}" value="{email}">
{email_feedback}
<label for="description">Actor Description</label>
<textarea id="description" name="description" rows="6" class="form-control{description_class}">{description}</textarea>
<div class="form-text">Please enter your first name and last name, and also provide your address.</div>
{description_feedback}
<button type="submit" class="btn">Submit</button>
</form>
<a href="/actors">View Submissions</a>
</div>"#,
        email_class = invalid_class(errors.has("email")),
        email = escape_html(&values.email),
        email_feedback = feedback(errors.get("email").iter()),
        description_class = invalid_class(description_messages(errors).next().is_some()),
        description = escape_html(&values.description),
        description_feedback = feedback(description_messages(errors)),
    );

    page("Actor Information Submission", &body)
}

fn display_or_na(value: Option<&str>) -> String {
    value.map_or_else(|| "N/A".to_string(), escape_html)
}

/// Render the list of stored actors, newest first as given
pub fn render_actor_list(actors: &[ActorSummary], submitted: bool) -> String {
    let mut body = String::from(
        r#"<div class="card">
<h2>Actor Submissions</h2>
<a href="/" class="btn">Submit New Actor</a>
"#,
    );

    if submitted {
        body.push_str(&format!(
            r#"<div class="alert" role="alert">{SUCCESS_MESSAGE}</div>
"#
        ));
    }

    if actors.is_empty() {
        body.push_str(
            r#"<div class="empty">
<h5>No Actor Submissions Yet</h5>
<p>Be the first to submit actor information!</p>
<a href="/" class="btn">Submit Actor Information</a>
</div>
"#,
        );
    } else {
        body.push_str(
            "<table>\n<thead><tr><th>First Name</th><th>Address</th><th>Gender</th><th>Height</th></tr></thead>\n<tbody>\n",
        );
        for actor in actors {
            body.push_str(&format!(
                "<tr><td>{}</td><td>{}</td><td>{}</td><td>{}</td></tr>\n",
                escape_html(&actor.first_name),
                escape_html(&actor.address),
                display_or_na(actor.gender.as_deref()),
                display_or_na(actor.height.as_deref()),
            ));
        }
        body.push_str("</tbody>\n</table>\n");
    }

    body.push_str("</div>");
    page("Actor Submissions", &body)
}
