// HTML rendering for the form page
// Author: kelexine (https://github.com/kelexine)

use crate::pipeline::GenerationOutcome;

/// Everything the page can show besides the form itself.
#[derive(Debug, Default)]
pub struct PageView {
    pub app_name: String,
    pub status: Vec<String>,
    pub warnings: Vec<String>,
    pub success: Option<String>,
    pub error: Option<String>,
    pub instructions: Option<String>,
}

impl PageView {
    /// Translate a pipeline outcome into what the user sees.
    pub fn from_outcome(app_name: &str, outcome: &GenerationOutcome) -> Self {
        let mut view = PageView {
            app_name: app_name.to_string(),
            ..PageView::default()
        };

        if outcome.files_received > 0 {
            view.status
                .push(format!("{} file(s) uploaded.", outcome.files_received));
        }

        for skipped in &outcome.skipped {
            view.warnings
                .push(format!("Skipped {}: {}", skipped.file_name, skipped.reason));
        }
        view.warnings.extend(outcome.warnings.iter().cloned());

        match &outcome.instructions {
            Ok(text) => {
                view.success = Some("Testing instructions generated successfully.".to_string());
                view.instructions = Some(text.clone());
            }
            Err(e) => view.error = Some(e.user_message()),
        }

        view
    }

    /// View for a request that never reached the pipeline.
    pub fn error(app_name: &str, message: impl Into<String>) -> Self {
        PageView {
            app_name: app_name.to_string(),
            error: Some(message.into()),
            ..PageView::default()
        }
    }
}

/// Render the full page.
pub fn render(view: &PageView) -> String {
    let mut body = String::new();

    for line in &view.status {
        body.push_str(&format!("<p class=\"status\">{}</p>\n", escape(line)));
    }
    for warning in &view.warnings {
        body.push_str(&format!("<p class=\"warning\">{}</p>\n", escape(warning)));
    }
    if let Some(success) = &view.success {
        body.push_str(&format!("<p class=\"success\">{}</p>\n", escape(success)));
    }
    if let Some(error) = &view.error {
        body.push_str(&format!("<p class=\"error\">{}</p>\n", escape(error)));
    }
    if let Some(text) = &view.instructions {
        body.push_str(&format!(
            "<label for=\"instructions\">Generated Testing Instructions</label>\n\
             <textarea id=\"instructions\" readonly rows=\"15\">{}</textarea>\n",
            escape(text)
        ));
    }

    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<title>App Testing Instructions Generator</title>
<style>
body {{ font-family: sans-serif; max-width: 48rem; margin: 2rem auto; }}
input[type=text], textarea {{ width: 100%; }}
textarea {{ height: 300px; overflow-y: scroll; }}
.warning {{ color: #8a6d00; }}
.error {{ color: #b00020; }}
.success {{ color: #1b5e20; }}
</style>
</head>
<body>
<h1>App Testing Instructions Generator</h1>
<form method="post" action="/generate" enctype="multipart/form-data">
<label for="app_name">App or Website Name</label>
<input type="text" id="app_name" name="app_name" placeholder="Enter the name of the app or website" value="{app_name}">
<label for="screenshots">Upload Screenshots of Features</label>
<input type="file" id="screenshots" name="screenshots" accept=".png,.jpg,.jpeg,image/png,image/jpeg" multiple>
<button type="submit">Generate Testing Instructions</button>
</form>
{body}</body>
</html>
"#,
        app_name = escape(&view.app_name),
        body = body,
    )
}

/// Minimal HTML escaping for text and attribute values.
pub fn escape(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for c in input.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}
