//! HTML renderer implementation.

use contact_form::{ContactForm, Element, Role, Surface};

/// Options for HTML generation.
#[derive(Debug, Clone)]
pub struct HtmlOptions {
    /// Title for the HTML document (the `<title>` tag, not the form header).
    pub title: Option<String>,
    /// Whether to include default CSS styling.
    pub include_styles: bool,
    /// Whether to generate a complete HTML document (with html/head/body tags).
    pub full_document: bool,
    /// Custom CSS class prefix for all generated elements.
    pub class_prefix: String,
}

impl Default for HtmlOptions {
    fn default() -> Self {
        Self::new()
    }
}

impl HtmlOptions {
    /// Create new options with default values.
    pub fn new() -> Self {
        Self {
            title: None,
            include_styles: true,
            full_document: true,
            class_prefix: "contact".to_string(),
        }
    }

    /// Set the document title.
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Enable or disable default CSS styling.
    pub fn with_styles(mut self, include: bool) -> Self {
        self.include_styles = include;
        self
    }

    /// Generate a complete HTML document or just the form fragment.
    pub fn full_document(mut self, full: bool) -> Self {
        self.full_document = full;
        self
    }

    /// Set a custom CSS class prefix.
    pub fn with_class_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.class_prefix = prefix.into();
        self
    }
}

/// Render the current state of a form as HTML.
pub fn to_html(form: &ContactForm, options: &HtmlOptions) -> String {
    generate_html(&form.surface(), options)
}

/// Render an already computed surface as HTML.
pub fn surface_to_html(surface: &Surface, options: &HtmlOptions) -> String {
    generate_html(surface, options)
}

fn generate_html(surface: &Surface, options: &HtmlOptions) -> String {
    let mut html = String::new();
    let prefix = &options.class_prefix;

    if options.full_document {
        html.push_str("<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n");
        html.push_str("  <meta charset=\"UTF-8\">\n");
        html.push_str(
            "  <meta name=\"viewport\" content=\"width=device-width, initial-scale=1.0\">\n",
        );

        if let Some(title) = &options.title {
            html.push_str(&format!("  <title>{}</title>\n", escape_html(title)));
        }

        if options.include_styles {
            html.push_str(&generate_styles(prefix));
        }

        html.push_str("</head>\n<body>\n");
    }

    html.push_str(&format!("<div class=\"{prefix}-app\">\n"));

    if let Some(header) = surface.header() {
        html.push_str(&format!(
            "  <h1 class=\"{prefix}-header\">{}</h1>\n",
            escape_html(header.text())
        ));
    }

    html.push_str(&format!("  <form class=\"{prefix}-form\">\n"));
    for input in surface.all_by_role(Role::TextBox) {
        html.push_str(&generate_input(surface, input, prefix));
    }
    if let Some(button) = surface.all_by_role(Role::Button).next() {
        html.push_str(&format!(
            "    <button type=\"submit\" class=\"{prefix}-submit\">{}</button>\n",
            escape_html(button.text())
        ));
    }
    html.push_str("  </form>\n");

    let outputs: Vec<&Element> = surface.all_by_role(Role::Output).collect();
    if !outputs.is_empty() {
        html.push_str(&format!("  <section class=\"{prefix}-display\">\n"));
        for output in outputs {
            let testid = output
                .field()
                .map(|field| format!(" data-testid=\"{}Display\"", field.key()))
                .unwrap_or_default();
            html.push_str(&format!(
                "    <p class=\"{prefix}-output\"{testid}>{}</p>\n",
                escape_html(output.text())
            ));
        }
        html.push_str("  </section>\n");
    }

    html.push_str("</div>\n");

    if options.full_document {
        html.push_str("</body>\n</html>\n");
    }

    html
}

/// A labeled input, followed by its error element when the field is invalid.
fn generate_input(surface: &Surface, input: &Element, prefix: &str) -> String {
    let Some(field) = input.field() else {
        return String::new();
    };
    let id = field.key();
    let label = escape_html(input.label().unwrap_or(field.label()));
    let value = escape_html(input.text());

    let mut html = String::new();
    html.push_str(&format!("    <div class=\"{prefix}-field\">\n"));
    html.push_str(&format!("      <label for=\"{id}\">{label}</label>\n"));
    if field.is_required() {
        html.push_str(&format!(
            "      <input type=\"text\" id=\"{id}\" name=\"{id}\" class=\"{prefix}-input\" value=\"{value}\" required>\n"
        ));
    } else {
        html.push_str(&format!(
            "      <textarea id=\"{id}\" name=\"{id}\" rows=\"4\" class=\"{prefix}-textarea\">{value}</textarea>\n"
        ));
    }
    if let Some(error) = surface.error(field) {
        html.push_str(&format!(
            "      <p class=\"{prefix}-error\" data-testid=\"error\">{}</p>\n",
            escape_html(error.text())
        ));
    }
    html.push_str("    </div>\n");
    html
}

fn escape_html(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

fn generate_styles(prefix: &str) -> String {
    format!(
        r#"  <style>
    .{prefix}-app {{
      max-width: 600px;
      margin: 2rem auto;
      padding: 1rem;
      font-family: sans-serif;
    }}
    .{prefix}-field {{
      margin: 0.5rem 0;
    }}
    .{prefix}-field label {{
      display: block;
      margin-bottom: 0.25rem;
    }}
    .{prefix}-input, .{prefix}-textarea {{
      width: 100%;
      padding: 0.5rem;
      box-sizing: border-box;
    }}
    .{prefix}-error {{
      margin: 0.25rem 0;
      color: #b00020;
    }}
    .{prefix}-submit {{
      margin-top: 1rem;
      padding: 0.5rem 1rem;
    }}
    .{prefix}-display {{
      margin-top: 1rem;
      padding: 0.5rem;
      background: #f5f5f5;
    }}
  </style>
"#
    )
}
