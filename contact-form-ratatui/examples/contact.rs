//! Contact form in the terminal.
//!
//! Fill in the form, submit with F10 (or Enter on the button), leave with Esc.
//! Run with `RUST_LOG=debug` and `2>form.log` to record the form's events.

use contact_form::{ContactForm, FormConfig, ValidationMode};
use contact_form_ratatui::{RatatuiFormBackend, Theme};
use ratatui::style::Color;
use tracing_subscriber::EnvFilter;

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let matrix_theme = Theme {
        primary: Color::Green,
        text: Color::White,
        highlight: Color::LightGreen,
        error: Color::LightRed,
        success: Color::LightGreen,
        border: Color::DarkGray,
    };

    let validation_mode = match std::env::args().nth(1).as_deref() {
        Some("--on-submit") => ValidationMode::OnSubmit,
        _ => ValidationMode::OnChange,
    };

    let config = FormConfig::new().with_validation_mode(validation_mode);
    let mut form = ContactForm::with_config(config);
    form.run(RatatuiFormBackend::new().with_theme(matrix_theme))?;

    if let Some(submitted) = form.submitted() {
        for (field, value) in submitted.display_lines() {
            println!("{}: {value}", field.label());
        }
    }
    Ok(())
}
