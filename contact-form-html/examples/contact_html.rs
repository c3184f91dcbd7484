//! Render a filled-in and submitted contact form to an HTML file.
//!
//! Run with: cargo run -p contact-form-html --example contact_html

use anyhow::Context;
use contact_form::{ContactForm, ScriptedBackend};
use contact_form_html::{HtmlOptions, to_html};

fn main() -> anyhow::Result<()> {
    let mut form = ContactForm::new();
    form.run(
        ScriptedBackend::new()
            .type_into("First Name", "Thomas")
            .type_into("Last Name", "Anderson")
            .type_into("Email", "TAnderson@Cmail.com")
            .type_into("Message", "What is the Matrix?")
            .click_submit(),
    )?;

    let html = to_html(&form, &HtmlOptions::new().with_title("Contact Form"));
    std::fs::write("contact_form.html", &html).context("Failed to write HTML file")?;

    println!("Generated contact_form.html");
    Ok(())
}
