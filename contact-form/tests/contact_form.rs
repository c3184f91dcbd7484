//! Integration tests for contact-form, driven through the scripted backend
//! and checked on the rendered surface.

use contact_form::{
    ContactForm, Field, FormConfig, FormError, ParseFieldError, Role, ScriptedBackend,
    ValidationMode,
};
use pretty_assertions::assert_eq;

fn run(backend: ScriptedBackend) -> ContactForm {
    let mut form = ContactForm::new();
    form.run(backend).unwrap();
    form
}

fn the_one() -> ScriptedBackend {
    ScriptedBackend::new()
        .type_into("First Name", "Thomas")
        .type_into("Last Name", "Anderson")
        .type_into("Email", "TAnderson@Cmail.com")
}

#[test]
fn test_renders_without_errors() {
    let form = ContactForm::new();
    assert_eq!(form.surface().error_count(), 0);
}

#[test]
fn test_renders_the_contact_form_header() {
    let form = ContactForm::new();
    let surface = form.surface();

    let header = surface.query_by_text("contact form");
    assert!(header.is_some());
    assert_eq!(header.map(|h| h.role()), Some(Role::Heading));
}

#[test]
fn test_header_survives_submission() {
    let form = run(the_one().click_submit());
    assert!(form.surface().header().is_some());
}

#[test]
fn test_one_error_for_short_first_name() {
    for short in ["", "b", "bad", "Thom"] {
        let mut script = ScriptedBackend::new()
            .type_into("Last Name", "Anderson")
            .type_into("Email", "TAnderson@Cmail.com");
        if !short.is_empty() {
            script = script.type_into("First Name", short);
        }
        let form = run(script.click_submit());
        let surface = form.surface();

        assert_eq!(surface.error_count(), 1, "first name {short:?}");
        assert!(surface.error(Field::FirstName).is_some());
    }
}

#[test]
fn test_one_error_while_typing_short_first_name() {
    let form = run(ScriptedBackend::new().type_into("First Name", "bad"));
    let surface = form.surface();

    assert_eq!(surface.error_count(), 1);
    assert_eq!(
        surface.error(Field::FirstName).map(|e| e.text()),
        Some("Error: firstName must be at least 5 characters")
    );
}

#[test]
fn test_three_errors_for_empty_form() {
    let form = run(ScriptedBackend::new().click_submit());
    let surface = form.surface();

    assert_eq!(surface.error_count(), 3);
    assert!(surface.error(Field::FirstName).is_some());
    assert!(surface.error(Field::LastName).is_some());
    assert!(surface.error(Field::Email).is_some());
    assert!(surface.error(Field::Message).is_none());
    assert!(!form.is_submitted());
}

#[test]
fn test_one_error_for_missing_email() {
    let form = run(
        ScriptedBackend::new()
            .type_into("First Name", "Thomas")
            .type_into("Last Name", "Anderson")
            .click_submit(),
    );
    let surface = form.surface();

    assert_eq!(surface.error_count(), 1);
    assert_eq!(
        surface.error(Field::Email).map(|e| e.text()),
        Some("Error: email is a required field")
    );
    assert!(surface.get_by_text("Error:").is_ok());
}

#[test]
fn test_invalid_email_message() {
    let form = run(ScriptedBackend::new().type_into("Email", "notreal"));
    let surface = form.surface();

    assert!(
        surface
            .query_by_text("email must be a valid email address")
            .is_some()
    );
}

#[test]
fn test_last_name_required_on_submit() {
    let form = run(
        ScriptedBackend::new()
            .type_into("First Name", "Thomas")
            .type_into("Email", "TAnderson@Cmail.com")
            .click_submit(),
    );

    let error = form
        .surface()
        .get_by_text("lastName is a required field")
        .map(|e| e.role())
        .unwrap();
    assert_eq!(error, Role::Alert);
}

#[test]
fn test_submitted_values_without_message() {
    let form = run(the_one().click_submit());
    let surface = form.surface();

    assert!(surface.get_by_text("First Name: Thomas").is_ok());
    assert!(surface.get_by_text("Last Name: Anderson").is_ok());
    assert!(surface.get_by_text("Email: TAnderson@Cmail.com").is_ok());
    assert!(surface.query_by_text("Message:").is_none());
    assert!(surface.output(Field::Message).is_none());
    assert_eq!(surface.all_by_role(Role::Output).count(), 3);
}

#[test]
fn test_submitted_values_with_message() {
    let form = run(
        the_one()
            .type_into("Message", "What is the Matrix?")
            .click_submit(),
    );
    let surface = form.surface();

    assert!(surface.get_by_text("First Name: Thomas").is_ok());
    assert!(surface.get_by_text("Last Name: Anderson").is_ok());
    assert!(surface.get_by_text("Email: TAnderson@Cmail.com").is_ok());
    assert_eq!(
        surface.output(Field::Message).map(|e| e.text()),
        Some("Message: What is the Matrix?")
    );
}

#[test]
fn test_resubmitting_same_values() {
    let form = run(the_one().click_submit().click_submit());

    assert_eq!(form.surface().error_count(), 0);
    assert_eq!(form.submitted().map(|s| s.email()), Some("TAnderson@Cmail.com"));
    assert_eq!(form.surface().all_by_role(Role::Output).count(), 3);
}

#[test]
fn test_display_survives_later_edits() {
    let form = run(
        the_one()
            .click_submit()
            .clear("First Name")
            .type_into("First Name", "Neo"),
    );
    let surface = form.surface();

    assert!(surface.get_by_text("First Name: Thomas").is_ok());
    assert_eq!(surface.get_by_label_text("First Name").unwrap().text(), "Neo");
    assert_eq!(surface.error_count(), 1);
}

#[test]
fn test_failed_resubmit_keeps_display() {
    let form = run(the_one().click_submit().clear("Last Name").click_submit());
    let surface = form.surface();

    assert!(surface.get_by_text("Last Name: Anderson").is_ok());
    assert!(surface.get_by_text("lastName is a required field").is_ok());
}

#[test]
fn test_on_submit_mode_is_quiet_while_typing() {
    let config = FormConfig::new().with_validation_mode(ValidationMode::OnSubmit);
    let mut form = ContactForm::with_config(config);
    form.run(ScriptedBackend::new().type_into("Email", "notreal"))
        .unwrap();
    assert_eq!(form.surface().error_count(), 0);

    form.run(ScriptedBackend::new().click_submit()).unwrap();
    let surface = form.surface();
    assert_eq!(surface.error_count(), 3);
    assert!(
        surface
            .query_by_text("email must be a valid email address")
            .is_some()
    );
}

#[test]
fn test_unknown_label_is_unknown_field() {
    let mut form = ContactForm::new();
    let err = form
        .run(ScriptedBackend::new().type_into("Phone", "555"))
        .unwrap_err();

    assert!(matches!(&err, FormError::UnknownField(ParseFieldError(name)) if name == "Phone"));
    assert_eq!(err.to_string(), "Unknown field: Phone");
}
