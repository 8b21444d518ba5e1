// Host-side tests for the contact form state machine.

use portfolio_core::{email_looks_valid, ContactForm, Field, SubmitOutcome, SubmitStatus};

fn filled_form() -> ContactForm {
    let mut form = ContactForm::default();
    form.input(Field::Name, "Ada Lovelace");
    form.input(Field::Email, "ada@example.com");
    form.input(Field::Subject, "Project inquiry");
    form.input(Field::Message, "Let's build something together.");
    form
}

#[test]
fn blank_form_reports_every_field() {
    let form = ContactForm::default();
    let errors = form.validate();
    assert_eq!(errors.len(), 4);
    let messages: Vec<&str> = errors.iter().map(|e| e.message).collect();
    assert_eq!(
        messages,
        [
            "Name is required",
            "Email is required",
            "Subject is required",
            "Message is required"
        ]
    );
}

#[test]
fn whitespace_only_counts_as_missing() {
    let mut form = filled_form();
    form.input(Field::Name, "   ");
    let errors = form.validate();
    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0].field, Field::Name);
}

#[test]
fn email_shape_accepts_and_rejects() {
    // The shape test mirrors ^\S+@\S+\.\S+$: at least one character before
    // an @, and an interior dot with a non-empty tail after it.
    for ok in [
        "a@b.c",
        "ada@example.com",
        "first.last@sub.domain.org",
        "a@b@c.d",   // extra @ inside the local run is tolerated
        "a@b.c@d.e", // ...and so is one after a valid core
    ] {
        assert!(email_looks_valid(ok), "{ok} should pass");
    }
    for bad in [
        "",
        "plain",
        "a@b",       // no dot after the @
        "@b.c",      // nothing before the @
        "a@.c",      // nothing between @ and dot
        "a@b.",      // nothing after the dot
        "a b@c.d",   // whitespace anywhere fails
        "a@b .c",    // same
        "no-at.com", // no @ at all
    ] {
        assert!(!email_looks_valid(bad), "{bad} should fail");
    }
}

#[test]
fn invalid_email_gets_its_own_message() {
    let mut form = filled_form();
    form.input(Field::Email, "not-an-address");
    let errors = form.validate();
    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0].message, "Email is invalid");
}

#[test]
fn typing_retires_a_standing_error() {
    let mut form = ContactForm::default();
    assert_eq!(form.submit(), SubmitOutcome::Rejected);
    assert_eq!(form.error_count(), 4);
    assert!(form.error(Field::Name).is_some());

    form.input(Field::Name, "Ada");
    assert!(form.error(Field::Name).is_none(), "typing clears the error");
    assert_eq!(form.error_count(), 3, "other errors keep standing");
}

#[test]
fn rejected_submit_keeps_values_and_shows_error() {
    let mut form = ContactForm::default();
    form.input(Field::Name, "Ada");
    form.input(Field::Email, "bad-address");

    assert_eq!(form.submit(), SubmitOutcome::Rejected);
    assert_eq!(form.status(), SubmitStatus::Error);
    assert_eq!(form.value(Field::Name), "Ada");
    assert_eq!(form.value(Field::Email), "bad-address");
    assert_eq!(form.error(Field::Email), Some("Email is invalid"));
    assert_eq!(form.error(Field::Subject), Some("Subject is required"));
}

#[test]
fn accepted_submit_completes_into_a_cleared_form() {
    let mut form = filled_form();
    assert_eq!(form.submit(), SubmitOutcome::Accepted);
    // Acceptance alone changes nothing visible; the host owes a completion.
    assert_eq!(form.status(), SubmitStatus::Idle);
    assert_eq!(form.value(Field::Message), "Let's build something together.");

    form.complete_submission();
    assert_eq!(form.status(), SubmitStatus::Success);
    for field in Field::ALL {
        assert_eq!(form.value(field), "", "{:?} should be cleared", field);
        assert!(form.error(field).is_none());
    }

    form.clear_status();
    assert_eq!(form.status(), SubmitStatus::Idle);
}

#[test]
fn error_status_survives_until_cleared() {
    let mut form = ContactForm::default();
    form.submit();
    assert_eq!(form.status(), SubmitStatus::Error);
    form.clear_status();
    assert_eq!(form.status(), SubmitStatus::Idle);
    // Standing field errors outlive the toast.
    assert_eq!(form.error_count(), 4);
}

#[test]
fn field_ids_round_trip() {
    for field in Field::ALL {
        assert_eq!(Field::from_id(field.id()), Some(field));
    }
    assert_eq!(Field::from_id("unknown"), None);
}
