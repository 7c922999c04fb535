// Host-side tests for contact form validation and the mail relay payload.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod core {
    pub mod constants {
        include!("../src/core/constants.rs");
    }
    pub mod contact {
        include!("../src/core/contact.rs");
    }
    pub mod mail {
        include!("../src/core/mail.rs");
    }
}

use crate::core::constants::SENT_INDICATOR_MS;
use crate::core::contact::*;
use crate::core::mail::*;

fn filled(name: &str, email: &str, message: &str) -> ContactForm {
    let mut form = ContactForm::new();
    form.on_input(Field::Name, name);
    form.on_input(Field::Email, email);
    form.on_input(Field::Message, message);
    form
}

#[test]
fn empty_name_blocks_with_one_error() {
    let mut form = filled("", "a@b.com", "hi");
    match form.submit() {
        SubmitAttempt::Blocked(errors) => {
            assert_eq!(errors, vec![(Field::Name, FieldError::NameRequired)]);
        }
        other => panic!("expected blocked submit, got {other:?}"),
    }
    assert!(!form.is_sending());
}

#[test]
fn malformed_email_blocks_with_one_error() {
    let mut form = filled("Jane", "not-an-email", "hi");
    match form.submit() {
        SubmitAttempt::Blocked(errors) => {
            assert_eq!(errors, vec![(Field::Email, FieldError::EmailFormat)]);
        }
        other => panic!("expected blocked submit, got {other:?}"),
    }
    assert_eq!(form.status(), SubmitStatus::Idle);
}

#[test]
fn whitespace_only_fields_are_empty() {
    assert_eq!(validate(Field::Name, "   "), Err(FieldError::NameRequired));
    assert_eq!(validate(Field::Message, "\n\t"), Err(FieldError::MessageRequired));
    assert_eq!(validate(Field::Email, " "), Err(FieldError::EmailRequired));
}

#[test]
fn email_pattern() {
    for ok in ["a@b.com", "jane.doe@mail.example.org", "  x@y.io  "] {
        assert!(is_valid_email(ok), "{ok} should be valid");
    }
    for bad in ["not-an-email", "@b.com", "a@", "a@b", "a@.com", "a@b.", "a b@c.com", "a@b@c.com"] {
        assert!(!is_valid_email(bad), "{bad} should be invalid");
    }
}

#[test]
fn fields_move_through_touched_states() {
    let mut form = ContactForm::new();
    assert_eq!(form.field(Field::Email), FieldState::Untouched);

    // typing into an untouched field does not flag it
    assert_eq!(form.on_input(Field::Email, "ja"), FieldState::Untouched);

    assert_eq!(
        form.on_blur(Field::Email, "ja"),
        FieldState::Invalid(FieldError::EmailFormat)
    );
    assert_eq!(form.on_input(Field::Email, "jane@x.io"), FieldState::Valid);
    assert_eq!(
        form.on_change(Field::Email, ""),
        FieldState::Invalid(FieldError::EmailRequired)
    );
}

#[test]
fn submit_touches_every_field() {
    let mut form = ContactForm::new();
    let attempt = form.submit();
    assert!(matches!(attempt, SubmitAttempt::Blocked(ref e) if e.len() == 3));
    for f in Field::ALL {
        assert!(form.field(f).is_touched());
    }
}

#[test]
fn success_clears_form_and_sent_indicator_expires() {
    let mut form = filled("Jane", "jane@x.io", "hello");
    let values = match form.submit() {
        SubmitAttempt::Ready(v) => v,
        other => panic!("expected ready, got {other:?}"),
    };
    assert_eq!(values.name, "Jane");
    assert!(form.is_sending());

    let (notice, token) = form.complete_success();
    assert_eq!(notice, Notice::Success);
    assert_eq!(form.values, ContactValues::default());
    assert!(form.is_sent());
    for f in Field::ALL {
        assert_eq!(form.field(f), FieldState::Untouched);
    }

    assert_eq!(SENT_INDICATOR_MS, 5000);
    assert!(form.expire_sent(token));
    assert_eq!(form.status(), SubmitStatus::Idle);
    assert!(!form.expire_sent(token));
}

#[test]
fn stale_timer_does_not_clear_newer_confirmation() {
    let mut form = filled("Jane", "jane@x.io", "one");
    form.submit();
    let (_, first) = form.complete_success();

    form.on_input(Field::Name, "Jane");
    form.on_input(Field::Email, "jane@x.io");
    form.on_input(Field::Message, "two");
    assert!(matches!(form.submit(), SubmitAttempt::Ready(_)));
    let (_, second) = form.complete_success();

    assert!(!form.expire_sent(first));
    assert!(form.is_sent());
    assert!(form.expire_sent(second));
}

#[test]
fn failure_keeps_values_and_reports() {
    let mut form = filled("Jane", "jane@x.io", "hello");
    assert!(matches!(form.submit(), SubmitAttempt::Ready(_)));
    let notice = form.complete_failure();
    assert_eq!(notice, Notice::Failure);
    assert_eq!(notice.text(), "Transmission failed. Please try again.");
    assert_eq!(form.values.name, "Jane");
    assert_eq!(form.values.email, "jane@x.io");
    assert_eq!(form.values.message, "hello");
    assert_eq!(form.status(), SubmitStatus::Idle);
    // retry goes straight through
    assert!(matches!(form.submit(), SubmitAttempt::Ready(_)));
}

#[test]
fn second_submit_while_sending_is_refused() {
    let mut form = filled("Jane", "jane@x.io", "hello");
    assert!(matches!(form.submit(), SubmitAttempt::Ready(_)));
    assert_eq!(form.submit(), SubmitAttempt::InFlight);
}

#[test]
fn relay_config_requires_all_ids() {
    assert!(matches!(
        MailRelayConfig::from_parts(Some("svc"), None, Some("key")),
        Err(RelayError::Unconfigured)
    ));
    assert!(matches!(
        MailRelayConfig::from_parts(Some("svc"), Some("  "), Some("key")),
        Err(RelayError::Unconfigured)
    ));
    let cfg = MailRelayConfig::from_parts(Some("svc"), Some("tpl"), Some("key")).unwrap();
    assert_eq!(cfg.template_id, "tpl");
}

#[test]
fn relay_payload_carries_three_fields() {
    let cfg = MailRelayConfig::from_parts(Some("svc"), Some("tpl"), Some("pk")).unwrap();
    let values = ContactValues {
        name: " Jane ".into(),
        email: "jane@x.io".into(),
        message: "Ahoy \"deep\"".into(),
    };
    let json = RelayRequest::new(&cfg, &values).to_json().unwrap();
    let parsed: serde_json::Value = serde_json::from_str(&json).unwrap();
    assert_eq!(parsed["service_id"], "svc");
    assert_eq!(parsed["template_id"], "tpl");
    assert_eq!(parsed["user_id"], "pk");
    assert_eq!(parsed["template_params"]["user_name"], "Jane");
    assert_eq!(parsed["template_params"]["user_email"], "jane@x.io");
    assert_eq!(parsed["template_params"]["message"], "Ahoy \"deep\"");
}
