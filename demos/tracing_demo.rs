//! Walks a sign-up form through a user session with tracing enabled
//!
//! Run with: cargo run --example tracing_demo --features tracing

use signup_form::{Field, FormEvent, SignUpForm, Validation};

fn main() {
    // Set up tracing subscriber
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .init();

    tracing::info!("Starting sign-up demo");

    let mut form = SignUpForm::new();
    let session = vec![
        FormEvent::change(Field::Name, "Pavlo Lukianchuk"),
        FormEvent::blur(Field::Name),
        FormEvent::change(Field::Email, "pavlo@"),
        FormEvent::blur(Field::Email),
        FormEvent::Submit,
        FormEvent::change(Field::Email, "pavlo@example.com"),
        FormEvent::change(Field::Age, 33_i64),
        FormEvent::change(Field::Gender, "male"),
        FormEvent::change(Field::Password, "secret"),
        FormEvent::change(Field::ConfirmPassword, "secret"),
        FormEvent::change(Field::Agree, true),
        FormEvent::Submit,
    ];

    for event in session {
        let is_submit = matches!(event, FormEvent::Submit);
        match form.handle(event, || tracing::info!("Registering user")) {
            Ok(Validation::Success(())) if is_submit => {
                tracing::info!("Form submitted and reset: dirty = {}", form.is_dirty());
            }
            Ok(Validation::Failure(errors)) => {
                for error in &errors {
                    tracing::warn!(field = %error.field, "{}", error);
                }
            }
            Ok(Validation::Success(())) => {}
            Err(e) => tracing::error!("Rejected event: {}", e),
        }
    }
}
