// Contact form submission end to end against canned responses.

use folio_core::{
    ContactForm, FormError, FormResponse, FormStatus, Indicators, NetworkError,
    FORM_CONTENT_TYPE, NETWORK_ERROR_MESSAGE,
};

fn fields() -> Vec<(&'static str, &'static str)> {
    vec![
        ("name", "Ada Lovelace"),
        ("email", "ada@example.com"),
        ("message", "Hello & welcome"),
    ]
}

fn response(status: u16, status_text: &str, body: Option<&str>) -> FormResponse {
    FormResponse {
        status,
        status_text: status_text.to_string(),
        body: body.map(String::from),
    }
}

#[test]
fn request_is_url_encoded_post() {
    let mut form = ContactForm::default();
    let req = form.begin(Some("forms/contact.php"), fields()).unwrap();
    assert_eq!(req.action, "forms/contact.php");
    assert_eq!(req.method, "POST");
    assert_eq!(req.content_type, FORM_CONTENT_TYPE);
    assert_eq!(
        req.body,
        "name=Ada+Lovelace&email=ada%40example.com&message=Hello+%26+welcome"
    );
}

#[test]
fn missing_action_posts_to_root() {
    let mut form = ContactForm::default();
    assert_eq!(form.begin(None, fields()).unwrap().action, "/");
    let mut form = ContactForm::default();
    assert_eq!(form.begin(Some("  "), fields()).unwrap().action, "/");
}

#[test]
fn only_loading_is_visible_while_waiting() {
    let mut form = ContactForm::default();
    assert_eq!(form.indicators(), Indicators::default());
    form.begin(Some("/send"), fields()).unwrap();
    assert_eq!(
        form.indicators(),
        Indicators {
            loading: true,
            error: false,
            sent: false
        }
    );
    assert!(!form.submit_enabled());
}

#[test]
fn second_submit_while_in_flight_is_rejected() {
    let mut form = ContactForm::default();
    form.begin(Some("/send"), fields()).unwrap();
    assert_eq!(form.begin(Some("/send"), fields()), Err(FormError::InFlight));
    form.finish(Ok(response(200, "OK", Some(""))));
    assert!(form.begin(Some("/send"), fields()).is_ok());
}

#[test]
fn success_shows_sent_and_resets_fields() {
    let mut form = ContactForm::default();
    form.begin(Some("/send"), fields()).unwrap();
    let outcome = form.finish(Ok(response(200, "OK", Some("OK"))));
    assert_eq!(outcome.status, FormStatus::Sent);
    assert!(outcome.reset_fields);
    assert_eq!(
        form.indicators(),
        Indicators {
            loading: false,
            error: false,
            sent: true
        }
    );
    assert!(form.submit_enabled());
}

#[test]
fn rejection_shows_body_verbatim() {
    let mut form = ContactForm::default();
    form.begin(Some("/send"), fields()).unwrap();
    let outcome = form.finish(Ok(response(422, "Unprocessable Entity", Some("Invalid email\n"))));
    assert_eq!(outcome.status, FormStatus::Failed("Invalid email".into()));
    assert!(!outcome.reset_fields);
    assert_eq!(form.error_message(), Some("Invalid email"));
    assert_eq!(
        form.indicators(),
        Indicators {
            loading: false,
            error: true,
            sent: false
        }
    );
}

#[test]
fn empty_rejection_body_falls_back_to_status_line() {
    let mut form = ContactForm::default();
    form.begin(Some("/send"), fields()).unwrap();
    form.finish(Ok(response(503, "Service Unavailable", Some("   "))));
    assert_eq!(
        form.error_message(),
        Some("Form submission failed: 503 Service Unavailable")
    );

    form.begin(Some("/send"), fields()).unwrap();
    form.finish(Ok(response(500, "Internal Server Error", None)));
    assert_eq!(
        form.error_message(),
        Some("Form submission failed: 500 Internal Server Error")
    );
}

#[test]
fn network_failure_shows_fixed_message() {
    let mut form = ContactForm::default();
    form.begin(Some("/send"), fields()).unwrap();
    let outcome = form.finish(Err(NetworkError("TypeError: Failed to fetch".into())));
    assert_eq!(outcome.status, FormStatus::Failed(NETWORK_ERROR_MESSAGE.into()));
    assert_eq!(form.error_message(), Some("Network error. Please try again."));
    assert!(!outcome.reset_fields);
}
