use wiremock::matchers::{any, method, path};
use wiremock::{Mock, Request, ResponseTemplate};

use crate::helpers::spawn_app;

fn valid_body() -> String {
    "fullName=Jane%20Doe&email=jane%40x.com&subject=General%20Inquiry&message=Hi&role_title="
        .to_string()
}

struct VisibleFieldsOnlyMatcher;
impl wiremock::Match for VisibleFieldsOnlyMatcher {
    fn matches(&self, request: &Request) -> bool {
        let body = String::from_utf8_lossy(&request.body);
        body.contains("fullName=Jane+Doe")
            && body.contains("email=jane%40x.com")
            && body.contains("subject=General+Inquiry")
            && body.contains("message=Hi")
            && !body.contains("role_title")
    }
}

#[tokio::test]
async fn a_valid_submission_is_forwarded_without_the_honeypot_field() {
    let test_app = spawn_app().await;

    Mock::given(method("POST"))
        .and(path("/f/xaqdyply"))
        .and(VisibleFieldsOnlyMatcher)
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&test_app.form_server)
        .await;

    let response = test_app.post_contact(valid_body()).await;

    assert_eq!(200, response.status().as_u16());
    let html = response.text().await.unwrap();
    assert!(html.contains("Thanks for reaching out!"));
    // The success page closes itself after the three-second grace period.
    assert!(html.contains(r#"content="3;url=/""#));
}

#[tokio::test]
async fn a_filled_honeypot_is_silently_dropped_and_the_form_closed() {
    let test_app = spawn_app().await;

    Mock::given(any())
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&test_app.form_server)
        .await;

    let body = valid_body().replace("role_title=", "role_title=manager");
    let response = test_app.post_contact(body).await;

    // A redirect home, indistinguishable from a dismissal. No error body.
    assert_eq!(303, response.status().as_u16());
    assert_eq!(response.headers().get("Location").unwrap(), "/");
}

#[tokio::test]
async fn incomplete_submissions_are_rejected_with_a_400() {
    let test_app = spawn_app().await;

    Mock::given(any())
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&test_app.form_server)
        .await;

    let test_cases = vec![
        ("email=jane%40x.com&subject=General%20Inquiry&message=Hi", "missing the name"),
        ("fullName=Jane&subject=General%20Inquiry&message=Hi", "missing the email"),
        ("fullName=Jane&email=jane%40x.com&message=Hi", "missing the subject"),
        ("fullName=Jane&email=jane%40x.com&subject=General%20Inquiry", "missing the message"),
        ("", "missing every field"),
    ];

    for (invalid_body, error_msg) in test_cases {
        let response = test_app.post_contact(invalid_body.to_string()).await;

        assert_eq!(
            400,
            response.status().as_u16(),
            "The API did not fail with 400 Bad Request when the payload was {}",
            error_msg
        );
    }
}

#[tokio::test]
async fn a_subject_outside_the_offered_set_is_rejected() {
    let test_app = spawn_app().await;

    Mock::given(any())
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&test_app.form_server)
        .await;

    let body = valid_body().replace("subject=General%20Inquiry", "subject=Pricing");
    let response = test_app.post_contact(body).await;

    assert_eq!(400, response.status().as_u16());
}

#[tokio::test]
async fn backend_field_errors_reopen_the_form_with_messages_in_place() {
    let test_app = spawn_app().await;

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(422).set_body_json(serde_json::json!({
            "errors": [
                { "field": "email", "message": "Email is invalid" }
            ]
        })))
        .mount(&test_app.form_server)
        .await;

    let body = valid_body().replace("jane%40x.com", "not-an-email");
    let response = test_app.post_contact(body).await;

    assert_eq!(200, response.status().as_u16());
    let html = response.text().await.unwrap();
    assert!(html.contains("Email is invalid"));
    // The user's draft survives the round trip.
    assert!(html.contains(r#"value="not-an-email""#));
    assert!(html.contains("Hi"));
}

#[tokio::test]
async fn a_backend_outage_shows_a_form_wide_message() {
    let test_app = spawn_app().await;

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&test_app.form_server)
        .await;

    let response = test_app.post_contact(valid_body()).await;

    assert_eq!(200, response.status().as_u16());
    let html = response.text().await.unwrap();
    assert!(html.contains("temporarily unavailable"));
}
