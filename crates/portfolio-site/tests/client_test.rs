use mockito::Matcher;
use portfolio_site::{BlogPreview, ContactForm, SiteClient, SiteError};
use portfolio_types::{ListPostsOptions, NewContactMessage, PostOrder};
use serde_json::json;

fn filled_form() -> ContactForm {
    ContactForm {
        name: "Jane Doe".to_string(),
        email: "jane@example.com".to_string(),
        subject: "Hello".to_string(),
        message: "Interested in working together.".to_string(),
        privacy: true,
    }
}

fn stored_message(id: i64, read: bool) -> serde_json::Value {
    json!({
        "id": id,
        "name": "Jane Doe",
        "email": "jane@example.com",
        "subject": "Hello",
        "message": "Interested in working together.",
        "read": read,
        "createdAt": "2024-01-15T10:30:00Z"
    })
}

#[tokio::test]
async fn test_successful_submit_clears_form() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("POST", "/api/contact")
        .match_body(Matcher::Json(json!({
            "name": "Jane Doe",
            "email": "jane@example.com",
            "subject": "Hello",
            "message": "Interested in working together."
        })))
        .with_status(201)
        .with_header("content-type", "application/json")
        .with_body(stored_message(1, false).to_string())
        .create_async()
        .await;

    let client = SiteClient::new(server.url()).unwrap();
    let mut form = filled_form();

    let message = client.submit_contact(&mut form).await.unwrap();
    assert_eq!(message.id, 1);
    assert!(!message.read);
    assert_eq!(form, ContactForm::default());

    mock.assert_async().await;
}

#[tokio::test]
async fn test_server_validation_keeps_form() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("POST", "/api/contact")
        .with_status(400)
        .with_header("content-type", "application/json")
        .with_body(
            json!({
                "error": "Validation failed",
                "fields": [{"field": "email", "message": "must be a valid email address"}]
            })
            .to_string(),
        )
        .create_async()
        .await;

    let client = SiteClient::new(server.url()).unwrap();
    let mut form = filled_form();

    match client.submit_contact(&mut form).await {
        Err(SiteError::Validation(failure)) => assert!(failure.mentions("email")),
        other => panic!("expected validation error, got {other:?}"),
    }
    assert_eq!(form, filled_form());

    mock.assert_async().await;
}

#[tokio::test]
async fn test_server_outage_is_retryable() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("POST", "/api/contact")
        .with_status(503)
        .with_header("content-type", "application/json")
        .with_body(json!({"error": "Service unavailable"}).to_string())
        .create_async()
        .await;

    let client = SiteClient::new(server.url()).unwrap();
    let mut form = filled_form();

    let err = client.submit_contact(&mut form).await.unwrap_err();
    assert!(err.is_retryable());
    assert_eq!(form, filled_form());

    mock.assert_async().await;
}

#[tokio::test]
async fn test_unreachable_server_is_retryable() {
    // Nothing listens on port 9 locally
    let client = SiteClient::new("http://127.0.0.1:9").unwrap();
    let mut form = filled_form();

    let err = client.submit_contact(&mut form).await.unwrap_err();
    assert!(matches!(err, SiteError::Transient(_)));
    assert_eq!(form, filled_form());
}

#[tokio::test]
async fn test_missing_consent_sends_nothing() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("POST", "/api/contact")
        .expect(0)
        .create_async()
        .await;

    let client = SiteClient::new(server.url()).unwrap();
    let mut form = filled_form();
    form.privacy = false;

    let err = client.submit_contact(&mut form).await.unwrap_err();
    assert!(matches!(err, SiteError::ConsentRequired));
    assert!(!err.is_retryable());
    assert_eq!(form.name, "Jane Doe");

    mock.assert_async().await;
}

#[tokio::test]
async fn test_local_validation_sends_nothing() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("POST", "/api/contact")
        .expect(0)
        .create_async()
        .await;

    let client = SiteClient::new(server.url()).unwrap();
    let mut form = filled_form();
    form.email = "not-an-email".to_string();

    match client.submit_contact(&mut form).await {
        Err(SiteError::Validation(failure)) => assert!(failure.mentions("email")),
        other => panic!("expected validation error, got {other:?}"),
    }

    mock.assert_async().await;
}

#[tokio::test]
async fn test_list_blog_posts() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("GET", "/api/blog-posts")
        .match_query(Matcher::AllOf(vec![
            Matcher::UrlEncoded("order".into(), "oldest".into()),
            Matcher::UrlEncoded("published".into(), "true".into()),
        ]))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(
            json!([{
                "id": 7,
                "title": "Shipping Rust services",
                "slug": "shipping-rust-services",
                "excerpt": "Notes from production",
                "content": "Body",
                "category": "Rust",
                "tags": ["Rust", "Ops"],
                "imageUrl": null,
                "published": true,
                "readTime": 4,
                "createdAt": "2024-02-01T08:00:00Z",
                "updatedAt": "2024-02-01T08:00:00Z"
            }])
            .to_string(),
        )
        .create_async()
        .await;

    let client = SiteClient::new(server.url()).unwrap();
    let options = ListPostsOptions::new().order(PostOrder::Oldest).published(true);
    let posts = client.list_blog_posts(&options).await.unwrap();

    assert_eq!(posts.len(), 1);
    assert_eq!(posts[0].slug, "shipping-rust-services");
    assert_eq!(posts[0].tags, vec!["Rust", "Ops"]);

    let preview = BlogPreview::from_listing(posts);
    assert!(!preview.is_fallback);

    mock.assert_async().await;
}

#[tokio::test]
async fn test_empty_blog_listing_shows_samples() {
    let mut server = mockito::Server::new_async().await;
    let _mock = server
        .mock("GET", "/api/blog-posts")
        .match_query(Matcher::Any)
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body("[]")
        .create_async()
        .await;

    let client = SiteClient::new(server.url()).unwrap();
    let posts = client.list_blog_posts(&ListPostsOptions::new()).await.unwrap();
    assert!(posts.is_empty());

    let preview = BlogPreview::from_listing(posts);
    assert!(preview.is_fallback);
    assert_eq!(preview.posts.len(), 3);
}

#[tokio::test]
async fn test_inbox_and_read_toggle() {
    let mut server = mockito::Server::new_async().await;
    let list = server
        .mock("GET", "/api/contact-messages")
        .match_query(Matcher::UrlEncoded("unread".into(), "true".into()))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(json!([stored_message(2, false)]).to_string())
        .create_async()
        .await;
    let toggle = server
        .mock("PATCH", "/api/contact-messages/2/read")
        .match_body(Matcher::Json(json!({"read": true})))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(stored_message(2, true).to_string())
        .create_async()
        .await;

    let client = SiteClient::new(server.url()).unwrap();

    let unread = client.list_contact_messages(true).await.unwrap();
    assert_eq!(unread.len(), 1);

    let updated = client.set_message_read(unread[0].id, true).await.unwrap();
    assert!(updated.read);

    list.assert_async().await;
    toggle.assert_async().await;
}

#[tokio::test]
async fn test_unknown_message_is_not_found() {
    let mut server = mockito::Server::new_async().await;
    let _mock = server
        .mock("PATCH", "/api/contact-messages/99/read")
        .with_status(404)
        .with_header("content-type", "application/json")
        .with_body(json!({"error": "Contact message not found: 99"}).to_string())
        .create_async()
        .await;

    let client = SiteClient::new(server.url()).unwrap();
    let err = client.set_message_read(99, true).await.unwrap_err();
    assert!(matches!(err, SiteError::NotFound(msg) if msg.contains("99")));
}

#[tokio::test]
async fn test_create_contact_message_without_form() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("POST", "/api/contact")
        .match_body(Matcher::Json(json!({
            "name": "Jane Doe",
            "email": "jane@example.com",
            "subject": "Hello",
            "message": "Interested in working together."
        })))
        .with_status(201)
        .with_header("content-type", "application/json")
        .with_body(stored_message(3, false).to_string())
        .expect(1)
        .create_async()
        .await;

    let client = SiteClient::new(server.url()).unwrap();

    let message = client
        .create_contact_message(NewContactMessage::new(
            "  Jane Doe ",
            "jane@example.com",
            "Hello",
            "Interested in working together.",
        ))
        .await
        .unwrap();
    assert_eq!(message.id, 3);

    // Rejected locally: the mock above must still see exactly one request
    let err = client
        .create_contact_message(NewContactMessage::new("Jane", "", "Hello", "Body"))
        .await
        .unwrap_err();
    match err {
        SiteError::Validation(failure) => assert!(failure.mentions("email")),
        other => panic!("expected validation error, got {other:?}"),
    }

    mock.assert_async().await;
}
