//! `HttpTransport` against a local wiremock server.

use client_core::commands::{Command, CreateCategory, CreatePost, FetchPost, ListPosts};
use client_core::config::ApiConfig;
use client_core::error::transport::TransportFailure;
use client_core::store::Payload;
use client_core::transport::{HttpTransport, Request, Transport};
use client_core::{Outcome, SessionContext, Store};

use common::HttpStatusCode;
use models::{Category, ImageUpload, PostDraftBuilder, Session};

use serde_json::{Value, json};
use wiremock::matchers::{body_json, header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// **VALUE**: Verifies the bearer token becomes an `Authorization` header.
///
/// **WHY THIS MATTERS**: Every admin command depends on this header reaching the backend.
///
/// **BUG THIS CATCHES**: Would catch the token being sent without the `Bearer ` prefix or
/// not sent at all.
#[tokio::test]
async fn given_authorized_request_when_executed_then_bearer_header_sent() {
    // GIVEN: A server that only answers with the right header
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/category"))
        .and(header("authorization", "Bearer jwt-abc"))
        .and(body_json(json!({ "title": "Tech" })))
        .respond_with(
            ResponseTemplate::new(201).set_body_json(json!({ "_id": "c1", "title": "Tech" })),
        )
        .expect(1)
        .mount(&server)
        .await;

    let transport = HttpTransport::new(&server.uri()).expect("valid base url");
    let request = CreateCategory {
        title: "Tech".to_string(),
    }
    .build(&Session::with_token("jwt-abc"));

    // WHEN: Executing
    let body = transport.execute(request).await.expect("2xx");

    // THEN: The JSON body comes back parsed
    assert_eq!(body, json!({ "_id": "c1", "title": "Tech" }));
}

#[tokio::test]
async fn given_category_filter_when_listing_then_query_param_sent() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/posts/"))
        .and(query_param("category", "42"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .expect(1)
        .mount(&server)
        .await;

    let transport = HttpTransport::new(&server.uri()).expect("valid base url");

    let body = transport
        .execute(ListPosts::in_category("42").request())
        .await
        .expect("2xx");

    assert_eq!(body, json!([]));
}

/// **VALUE**: Verifies an id with URL delimiters reaches the backend as one path segment.
///
/// **BUG THIS CATCHES**: Would catch `?` in an id being sent as a query string.
#[tokio::test]
async fn given_id_with_question_mark_when_fetched_then_path_segment_escaped() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/posts/p1%3Fdraft%3D1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "_id": "p1" })))
        .expect(1)
        .mount(&server)
        .await;

    let transport = HttpTransport::new(&server.uri()).expect("valid base url");
    let request = FetchPost {
        id: "p1?draft=1".to_string(),
    }
    .request();

    let body = transport.execute(request).await.expect("2xx");

    assert_eq!(body, json!({ "_id": "p1" }));
}

/// **VALUE**: Verifies a base URL with a path prefix keeps that prefix.
///
/// **BUG THIS CATCHES**: Would catch `Url::join` replacing the last segment of a base
/// like `https://host/blog`.
#[tokio::test]
async fn given_base_url_with_prefix_when_executed_then_prefix_kept() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/blog/api/category"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .expect(1)
        .mount(&server)
        .await;

    let transport = HttpTransport::new(&format!("{}/blog", server.uri())).expect("valid url");

    let result = transport.execute(Request::get("/api/category")).await;

    assert!(result.is_ok(), "got {result:?}");
}

/// **VALUE**: Verifies non-2xx responses come back as `Status` with the parsed body.
///
/// **WHY THIS MATTERS**: The normalizer reads `message` from this body; losing it would
/// turn every validation failure into a bare status code.
#[tokio::test]
async fn given_error_status_when_executed_then_status_failure_with_body() {
    let server = MockServer::start().await;
    Mock::given(method("DELETE"))
        .and(path("/api/category/c1"))
        .respond_with(
            ResponseTemplate::new(401).set_body_json(json!({ "message": "Unauthorized" })),
        )
        .mount(&server)
        .await;

    let transport = HttpTransport::new(&server.uri()).expect("valid base url");

    let failure = transport
        .execute(Request::delete("/api/category/c1"))
        .await
        .expect_err("401 is a failure");

    match failure {
        TransportFailure::Status { status, body, .. } => {
            assert_eq!(status, HttpStatusCode(401));
            assert!(status.is_auth_rejection());
            assert_eq!(body, Some(json!({ "message": "Unauthorized" })));
        }
        other => panic!("expected Status, got {other:?}"),
    }
}

#[tokio::test]
async fn given_empty_or_text_bodies_when_executed_then_null_or_string() {
    let server = MockServer::start().await;
    Mock::given(method("PUT"))
        .and(path("/empty"))
        .respond_with(ResponseTemplate::new(204))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/text"))
        .respond_with(ResponseTemplate::new(200).set_body_string("Email sent"))
        .mount(&server)
        .await;

    let transport = HttpTransport::new(&server.uri()).expect("valid base url");

    let empty = transport.execute(Request::put("/empty")).await.expect("2xx");
    let text = transport.execute(Request::get("/text")).await.expect("2xx");

    assert_eq!(empty, Value::Null);
    assert_eq!(text, json!("Email sent"));
}

/// **VALUE**: Verifies an unreachable backend is a `NoResponse`, never a `Status`.
///
/// **BUG THIS CATCHES**: Would catch connection errors being classified as server errors
/// and written to the partition.
#[tokio::test]
async fn given_unreachable_backend_when_executed_then_no_response() {
    // Port 9 (discard) is closed on test machines
    let transport = HttpTransport::new("http://127.0.0.1:9").expect("valid base url");

    let failure = transport
        .execute(Request::get("/api/category"))
        .await
        .expect_err("nothing listens there");

    assert!(matches!(failure, TransportFailure::NoResponse { .. }), "got {failure:?}");
}

#[tokio::test]
async fn given_post_draft_when_executed_then_multipart_form_sent() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/posts"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "_id": "p1" })))
        .mount(&server)
        .await;

    let transport = HttpTransport::new(&server.uri()).expect("valid base url");
    let draft = PostDraftBuilder::default()
        .with_title("Ownership")
        .with_description("Borrowing explained")
        .with_category("Rust")
        .with_image(ImageUpload::new("cover.png", "image/png", vec![1, 2, 3]))
        .build()
        .expect("draft is valid");

    transport
        .execute(CreatePost { draft }.request())
        .await
        .expect("2xx");

    let received = server.received_requests().await.expect("recording enabled");
    let content_type = received[0]
        .headers
        .get("content-type")
        .and_then(|value| value.to_str().ok())
        .unwrap_or_default()
        .to_string();
    let body = String::from_utf8_lossy(&received[0].body);

    assert!(content_type.starts_with("multipart/form-data"), "got {content_type}");
    assert!(body.contains(r#"name="title""#));
    assert!(body.contains(r#"filename="cover.png""#));
    assert!(body.contains("Borrowing explained"));
}

/// **VALUE**: End to end: config → store → HTTP → partition.
#[tokio::test]
async fn given_store_from_config_when_create_category_then_entity_stored() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/category"))
        .respond_with(
            ResponseTemplate::new(201).set_body_json(json!({ "_id": "c9", "title": "Tech" })),
        )
        .mount(&server)
        .await;

    let mut config = client_core::config::ClientConfig::default();
    config.api = ApiConfig {
        base_url: server.uri(),
        timeout_secs: Some(5),
    };
    let store = Store::from_config(&config, SessionContext::new(Session::with_token("jwt")))
        .expect("valid config");

    let outcome = store
        .dispatch(CreateCategory {
            title: "Tech".to_string(),
        })
        .await
        .expect("no transport failure");

    assert!(matches!(outcome, Outcome::Fulfilled(Payload::Entity(_))));
    let partition = store.partition::<Category>().await;
    assert_eq!(partition.entity.map(|c| c.id), Some("c9".to_string()));
    assert!(!partition.loading);
}
