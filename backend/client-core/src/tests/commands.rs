// Unit tests for command request construction
// Nothing here touches a transport; see integration_tests/http_transport for the wire

use crate::commands::{
    BlockUser, Command, CreateCategory, CreatePost, DeleteComment, DeleteUser, FetchPost, FollowUser, ListCategories,
    ListPosts, LoginUser, RegisterUser, RequestVerification, UnfollowUser, UpdatePost,
    UploadProfilePhoto,
};
use crate::store::{Domain, OneShot, Shape};
use crate::transport::{FormPart, Method, RequestBody, encode_segment};

use common::RedactedSecret;
use models::{ImageUpload, PostDraftBuilder, Registration, Session};

use serde_json::json;

fn png() -> ImageUpload {
    ImageUpload::new("cover.png", "image/png", vec![0x89, 0x50, 0x4e, 0x47])
}

/// **VALUE**: Verifies authenticated commands carry the session token.
///
/// **WHY THIS MATTERS**: Every admin action fails with 401 if the header is missing.
///
/// **BUG THIS CATCHES**: Would catch `build()` ignoring the session for mutations.
#[test]
fn given_token_when_auth_command_built_then_bearer_attached() {
    // GIVEN: An authenticated session
    let session = Session::with_token("jwt-abc");

    // WHEN: Building a command that requires auth
    let request = CreateCategory {
        title: "Rust".to_string(),
    }
    .build(&session);

    // THEN: The bearer is present and the body is the title
    assert_eq!(request.method, Method::Post);
    assert_eq!(request.path, "/api/category");
    assert_eq!(request.bearer, Some(RedactedSecret::new("jwt-abc")));
    assert_eq!(request.body, RequestBody::Json(json!({ "title": "Rust" })));
}

/// **VALUE**: Verifies anonymous commands never carry a token, even when one exists.
///
/// **BUG THIS CATCHES**: Would catch public reads leaking the session token.
#[test]
fn given_token_when_anonymous_command_built_then_no_bearer() {
    let session = Session::with_token("jwt-abc");

    let request = FetchPost {
        id: "p1".to_string(),
    }
    .build(&session);

    assert!(!request.is_authorized());
    assert_eq!(request.target(), "/api/posts/p1");
}

/// **VALUE**: Verifies ids are percent-encoded as a single path segment.
///
/// **WHY THIS MATTERS**: An id holding `/`, `?` or `#` would otherwise address a
/// different resource or turn into a query string.
///
/// **BUG THIS CATCHES**: Would catch an id being formatted into the path unescaped.
#[test]
fn given_id_with_url_delimiters_when_built_then_single_encoded_segment() {
    let session = Session::with_token("jwt-abc");

    let fetch = FetchPost {
        id: "p1/../admin?x=1#top".to_string(),
    }
    .build(&session);
    let delete = DeleteComment {
        id: "a b+c".to_string(),
    }
    .build(&session);
    let block = BlockUser {
        id: "u1".to_string(),
    }
    .build(&session);

    assert_eq!(fetch.path, "/api/posts/p1%2F..%2Fadmin%3Fx%3D1%23top");
    assert!(fetch.query.is_empty());
    assert_eq!(delete.path, "/api/comments/a%20b%2Bc");
    assert_eq!(block.path, "/api/users/block-user/u1");
    assert_eq!(encode_segment("64f0c2-e_1.x"), "64f0c2-e_1.x");
}

/// **VALUE**: Verifies an auth command with no token is still built, without a header.
///
/// **WHY THIS MATTERS**: The backend owns the 401; the client must not invent its own error.
#[test]
fn given_anonymous_session_when_auth_command_built_then_sent_without_bearer() {
    let request = ListCategories.build(&Session::anonymous());

    assert!(!request.is_authorized());
    assert_eq!(request.method, Method::Get);
}

#[test]
fn given_category_filter_when_list_posts_then_query_is_encoded() {
    assert_eq!(ListPosts::all().request().target(), "/api/posts/");
    assert_eq!(ListPosts::in_category("").request().target(), "/api/posts/");
    assert_eq!(
        ListPosts::in_category("Web Dev").request().target(),
        "/api/posts/?category=Web+Dev"
    );
}

/// **VALUE**: Verifies a post is sent as multipart with the image as a file part.
///
/// **BUG THIS CATCHES**: Would catch the image being dropped or sent as JSON.
#[test]
fn given_post_draft_when_create_post_then_multipart_parts_in_order() {
    let draft = PostDraftBuilder::default()
        .with_title("Ownership")
        .with_description("Borrowing explained")
        .with_category("Rust")
        .with_image(png())
        .build()
        .expect("draft is valid");

    let request = CreatePost { draft }.request();

    let RequestBody::Multipart(parts) = &request.body else {
        panic!("expected multipart body, got {:?}", request.body);
    };
    let names: Vec<_> = parts.iter().map(FormPart::name).collect();
    assert_eq!(names, ["title", "description", "category", "image"]);
    assert_eq!(parts[3], FormPart::file("image", png()));
}

#[test]
fn given_update_post_when_request_then_id_in_path_and_body() {
    let request = UpdatePost {
        id: "p1".to_string(),
        title: "t".to_string(),
        description: "d".to_string(),
        category: "c".to_string(),
    }
    .request();

    assert_eq!(request.method, Method::Put);
    assert_eq!(request.path, "/api/posts/p1");
    assert_eq!(
        request.body,
        RequestBody::Json(json!({ "id": "p1", "title": "t", "description": "d", "category": "c" }))
    );
}

/// **VALUE**: Verifies follow and unfollow use the backend's field names.
///
/// **BUG THIS CATCHES**: Would catch `unFollowId` being "normalized" to `unfollowId`,
/// which the backend silently ignores.
#[test]
fn given_user_id_when_follow_commands_then_backend_field_names_used() {
    let follow = FollowUser {
        user_id: "u2".to_string(),
    }
    .request();
    let unfollow = UnfollowUser {
        user_id: "u2".to_string(),
    }
    .request();

    assert_eq!(follow.body, RequestBody::Json(json!({ "followId": "u2" })));
    assert_eq!(unfollow.body, RequestBody::Json(json!({ "unFollowId": "u2" })));
}

#[test]
fn given_credentials_when_login_then_password_sent_in_clear_json_only() {
    let command = LoginUser {
        email: "ada@example.com".to_string(),
        password: RedactedSecret::new("hunter2"),
    };

    let request = command.build(&Session::anonymous());

    assert_eq!(
        request.body,
        RequestBody::Json(json!({ "email": "ada@example.com", "password": "hunter2" }))
    );
    assert!(!format!("{command:?}").contains("hunter2"));
}

#[test]
fn given_registration_when_register_then_camel_case_body() {
    let request = RegisterUser {
        registration: Registration {
            first_name: "Ada".to_string(),
            last_name: "Lovelace".to_string(),
            email: "ada@example.com".to_string(),
            password: RedactedSecret::new("hunter2"),
        },
    }
    .request();

    assert_eq!(
        request.body,
        RequestBody::Json(json!({
            "firstName": "Ada",
            "lastName": "Lovelace",
            "email": "ada@example.com",
            "password": "hunter2",
        }))
    );
}

#[test]
fn given_profile_photo_when_upload_then_single_image_part() {
    let request = UploadProfilePhoto { image: png() }.request();

    assert_eq!(request.path, "/api/users/profilephoto-upload");
    assert_eq!(
        request.body,
        RequestBody::Multipart(vec![FormPart::file("image", png())])
    );
}

/// **VALUE**: Verifies each descriptor names the flag its view waits for.
///
/// **BUG THIS CATCHES**: Would catch a delete raising `created`, which would send the view
/// to the wrong page.
#[test]
fn given_descriptors_when_inspected_then_signals_and_shapes_match() {
    assert_eq!(CreateCategory::DESCRIPTOR.signal, Some(OneShot::Created));
    assert_eq!(UpdatePost::DESCRIPTOR.signal, Some(OneShot::Updated));
    assert_eq!(DeleteUser::DESCRIPTOR.signal, Some(OneShot::Deleted));
    assert_eq!(RegisterUser::DESCRIPTOR.signal, Some(OneShot::Created));
    assert!(!RegisterUser::DESCRIPTOR.requires_auth);
    assert_eq!(RequestVerification::DESCRIPTOR.signal, Some(OneShot::Created));

    assert_eq!(ListCategories::DESCRIPTOR.shape, Shape::Collection);
    assert_eq!(ListCategories::DESCRIPTOR.signal, None);
    assert!(!ListPosts::DESCRIPTOR.requires_auth);

    assert_eq!(ListCategories.domain(), Domain::Category);
    assert_eq!(RequestVerification.domain(), Domain::Verification);
}
