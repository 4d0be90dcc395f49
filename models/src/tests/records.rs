use crate::{Category, Post, User, UserRef};

use serde_json::json;

/// **VALUE**: Verifies that records decode Mongo-style `_id` fields and camelCase keys.
///
/// **WHY THIS MATTERS**: Every partition entity goes through these impls. A mismatch in
/// the wire naming would turn every successful response into a decode failure.
#[test]
fn given_backend_category_json_when_decoded_then_maps_id_and_fields() {
    let category: Category = serde_json::from_value(json!({
        "_id": "65f0c0ffee",
        "title": "Tech",
        "user": "65f0aa",
        "createdAt": "2024-03-12T10:00:00.000Z",
        "__v": 0
    }))
    .unwrap();

    assert_eq!(category.id, "65f0c0ffee");
    assert_eq!(category.title, "Tech");
    assert_eq!(category.user, Some(UserRef::Id("65f0aa".to_string())));
    assert_eq!(category.created_at.as_deref(), Some("2024-03-12T10:00:00.000Z"));
}

#[test]
fn given_sparse_post_json_when_decoded_then_missing_fields_default() {
    let post: Post = serde_json::from_value(json!({ "title": "Hello" })).unwrap();

    assert_eq!(post.title, "Hello");
    assert!(post.id.is_empty());
    assert_eq!(post.num_views, 0);
    assert!(post.likes.is_empty());
}

#[test]
fn given_populated_author_when_decoded_then_user_ref_is_profile() {
    let post: Post = serde_json::from_value(json!({
        "_id": "p1",
        "user": { "_id": "u1", "firstName": "Ada", "lastName": "Lovelace" },
        "likes": ["u2", { "_id": "u3" }]
    }))
    .unwrap();

    let author = post.user.unwrap();
    assert_eq!(author.id(), "u1");
    match author {
        UserRef::Profile(user) => assert_eq!(user.full_name(), "Ada Lovelace"),
        UserRef::Id(_) => panic!("Expected a populated profile"),
    }
    assert_eq!(post.likes[0].id(), "u2");
    assert_eq!(post.likes[1].id(), "u3");
}

/// **VALUE**: Verifies that the login token is read but never written back out.
///
/// **BUG THIS CATCHES**: Would catch removal of `skip_serializing`, which would make
/// serializing a `User` fail outright because the secret refuses serialization.
#[test]
fn given_login_user_when_round_tripped_then_token_is_dropped_from_output() {
    let user: User = serde_json::from_value(json!({
        "_id": "u1",
        "firstName": "Ada",
        "isAdmin": true,
        "token": "jwt-value"
    }))
    .unwrap();

    assert_eq!(user.token.as_ref().map(|t| t.as_str()), Some("jwt-value"));

    let output = serde_json::to_value(&user).unwrap();
    assert!(output.get("token").is_none());
    assert_eq!(output["isAdmin"], json!(true));
}
