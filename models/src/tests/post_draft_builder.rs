use crate::{ImageUpload, ModelError, PostDraftBuilder};

fn png() -> ImageUpload {
    ImageUpload::new("cover.png", "image/png", vec![0x89, 0x50, 0x4e, 0x47])
}

fn complete_builder() -> PostDraftBuilder {
    PostDraftBuilder::default()
        .with_title("Borrowing without tears")
        .with_description("Lifetimes, explained with diagrams.")
        .with_category("Tech")
        .with_image(png())
}

#[test]
fn given_all_fields_when_building_then_returns_trimmed_draft() {
    let draft = complete_builder()
        .with_title("  Borrowing without tears  ")
        .build()
        .unwrap();

    assert_eq!(draft.title, "Borrowing without tears");
    assert_eq!(draft.category, "Tech");
    assert_eq!(draft.image.file_name, "cover.png");
}

/// **VALUE**: Verifies that a blank title is rejected before any request is built.
///
/// **WHY THIS MATTERS**: The multipart create-post request has no JSON validation on the
/// client side. A blank title would cost a round trip and come back as an application error.
///
/// **BUG THIS CATCHES**: Would catch if trimming were dropped from the required-field check.
#[test]
fn given_blank_title_when_building_then_returns_validation_error() {
    let result = complete_builder().with_title("   ").build();

    match result.unwrap_err() {
        ModelError::Validation { message, .. } => {
            assert_eq!(message, "Title cannot be empty");
        }
        other => panic!("expected Validation, got {other:?}"),
    }
}

#[test]
fn given_missing_category_when_building_then_returns_validation_error() {
    let result = PostDraftBuilder::default()
        .with_title("Title")
        .with_description("Body")
        .with_image(png())
        .build();

    match result.unwrap_err() {
        ModelError::Validation { message, .. } => {
            assert_eq!(message, "Category is required");
        }
        other => panic!("expected Validation, got {other:?}"),
    }
}

#[test]
fn given_missing_image_when_building_then_returns_validation_error() {
    let result = PostDraftBuilder::default()
        .with_title("Title")
        .with_description("Body")
        .with_category("Tech")
        .build();

    match result.unwrap_err() {
        ModelError::Validation { message, .. } => {
            assert_eq!(message, "Image is required");
        }
        other => panic!("expected Validation, got {other:?}"),
    }
}

#[test]
fn given_non_image_upload_when_building_then_returns_invalid_image_error() {
    let result = complete_builder()
        .with_image(ImageUpload::new("notes.txt", "text/plain", b"hello".to_vec()))
        .build();

    match result.unwrap_err() {
        ModelError::InvalidImage {
            file_name, message, ..
        } => {
            assert_eq!(file_name, "notes.txt");
            assert_eq!(message, "Unsupported image type: text/plain");
        }
        other => panic!("expected InvalidImage, got {other:?}"),
    }
}

#[test]
fn given_empty_image_when_building_then_returns_invalid_image_error() {
    let err = complete_builder()
        .with_image(ImageUpload::new("cover.png", "image/png", Vec::new()))
        .build()
        .unwrap_err();

    assert_eq!(err.message(), "Image is empty");
    assert!(err.to_string().starts_with("Invalid Image Error: cover.png: Image is empty"));
}

#[test]
fn given_validation_error_when_formatted_then_includes_location() {
    let err = complete_builder().with_description("").build().unwrap_err();

    let text = err.to_string();
    assert!(text.contains("Validation Error: Description cannot be empty"));
    assert!(text.contains("post_draft_builder.rs"));
}
