use crate::commands::{image_content_type, load_image};
use crate::error::BlogctlError;

use std::path::Path;

use tempfile::TempDir;

#[test]
fn given_known_extensions_when_content_type_then_image_mime() {
    assert_eq!(image_content_type(Path::new("a.PNG")), Some("image/png"));
    assert_eq!(image_content_type(Path::new("a.jpeg")), Some("image/jpeg"));
    assert_eq!(image_content_type(Path::new("a.webp")), Some("image/webp"));
    assert_eq!(image_content_type(Path::new("a.txt")), None);
    assert_eq!(image_content_type(Path::new("noext")), None);
}

/// **VALUE**: Verifies an image file becomes an upload with its name and bytes.
#[test]
fn given_png_file_when_loaded_then_upload_has_name_type_and_bytes() {
    let dir = TempDir::new().expect("temp dir");
    let path = dir.path().join("cover.png");
    std::fs::write(&path, [0x89, 0x50, 0x4e, 0x47]).expect("write");

    let upload = load_image(&path).expect("readable png");

    assert_eq!(upload.file_name, "cover.png");
    assert_eq!(upload.content_type, "image/png");
    assert_eq!(upload.bytes, vec![0x89, 0x50, 0x4e, 0x47]);
}

#[test]
fn given_unsupported_or_missing_file_when_loaded_then_error_kind_differs() {
    let dir = TempDir::new().expect("temp dir");

    let unsupported = load_image(&dir.path().join("notes.txt"));
    let missing = load_image(&dir.path().join("missing.png"));

    assert!(matches!(unsupported, Err(BlogctlError::Validation { .. })));
    assert!(matches!(missing, Err(BlogctlError::Blogctl { .. })));
}
