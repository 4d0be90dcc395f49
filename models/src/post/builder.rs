use crate::error::model_error::ModelError;
use crate::{ErrorLocation, ImageUpload, PostDraft};

use std::panic::Location;

/// Builder for creating validated [`PostDraft`] instances.
#[derive(Debug, Default)]
pub struct PostDraftBuilder {
    title: Option<String>,
    description: Option<String>,
    category: Option<String>,
    image: Option<ImageUpload>,
}

impl PostDraftBuilder {
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    pub fn with_image(mut self, image: ImageUpload) -> Self {
        self.image = Some(image);
        self
    }

    /// Build the draft, rejecting missing or blank fields.
    #[track_caller]
    pub fn build(self) -> Result<PostDraft, ModelError> {
        let title = required_text(self.title, "Title")?;
        let description = required_text(self.description, "Description")?;
        let category = required_text(self.category, "Category")?;

        let image = self.image.ok_or_else(|| ModelError::Validation {
            message: String::from("Image is required"),
            location: ErrorLocation::from(Location::caller()),
        })?;

        if image.bytes.is_empty() {
            return Err(ModelError::InvalidImage {
                file_name: image.file_name,
                message: String::from("Image is empty"),
                location: ErrorLocation::from(Location::caller()),
            });
        }

        if !image.content_type.starts_with("image/") {
            return Err(ModelError::InvalidImage {
                message: format!("Unsupported image type: {}", image.content_type),
                file_name: image.file_name,
                location: ErrorLocation::from(Location::caller()),
            });
        }

        Ok(PostDraft {
            title,
            description,
            category,
            image,
        })
    }
}

#[track_caller]
fn required_text(value: Option<String>, field: &str) -> Result<String, ModelError> {
    let value = value.ok_or_else(|| ModelError::Validation {
        message: format!("{field} is required"),
        location: ErrorLocation::from(Location::caller()),
    })?;

    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(ModelError::Validation {
            message: format!("{field} cannot be empty"),
            location: ErrorLocation::from(Location::caller()),
        });
    }

    Ok(trimmed.to_string())
}
