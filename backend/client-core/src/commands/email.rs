use crate::commands::{API_PREFIX, Command, Descriptor};
use crate::store::OneShot;
use crate::transport::Request;

use models::EmailMessage;

use const_format::concatcp;
use serde_json::json;

const EMAIL_ENDPOINT: &str = concatcp!(API_PREFIX, "/email");

/// Ask the backend to send an email from the signed-in user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SendEmail {
    pub to: String,
    pub subject: String,
    pub message: String,
}

impl Command for SendEmail {
    type Resource = EmailMessage;
    const DESCRIPTOR: Descriptor = Descriptor::mutation("email/send", OneShot::Created);

    fn request(&self) -> Request {
        Request::post(EMAIL_ENDPOINT).json(json!({
            "to": self.to,
            "subject": self.subject,
            "message": self.message,
        }))
    }
}
