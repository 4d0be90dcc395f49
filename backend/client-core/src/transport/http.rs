use crate::config::ApiConfig;
use crate::error::transport::TransportFailure;
use crate::transport::request::{FormPart, Method, Request, RequestBody};
use crate::transport::Transport;

use common::ErrorLocation;

use std::panic::Location;
use std::time::Duration;

use async_trait::async_trait;
use log::debug;
use reqwest::multipart::{Form, Part};
use reqwest::{Client, RequestBuilder, header::AUTHORIZATION};
use serde_json::Value;
use url::Url;

/// [`Transport`] backed by a shared `reqwest` client.
#[derive(Clone)]
pub struct HttpTransport {
    base_url: Url,
    client: Client,
}

impl HttpTransport {
    /// Transport without a request timeout.
    pub fn new(base_url_str: &str) -> Result<Self, TransportFailure> {
        Self::build(base_url_str, None)
    }

    pub fn from_config(api: &ApiConfig) -> Result<Self, TransportFailure> {
        Self::build(&api.base_url, api.timeout_secs.map(Duration::from_secs))
    }

    fn build(base_url_str: &str, timeout: Option<Duration>) -> Result<Self, TransportFailure> {
        let mut base_url = Url::parse(base_url_str)?;

        // Request paths are joined as relative paths, so a base like
        // `https://host/blog` must end in a slash to keep its prefix.
        if !base_url.path().ends_with('/') {
            let path = format!("{}/", base_url.path());
            base_url.set_path(&path);
        }

        let mut builder = Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder.build()?;

        Ok(Self { base_url, client })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    fn url_for(&self, request: &Request) -> Result<Url, TransportFailure> {
        let mut url = self.base_url.join(request.path.trim_start_matches('/'))?;
        if !request.query.is_empty() {
            url.query_pairs_mut().extend_pairs(request.query.iter());
        }
        Ok(url)
    }

    fn prepare_request(&self, request: Request) -> Result<RequestBuilder, TransportFailure> {
        let url = self.url_for(&request)?;

        let mut builder = match request.method {
            Method::Get => self.client.get(url),
            Method::Post => self.client.post(url),
            Method::Put => self.client.put(url),
            Method::Delete => self.client.delete(url),
        };

        for (key, value) in &request.headers {
            builder = builder.header(key.as_str(), value.as_str());
        }

        if let Some(token) = &request.bearer {
            builder = builder.header(AUTHORIZATION, token.bearer());
        }

        builder = match request.body {
            RequestBody::Empty => builder,
            RequestBody::Json(body) => builder.json(&body),
            RequestBody::Multipart(parts) => builder.multipart(multipart_form(parts)?),
        };

        Ok(builder)
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn execute(&self, request: Request) -> Result<Value, TransportFailure> {
        let method = request.method;
        let target = request.target();

        let response = self.prepare_request(request)?.send().await?;
        let status = response.status();
        debug!("{method} {target} -> HTTP {}", status.as_u16());

        let body = match response.bytes().await {
            Ok(bytes) => parse_body(&bytes),
            Err(e) if status.is_success() => {
                return Err(TransportFailure::no_response(format!(
                    "Failed to read response body: {e}"
                )));
            }
            // The status alone is enough to classify a failed request.
            Err(_) => Value::Null,
        };

        if !status.is_success() {
            let body = (!body.is_null()).then_some(body);
            return Err(TransportFailure::status(status.as_u16(), body));
        }

        Ok(body)
    }
}

/// Empty → `Null`, JSON → parsed, anything else → the raw text.
fn parse_body(bytes: &[u8]) -> Value {
    if bytes.is_empty() {
        return Value::Null;
    }

    serde_json::from_slice(bytes)
        .unwrap_or_else(|_| Value::String(String::from_utf8_lossy(bytes).into_owned()))
}

#[track_caller]
fn multipart_form(parts: Vec<FormPart>) -> Result<Form, TransportFailure> {
    let mut form = Form::new();

    for part in parts {
        form = match part {
            FormPart::Text { name, value } => form.text(name, value),
            FormPart::File { name, upload } => {
                let file = Part::bytes(upload.bytes)
                    .file_name(upload.file_name)
                    .mime_str(&upload.content_type)
                    .map_err(|e| TransportFailure::InvalidRequest {
                        message: format!("Invalid content type '{}': {e}", upload.content_type),
                        location: ErrorLocation::from(Location::caller()),
                    })?;
                form.part(name, file)
            }
        };
    }

    Ok(form)
}
