//! Request body extraction for user payloads.
//!
//! Bodies are parsed only when sent as `application/json`; any other or
//! missing content type, and an empty JSON body, yield an empty object so
//! validation reports the first missing field. Bodies above
//! [`BODY_LIMIT`] are refused with 413 before parsing.

use actix_web::dev::Payload;
use actix_web::{FromRequest, HttpMessage, HttpRequest, mime, web};
use futures_util::future::LocalBoxFuture;
use serde_json::{Map, Value};
use tracing::debug;

use crate::domain::Error;

/// Largest accepted request body, in bytes.
pub const BODY_LIMIT: usize = 100 * 1024;

/// Raw JSON request body handed to the users commands.
#[derive(Debug, Clone, PartialEq)]
pub struct JsonBody(pub Value);

impl JsonBody {
    fn empty() -> Self {
        Self(Value::Object(Map::new()))
    }

    /// Payload configuration applying [`BODY_LIMIT`].
    pub fn config() -> web::PayloadConfig {
        web::PayloadConfig::new(BODY_LIMIT)
    }

    fn parse(bytes: &[u8]) -> Result<Self, Error> {
        if bytes.iter().all(u8::is_ascii_whitespace) {
            return Ok(Self::empty());
        }
        serde_json::from_slice(bytes).map(Self).map_err(|err| {
            debug!(error = %err, "request body rejected");
            Error::invalid_request(format!("Json deserialize error: {err}"))
        })
    }
}

fn is_json(req: &HttpRequest) -> bool {
    match req.mime_type() {
        Ok(Some(mime)) => mime.type_() == mime::APPLICATION && mime.subtype() == mime::JSON,
        _ => false,
    }
}

impl FromRequest for JsonBody {
    type Error = actix_web::Error;
    type Future = LocalBoxFuture<'static, Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, payload: &mut Payload) -> Self::Future {
        let json = is_json(req);
        let fut = web::Bytes::from_request(req, payload);
        Box::pin(async move {
            let bytes = fut.await?;
            if !json {
                return Ok(Self::empty());
            }
            Self::parse(&bytes).map_err(actix_web::Error::from)
        })
    }
}

impl std::ops::Deref for JsonBody {
    type Target = Value;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}
