use std::collections::BTreeMap;

use base64::{Engine, engine::general_purpose::STANDARD};
use reqwest::{
    StatusCode,
    header::{ACCESS_CONTROL_ALLOW_ORIGIN, CONTENT_TYPE},
};
use serde::Serialize;
use serde_json::json;

use crate::result::ProxyError;

pub const CONTENT_TYPE_BINARY: &str = "application/octet-stream";
pub const CONTENT_TYPE_JSON: &str = "application/json";

/**
    The response of a single function invocation, in the shape
    serverless platforms expect from an HTTP-triggered function.

    Binary payloads travel base64-encoded in `body`, with `is_base64_encoded`
    telling the platform to decode them before replying to the caller.
*/
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FunctionResponse {
    pub status_code: u16,
    pub headers: BTreeMap<String, String>,
    pub body: String,
    pub is_base64_encoded: bool,
}

impl FunctionResponse {
    /**
        A successful firmware response, readable from any origin.
    */
    #[must_use]
    pub fn firmware(contents: &[u8]) -> Self {
        let headers = BTreeMap::from([
            (ACCESS_CONTROL_ALLOW_ORIGIN.to_string(), "*".to_string()),
            (CONTENT_TYPE.to_string(), CONTENT_TYPE_BINARY.to_string()),
        ]);
        Self {
            status_code: StatusCode::OK.as_u16(),
            headers,
            body: STANDARD.encode(contents),
            is_base64_encoded: true,
        }
    }

    /**
        An error response carrying only the public message of the error.
    */
    #[must_use]
    pub fn error(err: &ProxyError) -> Self {
        let headers = BTreeMap::from([(CONTENT_TYPE.to_string(), CONTENT_TYPE_JSON.to_string())]);
        Self {
            status_code: err.status_code().as_u16(),
            headers,
            body: error_body(err),
            is_base64_encoded: false,
        }
    }

    /**
        Decodes the body back into raw bytes, base64-decoding it if needed.

        # Errors

        - If the body is marked as base64-encoded but is not valid base64.
    */
    pub fn decoded_body(&self) -> Result<Vec<u8>, base64::DecodeError> {
        if self.is_base64_encoded {
            STANDARD.decode(&self.body)
        } else {
            Ok(self.body.clone().into_bytes())
        }
    }
}

/**
    Serializes the JSON body for an error, `{"error":"<message>"}`.
*/
#[must_use]
pub fn error_body(err: &ProxyError) -> String {
    json!({ "error": err.public_message() }).to_string()
}
