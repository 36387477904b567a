//! Request execution shared by the clients.

use crate::{ClientError, ClientResult};

use reqwest::RequestBuilder;
use serde::Deserialize;
use serde::de::DeserializeOwned;

/// Google API error envelope: `{"error": {"code": 400, "message": "...", "status": "..."}}`
#[derive(Debug, Deserialize)]
struct ErrorEnvelope {
    error: ErrorBody,
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    message: Option<String>,
    status: Option<String>,
}

/// Send the request and decode a successful JSON body into `T`.
/// Non-2xx responses become [`ClientError::Api`].
pub(crate) async fn execute<T: DeserializeOwned>(req: RequestBuilder) -> ClientResult<T> {
    let response = req.send().await?;
    let status = response.status();
    let body = response.bytes().await?;

    if !status.is_success() {
        return Err(api_error(status.as_u16(), &body));
    }

    Ok(serde_json::from_slice(&body)?)
}

/// Build an API error from a failed response body.
///
/// Identity Toolkit puts the code in `message` (`"EMAIL_NOT_FOUND"`, or
/// `"TOO_MANY_ATTEMPTS_TRY_LATER : details"`); Firestore uses `status`.
#[track_caller]
pub(crate) fn api_error(status: u16, body: &[u8]) -> ClientError {
    match serde_json::from_slice::<ErrorEnvelope>(body) {
        Ok(ErrorEnvelope { error }) => {
            let message = error
                .message
                .unwrap_or_else(|| String::from("Unknown error"));
            let code = error.status.unwrap_or_else(|| {
                message
                    .split(" : ")
                    .next()
                    .unwrap_or("UNKNOWN")
                    .trim()
                    .to_string()
            });
            ClientError::api_error(status, code, message)
        }
        Err(_) => ClientError::api_error(
            status,
            String::from("UNKNOWN"),
            format!("HTTP {status}"),
        ),
    }
}
