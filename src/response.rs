//! Decoded API response with the HTTP details of the round trip.
//!
//! [`Response`] is what [`Client::send`](crate::Client::send) returns for each
//! call. It carries the envelope's status metadata and payload alongside the
//! raw body, status code, headers and latency.

use crate::{envelope::Meta, Envelope, Error, Result};
use http::{HeaderMap, StatusCode};
use std::time::Duration;

/// A decoded Tumblr response.
///
/// The HTTP status is not checked during dispatch: a 4xx or 5xx response with a
/// well-formed envelope decodes successfully. Use [`Response::is_success`] or
/// [`Response::error_for_status`] to detect API-level failures.
///
/// # Examples
///
/// ```no_run
/// use tumblr::Client;
/// use tumblr::models::BlogInfoResponse;
///
/// # async fn example() -> Result<(), tumblr::Error> {
/// let client = Client::new()?;
///
/// let response = client
///     .get::<BlogInfoResponse>("blog/staff.tumblr.com/info")
///     .await?
///     .error_for_status()?;
///
/// println!("Status: {} {}", response.meta.status, response.meta.msg);
/// println!("Request took {:?}", response.latency);
/// println!("Title: {}", response.into_data()?.blog.title);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct Response<T> {
    /// The envelope's status metadata.
    pub meta: Meta,

    /// The envelope's payload, `None` when the body carried no `response`.
    pub data: Option<T>,

    /// The raw response body as a string.
    pub raw_body: String,

    /// The HTTP status code of the response.
    pub status: StatusCode,

    /// The response headers.
    pub headers: HeaderMap,

    /// Time from dispatch until the body was read.
    pub latency: Duration,
}

impl<T> Response<T> {
    /// Creates a new `Response` from a decoded envelope.
    pub fn new(
        envelope: Envelope<T>,
        raw_body: String,
        status: StatusCode,
        headers: HeaderMap,
        latency: Duration,
    ) -> Self {
        Self {
            meta: envelope.meta,
            data: envelope.response,
            raw_body,
            status,
            headers,
            latency,
        }
    }

    /// Maps the payload to a different type, preserving the metadata.
    ///
    /// # Examples
    ///
    /// ```
    /// # use tumblr::{Envelope, Meta, Response};
    /// # use http::{HeaderMap, StatusCode};
    /// # use std::time::Duration;
    /// let envelope = Envelope { meta: Meta::default(), response: Some(42) };
    /// let response = Response::new(
    ///     envelope,
    ///     String::new(),
    ///     StatusCode::OK,
    ///     HeaderMap::new(),
    ///     Duration::from_millis(100),
    /// );
    ///
    /// let string_response = response.map(|n| n.to_string());
    /// assert_eq!(string_response.data.as_deref(), Some("42"));
    /// ```
    pub fn map<U, F>(self, f: F) -> Response<U>
    where
        F: FnOnce(T) -> U,
    {
        Response {
            meta: self.meta,
            data: self.data.map(f),
            raw_body: self.raw_body,
            status: self.status,
            headers: self.headers,
            latency: self.latency,
        }
    }

    /// Returns `true` if the HTTP status is 2xx and the envelope status, when
    /// present, is 2xx too.
    ///
    /// A missing `meta` block (status `0`) defers to the HTTP status alone.
    pub fn is_success(&self) -> bool {
        self.status.is_success() && (self.meta.status == 0 || self.meta.is_success())
    }

    /// Turns an API-level failure into [`Error::Api`].
    ///
    /// The envelope status is reported when it is set; otherwise the HTTP
    /// status stands in for it.
    pub fn error_for_status(self) -> Result<Self> {
        if self.is_success() {
            return Ok(self);
        }

        let status = if self.meta.status != 0 {
            self.meta.status
        } else {
            i32::from(self.status.as_u16())
        };
        let msg = if self.meta.msg.is_empty() {
            self.status.canonical_reason().unwrap_or_default().to_string()
        } else {
            self.meta.msg
        };

        Err(Error::Api {
            status,
            msg,
            http_status: self.status,
        })
    }

    /// Returns the payload, or [`Error::MissingPayload`] when there is none.
    pub fn into_data(self) -> Result<T> {
        self.data.ok_or(Error::MissingPayload)
    }

    /// Returns a reference to a header value by name.
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(name)?.to_str().ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use http::HeaderValue;

    fn response(status: StatusCode, meta: Meta, data: Option<u32>) -> Response<u32> {
        Response::new(
            Envelope {
                meta,
                response: data,
            },
            String::new(),
            status,
            HeaderMap::new(),
            Duration::from_millis(5),
        )
    }

    fn meta(status: i32, msg: &str) -> Meta {
        Meta {
            status,
            msg: msg.to_string(),
        }
    }

    #[test]
    fn test_success_passes_through() {
        let response = response(StatusCode::OK, meta(200, "OK"), Some(1))
            .error_for_status()
            .unwrap();

        assert!(response.is_success());
        assert_eq!(response.into_data().unwrap(), 1);
    }

    #[test]
    fn test_error_for_status_uses_meta() {
        let err = response(StatusCode::NOT_FOUND, meta(404, "Not Found"), None)
            .error_for_status()
            .unwrap_err();

        match err {
            Error::Api {
                status,
                msg,
                http_status,
            } => {
                assert_eq!(status, 404);
                assert_eq!(msg, "Not Found");
                assert_eq!(http_status, StatusCode::NOT_FOUND);
            }
            other => panic!("Expected Api error, got {:?}", other),
        }
    }

    #[test]
    fn test_error_for_status_falls_back_to_http_status() {
        let err = response(StatusCode::INTERNAL_SERVER_ERROR, Meta::default(), None)
            .error_for_status()
            .unwrap_err();

        match err {
            Error::Api { status, msg, .. } => {
                assert_eq!(status, 500);
                assert_eq!(msg, "Internal Server Error");
            }
            other => panic!("Expected Api error, got {:?}", other),
        }
    }

    #[test]
    fn test_missing_meta_on_http_ok_is_success() {
        let envelope: Envelope<u32> = serde_json::from_str(r#"{"response":1}"#).unwrap();
        let response = Response::new(
            envelope,
            r#"{"response":1}"#.to_string(),
            StatusCode::OK,
            HeaderMap::new(),
            Duration::from_millis(5),
        );

        assert!(response.is_success());
        assert_eq!(response.error_for_status().unwrap().into_data().unwrap(), 1);
    }

    #[test]
    fn test_missing_meta_on_http_error_is_failure() {
        let response = response(StatusCode::BAD_GATEWAY, Meta::default(), None);
        assert!(!response.is_success());
    }

    #[test]
    fn test_meta_failure_on_http_ok() {
        let response = response(StatusCode::OK, meta(401, "Not Authorized"), None);
        assert!(!response.is_success());
        assert!(response.error_for_status().is_err());
    }

    #[test]
    fn test_into_data_missing_payload() {
        let response = response(StatusCode::OK, meta(200, "OK"), None);
        assert!(matches!(response.into_data(), Err(Error::MissingPayload)));
    }

    #[test]
    fn test_header_lookup() {
        let mut response = response(StatusCode::OK, meta(200, "OK"), Some(1));
        response
            .headers
            .insert("content-type", HeaderValue::from_static("application/json"));

        assert_eq!(response.header("content-type"), Some("application/json"));
        assert_eq!(response.header("x-missing"), None);
    }
}
