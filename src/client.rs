//! Tumblr API client: request building and response decoding.
//!
//! The [`Client`] type is the main entry point. [`Client::new_request`] turns a
//! relative resource path into an authenticated transport request, and
//! [`Client::send`] dispatches it and decodes the response envelope. Use
//! [`ClientBuilder`] to configure credentials, the base URL or the transport.

use crate::{
    resources::{BlogResource, TaggedResource, UserResource},
    Envelope, Error, Response, Result, BASE_URL, USER_AGENT,
};
use http::header::{CONTENT_TYPE, USER_AGENT as USER_AGENT_HEADER};
use http::Method;
use serde::de::DeserializeOwned;
use std::collections::BTreeMap;
use std::time::{Duration, Instant};
use url::Url;

const FORM_CONTENT_TYPE: &str = "application/x-www-form-urlencoded";

/// A client for the Tumblr v2 API.
///
/// The transport is shared between clones; cloning is cheap. The client keeps
/// no per-call state, so one instance can serve concurrent calls.
///
/// # Examples
///
/// ```no_run
/// use tumblr::Client;
/// use tumblr::models::BlogInfoResponse;
///
/// # async fn example() -> Result<(), tumblr::Error> {
/// let client = Client::builder().client_id("my-consumer-key").build()?;
///
/// let info = client
///     .get::<BlogInfoResponse>("blog/staff.tumblr.com/info")
///     .await?;
/// println!("{}: {}", info.meta.status, info.meta.msg);
/// # Ok(())
/// # }
/// ```
#[derive(Clone)]
pub struct Client {
    http_client: reqwest::Client,
    base_url: Url,
    user_agent: String,
    access_token: Option<String>,
    client_id: Option<String>,
    client_secret: Option<String>,
}

impl Client {
    /// Creates a client with the default transport, base URL and user agent,
    /// and no credentials.
    ///
    /// # Errors
    ///
    /// Returns an error if the default transport cannot be initialized.
    pub fn new() -> Result<Self> {
        ClientBuilder::new().build()
    }

    /// Creates a client that sends requests through `http_client`.
    pub fn with_http_client(http_client: reqwest::Client) -> Result<Self> {
        ClientBuilder::new().http_client(http_client).build()
    }

    /// Creates a new `ClientBuilder` for configuring a client.
    pub fn builder() -> ClientBuilder {
        ClientBuilder::new()
    }

    /// The base URL relative paths are resolved against.
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// The `User-Agent` sent with every request.
    pub fn user_agent(&self) -> &str {
        &self.user_agent
    }

    /// The OAuth access token attached as `access_token`.
    pub fn access_token(&self) -> Option<&str> {
        self.access_token.as_deref()
    }

    /// The application id attached as `client_id`.
    pub fn client_id(&self) -> Option<&str> {
        self.client_id.as_deref()
    }

    /// The application secret attached as `client_secret`.
    pub fn client_secret(&self) -> Option<&str> {
        self.client_secret.as_deref()
    }

    /// Sets or clears the access token. An empty string clears it.
    pub fn set_access_token(&mut self, token: Option<String>) {
        self.access_token = non_empty(token);
    }

    /// Sets or clears the application id. An empty string clears it.
    pub fn set_client_id(&mut self, client_id: Option<String>) {
        self.client_id = non_empty(client_id);
    }

    /// Sets or clears the application secret. An empty string clears it.
    pub fn set_client_secret(&mut self, client_secret: Option<String>) {
        self.client_secret = non_empty(client_secret);
    }

    /// Blog endpoints for the blog identified by `host`
    /// (e.g. `staff.tumblr.com`).
    pub fn blog(&self, host: impl Into<String>) -> BlogResource<'_> {
        BlogResource::new(self, host.into())
    }

    /// Endpoints for the authenticated user.
    pub fn user(&self) -> UserResource<'_> {
        UserResource::new(self)
    }

    /// Tag search endpoints.
    pub fn tagged(&self) -> TaggedResource<'_> {
        TaggedResource::new(self)
    }

    /// Builds an API request. No network I/O happens here.
    ///
    /// `path` is resolved against the base URL with standard reference
    /// resolution, so it should not start with a `/`. Any query string on
    /// `path` is kept. Configured credentials are then added as `access_token`,
    /// `client_id` and `client_secret`, each only when the query has no value
    /// for that parameter yet.
    ///
    /// `body` is sent for every method except GET and HEAD. POST requests are
    /// marked `application/x-www-form-urlencoded`; see [`encode_form`].
    ///
    /// # Errors
    ///
    /// * [`Error::InvalidUrl`] if `path` is not a valid URL reference.
    /// * [`Error::RequestBuild`] if the transport rejects the request, for
    ///   example because the user agent is not a valid header value.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use http::Method;
    /// use tumblr::Client;
    ///
    /// # fn example() -> Result<(), tumblr::Error> {
    /// let client = Client::builder().client_id("abc").build()?;
    /// let request = client.new_request(Method::GET, "blog/example.tumblr.com/info", None)?;
    ///
    /// assert_eq!(
    ///     request.url().as_str(),
    ///     "http://api.tumblr.com/v2/blog/example.tumblr.com/info?client_id=abc"
    /// );
    /// # Ok(())
    /// # }
    /// ```
    pub fn new_request(
        &self,
        method: Method,
        path: &str,
        body: Option<&str>,
    ) -> Result<reqwest::Request> {
        let mut url = self.base_url.join(path)?;
        self.inject_credentials(&mut url);

        let is_post = method == Method::POST;
        let sends_body = method != Method::GET && method != Method::HEAD;

        let mut request = self
            .http_client
            .request(method, url)
            .header(USER_AGENT_HEADER, self.user_agent.as_str());

        if is_post {
            request = request.header(CONTENT_TYPE, FORM_CONTENT_TYPE);
        }

        if let Some(body) = body.filter(|_| sends_body) {
            request = request.body(body.to_owned());
        }

        let request = request.build().map_err(Error::RequestBuild)?;

        tracing::debug!(
            method = %request.method(),
            url = %redact(request.url()),
            "Built API request"
        );

        Ok(request)
    }

    /// Sends a request without reading its body.
    ///
    /// The transport response is returned as-is; the caller owns the body.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Network`] with the transport's error if the round trip
    /// fails.
    pub async fn execute(&self, request: reqwest::Request) -> Result<reqwest::Response> {
        tracing::debug!(
            method = %request.method(),
            url = %redact(request.url()),
            "Executing HTTP request"
        );

        let response = self.http_client.execute(request).await?;
        Ok(response)
    }

    /// Sends a request and decodes the response envelope with a payload of type `T`.
    ///
    /// The body is decoded whatever the HTTP status; a 4xx or 5xx response with
    /// a well-formed envelope is returned as `Ok`. Check
    /// [`Response::is_success`] or call [`Response::error_for_status`] to treat
    /// API-level failures as errors.
    ///
    /// # Errors
    ///
    /// * [`Error::Network`] if the round trip or the body read fails.
    /// * [`Error::DeserializationFailed`] if the body is not a valid envelope
    ///   for `T`. The status, headers and raw body are kept on the error.
    pub async fn send<T>(&self, request: reqwest::Request) -> Result<Response<T>>
    where
        T: DeserializeOwned,
    {
        let start_time = Instant::now();
        let response = self.execute(request).await?;

        let status = response.status();
        let headers = response.headers().clone();

        // Consumes the response, releasing the connection on every path below.
        let raw_body = response.text().await?;
        let latency = start_time.elapsed();

        tracing::debug!(
            status = status.as_u16(),
            latency_ms = latency.as_millis(),
            "Received HTTP response"
        );

        match serde_json::from_str::<Envelope<T>>(&raw_body) {
            Ok(envelope) => Ok(Response::new(envelope, raw_body, status, headers, latency)),
            Err(e) => {
                tracing::error!(
                    error = %e,
                    status = status.as_u16(),
                    body_len = raw_body.len(),
                    "Failed to deserialize response"
                );
                tracing::debug!(raw_response = %raw_body, "Undecodable response body");

                Err(Error::DeserializationFailed {
                    raw_response: raw_body,
                    serde_error: e.to_string(),
                    status,
                    headers,
                })
            }
        }
    }

    /// Builds and sends a GET request for `path`.
    pub async fn get<T>(&self, path: &str) -> Result<Response<T>>
    where
        T: DeserializeOwned,
    {
        let request = self.new_request(Method::GET, path, None)?;
        self.send(request).await
    }

    /// Builds and sends a POST request for `path` with a form-urlencoded `body`.
    pub async fn post_form<T>(&self, path: &str, body: &str) -> Result<Response<T>>
    where
        T: DeserializeOwned,
    {
        let request = self.new_request(Method::POST, path, Some(body))?;
        self.send(request).await
    }

    fn credentials(&self) -> impl Iterator<Item = (&'static str, &str)> {
        [
            ("access_token", self.access_token.as_deref()),
            ("client_id", self.client_id.as_deref()),
            ("client_secret", self.client_secret.as_deref()),
        ]
        .into_iter()
        .filter_map(|(key, value)| value.map(|value| (key, value)))
    }

    /// Adds configured credentials the query does not already carry, then
    /// re-encodes the query sorted by key.
    fn inject_credentials(&self, url: &mut Url) {
        let mut query: BTreeMap<String, Vec<String>> = BTreeMap::new();
        for (key, value) in url.query_pairs() {
            query
                .entry(key.into_owned())
                .or_default()
                .push(value.into_owned());
        }

        for (key, value) in self.credentials() {
            // An empty first value counts as absent.
            let present = query
                .get(key)
                .and_then(|values| values.first())
                .is_some_and(|v| !v.is_empty());
            if !present {
                query.insert(key.to_string(), vec![value.to_string()]);
            }
        }

        if query.is_empty() {
            url.set_query(None);
            return;
        }

        url.query_pairs_mut().clear().extend_pairs(
            query
                .iter()
                .flat_map(|(key, values)| values.iter().map(move |value| (key, value))),
        );
    }
}

/// Encodes `pairs` as an `application/x-www-form-urlencoded` body.
///
/// # Examples
///
/// ```
/// let body = tumblr::encode_form([("type", "text"), ("title", "Hello world")]);
/// assert_eq!(body, "type=text&title=Hello+world");
/// ```
pub fn encode_form<'a>(pairs: impl IntoIterator<Item = (&'a str, &'a str)>) -> String {
    url::form_urlencoded::Serializer::new(String::new())
        .extend_pairs(pairs)
        .finish()
}

/// The URL without its query, which may carry credentials.
fn redact(url: &Url) -> Url {
    let mut url = url.clone();
    url.set_query(None);
    url
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}

/// Builder for configuring and creating a [`Client`].
///
/// # Examples
///
/// ```no_run
/// use tumblr::ClientBuilder;
/// use std::time::Duration;
///
/// # fn example() -> Result<(), tumblr::Error> {
/// let client = ClientBuilder::new()
///     .client_id("consumer-key")
///     .access_token("oauth-token")
///     .user_agent("my-app/1.0")
///     .timeout(Duration::from_secs(30))
///     .build()?;
/// # Ok(())
/// # }
/// ```
#[derive(Default)]
pub struct ClientBuilder {
    base_url: Option<Url>,
    user_agent: Option<String>,
    access_token: Option<String>,
    client_id: Option<String>,
    client_secret: Option<String>,
    http_client: Option<reqwest::Client>,
    timeout: Option<Duration>,
}

impl ClientBuilder {
    /// Creates a new `ClientBuilder` with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Overrides the base URL (default [`BASE_URL`]).
    ///
    /// A trailing `/` is added to the path when missing, so that relative
    /// paths resolve beneath it.
    ///
    /// # Errors
    ///
    /// Returns an error if the URL is invalid or cannot serve as a base.
    pub fn base_url(mut self, url: impl AsRef<str>) -> Result<Self> {
        let mut url = Url::parse(url.as_ref())?;
        if url.cannot_be_a_base() {
            return Err(Error::ConfigurationError(format!(
                "Base URL cannot be a base: {}",
                url
            )));
        }
        if !url.path().ends_with('/') {
            let path = format!("{}/", url.path());
            url.set_path(&path);
        }
        self.base_url = Some(url);
        Ok(self)
    }

    /// Overrides the `User-Agent` header (default [`USER_AGENT`]).
    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = Some(user_agent.into());
        self
    }

    /// Sets the OAuth access token.
    pub fn access_token(mut self, token: impl Into<String>) -> Self {
        self.access_token = non_empty(Some(token.into()));
        self
    }

    /// Sets the application id (consumer key).
    pub fn client_id(mut self, client_id: impl Into<String>) -> Self {
        self.client_id = non_empty(Some(client_id.into()));
        self
    }

    /// Sets the application secret.
    pub fn client_secret(mut self, client_secret: impl Into<String>) -> Self {
        self.client_secret = non_empty(Some(client_secret.into()));
        self
    }

    /// Uses an already-configured transport instead of the default one.
    pub fn http_client(mut self, http_client: reqwest::Client) -> Self {
        self.http_client = Some(http_client);
        self
    }

    /// Sets the request timeout of the default transport.
    ///
    /// Cannot be combined with [`ClientBuilder::http_client`]; configure the
    /// timeout on that transport instead.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Builds the configured `Client`.
    ///
    /// # Errors
    ///
    /// Returns an error if both a transport and a timeout were given, or if
    /// the default transport cannot be initialized.
    pub fn build(self) -> Result<Client> {
        let http_client = match (self.http_client, self.timeout) {
            (Some(_), Some(_)) => {
                return Err(Error::ConfigurationError(
                    "timeout cannot be set together with a custom HTTP client".to_string(),
                ));
            }
            (Some(http_client), None) => http_client,
            (None, timeout) => {
                let mut builder = reqwest::Client::builder();
                if let Some(timeout) = timeout {
                    builder = builder.timeout(timeout);
                }
                builder.build().map_err(|e| {
                    Error::ConfigurationError(format!("Failed to build HTTP client: {}", e))
                })?
            }
        };

        let base_url = match self.base_url {
            Some(url) => url,
            None => Url::parse(BASE_URL)?,
        };

        Ok(Client {
            http_client,
            base_url,
            user_agent: self.user_agent.unwrap_or_else(|| USER_AGENT.to_string()),
            access_token: self.access_token,
            client_id: self.client_id,
            client_secret: self.client_secret,
        })
    }
}
