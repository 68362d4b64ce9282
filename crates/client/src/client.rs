use std::sync::{Arc, Mutex};

use {
    reqwest::{
        Client, Method, StatusCode, header,
        multipart::{Form, Part},
    },
    serde::Serialize,
    serde_json::{Map, Value},
    tracing::warn,
};

use obra_session::{FileStore, Session, SessionStore};

use crate::{
    error::{Error, Result},
    payload::Payload,
};

/// Message carried by [`Error::AuthExpired`], shown as-is to users.
const SESSION_EXPIRED: &str = "Sessão expirada. Faça login novamente.";

/// Fallback when an error response carries no detail/message field.
const REQUEST_FALLBACK: &str = "Erro na requisição";

/// Fallback for failed uploads.
const UPLOAD_FALLBACK: &str = "Erro ao fazer upload";

type ExpiredHook = Arc<dyn Fn() + Send + Sync>;

/// Per-request flags for [`ApiClient::request`].
#[derive(Debug, Clone, Copy, Default)]
pub struct RequestOptions {
    /// Leave the Authorization header off even when a token is stored.
    /// Used by the auth routes themselves, where a stale token would get
    /// the request rejected before it reaches the handler.
    pub skip_auth: bool,
}

/// Authenticated HTTP gateway to the backend.
///
/// One instance wraps one base URL and one session store. Clones share
/// session state, so an expiry observed by one clone logs out all of
/// them. There is no internal retry, queuing, or timeout: a hung call
/// stays hung until the caller gives up, exactly like the transport
/// underneath.
#[derive(Clone)]
pub struct ApiClient {
    http: Client,
    base_url: String,
    store: Arc<dyn SessionStore>,
    session: Arc<Mutex<Session>>,
    expired_hook: Arc<Mutex<Option<ExpiredHook>>>,
}

impl std::fmt::Debug for ApiClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ApiClient")
            .field("base_url", &self.base_url)
            .field("authenticated", &self.is_authenticated())
            .finish()
    }
}

impl ApiClient {
    /// Create a client for `base_url` with the default file-backed store.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_store(base_url, Arc::new(FileStore::new()))
    }

    /// Create a client backed by an explicit session store.
    ///
    /// A stored session is picked up immediately; a store that fails to
    /// load starts the client logged out rather than failing construction.
    pub fn with_store(base_url: impl Into<String>, store: Arc<dyn SessionStore>) -> Self {
        let session = match store.load() {
            Ok(s) => s.unwrap_or_default(),
            Err(e) => {
                warn!(error = %e, "failed to load stored session, starting logged out");
                Session::default()
            },
        };
        Self {
            http: Client::new(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
            store,
            session: Arc::new(Mutex::new(session)),
            expired_hook: Arc::new(Mutex::new(None)),
        }
    }

    /// Create a client from the discovered config file.
    pub fn from_config() -> Self {
        let cfg = obra_config::discover_and_load();
        let store: Arc<dyn SessionStore> = match cfg.session.path {
            Some(path) => Arc::new(FileStore::with_path(path)),
            None => Arc::new(FileStore::new()),
        };
        Self::with_store(cfg.api.base_url, store)
    }

    /// The configured base URL, without a trailing slash.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    // ── Session state ───────────────────────────────────────────────────────

    /// True iff a token is currently stored.
    pub fn is_authenticated(&self) -> bool {
        self.session.lock().unwrap().is_authenticated()
    }

    /// The cached profile of the logged-in user. Empty when logged out.
    pub fn current_user(&self) -> Map<String, Value> {
        self.session.lock().unwrap().user.clone()
    }

    /// The raw stored token, for validation flows.
    pub fn token(&self) -> Option<String> {
        self.session.lock().unwrap().bearer().map(str::to_owned)
    }

    /// Store token and user together, persisting before updating the
    /// in-memory session so the two can never diverge on failure.
    pub fn set_session(&self, token: impl Into<String>, user: Map<String, Value>) -> Result<()> {
        let session = Session::new(token, user);
        self.store.save(&session)?;
        *self.session.lock().unwrap() = session;
        Ok(())
    }

    /// Drop token and user together, in the store and in memory.
    pub fn clear_session(&self) -> Result<()> {
        self.store.clear()?;
        *self.session.lock().unwrap() = Session::default();
        Ok(())
    }

    /// Register a callback fired after a 401 clears the session.
    ///
    /// The gateway never navigates anywhere itself; an application shell
    /// typically uses this to send the user back to its login entry point.
    pub fn on_session_expired(&self, hook: impl Fn() + Send + Sync + 'static) {
        *self.expired_hook.lock().unwrap() = Some(Arc::new(hook));
    }

    fn bearer_token(&self) -> Option<String> {
        self.session.lock().unwrap().bearer().map(str::to_owned)
    }

    /// 401 handling: clear everything, then notify the observer.
    fn expire_session(&self) {
        if let Err(e) = self.store.clear() {
            warn!(error = %e, "failed to clear stored session on expiry");
        }
        *self.session.lock().unwrap() = Session::default();

        let hook = self.expired_hook.lock().unwrap().clone();
        if let Some(hook) = hook {
            hook();
        }
    }

    // ── Transport ───────────────────────────────────────────────────────────

    /// `GET path`.
    pub async fn get(&self, path: &str) -> Result<Payload> {
        self.request(Method::GET, path, None, RequestOptions::default())
            .await
    }

    /// `POST path` with a JSON body.
    pub async fn post<B: Serialize + ?Sized>(&self, path: &str, body: &B) -> Result<Payload> {
        self.request(
            Method::POST,
            path,
            Some(serde_json::to_value(body)?),
            RequestOptions::default(),
        )
        .await
    }

    /// `PUT path` with a JSON body.
    pub async fn put<B: Serialize + ?Sized>(&self, path: &str, body: &B) -> Result<Payload> {
        self.request(
            Method::PUT,
            path,
            Some(serde_json::to_value(body)?),
            RequestOptions::default(),
        )
        .await
    }

    /// `DELETE path`.
    pub async fn delete(&self, path: &str) -> Result<Payload> {
        self.request(Method::DELETE, path, None, RequestOptions::default())
            .await
    }

    /// The sole transport primitive.
    ///
    /// Sends `method path` with the JSON content type, a bearer header
    /// when a token is stored (unless `opts.skip_auth`), and the body for
    /// POST/PUT only. Failures are logged with method and path, then
    /// propagated untouched.
    pub async fn request(
        &self,
        method: Method,
        path: &str,
        body: Option<Value>,
        opts: RequestOptions,
    ) -> Result<Payload> {
        let url = format!("{}{}", self.base_url, path);
        let mut req = self
            .http
            .request(method.clone(), &url)
            .header(header::CONTENT_TYPE, "application/json");

        if !opts.skip_auth && let Some(token) = self.bearer_token() {
            req = req.bearer_auth(token);
        }

        if let Some(body) = &body
            && (method == Method::POST || method == Method::PUT)
        {
            req = req.json(body);
        }

        self.execute(req, method, path, REQUEST_FALLBACK).await
    }

    /// POST a multipart form to `path` with the file under the fixed
    /// field name `file`.
    ///
    /// No JSON content type is set; the transport supplies the multipart
    /// boundary. Auth attachment and error handling match
    /// [`ApiClient::request`].
    pub async fn upload_file(
        &self,
        path: &str,
        file_name: impl Into<String>,
        bytes: Vec<u8>,
    ) -> Result<Payload> {
        let url = format!("{}{}", self.base_url, path);
        let part = Part::bytes(bytes).file_name(file_name.into());
        let form = Form::new().part("file", part);

        let mut req = self.http.post(&url).multipart(form);
        if let Some(token) = self.bearer_token() {
            req = req.bearer_auth(token);
        }

        self.execute(req, Method::POST, path, UPLOAD_FALLBACK).await
    }

    async fn execute(
        &self,
        req: reqwest::RequestBuilder,
        method: Method,
        path: &str,
        fallback: &str,
    ) -> Result<Payload> {
        let outcome = match req.send().await {
            Ok(response) => self.handle_response(response, fallback).await,
            Err(e) => Err(Error::Transport(e)),
        };
        if let Err(e) = &outcome {
            warn!(%method, path, error = %e, "request failed");
        }
        outcome
    }

    /// Normalize a response: body first, status second.
    ///
    /// The body is read and parsed before any status check so that error
    /// details survive into the failure message. JSON is detected from
    /// the content type, everything else stays raw text.
    async fn handle_response(&self, response: reqwest::Response, fallback: &str) -> Result<Payload> {
        let status = response.status();
        let is_json = response
            .headers()
            .get(header::CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .is_some_and(|v| v.contains("application/json"));

        let text = response.text().await?;
        let payload = if is_json {
            Payload::Json(serde_json::from_str(&text)?)
        } else {
            Payload::Text(text)
        };

        if status == StatusCode::UNAUTHORIZED {
            self.expire_session();
            return Err(Error::AuthExpired {
                message: SESSION_EXPIRED.to_string(),
            });
        }

        if !status.is_success() {
            return Err(Error::Api {
                status,
                message: error_message(&payload, fallback),
            });
        }

        Ok(payload)
    }
}

/// Server detail takes precedence, then a generic message, then the
/// caller's fallback. Non-string details (e.g. validation lists) are
/// surfaced as compact JSON.
fn error_message(payload: &Payload, fallback: &str) -> String {
    let Payload::Json(body) = payload else {
        return fallback.to_string();
    };
    for key in ["detail", "message"] {
        match body.get(key) {
            Some(Value::String(s)) if !s.is_empty() => return s.clone(),
            Some(Value::String(_)) | Some(Value::Null) | None => {},
            Some(other) => return other.to_string(),
        }
    }
    fallback.to_string()
}
