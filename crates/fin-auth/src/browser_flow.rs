//! Loopback redirect listener for browser-based OAuth.
//!
//! 1. Bind `tiny_http` on `127.0.0.1:0` (random port)
//! 2. Hand the provider `http://127.0.0.1:{port}/callback` as the continue URI
//! 3. Open the browser at the provider's auth URI
//! 4. Wait for the redirect (in `spawn_blocking`, `tiny_http::recv` blocks)
//!
//! The full redirect URL, query included, is what the identity provider needs
//! to finish the sign-in.

use std::borrow::Cow;
use std::sync::Arc;
use std::time::{Duration, Instant};

use crate::error::{AuthError, ProviderAuthError};

const CALLBACK_PATH: &str = "/callback";

/// Opens a URL for the user. Defaults to the system browser.
pub type BrowserLauncher = Arc<dyn Fn(&str) -> std::io::Result<()> + Send + Sync>;

#[must_use]
pub fn system_browser() -> BrowserLauncher {
    Arc::new(|url: &str| open::that(url))
}

/// A bound loopback server waiting for exactly one OAuth redirect.
pub struct RedirectListener {
    server: tiny_http::Server,
    port: u16,
}

impl RedirectListener {
    /// Bind on a random loopback port.
    ///
    /// # Errors
    ///
    /// Returns `AuthError::BrowserFlowFailed` if no port can be bound.
    pub fn bind() -> Result<Self, AuthError> {
        let server = tiny_http::Server::http("127.0.0.1:0")
            .map_err(|e| AuthError::BrowserFlowFailed(format!("failed to bind: {e}")))?;
        let port = server
            .server_addr()
            .to_ip()
            .map(|a| a.port())
            .ok_or_else(|| AuthError::BrowserFlowFailed("no port".into()))?;
        Ok(Self { server, port })
    }

    #[must_use]
    pub fn callback_url(&self) -> String {
        format!("http://127.0.0.1:{}{CALLBACK_PATH}", self.port)
    }

    /// Open `auth_uri` with `launcher` and wait for the redirect back.
    ///
    /// A launcher failure is logged, not fatal: the user can open the URL by hand.
    ///
    /// # Errors
    ///
    /// See [`wait`](Self::wait).
    pub async fn wait_in_browser(
        self,
        auth_uri: &str,
        launcher: &BrowserLauncher,
        timeout: Duration,
    ) -> Result<String, AuthError> {
        tracing::info!(url = %auth_uri, "opening browser for sign-in");
        if let Err(error) = launcher(auth_uri) {
            tracing::warn!(%error, url = %auth_uri, "failed to open browser; open the URL manually");
        }
        self.wait(timeout).await
    }

    /// Block until the redirect arrives and return its absolute URL.
    ///
    /// # Errors
    ///
    /// Returns `AuthError::BrowserFlowFailed` on timeout or a redirect without a
    /// query, and `AuthError::ProviderAuth` when the provider redirected back with
    /// an `error` parameter (the user denied access, for example).
    pub async fn wait(self, timeout: Duration) -> Result<String, AuthError> {
        let port = self.port;
        let path = tokio::task::spawn_blocking(move || wait_for_redirect(&self.server, timeout))
            .await
            .map_err(|e| AuthError::BrowserFlowFailed(format!("spawn_blocking join: {e}")))??;
        Ok(format!("http://127.0.0.1:{port}{path}"))
    }
}

/// Loop on `recv_timeout()` until a request hits the callback path.
///
/// Favicon and preflight requests get an empty 204 and are skipped.
fn wait_for_redirect(server: &tiny_http::Server, timeout: Duration) -> Result<String, AuthError> {
    let deadline = Instant::now() + timeout;
    let timed_out = || {
        AuthError::BrowserFlowFailed(format!(
            "browser redirect timed out after {}s",
            timeout.as_secs()
        ))
    };

    loop {
        let remaining = deadline.saturating_duration_since(Instant::now());
        if remaining.is_zero() {
            return Err(timed_out());
        }

        let request = match server.recv_timeout(remaining) {
            Ok(Some(request)) => request,
            Ok(None) => return Err(timed_out()),
            Err(e) => return Err(AuthError::BrowserFlowFailed(format!("recv error: {e}"))),
        };

        let url = request.url().to_string();
        let (path, query) = url.split_once('?').unwrap_or((url.as_str(), ""));
        if path != CALLBACK_PATH {
            let _ = request.respond(tiny_http::Response::from_string("").with_status_code(204));
            continue;
        }

        if query.is_empty() {
            let _ = request.respond(html_page("Sign-in failed", "The redirect carried no result."));
            return Err(AuthError::BrowserFlowFailed("no query string in redirect".into()));
        }

        if let Some(rejection) = redirect_error(query) {
            let _ = request.respond(html_page("Sign-in failed", "Check the terminal for details."));
            return Err(rejection.into());
        }

        let _ = request.respond(html_page("Signed in", "You can close this tab."));
        return Ok(url);
    }
}

/// Provider-reported failure carried in the redirect query, if any.
fn redirect_error(query: &str) -> Option<ProviderAuthError> {
    let mut code = None;
    let mut description = None;
    for pair in query.split('&') {
        let Some((key, value)) = pair.split_once('=') else {
            continue;
        };
        let spaced = value.replace('+', " ");
        let value = urlencoding::decode(&spaced).map_or_else(|_| spaced.clone(), Cow::into_owned);
        match key {
            "error" => code = Some(value),
            "error_description" => description = Some(value),
            _ => {}
        }
    }

    code.map(|code| {
        let message = description.unwrap_or_else(|| code.clone());
        ProviderAuthError::new(code.to_ascii_uppercase(), message)
    })
}

fn html_page(title: &str, detail: &str) -> tiny_http::Response<std::io::Cursor<Vec<u8>>> {
    let response = tiny_http::Response::from_string(format!(
        "<html><body><h1>{title}</h1><p>{detail}</p></body></html>"
    ));
    match tiny_http::Header::from_bytes("Content-Type", "text/html; charset=utf-8") {
        Ok(header) => response.with_header(header),
        Err(()) => response,
    }
}
