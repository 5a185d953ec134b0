mod github;
mod web;

use std::collections::HashSet;

use anyhow::{Context, Result};
use axum_extra::extract::cookie::Key;
use base64::Engine;
use tracing::warn;
use wrapped_backend::BackendClient;

use crate::github::GithubClient;
use crate::web::oauth::{AuthUserCache, GithubAuthConfig, OAuthScope};
use crate::web::WebState;

/// Where GitHub sends the user back after authorizing. Overridable for
/// anything that isn't the production origin.
fn redirect_url() -> String {
    std::env::var("OAUTH_REDIRECT_URL").unwrap_or_else(|_| {
        if cfg!(debug_assertions) {
            "http://localhost:8080/redirect".to_string()
        } else {
            "https://wrapped.run/redirect".to_string()
        }
    })
}

/// Private cookies need a stable key across restarts or every session drops.
fn cookie_key() -> Result<Key> {
    match std::env::var("COOKIE_KEY") {
        Ok(encoded) => {
            let bytes = base64::engine::general_purpose::STANDARD
                .decode(encoded)
                .context("COOKIE_KEY is not valid base64")?;
            Ok(Key::from(&bytes))
        }
        Err(_) => {
            warn!("COOKIE_KEY not set, generating an ephemeral key");
            Ok(Key::generate())
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt::init();
    let backend = BackendClient::new(
        &std::env::var("BACKEND_URL").context("BACKEND_URL environment variable not set")?,
        std::env::var("BACKEND_API_KEY").context("BACKEND_API_KEY environment variable not set")?,
    )?;
    let oauth_config = GithubAuthConfig::new(
        std::env::var("GITHUB_CLIENT_ID").context("GITHUB_CLIENT_ID environment variable not set")?,
        std::env::var("GITHUB_CLIENT_SECRET")
            .context("GITHUB_CLIENT_SECRET environment variable not set")?,
        redirect_url(),
        HashSet::from([OAuthScope::RepoStatus, OAuthScope::ReadUser]),
    );
    let web_state = WebState {
        backend,
        key: cookie_key()?,
        oauth_config,
        user_cache: AuthUserCache::new(),
        github: GithubClient::new(),
    };
    web::start_web(web_state).await;
    Ok(())
}
