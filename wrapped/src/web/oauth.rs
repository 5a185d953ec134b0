use async_trait::async_trait;
use axum::{
    extract::{FromRef, FromRequestParts, Query, State},
    http::request::Parts,
    response::Redirect,
};
use axum_extra::extract::{
    cookie::{Cookie, Key, SameSite},
    PrivateCookieJar,
};
use oauth2::{
    basic::BasicClient, AuthUrl, AuthorizationCode, ClientId, ClientSecret, CsrfToken, RedirectUrl,
    Scope, TokenResponse, TokenUrl,
};
use serde::Deserialize;
use std::collections::{HashMap, HashSet};
use std::fmt;
use std::fmt::{Display, Formatter};
use std::sync::Arc;
use tokio::sync::RwLock;
use wrapped_api_types::UserRecord;
use wrapped_backend::BackendClient;

use crate::github::GithubClient;

use super::error::{ApiError, WebError};

pub(crate) const GITHUB_AUTH_COOKIE: &str = "github_auth";
const STATE_COOKIE: &str = "oauth_state";

/// GitHub OAuth scopes this app may request.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash)]
pub enum OAuthScope {
    /// read-only access to commit statuses, private repos included
    RepoStatus,
    /// read a user's profile data
    ReadUser,
    /// read a user's email addresses
    UserEmail,
    /// access to public repositories
    PublicRepo,
    /// read-only access to organization membership
    ReadOrg,
    /// read a user's notifications
    Notifications,
}

impl OAuthScope {
    fn as_str(&self) -> &'static str {
        match self {
            OAuthScope::RepoStatus => "repo:status",
            OAuthScope::ReadUser => "read:user",
            OAuthScope::UserEmail => "user:email",
            OAuthScope::PublicRepo => "public_repo",
            OAuthScope::ReadOrg => "read:org",
            OAuthScope::Notifications => "notifications",
        }
    }
}

impl Display for OAuthScope {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

pub(crate) async fn begin_login(
    cookies: PrivateCookieJar,
    State(config): State<GithubAuthConfig>,
) -> (PrivateCookieJar, Redirect) {
    let mut request = config.inner.client.authorize_url(CsrfToken::new_random);
    for scope in &config.inner.scopes {
        request = request.add_scope(Scope::new(scope.to_string()));
    }
    let (url, csrf_token) = request.url();

    // Lax, not Strict: the cookie must survive the cross-site redirect back
    let cookies = cookies.add(
        Cookie::build((STATE_COOKIE, csrf_token.secret().clone()))
            .same_site(SameSite::Lax)
            .secure(true)
            .build(),
    );

    (cookies, Redirect::to(url.as_str()))
}

#[derive(Deserialize)]
pub(crate) struct RedirectParameters {
    code: String,
    state: String,
}

pub(crate) async fn redirect(
    mut cookies: PrivateCookieJar,
    State(config): State<GithubAuthConfig>,
    Query(RedirectParameters { code, state }): Query<RedirectParameters>,
) -> Result<(PrivateCookieJar, Redirect), WebError> {
    let expected_state = cookies
        .get(STATE_COOKIE)
        .map(|cookie| cookie.value().to_string());
    if let Some(state_cookie) = cookies.get(STATE_COOKIE) {
        cookies = cookies.remove(state_cookie);
    }
    if expected_state.as_deref() != Some(state.as_str()) {
        return Err(WebError::StateMismatch);
    }
    let token = config
        .inner
        .client
        .exchange_code(AuthorizationCode::new(code))
        .request_async(oauth2::reqwest::async_http_client)
        .await?
        .access_token()
        .secret()
        .clone();
    // store the token into a cookie
    let mut cookie = Cookie::new(GITHUB_AUTH_COOKIE, token);
    cookie.set_secure(true);
    cookie.set_same_site(SameSite::Lax);
    cookie.make_permanent();
    cookies = cookies.add(cookie);
    Ok((cookies, Redirect::to("/")))
}

/// GitHub tokens have no standard revocation endpoint, so signing out means
/// dropping the cookie and forgetting the cached user.
pub(crate) async fn logout(
    cookie_jar: PrivateCookieJar,
    State(cache): State<AuthUserCache>,
) -> Result<(PrivateCookieJar, Redirect), WebError> {
    let cookie = cookie_jar
        .get(GITHUB_AUTH_COOKIE)
        .ok_or(WebError::NotAuthenticated)?;
    cache.remove_token(cookie.value()).await;
    let cookie_jar = cookie_jar.remove(cookie);
    Ok((cookie_jar, Redirect::to("/")))
}

/// Maps access tokens to resolved users so the GitHub API is only hit once
/// per session.
#[derive(Debug, Clone)]
pub struct AuthUserCache {
    users: Arc<RwLock<HashMap<String, AuthGithubUser>>>,
}

impl AuthUserCache {
    pub fn new() -> Self {
        Self {
            users: Arc::default(),
        }
    }

    async fn store_user(&self, token: &str, user: AuthGithubUser) {
        let mut users = self.users.write().await;
        users.insert(token.to_string(), user);
    }

    async fn get_user(&self, token: &str) -> Option<AuthGithubUser> {
        let users = self.users.read().await;
        users.get(token).cloned()
    }

    pub(crate) async fn remove_token(&self, token: &str) {
        let mut users = self.users.write().await;
        users.remove(token);
    }
}

/// The signed-in GitHub user. Extracting this requires a valid auth cookie;
/// handlers that work for anonymous visitors take `Option<AuthGithubUser>`.
#[derive(Debug, Clone)]
pub struct AuthGithubUser {
    pub(crate) id: u64,
    pub(crate) login: String,
    pub(crate) name: Option<String>,
    pub(crate) avatar_url: String,
}

impl AuthGithubUser {
    pub(crate) fn display_name(&self) -> &str {
        self.name.as_deref().unwrap_or(&self.login)
    }
}

#[async_trait]
impl<S> FromRequestParts<S> for AuthGithubUser
where
    S: Send + Sync,
    Key: FromRef<S>,
    BackendClient: FromRef<S>,
    GithubClient: FromRef<S>,
    AuthUserCache: FromRef<S>,
{
    type Rejection = ApiError;
    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let cookie_jar: PrivateCookieJar<Key> = PrivateCookieJar::from_request_parts(parts, state)
            .await
            .unwrap();
        let auth_cookie = cookie_jar
            .get(GITHUB_AUTH_COOKIE)
            .ok_or(ApiError::NotAuthenticated)?;
        let State(backend): State<BackendClient> =
            State::from_request_parts(parts, state).await.unwrap();
        let State(user_cache): State<AuthUserCache> =
            State::from_request_parts(parts, state).await.unwrap();
        let State(github): State<GithubClient> =
            State::from_request_parts(parts, state).await.unwrap();

        if let Some(user) = user_cache.get_user(auth_cookie.value()).await {
            return Ok(user);
        }

        let user = github
            .current_user(auth_cookie.value())
            .await
            .map_err(|_| ApiError::TokenInvalid)?;
        let user = AuthGithubUser {
            id: user.id,
            login: user.login,
            name: user.name,
            avatar_url: user.avatar_url,
        };
        ensure_user_row(&backend, &user).await?;
        user_cache
            .store_user(auth_cookie.value(), user.clone())
            .await;
        Ok(user)
    }
}

/// First sign-in writes a stub row so the aggregation job has a keyed row to
/// fill in later.
async fn ensure_user_row(
    backend: &BackendClient,
    user: &AuthGithubUser,
) -> Result<(), wrapped_backend::Error> {
    match backend.get_user(&user.login).await {
        Ok(_) => Ok(()),
        Err(wrapped_backend::Error::RowNotFound { .. }) => {
            let stub =
                UserRecord::stub(&user.login, user.name.clone(), Some(user.avatar_url.clone()));
            backend.upsert_user(&stub).await.map(|_| ())
        }
        Err(e) => Err(e),
    }
}

#[derive(Clone)]
pub struct GithubAuthConfig {
    inner: Arc<GithubAuthConfigImpl>,
}

/// Provides authentication params
#[derive(Debug)]
struct GithubAuthConfigImpl {
    pub scopes: HashSet<OAuthScope>,
    pub client: BasicClient,
}

impl GithubAuthConfig {
    pub fn new(
        client_id: String,
        client_secret: String,
        redirect_url: String,
        scopes: HashSet<OAuthScope>,
    ) -> Self {
        let client = BasicClient::new(
            ClientId::new(client_id),
            Some(ClientSecret::new(client_secret)),
            AuthUrl::new("https://github.com/login/oauth/authorize".to_string())
                .expect("Failed to parse url"),
            Some(
                TokenUrl::new("https://github.com/login/oauth/access_token".to_string())
                    .expect("Failed to parse token url"),
            ),
        )
        .set_redirect_uri(
            RedirectUrl::new(redirect_url.clone())
                .unwrap_or_else(|_| panic!("Failed to parse redirect URL {}", redirect_url)),
        );
        Self {
            inner: Arc::new(GithubAuthConfigImpl { scopes, client }),
        }
    }
}
