pub(crate) mod api;
pub mod error;
pub mod oauth;
mod social_preview;
mod subdomain;
mod templates;

use axum::body::Body;
use axum::extract::{FromRef, Path, State};
use axum::http::{header, HeaderValue, Response, StatusCode};
use axum::response::{IntoResponse, Redirect};
use axum::routing::{get, post};
use axum::Router;
use axum_extra::extract::cookie::Key;
use std::net::SocketAddr;
use tower_http::trace::TraceLayer;
use wrapped_api_types::StatKind;
use wrapped_backend::BackendClient;

use crate::github::GithubClient;

use self::error::WebError;
use self::oauth::{begin_login, logout, AuthGithubUser, AuthUserCache, GithubAuthConfig};
use self::subdomain::Subdomain;
use self::templates::page::RenderPage;
use self::templates::pages::home_page::HomePage;

/// The wrapped view: the subdomain's user on public views, otherwise the
/// signed-in user's own stats. Loaded fresh on every request.
async fn root(
    State(backend): State<BackendClient>,
    user: Option<AuthGithubUser>,
    Subdomain(subdomain): Subdomain,
) -> Result<RenderPage<HomePage>, WebError> {
    let mut record = None;
    let mut preview = None;
    if let Some(username) = &subdomain {
        match backend.get_user(username).await {
            Ok(row) => {
                preview = Some(backend.preview_url(username));
                record = Some(row);
            }
            // nothing wrapped for this subdomain yet, show the plain hero
            Err(wrapped_backend::Error::RowNotFound { .. }) => {}
            Err(e) => return Err(e.into()),
        }
    } else if let Some(user) = &user {
        match backend.get_user(&user.login).await {
            Ok(row) => record = Some(row),
            Err(wrapped_backend::Error::RowNotFound { .. }) => {}
            Err(e) => return Err(e.into()),
        }
    }
    Ok(RenderPage(HomePage {
        user,
        record,
        subdomain,
        preview,
    }))
}

async fn hide_stat(
    State(backend): State<BackendClient>,
    user: AuthGithubUser,
    Path(stat): Path<String>,
) -> Result<Redirect, WebError> {
    let stat: StatKind = stat.parse()?;
    let mut record = backend.get_user(&user.login).await?;
    if !record.hidden.contains(&stat) {
        record.hidden.push(stat);
        backend
            .update_column(&user.login, "hidden", serde_json::to_value(&record.hidden)?)
            .await?;
    }
    Ok(Redirect::to("/"))
}

async fn show_stat(
    State(backend): State<BackendClient>,
    user: AuthGithubUser,
    Path(stat): Path<String>,
) -> Result<Redirect, WebError> {
    let stat: StatKind = stat.parse()?;
    let mut record = backend.get_user(&user.login).await?;
    if record.hidden.contains(&stat) {
        record.hidden.retain(|hidden| *hidden != stat);
        backend
            .update_column(&user.login, "hidden", serde_json::to_value(&record.hidden)?)
            .await?;
    }
    Ok(Redirect::to("/"))
}

#[derive(Clone)]
pub(crate) struct WebState {
    pub(crate) backend: BackendClient,
    pub(crate) key: Key,
    pub(crate) oauth_config: GithubAuthConfig,
    pub(crate) user_cache: AuthUserCache,
    pub(crate) github: GithubClient,
}

impl FromRef<WebState> for BackendClient {
    fn from_ref(input: &WebState) -> Self {
        input.backend.clone()
    }
}

impl FromRef<WebState> for Key {
    fn from_ref(input: &WebState) -> Self {
        input.key.clone()
    }
}

impl FromRef<WebState> for GithubAuthConfig {
    fn from_ref(input: &WebState) -> Self {
        input.oauth_config.clone()
    }
}

impl FromRef<WebState> for AuthUserCache {
    fn from_ref(input: &WebState) -> Self {
        input.user_cache.clone()
    }
}

impl FromRef<WebState> for GithubClient {
    fn from_ref(input: &WebState) -> Self {
        input.github.clone()
    }
}

/// In release mode, return the files from a statically included dir
#[cfg(not(debug_assertions))]
fn get_static_file(path: &str) -> Option<&'static [u8]> {
    use include_dir::include_dir;
    static STATIC_DIR: include_dir::Dir = include_dir!("$CARGO_MANIFEST_DIR/static");
    let dir = &STATIC_DIR;
    let file = dir.get_file(path)?;
    Some(file.contents())
}

/// In debug mode, just load the files from disk
#[cfg(debug_assertions)]
fn get_static_file(path: &str) -> Option<Vec<u8>> {
    use std::{io::Read, path::PathBuf};

    let file = PathBuf::from("./wrapped/static").join(path);
    let mut file = std::fs::File::open(file).ok()?;
    let mut vec = Vec::new();
    file.read_to_end(&mut vec).ok()?;
    Some(vec)
}

async fn static_path(Path(path): Path<String>) -> impl IntoResponse {
    let path = path.trim_start_matches('/');
    let mime_type = mime_guess::from_path(path).first_or_text_plain();
    match get_static_file(path) {
        None => Response::builder()
            .status(StatusCode::NOT_FOUND)
            .body(Body::empty())
            .unwrap(),
        Some(file) => Response::builder()
            .status(StatusCode::OK)
            .header(
                header::CONTENT_TYPE,
                HeaderValue::from_str(mime_type.as_ref()).unwrap(),
            )
            .header(
                header::CACHE_CONTROL,
                #[cfg(not(debug_assertions))]
                HeaderValue::from_str("public, max-age=3600").unwrap(),
                #[cfg(debug_assertions)]
                HeaderValue::from_str("none").unwrap(),
            )
            .body(Body::from(file))
            .unwrap(),
    }
}

pub(crate) async fn start_web(state: WebState) {
    // build our application with a route
    let app = Router::new()
        .route("/", get(root))
        .route("/login", get(begin_login))
        .route("/redirect", get(self::oauth::redirect))
        .route("/logout", get(logout))
        .route("/stats/hide/:stat", get(hide_stat))
        .route("/stats/show/:stat", get(show_stat))
        .route("/preview/:username", get(social_preview::preview_card))
        .route("/api/user", get(api::current_user))
        .route("/api/users", post(api::upsert_stats))
        .route("/api/users/:username", get(api::get_stats))
        .route("/static/*path", get(static_path))
        .fallback(fallback)
        .layer(TraceLayer::new_for_http())
        .with_state(state);

    let port = std::env::var("PORT")
        .map(|p| p.parse::<u16>().ok())
        .ok()
        .flatten()
        .unwrap_or(8080);
    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    tracing::info!("listening on {}", addr);
    let listener = tokio::net::TcpListener::bind(addr).await.unwrap();
    axum::serve(listener, app).await.unwrap();
}

async fn fallback() -> (StatusCode, &'static str) {
    (StatusCode::NOT_FOUND, "Not found")
}
