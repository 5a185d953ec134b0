//! Client for the hosted backend: row operations against the REST data API
//! and PNG uploads against the storage API. The backend owns the schema and
//! row-level security; this crate only issues requests and maps failures.

use reqwest::{header, Client, StatusCode, Url};
use serde_json::Value;
use thiserror::Error;
use tracing::info;
use wrapped_api_types::UserRecord;

/// Storage bucket holding the generated social preview images.
pub const PREVIEW_BUCKET: &str = "link-previews";

const USERS_TABLE: &str = "users";

#[derive(Error, Debug)]
pub enum Error {
    #[error("URL parse error: {0}")]
    UrlParseError(#[from] url::ParseError),
    #[error("HTTP error: {0}")]
    HttpError(#[from] reqwest::Error),
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),
    #[error("no stored row for `{username}`")]
    RowNotFound { username: String },
    #[error("backend returned {status}: {message}")]
    ApiError { status: u16, message: String },
}

/// Handle to the hosted backend. Cheap to clone; the inner reqwest client is
/// reference counted.
#[derive(Clone, Debug)]
pub struct BackendClient {
    client: Client,
    base_url: Url,
    api_key: String,
}

impl BackendClient {
    pub fn new(base_url: &str, api_key: impl ToString) -> Result<Self, Error> {
        // A trailing slash keeps Url::join from eating the last path segment.
        let base_url = if base_url.ends_with('/') {
            Url::parse(base_url)?
        } else {
            Url::parse(&format!("{base_url}/"))?
        };
        Ok(Self {
            client: Client::new(),
            base_url,
            api_key: api_key.to_string(),
        })
    }

    /// Create or update a row, merging on the `username` key. Repeating the
    /// same payload yields the same stored row.
    pub async fn upsert_user(&self, record: &UserRecord) -> Result<UserRecord, Error> {
        let mut url = self.table_url()?;
        url.query_pairs_mut().append_pair("on_conflict", "username");
        info!("upserting row for {}", record.username);
        let response = self
            .client
            .post(url)
            .header("apikey", &self.api_key)
            .bearer_auth(&self.api_key)
            .header("Prefer", "resolution=merge-duplicates,return=representation")
            .json(record)
            .send()
            .await?;
        let response = Self::check_status(response).await?;
        let mut rows: Vec<UserRecord> = response.json().await?;
        rows.pop().ok_or_else(|| Error::RowNotFound {
            username: record.username.clone(),
        })
    }

    /// Fetch the single row where `column` equals `value`. The single-object
    /// accept header makes the backend reject anything but exactly one match.
    pub async fn fetch_row(&self, column: &str, value: &str) -> Result<UserRecord, Error> {
        let url = self.single_row_url(column, value)?;
        info!("fetching row {column}={value}");
        let response = self
            .client
            .get(url)
            .header("apikey", &self.api_key)
            .bearer_auth(&self.api_key)
            .header(header::ACCEPT, "application/vnd.pgrst.object+json")
            .send()
            .await?;
        if response.status() == StatusCode::NOT_ACCEPTABLE {
            return Err(Error::RowNotFound {
                username: value.to_string(),
            });
        }
        let response = Self::check_status(response).await?;
        Ok(response.json().await?)
    }

    pub async fn get_user(&self, username: &str) -> Result<UserRecord, Error> {
        self.fetch_row("username", username).await
    }

    /// Set one column of the row keyed by `username`.
    pub async fn update_column(
        &self,
        username: &str,
        column: &str,
        value: Value,
    ) -> Result<UserRecord, Error> {
        let mut url = self.table_url()?;
        url.query_pairs_mut()
            .append_pair("username", &format!("eq.{username}"));
        info!("updating {column} for {username}");
        let response = self
            .client
            .patch(url)
            .header("apikey", &self.api_key)
            .bearer_auth(&self.api_key)
            .header("Prefer", "return=representation")
            .json(&Value::Object([(column.to_string(), value)].into_iter().collect()))
            .send()
            .await?;
        let response = Self::check_status(response).await?;
        let mut rows: Vec<UserRecord> = response.json().await?;
        rows.pop().ok_or_else(|| Error::RowNotFound {
            username: username.to_string(),
        })
    }

    /// Upload a social preview PNG, overwriting any previous one. Served with
    /// a short cache lifetime so regenerated cards show up quickly.
    pub async fn upload_preview(&self, username: &str, png: Vec<u8>) -> Result<(), Error> {
        let url = self.base_url.join(&format!(
            "storage/v1/object/{PREVIEW_BUCKET}/{}",
            Self::object_path(username)
        ))?;
        info!("uploading preview for {username}");
        let response = self
            .client
            .post(url)
            .header("apikey", &self.api_key)
            .bearer_auth(&self.api_key)
            .header(header::CONTENT_TYPE, "image/png")
            .header(header::CACHE_CONTROL, "3600")
            .header("x-upsert", "true")
            .body(png)
            .send()
            .await?;
        Self::check_status(response).await?;
        Ok(())
    }

    /// Public URL of the stored preview image. Pure construction; the object
    /// may or may not exist yet.
    pub fn preview_url(&self, username: &str) -> String {
        format!(
            "{}storage/v1/object/public/{PREVIEW_BUCKET}/{}",
            self.base_url,
            Self::object_path(username)
        )
    }

    fn object_path(username: &str) -> String {
        format!("public/{username}.png")
    }

    fn table_url(&self) -> Result<Url, Error> {
        Ok(self.base_url.join(&format!("rest/v1/{USERS_TABLE}"))?)
    }

    fn single_row_url(&self, column: &str, value: &str) -> Result<Url, Error> {
        let mut url = self.table_url()?;
        url.query_pairs_mut()
            .append_pair(column, &format!("eq.{value}"))
            .append_pair("limit", "1");
        Ok(url)
    }

    async fn check_status(response: reqwest::Response) -> Result<reqwest::Response, Error> {
        let status = response.status();
        if status.is_success() {
            Ok(response)
        } else {
            Err(Error::ApiError {
                status: status.as_u16(),
                message: response.text().await?,
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client() -> BackendClient {
        BackendClient::new("https://example.supabase.co", "anon-key").unwrap()
    }

    #[test]
    fn single_row_url_matches_backend_shape() {
        let url = client().single_row_url("username", "natfriedman").unwrap();
        assert_eq!(
            url.as_str(),
            "https://example.supabase.co/rest/v1/users?username=eq.natfriedman&limit=1"
        );
    }

    #[test]
    fn base_url_trailing_slash_is_normalized() {
        let with = BackendClient::new("https://example.supabase.co/", "k").unwrap();
        let without = BackendClient::new("https://example.supabase.co", "k").unwrap();
        assert_eq!(with.table_url().unwrap(), without.table_url().unwrap());
    }

    #[test]
    fn preview_url_points_at_public_object() {
        assert_eq!(
            client().preview_url("alice"),
            "https://example.supabase.co/storage/v1/object/public/link-previews/public/alice.png"
        );
    }
}
