use serde::{Deserialize, Serialize};

use crate::stats::{Contributions, Highlights, LanguageStat, Stars, StatKind, TopRepo};

/// One row of the hosted `users` table, keyed by `username`.
///
/// Every stat is optional: a row is created at first sign-in with just the
/// profile fields, and the external aggregation job fills the stats in later.
/// The UI only renders what is present.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserRecord {
    pub username: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub full_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub highlights: Option<Highlights>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stars: Option<Stars>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub top_repos: Option<Vec<TopRepo>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub top_languages: Option<Vec<LanguageStat>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub contributions: Option<Contributions>,
    /// Stats the owner chose not to display.
    #[serde(default)]
    pub hidden: Vec<StatKind>,
}

impl UserRecord {
    /// A stub row holding only profile data, written at first sign-in.
    pub fn stub(
        username: impl Into<String>,
        full_name: Option<String>,
        avatar_url: Option<String>,
    ) -> Self {
        Self {
            username: username.into(),
            full_name,
            avatar_url,
            highlights: None,
            stars: None,
            top_repos: None,
            top_languages: None,
            contributions: None,
            hidden: Vec::new(),
        }
    }

    pub fn is_hidden(&self, stat: StatKind) -> bool {
        self.hidden.contains(&stat)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserializes_bare_row() {
        let record: UserRecord = serde_json::from_str(r#"{"username": "alice"}"#).unwrap();
        assert_eq!(record.username, "alice");
        assert!(record.stars.is_none());
        assert!(record.top_repos.is_none());
        assert!(record.hidden.is_empty());
    }

    #[test]
    fn deserializes_stored_row() {
        let record: UserRecord = serde_json::from_str(
            r#"{
                "username": "natfriedman",
                "fullName": "Nat Friedman",
                "avatarUrl": "https://avatars.githubusercontent.com/u/56260?v=4",
                "stars": {"given": 120, "received": 4512},
                "topRepos": [{
                    "name": "wrapped",
                    "nameWithOwner": "neat-run/wrapped",
                    "isPrivate": false,
                    "url": "https://github.com/neat-run/wrapped",
                    "avatarUrl": "https://avatars.githubusercontent.com/u/88086373?v=4",
                    "stars": 231,
                    "contributions": 118
                }],
                "hidden": ["topLanguages"]
            }"#,
        )
        .unwrap();
        assert_eq!(record.full_name.as_deref(), Some("Nat Friedman"));
        let stars = record.stars.unwrap();
        assert_eq!((stars.given, stars.received), (120, 4512));
        assert_eq!(record.top_repos.as_ref().unwrap()[0].contributions, 118);
        assert!(record.is_hidden(StatKind::TopLanguages));
        assert!(!record.is_hidden(StatKind::Stars));
    }

    #[test]
    fn stub_serializes_without_absent_stats() {
        let json = serde_json::to_value(UserRecord::stub("alice", None, None)).unwrap();
        let object = json.as_object().unwrap();
        assert!(object.contains_key("username"));
        assert!(!object.contains_key("stars"));
        assert!(!object.contains_key("topRepos"));
    }
}
