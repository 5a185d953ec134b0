use std::fmt::{self, Display, Formatter};
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Commit/PR/issue/review counts for the year.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Highlights {
    pub commits: u32,
    pub pull_requests: u32,
    pub issues: u32,
    pub reviews: u32,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Stars {
    /// Stars this user handed out.
    pub given: u32,
    /// Stars received across their repositories.
    pub received: u32,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TopRepo {
    pub name: String,
    pub name_with_owner: String,
    pub is_private: bool,
    pub url: String,
    pub avatar_url: String,
    pub stars: u32,
    pub contributions: u32,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LanguageStat {
    pub name: String,
    pub percent: f32,
    /// Hex color used for the language's bar, e.g. `#dea584`.
    pub color: String,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Contributions {
    pub total: u32,
    pub months: Vec<MonthlyCount>,
}

/// `month` is 1-based (1 = January).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MonthlyCount {
    pub month: u8,
    pub count: u32,
}

/// The hideable stats. Serde names match the column names stored in the
/// row's `hidden` array and used in the toggle routes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum StatKind {
    #[serde(rename = "highlights")]
    Highlights,
    #[serde(rename = "stars")]
    Stars,
    #[serde(rename = "topRepos")]
    TopRepos,
    #[serde(rename = "topLanguages")]
    TopLanguages,
    #[serde(rename = "contributions")]
    Contributions,
}

impl StatKind {
    pub const ALL: [StatKind; 5] = [
        StatKind::Highlights,
        StatKind::Stars,
        StatKind::TopRepos,
        StatKind::TopLanguages,
        StatKind::Contributions,
    ];

    pub fn column_name(&self) -> &'static str {
        match self {
            StatKind::Highlights => "highlights",
            StatKind::Stars => "stars",
            StatKind::TopRepos => "topRepos",
            StatKind::TopLanguages => "topLanguages",
            StatKind::Contributions => "contributions",
        }
    }
}

impl Display for StatKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.column_name())
    }
}

#[derive(Debug, Error)]
#[error("unknown stat `{0}`")]
pub struct UnknownStat(pub String);

impl FromStr for StatKind {
    type Err = UnknownStat;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        StatKind::ALL
            .into_iter()
            .find(|kind| kind.column_name() == s)
            .ok_or_else(|| UnknownStat(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stat_kind_round_trips_through_column_name() {
        for kind in StatKind::ALL {
            assert_eq!(kind.column_name().parse::<StatKind>().unwrap(), kind);
        }
    }

    #[test]
    fn stat_kind_serde_matches_column_name() {
        for kind in StatKind::ALL {
            let json = serde_json::to_string(&kind).unwrap();
            assert_eq!(json, format!("\"{}\"", kind.column_name()));
        }
    }

    #[test]
    fn unknown_stat_is_rejected() {
        assert!("commitStreak".parse::<StatKind>().is_err());
        assert!("".parse::<StatKind>().is_err());
    }
}
