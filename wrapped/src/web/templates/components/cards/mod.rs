pub(crate) mod contributions;
pub(crate) mod highlights;
pub(crate) mod stars;
pub(crate) mod top_languages;
pub(crate) mod top_repos;

pub(crate) use contributions::ContributionsCard;
pub(crate) use highlights::HighlightsCard;
pub(crate) use stars::StarsCard;
pub(crate) use top_languages::TopLanguagesCard;
pub(crate) use top_repos::TopReposCard;

#[cfg(test)]
mod tests {
    use super::*;
    use maud::Render;
    use wrapped_api_types::{
        Contributions, Highlights, LanguageStat, MonthlyCount, Stars, StatKind, TopRepo, UserRecord,
    };

    fn full_record() -> UserRecord {
        UserRecord {
            username: "alice".to_string(),
            full_name: Some("Alice".to_string()),
            avatar_url: None,
            highlights: Some(Highlights {
                commits: 812,
                pull_requests: 44,
                issues: 12,
                reviews: 31,
            }),
            stars: Some(Stars {
                given: 120,
                received: 4512,
            }),
            top_repos: Some(vec![TopRepo {
                name: "wrapped".to_string(),
                name_with_owner: "neat-run/wrapped".to_string(),
                is_private: false,
                url: "https://github.com/neat-run/wrapped".to_string(),
                avatar_url: "https://avatars.githubusercontent.com/u/88086373?v=4".to_string(),
                stars: 231,
                contributions: 118,
            }]),
            top_languages: Some(vec![LanguageStat {
                name: "Rust".to_string(),
                percent: 61.5,
                color: "#dea584".to_string(),
            }]),
            contributions: Some(Contributions {
                total: 1337,
                months: vec![
                    MonthlyCount { month: 1, count: 80 },
                    MonthlyCount {
                        month: 2,
                        count: 120,
                    },
                ],
            }),
            hidden: Vec::new(),
        }
    }

    fn rendered(record: &UserRecord, stat: StatKind) -> String {
        let show_hide = false;
        let markup = match stat {
            StatKind::Highlights => HighlightsCard { record, show_hide }.render(),
            StatKind::Stars => StarsCard { record, show_hide }.render(),
            StatKind::TopRepos => TopReposCard { record, show_hide }.render(),
            StatKind::TopLanguages => TopLanguagesCard { record, show_hide }.render(),
            StatKind::Contributions => ContributionsCard { record, show_hide }.render(),
        };
        markup.into_string()
    }

    #[test]
    fn absent_stat_renders_nothing() {
        let record = UserRecord::stub("alice", None, None);
        for stat in StatKind::ALL {
            assert_eq!(rendered(&record, stat), "");
        }
    }

    #[test]
    fn hidden_stat_renders_nothing() {
        let mut record = full_record();
        record.hidden = StatKind::ALL.to_vec();
        for stat in StatKind::ALL {
            assert_eq!(rendered(&record, stat), "");
        }
    }

    #[test]
    fn visible_stat_shows_its_numbers() {
        let record = full_record();
        assert!(rendered(&record, StatKind::Highlights).contains("812"));
        assert!(rendered(&record, StatKind::Stars).contains("4512"));
        assert!(rendered(&record, StatKind::TopRepos).contains("neat-run/wrapped"));
        assert!(rendered(&record, StatKind::TopLanguages).contains("Rust"));
        assert!(rendered(&record, StatKind::Contributions).contains("1337"));
    }

    #[test]
    fn hide_button_is_owner_only() {
        let record = full_record();
        let owner_view = StarsCard {
            record: &record,
            show_hide: true,
        }
        .render()
        .into_string();
        assert!(owner_view.contains("/stats/hide/stars"));

        let public_view = StarsCard {
            record: &record,
            show_hide: false,
        }
        .render()
        .into_string();
        assert!(!public_view.contains("/stats/hide/"));
    }
}
