mod stats;
mod user;

pub mod result;
pub mod user_data;

pub use stats::{
    Contributions, Highlights, LanguageStat, MonthlyCount, Stars, StatKind, TopRepo, UnknownStat,
};
pub use user::UserRecord;
