pub(crate) mod user;

pub(crate) use user::{current_user, get_stats, upsert_stats};
