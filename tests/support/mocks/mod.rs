//! テストサポートモック再エクスポートモジュール
#![allow(dead_code)]
#![allow(unused_imports)]

pub mod article_repos;
pub mod security;
pub mod time;
pub mod user_repo;
pub mod util;

/* -------------------------------- 時刻 -------------------------------- */
pub use time::fixed_now;

/* -------------------------------- セキュリティ -------------------------------- */
pub use security::{
    ADMIN_TOKEN, AUTHOR_TOKEN, DummyTokenManager, EXPIRED_TOKEN, NO_ROLE_TOKEN,
    OTHER_AUTHOR_TOKEN, StrictPasswordHasher,
};

/* -------------------------------- ユーティリティ -------------------------------- */
pub use util::{DummyClock, FIXED_SUFFIX, FixedSuffixSlug, TickingClock};

/* -------------------------------- リポジトリ -------------------------------- */
pub use article_repos::InMemoryArticleStore;
pub use user_repo::InMemoryUserRepo;
