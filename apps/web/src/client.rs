//! # 外部 API クライアント
//!
//! 投稿データソースへの通信を担当する。

pub mod post_source;

pub use post_source::{PostQuery, PostSource, PostSourceClientImpl, PostSourceError};
