//! # HTTP リクエストハンドラ
//!
//! ## モジュール構成
//!
//! ```text
//! handler.rs          # 親モジュール（re-export）
//! └── handler/
//!     ├── fallback.rs # 未定義ルート（404）
//!     ├── health.rs   # ヘルスチェック
//!     └── posts.rs    # 投稿一覧ページ
//! ```

pub mod fallback;
pub mod health;
pub mod posts;

pub use fallback::not_found;
pub use health::health_check;
pub use posts::{PostsState, list_posts};
