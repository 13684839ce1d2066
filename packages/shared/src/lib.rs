//! # Postboard 共有ユーティリティ
//!
//! ## 設計方針
//!
//! - 他のすべてのクレート（domain, web）から依存されうる
//! - ビジネスロジックを含まない純粋なユーティリティのみを配置
//! - tracing-subscriber / tower-http への依存は `observability` feature の背後に置く

pub mod error_response;
pub mod health;
pub mod observability;

pub use error_response::ErrorResponse;
pub use health::HealthResponse;
