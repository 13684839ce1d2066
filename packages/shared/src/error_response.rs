//! # 失敗時の JSON 本文
//!
//! 投稿一覧ページを HTML で返せなかったときの本文を RFC 9457 Problem Details
//! 形式で表す。`type` は `https://postboard.example.com/errors/{種別}`。
//!
//! | 種別 | status | 用途 |
//! |------|--------|------|
//! | `not-found` | 404 | ルーターに一致しないパス |
//! | `internal-error` | 500 | テンプレートのレンダリング失敗 |
//! | `bad-gateway` | 502 | 投稿データソースからの取得失敗 |
//!
//! HTTP レスポンスへの変換は Web 側で行い、この型は axum に依存しない。

use serde::{Deserialize, Serialize};

/// error_type URI のベースパス
const ERROR_TYPE_BASE: &str = "https://postboard.example.com/errors";

/// エラーレスポンス（RFC 9457 Problem Details）
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorResponse {
   #[serde(rename = "type")]
   pub error_type: String,
   pub title:      String,
   pub status:     u16,
   pub detail:     String,
}

impl ErrorResponse {
   /// 種別・タイトル・ステータス・詳細から本文を組み立てる
   pub fn new(
      error_type_suffix: &str,
      title: impl Into<String>,
      status: u16,
      detail: impl Into<String>,
   ) -> Self {
      Self {
         error_type: format!("{ERROR_TYPE_BASE}/{error_type_suffix}"),
         title: title.into(),
         status,
         detail: detail.into(),
      }
   }

   /// 404 Not Found
   pub fn not_found(detail: impl Into<String>) -> Self {
      Self::new("not-found", "Not Found", 404, detail)
   }

   /// 500 Internal Server Error
   ///
   /// detail は固定値（内部情報を漏らさないため）。
   pub fn internal_error() -> Self {
      Self::new(
         "internal-error",
         "Internal Server Error",
         500,
         "内部エラーが発生しました",
      )
   }

   /// 502 Bad Gateway
   ///
   /// 外部データソースとの通信失敗を表す。detail は固定値。
   pub fn bad_gateway() -> Self {
      Self::new(
         "bad-gateway",
         "Bad Gateway",
         502,
         "データソースからの取得に失敗しました",
      )
   }
}
