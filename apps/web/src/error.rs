//! # Web エラーハンドリング
//!
//! ハンドラで発生するエラーの定義と、axum レスポンスへの変換。
//!
//! データソースの失敗はその場で回復せず、汎用の失敗レスポンスとして返す。
//! 内部の詳細はログにのみ出力し、レスポンスには固定の detail を載せる。

use axum::{
   Json,
   http::StatusCode,
   response::{IntoResponse, Response},
};
use postboard_shared::ErrorResponse;
use thiserror::Error;

use crate::client::PostSourceError;

/// Web 層で発生するエラー
///
/// `IntoResponse` を実装しているため、axum が自動的に HTTP レスポンスに変換する。
#[derive(Debug, Error)]
pub enum WebError {
   /// データソースへの通信エラー（502 Bad Gateway）
   #[error("データソースからの取得に失敗しました: {0}")]
   Upstream(#[from] PostSourceError),

   /// テンプレートのレンダリングエラー（500 Internal Server Error）
   #[error("テンプレートのレンダリングに失敗しました: {0}")]
   Render(#[from] tera::Error),
}

impl IntoResponse for WebError {
   fn into_response(self) -> Response {
      let (status, body) = match &self {
         WebError::Upstream(e) => {
            tracing::error!(
               error.category = "external_service",
               error.kind = "post_source",
               "データソースからの取得に失敗: {e}"
            );
            (StatusCode::BAD_GATEWAY, ErrorResponse::bad_gateway())
         }
         WebError::Render(e) => {
            // セキュリティ: 内部エラー詳細はログのみ
            tracing::error!(
               error.category = "internal",
               error.kind = "template",
               "レンダリングに失敗: {e:?}"
            );
            (
               StatusCode::INTERNAL_SERVER_ERROR,
               ErrorResponse::internal_error(),
            )
         }
      };

      (status, Json(body)).into_response()
   }
}
