//! # 未定義ルートのハンドラ

use axum::{Json, http::StatusCode, response::IntoResponse};
use postboard_shared::ErrorResponse;

/// ルーターに一致しないリクエストに 404 を返す
pub async fn not_found() -> impl IntoResponse {
   (
      StatusCode::NOT_FOUND,
      Json(ErrorResponse::not_found(
         "リクエストされたリソースは存在しません",
      )),
   )
}
