//! # アプリケーション構築
//!
//! State 注入とルーター構築を担当する。
//! `main.rs` は設定読み込みとサーバー起動に集中する。

use std::sync::Arc;

use axum::{
   Router,
   http::{HeaderValue, header},
   routing::get,
};
use postboard_shared::observability::{MakeRequestUuidV7, make_request_span};
use tower_http::{
   request_id::{PropagateRequestIdLayer, SetRequestIdLayer},
   set_header::SetResponseHeaderLayer,
   trace::TraceLayer,
};

use crate::handler::{PostsState, health_check, list_posts, not_found};

/// ルーターを構築する
///
/// レイヤー順序は下に書いたものが外側:
///
/// 1. `SetRequestIdLayer`（最外）: UUID v7 を生成（またはクライアント提供値を使用）
/// 2. `TraceLayer`: スパンに request_id を含め、全ログに自動注入
/// 3. `PropagateRequestIdLayer`: レスポンスヘッダーに `X-Request-Id` をコピー
/// 4. `SetResponseHeaderLayer`: 全レスポンスに `Cache-Control: no-store`
///
/// データソースへの `X-Request-Id` の引き継ぎは `list_posts` がリクエストヘッダーから行う。
pub fn build_app(posts_state: Arc<PostsState>) -> Router {
   Router::new()
      .route("/", get(list_posts))
      .route("/posts", get(list_posts))
      .with_state(posts_state)
      .route("/health", get(health_check))
      .fallback(not_found)
      .layer(SetResponseHeaderLayer::overriding(
         header::CACHE_CONTROL,
         HeaderValue::from_static("no-store"),
      ))
      .layer(PropagateRequestIdLayer::x_request_id())
      .layer(TraceLayer::new_for_http().make_span_with(make_request_span))
      .layer(SetRequestIdLayer::x_request_id(MakeRequestUuidV7))
}
