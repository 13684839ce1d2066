//! # 投稿一覧ページハンドラ
//!
//! ## エンドポイント
//!
//! - `GET /` / `GET /posts` - 投稿一覧（`?page=N`、未指定・不正値は 1 ページ目）
//!
//! リクエストごとにデータを取得して HTML 全体をレンダリングする。
//! リクエスト間で共有する可変状態はない。

use std::sync::Arc;

use axum::{
   extract::{RawQuery, State},
   http::HeaderMap,
   response::Html,
};
use postboard_shared::observability::REQUEST_ID_HEADER;

use crate::{
   client::PostSource,
   error::WebError,
   query_params::QueryParams,
   render::PageRenderer,
   usecase::PageDataProvider,
};

/// 投稿一覧ページの共有状態
pub struct PostsState {
   pub provider: PageDataProvider,
   pub renderer: PageRenderer,
}

impl PostsState {
   /// データソースと総件数から状態を構築する
   pub fn new(source: Arc<dyn PostSource>, total_count: u64) -> Result<Self, WebError> {
      Ok(Self {
         provider: PageDataProvider::new(source, total_count),
         renderer: PageRenderer::new()?,
      })
   }
}

/// GET /posts
///
/// クエリの `page` から 1 ページ分の投稿を取得し、ページネーション付きの HTML を返す。
/// `SetRequestIdLayer` が設定した `X-Request-Id` はデータソースへの要求に引き継ぐ。
#[tracing::instrument(skip_all)]
pub async fn list_posts(
   State(state): State<Arc<PostsState>>,
   headers: HeaderMap,
   RawQuery(query): RawQuery,
) -> Result<Html<String>, WebError> {
   let params = QueryParams::parse(query.as_deref());
   let request_id = headers
      .get(REQUEST_ID_HEADER)
      .and_then(|value| value.to_str().ok());

   let view = state.provider.fetch_page(params.page(), request_id).await?;
   let html = state.renderer.render(&view, &params)?;

   Ok(Html(html))
}
