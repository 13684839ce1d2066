//! 統合テスト用の共通ヘルパー
//!
//! データソースのスタブと、ルーターへのリクエスト送信を提供する。

#![allow(dead_code)]

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use axum::{Router, body::Body, http::Request, response::Response};
use postboard_domain::{page_request::PageWindow, post::Post};
use postboard_web::{
   app_builder::build_app,
   client::{PostQuery, PostSource, PostSourceError},
   handler::PostsState,
};
use tower::ServiceExt;

/// 総件数 `total` の連番投稿を持つデータソーススタブ
///
/// 受け取った要求を記録する。
pub struct StubPostSource {
   total:   u64,
   queries: Mutex<Vec<PostQuery>>,
}

impl StubPostSource {
   pub fn new(total: u64) -> Self {
      Self {
         total,
         queries: Mutex::new(Vec::new()),
      }
   }

   /// 受け取った窓
   pub fn recorded(&self) -> Vec<PageWindow> {
      self.queries.lock().unwrap().iter().map(|q| q.window).collect()
   }

   /// 受け取った Request ID
   pub fn request_ids(&self) -> Vec<Option<String>> {
      self
         .queries
         .lock()
         .unwrap()
         .iter()
         .map(|q| q.request_id.clone())
         .collect()
   }
}

#[async_trait]
impl PostSource for StubPostSource {
   async fn fetch_posts(&self, query: &PostQuery) -> Result<Vec<Post>, PostSourceError> {
      self.queries.lock().unwrap().push(query.clone());
      Ok(make_posts(self.total, query.window))
   }
}

/// 常に失敗するデータソーススタブ
pub struct FailingPostSource;

#[async_trait]
impl PostSource for FailingPostSource {
   async fn fetch_posts(&self, _query: &PostQuery) -> Result<Vec<Post>, PostSourceError> {
      Err(PostSourceError::Network("connection refused".to_string()))
   }
}

/// 総件数 `total` のコレクションから窓の範囲の投稿を切り出す
pub fn make_posts(total: u64, window: PageWindow) -> Vec<Post> {
   let start = window.offset();
   let end = (start + u64::from(window.limit())).min(total);
   (start..end)
      .map(|index| {
         let id = i64::try_from(index + 1).unwrap();
         Post {
            user_id: (id - 1) / 10 + 1,
            id,
            title: format!("post title {id}"),
            body: format!("post body {id}"),
         }
      })
      .collect()
}

/// データソースを差し替えたルーターを構築する（総件数 100）
pub fn app_with(source: Arc<dyn PostSource>) -> Router {
   build_app(Arc::new(PostsState::new(source, 100).unwrap()))
}

/// GET リクエストを送信する
pub async fn get(app: Router, uri: &str) -> Response {
   app.oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
      .await
      .unwrap()
}

/// レスポンスボディを文字列として読み出す
pub async fn body_string(response: Response) -> String {
   let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
      .await
      .unwrap();
   String::from_utf8(bytes.to_vec()).unwrap()
}
