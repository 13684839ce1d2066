//! # 投稿データソースクライアント
//!
//! 外部の投稿コレクションからオフセット/リミット窓の範囲を取得する。
//!
//! ## エンドポイント
//!
//! - `GET {base_url}/posts?_start={offset}&_limit={limit}` - 投稿の JSON 配列
//!
//! リトライ・キャッシュは行わない。失敗は呼び出し側にそのまま伝播する。
//!
//! 呼び出し元リクエストの ID は [`PostQuery`] で明示的に受け取り、
//! `X-Request-Id` ヘッダーとしてデータソースに転送する。

use async_trait::async_trait;
use postboard_domain::{page_request::PageWindow, post::Post};
use postboard_shared::observability::REQUEST_ID_HEADER;
use thiserror::Error;

/// 投稿データソースのエラー
#[derive(Debug, Clone, Error)]
pub enum PostSourceError {
   /// ネットワークエラー（接続失敗、JSON デコード失敗を含む）
   #[error("ネットワークエラー: {0}")]
   Network(String),

   /// 予期しないエラー（2xx 以外のステータス）
   #[error("予期しないエラー: {0}")]
   Unexpected(String),
}

impl From<reqwest::Error> for PostSourceError {
   fn from(err: reqwest::Error) -> Self {
      PostSourceError::Network(err.to_string())
   }
}

/// データソースへの取得要求
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PostQuery {
   /// 取得する窓
   pub window:     PageWindow,
   /// 呼び出し元リクエストの ID
   pub request_id: Option<String>,
}

impl PostQuery {
   /// Request ID なしの取得要求を作成する
   pub fn new(window: PageWindow) -> Self {
      Self {
         window,
         request_id: None,
      }
   }

   /// 転送する Request ID を設定する
   pub fn with_request_id(mut self, request_id: impl Into<String>) -> Self {
      self.request_id = Some(request_id.into());
      self
   }
}

/// 投稿データソーストレイト
///
/// テスト時にスタブを使用できるようトレイトで定義。
#[async_trait]
pub trait PostSource: Send + Sync {
   /// 窓の範囲の投稿を取得する
   ///
   /// 範囲外の窓では空（または不足した）リストが返る。エラーにはならない。
   async fn fetch_posts(&self, query: &PostQuery) -> Result<Vec<Post>, PostSourceError>;
}

/// 投稿データソースクライアント実装
pub struct PostSourceClientImpl {
   base_url: String,
   client:   reqwest::Client,
}

impl PostSourceClientImpl {
   /// 新しいクライアントを作成する
   ///
   /// # 引数
   ///
   /// - `base_url`: データソースのベース URL（例: `https://jsonplaceholder.typicode.com`）
   pub fn new(base_url: &str) -> Self {
      Self {
         base_url: base_url.trim_end_matches('/').to_string(),
         client:   reqwest::Client::new(),
      }
   }

   /// 窓に対応するリクエスト URL を組み立てる
   fn posts_url(&self, window: PageWindow) -> String {
      format!(
         "{}/posts?_start={}&_limit={}",
         self.base_url,
         window.offset(),
         window.limit()
      )
   }

   /// 取得要求から GET リクエストを組み立てる
   fn build_request(&self, query: &PostQuery) -> reqwest::RequestBuilder {
      let builder = self.client.get(self.posts_url(query.window));
      match &query.request_id {
         Some(id) => builder.header(REQUEST_ID_HEADER, id),
         None => builder,
      }
   }
}

#[async_trait]
impl PostSource for PostSourceClientImpl {
   #[tracing::instrument(
      skip_all,
      fields(offset = query.window.offset(), limit = query.window.limit())
   )]
   async fn fetch_posts(&self, query: &PostQuery) -> Result<Vec<Post>, PostSourceError> {
      let response = self.build_request(query).send().await?;

      match response.status() {
         status if status.is_success() => {
            let posts = response.json::<Vec<Post>>().await?;
            tracing::debug!(count = posts.len(), "投稿を取得しました");
            Ok(posts)
         }
         status => {
            let body = response.text().await.unwrap_or_default();
            Err(PostSourceError::Unexpected(format!(
               "予期しないステータス {status}: {body}"
            )))
         }
      }
   }
}

#[cfg(test)]
mod tests {
   use postboard_domain::page_request::PageSize;
   use pretty_assertions::assert_eq;

   use super::*;

   #[test]
   fn test_urlに_startと_limitが含まれる() {
      let client = PostSourceClientImpl::new("http://localhost:9000");
      let window = PageWindow::for_page(13, PageSize::default());

      assert_eq!(
         client.posts_url(window),
         "http://localhost:9000/posts?_start=60&_limit=5"
      );
   }

   #[test]
   fn test_ベースurlの末尾スラッシュを除去する() {
      let client = PostSourceClientImpl::new("http://localhost:9000/");
      let window = PageWindow::for_page(1, PageSize::default());

      assert_eq!(
         client.posts_url(window),
         "http://localhost:9000/posts?_start=0&_limit=5"
      );
   }

   #[test]
   fn test_request_idをx_request_idヘッダーとして転送する() {
      let client = PostSourceClientImpl::new("http://localhost:9000");
      let query = PostQuery::new(PageWindow::for_page(2, PageSize::default()))
         .with_request_id("request-id-456");

      let request = client.build_request(&query).build().unwrap();

      assert_eq!(
         request.url().as_str(),
         "http://localhost:9000/posts?_start=5&_limit=5"
      );
      assert_eq!(
         request.headers().get("x-request-id").unwrap(),
         "request-id-456"
      );
   }

   #[test]
   fn test_request_idがなければヘッダーを付与しない() {
      let client = PostSourceClientImpl::new("http://localhost:9000");
      let query = PostQuery::new(PageWindow::for_page(1, PageSize::default()));

      let request = client.build_request(&query).build().unwrap();

      assert!(request.headers().get("x-request-id").is_none());
   }
}
