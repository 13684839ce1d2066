//! # ページデータプロバイダ
//!
//! 要求されたページ番号から窓を計算し、外部データソースから 1 ページ分の投稿を取得して
//! ビューモデル（投稿 + メタデータ + ページネーション状態）を組み立てる。
//!
//! 外部への読み取りリクエスト 1 回以外の副作用はない。

use std::sync::Arc;

use postboard_domain::{
   page_meta::PageMetadata,
   page_request::{PageSize, PageWindow, effective_page, total_pages},
   pagination::PaginationState,
   post::Post,
};

use crate::client::{PostQuery, PostSource, PostSourceError};

/// 1 リクエスト分のビューモデル
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageView {
   pub posts:      Vec<Post>,
   pub meta:       PageMetadata,
   pub pagination: PaginationState,
}

/// ページデータプロバイダ
pub struct PageDataProvider {
   source:      Arc<dyn PostSource>,
   page_size:   PageSize,
   total_count: u64,
}

impl PageDataProvider {
   /// 総件数を指定してプロバイダを作成する
   ///
   /// 総件数は外部ソースの実件数ではなく設定値（デフォルト 100 件）。
   pub fn new(source: Arc<dyn PostSource>, total_count: u64) -> Self {
      Self {
         source,
         page_size: PageSize::default(),
         total_count,
      }
   }

   /// 要求されたページのビューモデルを組み立てる
   ///
   /// `requested_page` はクエリパラメータの生の値。正の整数でなければ 1 ページ目になる。
   /// 総ページ数を超えるページも拒否しない。データソースの失敗はそのまま返す。
   /// `request_id` があればデータソースへの要求に添える。
   pub async fn fetch_page(
      &self,
      requested_page: Option<&str>,
      request_id: Option<&str>,
   ) -> Result<PageView, PostSourceError> {
      let page = effective_page(requested_page);
      let window = PageWindow::for_page(page, self.page_size);
      let total_pages = total_pages(self.total_count, self.page_size);

      tracing::debug!(
         page,
         offset = window.offset(),
         limit = window.limit(),
         total_pages,
         "投稿一覧のページを取得します"
      );

      let query = match request_id {
         Some(id) => PostQuery::new(window).with_request_id(id),
         None => PostQuery::new(window),
      };
      let posts = self.source.fetch_posts(&query).await?;

      Ok(PageView {
         posts,
         meta: PageMetadata::for_page(page),
         pagination: PaginationState::new(page, total_pages),
      })
   }
}
