//! # ページメタデータ
//!
//! ページ番号から `<title>` と `<meta name="description">` を決定的に生成する。

use serde::Serialize;

/// ページメタデータ
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PageMetadata {
   pub title:       String,
   pub description: String,
}

impl PageMetadata {
   /// ページ番号からメタデータを生成する
   pub fn for_page(page: u32) -> Self {
      Self {
         title:       format!("Page {page} - SSR Test"),
         description: format!("Displaying page {page} of posts"),
      }
   }
}
