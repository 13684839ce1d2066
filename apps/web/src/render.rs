//! # HTML レンダラー
//!
//! tera テンプレートエンジンで投稿一覧ページを HTML として生成する。
//!
//! ## 設計方針
//!
//! - **`include_str!` によるコンパイル時埋め込み**: テンプレートはバイナリに埋め込まれる
//! - **自動エスケープ**: テンプレート名を `.html` で終えることで tera の HTML エスケープを有効にする
//! - **ページネーションは部分テンプレート**: `posts.html` が `pagination.html` を include する
//!
//! ページ番号の算術はすべて [`PaginationControl`] に任せ、このモジュールは
//! 遷移先ページ番号を URL に変換するだけ。

use postboard_domain::pagination::{GroupSize, PaginationControl};
use serde::Serialize;
use tera::{Context, Tera};

use crate::{query_params::QueryParams, usecase::PageView};

/// 前グループ / 次グループへのリンク
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NavLink {
   pub page: u32,
   pub href: String,
}

/// ページ番号リンク
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PageLink {
   pub page:     u32,
   pub href:     String,
   pub selected: bool,
}

/// テンプレートに渡すページネーションのビューモデル
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PaginationView {
   pub prev:  Option<NavLink>,
   pub pages: Vec<PageLink>,
   pub next:  Option<NavLink>,
}

impl PaginationView {
   /// コントロールの遷移先ページ番号を、現在のクエリを保った URL に変換する
   pub fn build(control: &PaginationControl, params: &QueryParams) -> Self {
      let nav_link = |page: u32| NavLink {
         page,
         href: params.href_for_page(page),
      };

      Self {
         prev:  control.prev_group_target().map(nav_link),
         pages: control
            .entries()
            .map(|entry| PageLink {
               page:     entry.page,
               href:     params.href_for_page(entry.page),
               selected: entry.selected,
            })
            .collect(),
         next:  control.next_group_target().map(nav_link),
      }
   }
}

/// ページレンダラー
pub struct PageRenderer {
   engine:     Tera,
   group_size: GroupSize,
}

impl PageRenderer {
   /// 埋め込みテンプレートを登録したレンダラーを作成する
   ///
   /// ページグループの幅はデフォルト（5）。
   pub fn new() -> Result<Self, tera::Error> {
      let mut engine = Tera::default();

      engine.add_raw_templates(vec![
         ("posts.html", include_str!("../templates/posts.html")),
         ("pagination.html", include_str!("../templates/pagination.html")),
      ])?;

      Ok(Self {
         engine,
         group_size: GroupSize::default(),
      })
   }

   /// ビューモデルを HTML にレンダリングする
   ///
   /// # 引数
   ///
   /// - `view`: プロバイダが組み立てたビューモデル
   /// - `params`: 現在のリクエストのクエリ（遷移先 URL で `page` 以外を維持するため）
   pub fn render(&self, view: &PageView, params: &QueryParams) -> Result<String, tera::Error> {
      let control = PaginationControl::new(view.pagination, self.group_size);

      let mut context = Context::new();
      context.insert("meta", &view.meta);
      context.insert("posts", &view.posts);
      context.insert("pagination", &PaginationView::build(&control, params));

      self.engine.render("posts.html", &context)
   }
}
