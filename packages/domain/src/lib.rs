//! # Postboard ドメイン層
//!
//! 一覧ページのページネーションに関する純粋な計算を提供する。
//!
//! ## 設計方針
//!
//! - **純粋関数**: HTTP・テンプレート・ルーティングには一切依存しない
//! - **整数のみを入力とする**: ページ番号の算術はすべてこのクレートで完結する
//! - **リクエストスコープ**: すべての型はリクエストごとに生成され、永続化されない
//!
//! ## 依存関係の方向
//!
//! ```text
//! web → domain
//! web → shared
//! ```
//!
//! ## モジュール構成
//!
//! - [`error`] - ドメイン層で発生するエラーの定義
//! - [`page_request`] - 実効ページ番号、オフセット/リミット窓、総ページ数
//! - [`pagination`] - ページグループとページネーションコントロール
//! - [`page_meta`] - ページごとのメタデータ（title / description）
//! - [`post`] - 外部ソースから取得する投稿
//!
//! ## 使用例
//!
//! ```rust
//! use postboard_domain::{
//!     page_request::{PageSize, PageWindow, effective_page},
//!     pagination::{GroupSize, PaginationControl, PaginationState},
//! };
//!
//! let page = effective_page(Some("13"));
//! let window = PageWindow::for_page(page, PageSize::default());
//! assert_eq!(window.offset(), 60);
//!
//! let control = PaginationControl::new(PaginationState::new(page, 20), GroupSize::default());
//! assert_eq!(control.group().numbers().collect::<Vec<_>>(), vec![11, 12, 13, 14, 15]);
//! ```

pub mod error;
pub mod page_meta;
pub mod page_request;
pub mod pagination;
pub mod post;

pub use error::DomainError;
