//! # Postboard Web ライブラリ
//!
//! 投稿一覧をサーバーサイドでレンダリングする HTTP サーバーのコアモジュール。
//!
//! ## リクエストの流れ
//!
//! ```text
//! GET /posts?page=13
//!   │
//!   ▼
//! handler::list_posts ──▶ usecase::PageDataProvider ──▶ client::PostSource ──▶ 外部 API
//!   │                          (page / offset / total)        GET /posts?_start=60&_limit=5
//!   ▼
//! render::PageRenderer（tera）──▶ HTML（投稿一覧 + ページネーション）
//! ```
//!
//! ## モジュール構成
//!
//! - `app_builder`: State 注入とルーター構築
//! - `client`: 外部データソースのクライアント
//! - `config`: 環境変数からの設定読み込み
//! - `error`: ハンドラのエラー型と HTTP レスポンスへの変換
//! - `handler`: HTTP ハンドラ
//! - `query_params`: クエリ文字列の解析とページ遷移先 URL の生成
//! - `render`: HTML レンダリング
//! - `usecase`: ページデータの組み立て

pub mod app_builder;
pub mod client;
pub mod config;
pub mod error;
pub mod handler;
pub mod query_params;
pub mod render;
pub mod usecase;
