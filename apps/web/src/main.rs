//! # Postboard Web サーバー
//!
//! 外部の投稿コレクションから 1 ページ分を取得し、ページネーション付きの
//! HTML としてサーバーサイドでレンダリングする。
//!
//! ## アーキテクチャ
//!
//! ```text
//! ┌──────────────┐     ┌──────────────┐     ┌──────────────────┐
//! │   Browser    │────▶│     Web      │────▶│   Posts API      │
//! │              │◀────│  port: 3000  │◀────│ (JSON, external) │
//! └──────────────┘HTML └──────────────┘     └──────────────────┘
//! ```
//!
//! ## 環境変数
//!
//! | 変数名 | 必須 | 説明 |
//! |--------|------|------|
//! | `WEB_HOST` | No | バインドアドレス（デフォルト: `0.0.0.0`） |
//! | `WEB_PORT` | No | ポート番号（デフォルト: `3000`） |
//! | `POSTS_API_URL` | No | 投稿データソースのベース URL |
//! | `POSTS_TOTAL_COUNT` | No | 総件数（デフォルト: `100`） |
//! | `RUST_LOG` | No | ログレベル（デフォルト: `info,postboard=debug`） |
//! | `LOG_FORMAT` | No | `json` / `pretty`（デフォルト: `pretty`） |
//!
//! ## 起動方法
//!
//! ```bash
//! cargo run -p postboard-web
//!
//! # JSON ログ
//! LOG_FORMAT=json WEB_PORT=8080 cargo run -p postboard-web --release
//! ```

use std::{net::SocketAddr, sync::Arc};

use postboard_shared::observability::{TracingConfig, init_tracing};
use postboard_web::{
   app_builder::build_app,
   client::PostSourceClientImpl,
   config::WebConfig,
   handler::PostsState,
};
use tokio::net::TcpListener;

/// Web サーバーのエントリーポイント
///
/// 以下の順序で初期化を行う:
///
/// 1. 環境変数の読み込み（.env ファイル）
/// 2. トレーシングの初期化
/// 3. アプリケーション設定の読み込み
/// 4. ルーターの構築
/// 5. HTTP サーバーの起動
#[tokio::main]
async fn main() -> anyhow::Result<()> {
   // .env ファイルを読み込む（存在する場合）
   dotenvy::dotenv().ok();

   init_tracing(TracingConfig::from_env("web"));
   let _tracing_guard = tracing::info_span!("app", service = "web").entered();

   let config = WebConfig::from_env()?;

   tracing::info!(
      posts_api_url = %config.posts_api_url,
      total_count = config.total_count,
      "Web サーバーを起動します: {}:{}",
      config.host,
      config.port
   );

   let source = Arc::new(PostSourceClientImpl::new(&config.posts_api_url));
   let posts_state = Arc::new(PostsState::new(source, config.total_count)?);
   let app = build_app(posts_state);

   let addr: SocketAddr = format!("{}:{}", config.host, config.port).parse()?;

   let listener = TcpListener::bind(addr).await?;
   tracing::info!("Web サーバーが起動しました: {addr}");

   axum::serve(listener, app).await?;

   Ok(())
}
