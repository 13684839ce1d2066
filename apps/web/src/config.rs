//! # Web サーバー設定
//!
//! 環境変数から Web サーバーの設定を読み込む。
//!
//! | 変数名 | 必須 | デフォルト | 説明 |
//! |--------|------|------------|------|
//! | `WEB_HOST` | No | `0.0.0.0` | バインドアドレス |
//! | `WEB_PORT` | No | `3000` | ポート番号 |
//! | `POSTS_API_URL` | No | `https://jsonplaceholder.typicode.com` | 投稿データソースのベース URL |
//! | `POSTS_TOTAL_COUNT` | No | `100` | 総ページ数の計算に使う総件数 |

use std::env;

use postboard_domain::page_request::DEFAULT_TOTAL_COUNT;
use thiserror::Error;

const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_PORT: u16 = 3000;
const DEFAULT_POSTS_API_URL: &str = "https://jsonplaceholder.typicode.com";

/// 設定読み込みエラー
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
   /// 数値として解釈できない値
   #[error("{name} は有効な数値である必要があります: {value:?}")]
   InvalidNumber { name: &'static str, value: String },
}

/// Web サーバーの設定
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WebConfig {
   /// バインドアドレス
   pub host:          String,
   /// ポート番号
   pub port:          u16,
   /// 投稿データソースのベース URL
   pub posts_api_url: String,
   /// 総件数（外部ソースの実件数ではなく設定値）
   pub total_count:   u64,
}

impl WebConfig {
   /// 環境変数から設定を読み込む
   pub fn from_env() -> Result<Self, ConfigError> {
      Self::from_lookup(|name| env::var(name).ok())
   }

   /// 任意の参照関数から設定を読み込む
   ///
   /// テスト間で環境変数の競合を避けるため、読み込み元を差し替え可能にしている。
   pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
      Ok(Self {
         host:          lookup("WEB_HOST").unwrap_or_else(|| DEFAULT_HOST.to_string()),
         port:          parse_number("WEB_PORT", lookup("WEB_PORT"), DEFAULT_PORT)?,
         posts_api_url: lookup("POSTS_API_URL")
            .unwrap_or_else(|| DEFAULT_POSTS_API_URL.to_string()),
         total_count:   parse_number(
            "POSTS_TOTAL_COUNT",
            lookup("POSTS_TOTAL_COUNT"),
            DEFAULT_TOTAL_COUNT,
         )?,
      })
   }
}

fn parse_number<T: std::str::FromStr>(
   name: &'static str,
   value: Option<String>,
   default: T,
) -> Result<T, ConfigError> {
   match value {
      None => Ok(default),
      Some(value) => value
         .trim()
         .parse()
         .map_err(|_| ConfigError::InvalidNumber { name, value }),
   }
}
