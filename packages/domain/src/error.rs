//! # ドメイン層エラー定義
//!
//! ページネーションのパラメータが不変条件に違反した場合のエラー型。
//!
//! ## エラーの種類
//!
//! | エラー種別 | 用途 |
//! |-----------|------|
//! | `Validation` | ページサイズ・グループサイズなどの検証失敗 |

use thiserror::Error;

/// ドメイン層で発生するエラー
#[derive(Debug, Error, PartialEq, Eq)]
pub enum DomainError {
   /// バリデーションエラー
   ///
   /// 値が不変条件を満たさない場合に使用する。
   /// 例: ページサイズに 0 を指定した
   #[error("バリデーションエラー: {0}")]
   Validation(String),
}
