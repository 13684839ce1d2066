//! # 投稿
//!
//! 外部コレクションから取得する一覧の要素。永続化せず、リクエストごとに破棄する。

use serde::{Deserialize, Serialize};

/// 投稿
///
/// 外部 API の JSON では所有者 ID が `userId` という名前で届く。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Post {
   #[serde(rename = "userId")]
   pub user_id: i64,
   pub id:      i64,
   pub title:   String,
   pub body:    String,
}
