//! # ユースケース層
//!
//! ハンドラから呼ばれ、外部データソースとドメイン計算を組み合わせる。

pub mod page_provider;

pub use page_provider::{PageDataProvider, PageView};
