//! # ページ要求
//!
//! クエリパラメータ `page` から実効ページ番号を決定し、
//! 外部ソースに問い合わせるオフセット/リミット窓と総ページ数を計算する。
//!
//! ## 計算規則
//!
//! | 項目 | 式 |
//! |------|----|
//! | 実効ページ | `page` が正の整数（`+3`, `3.0` を含む）ならその値、それ以外は `1` |
//! | オフセット | `(page - 1) * limit` |
//! | 総ページ数 | `ceil(total_count / limit)` |
//!
//! 総ページ数に対する上限チェックは行わない。範囲外のページは
//! 外部ソースから空（または不足した）リストが返るだけで、エラーにはならない。

use serde::{Deserialize, Serialize};

use crate::DomainError;

/// 1 ページあたりの件数（デフォルト値）
pub const PAGE_SIZE: u32 = 5;

/// 総件数（デフォルト値）
///
/// 外部ソースの実件数ではなく固定値。設定で上書きできる。
pub const DEFAULT_TOTAL_COUNT: u64 = 100;

/// クエリパラメータの値から実効ページ番号を決定する
///
/// 前後の空白を除いた値を数値として解釈し、正の整数ならその値を返す。
/// `+3` のような符号付きや `3.0` のような小数部がすべて 0 の表記も整数として扱う。
/// 未指定・非数値・整数でない小数・負数・0・`u32` の範囲外はすべて `1` になる。
/// エラーは返さない。
///
/// ```rust
/// use postboard_domain::page_request::effective_page;
///
/// assert_eq!(effective_page(Some("3")), 3);
/// assert_eq!(effective_page(Some("3.0")), 3);
/// assert_eq!(effective_page(Some("abc")), 1);
/// assert_eq!(effective_page(None), 1);
/// ```
pub fn effective_page(raw: Option<&str>) -> u32 {
   raw.map(str::trim)
      .and_then(parse_integral)
      .filter(|&page| page >= 1)
      .unwrap_or(1)
}

/// 整数、または小数部がすべて 0 の小数表記を `u32` として解釈する
fn parse_integral(value: &str) -> Option<u32> {
   let (integer, fraction) = value.split_once('.').unwrap_or((value, ""));
   if !fraction.bytes().all(|b| b == b'0') {
      return None;
   }
   integer.parse().ok()
}

/// 1 ページあたりの件数（値オブジェクト）
///
/// # 不変条件
///
/// - 1 以上
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageSize(u32);

impl PageSize {
   /// 件数を指定して作成する
   ///
   /// 0 の場合は `DomainError::Validation` を返す。
   pub fn new(value: u32) -> Result<Self, DomainError> {
      if value == 0 {
         return Err(DomainError::Validation(
            "ページサイズは 1 以上である必要があります".to_string(),
         ));
      }
      Ok(Self(value))
   }

   pub fn as_u32(&self) -> u32 {
      self.0
   }
}

impl Default for PageSize {
   fn default() -> Self {
      Self(PAGE_SIZE)
   }
}

/// オフセット/リミット窓
///
/// 外部コレクションの `offset` 件目から最大 `limit` 件を取得する範囲を表す。
/// オフセットは `u64` で保持するため、`u32` の任意のページ番号でオーバーフローしない。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PageWindow {
   offset: u64,
   limit:  u32,
}

impl PageWindow {
   /// ページ番号とページサイズから窓を計算する
   ///
   /// `page` が 0 の場合は 1 ページ目として扱う。
   pub fn for_page(page: u32, page_size: PageSize) -> Self {
      let page = u64::from(page.max(1));
      let limit = page_size.as_u32();
      Self {
         offset: (page - 1) * u64::from(limit),
         limit,
      }
   }

   pub fn offset(&self) -> u64 {
      self.offset
   }

   pub fn limit(&self) -> u32 {
      self.limit
   }
}

/// 総件数とページサイズから総ページ数を計算する
///
/// `ceil(total_count / page_size)`。`u32` に収まらない場合は `u32::MAX` で飽和する。
pub fn total_pages(total_count: u64, page_size: PageSize) -> u32 {
   let pages = total_count.div_ceil(u64::from(page_size.as_u32()));
   u32::try_from(pages).unwrap_or(u32::MAX)
}

#[cfg(test)]
mod tests {
   use pretty_assertions::assert_eq;
   use rstest::rstest;

   use super::*;

   // =========================================================================
   // effective_page のテスト
   // =========================================================================

   #[rstest]
   #[case(Some("1"), 1)]
   #[case(Some("13"), 13)]
   #[case(Some(" 7 "), 7)]
   #[case(Some("007"), 7)]
   #[case(Some("4294967295"), u32::MAX)]
   #[case(Some("+3"), 3)]
   #[case(Some("3.0"), 3)]
   #[case(Some("12.00"), 12)]
   #[case(Some("5."), 5)]
   fn test_正の整数はそのままページ番号になる(#[case] raw: Option<&str>, #[case] expected: u32) {
      assert_eq!(effective_page(raw), expected);
   }

   #[rstest]
   #[case(None, "未指定")]
   #[case(Some(""), "空文字列")]
   #[case(Some("abc"), "非数値")]
   #[case(Some("0"), "ゼロ")]
   #[case(Some("-3"), "負数")]
   #[case(Some("+0"), "符号付きのゼロ")]
   #[case(Some("0.0"), "小数表記のゼロ")]
   #[case(Some(".5"), "整数部のない小数")]
   #[case(Some("3.0.0"), "小数点が複数")]
   #[case(Some("2.5"), "小数")]
   #[case(Some("4294967296"), "u32 の範囲外")]
   fn test_正の整数でない値は1ページ目になる(
      #[case] raw: Option<&str>,
      #[case] _description: &str,
   ) {
      assert_eq!(effective_page(raw), 1);
   }

   // =========================================================================
   // PageSize のテスト
   // =========================================================================

   #[test]
   fn test_ページサイズのデフォルトは5() {
      assert_eq!(PageSize::default().as_u32(), 5);
   }

   #[test]
   fn test_ページサイズは0を拒否する() {
      assert!(PageSize::new(0).is_err());
   }

   // =========================================================================
   // PageWindow のテスト
   // =========================================================================

   #[rstest]
   #[case(1, 0)]
   #[case(2, 5)]
   #[case(13, 60)]
   #[case(20, 95)]
   #[case(21, 100)]
   fn test_オフセットは_page_minus_1_times_limit(#[case] page: u32, #[case] offset: u64) {
      let window = PageWindow::for_page(page, PageSize::default());

      assert_eq!(window.offset(), offset);
      assert_eq!(window.limit(), 5);
   }

   #[test]
   fn test_最大ページでもオフセットがオーバーフローしない() {
      let window = PageWindow::for_page(u32::MAX, PageSize::default());

      assert_eq!(window.offset(), (u64::from(u32::MAX) - 1) * 5);
   }

   #[test]
   fn test_ページ0は1ページ目として扱う() {
      assert_eq!(
         PageWindow::for_page(0, PageSize::default()),
         PageWindow::for_page(1, PageSize::default())
      );
   }

   // =========================================================================
   // total_pages のテスト
   // =========================================================================

   #[test]
   fn test_総件数100で総ページ数は20() {
      assert_eq!(total_pages(DEFAULT_TOTAL_COUNT, PageSize::default()), 20);
   }

   #[rstest]
   #[case(0, 0)]
   #[case(1, 1)]
   #[case(5, 1)]
   #[case(6, 2)]
   #[case(101, 21)]
   fn test_総ページ数は切り上げで計算する(#[case] total_count: u64, #[case] expected: u32) {
      assert_eq!(total_pages(total_count, PageSize::default()), expected);
   }

   #[test]
   fn test_総ページ数はu32の最大値で飽和する() {
      let size = PageSize::new(1).unwrap();

      assert_eq!(total_pages(u64::MAX, size), u32::MAX);
   }
}
