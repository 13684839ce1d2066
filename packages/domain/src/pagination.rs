//! # ページネーションコントロール
//!
//! 現在ページと総ページ数から「ページグループ」（固定幅の連続したページ番号の窓）を
//! 計算し、前グループ / 各ページ / 次グループへの遷移先を決定する。
//!
//! ## アルゴリズム
//!
//! ```text
//! current_group = ceil(current_page / group_size)
//! start         = (current_group - 1) * group_size + 1
//! end           = min(current_group * group_size, total_pages)
//! numbers       = start..=end            （end < start なら空）
//!
//! 前グループ: start > 1 のとき表示、遷移先 max(start - group_size, 1)
//! 次グループ: end < total_pages のとき表示、遷移先 min(end + 1, total_pages)
//! ```
//!
//! 例: `current_page = 13`, `total_pages = 20`, `group_size = 5`
//!
//! ```text
//!  « 前  [11] [12] (13) [14] [15]  次 »
//!   ↓                               ↓
//!   6                               16
//! ```
//!
//! `current_page` は `total_pages` 以下にクランプしない。範囲外のページでは
//! `numbers` が空になり、選択状態のエントリも存在しない。

use std::ops::RangeInclusive;

use serde::Serialize;

use crate::DomainError;

/// ページグループの幅（デフォルト値）
pub const DEFAULT_GROUP_SIZE: u32 = 5;

/// ページグループの幅（値オブジェクト）
///
/// # 不変条件
///
/// - 1 以上
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GroupSize(u32);

impl GroupSize {
   /// 幅を指定して作成する
   ///
   /// 0 の場合は `DomainError::Validation` を返す。
   pub fn new(value: u32) -> Result<Self, DomainError> {
      if value == 0 {
         return Err(DomainError::Validation(
            "グループサイズは 1 以上である必要があります".to_string(),
         ));
      }
      Ok(Self(value))
   }

   pub fn as_u32(&self) -> u32 {
      self.0
   }
}

impl Default for GroupSize {
   fn default() -> Self {
      Self(DEFAULT_GROUP_SIZE)
   }
}

/// ページネーション状態
///
/// `current_page` は `total_pages` を超えてもよい（入力をクランプしない）。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PaginationState {
   pub current_page: u32,
   pub total_pages:  u32,
}

impl PaginationState {
   pub fn new(current_page: u32, total_pages: u32) -> Self {
      Self {
         current_page,
         total_pages,
      }
   }
}

/// ページグループ
///
/// 同時に表示する連続したページ番号の範囲。`end < start` のとき空。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PageGroup {
   pub start: u32,
   pub end:   u32,
}

impl PageGroup {
   /// 現在ページ・総ページ数・グループ幅からページグループを計算する
   ///
   /// `current_page` が 0 の場合は 1 として扱う。
   /// 中間値は `u64` で計算するため、`u32` の任意の入力でオーバーフローしない。
   pub fn compute(current_page: u32, total_pages: u32, group_size: GroupSize) -> Self {
      let current = u64::from(current_page.max(1));
      let size = u64::from(group_size.as_u32());

      let current_group = current.div_ceil(size);
      let start = (current_group - 1) * size + 1;
      let end = (current_group * size).min(u64::from(total_pages));

      // start <= current_page、end <= total_pages なのでいずれも u32 に収まる
      Self {
         start: u32::try_from(start).unwrap_or(u32::MAX),
         end:   u32::try_from(end).unwrap_or(u32::MAX),
      }
   }

   /// グループに含まれるページ番号を昇順で返す
   pub fn numbers(&self) -> RangeInclusive<u32> {
      self.start..=self.end
   }

   pub fn is_empty(&self) -> bool {
      self.end < self.start
   }
}

/// ページ番号エントリ
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PageEntry {
   /// 遷移先のページ番号
   pub page:     u32,
   /// 現在ページかどうか（`page == current_page`）
   pub selected: bool,
}

/// ページネーションコントロール
///
/// ページグループと、前グループ / 次グループ / 各ページの遷移先を保持する。
/// 遷移先はページ番号のみで、URL の組み立ては呼び出し側の責務。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PaginationControl {
   state:      PaginationState,
   group_size: GroupSize,
   group:      PageGroup,
}

impl PaginationControl {
   pub fn new(state: PaginationState, group_size: GroupSize) -> Self {
      let group = PageGroup::compute(state.current_page, state.total_pages, group_size);
      Self {
         state,
         group_size,
         group,
      }
   }

   pub fn group(&self) -> PageGroup {
      self.group
   }

   /// 前グループへの遷移先
   ///
   /// `start > 1` のときのみ `Some(max(start - group_size, 1))` を返す。
   pub fn prev_group_target(&self) -> Option<u32> {
      (self.group.start > 1).then(|| {
         self
            .group
            .start
            .saturating_sub(self.group_size.as_u32())
            .max(1)
      })
   }

   /// 次グループへの遷移先
   ///
   /// `end < total_pages` のときのみ `Some(min(end + 1, total_pages))` を返す。
   pub fn next_group_target(&self) -> Option<u32> {
      let total_pages = self.state.total_pages;
      (self.group.end < total_pages).then(|| (self.group.end + 1).min(total_pages))
   }

   /// グループ内の各ページ番号エントリ
   pub fn entries(&self) -> impl Iterator<Item = PageEntry> + '_ {
      self.group.numbers().map(|page| PageEntry {
         page,
         selected: self.is_selected(page),
      })
   }

   /// 選択状態の判定（`page == current_page`）
   pub fn is_selected(&self, page: u32) -> bool {
      page == self.state.current_page
   }
}
