//! # クエリパラメータ
//!
//! リクエストのクエリ文字列を順序付きのペアとして保持し、
//! `page` だけを書き換えたページ遷移先 URL を生成する。
//!
//! 遷移先はクエリのみの相対参照（`?q=rust&page=16`）で表すため、
//! パスはブラウザ側で現在のものが維持される。

use url::form_urlencoded;

/// ページ番号を運ぶクエリパラメータ名
pub const PAGE_PARAM: &str = "page";

/// 順序付きのクエリパラメータ
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryParams {
   pairs: Vec<(String, String)>,
}

impl QueryParams {
   /// 生のクエリ文字列（`?` を含まない）を解析する
   pub fn parse(raw: Option<&str>) -> Self {
      let pairs = raw
         .map(|query| {
            form_urlencoded::parse(query.as_bytes())
               .into_owned()
               .collect()
         })
         .unwrap_or_default();
      Self { pairs }
   }

   /// 指定した名前の最初の値を返す
   pub fn get(&self, name: &str) -> Option<&str> {
      self
         .pairs
         .iter()
         .find(|(key, _)| key == name)
         .map(|(_, value)| value.as_str())
   }

   /// `page` の値
   ///
   /// `page` が複数指定されている場合は単一の数値ではないため `None` を返す
   /// （実効ページは 1 になる）。
   pub fn page(&self) -> Option<&str> {
      let mut values = self
         .pairs
         .iter()
         .filter(|(key, _)| key == PAGE_PARAM)
         .map(|(_, value)| value.as_str());
      let first = values.next()?;
      match values.next() {
         Some(_) => None,
         None => Some(first),
      }
   }

   /// `page` だけを書き換えた遷移先（クエリのみの相対参照）を返す
   ///
   /// 他のパラメータは順序を保ったまま残す。`page` が既にあれば最初の位置で値を置き換え、
   /// 重複する `page` は取り除く。なければ末尾に追加する。
   pub fn href_for_page(&self, page: u32) -> String {
      let page = page.to_string();
      let mut replaced = false;
      let mut serializer = form_urlencoded::Serializer::new(String::new());

      for (key, value) in &self.pairs {
         if key != PAGE_PARAM {
            serializer.append_pair(key, value);
         } else if !replaced {
            serializer.append_pair(PAGE_PARAM, &page);
            replaced = true;
         }
      }
      if !replaced {
         serializer.append_pair(PAGE_PARAM, &page);
      }

      format!("?{}", serializer.finish())
   }
}

#[cfg(test)]
mod tests {
   use pretty_assertions::assert_eq;
   use rstest::rstest;

   use super::*;

   #[rstest]
   #[case(None, None)]
   #[case(Some(""), None)]
   #[case(Some("page=3"), Some("3"))]
   #[case(Some("q=rust&page=abc"), Some("abc"))]
   #[case(Some("page=2&page=5"), None)]
   #[case(Some("page=2&q=a&page=2"), None)]
   fn test_pageの値を取り出す(#[case] raw: Option<&str>, #[case] expected: Option<&str>) {
      assert_eq!(QueryParams::parse(raw).page(), expected);
   }

   #[rstest]
   #[case(None, 6, "?page=6")]
   #[case(Some("page=13"), 16, "?page=16")]
   #[case(Some("q=rust"), 2, "?q=rust&page=2")]
   #[case(Some("q=rust&page=13&sort=new"), 11, "?q=rust&page=11&sort=new")]
   #[case(Some("page=1&q=a&page=2"), 3, "?page=3&q=a")]
   fn test_pageのみを書き換える(
      #[case] raw: Option<&str>,
      #[case] page: u32,
      #[case] expected: &str,
   ) {
      assert_eq!(QueryParams::parse(raw).href_for_page(page), expected);
   }

   #[test]
   fn test_他のパラメータはエンコードし直して残す() {
      let params = QueryParams::parse(Some("q=hello%20world&tag=a%26b"));

      assert_eq!(params.get("q"), Some("hello world"));
      assert_eq!(params.href_for_page(2), "?q=hello+world&tag=a%26b&page=2");
   }
}
