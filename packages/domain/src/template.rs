//! # テンプレート
//!
//! 呼び出し元が指定する本文テンプレートを連絡先ごとに展開する。
//!
//! ## 構文
//!
//! | 記法 | 展開結果 |
//! |------|----------|
//! | `{name}` | 連絡先の団体名 |
//! | `{address}` | 連絡先の住所 |
//! | `{{` / `}}` | リテラルの `{` / `}` |
//!
//! それ以外の `{...}`、閉じられていない `{`、対応のない `}` は
//! [`TemplateError`] になる。汎用のフォーマット機能は提供しない。

use thiserror::Error;

use crate::contact::Contact;

/// テンプレートの解析エラー
///
/// `position` はテンプレート文字列中のバイトオフセット。
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TemplateError {
   /// `{name}` / `{address}` 以外のプレースホルダー
   #[error("未対応のプレースホルダーです: {{{placeholder}}}（位置 {position}）")]
   UnsupportedPlaceholder { placeholder: String, position: usize },

   /// `}` で閉じられていない `{`
   #[error("閉じられていない `{{` があります（位置 {position}）")]
   UnclosedBrace { position: usize },

   /// 対応する `{` のない `}`
   #[error("対応する `{{` のない `}}` があります（位置 {position}）")]
   UnmatchedClosingBrace { position: usize },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Field {
   Name,
   Address,
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum Segment {
   Literal(String),
   Field(Field),
}

/// 解析済みテンプレート
///
/// 一括送信では宛先ごとにレンダリングする前に一度だけ解析し、
/// 構文エラーがあれば 1 件も生成しない。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Template {
   segments: Vec<Segment>,
}

impl Template {
   /// テンプレート文字列を解析する
   pub fn parse(source: &str) -> Result<Self, TemplateError> {
      let mut segments = Vec::new();
      let mut literal = String::new();
      let mut chars = source.char_indices().peekable();

      while let Some((position, ch)) = chars.next() {
         match ch {
            '{' => {
               if chars.next_if(|&(_, c)| c == '{').is_some() {
                  literal.push('{');
                  continue;
               }

               let mut placeholder = String::new();
               let mut closed = false;
               for (_, c) in chars.by_ref() {
                  if c == '}' {
                     closed = true;
                     break;
                  }
                  placeholder.push(c);
               }
               if !closed {
                  return Err(TemplateError::UnclosedBrace { position });
               }

               let field = match placeholder.as_str() {
                  "name" => Field::Name,
                  "address" => Field::Address,
                  _ => {
                     return Err(TemplateError::UnsupportedPlaceholder {
                        placeholder,
                        position,
                     });
                  }
               };

               if !literal.is_empty() {
                  segments.push(Segment::Literal(std::mem::take(&mut literal)));
               }
               segments.push(Segment::Field(field));
            }
            '}' => {
               if chars.next_if(|&(_, c)| c == '}').is_some() {
                  literal.push('}');
                  continue;
               }
               return Err(TemplateError::UnmatchedClosingBrace { position });
            }
            other => literal.push(other),
         }
      }

      if !literal.is_empty() {
         segments.push(Segment::Literal(literal));
      }

      Ok(Self { segments })
   }

   /// 連絡先の値で展開する
   pub fn render(&self, contact: &Contact) -> String {
      self.segments
         .iter()
         .map(|segment| match segment {
            Segment::Literal(text) => text.as_str(),
            Segment::Field(Field::Name) => contact.name(),
            Segment::Field(Field::Address) => contact.address(),
         })
         .collect()
   }
}

/// テンプレート文字列を解析して連絡先の値で展開する
pub fn render(template: &str, contact: &Contact) -> Result<String, TemplateError> {
   Ok(Template::parse(template)?.render(contact))
}
