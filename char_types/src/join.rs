//! Joining sequences of Chars into a string

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::{Char, CharError};

/// An element of a [`join`] input sequence
///
/// Join inputs are loosely typed: any of these kinds can appear at any
/// position, but only the `Char` kind can actually be joined. The other
/// kinds exist so that a mixed sequence fails with a diagnostic naming the
/// offending kind and index instead of being unrepresentable.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum JoinItem {
    /// A joinable character
    Char(Char),
    /// An integer (not joinable)
    Int(i64),
    /// A float (not joinable)
    Float(f64),
    /// A text fragment (not joinable)
    Text(String),
}

impl JoinItem {
    /// The kind name used in diagnostics
    pub fn kind(&self) -> &'static str {
        match self {
            JoinItem::Char(_) => "Char",
            JoinItem::Int(_) => "integer",
            JoinItem::Float(_) => "float",
            JoinItem::Text(_) => "text",
        }
    }

    /// Returns the character if this is a joinable item
    pub fn as_char(&self) -> Option<Char> {
        match self {
            JoinItem::Char(c) => Some(*c),
            _ => None,
        }
    }
}

impl fmt::Display for JoinItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            JoinItem::Char(c) => write!(f, "{}", c),
            JoinItem::Int(v) => write!(f, "{}", v),
            JoinItem::Float(v) => write!(f, "{}", v),
            JoinItem::Text(s) => write!(f, "{}", s),
        }
    }
}

impl From<Char> for JoinItem {
    fn from(c: Char) -> Self {
        JoinItem::Char(c)
    }
}

impl From<i64> for JoinItem {
    fn from(v: i64) -> Self {
        JoinItem::Int(v)
    }
}

impl From<f64> for JoinItem {
    fn from(v: f64) -> Self {
        JoinItem::Float(v)
    }
}

impl From<String> for JoinItem {
    fn from(s: String) -> Self {
        JoinItem::Text(s)
    }
}

impl From<&str> for JoinItem {
    fn from(s: &str) -> Self {
        JoinItem::Text(s.to_string())
    }
}

/// Joins a sequence of items into a string, in order
///
/// Each element renders through its character form (negative-stored values
/// render as their unsigned counterpart). The first element that is not a
/// `Char` fails the whole operation; nothing accumulated so far is returned.
/// An empty sequence joins to an empty string.
pub fn join<I>(items: I) -> Result<String, CharError>
where
    I: IntoIterator<Item = JoinItem>,
{
    let mut result = String::new();
    for (index, item) in items.into_iter().enumerate() {
        match item.as_char() {
            Some(c) => result.push(c.as_char()),
            None => {
                return Err(CharError::NotJoinable {
                    index,
                    kind: item.kind(),
                })
            }
        }
    }
    Ok(result)
}

/// Joins a homogeneous sequence of Chars; never fails
pub fn join_chars<I>(chars: I) -> String
where
    I: IntoIterator<Item = Char>,
{
    chars.into_iter().map(Char::as_char).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::RangeMode;

    fn ch(text: &str) -> Char {
        Char::from_text(text).unwrap()
    }

    #[test]
    fn test_join_concatenates_in_order() {
        let items = vec![
            JoinItem::from(ch("a")),
            JoinItem::from(ch("b")),
            JoinItem::from(ch("c")),
        ];
        assert_eq!(join(items).unwrap(), "abc");
    }

    #[test]
    fn test_join_empty_is_empty_string() {
        assert_eq!(join(Vec::new()).unwrap(), "");
    }

    #[test]
    fn test_join_fails_on_non_char_with_index_and_kind() {
        let items = vec![JoinItem::from(ch("a")), JoinItem::Int(5)];
        assert_eq!(
            join(items).unwrap_err(),
            CharError::NotJoinable {
                index: 1,
                kind: "integer",
            }
        );
    }

    #[test]
    fn test_join_fails_fast_and_atomically() {
        let items = vec![
            JoinItem::Text("oops".to_string()),
            JoinItem::from(ch("a")),
            JoinItem::Float(1.5),
        ];
        // The first bad element wins; no prefix string leaks out.
        assert_eq!(
            join(items).unwrap_err(),
            CharError::NotJoinable {
                index: 0,
                kind: "text",
            }
        );
    }

    #[test]
    fn test_join_renders_negative_chars_unsigned() {
        let c = Char::from_int(-26, RangeMode::NonStrict).unwrap();
        let joined = join(vec![JoinItem::from(c)]).unwrap();
        assert_eq!(joined, char::from(230u8).to_string());
    }

    #[test]
    fn test_join_chars_never_fails() {
        let chars = vec![ch("h"), ch("i")];
        assert_eq!(join_chars(chars), "hi");
        assert_eq!(join_chars(Vec::new()), "");
    }

    #[test]
    fn test_join_item_kind_names() {
        assert_eq!(JoinItem::from(ch("a")).kind(), "Char");
        assert_eq!(JoinItem::Int(5).kind(), "integer");
        assert_eq!(JoinItem::Float(1.5).kind(), "float");
        assert_eq!(JoinItem::from("x").kind(), "text");
    }

    #[test]
    fn test_join_item_as_char() {
        assert_eq!(JoinItem::from(ch("a")).as_char(), Some(ch("a")));
        assert_eq!(JoinItem::Int(5).as_char(), None);
    }

    #[test]
    fn test_join_item_display() {
        assert_eq!(JoinItem::from(ch("a")).to_string(), "a");
        assert_eq!(JoinItem::Int(5).to_string(), "5");
        assert_eq!(JoinItem::from("text").to_string(), "text");
    }

    #[test]
    fn test_join_item_serialization() {
        let item = JoinItem::from(ch("a"));
        let json = serde_json::to_string(&item).unwrap();
        let deserialized: JoinItem = serde_json::from_str(&json).unwrap();
        assert_eq!(item, deserialized);
    }
}
