//! Navigation id synthesis
//!
//! Collections such as overflow avatar lists and breadcrumb dropdowns rarely
//! carry their own identifiers. [`use_ids`] annotates each item with a stable
//! id so the registry has something to track.

use std::cell::Cell;
use std::rc::Rc;

/// Items that may already carry an identifier
pub trait MaybeIdentified {
    /// The item's own id, if it has one
    fn existing_id(&self) -> Option<&str>;
}

impl MaybeIdentified for serde_json::Value {
    fn existing_id(&self) -> Option<&str> {
        self.get("id").and_then(serde_json::Value::as_str)
    }
}

impl<T: MaybeIdentified + ?Sized> MaybeIdentified for &T {
    fn existing_id(&self) -> Option<&str> {
        (**self).existing_id()
    }
}

/// An item paired with its navigation id
#[derive(Debug, Clone, PartialEq)]
pub struct Identified<T> {
    pub id: String,
    pub item: T,
}

/// Annotate each item with an id.
///
/// An item keeps its own non-empty id; otherwise it gets
/// `"{prefix}-item-{index}"`.
pub fn use_ids<T>(prefix: &str, items: &[T]) -> Vec<Identified<T>>
where
    T: MaybeIdentified + Clone,
{
    items
        .iter()
        .enumerate()
        .map(|(index, item)| {
            let id = match item.existing_id() {
                Some(id) if !id.is_empty() => id.to_string(),
                _ => format!("{prefix}-item-{index}"),
            };
            Identified {
                id,
                item: item.clone(),
            }
        })
        .collect()
}

/// Memoized [`use_ids`]
///
/// Returns the same allocation for as long as the prefix and the input `Rc`
/// stay the same, so consumers can compare results by pointer.
#[derive(Debug)]
pub struct IdMemo<T> {
    last: Option<MemoEntry<T>>,
}

#[derive(Debug)]
struct MemoEntry<T> {
    prefix: String,
    input: Rc<[T]>,
    output: Rc<[Identified<T>]>,
}

impl<T> Default for IdMemo<T> {
    fn default() -> Self {
        Self { last: None }
    }
}

impl<T: MaybeIdentified + Clone> IdMemo<T> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&mut self, prefix: &str, items: &Rc<[T]>) -> Rc<[Identified<T>]> {
        if let Some(entry) = &self.last {
            if entry.prefix == prefix && Rc::ptr_eq(&entry.input, items) {
                return entry.output.clone();
            }
        }

        let output: Rc<[Identified<T>]> = use_ids(prefix, items).into();
        self.last = Some(MemoEntry {
            prefix: prefix.to_string(),
            input: items.clone(),
            output: output.clone(),
        });
        output
    }
}

/// Generates instance-unique id prefixes
///
/// Each generator carries a random session tag so ids from two generators
/// (two widget trees on one page) do not collide.
#[derive(Debug)]
pub struct IdGenerator {
    tag: String,
    next: Cell<u64>,
}

impl IdGenerator {
    pub fn new() -> Self {
        Self::with_tag(format!("{:06x}", rand::random::<u32>() & 0x00ff_ffff))
    }

    /// Generator with a fixed tag, for reproducible output
    pub fn with_tag(tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            next: Cell::new(0),
        }
    }

    pub fn tag(&self) -> &str {
        &self.tag
    }

    /// Next id for `base`, e.g. `menu-3fa2c1-0`
    pub fn next_id(&self, base: &str) -> String {
        let n = self.next.get();
        self.next.set(n + 1);
        format!("{base}-{}-{n}", self.tag)
    }
}

impl Default for IdGenerator {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_use_ids_synthesis() {
        let items = vec![json!({}), json!({ "id": "explicit" }), json!({})];
        let ids: Vec<String> = use_ids("menu", &items).into_iter().map(|i| i.id).collect();
        assert_eq!(ids, vec!["menu-item-0", "explicit", "menu-item-2"]);
    }

    #[test]
    fn test_empty_id_is_not_kept() {
        let items = vec![json!({ "id": "" }), json!({ "id": 7 })];
        let ids: Vec<String> = use_ids("x", &items).into_iter().map(|i| i.id).collect();
        assert_eq!(ids, vec!["x-item-0", "x-item-1"]);
    }

    #[test]
    fn test_memo_is_referentially_stable() {
        let items: Rc<[serde_json::Value]> = vec![json!({}), json!({})].into();
        let mut memo = IdMemo::new();

        let first = memo.get("list", &items);
        let second = memo.get("list", &items);
        assert!(Rc::ptr_eq(&first, &second));

        let renamed = memo.get("other", &items);
        assert!(!Rc::ptr_eq(&first, &renamed));
        assert_eq!(renamed[0].id, "other-item-0");

        let fresh: Rc<[serde_json::Value]> = vec![json!({}), json!({})].into();
        let third = memo.get("other", &fresh);
        assert!(!Rc::ptr_eq(&renamed, &third));
    }

    #[test]
    fn test_generator() {
        let generator = IdGenerator::with_tag("t");
        assert_eq!(generator.next_id("menu"), "menu-t-0");
        assert_eq!(generator.next_id("menu"), "menu-t-1");

        let a = IdGenerator::new();
        assert_eq!(a.tag().len(), 6);
    }
}
