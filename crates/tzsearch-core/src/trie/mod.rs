// crates/tzsearch-core/src/trie/mod.rs

//! # Prefix Index
//!
//! A char-keyed prefix tree that maps terms to one or more payloads and answers
//! exact lookups and breadth-first autocomplete queries.
//!
//! Matching is exact on code points. Callers normalize (e.g. lower-case) both
//! the terms they insert and the queries they run.
//!
//! ```
//! use tzsearch_core::{Limit, PrefixIndex};
//!
//! let mut index = PrefixIndex::new();
//! index.insert("amsterdam", Some("Europe/Amsterdam"));
//! index.insert("amman", Some("Asia/Amman"));
//!
//! assert_eq!(index.search("amman"), Some(&[Some("Asia/Amman")][..]));
//! assert_eq!(index.search("am"), None);
//!
//! let hits = index.auto_complete("am", Limit::Count(1)).unwrap().unwrap();
//! assert_eq!(hits, vec![Some(&"Asia/Amman")]);
//! ```

mod node;

use crate::common::{IndexStats, Limit};
use crate::error::Result;
use node::TrieNode;
use std::collections::VecDeque;
use tracing::trace;

/// Payload references returned by [`PrefixIndex::auto_complete`], in result order.
/// `None` entries stand for inserts that carried no data.
pub type Completions<'a, T> = Vec<Option<&'a T>>;

/// The term index.
///
/// Built once through repeated [`insert`](Self::insert) calls, then queried.
/// There is no removal. The index holds no locks; share it as `&PrefixIndex`
/// across readers once loading is done.
#[derive(Clone)]
pub struct PrefixIndex<T> {
    root: TrieNode<T>,
    stats: IndexStats,
}

// Only the summary; walking the tree here would recurse.
impl<T> std::fmt::Debug for PrefixIndex<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PrefixIndex")
            .field("stats", &self.stats)
            .finish_non_exhaustive()
    }
}

impl<T> Default for PrefixIndex<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> PrefixIndex<T> {
    pub fn new() -> Self {
        Self {
            root: TrieNode::root(),
            // the root counts as a node
            stats: IndexStats {
                nodes: 1,
                ..IndexStats::default()
            },
        }
    }

    /// Inserts `term` and appends `data` to its payload sequence.
    ///
    /// An entry is appended on every call, even when `data` is `None`; that
    /// placeholder shows up in [`search`](Self::search) and autocomplete
    /// results. The empty string marks the root itself as a term.
    pub fn insert(&mut self, term: &str, data: Option<T>) {
        let mut node = &mut self.root;
        for ch in term.chars() {
            let (next, created) = node.child_or_insert(ch);
            if created {
                self.stats.nodes += 1;
            }
            node = next;
        }
        if !node.is_terminal {
            self.stats.terms += 1;
        }
        node.terminate(data);
        self.stats.payloads += 1;
    }

    /// Exact-term lookup.
    ///
    /// Returns `None` when `term` is absent or exists only as a prefix of
    /// other terms. A matched term always yields `Some`, even if every entry
    /// in it is a `None` placeholder.
    pub fn search(&self, term: &str) -> Option<&[Option<T>]> {
        let node = self.descend(term)?;
        node.is_terminal.then_some(node.payloads.as_slice())
    }

    /// Collects payloads of terms starting with `prefix`, nearest first.
    ///
    /// The node for `prefix` contributes first if it is itself a term. Its
    /// subtree is then walked level by level, every term contributing its
    /// whole payload sequence, until at least `limit` entries are collected.
    /// Siblings are visited in the order their edges were first created.
    ///
    /// Returns `Ok(None)` if no inserted term starts with `prefix`, and
    /// [`IndexError::InvalidArgument`](crate::IndexError::InvalidArgument)
    /// for `Limit::Count(0)`.
    pub fn auto_complete(&self, prefix: &str, limit: Limit) -> Result<Option<Completions<'_, T>>> {
        let limit = limit.validate()?;

        let Some(start) = self.descend(prefix) else {
            trace!(prefix, "autocomplete: prefix not in index");
            return Ok(None);
        };

        let mut out: Completions<'_, T> = Vec::new();
        if start.is_terminal {
            out.extend(start.payloads.iter().map(Option::as_ref));
        }

        let mut queue: VecDeque<&TrieNode<T>> = VecDeque::new();
        if !limit.is_reached(out.len()) {
            queue.extend(start.children.iter());
        }

        let mut visited = 0usize;
        while let Some(node) = queue.pop_front() {
            visited += 1;
            if node.is_terminal {
                out.extend(node.payloads.iter().map(Option::as_ref));
                if limit.is_reached(out.len()) {
                    break;
                }
            }
            queue.extend(node.children.iter());
        }

        trace!(prefix, visited, hits = out.len(), "autocomplete done");
        Ok(Some(out))
    }

    /// Number of distinct terms.
    pub fn len(&self) -> usize {
        self.stats.terms
    }

    pub fn is_empty(&self) -> bool {
        self.stats.terms == 0
    }

    pub fn stats(&self) -> IndexStats {
        self.stats
    }

    fn descend(&self, term: &str) -> Option<&TrieNode<T>> {
        let mut node = &self.root;
        for ch in term.chars() {
            node = node.child(ch)?;
        }
        Some(node)
    }
}

impl<S: AsRef<str>, T> Extend<(S, T)> for PrefixIndex<T> {
    fn extend<I: IntoIterator<Item = (S, T)>>(&mut self, iter: I) {
        for (term, data) in iter {
            self.insert(term.as_ref(), Some(data));
        }
    }
}

impl<S: AsRef<str>, T> FromIterator<(S, T)> for PrefixIndex<T> {
    fn from_iter<I: IntoIterator<Item = (S, T)>>(iter: I) -> Self {
        let mut index = Self::new();
        index.extend(iter);
        index
    }
}
