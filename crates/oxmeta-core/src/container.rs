//! Ordered, cardinality-aware value storage shared by all profile kinds
//!
//! Insertion order is preserved so that order-sensitive formats (IPTC, 8BIM)
//! re-encode byte-for-byte. Tags the registry marks as non-repeatable hold at most
//! one value; adding another replaces the existing one in place.

use std::fmt::Debug;
use std::hash::Hash;

/// A value that can live in a [`ProfileContainer`]
pub trait ProfileValue: Clone + Debug {
    /// Tag identifier type of this profile format
    type Tag: Copy + Eq + Hash + Debug;

    /// Tag of this value
    fn tag(&self) -> Self::Tag;

    /// Whether several values with `tag` may coexist in one profile
    fn is_repeatable(tag: Self::Tag) -> bool;
}

/// Output of a chunk parser
///
/// `truncated` is set whenever the parser stopped before consuming the whole input
/// (declared length overruns, bad signatures, short headers). The partial result in
/// `value` is still usable.
#[derive(Debug, Clone, PartialEq)]
pub struct Decoded<T> {
    /// Everything decoded before the parser stopped
    pub value: T,
    /// True when trailing input was malformed and dropped
    pub truncated: bool,
}

impl<T> Decoded<T> {
    /// A fully consumed input
    pub fn complete(value: T) -> Self {
        Self {
            value,
            truncated: false,
        }
    }

    /// Input that stopped early
    pub fn truncated(value: T) -> Self {
        Self {
            value,
            truncated: true,
        }
    }

    /// Transform the decoded value, keeping the truncation flag
    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Decoded<U> {
        Decoded {
            value: f(self.value),
            truncated: self.truncated,
        }
    }

    /// Discard the truncation flag
    pub fn into_value(self) -> T {
        self.value
    }
}

/// Named, ordered collection of profile values
#[derive(Debug, Clone)]
pub struct ProfileContainer<V: ProfileValue> {
    name: String,
    values: Vec<V>,
}

impl<V: ProfileValue> ProfileContainer<V> {
    /// Create an empty container
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            values: Vec::new(),
        }
    }

    /// Profile name (e.g. "iptc")
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Insert a value, honoring the tag's cardinality
    ///
    /// Returns the previous value when a non-repeatable tag was replaced.
    pub fn add(&mut self, value: V) -> Option<V> {
        let tag = value.tag();
        if !V::is_repeatable(tag) {
            if let Some(slot) = self.values.iter_mut().find(|v| v.tag() == tag) {
                return Some(std::mem::replace(slot, value));
            }
        }

        self.values.push(value);
        None
    }

    /// First value with the given tag
    pub fn get(&self, tag: V::Tag) -> Option<&V> {
        self.values.iter().find(|v| v.tag() == tag)
    }

    /// First value with the given tag, mutably
    pub fn get_mut(&mut self, tag: V::Tag) -> Option<&mut V> {
        self.values.iter_mut().find(|v| v.tag() == tag)
    }

    /// All values with the given tag, in insertion order
    pub fn get_all(&self, tag: V::Tag) -> Vec<&V> {
        self.values.iter().filter(|v| v.tag() == tag).collect()
    }

    /// Remove every value with the given tag
    pub fn remove(&mut self, tag: V::Tag) -> bool {
        self.remove_where(tag, |_| true)
    }

    /// Remove the values with the given tag for which `predicate` holds
    pub fn remove_where(&mut self, tag: V::Tag, mut predicate: impl FnMut(&V) -> bool) -> bool {
        let before = self.values.len();
        self.values.retain(|v| !(v.tag() == tag && predicate(v)));
        self.values.len() != before
    }

    /// All values in insertion order
    pub fn values(&self) -> &[V] {
        &self.values
    }

    /// Mutable iteration over all values
    ///
    /// Changing a value's tag through this iterator bypasses the cardinality check.
    pub fn values_mut(&mut self) -> impl Iterator<Item = &mut V> {
        self.values.iter_mut()
    }

    /// Distinct tags, in order of first appearance
    pub fn tags(&self) -> Vec<V::Tag> {
        let mut tags: Vec<V::Tag> = Vec::new();
        for value in &self.values {
            let tag = value.tag();
            if !tags.contains(&tag) {
                tags.push(tag);
            }
        }
        tags
    }

    /// Number of values
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// True when there are no values
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Remove all values
    pub fn clear(&mut self) {
        self.values.clear();
    }
}

impl<V: ProfileValue + PartialEq> PartialEq for ProfileContainer<V> {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name && self.values == other.values
    }
}

impl<V: ProfileValue> Extend<V> for ProfileContainer<V> {
    fn extend<I: IntoIterator<Item = V>>(&mut self, iter: I) {
        for value in iter {
            self.add(value);
        }
    }
}
