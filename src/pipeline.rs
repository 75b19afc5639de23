//! Iterator pipelines over a list of fruit names.
//!
//! Every function borrows its input and returns owned results; none of them
//! touches the source slice.

use itertools::Itertools;
use std::cmp::Reverse;
use std::collections::BTreeMap;
use std::fmt;
use std::ops::Add;

/// Length in characters, not bytes.
pub fn fruit_len(fruit: &str) -> usize {
    fruit.chars().count()
}

/// Items longer than `threshold`, in lexicographic order.
pub fn filter_longer_sorted<S: AsRef<str>>(items: &[S], threshold: usize) -> Vec<String> {
    items
        .iter()
        .map(AsRef::as_ref)
        .filter(|f| fruit_len(f) > threshold)
        .sorted()
        .map(str::to_string)
        .collect()
}

/// First occurrence of each item, in the order first seen.
pub fn distinct<S: AsRef<str>>(items: &[S]) -> Vec<String> {
    items
        .iter()
        .map(AsRef::as_ref)
        .unique()
        .map(str::to_string)
        .collect()
}

pub fn lengths<S: AsRef<str>>(items: &[S]) -> Vec<usize> {
    items.iter().map(|f| fruit_len(f.as_ref())).collect()
}

pub fn length_map<S: AsRef<str>>(items: &[S]) -> BTreeMap<String, usize> {
    items
        .iter()
        .map(|f| (f.as_ref().to_string(), fruit_len(f.as_ref())))
        .collect()
}

/// Sum of all lengths, duplicates included.
pub fn total_length<S: AsRef<str>>(items: &[S]) -> usize {
    items
        .iter()
        .map(|f| fruit_len(f.as_ref()))
        .fold(0, Add::add)
}

pub fn take_first<S: AsRef<str>>(items: &[S], n: usize) -> Vec<String> {
    items.iter().take(n).map(|f| f.as_ref().to_string()).collect()
}

pub fn skip_first<S: AsRef<str>>(items: &[S], n: usize) -> Vec<String> {
    items.iter().skip(n).map(|f| f.as_ref().to_string()).collect()
}

/// Distinct items bucketed by length. Buckets keep first-seen order.
pub fn group_by_length<S: AsRef<str>>(items: &[S]) -> BTreeMap<usize, Vec<String>> {
    distinct(items)
        .into_iter()
        .into_group_map_by(|f| fruit_len(f))
        .into_iter()
        .collect()
}

/// Two-way split of a list. Every item lands in exactly one side.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Partition {
    pub matching: Vec<String>,
    pub rest: Vec<String>,
}

impl fmt::Display for Partition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{false: {:?}, true: {:?}}}", self.rest, self.matching)
    }
}

pub fn partition_by_length<S: AsRef<str>>(items: &[S], threshold: usize) -> Partition {
    let (matching, rest): (Vec<String>, Vec<String>) = distinct(items)
        .into_iter()
        .partition(|f| fruit_len(f) > threshold);
    Partition { matching, rest }
}

pub fn flatten<T: Clone>(basket: &[Vec<T>]) -> Vec<T> {
    basket.iter().flatten().cloned().collect()
}

/// Largest item by `key`. On ties the earliest item wins, unlike
/// `Iterator::max_by_key`, which returns the last.
pub fn max_by_key_first<I, K, F>(iter: I, key: F) -> Option<I::Item>
where
    I: IntoIterator,
    K: Ord,
    F: Fn(&I::Item) -> K,
{
    iter.into_iter()
        .reduce(|best, next| if key(&next) > key(&best) { next } else { best })
}

pub fn longest<S: AsRef<str>>(items: &[S]) -> Option<String> {
    max_by_key_first(items.iter().map(AsRef::as_ref), |f| fruit_len(f)).map(str::to_string)
}

/// Distinct items, longest first. Equal lengths keep first-seen order.
pub fn sort_by_length_desc<S: AsRef<str>>(items: &[S]) -> Vec<String> {
    distinct(items)
        .into_iter()
        .sorted_by_key(|f| Reverse(fruit_len(f)))
        .collect()
}
