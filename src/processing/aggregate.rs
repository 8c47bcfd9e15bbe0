// Frequency counting for "most popular" statistics
// Author: Gabriel Demetrios Lafis

use std::collections::HashMap;
use std::hash::Hash;

use serde::Serialize;

/// A value together with how often it occurred
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Frequency<T> {
    pub value: T,
    pub count: usize,
}

impl<T> Frequency<T> {
    pub fn new(value: T, count: usize) -> Self {
        Frequency { value, count }
    }
}

/// Counts of distinct values, remembering the order values were first seen.
///
/// Ties between equal counts always resolve to the value seen first, so the
/// mode and the ranking are deterministic for a given input order.
#[derive(Debug, Clone)]
pub struct ValueCounts<K> {
    index: HashMap<K, usize>,
    entries: Vec<Frequency<K>>,
    total: usize,
}

impl<K: Eq + Hash + Clone> ValueCounts<K> {
    pub fn new() -> Self {
        ValueCounts {
            index: HashMap::new(),
            entries: Vec::new(),
            total: 0,
        }
    }

    /// Count one occurrence of a value
    pub fn add(&mut self, value: K) {
        self.total += 1;
        match self.index.get(&value) {
            Some(&i) => self.entries[i].count += 1,
            None => {
                self.index.insert(value.clone(), self.entries.len());
                self.entries.push(Frequency::new(value, 1));
            }
        }
    }

    /// Number of occurrences of a value
    pub fn get(&self, value: &K) -> usize {
        self.index
            .get(value)
            .map(|&i| self.entries[i].count)
            .unwrap_or(0)
    }

    /// Number of distinct values
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Number of values counted, duplicates included
    pub fn total(&self) -> usize {
        self.total
    }

    /// Most frequent value, or `None` when nothing was counted
    pub fn mode(&self) -> Option<Frequency<K>> {
        let mut best: Option<&Frequency<K>> = None;
        for entry in &self.entries {
            // strict comparison keeps the earliest of tied maxima
            if best.map_or(true, |b| entry.count > b.count) {
                best = Some(entry);
            }
        }
        best.cloned()
    }

    /// All values by descending count, ties in first-seen order
    pub fn ranked(&self) -> Vec<Frequency<K>> {
        let mut ranked = self.entries.clone();
        ranked.sort_by(|a, b| b.count.cmp(&a.count));
        ranked
    }
}

impl<K: Eq + Hash + Clone> Default for ValueCounts<K> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: Eq + Hash + Clone> Extend<K> for ValueCounts<K> {
    fn extend<I: IntoIterator<Item = K>>(&mut self, iter: I) {
        for value in iter {
            self.add(value);
        }
    }
}

impl<K: Eq + Hash + Clone> FromIterator<K> for ValueCounts<K> {
    fn from_iter<I: IntoIterator<Item = K>>(iter: I) -> Self {
        let mut counts = ValueCounts::new();
        counts.extend(iter);
        counts
    }
}

/// Most frequent value of an iterator
pub fn mode_of<K, I>(values: I) -> Option<Frequency<K>>
where
    K: Eq + Hash + Clone,
    I: IntoIterator<Item = K>,
{
    values.into_iter().collect::<ValueCounts<K>>().mode()
}
