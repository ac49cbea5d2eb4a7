use rand::Rng;
use rand::seq::SliceRandom;

use crate::error::{Error, Result};

/// Ordered display items, optionally interleaved with a buffer item.
///
/// With a buffer the effective sequence is `items[0], buffer, items[1],
/// buffer, ...`, so content sits at even indices and the buffer at odd ones.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ItemSequence {
    items: Vec<String>,
    buffer: Option<String>,
}

impl ItemSequence {
    pub fn new(items: Vec<String>, buffer: Option<String>) -> Result<Self> {
        if items.is_empty() {
            return Err(Error::EmptySequence);
        }
        Ok(Self { items, buffer })
    }

    /// Reorders the content items. Buffer positions are unaffected.
    pub fn shuffled<R: Rng + ?Sized>(mut self, rng: &mut R) -> Self {
        self.items.shuffle(rng);
        self
    }

    /// Effective length, buffer slots included. Always at least 1.
    pub fn len(&self) -> usize {
        match self.buffer {
            Some(_) => self.items.len() * 2,
            None => self.items.len(),
        }
    }

    pub fn content_len(&self) -> usize {
        self.items.len()
    }

    pub fn has_buffer(&self) -> bool {
        self.buffer.is_some()
    }

    pub fn is_buffer(&self, index: usize) -> bool {
        self.buffer.is_some() && index % 2 == 1
    }

    /// Item at an effective index, wrapped into range.
    pub fn get(&self, index: usize) -> &str {
        let index = index % self.len();
        match &self.buffer {
            Some(buffer) if index % 2 == 1 => buffer,
            Some(_) => &self.items[index / 2],
            None => &self.items[index],
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> + '_ {
        (0..self.len()).map(move |i| self.get(i))
    }
}
