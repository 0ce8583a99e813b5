// Licensed to the Apache Software Foundation (ASF) under one
// or more contributor license agreements.  See the NOTICE file
// distributed with this work for additional information
// regarding copyright ownership.  The ASF licenses this file
// to you under the Apache License, Version 2.0 (the
// "License"); you may not use this file except in compliance
// with the License.  You may obtain a copy of the License at
//
//   http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing,
// software distributed under the License is distributed on an
// "AS IS" BASIS, WITHOUT WARRANTIES OR CONDITIONS OF ANY
// KIND, either express or implied.  See the License for the
// specific language governing permissions and limitations
// under the License.

use super::BloomFilterValue;
use crate::error::Error;

/// Number of flags of a filter created with [`BloomFilter::default()`].
pub const DEFAULT_CAPACITY: usize = 10_000;

/// A fixed-size array of membership flags indexed directly by filter values.
///
/// Provides membership queries with:
/// - No false negatives for in-range values that were inserted and not removed since
/// - False positives whenever two values share a filter index
/// - Constant space usage: one bit per flag, fixed at construction
///
/// Probing and mutating disagree on out-of-range values: [`is_absent()`](Self::is_absent)
/// answers `false` ("cannot rule out presence") while [`insert()`](Self::insert) and
/// [`remove()`](Self::remove) return [`ErrorKind::InvalidIndex`](crate::error::ErrorKind).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BloomFilter {
    /// Total number of flags in the filter
    capacity: usize,
    /// Flags packed into u64 words
    /// Length = ceil(capacity / 64)
    bit_array: Box<[u64]>,
}

impl Default for BloomFilter {
    fn default() -> Self {
        Self::new(DEFAULT_CAPACITY)
    }
}

impl BloomFilter {
    /// Creates a filter with `capacity` flags, all clear.
    ///
    /// A capacity of zero is accepted; every value is then out of range.
    ///
    /// # Examples
    ///
    /// ```
    /// # use bloomfilter::bloom::BloomFilter;
    /// let filter = BloomFilter::new(5);
    /// assert_eq!(filter.capacity(), 5);
    /// assert!(filter.is_absent(&3));
    /// ```
    pub fn new(capacity: usize) -> Self {
        let num_words = capacity.div_ceil(64);
        BloomFilter {
            capacity,
            bit_array: vec![0u64; num_words].into_boxed_slice(),
        }
    }

    /// Tests whether a value is definitely not in the set.
    ///
    /// Returns:
    /// - `true`: the flag at the value's index is clear, the value was **definitely not**
    ///   inserted (or was removed since)
    /// - `false`: the flag is set, or the index lies outside `0..capacity`; the value is
    ///   **possibly** present
    ///
    /// # Examples
    ///
    /// ```
    /// # use bloomfilter::bloom::BloomFilter;
    /// let mut filter = BloomFilter::default();
    /// filter.insert(&10).unwrap();
    ///
    /// assert!(filter.is_absent(&20));
    /// assert!(!filter.is_absent(&10));
    /// assert!(!filter.is_absent(&-1)); // out of range is never reported absent
    /// ```
    pub fn is_absent<V: BloomFilterValue + ?Sized>(&self, value: &V) -> bool {
        match self.bit_index(value.filter_value()) {
            Some(bit_index) => !self.get_bit(bit_index),
            None => false,
        }
    }

    /// Tests whether a value is possibly in the set.
    ///
    /// This is exactly `!self.is_absent(value)`, so out-of-range values report `true`.
    pub fn contains<V: BloomFilterValue + ?Sized>(&self, value: &V) -> bool {
        !self.is_absent(value)
    }

    /// Inserts a value by setting the flag at its filter index.
    ///
    /// Inserting the same index again has no further effect.
    ///
    /// # Errors
    ///
    /// Returns [`ErrorKind::InvalidIndex`](crate::error::ErrorKind::InvalidIndex) if the
    /// filter value lies outside `0..capacity`. The filter is left unchanged.
    ///
    /// # Examples
    ///
    /// ```
    /// # use bloomfilter::bloom::BloomFilter;
    /// # use bloomfilter::error::ErrorKind;
    /// let mut filter = BloomFilter::new(1);
    /// filter.insert(&0).unwrap();
    ///
    /// let err = filter.insert(&20).unwrap_err();
    /// assert_eq!(err.kind(), ErrorKind::InvalidIndex);
    /// ```
    pub fn insert<V: BloomFilterValue + ?Sized>(&mut self, value: &V) -> Result<(), Error> {
        let index = value.filter_value();
        let bit_index = self
            .bit_index(index)
            .ok_or_else(|| Error::invalid_index(index, self.capacity))?;
        self.set_bit(bit_index);
        Ok(())
    }

    /// Clears the flag at `index`.
    ///
    /// The filter cannot tell which values set a flag. Every value sharing `index` is
    /// reported absent afterwards, including values that were inserted and never meant to be
    /// removed. Callers accept these false negatives when they use this method.
    ///
    /// # Errors
    ///
    /// Returns [`ErrorKind::InvalidIndex`](crate::error::ErrorKind::InvalidIndex) if `index`
    /// lies outside `0..capacity`. The filter is left unchanged.
    ///
    /// # Examples
    ///
    /// ```
    /// # use bloomfilter::bloom::BloomFilter;
    /// let mut filter = BloomFilter::new(5);
    /// filter.insert(&0).unwrap();
    /// assert!(!filter.is_absent(&0));
    ///
    /// filter.remove(0).unwrap();
    /// assert!(filter.is_absent(&0));
    /// assert!(filter.remove(5).is_err());
    /// ```
    pub fn remove(&mut self, index: i64) -> Result<(), Error> {
        let bit_index = self
            .bit_index(index)
            .ok_or_else(|| Error::invalid_index(index, self.capacity))?;
        self.clear_bit(bit_index);
        Ok(())
    }

    /// Returns the number of flags currently set.
    ///
    /// Values that share an index are counted once, so this is at most the number of
    /// distinct values inserted. Scans the whole filter.
    ///
    /// # Examples
    ///
    /// ```
    /// # use bloomfilter::bloom::BloomFilter;
    /// let mut filter = BloomFilter::new(5);
    /// for i in 1..5 {
    ///     filter.insert(&i).unwrap();
    /// }
    /// filter.insert(&4).unwrap();
    /// assert_eq!(filter.count(), 4);
    /// ```
    pub fn count(&self) -> usize {
        self.bit_array
            .iter()
            .map(|word| word.count_ones() as usize)
            .sum()
    }

    /// Returns whether no flag is set.
    pub fn is_empty(&self) -> bool {
        self.bit_array.iter().all(|&word| word == 0)
    }

    /// Resets the filter to its initial state.
    ///
    /// Same as calling [`remove()`](Self::remove) on every index in `0..capacity`; the
    /// capacity is preserved.
    pub fn reset(&mut self) {
        self.bit_array.fill(0);
    }

    /// Returns the total number of flags in the filter.
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Returns the fraction of flags set, `0.0` for a zero-capacity filter.
    ///
    /// The closer to `1.0`, the more likely an absent value collides with a set flag.
    pub fn load_factor(&self) -> f64 {
        if self.capacity == 0 {
            return 0.0;
        }
        self.count() as f64 / self.capacity as f64
    }

    /// Maps a filter value to a flag position, `None` when outside `0..capacity`.
    fn bit_index(&self, index: i64) -> Option<usize> {
        usize::try_from(index)
            .ok()
            .filter(|&bit_index| bit_index < self.capacity)
    }

    /// Gets the value of a single bit.
    fn get_bit(&self, bit_index: usize) -> bool {
        let word_index = bit_index >> 6; // Equivalent to bit_index / 64
        let mask = 1u64 << (bit_index & 63);
        (self.bit_array[word_index] & mask) != 0
    }

    fn set_bit(&mut self, bit_index: usize) {
        let word_index = bit_index >> 6;
        let mask = 1u64 << (bit_index & 63);
        self.bit_array[word_index] |= mask;
    }

    fn clear_bit(&mut self, bit_index: usize) {
        let word_index = bit_index >> 6;
        let mask = 1u64 << (bit_index & 63);
        self.bit_array[word_index] &= !mask;
    }
}

#[cfg(test)]
mod tests {
    use super::BloomFilter;
    use super::DEFAULT_CAPACITY;
    use crate::error::ErrorKind;

    #[test]
    fn test_default_capacity() {
        let filter = BloomFilter::default();
        assert_eq!(filter.capacity(), DEFAULT_CAPACITY);
        assert_eq!(filter.bit_array.len(), 157);
        assert!(filter.is_empty());
        assert_eq!(filter.count(), 0);
    }

    #[test]
    fn test_word_boundaries() {
        let mut filter = BloomFilter::new(129);
        for index in [0, 63, 64, 127, 128] {
            assert!(filter.is_absent(&index));
            filter.insert(&index).unwrap();
            assert!(!filter.is_absent(&index));
        }
        assert_eq!(filter.count(), 5);
        assert_eq!(filter.bit_array[..], [1u64 | 1u64 << 63, 1u64 | 1u64 << 63, 1u64]);

        filter.remove(63).unwrap();
        filter.remove(64).unwrap();
        assert!(filter.is_absent(&63));
        assert!(filter.is_absent(&64));
        assert!(!filter.is_absent(&0));
        assert!(!filter.is_absent(&127));
        assert_eq!(filter.count(), 3);
    }

    #[test]
    fn test_padding_bits_are_out_of_range() {
        // 70 flags occupy two words; positions 70..128 exist in storage only.
        let mut filter = BloomFilter::new(70);
        assert!(!filter.is_absent(&70));
        assert!(!filter.is_absent(&127));

        let err = filter.insert(&70).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidIndex);
        assert!(filter.remove(127).is_err());
        assert!(filter.is_empty());
    }

    #[test]
    fn test_zero_capacity() {
        let mut filter = BloomFilter::new(0);
        assert_eq!(filter.capacity(), 0);
        assert!(!filter.is_absent(&0));
        assert!(filter.contains(&0));
        assert!(filter.insert(&0).is_err());
        assert!(filter.remove(0).is_err());
        assert_eq!(filter.count(), 0);
        assert_eq!(filter.load_factor(), 0.0);
    }

    #[test]
    fn test_failed_mutation_leaves_filter_unchanged() {
        let mut filter = BloomFilter::new(5);
        filter.insert(&2).unwrap();
        let before = filter.clone();

        assert!(filter.insert(&5).is_err());
        assert!(filter.insert(&-1).is_err());
        assert!(filter.remove(i64::MAX).is_err());
        assert!(filter.remove(i64::MIN).is_err());
        assert_eq!(filter, before);
    }

    #[test]
    fn test_reset() {
        let mut filter = BloomFilter::new(10);
        filter.insert(&3).unwrap();
        filter.insert(&9).unwrap();
        assert!(!filter.is_empty());

        filter.reset();
        assert!(filter.is_empty());
        assert!(filter.is_absent(&3));
        assert_eq!(filter.capacity(), 10);
    }

    #[test]
    fn test_load_factor() {
        let mut filter = BloomFilter::new(4);
        assert_eq!(filter.load_factor(), 0.0);
        filter.insert(&0).unwrap();
        assert_eq!(filter.load_factor(), 0.25);
        filter.insert(&1).unwrap();
        filter.insert(&2).unwrap();
        filter.insert(&3).unwrap();
        assert_eq!(filter.load_factor(), 1.0);
    }
}
