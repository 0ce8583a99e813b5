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

use std::rc::Rc;
use std::sync::Arc;

/// A value that can be recorded in a [`BloomFilter`](super::BloomFilter).
///
/// The filter does not hash anything: [`filter_value`](Self::filter_value) is used verbatim as
/// the index of the flag that represents this value. Deriving that index (from a hash, a field,
/// a counter, ...) is entirely up to the implementer.
///
/// The returned index should be the same every time it is requested for the same logical
/// element, and ideally spread uniformly over `0..capacity` so that distinct elements rarely
/// share a flag. Neither property is checked; range validity is checked by the filter at call
/// time.
///
/// # Examples
///
/// ```
/// # use bloomfilter::bloom::BloomFilterValue;
/// struct UserId(u32);
///
/// impl BloomFilterValue for UserId {
///     fn filter_value(&self) -> i64 {
///         i64::from(self.0 % 10_000)
///     }
/// }
///
/// assert_eq!(UserId(10_042).filter_value(), 42);
/// ```
pub trait BloomFilterValue {
    /// Returns the index of the flag representing this value.
    fn filter_value(&self) -> i64;
}

macro_rules! impl_lossless {
    ($($t:ty),*) => {
        $(
            impl BloomFilterValue for $t {
                fn filter_value(&self) -> i64 {
                    i64::from(*self)
                }
            }
        )*
    };
}

// Values above i64::MAX saturate; they are out of range for every filter.
macro_rules! impl_saturating {
    ($($t:ty),*) => {
        $(
            impl BloomFilterValue for $t {
                fn filter_value(&self) -> i64 {
                    i64::try_from(*self).unwrap_or(i64::MAX)
                }
            }
        )*
    };
}

impl_lossless!(i8, i16, i32, i64, u8, u16, u32);
impl_saturating!(isize, u64, usize);

impl<T: BloomFilterValue + ?Sized> BloomFilterValue for &T {
    fn filter_value(&self) -> i64 {
        (**self).filter_value()
    }
}

impl<T: BloomFilterValue + ?Sized> BloomFilterValue for &mut T {
    fn filter_value(&self) -> i64 {
        (**self).filter_value()
    }
}

impl<T: BloomFilterValue + ?Sized> BloomFilterValue for Box<T> {
    fn filter_value(&self) -> i64 {
        (**self).filter_value()
    }
}

impl<T: BloomFilterValue + ?Sized> BloomFilterValue for Rc<T> {
    fn filter_value(&self) -> i64 {
        (**self).filter_value()
    }
}

impl<T: BloomFilterValue + ?Sized> BloomFilterValue for Arc<T> {
    fn filter_value(&self) -> i64 {
        (**self).filter_value()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_integers_index_themselves() {
        assert_eq!(7_u8.filter_value(), 7);
        assert_eq!((-7_i8).filter_value(), -7);
        assert_eq!(10_000_u32.filter_value(), 10_000);
        assert_eq!(i64::MIN.filter_value(), i64::MIN);
        assert_eq!(42_usize.filter_value(), 42);
    }

    #[test]
    fn test_wide_unsigned_saturates() {
        assert_eq!(u64::MAX.filter_value(), i64::MAX);
        assert_eq!((i64::MAX as u64 + 1).filter_value(), i64::MAX);
        assert_eq!(usize::MAX.filter_value(), i64::MAX);
    }

    #[test]
    fn test_pointers_forward() {
        let boxed: Box<dyn BloomFilterValue> = Box::new(3_i32);
        assert_eq!(boxed.filter_value(), 3);
        assert_eq!(Rc::new(4_u16).filter_value(), 4);
        assert_eq!(Arc::new(5_i64).filter_value(), 5);
        assert_eq!((&&6_u8).filter_value(), 6);
    }
}
