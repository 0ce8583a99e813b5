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

//! Fixed-size membership filter indexed directly by caller-supplied filter values.
//!
//! A Bloom filter answers membership queries with either "possibly in set" or "definitely not
//! in set". This one keeps a single flag per index and performs no hashing: every element
//! supplies its own index through [`BloomFilterValue`], and that index selects the flag.
//!
//! # Properties
//!
//! - **No false negatives**: an inserted value is never reported absent, unless a flag it
//!   maps to was explicitly removed
//! - **Possible false positives**: values sharing an index are indistinguishable
//! - **Fixed size**: the capacity is chosen at construction and never changes
//!
//! # Usage
//!
//! ```rust
//! use bloomfilter::bloom::BloomFilter;
//! use bloomfilter::bloom::BloomFilterValue;
//!
//! struct Port(u16);
//!
//! impl BloomFilterValue for Port {
//!     fn filter_value(&self) -> i64 {
//!         i64::from(self.0)
//!     }
//! }
//!
//! let mut filter = BloomFilter::new(65_536);
//! filter.insert(&Port(443)).unwrap();
//!
//! assert!(!filter.is_absent(&Port(443))); // possibly present
//! assert!(filter.is_absent(&Port(80))); // definitely absent
//! assert_eq!(filter.count(), 1);
//! ```
//!
//! # Out-of-range values
//!
//! Values whose filter index lies outside `0..capacity` are treated asymmetrically:
//!
//! - [`BloomFilter::is_absent`] returns `false`, since absence cannot be proven
//! - [`BloomFilter::insert`] and [`BloomFilter::remove`] fail with
//!   [`ErrorKind::InvalidIndex`](crate::error::ErrorKind::InvalidIndex) and leave the filter
//!   untouched
//!
//! # Removal
//!
//! [`BloomFilter::remove`] clears a single flag. When several values share that flag, all of
//! them are reported absent afterwards.
//!
//! # Implementation Details
//!
//! - Flags packed in `u64` words
//! - `&mut self` on every mutation; share across threads behind a lock

mod sketch;
mod value;

pub use self::sketch::BloomFilter;
pub use self::sketch::DEFAULT_CAPACITY;
pub use self::value::BloomFilterValue;
