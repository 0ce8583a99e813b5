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

use bloomfilter::bloom::BloomFilterValue;

/// Element whose filter value is fixed at construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExampleValue(pub i64);

impl BloomFilterValue for ExampleValue {
    fn filter_value(&self) -> i64 {
        self.0
    }
}

/// Element that derives its index from a string key, the way callers are expected to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NamedValue {
    pub name: String,
    pub buckets: u32,
}

impl BloomFilterValue for NamedValue {
    fn filter_value(&self) -> i64 {
        let sum: u32 = self.name.bytes().map(u32::from).sum();
        i64::from(sum % self.buckets)
    }
}
