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

use bloomfilter::bloom::BloomFilter;
use bloomfilter::bloom::BloomFilterValue;

/// A word indexed by the sum of its bytes, folded into the filter's capacity.
struct Word<'a> {
    text: &'a str,
    capacity: usize,
}

impl BloomFilterValue for Word<'_> {
    fn filter_value(&self) -> i64 {
        let sum: u64 = self.text.bytes().map(u64::from).sum();
        (sum % self.capacity as u64) as i64
    }
}

fn main() {
    // Create a filter with the default 10,000 flags
    let mut filter = BloomFilter::default();
    let capacity = filter.capacity();
    println!("Created filter with {} flags", capacity);

    // Add some values
    let words = ["apple", "banana", "cherry", "damson", "elder"];
    println!("\nInserting {} words...", words.len());
    for text in words {
        let word = Word { text, capacity };
        if let Err(err) = filter.insert(&word) {
            println!("Failed to insert {text}: {err}");
        }
    }
    println!("Flags set: {}", filter.count());
    println!("Load factor: {:.4}", filter.load_factor());

    // Probe
    println!("\nProbing:");
    for text in ["apple", "grape", "elppa"] {
        let word = Word { text, capacity };
        let answer = if filter.is_absent(&word) {
            "definitely absent"
        } else {
            "possibly present"
        };
        println!("  {text} (index {}): {answer}", word.filter_value());
    }

    // Integers index themselves
    println!("\nOut-of-range values:");
    println!("  is_absent(20_000) = {}", filter.is_absent(&20_000));
    match filter.insert(&20_000) {
        Ok(()) => println!("  insert(20_000) succeeded"),
        Err(err) => println!("  insert(20_000) failed: {err}"),
    }

    // Removing a flag silences every word sharing it
    let apple = Word {
        text: "apple",
        capacity,
    };
    println!("\nRemoving index {}...", apple.filter_value());
    if let Err(err) = filter.remove(apple.filter_value()) {
        println!("Failed to remove: {err}");
    }
    let elppa = Word {
        text: "elppa",
        capacity,
    };
    println!("  apple absent: {}", filter.is_absent(&apple));
    println!("  elppa absent: {}", filter.is_absent(&elppa));
    println!("Flags set: {}", filter.count());
}
