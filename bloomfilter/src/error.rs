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

//! Error types for bloom filter operations

use std::fmt;

/// ErrorKind is all kinds of Error of bloomfilter.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum ErrorKind {
    /// The filter value does not address a flag of the filter.
    InvalidIndex,
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            ErrorKind::InvalidIndex => "InvalidIndex",
        })
    }
}

/// Error is the error struct returned by fallible [`BloomFilter`](crate::bloom::BloomFilter)
/// operations.
///
/// # Examples
///
/// ```
/// # use bloomfilter::bloom::BloomFilter;
/// # use bloomfilter::error::ErrorKind;
/// let mut filter = BloomFilter::new(1);
/// let err = filter.insert(&20).unwrap_err();
/// assert_eq!(err.kind(), ErrorKind::InvalidIndex);
/// assert_eq!(err.context("index"), Some("20"));
/// assert_eq!(err.context("capacity"), Some("1"));
/// ```
pub struct Error {
    kind: ErrorKind,
    message: &'static str,
    context: Vec<(&'static str, String)>,
}

impl Error {
    /// Return error's kind.
    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    /// Return error's message.
    pub fn message(&self) -> &str {
        self.message
    }

    /// Return the context value recorded under `key`, if any.
    pub fn context(&self, key: &str) -> Option<&str> {
        self.context
            .iter()
            .find(|(k, _)| *k == key)
            .map(|(_, v)| v.as_str())
    }
}

impl Error {
    fn new(kind: ErrorKind, message: &'static str) -> Self {
        Self {
            kind,
            message,
            context: vec![],
        }
    }

    fn with_context(mut self, key: &'static str, value: impl ToString) -> Self {
        self.context.push((key, value.to_string()));
        self
    }

    pub(crate) fn invalid_index(index: i64, capacity: usize) -> Self {
        Self::new(ErrorKind::InvalidIndex, "invalid index value")
            .with_context("index", index)
            .with_context("capacity", capacity)
    }

    /// Writes `sep`-joined `key{kv}value` pairs.
    fn write_context(&self, f: &mut fmt::Formatter<'_>, kv: &str, sep: &str) -> fmt::Result {
        for (i, (k, v)) in self.context.iter().enumerate() {
            if i > 0 {
                f.write_str(sep)?;
            }
            write!(f, "{k}{kv}{v}")?;
        }
        Ok(())
    }
}

impl fmt::Debug for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if f.alternate() {
            return f
                .debug_struct("Error")
                .field("kind", &self.kind)
                .field("message", &self.message)
                .field("context", &self.context)
                .finish();
        }

        writeln!(f, "{} => {}", self.kind, self.message)?;
        if !self.context.is_empty() {
            f.write_str("\nContext:\n   ")?;
            self.write_context(f, ": ", "\n   ")?;
            writeln!(f)?;
        }
        Ok(())
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.kind)?;
        if !self.context.is_empty() {
            f.write_str(", context: { ")?;
            self.write_context(f, ": ", ", ")?;
            f.write_str(" }")?;
        }
        write!(f, " => {}", self.message)
    }
}

impl std::error::Error for Error {}
