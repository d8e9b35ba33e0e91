// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Key-value storage boundary for session/cache persistence.
//!
//! The codec treats stored values as opaque serialized blobs it alone knows
//! how to decode; keys are ordered sequences of opaque parts. Only the
//! interface and the reference in-memory backend live here; real backends
//! are external collaborators.

use std::collections::BTreeMap;

/// One component of a storage key.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum KeyPart {
    String(String),
    Int(i64),
}

impl From<&str> for KeyPart {
    fn from(v: &str) -> KeyPart {
        KeyPart::String(v.to_string())
    }
}

impl From<String> for KeyPart {
    fn from(v: String) -> KeyPart {
        KeyPart::String(v)
    }
}

impl From<i64> for KeyPart {
    fn from(v: i64) -> KeyPart {
        KeyPart::Int(v)
    }
}

/// Pluggable key-value storage. Setting `None` removes the key.
pub trait Storage {
    fn get(&self, key: &[KeyPart]) -> Option<Vec<u8>>;

    fn set(&mut self, key: &[KeyPart], value: Option<&[u8]>);

    /// Lazily yields every stored pair whose key starts with `prefix`, in
    /// key order.
    fn entries<'a>(
        &'a self,
        prefix: &'a [KeyPart],
    ) -> Box<dyn Iterator<Item = (&'a [KeyPart], &'a [u8])> + 'a>;
}

/// Reference backend over a [`BTreeMap`]; prefix enumeration is a range
/// scan, possible because keys sharing a prefix sort contiguously.
#[derive(Debug, Default)]
pub struct MemoryStorage {
    map: BTreeMap<Vec<KeyPart>, Vec<u8>>,
}

impl MemoryStorage {
    pub fn new() -> MemoryStorage {
        MemoryStorage::default()
    }

    pub fn len(&self) -> usize {
        self.map.len()
    }

    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }
}

impl Storage for MemoryStorage {
    fn get(&self, key: &[KeyPart]) -> Option<Vec<u8>> {
        self.map.get(key).cloned()
    }

    fn set(&mut self, key: &[KeyPart], value: Option<&[u8]>) {
        match value {
            Some(value) => {
                self.map.insert(key.to_vec(), value.to_vec());
            }
            None => {
                self.map.remove(key);
            }
        }
    }

    fn entries<'a>(
        &'a self,
        prefix: &'a [KeyPart],
    ) -> Box<dyn Iterator<Item = (&'a [KeyPart], &'a [u8])> + 'a> {
        Box::new(
            self.map
                .range(prefix.to_vec()..)
                .take_while(move |(key, _)| key.starts_with(prefix))
                .map(|(key, value)| (key.as_slice(), value.as_slice())),
        )
    }
}
