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

//! Schema registry: the static mapping from 32-bit constructor identifiers
//! to parameter descriptors and variant builders.
//!
//! The registry is built exactly once, on first use, and is immutable and
//! lock-free afterward; every concurrent serialize/deserialize call shares
//! the same `&'static Registry`.

use std::collections::HashMap;
use std::sync::OnceLock;

use crate::error::Error;
use crate::types::{constructors, TlObject, Value};

/// Constructor identifier prefixing every vector on the wire.
pub const VECTOR_CONSTRUCTOR_ID: u32 = 0x1cb5c415;

/// `boolTrue`, the boxed form of `true`.
pub const BOOL_TRUE_ID: u32 = 0x997275b5;

/// `boolFalse`, the boxed form of `false`.
pub const BOOL_FALSE_ID: u32 = 0xbc799737;

/// Which bit of which flags word gates an optional parameter.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Flag {
    pub field: &'static str,
    pub bit: u8,
}

/// Wire type of a single parameter.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ParamType {
    /// A `#` flags word. Carries no application value of its own; its bits
    /// are derived from the presence of the parameters it gates.
    Flags,
    /// Signed 32-bit integer.
    Int,
    /// Signed 64-bit integer.
    Long,
    /// Unsigned 128-bit integer, 16 wire bytes.
    Int128,
    /// Unsigned 256-bit integer, 32 wire bytes.
    Int256,
    /// IEEE-754 binary64.
    Double,
    /// Length-prefixed byte string.
    Bytes,
    /// Length-prefixed UTF-8 string.
    String,
    /// Boxed boolean: `boolTrue`/`boolFalse` constructor identifier, no
    /// payload beyond the identifier.
    Bool,
    /// Flag-bit-only boolean: present iff its bit is set, zero wire bytes.
    True,
    /// Boxed nested object: constructor identifier plus that constructor's
    /// own fields, resolved through the registry.
    Object,
    /// Homogeneous vector of the given element type.
    Vector(&'static ParamType),
}

/// One field of a parameter descriptor: name, wire type, and the flags bit
/// gating its presence if it is optional.
#[derive(Clone, Copy, Debug)]
pub struct Param {
    pub name: &'static str,
    pub ty: ParamType,
    pub flag: Option<Flag>,
}

impl Param {
    pub const fn plain(name: &'static str, ty: ParamType) -> Param {
        Param {
            name,
            ty,
            flag: None,
        }
    }

    pub const fn gated(name: &'static str, ty: ParamType, field: &'static str, bit: u8) -> Param {
        Param {
            name,
            ty,
            flag: Some(Flag { field, bit }),
        }
    }
}

/// Builds the typed variant from field values in descriptor order. Slots
/// are `None` for absent optional fields and for flags words.
pub type Builder = fn(Vec<Option<Value>>) -> Result<TlObject, Error>;

/// Everything the deserializer needs to know about one constructor.
pub struct Entry {
    pub name: &'static str,
    pub params: &'static [Param],
    pub build: Builder,
}

pub struct Registry {
    by_id: HashMap<u32, Entry>,
}

impl Registry {
    /// The process-wide registry over the full shipped schema. Built on
    /// first use, never mutated afterward.
    pub fn global() -> &'static Registry {
        static REGISTRY: OnceLock<Registry> = OnceLock::new();
        REGISTRY.get_or_init(Registry::build)
    }

    fn build() -> Registry {
        let mut by_id = HashMap::new();
        for (id, entry) in constructors() {
            let previous = by_id.insert(id, entry);
            debug_assert!(previous.is_none(), "duplicate constructor {id:#010x}");
        }
        Registry { by_id }
    }

    /// `None` means the identifier is not part of the schema. That is a
    /// normal outcome for forward compatibility; it only becomes an
    /// [`Error::UnknownConstructor`] when a parse actually needs the shape.
    pub fn lookup(&self, id: u32) -> Option<&Entry> {
        self.by_id.get(&id)
    }

    pub fn len(&self) -> usize {
        self.by_id.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_id.is_empty()
    }
}
