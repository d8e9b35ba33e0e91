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

//! Generic deserializer: schema-driven recursive descent from a byte
//! stream to a fully typed object graph.
//!
//! A parse either completes or fails; there is no partial-object recovery,
//! because the boundary between fields is defined only by correct parsing
//! of every preceding field. All errors abort the whole call.

use std::collections::HashMap;

use crate::buffer::{Endian, Reader};
use crate::error::Error;
use crate::schema::{Entry, ParamType, Registry, BOOL_FALSE_ID, BOOL_TRUE_ID, VECTOR_CONSTRUCTOR_ID};
use crate::types::{TlObject, Value};

/// Vector element buffers are grown incrementally past this point so that a
/// corrupt count cannot trigger an absurd up-front allocation.
const VECTOR_PREALLOC_LIMIT: usize = 4096;

/// Reads a constructor identifier, resolves it through the registry and
/// materializes the object behind it.
pub fn deserialize_object(reader: &mut Reader, registry: &Registry) -> Result<TlObject, Error> {
    let id = reader.read_uint32(Endian::Little)?;
    let entry = registry.lookup(id).ok_or(Error::UnknownConstructor(id))?;
    deserialize(reader, registry, entry)
}

/// Materializes one object whose constructor identifier has already been
/// consumed and resolved. Consumes exactly the bytes the matching
/// serializer would have produced, and no more.
pub fn deserialize(
    reader: &mut Reader,
    registry: &Registry,
    entry: &Entry,
) -> Result<TlObject, Error> {
    let mut flags: HashMap<&'static str, u32> = HashMap::new();
    let mut values: Vec<Option<Value>> = Vec::with_capacity(entry.params.len());
    for param in entry.params {
        if param.ty == ParamType::Flags {
            let word = reader.read_uint32(Endian::Little)?;
            flags.insert(param.name, word);
            values.push(None);
            continue;
        }
        if let Some(flag) = param.flag {
            let word = flags.get(flag.field).copied().unwrap_or(0);
            let present = word >> flag.bit & 1 == 1;
            if param.ty == ParamType::True {
                values.push(Some(Value::Bool(present)));
                continue;
            }
            if !present {
                values.push(None);
                continue;
            }
        }
        values.push(Some(read_value(reader, registry, &param.ty)?));
    }
    (entry.build)(values)
}

fn read_value(reader: &mut Reader, registry: &Registry, ty: &ParamType) -> Result<Value, Error> {
    Ok(match ty {
        ParamType::Flags | ParamType::True => {
            // both are zero-payload and handled by the field loop; a
            // descriptor using them as a vector element is broken
            return Err(Error::invalid_data(format!(
                "wire type {ty:?} carries no payload of its own"
            )));
        }
        ParamType::Int => Value::Int(reader.read_int32(Endian::Little)?),
        ParamType::Long => Value::Long(reader.read_int64(Endian::Little)?),
        ParamType::Int128 => Value::Int128(reader.read_uint128(Endian::Little)?),
        ParamType::Int256 => Value::Int256(reader.read_uint256(Endian::Little)?),
        ParamType::Double => Value::Double(reader.read_double()?),
        ParamType::Bytes => Value::Bytes(reader.read_bytes()?.to_vec()),
        ParamType::String => Value::String(reader.read_string()?),
        ParamType::Bool => {
            let id = reader.read_uint32(Endian::Little)?;
            match id {
                BOOL_TRUE_ID => Value::Bool(true),
                BOOL_FALSE_ID => Value::Bool(false),
                other => return Err(Error::UnknownConstructor(other)),
            }
        }
        ParamType::Object => Value::Object(deserialize_object(reader, registry)?),
        ParamType::Vector(element) => {
            let id = reader.read_uint32(Endian::Little)?;
            if id != VECTOR_CONSTRUCTOR_ID {
                return Err(Error::MalformedVector(id));
            }
            let count = reader.read_uint32(Endian::Little)? as usize;
            let mut items = Vec::with_capacity(count.min(VECTOR_PREALLOC_LIMIT));
            for _ in 0..count {
                items.push(read_value(reader, registry, element)?);
            }
            Value::Vector(items)
        }
    })
}
