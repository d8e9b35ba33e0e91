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

//! Generic serializer: the byte-for-byte inverse of the deserializer.
//!
//! Flags words are computed from which optional fields are present before
//! any field bytes are written; they are never stored on the objects
//! themselves, so the two can never disagree.

use std::collections::HashMap;

use crate::buffer::{Endian, Writer};
use crate::error::Error;
use crate::schema::{Param, ParamType, BOOL_FALSE_ID, BOOL_TRUE_ID, VECTOR_CONSTRUCTOR_ID};
use crate::types::{TlObject, Value};

/// Serializes one object to a fresh buffer: constructor identifier, then
/// fields in descriptor order under the flags/vector/nested-object rules.
pub fn serialize(object: &TlObject) -> Result<Vec<u8>, Error> {
    let mut writer = Writer::new();
    write_object(&mut writer, object)?;
    Ok(writer.into_bytes())
}

/// Appends one boxed object to an existing buffer.
pub fn write_object(writer: &mut Writer, object: &TlObject) -> Result<(), Error> {
    writer.write_int32(object.constructor_id() as i64, Endian::Little)?;
    write_params(writer, object.params(), &object.field_values())
}

fn write_params(
    writer: &mut Writer,
    params: &[Param],
    values: &[Option<Value>],
) -> Result<(), Error> {
    if params.len() != values.len() {
        return Err(Error::invalid_data(format!(
            "descriptor has {} parameters but {} values were produced",
            params.len(),
            values.len()
        )));
    }
    let flags = compute_flags(params, values);
    for (param, value) in params.iter().zip(values) {
        match (&param.ty, value) {
            (ParamType::Flags, _) => {
                let word = flags.get(param.name).copied().unwrap_or(0);
                writer.write_int32(word as i64, Endian::Little)?;
            }
            // presence is the flag bit itself, no payload
            (ParamType::True, _) => {}
            // optional field absent, zero wire bytes
            (_, None) => {}
            (ty, Some(value)) => write_value(writer, ty, value)?,
        }
    }
    Ok(())
}

/// Derives every flags word from the presence of the parameters it gates.
fn compute_flags(params: &[Param], values: &[Option<Value>]) -> HashMap<&'static str, u32> {
    let mut flags: HashMap<&'static str, u32> = HashMap::new();
    for (param, value) in params.iter().zip(values) {
        let Some(flag) = param.flag else {
            continue;
        };
        let present = match (&param.ty, value) {
            (ParamType::True, Some(Value::Bool(b))) => *b,
            (ParamType::True, _) => false,
            (_, value) => value.is_some(),
        };
        let word = flags.entry(flag.field).or_insert(0);
        if present {
            *word |= 1 << flag.bit;
        }
    }
    flags
}

fn write_value(writer: &mut Writer, ty: &ParamType, value: &Value) -> Result<(), Error> {
    match (ty, value) {
        (ParamType::Int, Value::Int(v)) => writer.write_int32(*v as i64, Endian::Little)?,
        (ParamType::Long, Value::Long(v)) => writer.write_int64(*v as i128, Endian::Little)?,
        (ParamType::Int128, Value::Int128(v)) => writer.write_int128(v, Endian::Little)?,
        (ParamType::Int256, Value::Int256(v)) => writer.write_int256(v, Endian::Little)?,
        (ParamType::Double, Value::Double(v)) => writer.write_double(*v),
        (ParamType::Bytes, Value::Bytes(v)) => writer.write_bytes(v)?,
        (ParamType::String, Value::String(v)) => writer.write_string(v)?,
        (ParamType::Bool, Value::Bool(v)) => {
            let id = if *v { BOOL_TRUE_ID } else { BOOL_FALSE_ID };
            writer.write_int32(id as i64, Endian::Little)?;
        }
        (ParamType::Object, Value::Object(object)) => write_object(writer, object)?,
        (ParamType::Vector(element), Value::Vector(items)) => {
            writer.write_int32(VECTOR_CONSTRUCTOR_ID as i64, Endian::Little)?;
            writer.write_int32(items.len() as i64, Endian::Little)?;
            for item in items {
                write_value(writer, element, item)?;
            }
        }
        (ty, value) => {
            return Err(Error::invalid_data(format!(
                "value {value:?} does not match wire type {ty:?}"
            )))
        }
    }
    Ok(())
}
