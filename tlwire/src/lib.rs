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

//! # tlwire
//!
//! Binary wire-protocol codec for the TL remote-procedure-call schema:
//! typed, schema-described objects to an exact byte stream and back,
//! byte-for-byte reversibly.
//!
//! This crate is the public face of [`tlwire_core`]; it re-exports the
//! primitive codec, the constructor registry, the typed object set and the
//! generic serializer/deserializer pair.
//!
//! ## Example
//!
//! ```rust
//! use tlwire::{deserialize_object, Endian, Error, GeoPoint, Reader, Registry, TlObject};
//!
//! # fn main() -> Result<(), Error> {
//! let point = TlObject::GeoPoint(GeoPoint {
//!     longitude: 13.41,
//!     latitude: 52.52,
//!     access_hash: 7,
//!     accuracy_radius: None,
//! });
//!
//! let bytes = point.serialize()?;
//!
//! let mut reader = Reader::new(&bytes);
//! let back = deserialize_object(&mut reader, Registry::global())?;
//! assert_eq!(point, back);
//!
//! // absent optional field: flags word is zero, no payload bytes
//! let mut reader = Reader::new(&bytes);
//! reader.read_raw(4)?; // constructor identifier
//! assert_eq!(reader.read_uint32(Endian::Little)?, 0);
//! # Ok(())
//! # }
//! ```

pub use tlwire_core::buffer::{Endian, Reader, Writer};
pub use tlwire_core::deserialize::{deserialize, deserialize_object};
pub use tlwire_core::error::Error;
pub use tlwire_core::schema::{
    Builder, Entry, Flag, Param, ParamType, Registry, BOOL_FALSE_ID, BOOL_TRUE_ID,
    VECTOR_CONSTRUCTOR_ID,
};
pub use tlwire_core::serialize::{serialize, write_object};
pub use tlwire_core::storage::{KeyPart, MemoryStorage, Storage};
pub use tlwire_core::types::{
    Config, DcOption, GeoPoint, MissingInvitee, PqInnerDataDc, ResPq, TlObject, Value,
};
