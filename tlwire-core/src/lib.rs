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

//! # tlwire-core
//!
//! Core implementation of the TL binary wire codec used by the client. It
//! turns schema-described typed objects into an exact byte stream and byte
//! streams back into typed objects, byte-for-byte reversibly.
//!
//! ## Architecture
//!
//! - **`buffer`**: primitive codec, `Writer`/`Reader` over fixed-width
//!   integers (24 to 256 bits), doubles and padded length-prefixed strings
//! - **`schema`**: parameter descriptors and the immutable constructor
//!   registry, built once and shared process-wide
//! - **`types`**: the closed set of typed schema objects and their variant
//!   builders
//! - **`deserialize`**: schema-driven recursive-descent reader
//! - **`serialize`**: the byte-for-byte inverse, invoked from each object
//! - **`storage`**: key-value persistence boundary for serialized blobs
//! - **`error`**: error taxonomy shared by all of the above
//!
//! ## Round-trip contract
//!
//! For every well-formed input, `serialize(deserialize(bytes)) == bytes`
//! and `deserialize(serialize(object)) == object`. Nothing at this layer
//! interprets field semantics; the codec only guarantees the bytes.
//!
//! ```rust
//! use tlwire_core::buffer::Reader;
//! use tlwire_core::deserialize::deserialize_object;
//! use tlwire_core::error::Error;
//! use tlwire_core::schema::Registry;
//! use tlwire_core::types::TlObject;
//!
//! # fn main() -> Result<(), Error> {
//! let object = TlObject::GeoPointEmpty;
//! let bytes = object.serialize()?;
//! let mut reader = Reader::new(&bytes);
//! let back = deserialize_object(&mut reader, Registry::global())?;
//! assert_eq!(object, back);
//! # Ok(())
//! # }
//! ```

pub mod buffer;
pub mod deserialize;
pub mod error;
pub mod schema;
pub mod serialize;
pub mod storage;
pub mod types;
