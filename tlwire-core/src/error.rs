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

//! Error type shared by every encode/decode operation.
//!
//! All four wire-level failures are terminal to the serialize/deserialize
//! call that raised them: field boundaries are only defined by correct
//! parsing of every preceding field, so there is no local recovery and no
//! partially decoded object is ever handed back to the caller.

use std::borrow::Cow;

use thiserror::Error;

/// Error type for TL serialization and deserialization operations.
///
/// Prefer the static constructor functions ([`Error::out_of_range`],
/// [`Error::end_of_buffer`], [`Error::invalid_data`]) over constructing
/// message-carrying variants directly.
#[derive(Error, Debug, PartialEq)]
#[non_exhaustive]
pub enum Error {
    /// A value handed to the writer does not fit the requested wire width.
    /// This is a caller programming error and is never retried.
    #[error("{0}")]
    OutOfRange(Cow<'static, str>),

    /// The reader would have to advance past the end of its buffer. The
    /// input is truncated or corrupted; the whole frame is unusable.
    #[error("unexpected end of buffer: need {needed} byte(s) at offset {offset}, buffer holds {len}")]
    UnexpectedEndOfBuffer {
        offset: usize,
        needed: usize,
        len: usize,
    },

    /// A constructor identifier that is not present in the registry. The
    /// field layout behind an unknown identifier is by definition unknown,
    /// so the deserializer never guesses or skips past it.
    #[error("unknown constructor {0:#010x}")]
    UnknownConstructor(u32),

    /// Something other than the fixed vector constructor identifier where a
    /// vector had to start.
    #[error("malformed vector: expected constructor 0x1cb5c415, got {0:#010x}")]
    MalformedVector(u32),

    /// A descriptor and the value produced for one of its parameters
    /// disagree. Indicates a bug in a schema table or variant builder.
    #[error("{0}")]
    InvalidData(Cow<'static, str>),
}

impl Error {
    #[cold]
    pub fn out_of_range<S: Into<Cow<'static, str>>>(msg: S) -> Self {
        Error::OutOfRange(msg.into())
    }

    #[cold]
    pub fn end_of_buffer(offset: usize, needed: usize, len: usize) -> Self {
        Error::UnexpectedEndOfBuffer {
            offset,
            needed,
            len,
        }
    }

    #[cold]
    pub fn invalid_data<S: Into<Cow<'static, str>>>(msg: S) -> Self {
        Error::InvalidData(msg.into())
    }
}
