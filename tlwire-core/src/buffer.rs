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

//! Primitive codec: [`Writer`] appends TL primitives to a growable buffer,
//! [`Reader`] consumes them back from a fixed slice with a forward-only
//! cursor. The two mirror each other one-for-one, including the mandatory
//! zero padding of length-prefixed byte strings.
//!
//! Integers of every width accept both the signed and the unsigned range of
//! that width; negative values are encoded as two's complement. 128-bit and
//! 256-bit integers travel as [`BigInt`] and are projected to exactly
//! width/8 wire bytes.

use byteorder::{ByteOrder, LittleEndian, WriteBytesExt};
use num_bigint::{BigInt, Sign};

use crate::error::Error;

/// Per-call byte order for fixed-width integers. The wire convention is
/// little-endian; big-endian exists for values embedded inside other
/// length-prefixed framing.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Endian {
    #[default]
    Little,
    Big,
}

/// Range check plus two's-complement wrap for widths up to 64 bits.
/// A width of `w` bytes accepts values in `[-2^(8w-1), 2^(8w))`.
fn wrap_fixed(value: i128, width: usize) -> Result<u128, Error> {
    let bits = width as u32 * 8;
    let min = -(1i128 << (bits - 1));
    let max = (1i128 << bits) - 1;
    if value < min || value > max {
        return Err(Error::out_of_range(format!(
            "{value} does not fit in {bits} bits"
        )));
    }
    Ok((value & ((1i128 << bits) - 1)) as u128)
}

/// Range check plus two's-complement wrap for the big-integer widths.
fn wrap_big(value: &BigInt, width: usize) -> Result<Vec<u8>, Error> {
    let bits = width * 8;
    let min = -(BigInt::from(1) << (bits - 1));
    let max = (BigInt::from(1) << bits) - 1;
    if value < &min || value > &max {
        return Err(Error::out_of_range(format!(
            "{value} does not fit in {bits} bits"
        )));
    }
    let modulus = BigInt::from(1) << bits;
    let wrapped = ((value % &modulus) + &modulus) % &modulus;
    let (_, mut bytes) = wrapped.to_bytes_le();
    bytes.resize(width, 0);
    Ok(bytes)
}

#[derive(Default)]
pub struct Writer {
    bf: Vec<u8>,
}

impl Writer {
    pub fn new() -> Writer {
        Writer::default()
    }

    pub fn reset(&mut self) {
        // keep capacity and reset len to 0
        self.bf.clear();
    }

    pub fn len(&self) -> usize {
        self.bf.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bf.is_empty()
    }

    pub fn as_slice(&self) -> &[u8] {
        &self.bf
    }

    pub fn into_bytes(self) -> Vec<u8> {
        self.bf
    }

    /// Appends bytes verbatim, no prefix, no padding.
    pub fn write_raw(&mut self, v: &[u8]) {
        self.bf.extend_from_slice(v);
    }

    fn write_fixed(&mut self, value: i128, width: usize, endian: Endian) -> Result<(), Error> {
        let wrapped = wrap_fixed(value, width)?;
        let le = wrapped.to_le_bytes();
        match endian {
            Endian::Little => self.bf.extend_from_slice(&le[..width]),
            Endian::Big => self.bf.extend(le[..width].iter().rev()),
        }
        Ok(())
    }

    pub fn write_int24(&mut self, value: i64, endian: Endian) -> Result<(), Error> {
        self.write_fixed(value as i128, 3, endian)
    }

    pub fn write_int32(&mut self, value: i64, endian: Endian) -> Result<(), Error> {
        self.write_fixed(value as i128, 4, endian)
    }

    pub fn write_int64(&mut self, value: i128, endian: Endian) -> Result<(), Error> {
        self.write_fixed(value, 8, endian)
    }

    pub fn write_int128(&mut self, value: &BigInt, endian: Endian) -> Result<(), Error> {
        self.write_big(value, 16, endian)
    }

    pub fn write_int256(&mut self, value: &BigInt, endian: Endian) -> Result<(), Error> {
        self.write_big(value, 32, endian)
    }

    fn write_big(&mut self, value: &BigInt, width: usize, endian: Endian) -> Result<(), Error> {
        let mut bytes = wrap_big(value, width)?;
        if endian == Endian::Big {
            bytes.reverse();
        }
        self.bf.extend_from_slice(&bytes);
        Ok(())
    }

    /// IEEE-754 binary64, always little-endian on the wire.
    pub fn write_double(&mut self, value: f64) {
        self.bf.write_f64::<LittleEndian>(value).unwrap();
    }

    /// Length-prefixed byte string. For payloads shorter than 254 bytes the
    /// prefix is one length byte and the whole item is padded with zeros to
    /// a multiple of 4 counted from that byte; otherwise the prefix is 0xFE
    /// plus a 3-byte little-endian length and padding is counted from the
    /// 4-byte prefix. Padding never counts as payload. The length field
    /// tops out below 2^24 bytes; longer payloads are rejected with no
    /// partial bytes written.
    pub fn write_bytes(&mut self, v: &[u8]) -> Result<(), Error> {
        if v.len() >= 1 << 24 {
            return Err(Error::out_of_range(format!(
                "byte string of {} bytes exceeds the 24-bit length prefix",
                v.len()
            )));
        }
        let pad = if v.len() < 254 {
            self.bf.write_u8(v.len() as u8).unwrap();
            (4 - (v.len() + 1) % 4) % 4
        } else {
            self.bf.write_u8(0xFE).unwrap();
            self.bf.write_u24::<LittleEndian>(v.len() as u32).unwrap();
            (4 - v.len() % 4) % 4
        };
        self.bf.extend_from_slice(v);
        self.bf.resize(self.bf.len() + pad, 0);
        Ok(())
    }

    /// UTF-8 encodes and applies the same scheme as [`Writer::write_bytes`].
    pub fn write_string(&mut self, v: &str) -> Result<(), Error> {
        self.write_bytes(v.as_bytes())
    }
}

pub struct Reader<'a> {
    bf: &'a [u8],
    cursor: usize,
}

impl<'a> Reader<'a> {
    pub fn new(bf: &'a [u8]) -> Reader<'a> {
        Reader { bf, cursor: 0 }
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn remaining(&self) -> usize {
        self.bf.len() - self.cursor
    }

    fn ensure(&self, needed: usize) -> Result<(), Error> {
        if self.cursor + needed > self.bf.len() {
            return Err(Error::end_of_buffer(self.cursor, needed, self.bf.len()));
        }
        Ok(())
    }

    /// Consumes exactly `len` bytes, verbatim.
    pub fn read_raw(&mut self, len: usize) -> Result<&'a [u8], Error> {
        self.ensure(len)?;
        let s = &self.bf[self.cursor..self.cursor + len];
        self.cursor += len;
        Ok(s)
    }

    fn read_fixed(&mut self, width: usize, endian: Endian) -> Result<u128, Error> {
        let raw = self.read_raw(width)?;
        let mut le = [0u8; 16];
        match endian {
            Endian::Little => le[..width].copy_from_slice(raw),
            Endian::Big => {
                for (i, b) in raw.iter().rev().enumerate() {
                    le[i] = *b;
                }
            }
        }
        Ok(u128::from_le_bytes(le))
    }

    fn sign_extend(value: u128, bits: u32) -> i128 {
        ((value << (128 - bits)) as i128) >> (128 - bits)
    }

    pub fn read_uint24(&mut self, endian: Endian) -> Result<u32, Error> {
        Ok(self.read_fixed(3, endian)? as u32)
    }

    pub fn read_int24(&mut self, endian: Endian) -> Result<i32, Error> {
        Ok(Self::sign_extend(self.read_fixed(3, endian)?, 24) as i32)
    }

    pub fn read_uint32(&mut self, endian: Endian) -> Result<u32, Error> {
        Ok(self.read_fixed(4, endian)? as u32)
    }

    pub fn read_int32(&mut self, endian: Endian) -> Result<i32, Error> {
        Ok(Self::sign_extend(self.read_fixed(4, endian)?, 32) as i32)
    }

    pub fn read_uint64(&mut self, endian: Endian) -> Result<u64, Error> {
        Ok(self.read_fixed(8, endian)? as u64)
    }

    pub fn read_int64(&mut self, endian: Endian) -> Result<i64, Error> {
        Ok(Self::sign_extend(self.read_fixed(8, endian)?, 64) as i64)
    }

    fn read_big(&mut self, width: usize, endian: Endian, signed: bool) -> Result<BigInt, Error> {
        let raw = self.read_raw(width)?;
        let mut bytes = raw.to_vec();
        if endian == Endian::Big {
            bytes.reverse();
        }
        if signed {
            Ok(BigInt::from_signed_bytes_le(&bytes))
        } else {
            Ok(BigInt::from_bytes_le(Sign::Plus, &bytes))
        }
    }

    pub fn read_uint128(&mut self, endian: Endian) -> Result<BigInt, Error> {
        self.read_big(16, endian, false)
    }

    pub fn read_int128(&mut self, endian: Endian) -> Result<BigInt, Error> {
        self.read_big(16, endian, true)
    }

    pub fn read_uint256(&mut self, endian: Endian) -> Result<BigInt, Error> {
        self.read_big(32, endian, false)
    }

    pub fn read_int256(&mut self, endian: Endian) -> Result<BigInt, Error> {
        self.read_big(32, endian, true)
    }

    pub fn read_double(&mut self) -> Result<f64, Error> {
        let raw = self.read_raw(8)?;
        Ok(LittleEndian::read_f64(raw))
    }

    /// Inverse of [`Writer::write_bytes`]: branches on the first length byte
    /// and skips over the writer's padding after the payload.
    pub fn read_bytes(&mut self) -> Result<&'a [u8], Error> {
        let first = self.read_raw(1)?[0];
        let (len, pad) = if first == 0xFE {
            let len = self.read_uint24(Endian::Little)? as usize;
            (len, (4 - len % 4) % 4)
        } else {
            let len = first as usize;
            (len, (4 - (len + 1) % 4) % 4)
        };
        let payload = self.read_raw(len)?;
        self.read_raw(pad)?;
        Ok(payload)
    }

    /// Reads a length-prefixed string, decoding UTF-8 lossily. Server data
    /// occasionally carries malformed text; the original client tolerates
    /// it with replacement characters, and so do we.
    pub fn read_string(&mut self) -> Result<String, Error> {
        Ok(String::from_utf8_lossy(self.read_bytes()?).into_owned())
    }
}
