// Copyright (c) 2021-2022 RBB S.r.l
// opensource@mintlayer.org
// SPDX-License-Identifier: MIT
// Licensed under the MIT License;
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
// https://github.com/mintlayer/mintlayer-core/blob/master/LICENSE
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use utils::ensure;

use crate::{Error, Result};

/// The largest length prefix the decoder accepts, which bounds every
/// allocation made while decoding untrusted input.
pub const MAX_SIZE: u64 = 0x0200_0000;

/// The format version carried by every stream.
///
/// The low bits are an ordinary version counter. The high bits are reserved
/// for behavior flags; the only one currently defined is
/// [FormatVersion::SUPPRESS_WITNESS_FLAG].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FormatVersion(u32);

impl FormatVersion {
    /// The version written and understood by this codebase.
    pub const CURRENT: Self = Self(1);

    /// When set, the transaction codec behaves as if no transaction ever
    /// carried witness data, producing and consuming only the legacy shape.
    pub const SUPPRESS_WITNESS_FLAG: u32 = 0x4000_0000;

    pub const fn new(raw: u32) -> Self {
        Self(raw)
    }

    pub const fn raw(self) -> u32 {
        self.0
    }

    pub const fn without_witness(self) -> Self {
        Self(self.0 | Self::SUPPRESS_WITNESS_FLAG)
    }

    pub const fn allows_witness(self) -> bool {
        self.0 & Self::SUPPRESS_WITNESS_FLAG == 0
    }
}

/// A byte sink with a format version attached.
///
/// All sinks in this crate write to memory, so writing never fails.
pub trait WriteStream {
    fn format_version(&self) -> FormatVersion;

    fn write_bytes(&mut self, bytes: &[u8]);

    fn write_u8(&mut self, v: u8) {
        self.write_bytes(&[v])
    }

    fn write_u16(&mut self, v: u16) {
        self.write_bytes(&v.to_le_bytes())
    }

    fn write_u32(&mut self, v: u32) {
        self.write_bytes(&v.to_le_bytes())
    }

    fn write_u64(&mut self, v: u64) {
        self.write_bytes(&v.to_le_bytes())
    }

    fn write_i32(&mut self, v: i32) {
        self.write_bytes(&v.to_le_bytes())
    }

    fn write_i64(&mut self, v: i64) {
        self.write_bytes(&v.to_le_bytes())
    }

    /// Write a length in the compact size format: one byte up to 0xfc, then
    /// a 0xfd/0xfe/0xff prefix followed by the value as u16/u32/u64.
    fn write_compact_size(&mut self, v: u64) {
        if v < 0xfd {
            self.write_u8(v as u8);
        } else if v <= 0xffff {
            self.write_u8(0xfd);
            self.write_u16(v as u16);
        } else if v <= 0xffff_ffff {
            self.write_u8(0xfe);
            self.write_u32(v as u32);
        } else {
            self.write_u8(0xff);
            self.write_u64(v);
        }
    }
}

/// A byte source with a format version attached.
pub trait ReadStream {
    fn format_version(&self) -> FormatVersion;

    /// Fill the whole buffer from the stream or fail without giving out
    /// partial data.
    fn read_exact(&mut self, buf: &mut [u8]) -> Result<()>;

    /// Number of bytes left in the stream.
    fn remaining(&self) -> usize;

    fn read_u8(&mut self) -> Result<u8> {
        let mut buf = [0u8; 1];
        self.read_exact(&mut buf)?;
        Ok(buf[0])
    }

    fn read_u16(&mut self) -> Result<u16> {
        let mut buf = [0u8; 2];
        self.read_exact(&mut buf)?;
        Ok(u16::from_le_bytes(buf))
    }

    fn read_u32(&mut self) -> Result<u32> {
        let mut buf = [0u8; 4];
        self.read_exact(&mut buf)?;
        Ok(u32::from_le_bytes(buf))
    }

    fn read_u64(&mut self) -> Result<u64> {
        let mut buf = [0u8; 8];
        self.read_exact(&mut buf)?;
        Ok(u64::from_le_bytes(buf))
    }

    fn read_i32(&mut self) -> Result<i32> {
        let mut buf = [0u8; 4];
        self.read_exact(&mut buf)?;
        Ok(i32::from_le_bytes(buf))
    }

    fn read_i64(&mut self) -> Result<i64> {
        let mut buf = [0u8; 8];
        self.read_exact(&mut buf)?;
        Ok(i64::from_le_bytes(buf))
    }

    /// Read a compact size length prefix, rejecting values above [MAX_SIZE].
    fn read_compact_size(&mut self) -> Result<u64> {
        let prefix = self.read_u8()?;
        let value = match prefix {
            0xfd => u64::from(self.read_u16()?),
            0xfe => u64::from(self.read_u32()?),
            0xff => self.read_u64()?,
            _ => u64::from(prefix),
        };
        ensure!(value <= MAX_SIZE, Error::SizeLimitExceeded(value, MAX_SIZE));
        Ok(value)
    }
}
