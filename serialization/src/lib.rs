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

//! Binary serialization for the wire protocol and for id hashing.
//!
//! All multi-byte integers go over the wire in little-endian byte order, and
//! collection lengths use the variable-width compact size encoding. Every
//! stream carries a [FormatVersion], which lets one code path produce and
//! consume both the witness-carrying and the witness-suppressed renditions
//! of the same data.

mod error;
mod impls;
mod reader;
mod stream;
mod writer;

pub mod hex;

pub use error::Error;
pub use reader::SliceReader;
pub use stream::{FormatVersion, ReadStream, WriteStream, MAX_SIZE};
pub use writer::{SizeWriter, VecWriter};

use utils::ensure;

pub type Result<T> = std::result::Result<T, Error>;

/// A type that knows how to write itself into a stream.
pub trait Encode {
    /// Write `self` into the given stream.
    fn encode_to<W: WriteStream + ?Sized>(&self, dest: &mut W);

    /// Encode into a fresh byte vector under the current format version.
    fn encode(&self) -> Vec<u8> {
        self.encode_with(FormatVersion::CURRENT)
    }

    /// Encode into a fresh byte vector under an explicit format version.
    fn encode_with(&self, version: FormatVersion) -> Vec<u8> {
        let mut dest = VecWriter::new(version);
        self.encode_to(&mut dest);
        dest.into_vec()
    }

    /// Size of the encoding in bytes, without materializing it.
    fn encoded_size(&self) -> usize {
        self.encoded_size_with(FormatVersion::CURRENT)
    }

    fn encoded_size_with(&self, version: FormatVersion) -> usize {
        let mut dest = SizeWriter::new(version);
        self.encode_to(&mut dest);
        dest.size()
    }
}

/// A type that knows how to read itself from a stream.
pub trait Decode: Sized {
    /// Read a value from the given stream.
    fn decode_from<R: ReadStream + ?Sized>(reader: &mut R) -> Result<Self>;

    /// Decode a value from the start of `bytes` under the current format
    /// version. Trailing bytes are ignored.
    fn decode(bytes: &[u8]) -> Result<Self> {
        Self::decode_with(bytes, FormatVersion::CURRENT)
    }

    fn decode_with(bytes: &[u8], version: FormatVersion) -> Result<Self> {
        let mut reader = SliceReader::new(bytes, version);
        Self::decode_from(&mut reader)
    }

    /// Decode a value that must occupy the whole of `bytes`.
    fn decode_all(bytes: &[u8]) -> Result<Self> {
        Self::decode_all_with(bytes, FormatVersion::CURRENT)
    }

    fn decode_all_with(bytes: &[u8], version: FormatVersion) -> Result<Self> {
        let mut reader = SliceReader::new(bytes, version);
        let value = Self::decode_from(&mut reader)?;
        ensure!(
            reader.remaining() == 0,
            Error::TrailingData(reader.remaining())
        );
        Ok(value)
    }
}
