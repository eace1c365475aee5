// Copyright (c) 2021 RBB S.r.l
// opensource@mintlayer.org
// SPDX-License-Identifier: MIT
// Licensed under the MIT License;
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
// 	http://spdx.org/licenses/MIT
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! The byte-script container used by transaction inputs and outputs.
//!
//! Scripts are programs in the chain's locking and unlocking language. At
//! this layer they are opaque: the container carries the bytes, their length
//! and equality, and the length-prefixed wire form. Interpreting the
//! contents belongs to the script engine that consumes them.

use serialization::{Decode, Encode, ReadStream, Result, WriteStream};

/// A script, kept as raw bytes.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Default)]
pub struct Script {
    data: Vec<u8>,
}

impl Script {
    pub const fn new() -> Self {
        Self { data: Vec::new() }
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.data
    }

    pub fn into_bytes(self) -> Vec<u8> {
        self.data
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
}

impl From<Vec<u8>> for Script {
    fn from(data: Vec<u8>) -> Self {
        Self { data }
    }
}

impl From<&[u8]> for Script {
    fn from(data: &[u8]) -> Self {
        Self {
            data: data.to_vec(),
        }
    }
}

impl AsRef<[u8]> for Script {
    fn as_ref(&self) -> &[u8] {
        &self.data
    }
}

impl std::fmt::Display for Script {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", hex::encode(&self.data))
    }
}

impl Encode for Script {
    fn encode_to<W: WriteStream + ?Sized>(&self, dest: &mut W) {
        self.data.encode_to(dest)
    }
}

impl Decode for Script {
    fn decode_from<R: ReadStream + ?Sized>(reader: &mut R) -> Result<Self> {
        Vec::<u8>::decode_from(reader).map(Self::from)
    }
}

#[cfg(test)]
mod tests {
    use hex_literal::hex;

    use super::*;

    #[test]
    fn wire_form_is_length_prefixed() {
        let script = Script::from(vec![0x51, 0x52]);
        assert_eq!(script.encode(), hex!("025152"));
        assert_eq!(Script::decode_all(&hex!("025152")), Ok(script));
    }

    #[test]
    fn empty_script_is_a_single_zero_byte() {
        let script = Script::new();
        assert!(script.is_empty());
        assert_eq!(script.encode(), hex!("00"));
        assert_eq!(Script::decode_all(&hex!("00")), Ok(script));
    }

    #[test]
    fn display_is_plain_hex() {
        assert_eq!(Script::from(vec![0xde, 0xad]).to_string(), "dead");
        assert_eq!(Script::new().to_string(), "");
    }

    #[test]
    fn truncated_script_fails_to_decode() {
        assert_eq!(
            Script::decode_all(&hex!("0551")),
            Err(serialization::Error::UnexpectedEnd)
        );
    }
}
