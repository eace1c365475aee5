// Copyright (c) 2022 RBB S.r.l
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

pub mod random;

use hex::ToHex;

/// Assert that the encoded object matches the expected hex string.
pub fn assert_encoded_eq<E: serialization::Encode>(to_encode: &E, expected_hex: &str) {
    assert_eq!(to_encode.encode().encode_hex::<String>(), expected_hex);
}

/// Encodes an object to a hex string
pub fn encode_to_hex<E: serialization::Encode>(to_encode: &E) -> String {
    to_encode.encode().encode_hex::<String>()
}

/// Decodes a hex string to an object. Will panic on errors
pub fn decode_from_hex<D: serialization::Decode>(to_decode: &str) -> D {
    D::decode_all(&hex::decode(to_decode).expect("The provided string is a hex"))
        .expect("The decoding succeeded")
}

/// Get all variants of the object with single-bit flips (decoding may fail).
pub fn try_all_single_bit_mutations<T>(obj: &T) -> impl Iterator<Item = serialization::Result<T>>
where
    T: serialization::Decode + serialization::Encode,
{
    let obj_enc = obj.encode();
    (0..(obj_enc.len() * 8)).map(move |bit| {
        let (byte, bit) = (bit / 8, bit % 8);
        let mut mutated = obj_enc.clone();
        mutated[byte] ^= 1u8 << bit;
        T::decode_all(&mutated)
    })
}

/// Get all variants of the object with single-bit flips (decoding failures are dropped).
pub fn all_single_bit_mutations<T>(obj: &T) -> impl Iterator<Item = T>
where
    T: serialization::Decode + serialization::Encode,
{
    try_all_single_bit_mutations(obj).filter_map(Result::ok)
}

#[ctor::ctor]
fn init() {
    logging::init_logging();
}
