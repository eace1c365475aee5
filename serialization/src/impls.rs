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

use crate::{Decode, Encode, ReadStream, Result, WriteStream};

macro_rules! impl_int_codec {
    ($t:ty, $write:ident, $read:ident) => {
        impl Encode for $t {
            fn encode_to<W: WriteStream + ?Sized>(&self, dest: &mut W) {
                dest.$write(*self)
            }
        }

        impl Decode for $t {
            fn decode_from<R: ReadStream + ?Sized>(reader: &mut R) -> Result<Self> {
                reader.$read()
            }
        }
    };
}

impl_int_codec!(u8, write_u8, read_u8);
impl_int_codec!(u16, write_u16, read_u16);
impl_int_codec!(u32, write_u32, read_u32);
impl_int_codec!(u64, write_u64, read_u64);
impl_int_codec!(i32, write_i32, read_i32);
impl_int_codec!(i64, write_i64, read_i64);

impl<T: Encode> Encode for [T] {
    fn encode_to<W: WriteStream + ?Sized>(&self, dest: &mut W) {
        dest.write_compact_size(self.len() as u64);
        for item in self {
            item.encode_to(dest);
        }
    }
}

impl<T: Encode> Encode for Vec<T> {
    fn encode_to<W: WriteStream + ?Sized>(&self, dest: &mut W) {
        self.as_slice().encode_to(dest)
    }
}

impl<T: Decode> Decode for Vec<T> {
    fn decode_from<R: ReadStream + ?Sized>(reader: &mut R) -> Result<Self> {
        // The count is capped by MAX_SIZE in read_compact_size, and every
        // element consumes at least one input byte, so capping the
        // pre-allocation by the remaining input bounds memory use even for
        // adversarial counts.
        let count = reader.read_compact_size()? as usize;
        let mut items = Vec::with_capacity(count.min(reader.remaining()));
        for _ in 0..count {
            items.push(T::decode_from(reader)?);
        }
        Ok(items)
    }
}
