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

mod internal;

use generic_array::{typenum, ArrayLength, GenericArray};
use internal::InternalStreamHasher;

/// A hash algorithm applied to a message available all at once.
pub trait Hasher {
    type OutputSize: ArrayLength<u8>;

    fn hash<T: AsRef<[u8]>>(data: T) -> GenericArray<u8, Self::OutputSize>;
}

/// A hash algorithm fed incrementally from a stream of chunks.
///
/// Calling [StreamHasher::finalize] also resets the hasher to its initial
/// state, so the same instance can be reused for the next message.
pub trait StreamHasher {
    type OutputSize: ArrayLength<u8>;

    fn new() -> Self;
    fn write<T: AsRef<[u8]>>(&mut self, in_bytes: T) -> &mut Self;
    fn reset(&mut self);
    fn finalize(&mut self) -> GenericArray<u8, Self::OutputSize>;
}

/// Hash the given data with the algorithm chosen by the type parameter.
pub fn hash<D: Hasher, T: AsRef<[u8]>>(data: T) -> GenericArray<u8, <D as Hasher>::OutputSize> {
    D::hash(data)
}

/// SHA256 applied twice, as used for transaction and block ids.
pub struct Sha256d;

impl Hasher for Sha256d {
    type OutputSize = typenum::U32;

    fn hash<T: AsRef<[u8]>>(data: T) -> GenericArray<u8, Self::OutputSize> {
        internal::hash::<sha2::Sha256, _>(internal::hash::<sha2::Sha256, _>(data))
    }
}

#[derive(Clone)]
pub struct Sha256dStream {
    stream: InternalStreamHasher<sha2::Sha256>,
}

impl StreamHasher for Sha256dStream {
    type OutputSize = typenum::U32;

    fn new() -> Self {
        Self {
            stream: InternalStreamHasher::new(),
        }
    }

    fn write<T: AsRef<[u8]>>(&mut self, in_bytes: T) -> &mut Self {
        self.stream.write(in_bytes);
        self
    }

    fn reset(&mut self) {
        self.stream.reset()
    }

    fn finalize(&mut self) -> GenericArray<u8, Self::OutputSize> {
        // The second pass runs over the 32 bytes of the first digest.
        internal::hash::<sha2::Sha256, _>(self.stream.finalize())
    }
}
