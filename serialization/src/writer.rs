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

use crate::{FormatVersion, WriteStream};

/// A [WriteStream] accumulating the encoding in a byte vector.
pub struct VecWriter {
    buf: Vec<u8>,
    version: FormatVersion,
}

impl VecWriter {
    pub fn new(version: FormatVersion) -> Self {
        Self {
            buf: Vec::new(),
            version,
        }
    }

    pub fn into_vec(self) -> Vec<u8> {
        self.buf
    }
}

impl WriteStream for VecWriter {
    fn format_version(&self) -> FormatVersion {
        self.version
    }

    fn write_bytes(&mut self, bytes: &[u8]) {
        self.buf.extend_from_slice(bytes)
    }
}

/// A [WriteStream] that only counts the bytes it is given, for computing
/// serialized sizes without allocating.
pub struct SizeWriter {
    size: usize,
    version: FormatVersion,
}

impl SizeWriter {
    pub fn new(version: FormatVersion) -> Self {
        Self { size: 0, version }
    }

    pub fn size(&self) -> usize {
        self.size
    }
}

impl WriteStream for SizeWriter {
    fn format_version(&self) -> FormatVersion {
        self.version
    }

    fn write_bytes(&mut self, bytes: &[u8]) {
        self.size += bytes.len()
    }
}
