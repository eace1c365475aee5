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

use crate::{Error, FormatVersion, ReadStream, Result};

/// A [ReadStream] over a byte slice, tracking the current position.
pub struct SliceReader<'a> {
    data: &'a [u8],
    pos: usize,
    version: FormatVersion,
}

impl<'a> SliceReader<'a> {
    pub fn new(data: &'a [u8], version: FormatVersion) -> Self {
        Self {
            data,
            pos: 0,
            version,
        }
    }
}

impl ReadStream for SliceReader<'_> {
    fn format_version(&self) -> FormatVersion {
        self.version
    }

    fn read_exact(&mut self, buf: &mut [u8]) -> Result<()> {
        let end = self.pos.checked_add(buf.len()).ok_or(Error::UnexpectedEnd)?;
        ensure!(end <= self.data.len(), Error::UnexpectedEnd);
        buf.copy_from_slice(&self.data[self.pos..end]);
        self.pos = end;
        Ok(())
    }

    fn remaining(&self) -> usize {
        self.data.len() - self.pos
    }
}
