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

use serialization::{Decode, Encode, ReadStream, Result, WriteStream};

/// The sequence number of an input.
///
/// Besides its historical use, the field encodes an optional relative
/// lock-time constraint. The encoding only takes effect for transactions of
/// version 2 or higher; [Sequence::relative_lock_time] decodes it without
/// knowing the enclosing transaction, so the caller is responsible for that
/// version check.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct Sequence(u32);

impl Sequence {
    /// The default sequence number. A transaction whose inputs all carry
    /// this value has its absolute lock time field disabled.
    pub const FINAL: Self = Sequence(0xffff_ffff);

    /// Bit 31. When set, the input carries no relative lock time and the
    /// remaining bits are free for other uses.
    pub const LOCKTIME_DISABLE_FLAG: u32 = 1 << 31;

    /// Bit 22. Selects the unit of an active relative lock time: set means
    /// 512-second intervals, clear means blocks.
    pub const LOCKTIME_TYPE_FLAG: u32 = 1 << 22;

    /// The low 16 bits holding the relative lock time value itself.
    pub const LOCKTIME_MASK: u32 = 0x0000_ffff;

    /// Shift converting a time-based lock value to seconds. The 512-second
    /// granularity keeps the 16-bit value range roughly in step with the
    /// block-based range at one block per 600 seconds.
    pub const LOCKTIME_GRANULARITY: u32 = 9;

    pub const fn from_u32(v: u32) -> Self {
        Sequence(v)
    }

    pub const fn as_u32(&self) -> u32 {
        self.0
    }

    pub const fn is_final(&self) -> bool {
        self.0 == Self::FINAL.0
    }

    /// The relative lock-time constraint encoded in this sequence number,
    /// or None when the disable bit is set.
    pub const fn relative_lock_time(&self) -> Option<RelativeLockTime> {
        if self.0 & Self::LOCKTIME_DISABLE_FLAG != 0 {
            return None;
        }
        let value = (self.0 & Self::LOCKTIME_MASK) as u16;
        if self.0 & Self::LOCKTIME_TYPE_FLAG != 0 {
            Some(RelativeLockTime::Time512(value))
        } else {
            Some(RelativeLockTime::Blocks(value))
        }
    }
}

impl Default for Sequence {
    fn default() -> Self {
        Self::FINAL
    }
}

impl Encode for Sequence {
    fn encode_to<W: WriteStream + ?Sized>(&self, dest: &mut W) {
        dest.write_u32(self.0)
    }
}

impl Decode for Sequence {
    fn decode_from<R: ReadStream + ?Sized>(reader: &mut R) -> Result<Self> {
        reader.read_u32().map(Sequence)
    }
}

/// A decoded relative lock-time: how long the spent output must have been
/// confirmed before this input becomes valid.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum RelativeLockTime {
    /// A number of blocks.
    Blocks(u16),
    /// A number of 512-second intervals.
    Time512(u16),
}

impl RelativeLockTime {
    /// The wall-clock duration in seconds, or None for block-based locks.
    pub const fn total_seconds(&self) -> Option<u64> {
        match self {
            RelativeLockTime::Blocks(_) => None,
            RelativeLockTime::Time512(intervals) => {
                Some((*intervals as u64) << Sequence::LOCKTIME_GRANULARITY)
            }
        }
    }
}
