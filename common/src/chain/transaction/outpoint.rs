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

use crate::chain::Transaction;
use crate::primitives::Id;

/// The location of an output being spent: the id of the transaction that
/// created it and the output's position within that transaction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutPoint {
    tx_id: Id<Transaction>,
    index: u32,
}

impl OutPoint {
    /// The output index carried by the null outpoint.
    pub const NULL_INDEX: u32 = u32::MAX;

    pub fn new(tx_id: Id<Transaction>, output_index: u32) -> Self {
        OutPoint {
            tx_id,
            index: output_index,
        }
    }

    /// The sentinel outpoint used by coinbase inputs: an all-zero
    /// transaction id and index [OutPoint::NULL_INDEX].
    pub fn null() -> Self {
        OutPoint {
            tx_id: Id::zero(),
            index: Self::NULL_INDEX,
        }
    }

    pub fn is_null(&self) -> bool {
        self.tx_id.to_hash().is_zero() && self.index == Self::NULL_INDEX
    }

    pub fn tx_id(&self) -> Id<Transaction> {
        self.tx_id
    }

    pub fn output_index(&self) -> u32 {
        self.index
    }
}

impl PartialOrd for OutPoint {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

// Outpoints order by transaction id first, then by output index.
impl Ord for OutPoint {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        (self.tx_id, self.index).cmp(&(other.tx_id, other.index))
    }
}

impl std::fmt::Display for OutPoint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "OutPoint({}, {})", self.tx_id, self.index)
    }
}

impl Encode for OutPoint {
    fn encode_to<W: WriteStream + ?Sized>(&self, dest: &mut W) {
        self.tx_id.encode_to(dest);
        dest.write_u32(self.index);
    }
}

impl Decode for OutPoint {
    fn decode_from<R: ReadStream + ?Sized>(reader: &mut R) -> Result<Self> {
        let tx_id = Id::decode_from(reader)?;
        let index = reader.read_u32()?;
        Ok(OutPoint { tx_id, index })
    }
}
