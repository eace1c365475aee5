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

use serialization::Encode;
use typename::TypeName;
use utils::ensure;

use crate::primitives::{id, Amount, Id, Idable};

pub mod codec;
pub use codec::TransactionBody;

pub mod input;
pub use input::*;

pub mod mutable;
pub use mutable::*;

pub mod outpoint;
pub use outpoint::*;

pub mod output;
pub use output::*;

pub mod printout;

pub mod sequence;
pub use sequence::*;

pub mod witness;
pub use witness::*;

/// An immutable transaction, the form that leaves the assembling code and
/// circulates between subsystems. The id is computed once, when the value is
/// created from its mutable counterpart, and holds for the lifetime of the
/// value; keeping the fields out of reach of mutation is what makes that
/// sound.
#[derive(Debug, Clone)]
pub struct Transaction {
    version: i32,
    inputs: Vec<TxInput>,
    outputs: Vec<TxOutput>,
    lock_time: u32,
    id: Id<Transaction>,
}

/// A shared, immutable handle to a transaction. Cloning bumps a thread-safe
/// reference count instead of copying the transaction, and the value is
/// freed when the last handle drops. `TransactionRef::default()` is a handle
/// to a null transaction.
pub type TransactionRef = std::sync::Arc<Transaction>;

static_assertions::assert_impl_all!(TransactionRef: Send, Sync);

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum OutputValueError {
    #[error("Output value out of range")]
    OutputOutOfRange,
    #[error("Total output value out of range")]
    TotalOutOfRange,
}

impl Transaction {
    /// Version given to newly assembled transactions.
    pub const CURRENT_VERSION: i32 = 2;

    /// The highest version relay treats as standard. Raising the default
    /// version is a two step process: MAX_STANDARD_VERSION goes up first,
    /// CURRENT_VERSION follows once the network has adapted.
    pub const MAX_STANDARD_VERSION: i32 = 2;

    pub fn new(
        version: i32,
        inputs: Vec<TxInput>,
        outputs: Vec<TxOutput>,
        lock_time: u32,
    ) -> Self {
        MutableTransaction {
            version,
            inputs,
            outputs,
            lock_time,
        }
        .into()
    }

    /// A transaction that satisfies [Transaction::is_null].
    pub fn null() -> Self {
        Self::new(Self::CURRENT_VERSION, Vec::new(), Vec::new(), 0)
    }

    pub fn version(&self) -> i32 {
        self.version
    }

    pub fn inputs(&self) -> &Vec<TxInput> {
        &self.inputs
    }

    pub fn outputs(&self) -> &Vec<TxOutput> {
        &self.outputs
    }

    pub fn lock_time(&self) -> u32 {
        self.lock_time
    }

    pub fn is_null(&self) -> bool {
        self.inputs.is_empty() && self.outputs.is_empty()
    }

    pub fn is_coinbase(&self) -> bool {
        self.inputs.len() == 1 && self.inputs[0].outpoint().is_null()
    }

    pub fn has_witness(&self) -> bool {
        TransactionBody::has_witness(self)
    }

    /// provides the hash of a transaction including the witness (malleable)
    pub fn serialized_hash(&self) -> Id<Transaction> {
        Id::new(id::hash_encoded(self))
    }

    /// The sum of all output values, each output and the running total
    /// checked against the monetary range.
    pub fn value_out(&self) -> Result<Amount, OutputValueError> {
        self.outputs.iter().try_fold(Amount::ZERO, |total, output| {
            ensure!(
                output.value().is_within_money_range(),
                OutputValueError::OutputOutOfRange
            );
            let total = (total + output.value()).ok_or(OutputValueError::TotalOutOfRange)?;
            ensure!(
                total.is_within_money_range(),
                OutputValueError::TotalOutOfRange
            );
            Ok(total)
        })
    }

    /// The length in bytes of the full encoding, witness included.
    pub fn total_size(&self) -> usize {
        self.encoded_size()
    }

    pub fn into_ref(self) -> TransactionRef {
        TransactionRef::new(self)
    }
}

impl Default for Transaction {
    fn default() -> Self {
        Self::null()
    }
}

impl TypeName for Transaction {
    fn typename_str() -> std::borrow::Cow<'static, str> {
        "Transaction".into()
    }
}

impl Idable for Transaction {
    type Tag = Transaction;

    fn get_id(&self) -> Id<Transaction> {
        self.id
    }
}

// Two transactions are the same transaction when their ids agree. This leans
// on the id hash being collision resistant; the field contents are compared
// only through it.
impl PartialEq for Transaction {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Transaction {}
