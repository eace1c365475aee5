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

use serialization::FormatVersion;

use crate::primitives::{id, Id, Idable};

use super::{Transaction, TxInput, TxOutput};

/// The editable counterpart of [Transaction], used while a transaction is
/// being assembled. The fields are public and nothing is cached, so there is
/// no invariant to protect.
#[derive(Debug, Clone)]
pub struct MutableTransaction {
    pub version: i32,
    pub inputs: Vec<TxInput>,
    pub outputs: Vec<TxOutput>,
    pub lock_time: u32,
}

impl MutableTransaction {
    pub fn new() -> Self {
        MutableTransaction {
            version: Transaction::CURRENT_VERSION,
            inputs: Vec::new(),
            outputs: Vec::new(),
            lock_time: 0,
        }
    }
}

impl Default for MutableTransaction {
    fn default() -> Self {
        Self::new()
    }
}

impl Idable for MutableTransaction {
    type Tag = Transaction;

    // Recomputed on every call, since the fields may change between calls.
    fn get_id(&self) -> Id<Transaction> {
        Id::new(id::hash_encoded_with(
            self,
            FormatVersion::CURRENT.without_witness(),
        ))
    }
}

// Equality follows the id, so witness data and the scripts' exact bytes are
// compared only through their effect on the hash.
impl PartialEq for MutableTransaction {
    fn eq(&self, other: &Self) -> bool {
        self.get_id() == other.get_id()
    }
}

impl Eq for MutableTransaction {}

impl From<Transaction> for MutableTransaction {
    fn from(tx: Transaction) -> Self {
        MutableTransaction {
            version: tx.version,
            inputs: tx.inputs,
            outputs: tx.outputs,
            lock_time: tx.lock_time,
        }
    }
}

impl From<&Transaction> for MutableTransaction {
    fn from(tx: &Transaction) -> Self {
        tx.clone().into()
    }
}

impl From<MutableTransaction> for Transaction {
    /// Freezes the transaction. This is the only place an id is ever
    /// computed for a [Transaction].
    fn from(tx: MutableTransaction) -> Self {
        let id = tx.get_id();
        Transaction {
            version: tx.version,
            inputs: tx.inputs,
            outputs: tx.outputs,
            lock_time: tx.lock_time,
            id,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chain::transaction::{OutPoint, ScriptWitness, Sequence};
    use crate::primitives::{Amount, H256};
    use script::Script;

    fn sample_tx() -> MutableTransaction {
        let mut tx = MutableTransaction::new();
        tx.inputs.push(TxInput::new(
            OutPoint::new(Id::new(H256([0x33; 32])), 1),
            Script::from(vec![0x51]),
            Sequence::FINAL,
        ));
        tx.outputs.push(TxOutput::new(
            Amount::from_atoms(1000),
            Script::from(vec![0x52]),
        ));
        tx
    }

    #[test]
    fn new_and_default_agree() {
        let tx = MutableTransaction::new();
        assert_eq!(tx.version, Transaction::CURRENT_VERSION);
        assert!(tx.inputs.is_empty());
        assert!(tx.outputs.is_empty());
        assert_eq!(tx.lock_time, 0);
        assert_eq!(tx, MutableTransaction::default());
    }

    #[test]
    fn equality_follows_the_id() {
        let tx = sample_tx();
        assert_eq!(tx, tx.clone());

        let mut other = tx.clone();
        other.lock_time = 7;
        assert_ne!(tx, other);

        // Witness data is invisible to the id, hence to equality.
        let mut with_witness = tx.clone();
        with_witness.inputs[0].set_witness(ScriptWitness::from_stack(vec![vec![0xff; 8]]));
        assert_eq!(tx, with_witness);
    }

    #[test]
    fn freezing_and_thawing_preserves_the_fields() {
        let mut tx = sample_tx();
        tx.inputs[0].set_witness(ScriptWitness::from_stack(vec![vec![0xaa; 4]]));

        let frozen = Transaction::from(tx.clone());
        assert_eq!(frozen.get_id(), tx.get_id());

        let thawed = MutableTransaction::from(frozen);
        assert_eq!(thawed, tx);
        assert_eq!(thawed.inputs, tx.inputs);
        assert_eq!(thawed.outputs, tx.outputs);
        assert_eq!(thawed.version, tx.version);
        assert_eq!(thawed.lock_time, tx.lock_time);
    }
}
