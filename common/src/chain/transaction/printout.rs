// Copyright (c) 2021-2024 RBB S.r.l
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

use std::fmt::Write;

use crate::primitives::{Amount, Idable, H256};

use super::Transaction;

fn id_to_hex_string(id: H256) -> String {
    let hex_string = format!("{:?}", id);
    hex_string.strip_prefix("0x").unwrap_or(&hex_string).to_string()
}

/// Renders a multi-line, human readable account of a transaction, meant for
/// logs and debugging tools rather than machine consumption.
pub fn transaction_summary(tx: &Transaction) -> String {
    let mut result = format!(
        "Transaction summary:\n\
        Transaction id: {}\n\
        Version: {}\n\
        Lock time: {}\n\
        === BEGIN OF INPUTS ===\n\
        ",
        id_to_hex_string(tx.get_id().to_hash()),
        tx.version(),
        tx.lock_time()
    );

    for input in tx.inputs() {
        if input.outpoint().is_null() {
            writeln!(&mut result, "- Coinbase(Script({}))", input.script_sig())
        } else {
            writeln!(&mut result, "- {input:?}")
        }
        .expect("Writing to a memory buffer should not fail");
    }

    writeln!(
        &mut result,
        "=== END OF INPUTS ===\n=== BEGIN OF OUTPUTS ==="
    )
    .expect("Writing to a memory buffer should not fail");

    for output in tx.outputs() {
        let value_str = output.value().into_fixedpoint_str(Amount::DECIMALS);
        writeln!(
            &mut result,
            "- Transfer({}, Script({}))",
            value_str,
            output.script_pubkey()
        )
        .expect("Writing to a memory buffer should not fail");
    }
    writeln!(&mut result, "=== END OF OUTPUTS ===")
        .expect("Writing to a memory buffer should not fail");

    result
}
