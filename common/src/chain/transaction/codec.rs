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

//! The transaction wire codec.
//!
//! Two shapes share one decoder. The legacy shape is
//! `version | inputs | outputs | lock_time`. The extended shape inserts a
//! zero byte where the input count would be, which no legacy transaction can
//! produce, followed by a nonzero flags byte; bit 0 of the flags announces a
//! witness section between the outputs and the lock time. Which shape is
//! produced and accepted depends on the stream's [FormatVersion]: a
//! witness-suppressing version pins the codec to the legacy shape.

use serialization::{Decode, Encode, Error, FormatVersion, ReadStream, Result, WriteStream};
use utils::ensure;

use super::{MutableTransaction, ScriptWitness, Transaction, TxInput, TxOutput};

/// Field access shared by the frozen and the mutable transaction forms, so
/// that a single encoder and a single hashing path serve both.
pub trait TransactionBody {
    fn version(&self) -> i32;
    fn inputs(&self) -> &[TxInput];
    fn outputs(&self) -> &[TxOutput];
    fn lock_time(&self) -> u32;

    /// True iff any input carries a nonempty witness stack.
    fn has_witness(&self) -> bool {
        self.inputs().iter().any(|input| !input.witness().is_empty())
    }
}

impl TransactionBody for Transaction {
    fn version(&self) -> i32 {
        Transaction::version(self)
    }

    fn inputs(&self) -> &[TxInput] {
        Transaction::inputs(self)
    }

    fn outputs(&self) -> &[TxOutput] {
        Transaction::outputs(self)
    }

    fn lock_time(&self) -> u32 {
        Transaction::lock_time(self)
    }
}

impl TransactionBody for MutableTransaction {
    fn version(&self) -> i32 {
        self.version
    }

    fn inputs(&self) -> &[TxInput] {
        &self.inputs
    }

    fn outputs(&self) -> &[TxOutput] {
        &self.outputs
    }

    fn lock_time(&self) -> u32 {
        self.lock_time
    }
}

/// Writes `tx` in the shape selected by the destination's format version:
/// extended when the version allows witness data and at least one input
/// carries some, legacy otherwise.
pub fn encode_transaction<T: TransactionBody, W: WriteStream + ?Sized>(tx: &T, dest: &mut W) {
    dest.write_i32(tx.version());

    let mut flags = 0u8;
    if dest.format_version().allows_witness() && tx.has_witness() {
        flags |= 1;
    }

    if flags != 0 {
        // An empty input list standing in as the extended format marker.
        dest.write_compact_size(0);
        dest.write_u8(flags);
    }

    tx.inputs().encode_to(dest);
    tx.outputs().encode_to(dest);

    if flags & 1 != 0 {
        for input in tx.inputs() {
            input.witness().encode_to(dest);
        }
    }

    dest.write_u32(tx.lock_time());
}

/// Reads one transaction in either wire shape.
///
/// An empty input list under a witness-allowing format version is taken for
/// the extended format marker, and the flags byte that follows dictates how
/// the rest of the stream is read. Flag bits that nothing consumed fail
/// with [Error::UnknownOptionalData]. On error the partially filled
/// transaction is dropped; no partial value is ever returned.
pub fn decode_transaction<R: ReadStream + ?Sized>(reader: &mut R) -> Result<MutableTransaction> {
    let mut tx = MutableTransaction::new();
    tx.version = reader.read_i32()?;

    let mut flags = 0u8;
    tx.inputs = Vec::decode_from(reader)?;
    if tx.inputs.is_empty() && reader.format_version().allows_witness() {
        // Not a real input list but the extended format marker.
        flags = reader.read_u8()?;
        if flags != 0 {
            tx.inputs = Vec::decode_from(reader)?;
            tx.outputs = Vec::decode_from(reader)?;
        }
    } else {
        tx.outputs = Vec::decode_from(reader)?;
    }

    if flags & 1 != 0 {
        flags ^= 1;
        for input in tx.inputs.iter_mut() {
            input.set_witness(ScriptWitness::decode_from(reader)?);
        }
    }

    ensure!(flags == 0, Error::UnknownOptionalData { flags });

    tx.lock_time = reader.read_u32()?;
    Ok(tx)
}

impl Encode for Transaction {
    fn encode_to<W: WriteStream + ?Sized>(&self, dest: &mut W) {
        encode_transaction(self, dest)
    }
}

impl Encode for MutableTransaction {
    fn encode_to<W: WriteStream + ?Sized>(&self, dest: &mut W) {
        encode_transaction(self, dest)
    }
}

impl Decode for MutableTransaction {
    fn decode_from<R: ReadStream + ?Sized>(reader: &mut R) -> Result<Self> {
        decode_transaction(reader)
    }
}

impl Decode for Transaction {
    fn decode_from<R: ReadStream + ?Sized>(reader: &mut R) -> Result<Self> {
        decode_transaction(reader).map(Transaction::from)
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use randomness::Rng;
    use script::Script;
    use test_utils::random::{make_seedable_rng, Seed};

    use super::*;
    use crate::chain::transaction::{OutPoint, Sequence};
    use crate::primitives::{Amount, Id, Idable, H256};

    fn scenario_tx() -> MutableTransaction {
        let mut tx = MutableTransaction::new();
        tx.version = 2;
        tx.lock_time = 0;
        tx.inputs.push(
            TxInput::new(
                OutPoint::new(Id::new(H256([0x50; 32])), 7),
                Script::from(vec![0xab, 0xcd]),
                Sequence::FINAL,
            )
            .with_witness(ScriptWitness::from_stack(vec![vec![0x11; 64]])),
        );
        tx.outputs.push(TxOutput::new(
            Amount::from_atoms(100_000_000),
            Script::from(vec![0x51]),
        ));
        tx
    }

    fn scenario_legacy_hex() -> String {
        format!(
            "02000000 01 {} 07000000 02abcd ffffffff 01 00e1f50500000000 0151 00000000",
            "50".repeat(32)
        )
        .replace(' ', "")
    }

    fn scenario_witness_hex() -> String {
        format!(
            "02000000 00 01 01 {} 07000000 02abcd ffffffff 01 00e1f50500000000 0151 01 40 {} 00000000",
            "50".repeat(32),
            "11".repeat(64),
        )
        .replace(' ', "")
    }

    fn random_script(rng: &mut impl Rng) -> Script {
        let len = rng.gen_range(0..20);
        Script::from((0..len).map(|_| rng.gen::<u8>()).collect::<Vec<_>>())
    }

    fn random_witness(rng: &mut impl Rng) -> ScriptWitness {
        let items = rng.gen_range(1..4);
        let stack = (0..items)
            .map(|_| (0..rng.gen_range(1..80)).map(|_| rng.gen()).collect())
            .collect();
        ScriptWitness::from_stack(stack)
    }

    fn random_tx(rng: &mut impl Rng, with_witness: bool) -> MutableTransaction {
        let mut tx = MutableTransaction::new();
        tx.version = rng.gen_range(1..3);
        tx.lock_time = rng.gen();
        // An encoded empty input list would collide with the extended
        // format marker, so always generate at least one input.
        for _ in 0..rng.gen_range(1..5) {
            let mut input = TxInput::new(
                OutPoint::new(Id::random_using(rng), rng.gen()),
                random_script(rng),
                Sequence::from_u32(rng.gen()),
            );
            if with_witness {
                input.set_witness(random_witness(rng));
            }
            tx.inputs.push(input);
        }
        for _ in 0..rng.gen_range(0..5) {
            tx.outputs.push(TxOutput::new(
                Amount::from_atoms(rng.gen_range(0..=Amount::MAX_MONEY.into_atoms())),
                random_script(rng),
            ));
        }
        tx
    }

    #[test]
    fn empty_transaction_is_ten_bytes_either_way() {
        let tx = MutableTransaction {
            version: 1,
            inputs: vec![],
            outputs: vec![],
            lock_time: 0,
        };

        let bytes = tx.encode();
        assert_eq!(hex::encode(&bytes), "01000000000000000000");
        assert_eq!(
            tx.encode_with(FormatVersion::CURRENT.without_witness()),
            bytes
        );

        let decoded = MutableTransaction::decode_all(&bytes).unwrap();
        assert_eq!(decoded, tx);
        assert!(Transaction::from(decoded).is_null());

        let decoded = MutableTransaction::decode_all_with(
            &bytes,
            FormatVersion::CURRENT.without_witness(),
        )
        .unwrap();
        assert_eq!(decoded, tx);
    }

    #[rstest]
    #[case("0100000000020000", 2)]
    #[case("0100000000030000", 2)]
    #[case("01000000000a0000", 10)]
    fn unknown_flags_are_rejected(#[case] stream: &str, #[case] residual: u8) {
        let bytes = hex::decode(stream).unwrap();
        assert_eq!(
            MutableTransaction::decode(&bytes),
            Err(Error::UnknownOptionalData { flags: residual })
        );
    }

    #[test]
    fn witness_and_legacy_renditions() {
        let tx = scenario_tx();

        let witness_bytes = tx.encode();
        assert_eq!(hex::encode(&witness_bytes), scenario_witness_hex());

        let legacy_bytes = tx.encode_with(FormatVersion::CURRENT.without_witness());
        assert_eq!(hex::encode(&legacy_bytes), scenario_legacy_hex());
        assert!(legacy_bytes.len() < witness_bytes.len());

        let decoded = MutableTransaction::decode_all(&witness_bytes).unwrap();
        assert_eq!(decoded.inputs, tx.inputs);
        assert_eq!(decoded.outputs, tx.outputs);
        assert_eq!(decoded, tx);

        // The legacy bytes parse under either context; the witness is
        // simply absent.
        let decoded = MutableTransaction::decode_all(&legacy_bytes).unwrap();
        assert!(decoded.inputs[0].witness().is_empty());
        assert_eq!(decoded, tx);

        let decoded = MutableTransaction::decode_all_with(
            &legacy_bytes,
            FormatVersion::CURRENT.without_witness(),
        )
        .unwrap();
        assert!(decoded.inputs[0].witness().is_empty());
        assert_eq!(decoded, tx);
    }

    #[test]
    fn marked_stream_with_no_inputs_and_no_witnesses() {
        // Extended marker and witness flag, then genuinely empty input and
        // output lists: nothing is left to attach witnesses to.
        let bytes = hex::decode("010000000001000000000000").unwrap();
        let decoded = MutableTransaction::decode_all(&bytes).unwrap();
        assert!(decoded.inputs.is_empty());
        assert!(decoded.outputs.is_empty());
        assert_eq!(decoded.version, 1);
        assert_eq!(decoded.lock_time, 0);
    }

    #[rstest]
    #[trace]
    #[case(Seed::from_entropy())]
    fn roundtrip_without_witness(#[case] seed: Seed) {
        let mut rng = make_seedable_rng(seed);
        for _ in 0..20 {
            let tx = random_tx(&mut rng, false);

            // Without witness data the two renditions are the same bytes.
            let bytes = tx.encode();
            assert_eq!(
                bytes,
                tx.encode_with(FormatVersion::CURRENT.without_witness())
            );

            let decoded = MutableTransaction::decode_all(&bytes).unwrap();
            assert_eq!(decoded.inputs, tx.inputs);
            assert_eq!(decoded.outputs, tx.outputs);
            assert_eq!(decoded, tx);

            let decoded = MutableTransaction::decode_all_with(
                &bytes,
                FormatVersion::CURRENT.without_witness(),
            )
            .unwrap();
            assert_eq!(decoded, tx);
        }
    }

    #[rstest]
    #[trace]
    #[case(Seed::from_entropy())]
    fn roundtrip_with_witness(#[case] seed: Seed) {
        let mut rng = make_seedable_rng(seed);
        for _ in 0..20 {
            let tx = random_tx(&mut rng, true);

            let bytes = tx.encode();
            let decoded = MutableTransaction::decode_all(&bytes).unwrap();
            assert_eq!(decoded.inputs, tx.inputs);
            assert_eq!(decoded.outputs, tx.outputs);
            assert_eq!(decoded, tx);

            // The suppressed rendition drops the witness section but keeps
            // the id.
            let suppressed = tx.encode_with(FormatVersion::CURRENT.without_witness());
            assert!(suppressed.len() < bytes.len());

            let decoded = MutableTransaction::decode_all_with(
                &suppressed,
                FormatVersion::CURRENT.without_witness(),
            )
            .unwrap();
            assert!(decoded.inputs.iter().all(|input| input.witness().is_empty()));
            assert_eq!(decoded.get_id(), tx.get_id());
        }
    }

    #[test]
    fn empty_input_list_needs_the_suppressed_context() {
        let tx = MutableTransaction {
            version: 1,
            inputs: vec![],
            outputs: vec![TxOutput::new(Amount::from_atoms(7), Script::new())],
            lock_time: 5,
        };

        let suppressed = FormatVersion::CURRENT.without_witness();
        let bytes = tx.encode_with(suppressed);
        let decoded = MutableTransaction::decode_all_with(&bytes, suppressed).unwrap();
        assert_eq!(decoded.outputs, tx.outputs);
        assert_eq!(decoded, tx);

        // Under a witness-allowing context the empty input list reads as
        // the extended format marker and the stream misparses.
        assert!(MutableTransaction::decode_all(&bytes).is_err());
    }

    #[test]
    fn truncated_streams_fail() {
        let bytes = scenario_tx().encode();
        for len in 0..bytes.len() {
            assert!(
                MutableTransaction::decode_all(&bytes[..len]).is_err(),
                "prefix of {len} bytes unexpectedly decoded"
            );
        }
    }

    #[test]
    fn trailing_bytes_are_rejected_by_decode_all() {
        let mut bytes = scenario_tx().encode();
        bytes.push(0x00);
        assert_eq!(
            MutableTransaction::decode_all(&bytes),
            Err(Error::TrailingData(1))
        );
        // The lenient entry point ignores them.
        assert!(MutableTransaction::decode(&bytes).is_ok());
    }

    #[test]
    fn corrupted_streams_decode_or_fail_cleanly() {
        let tx = scenario_tx();

        let outcomes: Vec<_> = test_utils::try_all_single_bit_mutations(&tx).collect();
        assert!(outcomes.iter().any(|outcome| outcome.is_ok()));
        assert!(outcomes.iter().any(|outcome| outcome.is_err()));

        // Whatever a corrupted stream decodes to must survive its own
        // encode and decode with every field intact, witness included.
        for mutated in outcomes.into_iter().flatten() {
            let again = MutableTransaction::decode_all(&mutated.encode()).unwrap();
            assert_eq!(again.version, mutated.version);
            assert_eq!(again.inputs, mutated.inputs);
            assert_eq!(again.outputs, mutated.outputs);
            assert_eq!(again.lock_time, mutated.lock_time);
        }
    }

    #[test]
    fn frozen_transactions_decode_through_the_same_path() {
        let bytes = scenario_tx().encode();
        let frozen = Transaction::decode_all(&bytes).unwrap();
        assert_eq!(frozen.get_id(), scenario_tx().get_id());
        assert!(frozen.has_witness());
    }

    #[test]
    fn encoded_size_matches_the_encoding() {
        let tx = scenario_tx();
        assert_eq!(tx.encoded_size(), tx.encode().len());

        let suppressed = FormatVersion::CURRENT.without_witness();
        assert_eq!(
            tx.encoded_size_with(suppressed),
            tx.encode_with(suppressed).len()
        );
    }
}
