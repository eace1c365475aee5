use script::Script;
use serialization::{Decode, Encode, ReadStream, Result, WriteStream};

use super::{OutPoint, ScriptWitness, Sequence};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TxInput {
    outpoint: OutPoint,
    script_sig: Script,
    sequence: Sequence,
    witness: ScriptWitness,
}

impl TxInput {
    pub fn new(outpoint: OutPoint, script_sig: Script, sequence: Sequence) -> Self {
        TxInput {
            outpoint,
            script_sig,
            sequence,
            witness: ScriptWitness::new(),
        }
    }

    pub fn with_witness(mut self, witness: ScriptWitness) -> Self {
        self.witness = witness;
        self
    }

    pub fn outpoint(&self) -> &OutPoint {
        &self.outpoint
    }

    pub fn script_sig(&self) -> &Script {
        &self.script_sig
    }

    pub fn sequence(&self) -> Sequence {
        self.sequence
    }

    /// The witness stack of this input. Logically part of the input, but
    /// carried in a separate section of the extended wire format; the
    /// Encode impl below covers the legacy fields only.
    pub fn witness(&self) -> &ScriptWitness {
        &self.witness
    }

    pub fn set_witness(&mut self, witness: ScriptWitness) {
        self.witness = witness;
    }
}

impl Encode for TxInput {
    fn encode_to<W: WriteStream + ?Sized>(&self, dest: &mut W) {
        self.outpoint.encode_to(dest);
        self.script_sig.encode_to(dest);
        self.sequence.encode_to(dest);
    }
}

impl Decode for TxInput {
    fn decode_from<R: ReadStream + ?Sized>(reader: &mut R) -> Result<Self> {
        let outpoint = OutPoint::decode_from(reader)?;
        let script_sig = Script::decode_from(reader)?;
        let sequence = Sequence::decode_from(reader)?;
        Ok(TxInput::new(outpoint, script_sig, sequence))
    }
}
