use script::Script;
use serialization::{Decode, Encode, ReadStream, Result, WriteStream};

use crate::primitives::Amount;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TxOutput {
    value: Amount,
    script_pubkey: Script,
}

impl TxOutput {
    pub fn new(value: Amount, script_pubkey: Script) -> Self {
        TxOutput {
            value,
            script_pubkey,
        }
    }

    /// The sentinel output: minus one atom and an empty locking script.
    pub fn null() -> Self {
        TxOutput {
            value: Amount::from_atoms(-1),
            script_pubkey: Script::new(),
        }
    }

    /// Whether this is the sentinel output. Only the value is examined; the
    /// script plays no part in the check.
    pub fn is_null(&self) -> bool {
        self.value == Amount::from_atoms(-1)
    }

    pub fn value(&self) -> Amount {
        self.value
    }

    pub fn script_pubkey(&self) -> &Script {
        &self.script_pubkey
    }
}

impl Encode for TxOutput {
    fn encode_to<W: WriteStream + ?Sized>(&self, dest: &mut W) {
        self.value.encode_to(dest);
        self.script_pubkey.encode_to(dest);
    }
}

impl Decode for TxOutput {
    fn decode_from<R: ReadStream + ?Sized>(reader: &mut R) -> Result<Self> {
        let value = Amount::decode_from(reader)?;
        let script_pubkey = Script::decode_from(reader)?;
        Ok(TxOutput {
            value,
            script_pubkey,
        })
    }
}
