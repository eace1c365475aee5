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

use itertools::Itertools;
use serialization::{Decode, Encode, ReadStream, Result, WriteStream};

/// The ordered stack of byte strings that satisfies the spending conditions
/// of one input. It rides in its own section of the extended wire format and
/// never enters the transaction id, so it can be attached or replaced
/// without changing what the transaction refers to.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ScriptWitness {
    stack: Vec<Vec<u8>>,
}

impl ScriptWitness {
    pub const fn new() -> Self {
        ScriptWitness { stack: Vec::new() }
    }

    pub fn from_stack(stack: Vec<Vec<u8>>) -> Self {
        ScriptWitness { stack }
    }

    pub fn stack(&self) -> &Vec<Vec<u8>> {
        &self.stack
    }

    pub fn is_empty(&self) -> bool {
        self.stack.is_empty()
    }
}

impl std::fmt::Display for ScriptWitness {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "ScriptWitness({})",
            self.stack.iter().map(hex::encode).join(", ")
        )
    }
}

impl Encode for ScriptWitness {
    fn encode_to<W: WriteStream + ?Sized>(&self, dest: &mut W) {
        self.stack.encode_to(dest)
    }
}

impl Decode for ScriptWitness {
    fn decode_from<R: ReadStream + ?Sized>(reader: &mut R) -> Result<Self> {
        Vec::decode_from(reader).map(Self::from_stack)
    }
}
