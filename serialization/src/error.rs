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

/// Decoding failures. Encoding into the in-memory sinks of this crate
/// cannot fail, so there is no error type for that direction.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("Unexpected end of stream")]
    UnexpectedEnd,
    #[error("Declared size {0} exceeds the limit of {1} bytes")]
    SizeLimitExceeded(u64, u64),
    #[error("Unknown optional data with flags {flags:#04x}")]
    UnknownOptionalData { flags: u8 },
    #[error("{0} trailing bytes left after decoding")]
    TrailingData(usize),
}
