// Copyright (c) 2022 RBB S.r.l
// opensource@mintlayer.org
// SPDX-License-Identifier: MIT
// Licensed under the MIT License;
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
// http://spdx.org/licenses/MIT
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! A thin wrapper over the random number generation machinery, so that all
//! randomness used across the codebase comes from one place.

pub use rand::{CryptoRng, Rng, RngCore, SeedableRng};

/// An rng seeded by the operating system's entropy source. Use this whenever
/// the random values have security implications.
pub fn make_true_rng() -> impl Rng + CryptoRng {
    rand::rngs::StdRng::from_entropy()
}

/// An rng for cases where the quality of randomness does not matter,
/// such as picking arbitrary data in tests or debug helpers.
pub fn make_pseudo_rng() -> impl Rng {
    rand::thread_rng()
}
