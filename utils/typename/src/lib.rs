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

/// The interface for getting a name of the type.
///
/// The name is used in debug output, so it shouldn't be too verbose (fully qualified) to not
/// clutter logs.
pub trait TypeName {
    /// Returns a name of the type.
    fn typename_str() -> std::borrow::Cow<'static, str>;
}

impl TypeName for () {
    fn typename_str() -> std::borrow::Cow<'static, str> {
        "()".into()
    }
}
