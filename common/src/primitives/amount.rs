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

#![allow(clippy::eq_op)]

use std::iter::Sum;

use serialization::{Decode, Encode, ReadStream, Result, WriteStream};

// The wire format fixes amounts at 64 bits, so this stays signed 64-bit.
// Negative values never represent money; they exist only as sentinels.
pub type IntType = i64;

/// A signed fixed-point type for coin amounts, with checked arithmetic.
/// The smallest unit of count is called an atom.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct Amount {
    val: IntType,
}

fn remove_right_most_zeros_and_decimal_point(s: String) -> String {
    let point_pos = s.chars().position(|c| c == '.');
    if point_pos.is_none() {
        return s;
    }
    let s = s.trim_end_matches('0');
    let s = s.trim_end_matches('.');
    s.to_owned()
}

impl Amount {
    pub const MAX: Self = Self::from_atoms(IntType::MAX);
    pub const ZERO: Self = Self::from_atoms(0);

    /// Number of atoms in one coin.
    pub const ATOMS_PER_COIN: IntType = 100_000_000;

    /// Decimal places used when rendering amounts as coin values.
    pub const DECIMALS: u8 = 8;

    /// The monetary cap of the chain, in atoms. Values above it can exist
    /// transiently in arithmetic but never in a valid output or total.
    pub const MAX_MONEY: Self = Self::from_atoms(21_000_000 * Self::ATOMS_PER_COIN);

    pub const fn from_atoms(v: IntType) -> Self {
        Amount { val: v }
    }

    pub const fn into_atoms(&self) -> IntType {
        self.val
    }

    /// Whether the value lies in the legal monetary range, zero to
    /// [Amount::MAX_MONEY] inclusive.
    pub const fn is_within_money_range(&self) -> bool {
        0 <= self.val && self.val <= Self::MAX_MONEY.val
    }

    pub fn into_fixedpoint_str(self, decimals: u8) -> String {
        let amount_str = self.val.unsigned_abs().to_string();
        let decimals = decimals as usize;
        let sign = if self.val < 0 { "-" } else { "" };
        if amount_str.len() <= decimals {
            let zeros = "0".repeat(decimals - amount_str.len());
            let result = sign.to_owned() + "0." + &zeros + &amount_str;

            remove_right_most_zeros_and_decimal_point(result)
        } else {
            let (whole, fraction) = amount_str.split_at(amount_str.len() - decimals);
            let result = format!("{sign}{whole}.{fraction}");

            remove_right_most_zeros_and_decimal_point(result)
        }
    }

    pub fn from_fixedpoint_str(amount_str: &str, decimals: u8) -> Option<Self> {
        let decimals = decimals as usize;
        let amount_str = amount_str.trim_matches(' '); // trim spaces
        let amount_str = amount_str.replace('_', "");

        // empty not allowed
        if amount_str.is_empty() {
            return None;
        }
        // too long
        if amount_str.len() > 100 {
            return None;
        }
        // must be only numbers, a decimal point or a leading minus
        if !amount_str.chars().all(|c| char::is_numeric(c) || c == '.' || c == '-') {
            return None;
        }

        #[allow(clippy::if_same_then_else)]
        if amount_str.matches('.').count() > 1 {
            // only 1 decimal point allowed
            None
        } else if amount_str.matches('-').count() > 1 {
            None
        } else if amount_str.contains('-') && !amount_str.starts_with('-') {
            None
        } else if amount_str.matches('.').count() == 0 {
            // if there is no decimal point, then just add N zeros to the right and we're done
            let zeros = "0".repeat(decimals);
            let amount_str = amount_str + &zeros;

            amount_str.parse::<IntType>().ok().map(|v| Amount { val: v })
        } else {
            // if there's 1 decimal point, split, join the numbers, then add zeros to the right
            let amount_split = amount_str.split('.').collect::<Vec<&str>>();
            debug_assert!(amount_split.len() == 2); // we already checked we have 1 decimal exactly
            if amount_split[1].len() > decimals {
                // there cannot be more decimals than the assumed amount
                return None;
            }
            let zeros = "0".repeat(decimals - amount_split[1].len());
            let atoms_str = amount_split[0].to_owned() + amount_split[1] + &zeros;

            atoms_str.parse::<IntType>().ok().map(|v| Amount { val: v })
        }
    }
}

impl std::ops::Add for Amount {
    type Output = Option<Self>;

    fn add(self, other: Self) -> Option<Self> {
        self.val.checked_add(other.val).map(|n| Amount { val: n })
    }
}

impl std::ops::Sub for Amount {
    type Output = Option<Self>;

    fn sub(self, other: Self) -> Option<Self> {
        self.val.checked_sub(other.val).map(|n| Amount { val: n })
    }
}

impl std::ops::Mul<IntType> for Amount {
    type Output = Option<Self>;

    fn mul(self, other: IntType) -> Option<Self> {
        self.val.checked_mul(other).map(|n| Amount { val: n })
    }
}

impl std::ops::Div<IntType> for Amount {
    type Output = Option<Amount>;

    fn div(self, other: IntType) -> Option<Amount> {
        self.val.checked_div(other).map(|n| Amount { val: n })
    }
}

impl std::ops::Rem<IntType> for Amount {
    type Output = Option<Self>;

    fn rem(self, other: IntType) -> Option<Self> {
        self.val.checked_rem(other).map(|n| Amount { val: n })
    }
}

impl Sum<Amount> for Option<Amount> {
    fn sum<I>(mut iter: I) -> Self
    where
        I: Iterator<Item = Amount>,
    {
        iter.try_fold(Amount::from_atoms(0), std::ops::Add::add)
    }
}

impl Encode for Amount {
    fn encode_to<W: WriteStream + ?Sized>(&self, dest: &mut W) {
        dest.write_i64(self.val)
    }
}

impl Decode for Amount {
    fn decode_from<R: ReadStream + ?Sized>(reader: &mut R) -> Result<Self> {
        reader.read_i64().map(Self::from_atoms)
    }
}

#[macro_export]
macro_rules! amount_sum {
    ($arg_1:expr, $($arg_n:expr),+) => {{
        let result = Some($arg_1);
        $(
            let result = match result {
                Some(v) => v + $arg_n,
                None => None,
            };
        )*
        result
    }}
}
