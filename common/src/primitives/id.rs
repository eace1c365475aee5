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

// TODO: consider removing this in the future when fixed-hash fixes this problem
#![allow(clippy::non_canonical_clone_impl)]

use std::fmt::{Debug, Display, LowerHex, UpperHex};

use generic_array::{typenum, GenericArray};

use crypto::hash::StreamHasher;
use randomness::Rng;
use serialization::{Decode, Encode, FormatVersion, ReadStream, Result, WriteStream};
use typename::TypeName;

fixed_hash::construct_fixed_hash! {
    pub struct H256(32);
}

impl Encode for H256 {
    fn encode_to<W: WriteStream + ?Sized>(&self, dest: &mut W) {
        dest.write_bytes(self.as_bytes())
    }
}

impl Decode for H256 {
    fn decode_from<R: ReadStream + ?Sized>(reader: &mut R) -> Result<Self> {
        let mut bytes = [0u8; 32];
        reader.read_exact(&mut bytes)?;
        Ok(H256(bytes))
    }
}

impl From<GenericArray<u8, typenum::U32>> for H256 {
    fn from(val: GenericArray<u8, typenum::U32>) -> Self {
        Self(val.into())
    }
}

pub struct Id<T> {
    hash: H256,
    _shadow: std::marker::PhantomData<fn() -> T>,
}

impl<T: TypeName> Debug for Id<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Id<{}>{{{:x}}}", T::typename_str(), self.hash)
    }
}

// Implementing Clone manually to avoid the Clone constraint on T
impl<T> Clone for Id<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for Id<T> {}

// We implement PartialEq/Eq manually to avoid them getting inherited to T through PhantomData
impl<T> PartialEq for Id<T> {
    fn eq(&self, other: &Self) -> bool {
        self.hash == other.hash
    }
}

impl<T> Eq for Id<T> {}

impl<T> Display for Id<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = self.hash.to_string();
        write!(
            f,
            "{}",
            self.hash.to_string().strip_prefix("0x").unwrap_or(&s)
        )
    }
}

impl<T> LowerHex for Id<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if f.alternate() {
            write!(f, "0x")?;
        }
        for i in &self.hash.0[..] {
            write!(f, "{:02x}", i)?;
        }
        Ok(())
    }
}

impl<T> UpperHex for Id<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if f.alternate() {
            write!(f, "0X")?;
        }
        for i in &self.hash.0[..] {
            write!(f, "{:02X}", i)?;
        }
        Ok(())
    }
}

// We implement Ord manually to avoid it getting inherited to T through PhantomData, because Id having Ord doesn't mean T requiring Ord
impl<T: Eq> Ord for Id<T> {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.hash.cmp(&other.hash)
    }
}

// We implement PartialOrd manually to avoid it getting inherited to T through PhantomData, because Id having PartialOrd doesn't mean T requiring Ord
impl<T: Eq> PartialOrd for Id<T> {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl<T: Eq> From<H256> for Id<T> {
    fn from(hash: H256) -> Self {
        Self::new(hash)
    }
}

impl<T> Id<T> {
    pub const fn to_hash(&self) -> H256 {
        self.hash
    }

    pub const fn as_hash(&self) -> &H256 {
        &self.hash
    }

    pub const fn new(h: H256) -> Self {
        Self {
            hash: h,
            _shadow: std::marker::PhantomData,
        }
    }

    pub const fn zero() -> Self {
        Self::new(H256::zero())
    }

    pub fn random_using<R: Rng>(rng: &mut R) -> Self {
        Self::new(H256::random_using(rng))
    }
}

impl<T> AsRef<[u8]> for Id<T> {
    fn as_ref(&self) -> &[u8] {
        &self.hash[..]
    }
}

impl<T> Encode for Id<T> {
    fn encode_to<W: WriteStream + ?Sized>(&self, dest: &mut W) {
        self.hash.encode_to(dest)
    }
}

impl<T> Decode for Id<T> {
    fn decode_from<R: ReadStream + ?Sized>(reader: &mut R) -> Result<Self> {
        H256::decode_from(reader).map(Self::new)
    }
}

/// a trait for objects that deserve having a unique id with implementations to how to ID them
pub trait Idable {
    type Tag: TypeName;
    fn get_id(&self) -> Id<Self::Tag>;
}

impl<T: Idable> Idable for &T {
    type Tag = T::Tag;
    fn get_id(&self) -> Id<Self::Tag> {
        (*self).get_id()
    }
}

// Ids are double-sha256 of the serialized form. Both hashing paths below
// must produce the same result for the same bytes.
pub type DefaultHashAlgo = crypto::hash::Sha256d;
pub type DefaultHashAlgoStream = crypto::hash::Sha256dStream;

/// Hash given slice using the default hash
pub fn default_hash<T: AsRef<[u8]> + Clone>(data: T) -> H256 {
    crypto::hash::hash::<DefaultHashAlgo, _>(&data).into()
}

/// Hash the encoded version of given value using the default hash
pub fn hash_encoded<T: Encode>(value: &T) -> H256 {
    hash_encoded_with(value, FormatVersion::CURRENT)
}

/// Hash the encoded version of given value under an explicit format version.
/// Witness-suppressed transaction ids are produced through this.
pub fn hash_encoded_with<T: Encode>(value: &T, version: FormatVersion) -> H256 {
    let mut hasher = DefaultHashAlgoStream::new();
    crate::primitives::hash_encoded::hash_encoded_to(value, &mut hasher, version);
    hasher.finalize().into()
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use hex::FromHex;
    use rstest::rstest;

    use crypto::hash::StreamHasher;
    use test_utils::random::Seed;

    use super::*;

    #[derive(Eq, PartialEq, Debug)]
    struct TestType1;

    impl TypeName for TestType1 {
        fn typename_str() -> std::borrow::Cow<'static, str> {
            "TestType1".into()
        }
    }

    #[derive(Eq, PartialEq, Debug)]
    struct TestType2;

    impl TypeName for TestType2 {
        fn typename_str() -> std::borrow::Cow<'static, str> {
            "TestType2".into()
        }
    }

    #[test]
    fn basic_str() {
        let h1: Id<TestType1> =
            H256::from_str("000000006a625f06636b8bb6ac7b960a8d03705d1ace08b1a19da3fdcc99ddbd")
                .unwrap()
                .into();

        assert_eq!(
            format!("{:x}", h1),
            "000000006a625f06636b8bb6ac7b960a8d03705d1ace08b1a19da3fdcc99ddbd".to_string()
        );
        assert_eq!(
            format!("{:#x}", h1),
            "0x000000006a625f06636b8bb6ac7b960a8d03705d1ace08b1a19da3fdcc99ddbd".to_string()
        );
        assert_eq!(
            format!("{:X}", h1),
            "000000006A625F06636B8BB6AC7B960A8D03705D1ACE08B1A19DA3FDCC99DDBD".to_string()
        );
        assert_eq!(
            format!("{:#X}", h1),
            "0X000000006A625F06636B8BB6AC7B960A8D03705D1ACE08B1A19DA3FDCC99DDBD".to_string()
        );
        assert_eq!(format!("{}", h1), "0000…ddbd".to_string());
        assert_eq!(
            format!("{:?}", h1),
            "Id<TestType1>{000000006a625f06636b8bb6ac7b960a8d03705d1ace08b1a19da3fdcc99ddbd}"
                .to_string()
        );
    }

    #[rstest]
    #[trace]
    #[case(Seed::from_entropy())]
    fn typename(#[case] seed: Seed) {
        let mut rng = test_utils::random::make_seedable_rng(seed);

        let h1: Id<TestType1> = H256::random_using(&mut rng).into();
        assert!(format!("{h1:?}").starts_with("Id<TestType1>{"));

        let h2: Id<TestType2> = H256::random_using(&mut rng).into();
        assert!(format!("{h2:?}").starts_with("Id<TestType2>{"));
    }

    #[test]
    fn hashes_stream_and_msg_identical() {
        use randomness::{make_pseudo_rng, Rng};
        let random_bytes = make_pseudo_rng().gen::<[u8; H256::len_bytes()]>();

        let h1 = default_hash(random_bytes);
        let mut hash_stream = DefaultHashAlgoStream::new();
        hash_stream.write(random_bytes);
        let h2 = hash_stream.finalize();

        assert_eq!(h1, h2.into());

        let h3 = crypto::hash::hash::<DefaultHashAlgo, _>(random_bytes);

        assert_eq!(h1, h3.into());
    }

    const SAMPLE_HASHES: [&str; 5] = [
        "0000000000000000000000000000000000000000000000000000000000000000",
        "0000000000000000000000000000000000000000000000000000000000000001",
        "000000006a625f06636b8bb6ac7b960a8d03705d1ace08b1a19da3fdcc99ddbd",
        "02f0000ff000000004ec466ce4732fe6f1ed1cddc2ed4b328fff5224276e3f6f",
        "000000000000000000059fa50103b9683e51e5aba83b8a34c9b98ce67d66136c",
    ];

    #[test]
    fn h256_from_bytes_and_from_str_agree() {
        fn check(hex: &str) {
            let bytes: Vec<u8> = FromHex::from_hex(hex).unwrap();
            let h = H256::from_str(hex).unwrap();
            assert_eq!(h.as_bytes(), bytes.as_slice());
        }
        SAMPLE_HASHES.iter().cloned().for_each(check)
    }

    #[test]
    fn wire_form_is_the_raw_bytes() {
        fn check(hex: &'static str) {
            let h = H256::from_str(hex).unwrap();
            test_utils::assert_encoded_eq(&h, hex);

            let id = Id::<()>::new(h);
            test_utils::assert_encoded_eq(&id, hex);
            assert_eq!(test_utils::decode_from_hex::<Id<()>>(hex), id);
        }
        SAMPLE_HASHES.iter().cloned().for_each(check)
    }

    #[test]
    fn hash_encoded_matches_hashing_the_encoding() {
        let value = 0xfeed_d0d0_cafe_beefu64;
        assert_eq!(hash_encoded(&value), default_hash(value.encode()));

        let value: Vec<u8> = vec![0xaa; 77];
        assert_eq!(hash_encoded(&value), default_hash(value.encode()));
    }

    #[test]
    fn display_test() {
        fn check(hash: &str) {
            let h256 = H256::from_str(hash).expect("should not fail");

            let debug = format!("{h256:?}");
            assert_eq!(debug, format!("0x{hash}"));

            let display = format!("{h256}");
            let (_, last_value) = hash.split_at(hash.len() - 4);
            assert_eq!(display, format!("0x{}…{}", &hash[0..4], last_value));

            let no_0x = format!("{h256:x}");
            assert_eq!(no_0x, hash.to_string());

            let sharp = format!("{h256:#x}");
            assert_eq!(sharp, debug);

            let upper_hex = format!("{h256:#010X}");
            assert_eq!(upper_hex, format!("0X{}", hash.to_uppercase()));
        }

        check("000000000000000000059fa50103b9683e51e5aba83b8a34c9b98ce67d66136c");
        check("000000000000000004ec466ce4732fe6f1ed1cddc2ed4b328fff5224276e3f6f");
        check("000000006a625f06636b8bb6ac7b960a8d03705d1ace08b1a19da3fdcc99ddbd");
    }
}
