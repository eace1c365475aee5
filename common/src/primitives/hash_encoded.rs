//! Hash an object by its encoding

use crypto::hash::StreamHasher;
use serialization::{Encode, FormatVersion, WriteStream};

/// Feed an encoded version of the object into a stream hasher. The format
/// version is visible to the value's encoder exactly as it would be on a
/// real output stream, so version-dependent encodings hash correctly.
pub fn hash_encoded_to<T: Encode, H: StreamHasher>(
    val: &T,
    hasher: &mut H,
    version: FormatVersion,
) {
    val.encode_to(&mut HashWriter(hasher, version))
}

// A bridge from WriteStream to StreamHasher. Private as to not expose the
// writer methods externally.
struct HashWriter<'a, H: StreamHasher>(&'a mut H, FormatVersion);

impl<H: StreamHasher> WriteStream for HashWriter<'_, H> {
    fn format_version(&self) -> FormatVersion {
        self.1
    }

    fn write_bytes(&mut self, bytes: &[u8]) {
        self.0.write(bytes);
    }
}
