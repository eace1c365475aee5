//! Tools for interrupting function flow unless some condition holds.

/// Early exit if given condition is not satisfied.
///
/// There are two variants:
/// * `ensure!(cond)` returns from the enclosing function with [`None`] if `cond` fails
/// * `ensure!(cond, err)` returns from the function with [`Err`]`(err)` if `cond` fails
///
/// Example with [Option]:
/// ```
/// # use utils::ensure;
/// fn checked_shift(x: u32, bits: u32) -> Option<u32> {
///     ensure!(bits < u32::BITS);
///     Some(x << bits)
/// }
///
/// assert_eq!(checked_shift(1, 4), Some(16));
/// assert_eq!(checked_shift(5, 0), Some(5));
/// assert_eq!(checked_shift(1, 32), None);
/// ```
///
/// Example with [Result]:
/// ```
/// # use utils::ensure;
/// # #[derive(PartialEq, Eq, Debug)]
/// enum PrefixError {
///     Empty,
///     TooLong,
/// }
///
/// fn prefix(data: &[u8], len: usize) -> Result<&[u8], PrefixError> {
///     ensure!(!data.is_empty(), PrefixError::Empty);
///     ensure!(len <= data.len(), PrefixError::TooLong);
///     Ok(&data[..len])
/// }
///
/// assert_eq!(prefix(b"abcd", 2), Ok(&b"ab"[..]));
/// assert_eq!(prefix(b"", 0), Err(PrefixError::Empty));
/// assert_eq!(prefix(b"ab", 3), Err(PrefixError::TooLong));
/// ```
#[macro_export]
macro_rules! ensure {
    ($cond:expr $(,)?) => {
        $cond.then(|| ())?
    };
    ($cond:expr, $err:expr $(,)?) => {
        $cond.then(|| ()).ok_or_else(|| $err)?
    };
}
