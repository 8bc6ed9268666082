//! Discount code generation.
//!
//! Codes look like `USER` + the first four characters of the user id + the
//! issue time in base-36 milliseconds + four random base-36 characters, all
//! uppercased. Uniqueness is probabilistic.

use jiff::Timestamp;
use rand::Rng;

const CODE_PREFIX: &str = "USER";
const USER_PREFIX_CHARS: usize = 4;
const RANDOM_CHARS: usize = 4;
const RADIX: u32 = 36;

/// Build a new discount code for `user_id` issued at `now`.
pub fn generate_code<R: Rng>(user_id: &str, now: Timestamp, rng: &mut R) -> String {
    let user: String = user_id.chars().take(USER_PREFIX_CHARS).collect();
    let millis = u64::try_from(now.as_millisecond()).unwrap_or_default();

    let random: String = (0..RANDOM_CHARS)
        .map(|_| base36_digit(rng.gen_range(0..RADIX)))
        .collect();

    format!("{CODE_PREFIX}{user}{}{random}", to_base36(millis)).to_uppercase()
}

fn to_base36(mut value: u64) -> String {
    let mut digits = Vec::new();

    loop {
        let digit = u32::try_from(value % u64::from(RADIX)).unwrap_or_default();

        digits.push(base36_digit(digit));
        value /= u64::from(RADIX);

        if value == 0 {
            break;
        }
    }

    digits.iter().rev().collect()
}

fn base36_digit(digit: u32) -> char {
    char::from_digit(digit, RADIX).unwrap_or('0')
}
