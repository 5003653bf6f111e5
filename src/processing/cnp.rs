//! Birth date decoding from the 13-digit national numeric identifier (CNP).

/// Length of a well-formed identifier.
pub const CNP_LENGTH: usize = 13;

/// Decode the birth date encoded in a CNP as `DD.MM.YYYY`.
///
/// Position 0 carries sex and century (`1`/`2` mean 19xx, anything else 20xx),
/// positions 1-2 the year, 3-4 the month and 5-6 the day. Returns `None` unless
/// the input is exactly 13 characters. Month and day are not range-checked.
pub fn decode_birth_date(cnp: &str) -> Option<String> {
    let chars: Vec<char> = cnp.chars().collect();
    if chars.len() != CNP_LENGTH {
        return None;
    }

    let century = match chars[0] {
        '1' | '2' => "19",
        _ => "20",
    };
    let span = |from: usize, to: usize| chars[from..to].iter().collect::<String>();

    Some(format!(
        "{}.{}.{}{}",
        span(5, 7),
        span(3, 5),
        century,
        span(1, 3)
    ))
}
