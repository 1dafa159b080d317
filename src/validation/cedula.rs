/// Alternating coefficients applied to the first nine digits.
const COEFFICIENTS: [u32; 9] = [2, 1, 2, 1, 2, 1, 2, 1, 2];

/// Province code reserved for IDs issued abroad.
const FOREIGN_PROVINCE: u32 = 30;

/// Check a national ID (cédula): ten digits, a known province code and a
/// matching check digit.
pub fn is_valid_national_id(id: &str) -> bool {
    if id.len() != 10 || !id.bytes().all(|b| b.is_ascii_digit()) {
        return false;
    }

    let digits: Vec<u32> = id.bytes().map(|b| u32::from(b - b'0')).collect();

    let province = digits[0] * 10 + digits[1];
    if !(1..=24).contains(&province) && province != FOREIGN_PROVINCE {
        return false;
    }

    check_digit(&digits[..9]) == digits[9]
}

/// Compute the expected tenth digit for the first nine.
pub fn check_digit(digits: &[u32]) -> u32 {
    let sum: u32 = digits
        .iter()
        .zip(COEFFICIENTS)
        .map(|(digit, coefficient)| {
            let product = digit * coefficient;
            if product >= 10 {
                product - 9
            } else {
                product
            }
        })
        .sum();

    match sum % 10 {
        0 => 0,
        remainder => 10 - remainder,
    }
}
