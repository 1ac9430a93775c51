//! en-US dollar formatting (`$1,234.56`).

/// Format `amount` as US dollars with thousands separators and two decimals.
///
/// Rounds half away from zero. Non-finite amounts render as `$NaN`, `$∞`
/// and `-$∞`. Amounts that round to zero print unsigned.
pub fn format_usd(amount: f64) -> String {
    if amount.is_nan() {
        return "$NaN".to_string();
    }
    if amount.is_infinite() {
        let sign = if amount < 0.0 { "-" } else { "" };
        return format!("{sign}$∞");
    }

    let (whole, cents) = round_to_cents(amount.abs());
    let is_zero = whole == "0" && cents == "00";
    let sign = if amount < 0.0 && !is_zero { "-" } else { "" };
    format!("{sign}${}.{cents}", group_thousands(&whole))
}

/// Round a non-negative finite amount to cents on its shortest decimal form.
///
/// `1.005` is rounded as the digits `1.005`, not as the nearest binary
/// value below it. Returns the integer digits and the two cent digits.
fn round_to_cents(amount: f64) -> (String, String) {
    // `Display` for f64 is the shortest round-trip form and never uses an
    // exponent.
    let text = amount.to_string();
    let (whole, fraction) = text.split_once('.').unwrap_or((text.as_str(), ""));
    let mut fraction: Vec<u8> = fraction.bytes().collect();
    fraction.resize(fraction.len().max(3), b'0');

    let mut digits: Vec<u8> = whole.bytes().chain(fraction[..2].iter().copied()).collect();
    if fraction[2] >= b'5' {
        increment(&mut digits);
    }

    let split = digits.len() - 2;
    let cents = String::from_utf8_lossy(&digits[split..]).into_owned();
    let whole = String::from_utf8_lossy(&digits[..split]).into_owned();
    (whole, cents)
}

/// Add one to a string of ASCII decimal digits.
fn increment(digits: &mut Vec<u8>) {
    for digit in digits.iter_mut().rev() {
        if *digit == b'9' {
            *digit = b'0';
        } else {
            *digit += 1;
            return;
        }
    }
    digits.insert(0, b'1');
}

fn group_thousands(digits: &str) -> String {
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (idx, digit) in digits.chars().enumerate() {
        if idx > 0 && (digits.len() - idx) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }
    grouped
}
