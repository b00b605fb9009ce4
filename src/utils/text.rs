/// Fixed substitution table for Romanian diacritics. Everything else passes
/// through unchanged, so the function is idempotent.
pub fn normalize_diacritics(input: &str) -> String {
    input
        .chars()
        .map(|c| match c {
            'ă' => 'a',
            'î' => 'i',
            'â' => 'a',
            'ș' => 's',
            'ț' => 't',
            'Ă' => 'A',
            'Î' => 'I',
            'Â' => 'A',
            'Ș' => 'S',
            'Ț' => 'T',
            other => other,
        })
        .collect()
}

/// Percent-encodes everything outside the unreserved set, for backup API
/// query values (commas become %2C, spaces %20).
pub fn urlencode(input: &str) -> String {
    let mut encoded = String::with_capacity(input.len());
    for byte in input.bytes() {
        match byte {
            b'A'..=b'Z' | b'a'..=b'z' | b'0'..=b'9' | b'-' | b'_' | b'.' | b'~' => {
                encoded.push(byte as char)
            }
            other => {
                encoded.push_str(&format!("%{:02X}", other));
            }
        }
    }
    encoded
}
