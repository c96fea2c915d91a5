/// Converts a 0-based column index to Excel-style column letters (0 → "A", 26 → "AA").
pub fn index_to_column(index: usize) -> String {
    let mut column = index + 1;
    let mut letters = String::new();
    while column > 0 {
        column -= 1;
        let digit = char::from_u32(65 + (column % 26) as u32).expect("Hardcode letters");
        column /= 26;
        letters.insert(0, digit);
    }
    letters
}

/// Converts Excel-style column letters to a 0-based index. Returns None for empty or invalid text.
pub fn col_to_index(letters: &str) -> Option<usize> {
    if letters.is_empty() {
        return None;
    }
    let mut index = 0usize;
    for char in letters.chars() {
        if !char.is_ascii_uppercase() {
            return None;
        }
        index = index.checked_mul(26)?.checked_add((char as usize) - 64)?;
    }
    Some(index - 1)
}

/// Converts a 1-based row number to a 0-based index. Returns None for empty, zero or invalid text.
pub fn row_to_index(digits: &str) -> Option<usize> {
    digits.parse::<usize>().ok().and_then(|row| row.checked_sub(1))
}
