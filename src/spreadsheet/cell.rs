use std::fmt::Display;

/// A single loosely typed cell value. Any column may hold names, hours or
/// unrelated data, so no schema is attached to it.
#[derive(Clone, Debug, Default, PartialEq)]
pub enum CellValue {
    #[default]
    Empty,
    /// Boolean values (true/false)
    Boolean(bool),
    /// Numeric values
    Number(f64),
    /// Text values, kept as written by the source
    Text(String),
}

impl CellValue {
    /// Types a raw field from a text source such as CSV.
    /// Blank text becomes `Empty`, finite numbers become `Number`, everything else stays `Text`.
    pub fn parse(raw: &str) -> Self {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Self::Empty;
        }
        match trimmed.parse::<f64>() {
            Ok(number) if number.is_finite() => Self::Number(number),
            _ => Self::Text(raw.to_owned()),
        }
    }

    /// Returns true if the cell contains no data.
    pub fn is_empty(&self) -> bool {
        matches!(self, Self::Empty)
    }

    /// Returns the text content, only for text cells.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(value) => Some(value.as_str()),
            _ => None,
        }
    }

    /// Converts the cell to a finite number.
    /// Text must parse completely (surrounding whitespace allowed). Used for hours, where a
    /// strict parse keeps free-text columns out of detection; rate tables are curated and
    /// use `to_leading_number` so that units like `"/hr"` are tolerated.
    pub fn to_number(&self) -> Option<f64> {
        let number = match self {
            Self::Number(value) => Some(*value),
            Self::Text(value) => value.trim().parse::<f64>().ok(),
            _ => None,
        };
        number.filter(|value| value.is_finite())
    }

    /// Converts the cell to a number, parsing only the leading numeric characters
    /// of text cells (`"20.50/hr"` reads as `20.5`).
    pub fn to_leading_number(&self) -> Option<f64> {
        match self {
            Self::Number(value) => Some(*value).filter(|value| value.is_finite()),
            Self::Text(value) => leading_number(value),
            _ => None,
        }
    }

    /// Renders the cell as a lookup key. Integral numbers print without a fraction.
    pub fn to_key_string(&self) -> String {
        self.to_string()
    }
}

fn leading_number(value: &str) -> Option<f64> {
    let value = value.trim_start();
    let mut end = 0;
    let mut has_digit = false;
    let mut has_point = false;
    for (index, char) in value.char_indices() {
        match char {
            '+' | '-' if index == 0 => (),
            '0'..='9' => has_digit = true,
            '.' if !has_point => has_point = true,
            _ => break,
        }
        end = index + char.len_utf8();
    }
    if !has_digit {
        return None;
    }
    value[..end].parse::<f64>().ok().filter(|number| number.is_finite())
}

impl Display for CellValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Empty => Ok(()),
            Self::Boolean(value) => write!(f, "{}", value),
            Self::Number(value) => write!(f, "{}", value),
            Self::Text(value) => write!(f, "{}", value),
        }
    }
}

impl From<&str> for CellValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_owned())
    }
}

impl From<String> for CellValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<f64> for CellValue {
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}

impl From<i64> for CellValue {
    fn from(value: i64) -> Self {
        Self::Number(value as f64)
    }
}

impl From<i32> for CellValue {
    fn from(value: i32) -> Self {
        Self::Number(value as f64)
    }
}

impl From<bool> for CellValue {
    fn from(value: bool) -> Self {
        Self::Boolean(value)
    }
}

impl<T: Into<CellValue>> From<Option<T>> for CellValue {
    fn from(value: Option<T>) -> Self {
        value.map(Into::into).unwrap_or_default()
    }
}
