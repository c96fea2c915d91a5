use crate::diagnostics::Diagnostics;
use crate::spreadsheet::table::Table;
use std::collections::BTreeMap;

/// Which auxiliary table a lookup was built from.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum LookupKind {
    Rate,
    Bonus,
    Holiday,
}

impl LookupKind {
    pub const fn as_str(&self) -> &'static str {
        match self {
            LookupKind::Rate => "rate",
            LookupKind::Bonus => "bonus",
            LookupKind::Holiday => "holiday",
        }
    }

    /// Header keywords identifying the value column, matched case-insensitively.
    const fn keywords(&self) -> &'static [&'static str] {
        match self {
            LookupKind::Rate => &["rate"],
            LookupKind::Bonus => &["bonus"],
            LookupKind::Holiday => &["holiday", "hours"],
        }
    }
}

/// Trims and lower-cases a name for use as a join key.
pub fn normalize_name(name: &str) -> String {
    name.trim().to_lowercase()
}

/// Picks the column holding the values of an auxiliary table.
///
/// Rates prefer the first header containing "rate" and fall back to the second
/// column. Bonus and holiday tables prefer the second column and fall back to the
/// first header containing their keyword.
pub fn resolve_value_column(table: &Table, kind: LookupKind) -> Option<usize> {
    let by_keyword = || {
        table.find_header(|header| {
            let header = header.to_lowercase();
            kind.keywords().iter().any(|keyword| header.contains(keyword))
        })
    };
    let second = || Some(1).filter(|col| *col < table.column_count());
    match kind {
        LookupKind::Rate => by_keyword().or_else(second),
        LookupKind::Bonus | LookupKind::Holiday => second().or_else(by_keyword),
    }
}

/// Normalized name → value map built from an auxiliary table.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct LookupTable {
    kind: Option<LookupKind>,
    values: BTreeMap<String, f64>,
}

impl LookupTable {
    /// Builds the lookup from the first column (keys) and the resolved value column.
    /// Rows with an empty key or an unparsable value are skipped; a repeated key keeps the last value.
    pub fn build(table: &Table, kind: LookupKind) -> Self {
        let mut values = BTreeMap::new();
        if let Some(value_col) = resolve_value_column(table, kind) {
            for row in 0..table.row_count() {
                let key = normalize_name(&table.cell(row, 0).to_key_string());
                if key.is_empty() {
                    continue;
                }
                if let Some(value) = table.cell(row, value_col).to_leading_number() {
                    values.insert(key, value);
                }
            }
        }
        Self { kind: Some(kind), values }
    }

    /// Builds the lookup and reports its size to diagnostics.
    pub fn build_with(table: &Table, kind: LookupKind, diagnostics: &dyn Diagnostics) -> Self {
        let lookup = Self::build(table, kind);
        let value_column = resolve_value_column(table, kind).map(|col| table.headers()[col].as_str());
        diagnostics.lookup_built(kind, value_column, lookup.len());
        lookup
    }

    pub fn kind(&self) -> Option<LookupKind> {
        self.kind
    }

    /// Looks up an already normalized name.
    pub fn get(&self, normalized: &str) -> Option<f64> {
        self.values.get(normalized).copied()
    }

    /// Iterates keys and values in key order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> + '_ {
        self.values.iter().map(|(key, value)| (key.as_str(), *value))
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl FromIterator<(String, f64)> for LookupTable {
    fn from_iter<T: IntoIterator<Item = (String, f64)>>(iter: T) -> Self {
        Self {
            kind: None,
            values: iter.into_iter().map(|(key, value)| (normalize_name(&key), value)).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::spreadsheet::cell::CellValue;

    fn table(headers: &[&str], rows: Vec<Vec<CellValue>>) -> Table {
        Table::new(headers.iter().map(|header| header.to_string()).collect(), rows).unwrap()
    }

    #[test]
    fn rate_column_prefers_rate_header() {
        let rates = table(&["Employee", "Dept", "Hourly Rate"], vec![]);
        assert_eq!(resolve_value_column(&rates, LookupKind::Rate), Some(2));

        let rates = table(&["Employee", "Pay"], vec![]);
        assert_eq!(resolve_value_column(&rates, LookupKind::Rate), Some(1));

        let rates = table(&["Employee"], vec![]);
        assert_eq!(resolve_value_column(&rates, LookupKind::Rate), None);
    }

    #[test]
    fn bonus_and_holiday_prefer_second_column() {
        let bonus = table(&["Employee", "Amount", "Bonus"], vec![]);
        assert_eq!(resolve_value_column(&bonus, LookupKind::Bonus), Some(1));

        let bonus = table(&["Bonus"], vec![]);
        assert_eq!(resolve_value_column(&bonus, LookupKind::Bonus), Some(0));

        let holiday = table(&["Holiday Hours"], vec![]);
        assert_eq!(resolve_value_column(&holiday, LookupKind::Holiday), Some(0));

        let holiday = table(&["Employee"], vec![]);
        assert_eq!(resolve_value_column(&holiday, LookupKind::Holiday), None);
    }

    #[test]
    fn build_normalizes_keys_and_skips_bad_rows() {
        let rates = table(&["Name", "Rate"], vec![
            vec!["  Alice Smith ".into(), 20.into()],
            vec!["BOB".into(), "18.50/hr".into()],
            vec!["".into(), 99.into()],
            vec!["Carol".into(), "tbc".into()],
            vec![CellValue::Empty, 10.into()],
        ]);
        let lookup = LookupTable::build(&rates, LookupKind::Rate);
        assert_eq!(lookup.len(), 2);
        assert_eq!(lookup.get("alice smith"), Some(20.0));
        assert_eq!(lookup.get("bob"), Some(18.5));
        assert_eq!(lookup.get("carol"), None);
        assert_eq!(lookup.kind(), Some(LookupKind::Rate));
    }

    #[test]
    fn build_keeps_last_duplicate() {
        let rates = table(&["Name", "Rate"], vec![
            vec!["Alice".into(), 20.into()],
            vec!["alice".into(), 22.into()],
        ]);
        assert_eq!(LookupTable::build(&rates, LookupKind::Rate).get("alice"), Some(22.0));
    }

    #[test]
    fn build_without_value_column_is_empty() {
        let rates = table(&["Name"], vec![vec!["Alice".into()]]);
        assert!(LookupTable::build(&rates, LookupKind::Rate).is_empty());
    }

    #[test]
    fn from_iter_normalizes() {
        let lookup: LookupTable = vec![(" Dan ".to_owned(), 3.0)].into_iter().collect();
        assert_eq!(lookup.iter().collect::<Vec<_>>(), [("dan", 3.0)]);
    }
}
