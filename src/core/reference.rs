use crate::domain::model::ReferenceCountrySet;
use crate::utils::error::Result;
use csv::ReaderBuilder;

/// Parse the reference CSV into a country set.
///
/// Rows are addressed by position, not header names: row 0 is always
/// skipped as the header and is never validated. Every later row with at
/// least two columns contributes its second column; shorter rows are
/// skipped silently. A header-only file yields an empty set.
pub fn parse_reference_set(data: &[u8]) -> Result<ReferenceCountrySet> {
    let mut reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(data);

    let mut set = ReferenceCountrySet::default();
    for (index, record) in reader.records().enumerate() {
        let record = record?;
        if index == 0 {
            continue;
        }
        if let Some(code) = record.get(1) {
            set.insert(code.to_string());
        }
    }

    Ok(set)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_second_column_of_each_data_row() {
        let data = b"Name,Code\nGermany,DE\nFrance,FR\n";
        let set = parse_reference_set(data).unwrap();

        assert_eq!(set.len(), 2);
        assert!(set.contains("DE"));
        assert!(set.contains("FR"));
        assert!(!set.contains("Germany"));
    }

    #[test]
    fn header_row_is_skipped_unconditionally() {
        // The header is positional; its cells never end up in the set even
        // when they look like codes.
        let data = b"XX,YY\nGermany,DE\n";
        let set = parse_reference_set(data).unwrap();

        assert!(!set.contains("YY"));
        assert!(set.contains("DE"));
    }

    #[test]
    fn header_only_file_yields_empty_set() {
        let set = parse_reference_set(b"Name,Code\n").unwrap();
        assert!(set.is_empty());
    }

    #[test]
    fn short_rows_are_skipped_silently() {
        let data = b"Name,Code\nGermany\nFrance,FR\n\n";
        let set = parse_reference_set(data).unwrap();

        assert_eq!(set.len(), 1);
        assert!(set.contains("FR"));
    }

    #[test]
    fn extra_columns_are_ignored() {
        let data = b"Name,Code,Region\nGermany,DE,EU\n";
        let set = parse_reference_set(data).unwrap();

        assert_eq!(set.len(), 1);
        assert!(set.contains("DE"));
    }
}
