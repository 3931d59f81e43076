use crate::{ExtractError, ExtractResult};
use chrono::NaiveDate;

/// Reformats an English "Month Day, Year" literal to `MM/DD/YYYY`
///
/// The result is always 10 characters with zero-padded month and day.
///
/// # Example
///
/// ```
/// use aps_harvest::extract::reformat_long_date;
///
/// assert_eq!(reformat_long_date("October 12, 2019").unwrap(), "10/12/2019");
/// ```
pub fn reformat_long_date(text: &str) -> ExtractResult<String> {
    let date = NaiveDate::parse_from_str(text, "%B %d, %Y").map_err(|_| {
        ExtractError::UnparseableDate {
            text: text.to_string(),
        }
    })?;
    Ok(date.format("%m/%d/%Y").to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reformat_basic() {
        assert_eq!(reformat_long_date("October 12, 2019").unwrap(), "10/12/2019");
    }

    #[test]
    fn test_reformat_zero_pads_month_and_day() {
        assert_eq!(reformat_long_date("March 5, 2007").unwrap(), "03/05/2007");
        assert_eq!(reformat_long_date("June 1, 2010").unwrap(), "06/01/2010");
    }

    #[test]
    fn test_reformat_is_ten_characters() {
        for text in ["January 1, 2005", "September 30, 2021", "July 4, 2014"] {
            let formatted = reformat_long_date(text).unwrap();
            assert_eq!(formatted.len(), 10, "{:?}", formatted);
            assert_eq!(&formatted[2..3], "/");
            assert_eq!(&formatted[5..6], "/");
        }
    }

    #[test]
    fn test_reformat_rejects_unknown_month() {
        assert!(matches!(
            reformat_long_date("Smarch 13, 2019"),
            Err(ExtractError::UnparseableDate { .. })
        ));
    }

    #[test]
    fn test_reformat_rejects_garbage() {
        assert!(reformat_long_date("Not Participating").is_err());
        assert!(reformat_long_date("10/12/2019").is_err());
        assert!(reformat_long_date("").is_err());
    }
}
