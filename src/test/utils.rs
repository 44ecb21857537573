#[cfg(test)]
mod tests {
    use rust_decimal_macros::dec;

    use crate::app::utils::{
        non_empty, parse_datetime, parse_decimal, parse_flag, parse_optional_datetime,
        parse_optional_decimal, parse_optional_months,
    };

    #[test]
    fn parse_datetime_works() {
        let date = parse_datetime("2024-02-29").unwrap();
        assert_eq!(date.naive_utc().format("%Y-%m-%d").to_string(), "2024-02-29");
        assert!(parse_datetime("29/02/2024").is_err());
    }

    #[test]
    fn parse_decimal_works() {
        assert_eq!(parse_decimal(" 1250.50 ", "cost").unwrap(), dec!(1250.50));

        let err = parse_decimal("abc", "cost").unwrap_err();
        assert!(err.to_string().contains("cost"));
    }

    #[test]
    fn empty_fields_are_absent() {
        assert_eq!(non_empty(Some("  ")), None);
        assert_eq!(non_empty(None), None);
        assert_eq!(non_empty(Some(" x ")), Some("x"));

        assert_eq!(parse_optional_decimal(Some(""), "salvage").unwrap(), None);
        assert_eq!(parse_optional_months(None, "life").unwrap(), None);
        assert_eq!(parse_optional_months(Some("36"), "life").unwrap(), Some(36));
        assert!(parse_optional_months(Some("3.5"), "life").is_err());
        assert!(parse_optional_datetime(Some("")).unwrap().is_none());
    }

    #[test]
    fn parse_flag_works() {
        assert!(parse_flag(Some("TRUE"), "flag").unwrap());
        assert!(parse_flag(Some("yes"), "flag").unwrap());
        assert!(parse_flag(Some("1"), "flag").unwrap());
        assert!(!parse_flag(Some("No"), "flag").unwrap());
        assert!(!parse_flag(Some(""), "flag").unwrap());
        assert!(!parse_flag(None, "flag").unwrap());
        assert!(parse_flag(Some("maybe"), "flag").is_err());
    }
}
