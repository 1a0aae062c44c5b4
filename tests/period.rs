#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use tabel::libs::period::{parse_date, Period, PeriodError, DEFAULT_MAX_PERIOD_DAYS};

    #[test]
    fn test_parse_valid_period() {
        let period = Period::parse("01.01.2024", "31.01.2024", DEFAULT_MAX_PERIOD_DAYS).unwrap();
        assert_eq!(period.start, NaiveDate::from_ymd_opt(2024, 1, 1).unwrap());
        assert_eq!(period.end, NaiveDate::from_ymd_opt(2024, 1, 31).unwrap());
        assert_eq!(period.days(), 31);
    }

    #[test]
    fn test_single_day_period_counts_one() {
        let period = Period::parse("15.06.2024", "15.06.2024", DEFAULT_MAX_PERIOD_DAYS).unwrap();
        assert_eq!(period.days(), 1);
    }

    #[test]
    fn test_invalid_format_rejected() {
        for input in ["2024-01-01", "1.1.24", "32.01.2024", "garbage", ""] {
            let err = Period::parse(input, "31.01.2024", DEFAULT_MAX_PERIOD_DAYS).unwrap_err();
            assert!(matches!(err, PeriodError::InvalidFormat));
        }
    }

    #[test]
    fn test_start_after_end_rejected() {
        let err = Period::parse("05.01.2024", "01.01.2024", DEFAULT_MAX_PERIOD_DAYS).unwrap_err();
        assert!(matches!(err, PeriodError::StartAfterEnd));
    }

    #[test]
    fn test_too_long_period_rejected() {
        // 01.01 to 19.07 is 201 inclusive days
        let err = Period::parse("01.01.2024", "19.07.2024", DEFAULT_MAX_PERIOD_DAYS).unwrap_err();
        assert!(matches!(err, PeriodError::TooLong(180)));
    }

    #[test]
    fn test_max_length_boundary_accepted() {
        // Exactly 180 inclusive days
        let period = Period::parse("01.01.2024", "28.06.2024", DEFAULT_MAX_PERIOD_DAYS).unwrap();
        assert_eq!(period.days(), 180);
    }

    #[test]
    fn test_custom_limit() {
        // The limit bounds the start-to-end difference, not the day count.
        assert!(Period::parse("01.01.2024", "11.01.2024", 10).is_ok());
        let err = Period::parse("01.01.2024", "12.01.2024", 10).unwrap_err();
        assert!(matches!(err, PeriodError::TooLong(10)));
    }

    #[test]
    fn test_contains_is_inclusive() {
        let period = Period::parse("10.03.2024", "12.03.2024", DEFAULT_MAX_PERIOD_DAYS).unwrap();
        assert!(period.contains(NaiveDate::from_ymd_opt(2024, 3, 10).unwrap()));
        assert!(period.contains(NaiveDate::from_ymd_opt(2024, 3, 12).unwrap()));
        assert!(!period.contains(NaiveDate::from_ymd_opt(2024, 3, 9).unwrap()));
        assert!(!period.contains(NaiveDate::from_ymd_opt(2024, 3, 13).unwrap()));
    }

    #[test]
    fn test_dates_enumerates_each_day_once() {
        let period = Period::parse("28.02.2024", "02.03.2024", DEFAULT_MAX_PERIOD_DAYS).unwrap();
        let dates: Vec<_> = period.dates().collect();
        assert_eq!(dates.len(), 4); // leap year: 28.02, 29.02, 01.03, 02.03
        assert_eq!(dates[0], period.start);
        assert_eq!(dates[3], period.end);
        assert_eq!(dates[1], NaiveDate::from_ymd_opt(2024, 2, 29).unwrap());
    }

    #[test]
    fn test_parse_date_helper() {
        assert_eq!(parse_date("15.06.2024"), NaiveDate::from_ymd_opt(2024, 6, 15));
        assert!(parse_date("06/15/2024").is_none());
        assert!(parse_date("").is_none());
    }
}
