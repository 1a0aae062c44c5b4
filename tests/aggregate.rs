#[cfg(test)]
mod tests {
    use chrono::{Local, NaiveDate};
    use tabel::db::employees::Employee;
    use tabel::libs::aggregate::{aggregate, DayHours, MAX_DAILY_HOURS};
    use tabel::libs::entry::{ShiftType, TimeEntry};
    use tabel::libs::period::{Period, DEFAULT_MAX_PERIOD_DAYS};

    fn employee(id: i64, name: &str, active: bool) -> Employee {
        Employee {
            id,
            full_name: name.to_string(),
            contact_id: None,
            active,
        }
    }

    fn entry(employee_id: i64, date: &str, hours: f64, shift: ShiftType) -> TimeEntry {
        TimeEntry {
            id: 0,
            employee_id,
            date: date.to_string(),
            hours,
            shift,
            recorded_at: Local::now().naive_local(),
        }
    }

    fn period(start: &str, end: &str) -> Period {
        Period::parse(start, end, DEFAULT_MAX_PERIOD_DAYS).unwrap()
    }

    #[test]
    fn test_day_and_night_buckets_per_date() {
        let employees = vec![employee(1, "Ivanov", true)];
        let entries = vec![
            entry(1, "01.01.2024", 8.0, ShiftType::Day),
            entry(1, "01.01.2024", 9.0, ShiftType::Night),
        ];

        let result = aggregate(&entries, &employees, Some(period("01.01.2024", "02.01.2024")), None);
        let ivanov = result.find("Ivanov").unwrap();

        let jan1 = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
        let day1 = &ivanov.days[&jan1];
        assert_eq!(day1.day, 8.0);
        assert_eq!(day1.night, 9.0);
        assert_eq!(day1.total(), 17.0);
        assert!(day1.has_data());

        // Range completion: the second day exists with zero hours
        let jan2 = NaiveDate::from_ymd_opt(2024, 1, 2).unwrap();
        let day2 = &ivanov.days[&jan2];
        assert!(!day2.has_data());
        assert_eq!(ivanov.days.len(), 2);
        assert_eq!(ivanov.days_with_data(), 1);
    }

    #[test]
    fn test_same_key_entries_sum() {
        let employees = vec![employee(1, "Ivanov", true)];
        let entries = vec![
            entry(1, "01.01.2024", 4.0, ShiftType::Day),
            entry(1, "01.01.2024", 3.5, ShiftType::Day),
        ];

        let result = aggregate(&entries, &employees, None, None);
        let jan1 = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
        assert_eq!(result.find("Ivanov").unwrap().days[&jan1].day, 7.5);
    }

    #[test]
    fn test_inactive_and_unknown_employees_dropped() {
        let employees = vec![employee(1, "Ivanov", true), employee(2, "Petrov", false)];
        let entries = vec![
            entry(1, "01.01.2024", 8.0, ShiftType::Day),
            entry(2, "01.01.2024", 8.0, ShiftType::Day),
            entry(99, "01.01.2024", 8.0, ShiftType::Day), // no such employee
        ];

        let result = aggregate(&entries, &employees, None, None);
        assert_eq!(result.employees.len(), 1);
        assert!(result.find("Ivanov").is_some());
        assert!(result.find("Petrov").is_none());
    }

    #[test]
    fn test_employee_filter() {
        let employees = vec![employee(1, "Ivanov", true), employee(2, "Petrov", true)];
        let entries = vec![
            entry(1, "01.01.2024", 8.0, ShiftType::Day),
            entry(2, "01.01.2024", 6.0, ShiftType::Day),
        ];

        let result = aggregate(&entries, &employees, None, Some(2));
        assert_eq!(result.employees.len(), 1);
        assert_eq!(result.employees[0].name, "Petrov");
    }

    #[test]
    fn test_malformed_dates_dropped_silently() {
        let employees = vec![employee(1, "Ivanov", true)];
        let entries = vec![
            entry(1, "not-a-date", 8.0, ShiftType::Day),
            entry(1, "02.01.2024", 5.0, ShiftType::Day),
        ];

        let result = aggregate(&entries, &employees, Some(period("01.01.2024", "03.01.2024")), None);
        let ivanov = result.find("Ivanov").unwrap();
        assert_eq!(ivanov.days_with_data(), 1);
    }

    #[test]
    fn test_entries_outside_period_dropped() {
        let employees = vec![employee(1, "Ivanov", true)];
        let entries = vec![
            entry(1, "31.12.2023", 8.0, ShiftType::Day),
            entry(1, "01.01.2024", 6.0, ShiftType::Day),
            entry(1, "04.01.2024", 7.0, ShiftType::Day),
        ];

        let result = aggregate(&entries, &employees, Some(period("01.01.2024", "03.01.2024")), None);
        let ivanov = result.find("Ivanov").unwrap();
        assert_eq!(ivanov.days.len(), 3); // range-completed, not data-driven
        assert_eq!(ivanov.days_with_data(), 1);
    }

    #[test]
    fn test_without_period_only_data_dates_appear() {
        let employees = vec![employee(1, "Ivanov", true)];
        let entries = vec![
            entry(1, "01.01.2024", 8.0, ShiftType::Day),
            entry(1, "15.01.2024", 4.0, ShiftType::Night),
        ];

        let result = aggregate(&entries, &employees, None, None);
        let ivanov = result.find("Ivanov").unwrap();
        assert_eq!(ivanov.days.len(), 2);
        assert!(ivanov.days.values().all(|d| d.has_data()));
    }

    #[test]
    fn test_empty_result_when_nothing_matches() {
        let employees = vec![employee(1, "Ivanov", true)];
        let result = aggregate(&[], &employees, Some(period("01.01.2024", "05.01.2024")), None);
        assert!(result.is_empty());
    }

    #[test]
    fn test_aggregation_is_deterministic() {
        let employees = vec![employee(1, "Ivanov", true), employee(2, "Petrov", true)];
        let entries = vec![
            entry(2, "02.01.2024", 6.0, ShiftType::Night),
            entry(1, "01.01.2024", 8.0, ShiftType::Day),
        ];

        let a = aggregate(&entries, &employees, Some(period("01.01.2024", "02.01.2024")), None);
        let b = aggregate(&entries, &employees, Some(period("01.01.2024", "02.01.2024")), None);

        // First-encounter order: Petrov appears first in the entries
        assert_eq!(a.employees[0].name, "Petrov");
        assert_eq!(a.employees[1].name, "Ivanov");
        assert_eq!(a.employees.len(), b.employees.len());
        for (x, y) in a.employees.iter().zip(b.employees.iter()) {
            assert_eq!(x.name, y.name);
            assert_eq!(x.days, y.days);
        }
    }

    #[test]
    fn test_daily_limit_is_strict() {
        let over = DayHours { day: 20.0, night: 5.0 };
        assert!(over.exceeds_limit());

        let exactly = DayHours { day: 12.0, night: 12.0 };
        assert_eq!(exactly.total(), MAX_DAILY_HOURS);
        assert!(!exactly.exceeds_limit());

        let empty = DayHours::default();
        assert!(!empty.exceeds_limit());
    }
}
