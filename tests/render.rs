#[cfg(test)]
mod tests {
    use chrono::Local;
    use tabel::db::employees::Employee;
    use tabel::libs::aggregate::aggregate;
    use tabel::libs::entry::{ShiftType, TimeEntry};
    use tabel::libs::period::{Period, DEFAULT_MAX_PERIOD_DAYS};
    use tabel::libs::render::{build_sections, render};

    fn employee(id: i64, name: &str) -> Employee {
        Employee {
            id,
            full_name: name.to_string(),
            contact_id: None,
            active: true,
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
    fn test_rows_carry_values_and_placeholders() {
        let employees = vec![employee(1, "Ivanov")];
        let entries = vec![
            entry(1, "01.01.2024", 8.0, ShiftType::Day),
            entry(1, "01.01.2024", 9.0, ShiftType::Night),
            entry(1, "02.01.2024", 6.0, ShiftType::Day),
        ];

        let agg = aggregate(&entries, &employees, Some(period("01.01.2024", "03.01.2024")), None);
        let sections = build_sections(&agg);
        assert_eq!(sections.len(), 1);

        let section = &sections[0];
        assert_eq!(section.name, "Ivanov");
        assert_eq!(section.rows.len(), 3);

        // Full day: both shifts present
        assert_eq!(section.rows[0].day, Some(8.0));
        assert_eq!(section.rows[0].night, Some(9.0));
        assert_eq!(section.rows[0].total, Some(17.0));

        // Day shift only: the night cell renders as a placeholder
        assert_eq!(section.rows[1].day, Some(6.0));
        assert_eq!(section.rows[1].night, None);
        assert_eq!(section.rows[1].total, Some(6.0));

        // No data: every hour cell renders as a placeholder
        assert_eq!(section.rows[2].day, None);
        assert_eq!(section.rows[2].night, None);
        assert_eq!(section.rows[2].total, None);
    }

    #[test]
    fn test_totals_sum_only_days_with_data() {
        let employees = vec![employee(1, "Ivanov")];
        let entries = vec![
            entry(1, "01.01.2024", 8.0, ShiftType::Day),
            entry(1, "02.01.2024", 4.0, ShiftType::Night),
        ];

        let agg = aggregate(&entries, &employees, Some(period("01.01.2024", "05.01.2024")), None);
        let section = &build_sections(&agg)[0];

        assert_eq!(section.total_day, 8.0);
        assert_eq!(section.total_night, 4.0);
        assert_eq!(section.grand_total(), 12.0);
        assert_eq!(section.days_with_data, 2);
        assert!(section.has_data());
    }

    #[test]
    fn test_over_limit_note_is_strict() {
        let employees = vec![employee(1, "Ivanov")];
        let entries = vec![
            entry(1, "01.01.2024", 20.0, ShiftType::Day),
            entry(1, "01.01.2024", 5.0, ShiftType::Night),
            entry(1, "02.01.2024", 12.0, ShiftType::Day),
            entry(1, "02.01.2024", 12.0, ShiftType::Night),
        ];

        let agg = aggregate(&entries, &employees, Some(period("01.01.2024", "02.01.2024")), None);
        let section = &build_sections(&agg)[0];

        assert!(section.rows[0].over_limit); // 25 hours
        assert!(!section.rows[1].over_limit); // exactly 24 hours
    }

    #[test]
    fn test_totals_render_placeholders_for_employee_without_data() {
        // A stored zero-hour entry keeps the employee in the aggregate but
        // leaves every day without data
        let employees = vec![employee(1, "Ivanov")];
        let entries = vec![entry(1, "01.01.2024", 0.0, ShiftType::Day)];

        let p = period("01.01.2024", "03.01.2024");
        let agg = aggregate(&entries, &employees, Some(p), None);
        assert!(!agg.is_empty());

        let section = &build_sections(&agg)[0];
        assert_eq!(section.days_with_data, 0);
        assert!(!section.has_data());

        // Every date row and the totals row carry the dash marker, never 0
        assert!(section.rows.iter().all(|r| r.day.is_none() && r.night.is_none() && r.total.is_none()));
        assert_eq!(section.total_day, 0.0);
        assert_eq!(section.total_night, 0.0);

        // The dash-totals branch of the writer must also succeed
        let buffer = render(&agg, Some(p)).unwrap();
        assert_eq!(&buffer[..2], b"PK");
    }

    #[test]
    fn test_render_produces_xlsx_bytes() {
        let employees = vec![employee(1, "Ivanov")];
        let entries = vec![entry(1, "01.01.2024", 8.0, ShiftType::Day)];

        let p = period("01.01.2024", "03.01.2024");
        let agg = aggregate(&entries, &employees, Some(p), None);
        let buffer = render(&agg, Some(p)).unwrap();

        // xlsx is a zip container
        assert!(buffer.len() > 4);
        assert_eq!(&buffer[..2], b"PK");
    }

    #[test]
    fn test_render_empty_aggregate_still_succeeds() {
        let p = period("01.01.2024", "03.01.2024");
        let agg = aggregate(&[], &[], Some(p), None);
        assert!(agg.is_empty());

        let buffer = render(&agg, Some(p)).unwrap();
        assert_eq!(&buffer[..2], b"PK");
    }
}
