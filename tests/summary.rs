#[cfg(test)]
mod tests {
    use chrono::Duration;
    use sheetclock::libs::summary::{Summary, UserTotal};
    use sheetclock::libs::timesheet::TimesheetError;
    use sheetclock::libs::view::View;

    fn row(cells: &[&str]) -> Vec<String> {
        cells.iter().map(|c| c.to_string()).collect()
    }

    fn sample_grid() -> Vec<Vec<String>> {
        vec![
            row(&["Tasks", "Clock in/out", "Alice", "Bob"]),
            row(&["Open shop", "In", "09:00", "22:30"]),
            row(&["Close shop", "Out", "17:00", "02:15"]),
        ]
    }

    #[test]
    fn test_alice_and_bob_scenario() {
        let summary = Summary::from_grid(&sample_grid()).unwrap();

        assert_eq!(summary.names_row(), vec!["Alice", "Bob"]);
        assert_eq!(summary.totals_row(), vec!["8:0", "3:45"]);
        assert_eq!(summary.totals[0].duration, Duration::hours(8));
        assert_eq!(summary.totals[1].duration, Duration::hours(3) + Duration::minutes(45));
    }

    #[test]
    fn test_write_back_rows() {
        let summary = Summary::from_grid(&sample_grid()).unwrap();

        assert_eq!(
            summary.write_back_rows(),
            vec![row(&["Alice", "8:0:00.000"]), row(&["Bob", "3:45:00.000"])]
        );
    }

    #[test]
    fn test_empty_cells_mid_series_are_skipped() {
        let grid = vec![
            row(&["Alice"]),
            row(&["09:00"]),
            row(&[""]),
            row(&[]),
            row(&["12:00"]),
            row(&["13:00"]),
            row(&[""]),
            row(&["14:30"]),
        ];
        let summary = Summary::from_grid(&grid).unwrap();

        // 09:00-12:00 and 13:00-14:30, not 09:00-"" etc.
        assert_eq!(summary.totals_row(), vec!["4:30"]);
        assert_eq!(summary.totals[0].unpaired, 0);
    }

    #[test]
    fn test_user_without_timestamps_totals_zero() {
        let grid = vec![row(&["Tasks", "Alice", "Bob"]), row(&["Open", "09:00"]), row(&["Close", "10:00"])];
        let summary = Summary::from_grid(&grid).unwrap();

        assert_eq!(summary.totals_row(), vec!["1:0", "0:0"]);
    }

    #[test]
    fn test_unpaired_users_are_reported() {
        let grid = vec![row(&["Alice", "Bob"]), row(&["09:00", "09:00"]), row(&["17:00", ""]), row(&["18:00", ""])];
        let summary = Summary::from_grid(&grid).unwrap();

        let unpaired: Vec<&UserTotal> = summary.unpaired().collect();
        assert_eq!(unpaired.len(), 2);
        assert_eq!(unpaired[0].name, "Alice");
        assert_eq!(unpaired[1].name, "Bob");
        assert_eq!(summary.totals_row(), vec!["8:0", "0:0"]);
    }

    #[test]
    fn test_empty_grid_is_empty_summary() {
        let summary = Summary::from_grid(&[]).unwrap();
        assert!(summary.is_empty());
        assert_eq!(summary.len(), 0);
        assert!(summary.write_back_rows().is_empty());
    }

    #[test]
    fn test_headers_only_grid() {
        let summary = Summary::from_grid(&[row(&["Tasks", "Alice"])]).unwrap();
        assert_eq!(summary.totals_row(), vec!["0:0"]);
    }

    #[test]
    fn test_malformed_timestamp_fails_summary() {
        let mut grid = sample_grid();
        grid.push(row(&["", "", "late"]));

        let error = Summary::from_grid(&grid).unwrap_err();
        assert!(matches!(error, TimesheetError::InvalidTimestamp { row: 4, .. }));
    }

    #[test]
    fn test_duplicate_headers_collapse_into_one_user() {
        let grid = vec![
            row(&["Tasks", "Alice", "Bob", "Alice"]),
            row(&["Open", "09:00", "10:00", "08:00"]),
            row(&["Close", "17:00", "11:00", "09:00"]),
        ];
        let summary = Summary::from_grid(&grid).unwrap();

        // First Alice column keeps its place, last Alice column provides the total
        assert_eq!(summary.names_row(), vec!["Alice", "Bob"]);
        assert_eq!(summary.totals_row(), vec!["1:0", "1:0"]);
        assert_eq!(
            summary.write_back_rows(),
            vec![row(&["Alice", "1:0:00.000"]), row(&["Bob", "1:0:00.000"])]
        );
    }

    #[test]
    fn test_totals_table_has_names_and_totals() {
        let summary = Summary::from_grid(&sample_grid()).unwrap();
        let table = View::totals_table(&summary);

        assert_eq!(table.len(), 1);
        let rendered = table.to_string();
        assert!(rendered.contains("Alice"));
        assert!(rendered.contains("3:45"));
    }
}
