#[cfg(test)]
mod tests {
    use chrono::{Duration, NaiveTime};
    use sheetclock::libs::span::{span_duration, SpanCalculator, Spans};

    fn hm(hour: u32, min: u32) -> NaiveTime {
        NaiveTime::from_hms_opt(hour, min, 0).unwrap()
    }

    #[test]
    fn test_span_same_day() {
        assert_eq!(span_duration(hm(9, 0), hm(17, 0)), Duration::hours(8));
        assert_eq!(span_duration(hm(9, 15), hm(9, 45)), Duration::minutes(30));
    }

    #[test]
    fn test_span_equal_times_is_zero() {
        assert_eq!(span_duration(hm(12, 0), hm(12, 0)), Duration::zero());
    }

    #[test]
    fn test_span_rolls_over_midnight() {
        assert_eq!(span_duration(hm(23, 0), hm(1, 0)), Duration::hours(2));
        assert_eq!(span_duration(hm(22, 30), hm(2, 15)), Duration::hours(3) + Duration::minutes(45));
        assert_eq!(span_duration(hm(0, 1), hm(0, 0)), Duration::hours(23) + Duration::minutes(59));
    }

    #[test]
    fn test_span_is_never_negative() {
        for start in (0..24).map(|h| hm(h, 30)) {
            for end in (0..24).map(|h| hm(h, 0)) {
                let span = span_duration(start, end);
                assert!(span >= Duration::zero());
                assert!(span < Duration::days(1));
            }
        }
    }

    #[test]
    fn test_spans_pair_consecutive_entries() {
        let series = vec![hm(9, 0), hm(12, 0), hm(13, 0), hm(17, 30)];
        let spans: Vec<Duration> = series.spans().collect();

        assert_eq!(spans, vec![Duration::hours(3), Duration::hours(4) + Duration::minutes(30)]);
    }

    #[test]
    fn test_odd_series_drops_last_entry() {
        for n in 0..5 {
            let series: Vec<NaiveTime> = (0..(2 * n + 1)).map(|i| hm(i as u32, 0)).collect();
            assert_eq!(series.spans().count(), n);
            assert_eq!(series.unpaired(), 1);
        }

        let series = vec![hm(9, 0), hm(17, 0), hm(18, 0)];
        assert_eq!(series.total_duration(), Duration::hours(8));
    }

    #[test]
    fn test_even_series_has_no_unpaired() {
        let series = vec![hm(9, 0), hm(17, 0)];
        assert_eq!(series.unpaired(), 0);
    }

    #[test]
    fn test_empty_series_totals_zero() {
        let series: Vec<NaiveTime> = vec![];
        assert_eq!(series.spans().count(), 0);
        assert_eq!(series.total_duration(), Duration::zero());
        assert_eq!(series.unpaired(), 0);
    }

    #[test]
    fn test_total_sums_mixed_spans() {
        let series = vec![hm(22, 0), hm(2, 0), hm(9, 0), hm(10, 30)];
        assert_eq!(series.total_duration(), Duration::hours(5) + Duration::minutes(30));
    }

    #[test]
    fn test_spans_are_restartable() {
        let series = vec![hm(8, 0), hm(16, 0)];
        let spans = Spans::new(&series);

        assert_eq!(spans.len(), 1);
        assert_eq!(spans.clone().sum::<Duration>(), Duration::hours(8));
        assert_eq!(spans.sum::<Duration>(), Duration::hours(8));
        assert_eq!(series.spans().next(), Some(Duration::hours(8)));
    }
}
