use chrono::{Datelike, Duration, NaiveDate, TimeZone, Utc};
use outage_forecast::records::{OutageRecord, Severity};
use outage_forecast::series::TimeSeriesBuilder;
use pretty_assertions::assert_eq;

fn record_on(date: NaiveDate) -> OutageRecord {
    let start = Utc
        .with_ymd_and_hms(date.year(), date.month(), date.day(), 9, 0, 0)
        .unwrap();
    OutageRecord::new(
        start,
        start + Duration::hours(2),
        vec!["UAT".to_string()],
        Severity::Medium,
        None,
    )
    .unwrap()
}

#[test]
fn empty_input_yields_full_zero_window() {
    let builder = TimeSeriesBuilder::new(90).unwrap();
    let today = NaiveDate::from_ymd_opt(2024, 6, 1).unwrap();

    let series = builder.build(&[], today);

    assert_eq!(series.len(), 90);
    assert!(series.iter().all(|day| day.count == 0));
    assert_eq!(series.last().unwrap().date, today);
    assert_eq!(series[0].date, today - Duration::days(89));
}

#[test]
fn counts_group_by_utc_start_day() {
    let today = NaiveDate::from_ymd_opt(2024, 6, 1).unwrap();
    let busy_day = today - Duration::days(10);

    let records = vec![record_on(busy_day), record_on(busy_day), record_on(today)];
    let builder = TimeSeriesBuilder::new(30).unwrap();
    let series = builder.build(&records, today);

    assert_eq!(series.len(), 30);
    let busy = series.iter().find(|d| d.date == busy_day).unwrap();
    assert_eq!(busy.count, 2);
    assert_eq!(series.last().unwrap().count, 1);
}

#[test]
fn records_outside_window_are_silently_excluded() {
    let today = NaiveDate::from_ymd_opt(2024, 6, 1).unwrap();
    let ancient = today - Duration::days(365);

    let builder = TimeSeriesBuilder::new(90).unwrap();
    let series = builder.build(&[record_on(ancient)], today);

    assert_eq!(series.len(), 90);
    assert!(series.iter().all(|day| day.count == 0));
}

#[test]
fn days_are_consecutive() {
    let builder = TimeSeriesBuilder::default();
    let today = NaiveDate::from_ymd_opt(2024, 6, 1).unwrap();

    let series = builder.build(&[], today);
    for pair in series.windows(2) {
        assert_eq!(pair[1].date - pair[0].date, Duration::days(1));
    }
}

#[test]
fn zero_window_is_rejected() {
    assert!(TimeSeriesBuilder::new(0).is_err());
}
