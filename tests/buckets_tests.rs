mod common;
use common::date;
use rbabylog::core::calculator::buckets::TimeAggregator;
use rbabylog::models::sleep::NightSleep;

#[test]
fn test_reference_date_is_month_minus_one_week_zero() {
    let agg = TimeAggregator::default();
    let birthday = date(2021, 5, 15);

    assert_eq!(agg.reference(), birthday);
    assert_eq!(agg.month(birthday), -1);
    assert_eq!(agg.week(birthday), 0);
}

#[test]
fn test_week_boundaries() {
    let agg = TimeAggregator::default();

    assert_eq!(agg.week(date(2021, 5, 21)), 0);
    assert_eq!(agg.week(date(2021, 5, 22)), 1);
    assert_eq!(agg.week(date(2021, 5, 14)), -1);
    assert_eq!(agg.week(date(2021, 5, 8)), -1);
    assert_eq!(agg.week(date(2021, 5, 7)), -2);
}

#[test]
fn test_month_formula_and_cap() {
    let agg = TimeAggregator::default();

    assert_eq!(agg.month(date(2021, 5, 16)), 0);
    assert_eq!(agg.month(date(2021, 6, 15)), 0);
    assert_eq!(agg.month(date(2021, 6, 16)), 1);
    assert_eq!(agg.month(date(2021, 10, 20)), 5);
    assert_eq!(agg.month(date(2021, 12, 31)), 5);
    assert_eq!(agg.month(date(2021, 5, 1)), -1);
}

#[test]
fn test_week_non_decreasing() {
    let agg = TimeAggregator::default();
    let mut day = date(2021, 4, 1);
    let mut last = agg.week(day);

    while day < date(2021, 12, 31) {
        day = day.succ_opt().expect("next day");
        let w = agg.week(day);
        assert!(w >= last);
        last = w;
    }
}

#[test]
fn test_injected_reference_and_cap() {
    let agg = TimeAggregator::new(date(2022, 1, 10)).with_month_cap(2);

    assert_eq!(agg.week(date(2022, 1, 17)), 1);
    assert_eq!(agg.month(date(2022, 2, 11)), 1);
    assert_eq!(agg.month(date(2022, 9, 11)), 2);
}

#[test]
fn test_label_uses_night_date() {
    let agg = TimeAggregator::default();
    let rows = agg.aggregate(vec![NightSleep {
        night_date: date(2021, 5, 29),
        sleep_hours: 9.5,
    }]);

    assert_eq!(rows[0].week, 2);
    assert_eq!(rows[0].month, 0);
    assert_eq!(rows[0].inner.sleep_hours, 9.5);
}
