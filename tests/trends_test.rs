use chrono::NaiveDate;
use vault_metrics::core::trends::{build_trend_rows, filter_range, personal_best};
use vault_metrics::{build_report, MeetId, MeetRecord, PoleMetric, TrendRange};

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn meet(id: i64, day: &str) -> MeetRecord {
    MeetRecord::new(id, day)
}

fn season() -> Vec<MeetRecord> {
    let mut opener = meet(1, "2024-03-10");
    opener.name = Some("Spring Opener".to_string());
    opener.height_cleared = Some("4.20m".to_string());
    opener.deepest_takeoff = Some("12' 3\"".to_string());
    opener.pole_used = Some("14' 160lbs 17.9".to_string());

    let mut qualifier = meet(2, "2024-04-28");
    qualifier.name = Some("State Qualifier".to_string());
    qualifier.height_cleared = Some("15'1\"".to_string());
    qualifier.deepest_takeoff = Some("12’ 9”".to_string());
    qualifier.pole_used = Some("170 lbs 15'6\" 18.5".to_string());

    let mut rainout = meet(3, "2024-04-06");
    rainout.height_cleared = Some("NH".to_string());

    // Earlier than the opener, listed last to check sorting.
    let mut indoor = meet(4, "2024-01-20");
    indoor.height_cleared = Some("4.70 m".to_string());
    indoor.pole_used = Some("14' 150lbs".to_string());

    let upcoming = meet(5, "2024-06-15");

    let mut upcoming_with_notes = meet(6, "2024-06-01");
    upcoming_with_notes.place = Some("seeded 3rd".to_string());

    let unreadable = meet(7, "sometime in May");

    vec![
        opener,
        qualifier,
        rainout,
        indoor,
        upcoming,
        upcoming_with_notes,
        unreadable,
    ]
}

#[test]
fn test_rows_drop_upcoming_without_results_and_bad_dates() {
    let today = date(2024, 5, 1);
    let rows = build_trend_rows(&season(), today);

    let ids: Vec<MeetId> = rows.iter().map(|row| row.id.clone()).collect();
    assert_eq!(
        ids,
        vec![
            MeetId::Number(4),
            MeetId::Number(1),
            MeetId::Number(3),
            MeetId::Number(2),
            MeetId::Number(6),
        ]
    );
}

#[test]
fn test_meet_on_reference_date_counts_as_upcoming() {
    let today = date(2024, 3, 10);
    let rows = build_trend_rows(&[meet(1, "2024-03-10")], today);
    assert!(rows.is_empty());
}

#[test]
fn test_range_filtering() {
    let today = date(2024, 5, 1);
    let rows = build_trend_rows(&season(), today);

    let last_30 = filter_range(rows.clone(), TrendRange::Last30Days, today);
    assert_eq!(last_30.len(), 2);
    assert!(last_30.iter().all(|row| row.date >= date(2024, 4, 1)));

    let last_90 = filter_range(rows.clone(), TrendRange::Last90Days, today);
    assert_eq!(last_90.len(), 3);

    // Future meets with results only show up in the all-time view.
    let all = filter_range(rows, TrendRange::AllTime, today);
    assert_eq!(all.len(), 5);
}

#[test]
fn test_height_report() {
    let report = build_report(&season(), TrendRange::AllTime, PoleMetric::LengthFt, date(2024, 5, 1));

    let values: Vec<Option<f64>> = report.height.points.iter().map(|p| p.value).collect();
    assert_eq!(values.len(), 5);
    assert_eq!(values[0], Some(4.7));
    assert_eq!(values[2], Some(0.0));
    assert_eq!(values[4], None);

    assert_eq!(report.height.best, Some(4.7));
    assert_eq!(report.height.best_meet_id, Some(MeetId::Number(4)));
    let latest = report.height.latest.unwrap();
    assert!((latest - 4.597).abs() < 1e-3);
    assert_eq!(
        report.height.summary,
        "Latest 4.60 m (15' 1\") · PR 4.70 m (15' 5\")"
    );
}

#[test]
fn test_takeoff_report() {
    let report = build_report(&season(), TrendRange::Last90Days, PoleMetric::LengthFt, date(2024, 5, 1));

    assert_eq!(report.takeoff.best, Some(12.75));
    assert_eq!(report.takeoff.latest, Some(12.75));
    assert_eq!(report.takeoff.summary, "Latest 12' 9\" · Best 12' 9\"");
}

#[test]
fn test_pole_report_per_metric() {
    let today = date(2024, 5, 1);

    let length = build_report(&season(), TrendRange::AllTime, PoleMetric::LengthFt, today);
    let lengths: Vec<Option<f64>> = length.pole.points.iter().map(|p| p.value).collect();
    assert_eq!(lengths, vec![Some(14.0), Some(14.0), None, Some(15.5), None]);
    assert_eq!(length.pole.summary, "Latest 15' 6\"");

    let rating = build_report(&season(), TrendRange::AllTime, PoleMetric::RatingLbs, today);
    assert_eq!(rating.pole.latest, Some(170.0));
    assert_eq!(rating.pole.summary, "Latest 170 lbs");

    let flex = build_report(&season(), TrendRange::AllTime, PoleMetric::Flex, today);
    let flexes: Vec<Option<f64>> = flex.pole.points.iter().map(|p| p.value).collect();
    assert_eq!(flexes, vec![None, Some(17.9), None, Some(18.5), None]);
    assert_eq!(flex.pole.summary, "Latest 18.5 flex");
}

#[test]
fn test_empty_report() {
    let report = build_report(&[], TrendRange::AllTime, PoleMetric::Flex, date(2024, 5, 1));
    assert_eq!(report.height.summary, "No height data yet");
    assert_eq!(report.takeoff.summary, "No takeoff data yet");
    assert_eq!(report.pole.summary, "No pole data yet");
    assert!(personal_best(&report.height.points).is_none());
}

#[test]
fn test_report_json_shape() {
    let report = build_report(&season(), TrendRange::Last30Days, PoleMetric::Flex, date(2024, 5, 1));
    let json = serde_json::to_value(&report).unwrap();

    assert_eq!(json["range"], "last30Days");
    assert_eq!(json["pole"]["metric"], "flex");
    let first = &json["height"]["points"][0];
    assert_eq!(first["id"], 3);
    assert_eq!(first["date"], "2024-04-06");
    assert_eq!(first["heightClearedRaw"], "NH");
    assert_eq!(first["value"], 0.0);
}
