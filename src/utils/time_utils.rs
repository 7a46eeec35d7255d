//! # 시간 유틸리티
//!
//! BSON 시각과 chrono 시각 간 변환, 날짜 필터 파싱을 담당합니다.

use chrono::{DateTime, Days, NaiveDate, Utc};
use mongodb::bson;

/// BSON `DateTime` → `chrono::DateTime<Utc>`
pub fn to_chrono(dt: bson::DateTime) -> DateTime<Utc> {
    dt.to_system_time().into()
}

/// `chrono::DateTime<Utc>` → BSON `DateTime`
pub fn to_bson(dt: DateTime<Utc>) -> bson::DateTime {
    bson::DateTime::from_millis(dt.timestamp_millis())
}

/// 날짜 필터 문자열을 하루 범위 `[start, end)`로 변환
///
/// `YYYY-MM-DD` 또는 RFC 3339 형식을 받으며, RFC 3339인 경우 UTC 기준 날짜만 사용합니다.
/// 해석할 수 없는 값은 `None`을 반환하고 필터에서 제외됩니다.
pub fn parse_day_range(raw: &str) -> Option<(DateTime<Utc>, DateTime<Utc>)> {
    let raw = raw.trim();

    let day = NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .or_else(|| {
            DateTime::parse_from_rfc3339(raw)
                .ok()
                .map(|dt| dt.with_timezone(&Utc).date_naive())
        })?;

    let start = day.and_hms_opt(0, 0, 0)?.and_utc();
    let end = day.checked_add_days(Days::new(1))?.and_hms_opt(0, 0, 0)?.and_utc();

    Some((start, end))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_bson_round_trip_keeps_millis() {
        let now = Utc.with_ymd_and_hms(2024, 5, 1, 12, 30, 0).unwrap();
        assert_eq!(to_chrono(to_bson(now)), now);
    }

    #[test]
    fn test_parse_plain_date() {
        let (start, end) = parse_day_range("2024-05-01").unwrap();

        assert_eq!(start, Utc.with_ymd_and_hms(2024, 5, 1, 0, 0, 0).unwrap());
        assert_eq!(end, Utc.with_ymd_and_hms(2024, 5, 2, 0, 0, 0).unwrap());
    }

    #[test]
    fn test_parse_rfc3339_uses_utc_day() {
        let (start, _) = parse_day_range("2024-05-01T23:30:00-02:00").unwrap();
        assert_eq!(start, Utc.with_ymd_and_hms(2024, 5, 2, 0, 0, 0).unwrap());
    }

    #[test]
    fn test_invalid_dates_are_ignored() {
        assert!(parse_day_range("yesterday").is_none());
        assert!(parse_day_range("2024-13-01").is_none());
        assert!(parse_day_range("").is_none());
    }
}
