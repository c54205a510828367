use crate::common::*;

#[doc = "현재 UTC 기준의 달력 날짜를 반환해주는 함수"]
pub fn get_current_utc_day() -> NaiveDate {
    Utc::now().date_naive()
}

#[doc = "달력 날짜를 day-key 문자열(`%Y-%m-%d`)로 변환해주는 함수"]
pub fn format_day_key(day: NaiveDate) -> String {
    day.format("%Y-%m-%d").to_string()
}

#[doc = r#"
    레코드에 저장된 생성 시각 문자열에서 day-key 를 추출하는 함수.

    1. 저장된 시각을 UTC 시각으로 파싱한다 (타임존 변환 없음)
    2. 날짜 부분만 day-key 포맷으로 변환한다
    3. 파싱이 불가능한 경우 None 반환 -> 해당 레코드는 집계에서 제외된다

    # Arguments
    * `instant` - 레코드에 저장된 생성 시각 문자열 (ISO 8601)

    # Returns
    * `Option<String>` - day-key, 파싱 실패 시 None
"#]
pub fn day_key_from_instant(instant: &str) -> Option<String> {
    instant
        .parse::<DateTime<Utc>>()
        .ok()
        .map(|parsed| format_day_key(parsed.date_naive()))
}

#[doc = "duration 이전 시각을 반환해주는 함수"]
pub fn calc_time_window(dt: DateTime<Utc>, duration_days: i64) -> DateTime<Utc> {
    dt - chrono::Duration::days(duration_days)
}

#[doc = ""]
pub fn convert_date_to_str(time: DateTime<Utc>) -> String {
    time.format("%Y-%m-%dT%H:%M:%SZ").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn day_key_from_valid_instant() {
        assert_eq!(
            day_key_from_instant("2024-06-15T10:30:00Z"),
            Some("2024-06-15".to_string())
        );
    }

    #[test]
    fn day_key_from_malformed_instant_is_none() {
        assert_eq!(day_key_from_instant("not-a-timestamp"), None);
        assert_eq!(day_key_from_instant(""), None);
    }

    #[test]
    fn time_window_is_thirty_days_back() {
        let now: DateTime<Utc> = "2024-06-30T12:00:00Z".parse().unwrap();
        let lower: DateTime<Utc> = calc_time_window(now, 30);
        assert_eq!(convert_date_to_str(lower), "2024-05-31T12:00:00Z");
    }
}
