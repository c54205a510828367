use crate::common::*;

use crate::traits::service_traits::aggregation_service::*;

use crate::utils_modules::time_utils::*;

use crate::enums::{actor_role::*, plan_tier::*};

use crate::dto::{daily_stats::*, dashboard_snapshot::*};

use crate::model::records::{media_record::*, stat_record::*, user_account::*};

/* 모든 시계열이 정렬되는 일별 버킷 개수 */
pub const DAILY_WINDOW_DAYS: usize = 30;

#[derive(Debug, Clone, new)]
pub struct AggregationServiceImpl;

impl AggregationService for AggregationServiceImpl {
    #[doc = r#"
        기준일을 마지막 항목으로 하는 30개의 day-key 를 생성하는 함수.

        1. 오래된 날짜부터 하루 간격으로 증가하며, 마지막 항목이 기준일과 같다
        2. 날짜 부분만의 순수 함수라서 같은 달력일 안에서는 결과가 동일하다

        # Arguments
        * `reference_day` - 창의 마지막 날 ("오늘")

        # Returns
        * `Vec<String>` - 길이 30의 day-key 시퀀스, 오래된 날짜부터
    "#]
    fn build_day_keys(&self, reference_day: NaiveDate) -> Vec<String> {
        let mut day_keys: Vec<String> = Vec::with_capacity(DAILY_WINDOW_DAYS);

        for offset in (0..DAILY_WINDOW_DAYS as i64).rev() {
            let day: NaiveDate = reference_day - chrono::Duration::days(offset);
            day_keys.push(format_day_key(day));
        }

        day_keys
    }

    #[doc = r#"
        레코드들을 day-key 창에 버킷팅하여 일별 카운트를 만드는 함수.

        1. 각 레코드에서 `date_extractor` 로 day-key 를 추출
        2. 창 안의 day-key 면 해당 인덱스의 카운트를 증가
        3. 추출 실패(생성 시각 누락/파싱 불가) 혹은 창 밖 레코드는 조용히 버린다

        서버사이드 하한 필터가 시각 단위 근사치라서 창 밖 레코드가 정상적으로
        섞여 들어올 수 있으므로, 불일치는 오류가 아니다.

        # Returns
        * `Vec<u64>` - `day_keys` 와 같은 길이의 카운트 시퀀스 (레코드가 없으면 전부 0)
    "#]
    fn bucket_by_day<R, F>(&self, records: &[R], day_keys: &[String], date_extractor: F) -> Vec<u64>
    where
        F: Fn(&R) -> Option<String>,
    {
        let mut counts: Vec<u64> = vec![0; day_keys.len()];

        for record in records {
            let day_key: String = match date_extractor(record) {
                Some(day_key) => day_key,
                None => continue,
            };

            if let Some(idx) = day_keys.iter().position(|key| *key == day_key) {
                counts[idx] += 1;
            }
        }

        counts
    }

    #[doc = r#"
        미디어 문서들의 일별 조회 이력을 day-key 창에 합산하는 함수.

        1. 각 미디어의 `views_history` 매핑을 순회 (없으면 건너뜀)
        2. 창 안의 day-key 항목만 해당 인덱스에 가산
        3. 여러 미디어가 같은 날짜를 가지면 가산 누적된다

        # Returns
        * `Vec<u64>` - `day_keys` 와 같은 길이의 일별 조회수 합
    "#]
    fn sum_view_history(&self, media_records: &[MediaRecord], day_keys: &[String]) -> Vec<u64> {
        let mut view_counts: Vec<u64> = vec![0; day_keys.len()];

        for media_record in media_records {
            let views_history: &HashMap<String, u64> = match media_record.views_history() {
                Some(views_history) => views_history,
                None => continue,
            };

            for (day_key, view_cnt) in views_history {
                if let Some(idx) = day_keys.iter().position(|key| key == day_key) {
                    view_counts[idx] += view_cnt;
                }
            }
        }

        view_counts
    }

    #[doc = r#"
        한 번의 대시보드 로드 결과를 일관된 스냅샷으로 집계하는 함수.

        1. 역할별 주 카운트 산출 (반대 역할 카운트는 0)
        2. 포트폴리오 총 조회수 = 미디어 `views_count` 의 합
        3. 평점은 계정 문서 값 그대로 (누락 시 serde 기본값 0.0)
        4. 유료 플랜인 경우에만 30일 일별 시계열(주 지표 + 조회수)을 계산

        # Returns
        * `DashboardSnapshot` - 스탯 카드 4종 + (유료 플랜 한정) 일별 통계
    "#]
    fn build_dashboard_snapshot(
        &self,
        user_account: &UserAccount,
        stat_records: &[StatRecord],
        media_records: &[MediaRecord],
        reference_day: NaiveDate,
    ) -> DashboardSnapshot {
        let primary_count: usize = stat_records.len();

        let (events_count, candidacies_count) = match user_account.role() {
            ActorRole::Contractor => (primary_count, 0),
            ActorRole::Artist => (0, primary_count),
        };

        let portfolio_views: u64 = media_records
            .iter()
            .map(|media_record| *media_record.views_count())
            .sum();

        /* 일별 시계열은 유료 플랜에서만 계산한다 */
        let daily_stats: Option<DailyStats> = if *user_account.plan_id() == PlanTier::Paid {
            let day_keys: Vec<String> = self.build_day_keys(reference_day);

            let primary: Vec<u64> = self.bucket_by_day(stat_records, &day_keys, |stat_record| {
                stat_record.created_at().as_deref().and_then(day_key_from_instant)
            });

            let views: Vec<u64> = self.sum_view_history(media_records, &day_keys);

            Some(DailyStats::new(day_keys, primary, views))
        } else {
            None
        };

        DashboardSnapshot::new(
            events_count,
            candidacies_count,
            portfolio_views,
            *user_account.rating(),
            daily_stats,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reference_day() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 6, 30).unwrap()
    }

    fn stat_record(created_at: &str) -> StatRecord {
        StatRecord::new(Some(created_at.to_string()))
    }

    #[test]
    fn day_keys_are_thirty_ascending_ending_at_reference_day() {
        let service = AggregationServiceImpl::new();
        let day_keys: Vec<String> = service.build_day_keys(reference_day());

        assert_eq!(day_keys.len(), 30);
        assert_eq!(day_keys.first().unwrap(), "2024-06-01");
        assert_eq!(day_keys.last().unwrap(), "2024-06-30");

        for pair in day_keys.windows(2) {
            let prev: NaiveDate = pair[0].parse().unwrap();
            let next: NaiveDate = pair[1].parse().unwrap();
            assert_eq!(next - prev, chrono::Duration::days(1));
        }
    }

    #[test]
    fn day_keys_are_stable_within_the_same_calendar_day() {
        let service = AggregationServiceImpl::new();
        assert_eq!(
            service.build_day_keys(reference_day()),
            service.build_day_keys(reference_day())
        );
    }

    #[test]
    fn empty_record_set_yields_all_zero_series() {
        let service = AggregationServiceImpl::new();
        let day_keys: Vec<String> = service.build_day_keys(reference_day());

        let counts: Vec<u64> = service.bucket_by_day(&[] as &[StatRecord], &day_keys, |record| {
            record.created_at().as_deref().and_then(day_key_from_instant)
        });

        assert_eq!(counts.len(), 30);
        assert!(counts.iter().all(|&cnt| cnt == 0));
    }

    #[test]
    fn window_boundaries_are_inclusive() {
        let service = AggregationServiceImpl::new();
        let day_keys: Vec<String> = service.build_day_keys(reference_day());

        let records: Vec<StatRecord> = vec![
            stat_record("2024-06-01T00:00:00Z"),
            stat_record("2024-06-30T23:59:59Z"),
        ];

        let counts: Vec<u64> = service.bucket_by_day(&records, &day_keys, |record| {
            record.created_at().as_deref().and_then(day_key_from_instant)
        });

        assert_eq!(counts[0], 1);
        assert_eq!(counts[29], 1);
        assert_eq!(counts.iter().sum::<u64>(), 2);
    }

    #[test]
    fn record_one_day_before_window_start_is_dropped() {
        let service = AggregationServiceImpl::new();
        let day_keys: Vec<String> = service.build_day_keys(reference_day());

        let records: Vec<StatRecord> = vec![stat_record("2024-05-31T12:00:00Z")];

        let counts: Vec<u64> = service.bucket_by_day(&records, &day_keys, |record| {
            record.created_at().as_deref().and_then(day_key_from_instant)
        });

        assert_eq!(counts.iter().sum::<u64>(), 0);
    }

    #[test]
    fn record_without_parseable_timestamp_is_dropped() {
        let service = AggregationServiceImpl::new();
        let day_keys: Vec<String> = service.build_day_keys(reference_day());

        let records: Vec<StatRecord> = vec![
            StatRecord::new(None),
            stat_record("garbage"),
            stat_record("2024-06-15T10:00:00Z"),
        ];

        let counts: Vec<u64> = service.bucket_by_day(&records, &day_keys, |record| {
            record.created_at().as_deref().and_then(day_key_from_instant)
        });

        assert_eq!(counts.iter().sum::<u64>(), 1);
    }

    #[test]
    fn view_history_accumulates_across_media_records() {
        let service = AggregationServiceImpl::new();
        let day_keys: Vec<String> = service.build_day_keys(reference_day());

        let first: MediaRecord = MediaRecord::new(
            10,
            Some(HashMap::from([
                ("2024-06-15".to_string(), 3),
                ("2024-05-01".to_string(), 99), /* 창 밖 - 무시 */
            ])),
        );
        let second: MediaRecord = MediaRecord::new(
            5,
            Some(HashMap::from([("2024-06-15".to_string(), 4)])),
        );
        let third: MediaRecord = MediaRecord::new(0, None);

        let views: Vec<u64> = service.sum_view_history(&[first, second, third], &day_keys);

        let idx: usize = day_keys.iter().position(|key| key == "2024-06-15").unwrap();
        assert_eq!(views[idx], 7);
        assert_eq!(views.iter().sum::<u64>(), 7);
    }

    #[test]
    fn end_to_end_scenario_drops_out_of_window_record() {
        let service = AggregationServiceImpl::new();
        let day_keys: Vec<String> = service.build_day_keys(reference_day());

        let records: Vec<StatRecord> = vec![
            stat_record("2024-06-15T09:00:00Z"),
            stat_record("2024-05-01T09:00:00Z"), /* 창 밖 */
        ];

        let counts: Vec<u64> = service.bucket_by_day(&records, &day_keys, |record| {
            record.created_at().as_deref().and_then(day_key_from_instant)
        });

        let idx: usize = day_keys.iter().position(|key| key == "2024-06-15").unwrap();
        assert_eq!(counts[idx], 1);
        assert_eq!(counts.iter().sum::<u64>(), 1);
    }

    #[test]
    fn free_plan_snapshot_has_no_daily_stats() {
        let service = AggregationServiceImpl::new();
        let account: UserAccount = UserAccount::new(ActorRole::Artist, PlanTier::Free, 4.5);

        let snapshot: DashboardSnapshot = service.build_dashboard_snapshot(
            &account,
            &[stat_record("2024-06-15T09:00:00Z")],
            &[MediaRecord::new(12, None)],
            reference_day(),
        );

        assert_eq!(*snapshot.candidacies_count(), 1);
        assert_eq!(*snapshot.events_count(), 0);
        assert_eq!(*snapshot.portfolio_views(), 12);
        assert!(snapshot.daily_stats().is_none());
    }

    #[test]
    fn paid_plan_snapshot_series_are_aligned() {
        let service = AggregationServiceImpl::new();
        let account: UserAccount = UserAccount::new(ActorRole::Contractor, PlanTier::Paid, 0.0);

        let media: MediaRecord = MediaRecord::new(
            3,
            Some(HashMap::from([("2024-06-30".to_string(), 2)])),
        );

        let snapshot: DashboardSnapshot = service.build_dashboard_snapshot(
            &account,
            &[stat_record("2024-06-30T08:00:00Z")],
            &[media],
            reference_day(),
        );

        assert_eq!(*snapshot.events_count(), 1);
        assert_eq!(*snapshot.candidacies_count(), 0);

        let daily_stats: &DailyStats = snapshot.daily_stats().as_ref().unwrap();
        assert_eq!(daily_stats.dates().len(), 30);
        assert_eq!(daily_stats.primary().len(), 30);
        assert_eq!(daily_stats.views().len(), 30);
        assert_eq!(daily_stats.primary()[29], 1);
        assert_eq!(daily_stats.views()[29], 2);
    }
}
