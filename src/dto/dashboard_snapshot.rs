use crate::common::*;

use crate::dto::daily_stats::*;

#[doc = r#"
    한 번의 대시보드 로드가 만들어내는 일관된 스냅샷.

    스탯 카드 4종(이벤트 생성수, 지원수, 포트폴리오 조회수, 평점)은 항상 채워지며
    역할에 해당하지 않는 카운트는 0이다. `daily_stats` 는 유료 플랜에서만 Some.
"#]
#[derive(Serialize, Deserialize, Debug, Getters, new)]
#[getset(get = "pub")]
pub struct DashboardSnapshot {
    pub events_count: usize,
    pub candidacies_count: usize,
    pub portfolio_views: u64,
    pub rating: f64,
    pub daily_stats: Option<DailyStats>,
}
