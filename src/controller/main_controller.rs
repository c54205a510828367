use crate::common::*;

use crate::utils_modules::time_utils::*;

use crate::model::configs::{dashboard_config::*, total_config::*};
use crate::model::records::{media_record::*, stat_record::*, user_account::*};

use crate::dto::{daily_stats::*, dashboard_snapshot::*};

use crate::enums::actor_role::*;

use crate::env_configuration::env_config::*;

use crate::service::aggregation_service_impl::DAILY_WINDOW_DAYS;

use crate::traits::service_traits::{
    aggregation_service::*, chart_service::*, query_service::*,
};

#[derive(Debug, new)]
pub struct MainController<Q: QueryService, A: AggregationService, C: ChartService> {
    query_service: Q,
    aggregation_service: A,
    chart_service: C,
}

impl<Q: QueryService + Sync, A: AggregationService + Sync, C: ChartService> MainController<Q, A, C> {
    #[doc = r#"
        메인 루프를 실행하는 핵심 함수로, 설정된 주기마다 대시보드 로드를 반복 수행한다.

        1. 대시보드 설정에서 대상 계정 아이디와 갱신 주기를 읽어온다
        2. 주기마다 `load_dashboard` 를 실행해 스냅샷 하나를 만들어낸다
        3. 로드 도중 어느 단계든 실패하면 해당 주기는 no-data 상태로 끝나고,
           부분 스냅샷 없이 다음 주기로 진행한다 (재시도 없음)

        # Returns
        * `anyhow::Result<()>` - 정상 종료 시 Ok(()), 치명적 오류 시 Err
    "#]
    pub async fn main_task(&self) -> anyhow::Result<()> {
        let dashboard_config: &DashboardConfig = get_dashboard_config_info();
        let actor_id: &str = dashboard_config.actor_id();

        let mut ticker: Interval =
            interval(Duration::from_secs(*dashboard_config.refresh_interval_sec()));

        loop {
            ticker.tick().await;

            match self.load_dashboard(actor_id).await {
                Ok(snapshot) => self.report_stat_cards(&snapshot),
                Err(e) => {
                    error!(
                        "[MainController->main_task] Dashboard load failed. No data for this cycle: {:?}",
                        e
                    );
                }
            }
        }
    }

    #[doc = r#"
        한 번의 대시보드 로드를 수행하는 함수. 의존적인 페치들을 순차 실행한다.

        1. 대시보드 주인 계정 조회 (역할/플랜/평점)
        2. 역할별 지표 레코드 조회 - 계정/상태/30일 생성 시각 하한 서버사이드 필터
        3. 포트폴리오 미디어 레코드 조회
        4. 집계 서비스로 스냅샷 구성 (유료 플랜이면 30일 일별 시계열 포함)
        5. 일별 시계열이 있으면 라인차트 2종(주 지표, 조회수)을 렌더링

        # Arguments
        * `actor_id` - 대시보드 주인 계정의 문서 아이디 (세션 상태가 아닌 명시적 파라미터)

        # Returns
        * `DashboardSnapshot` - 일관된 스냅샷 하나
        * `anyhow::Error` - 페치 실패 시 (남은 단계는 수행되지 않는다)
    "#]
    async fn load_dashboard(&self, actor_id: &str) -> anyhow::Result<DashboardSnapshot> {
        /* 1. 대시보드 주인 계정 */
        let account_format: UserAccountFormat =
            self.query_service.get_user_account(actor_id).await?;
        let user_account: &UserAccount = account_format.user_account();

        let created_from: DateTime<Utc> = calc_time_window(Utc::now(), DAILY_WINDOW_DAYS as i64);

        /* 2. 역할별 지표 레코드 */
        let stat_records: Vec<StatRecord> = self
            .query_service
            .get_stat_records(actor_id, *user_account.role(), created_from)
            .await?
            .into_iter()
            .map(|format| format.stat_record)
            .collect();

        /* 3. 포트폴리오 미디어 레코드 */
        let media_records: Vec<MediaRecord> = self
            .query_service
            .get_media_records(actor_id)
            .await?
            .into_iter()
            .map(|format| format.media_record)
            .collect();

        /* 4. 30일 창 기준 스냅샷 집계 */
        let snapshot: DashboardSnapshot = self.aggregation_service.build_dashboard_snapshot(
            user_account,
            &stat_records,
            &media_records,
            get_current_utc_day(),
        );

        /* 5. 유료 플랜 한정 차트 렌더링 */
        if let Some(daily_stats) = snapshot.daily_stats() {
            self.render_daily_charts(*user_account.role(), daily_stats)
                .await?;
        }

        Ok(snapshot)
    }

    #[doc = "역할별 주 지표 차트와 조회수 차트를 SVG 파일로 렌더링하는 함수"]
    async fn render_daily_charts(
        &self,
        role: ActorRole,
        daily_stats: &DailyStats,
    ) -> anyhow::Result<()> {
        let output_dir: &Path = Path::new(CHART_OUTPUT_PATH.as_str());

        let (primary_title, primary_file) = match role {
            ActorRole::Contractor => ("Events created (30 days)", "events_30d.svg"),
            ActorRole::Artist => ("Candidacies (30 days)", "candidacies_30d.svg"),
        };

        self.chart_service
            .render_line_chart(
                primary_title,
                daily_stats.primary(),
                daily_stats.dates(),
                &output_dir.join(primary_file),
                "#4CAF50",
            )
            .await?;

        self.chart_service
            .render_line_chart(
                "Portfolio views (30 days)",
                daily_stats.views(),
                daily_stats.dates(),
                &output_dir.join("views_30d.svg"),
                "#FF9800",
            )
            .await?;

        Ok(())
    }

    #[doc = "스냅샷의 스탯 카드 4종을 로그로 보고하는 함수"]
    fn report_stat_cards(&self, snapshot: &DashboardSnapshot) {
        info!(
            "Dashboard loaded. events_created={}, candidacies={}, portfolio_views={}, rating={:.1}, daily_stats={}",
            snapshot.events_count(),
            snapshot.candidacies_count(),
            snapshot.portfolio_views(),
            snapshot.rating(),
            if snapshot.daily_stats().is_some() { "yes" } else { "no" }
        );
    }
}
