use crate::common::*;

#[doc = "대시보드 로드 설정. 대상 계정 아이디는 세션 상태가 아닌 설정값으로 명시한다."]
#[derive(Debug, Deserialize, Getters)]
#[getset(get = "pub")]
pub struct DashboardConfig {
    pub actor_id: String,
    pub refresh_interval_sec: u64,
}
