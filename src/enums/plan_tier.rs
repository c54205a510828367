use crate::common::*;

/* 유료 플랜 여부. 일별 시계열 통계는 Paid 플랜에서만 계산/렌더링한다. */
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PlanTier {
    #[default]
    Free,
    Paid,
}
