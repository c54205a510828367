use crate::common::*;

/* 대시보드 주인 계정의 역할. 역할에 따라 조회하는 지표 레코드가 달라진다. */
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ActorRole {
    Contractor,
    Artist,
}
