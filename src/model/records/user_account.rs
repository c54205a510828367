use crate::common::*;

use crate::enums::{actor_role::*, plan_tier::*};

use crate::utils_modules::traits::*;

#[doc = r#"
    대시보드 주인 계정 문서.

    선택 필드는 serde 기본값으로 fetch 경계에서 검증된다.
    - `plan_id` 누락 시 Free 플랜으로 간주
    - `rating` 누락 시 0.0 으로 간주
"#]
#[derive(Debug, Deserialize, Serialize, Getters, new)]
#[getset(get = "pub")]
pub struct UserAccount {
    pub role: ActorRole,
    #[serde(default)]
    pub plan_id: PlanTier,
    #[serde(default)]
    pub rating: f64,
}

#[derive(Debug, Deserialize, Serialize, Getters, new)]
#[getset(get = "pub")]
pub struct UserAccountFormat {
    pub doc_id: String,
    pub user_account: UserAccount,
}

impl FromSearchHit<UserAccount> for UserAccountFormat {
    fn from_search_hit(doc_id: String, user_account: UserAccount) -> Self {
        UserAccountFormat::new(doc_id, user_account)
    }
}
