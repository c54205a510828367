use crate::common::*;

use crate::enums::actor_role::*;

use crate::model::records::{media_record::*, stat_record::*, user_account::*};

#[async_trait]
pub trait QueryService {
    async fn get_user_account(&self, actor_id: &str) -> anyhow::Result<UserAccountFormat>;
    async fn get_stat_records(
        &self,
        actor_id: &str,
        role: ActorRole,
        created_from: DateTime<Utc>,
    ) -> anyhow::Result<Vec<StatRecordFormat>>;
    async fn get_media_records(&self, actor_id: &str) -> anyhow::Result<Vec<MediaRecordFormat>>;
}
