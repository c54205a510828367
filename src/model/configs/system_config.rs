use crate::common::*;

#[derive(Debug, Deserialize, Serialize, Getters)]
#[getset(get = "pub")]
pub struct SystemConfig {
    pub user_index_name: String,
    pub event_index_name: String,
    pub candidacy_index_name: String,
    pub media_index_name: String,
}
