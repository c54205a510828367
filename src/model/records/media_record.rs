use crate::common::*;

use crate::utils_modules::traits::*;

#[doc = r#"
    포트폴리오 미디어 문서.

    - `views_count` 누락 시 0 으로 간주
    - `views_history` 는 day-key → 조회수 매핑 (선택 필드)
"#]
#[derive(Debug, Deserialize, Serialize, Getters, new)]
#[getset(get = "pub")]
pub struct MediaRecord {
    #[serde(default)]
    pub views_count: u64,
    #[serde(default)]
    pub views_history: Option<HashMap<String, u64>>,
}

#[derive(Debug, Deserialize, Serialize, Getters, new)]
#[getset(get = "pub")]
pub struct MediaRecordFormat {
    pub doc_id: String,
    pub media_record: MediaRecord,
}

impl FromSearchHit<MediaRecord> for MediaRecordFormat {
    fn from_search_hit(doc_id: String, media_record: MediaRecord) -> Self {
        MediaRecordFormat::new(doc_id, media_record)
    }
}
