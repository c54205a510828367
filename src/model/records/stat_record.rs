use crate::common::*;

use crate::utils_modules::traits::*;

#[doc = r#"
    역할별 지표 레코드 (이벤트 혹은 지원서).

    집계에는 생성 시각만 사용된다. `created_at` 이 없거나 파싱 불가능한 레코드는
    버킷팅에서 조용히 제외되며 오류로 처리하지 않는다.
"#]
#[derive(Debug, Deserialize, Serialize, Getters, new)]
#[getset(get = "pub")]
pub struct StatRecord {
    #[serde(default)]
    pub created_at: Option<String>,
}

#[derive(Debug, Deserialize, Serialize, Getters, new)]
#[getset(get = "pub")]
pub struct StatRecordFormat {
    pub doc_id: String,
    pub stat_record: StatRecord,
}

impl FromSearchHit<StatRecord> for StatRecordFormat {
    fn from_search_hit(doc_id: String, stat_record: StatRecord) -> Self {
        StatRecordFormat::new(doc_id, stat_record)
    }
}
