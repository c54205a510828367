use crate::common::*;

use crate::traits::{repository_traits::es_repository::*, service_traits::query_service::*};

use crate::repository::es_repository_impl::*;

use crate::utils_modules::{time_utils::*, traits::*};

use crate::enums::actor_role::*;

use crate::model::configs::total_config::*;
use crate::model::records::{media_record::*, stat_record::*, user_account::*};

/* 역할별 서버사이드 상태 필터 값 */
const EVENT_STATUS_CANCELLED: &str = "CANCELADO";
const CANDIDACY_STATUS_ACTIVE: [&str; 2] = ["PENDENTE", "APROVADA"];

/* 한 대시보드 로드가 읽어오는 레코드 상한 */
const FETCH_SIZE: usize = 10000;

#[derive(Debug, new)]
pub struct QueryServiceImpl {
    es_conn: Arc<EsRepositoryImpl>,
}

impl QueryServiceImpl {
    #[doc = r#"
        Elasticsearch 검색 응답을 파싱하여 벡터 형태의 구조화된 객체로 변환하는 제네릭 함수.

        1. ES 응답의 `hits.hits` 배열에서 각 검색 결과를 추출
        2. 각 히트의 `_id`와 `_source`를 분리하여 파싱
        3. `_source`를 지정된 타입 `S`로 역직렬화
        4. `FromSearchHit` 트레이트를 통해 최종 타입 `T`로 변환

        # Type Parameters
        * `T` - 최종 반환할 객체 타입 (`FromSearchHit` 트레이트 구현 필요)
        * `S` - ES `_source` 필드의 역직렬화 타입 (`DeserializeOwned` 구현 필요)

        # Arguments
        * `response_body` - Elasticsearch 검색 응답 JSON

        # Returns
        * `Vec<T>` - 변환된 객체들의 벡터
        * `anyhow::Error` - 응답 파싱 실패, 필수 필드 누락, 역직렬화 실패 시
    "#]
    fn get_query_result_vec<T, S>(&self, response_body: &Value) -> Result<Vec<T>, anyhow::Error>
    where
        S: DeserializeOwned,
        T: FromSearchHit<S>,
    {
        let hits: &Value = response_body
            .get("hits")
            .and_then(|h| h.get("hits"))
            .ok_or_else(|| {
                anyhow!("[QueryServiceImpl->get_query_result_vec] Missing 'hits.hits' field")
            })?;

        let arr: &Vec<Value> = hits.as_array().ok_or_else(|| {
            anyhow!("[QueryServiceImpl->get_query_result_vec] 'hits.hits' is not an array")
        })?;

        /* ID + source 역직렬화 → T 로 변환 */
        let results: Vec<T> = arr
            .iter()
            .map(|hit| {
                let id: String = hit
                    .get("_id")
                    .and_then(|v| v.as_str())
                    .ok_or_else(|| {
                        anyhow!("[QueryServiceImpl->get_query_result_vec] Missing or invalid '_id'")
                    })?
                    .to_string();

                let src_val: &Value = hit.get("_source").ok_or_else(|| {
                    anyhow!("[QueryServiceImpl->get_query_result_vec] Missing '_source'")
                })?;

                let source: S = serde_json::from_value(src_val.to_owned()).map_err(|e| {
                    anyhow!(
                        "[QueryServiceImpl->get_query_result_vec] Failed to deserialize source: {}",
                        e
                    )
                })?;

                Ok::<T, anyhow::Error>(T::from_search_hit(id, source))
            })
            .collect::<Result<_, _>>()?;
        Ok(results)
    }

    #[doc = r#"
        Elasticsearch 검색 응답에서 첫 번째 결과만을 파싱하여 단일 구조화된 객체로 변환하는 제네릭 함수.
        첫 번째 히트가 없으면 에러를 반환한다 (빈 결과 처리).

        # Returns
        * `T` - 변환된 단일 객체
        * `anyhow::Error` - 응답 파싱 실패, 빈 결과, 필수 필드 누락, 역직렬화 실패 시
    "#]
    fn get_query_result<T, S>(&self, response_body: &Value) -> Result<T, anyhow::Error>
    where
        S: DeserializeOwned,
        T: FromSearchHit<S>,
    {
        let results: Vec<T> = self.get_query_result_vec::<T, S>(response_body)?;

        results
            .into_iter()
            .next()
            .ok_or_else(|| anyhow!("[QueryServiceImpl->get_query_result] hits array is empty"))
    }

    #[doc = r#"
        역할에 따라 지표 레코드 검색 쿼리를 구성하는 함수.

        - Contractor: 본인이 생성한 이벤트 중 취소 상태가 아닌 것
        - Artist: 본인이 제출한 지원서 중 대기/승인 상태인 것

        두 경우 모두 `created_at >= created_from` 의 30일 하한 필터를 포함한다.
        하한은 시각 단위 근사치라서 경계일 하루치가 더 포함될 수 있으며,
        창 밖 레코드는 집계 단계에서 조용히 버려진다.
    "#]
    fn build_stat_record_query(
        &self,
        actor_id: &str,
        role: ActorRole,
        created_from: DateTime<Utc>,
    ) -> Value {
        let created_range: Value = json!({
            "range": {
                "created_at": { "gte": convert_date_to_str(created_from) }
            }
        });

        match role {
            ActorRole::Contractor => json!({
                "size": FETCH_SIZE,
                "query": {
                    "bool": {
                        "filter": [
                            { "term": { "creator_id.keyword": actor_id } },
                            created_range
                        ],
                        "must_not": [
                            { "term": { "status.keyword": EVENT_STATUS_CANCELLED } }
                        ]
                    }
                }
            }),
            ActorRole::Artist => json!({
                "size": FETCH_SIZE,
                "query": {
                    "bool": {
                        "filter": [
                            { "term": { "artist_id.keyword": actor_id } },
                            { "terms": { "status.keyword": CANDIDACY_STATUS_ACTIVE } },
                            created_range
                        ]
                    }
                }
            }),
        }
    }
}

#[async_trait]
impl QueryService for QueryServiceImpl {
    #[doc = r#"
        대시보드 주인 계정 문서를 문서 아이디로 조회하는 함수.

        계정 문서가 없으면 에러를 반환하며, 해당 로드 전체가 중단된다.
        선택 필드(플랜, 평점)는 `UserAccount` 의 serde 기본값으로 보정된다.

        # Arguments
        * `actor_id` - 대시보드 주인 계정의 문서 아이디

        # Returns
        * `UserAccountFormat` - 문서 아이디 + 계정 정보
        * `anyhow::Error` - ES 조회 실패, 계정 문서 없음, 역직렬화 실패 시
    "#]
    async fn get_user_account(&self, actor_id: &str) -> anyhow::Result<UserAccountFormat> {
        let query: Value = json!({
            "size": 1,
            "query": {
                "ids": { "values": [actor_id] }
            }
        });

        let user_index_name: &str = get_system_config_info().user_index_name();

        let response_body: Value = self.es_conn.get_search_query(&query, user_index_name).await?;

        self.get_query_result::<UserAccountFormat, UserAccount>(&response_body)
    }

    #[doc = r#"
        역할별 지표 레코드(이벤트 혹은 지원서)를 조회하는 함수.

        1. 역할에 맞는 인덱스와 필터로 검색 쿼리를 구성
        2. 계정 아이디, 상태, 30일 생성 시각 하한으로 서버사이드 필터링
        3. 조회 결과를 `StatRecordFormat` 벡터로 파싱

        # Arguments
        * `actor_id` - 대시보드 주인 계정의 문서 아이디
        * `role` - 계정 역할 (조회 대상 인덱스 결정)
        * `created_from` - 생성 시각 하한 (30일 전)

        # Returns
        * `Vec<StatRecordFormat>` - 서버사이드 필터를 통과한 지표 레코드 목록
        * `anyhow::Error` - ES 조회 실패 또는 파싱 실패 시
    "#]
    async fn get_stat_records(
        &self,
        actor_id: &str,
        role: ActorRole,
        created_from: DateTime<Utc>,
    ) -> anyhow::Result<Vec<StatRecordFormat>> {
        let search_query: Value = self.build_stat_record_query(actor_id, role, created_from);

        let index_name: &str = match role {
            ActorRole::Contractor => get_system_config_info().event_index_name(),
            ActorRole::Artist => get_system_config_info().candidacy_index_name(),
        };

        let response_body: Value = self.es_conn.get_search_query(&search_query, index_name).await?;

        self.get_query_result_vec::<StatRecordFormat, StatRecord>(&response_body)
    }

    #[doc = r#"
        계정 소유의 포트폴리오 미디어 문서를 조회하는 함수.

        # Arguments
        * `actor_id` - 미디어 소유 계정의 문서 아이디

        # Returns
        * `Vec<MediaRecordFormat>` - 미디어 문서 목록 (조회수/일별 조회 이력 포함)
        * `anyhow::Error` - ES 조회 실패 또는 파싱 실패 시
    "#]
    async fn get_media_records(&self, actor_id: &str) -> anyhow::Result<Vec<MediaRecordFormat>> {
        let search_query: Value = json!({
            "size": FETCH_SIZE,
            "query": {
                "term": { "user_id.keyword": actor_id }
            }
        });

        let media_index_name: &str = get_system_config_info().media_index_name();

        let response_body: Value = self
            .es_conn
            .get_search_query(&search_query, media_index_name)
            .await?;

        self.get_query_result_vec::<MediaRecordFormat, MediaRecord>(&response_body)
    }
}
