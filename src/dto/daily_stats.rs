use crate::common::*;

#[doc = r#"
    30일 창에 정렬된 일별 시계열 통계.

    세 시퀀스는 모두 길이 30이며 같은 인덱스가 같은 day-key 를 가리킨다.
    - `dates` - day-key (`%Y-%m-%d`), 오래된 날짜부터
    - `primary` - 역할별 주 지표 (이벤트 생성수 혹은 지원수)
    - `views` - 미디어 일별 조회수 합
"#]
#[derive(Serialize, Deserialize, Debug, Getters, new)]
#[getset(get = "pub")]
pub struct DailyStats {
    pub dates: Vec<String>,
    pub primary: Vec<u64>,
    pub views: Vec<u64>,
}
