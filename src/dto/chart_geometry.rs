use crate::common::*;

#[doc = "정규화된 [0,100]x[0,100] 좌표 공간의 한 점. y 축은 아래로 증가한다."]
#[derive(Serialize, Debug, Clone, Copy, PartialEq, new)]
pub struct ChartPoint {
    pub x: f64,
    pub y: f64,
}

#[doc = r#"
    라인차트 한 장을 그리는 데 필요한 기하 정보. 렌더링마다 재계산되며 보존되지 않는다.

    - `points` - 정규화된 폴리라인 점들
    - `path` - SVG path 문자열 (M/L 커맨드)
    - `axis_labels` - 라벨 스트라이드 적용 후의 x 축 라벨 (day-of-month)
    - `grid_lines` - 고정 수평 가이드 라인의 y 좌표 4개
"#]
#[derive(Serialize, Debug, Getters, new)]
#[getset(get = "pub")]
pub struct ChartGeometry {
    pub points: Vec<ChartPoint>,
    pub path: String,
    pub axis_labels: Vec<String>,
    pub grid_lines: [f64; 4],
}
