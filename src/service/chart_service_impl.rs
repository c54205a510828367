use crate::common::*;

use crate::traits::service_traits::chart_service::*;

use crate::dto::chart_geometry::*;

/* x 축 라벨은 5개마다 하나만 남긴다 (30 포인트 축의 라벨 밀집 방지) */
const LABEL_STRIDE: usize = 5;
const GRID_LINE_COUNT: usize = 4;

#[derive(Debug, Clone, new)]
pub struct ChartServiceImpl;

impl ChartServiceImpl {
    #[doc = r#"
        시계열 값을 [0,100]x[0,100] 좌표로 정규화하는 함수.

        1. `max` 는 시계열 최대값에 하한 1 을 둔다 -> 전부 0 인 시계열은
           0 나누기 대신 y=100 의 평평한 기준선으로 그려진다
        2. 그리기 좌표는 아래로 증가하므로 y 축을 반전한다: `y = (max - v) / max * 100`
        3. `x = i / (n-1) * 100`, 단 포인트가 하나뿐이면 중앙(x=50)에 배치

        이 함수는 어떤 입력에도 실패하지 않는다. 비핵심 통계 표시에서는
        시각적 결함이 화면 중단보다 낫기 때문이다.
    "#]
    fn normalize(&self, values: &[u64]) -> Vec<ChartPoint> {
        let max_value: u64 = values.iter().copied().max().unwrap_or(0).max(1);

        values
            .iter()
            .enumerate()
            .map(|(idx, &value)| {
                let x: f64 = if values.len() == 1 {
                    50.0
                } else {
                    idx as f64 / (values.len() - 1) as f64 * 100.0
                };

                let y: f64 = (max_value - value) as f64 / max_value as f64 * 100.0;

                ChartPoint::new(x, y)
            })
            .collect()
    }

    #[doc = r#"
        정규화된 점들을 SVG path 문자열로 변환하는 함수.

        첫 점은 move-to(`M`), 이후 점은 line-to(`L`) 커맨드를 내보낸다.
        스무딩 없는 직선 연결 폴리라인이다.
    "#]
    fn build_path(&self, points: &[ChartPoint]) -> String {
        points
            .iter()
            .enumerate()
            .map(|(idx, point)| {
                let command: &str = if idx == 0 { "M" } else { "L" };
                format!("{} {:.2} {:.2}", command, point.x, point.y)
            })
            .collect::<Vec<String>>()
            .join(" ")
    }

    #[doc = r#"
        day-key 라벨을 스트라이드(5)로 솎아내고 day-of-month 부분만 남기는 함수.
        30개 라벨 입력 기준으로 6개(인덱스 0,5,10,15,20,25)가 남는다.
    "#]
    fn decimate_labels(&self, day_keys: &[String]) -> Vec<String> {
        day_keys
            .iter()
            .step_by(LABEL_STRIDE)
            .map(|day_key| {
                day_key
                    .rsplit('-')
                    .next()
                    .unwrap_or(day_key)
                    .to_string()
            })
            .collect()
    }

    #[doc = "데이터와 무관한 고정 수평 가이드 라인 4개의 y 좌표 (0%, 33.3%, 66.6%, 100%)"]
    fn grid_lines(&self) -> [f64; GRID_LINE_COUNT] {
        let mut lines: [f64; GRID_LINE_COUNT] = [0.0; GRID_LINE_COUNT];

        for (idx, line) in lines.iter_mut().enumerate() {
            *line = idx as f64 / (GRID_LINE_COUNT - 1) as f64 * 100.0;
        }

        lines
    }

    #[doc = "차트 기하 정보를 완성된 SVG 문서 문자열로 렌더링하는 함수"]
    fn render_svg(&self, title: &str, geometry: &ChartGeometry, line_color: &str) -> String {
        let mut svg: String = String::new();

        svg.push_str(
            "<svg xmlns=\"http://www.w3.org/2000/svg\" viewBox=\"0 0 100 100\" preserveAspectRatio=\"none\">\n",
        );
        svg.push_str(&format!("  <title>{}</title>\n", title));

        for grid_y in geometry.grid_lines() {
            svg.push_str(&format!(
                "  <line x1=\"0\" y1=\"{:.2}\" x2=\"100\" y2=\"{:.2}\" stroke=\"#f0f0f0\" stroke-width=\"0.5\"/>\n",
                grid_y, grid_y
            ));
        }

        svg.push_str(&format!(
            "  <path d=\"{}\" stroke=\"{}\" stroke-width=\"2\" fill=\"none\"/>\n",
            geometry.path(),
            line_color
        ));

        /* 솎아낸 라벨을 차트 하단에 균등 배치한다 */
        let label_cnt: usize = geometry.axis_labels().len();
        for (idx, label) in geometry.axis_labels().iter().enumerate() {
            let label_x: f64 = if label_cnt <= 1 {
                50.0
            } else {
                idx as f64 / label_cnt as f64 * 100.0
            };

            svg.push_str(&format!(
                "  <text x=\"{:.2}\" y=\"99\" font-size=\"4\" fill=\"#666\">{}</text>\n",
                label_x, label
            ));
        }

        svg.push_str("</svg>\n");
        svg
    }
}

#[async_trait]
impl ChartService for ChartServiceImpl {
    #[doc = "시계열 값과 day-key 라벨로부터 차트 기하 정보를 계산해주는 함수"]
    fn build_chart_geometry(&self, values: &[u64], day_keys: &[String]) -> ChartGeometry {
        let points: Vec<ChartPoint> = self.normalize(values);
        let path: String = self.build_path(&points);
        let axis_labels: Vec<String> = self.decimate_labels(day_keys);
        let grid_lines: [f64; GRID_LINE_COUNT] = self.grid_lines();

        ChartGeometry::new(points, path, axis_labels, grid_lines)
    }

    async fn render_line_chart(
        &self,
        title: &str,
        values: &[u64],
        day_keys: &[String],
        output_path: &Path,
        line_color: &str,
    ) -> anyhow::Result<()> {
        let geometry: ChartGeometry = self.build_chart_geometry(values, day_keys);
        let svg: String = self.render_svg(title, &geometry, line_color);

        /* Create parent directory if it doesn't exist */
        if let Some(parent) = output_path.parent() {
            tokio::fs::create_dir_all(parent).await?;
        }

        tokio::fs::write(output_path, svg).await.map_err(|e| {
            anyhow!(
                "[ChartServiceImpl->render_line_chart] Failed to write chart file {:?}: {:?}",
                output_path,
                e
            )
        })?;

        info!("Line chart generated successfully: {:?}", output_path);

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_zero_series_renders_flat_baseline() {
        let service = ChartServiceImpl::new();
        let points: Vec<ChartPoint> = service.normalize(&[0, 0, 0]);

        assert_eq!(points.len(), 3);
        assert!(points.iter().all(|point| point.y == 100.0));
        assert_eq!(points[0].x, 0.0);
        assert_eq!(points[1].x, 50.0);
        assert_eq!(points[2].x, 100.0);
    }

    #[test]
    fn normalize_inverts_value_axis() {
        let service = ChartServiceImpl::new();
        let points: Vec<ChartPoint> = service.normalize(&[5, 10, 0]);

        assert_eq!(points[0].y, 50.0);
        assert_eq!(points[1].y, 0.0);
        assert_eq!(points[2].y, 100.0);
    }

    #[test]
    fn single_point_is_centered() {
        let service = ChartServiceImpl::new();
        let points: Vec<ChartPoint> = service.normalize(&[7]);

        assert_eq!(points.len(), 1);
        assert_eq!(points[0].x, 50.0);
        assert!(points[0].x.is_finite());
    }

    #[test]
    fn empty_series_yields_empty_geometry_without_error() {
        let service = ChartServiceImpl::new();
        let geometry: ChartGeometry = service.build_chart_geometry(&[], &[]);

        assert!(geometry.points().is_empty());
        assert!(geometry.path().is_empty());
        assert!(geometry.axis_labels().is_empty());
    }

    #[test]
    fn path_is_one_move_then_lines_in_input_order() {
        let service = ChartServiceImpl::new();
        let points: Vec<ChartPoint> = service.normalize(&[1, 2, 3]);
        let path: String = service.build_path(&points);

        assert_eq!(path.matches('M').count(), 1);
        assert_eq!(path.matches('L').count(), 2);
        assert!(path.starts_with("M 0.00"));

        let commands: Vec<&str> = path
            .split_whitespace()
            .filter(|token| *token == "M" || *token == "L")
            .collect();
        assert_eq!(commands, vec!["M", "L", "L"]);
    }

    #[test]
    fn thirty_labels_decimate_to_six_day_of_month_labels() {
        let service = ChartServiceImpl::new();
        let day_keys: Vec<String> = (1..=30)
            .map(|day| format!("2024-06-{:02}", day))
            .collect();

        let labels: Vec<String> = service.decimate_labels(&day_keys);

        assert_eq!(labels.len(), 6);
        assert_eq!(labels, vec!["01", "06", "11", "16", "21", "26"]);
    }

    #[test]
    fn grid_lines_are_fixed_thirds() {
        let service = ChartServiceImpl::new();
        let lines: [f64; 4] = service.grid_lines();

        assert_eq!(lines[0], 0.0);
        assert!((lines[1] - 33.333333333333336).abs() < 1e-9);
        assert!((lines[2] - 66.66666666666667).abs() < 1e-9);
        assert_eq!(lines[3], 100.0);
    }

    #[test]
    fn svg_document_contains_path_grid_and_labels() {
        let service = ChartServiceImpl::new();
        let day_keys: Vec<String> = (1..=30)
            .map(|day| format!("2024-06-{:02}", day))
            .collect();
        let values: Vec<u64> = vec![1; 30];

        let geometry: ChartGeometry = service.build_chart_geometry(&values, &day_keys);
        let svg: String = service.render_svg("Portfolio views (30 days)", &geometry, "#FF9800");

        assert!(svg.starts_with("<svg"));
        assert!(svg.contains("<path d=\"M "));
        assert_eq!(svg.matches("<line ").count(), 4);
        assert_eq!(svg.matches("<text ").count(), 6);
        assert!(svg.contains("#FF9800"));
    }
}
