use crate::common::*;

use crate::dto::chart_geometry::*;

#[async_trait]
pub trait ChartService: Send + Sync {
    #[doc = "시계열 값과 day-key 라벨로부터 차트 기하 정보를 계산해주는 함수"]
    fn build_chart_geometry(&self, values: &[u64], day_keys: &[String]) -> ChartGeometry;

    #[doc = "
        Render a 30-day time series as an SVG line chart file
        # Arguments
        * `title` - Chart title
        * `values` - Data points for Y-axis
        * `day_keys` - Day keys for X-axis labels
        * `output_path` - Path where the chart file will be saved
        * `line_color` - Stroke color of the polyline
    "]
    async fn render_line_chart(
        &self,
        title: &str,
        values: &[u64],
        day_keys: &[String],
        output_path: &Path,
        line_color: &str,
    ) -> anyhow::Result<()>;
}
