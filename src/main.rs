/*
Author      : Seunghwan Shin
Create date : 2026-08-00
Description : 30일 대시보드 통계 집계 및 라인차트 렌더링 서비스

History     : 2026-08-00 Seunghwan Shin       # [v.1.0.0] first create
*/

mod common;
mod external_deps;
mod prelude;
use common::*;

mod repository;
use repository::es_repository_impl::*;

mod env_configuration;

mod traits;

mod model;
use model::configs::total_config::*;

mod dto;

mod enums;

mod utils_modules;
use utils_modules::logger_utils::*;

mod service;
use service::{
    aggregation_service_impl::*, chart_service_impl::*, query_service_impl::*,
};

mod controller;
use controller::main_controller::*;

#[tokio::main]
async fn main() {
    /* 전역로거 설정 및 초기 설정 */
    dotenv().ok();
    set_global_logger();

    info!("Dashboard stats tracking program start!");

    /* Elasticsearch connection */
    let es_conn: EsRepositoryImpl =
        EsRepositoryImpl::new(get_elastic_config_info()).unwrap_or_else(|e| {
            let err_msg: &str = "[main] An issue occurred while initializing es_conn.";
            error!("{} {:?}", err_msg, e);
            panic!("{} {:?}", err_msg, e)
        });

    /* 의존 주입 */
    let query_service: QueryServiceImpl = QueryServiceImpl::new(Arc::new(es_conn));
    let aggregation_service: AggregationServiceImpl = AggregationServiceImpl::new();
    let chart_service: ChartServiceImpl = ChartServiceImpl::new();

    let main_controller: MainController<QueryServiceImpl, AggregationServiceImpl, ChartServiceImpl> =
        MainController::new(query_service, aggregation_service, chart_service);

    main_controller.main_task().await.unwrap_or_else(|e| {
        error!("{:?}", e);
        panic!("{:?}", e)
    });
}
