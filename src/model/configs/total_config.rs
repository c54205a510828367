use crate::common::*;

use crate::model::configs::{
    dashboard_config::*, elastic_server_config::*, system_config::*,
};

use crate::utils_modules::io_utils::*;

use crate::env_configuration::env_config::*;

static TOTAL_CONFIG: once_lazy<TotalConfig> = once_lazy::new(initialize_server_config);

#[doc = "Function to initialize Server configuration information instances"]
pub fn initialize_server_config() -> TotalConfig {
    info!("initialize_server_config() START!");
    TotalConfig::new()
}

#[derive(Debug, Deserialize, Getters)]
#[getset(get = "pub")]
pub struct TotalConfig {
    pub elasticsearch: ElasticServerConfig,
    pub system: SystemConfig,
    pub dashboard: DashboardConfig,
}

#[doc = "Elasticsearch config 정보"]
pub fn get_elastic_config_info() -> &'static ElasticServerConfig {
    &TOTAL_CONFIG.elasticsearch
}

#[doc = "system 설정 정보 (인덱스 이름들)"]
pub fn get_system_config_info() -> &'static SystemConfig {
    &TOTAL_CONFIG.system
}

#[doc = "대시보드 로드 설정 정보"]
pub fn get_dashboard_config_info() -> &'static DashboardConfig {
    &TOTAL_CONFIG.dashboard
}

impl TotalConfig {
    fn new() -> Self {
        match read_toml_from_file::<TotalConfig>(&SERVER_CONFIG_PATH) {
            Ok(config) => config,
            Err(e) => {
                let err_msg = "Failed to convert the data from SERVER_CONFIG_PATH into the TotalConfig structure.";
                error!("[TotalConfig->new] {} {:?}", err_msg, e);
                std::process::exit(1);
            }
        }
    }
}
