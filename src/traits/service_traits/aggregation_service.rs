use crate::common::*;

use crate::dto::dashboard_snapshot::*;

use crate::model::records::{media_record::*, stat_record::*, user_account::*};

pub trait AggregationService {
    fn build_day_keys(&self, reference_day: NaiveDate) -> Vec<String>;

    fn bucket_by_day<R, F>(&self, records: &[R], day_keys: &[String], date_extractor: F) -> Vec<u64>
    where
        F: Fn(&R) -> Option<String>;

    fn sum_view_history(&self, media_records: &[MediaRecord], day_keys: &[String]) -> Vec<u64>;

    fn build_dashboard_snapshot(
        &self,
        user_account: &UserAccount,
        stat_records: &[StatRecord],
        media_records: &[MediaRecord],
        reference_day: NaiveDate,
    ) -> DashboardSnapshot;
}
