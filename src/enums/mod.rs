pub mod actor_role;
pub mod plan_tier;
