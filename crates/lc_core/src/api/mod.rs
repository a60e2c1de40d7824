pub mod stats_json;

pub use stats_json::{
    calculate_stats_json, milestone_catalog_json, validate_birth_date_json, StatsRequest,
    StatsResponse, ValidateRequest, ValidateResponse,
};
