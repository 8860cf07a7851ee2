pub mod company_lookup;
pub mod job_lookup;
pub mod serp_client;

pub use serp_client::*;
