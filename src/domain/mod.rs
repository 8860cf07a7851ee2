pub mod company_info;
pub mod job_info;
pub mod report;
pub mod search;

pub use company_info::*;
pub use job_info::*;
pub use report::*;
pub use search::*;
