use crate::domain::{
    job_info::{JobInfo, NO_JOB_DESCRIPTION, NO_JOB_POSTINGS, SALARY_NOT_SPECIFIED},
    search::{SearchRequest, SearchResponse},
};

use super::{SearchBackend, SearchError};

pub async fn lookup<B: SearchBackend>(
    backend: &B,
    company_name: &str,
    job_role: &str,
) -> Result<JobInfo, SearchError> {
    log::info!(
        "Searching for the role: {} at {} using the Google Jobs engine...",
        job_role,
        company_name
    );

    let results = backend
        .search(&SearchRequest::jobs(format!("{} {}", job_role, company_name)))
        .await?;

    Ok(extract_job_info(results))
}

/// Reads the first posting only. An api `error` wins over any results.
pub fn extract_job_info(results: SearchResponse) -> JobInfo {
    if let Some(error) = results.error {
        log::error!("Jobs search returned an error: {}", error);
        return match error.is_empty() {
            true => JobInfo::not_found(NO_JOB_POSTINGS),
            false => JobInfo::not_found(error),
        };
    }

    let Some(first_job) = results.jobs_results.into_iter().next() else {
        return JobInfo::not_found(NO_JOB_POSTINGS);
    };

    let salary = first_job
        .detected_extensions
        .and_then(|ext| ext.salary)
        .filter(|salary| !salary.is_empty())
        .unwrap_or_else(|| SALARY_NOT_SPECIFIED.to_string());

    JobInfo {
        summary: first_job
            .description
            .filter(|description| !description.is_empty())
            .unwrap_or_else(|| NO_JOB_DESCRIPTION.to_string()),
        salary,
    }
}
