use std::path::Path;

use reqwest::{Method, StatusCode};
use tracing::info;
use uipath_domain::{Job, Response, StartJobs, StopJob};

use super::SERVER_CONFIGURATION;
use crate::client::UiPath;
use crate::errors::Result;

impl UiPath {
    /// List jobs of folder `fid` matching the OData `filter`, e.g.
    /// `State eq 'Faulted'`
    pub async fn list_jobs(
        &self,
        fid: &str,
        filter: &str,
        save_as: Option<&Path>,
    ) -> Result<Response<Vec<Job>>> {
        info!(folder = fid, filter, "Retrieving jobs using the provided filter criteria");
        self.fetch_list("odata/Jobs", Some(fid), Some(filter), save_as).await
    }

    /// Start the release `process_key`, on `robot_id` if given, otherwise
    /// once on whichever robot is available
    pub async fn start_job(
        &self,
        fid: &str,
        process_key: &str,
        robot_id: Option<i64>,
    ) -> Result<Response> {
        info!(folder = fid, process_key, ?robot_id, "Starting a job");
        let body = StartJobs::new(process_key, robot_id);
        let path = format!("odata/Jobs/{SERVER_CONFIGURATION}.StartJobs");
        let builder = self.request(Method::POST, &path, Some(fid))?.json(&body);
        self.send_expecting(builder, StatusCode::CREATED).await
    }

    /// Kill the job `id`
    pub async fn stop_job(&self, fid: &str, id: i64) -> Result<Response> {
        info!(folder = fid, job = id, "Stopping the job");
        let path = format!("odata/Jobs({id})/{SERVER_CONFIGURATION}.StopJob");
        let builder = self
            .request(Method::POST, &path, Some(fid))?
            .json(&StopJob::kill());
        self.send_expecting(builder, StatusCode::OK).await
    }
}
