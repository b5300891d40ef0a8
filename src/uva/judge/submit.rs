extern crate async_trait;

use super::{session::location, Judge, Redirect, Session};
use crate::{
    error::{network_error, Result},
    types::{Catalogue, TestVector},
};
use async_trait::async_trait;
use log::{debug, warn};
use serde::Serialize;

const SUBMIT_PATH: &str = "/index.php?option=com_onlinejudge&Itemid=8&page=save_submission";
const SUBMISSIONS_PATH: &str = "/index.php?option=com_onlinejudge&Itemid=9";

/// Fields of the judge's submission form.
#[derive(Debug, Serialize, PartialEq)]
pub struct SubmitForm<'a> {
    #[serde(rename = "problemid")]
    pub problem_id: u32,
    pub category: u32,
    pub language: u32,
    pub code: &'a str,
}

fn statement_url(id: u32) -> String {
    format!("{}/external/{}/p{}.pdf", crate::config::url::BASE, id / 100, id)
}

#[async_trait(?Send)]
impl Judge for Session {
    async fn crawl_catalogue(&self) -> Result<Catalogue> {
        self.get_catalogue().await
    }
    async fn crawl_test_vector(&self, id: u32) -> Result<TestVector> {
        self.get_test_vector(id).await
    }
    async fn post_submission(&self, form: &SubmitForm<'_>) -> Result<String> {
        let response = self
            .post_form(&self.url(SUBMIT_PATH), form, Redirect::Stop)
            .await?;
        let ret = location(&response);
        if ret.is_empty() {
            warn!("Submission response {} has no location", response.status());
        } else {
            debug!("Submission redirected to {}", ret);
        }
        Ok(ret)
    }
    async fn submissions_page(&self) -> Result<String> {
        self.get_text(&self.url(SUBMISSIONS_PATH)).await
    }
    async fn fetch_statement(&self, id: u32) -> Result<Vec<u8>> {
        let url = statement_url(id);
        debug!("GET {}", url);
        Ok(self
            .client(Redirect::Follow)
            .get(&url)
            .send()
            .await
            .and_then(reqwest::Response::error_for_status)
            .map_err(network_error)?
            .bytes()
            .await
            .map_err(network_error)?
            .to_vec())
    }
}
