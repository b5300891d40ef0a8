//! Remote judge boundary.
//!
//! Everything that talks to onlinejudge.org, uHunt or uDebug goes through the
//! [`Judge`] trait, so the caches and the submission pipeline never touch HTTP
//! directly. [`Session`] is the real implementation.
extern crate async_trait;

pub mod catalogue;
pub(crate) mod search;
pub mod session;
pub mod submit;
pub mod udebug;

#[cfg(test)]
pub(crate) mod fake;

use crate::{
    error::Result,
    types::{Catalogue, TestVector},
};
use async_trait::async_trait;

pub use session::{Redirect, Session};
pub use submit::SubmitForm;

#[async_trait(?Send)]
pub trait Judge {
    /// Fetches the whole problem catalogue in one pass.
    async fn crawl_catalogue(&self) -> Result<Catalogue>;
    /// Fetches one sample input and its accepted output.
    async fn crawl_test_vector(&self, id: u32) -> Result<TestVector>;
    /// Posts a solution and returns the redirect target of the response,
    /// empty if the judge sent none.
    async fn post_submission(&self, form: &SubmitForm<'_>) -> Result<String>;
    /// Returns the html of the user's submission listing.
    async fn submissions_page(&self) -> Result<String>;
    /// Downloads the problem statement pdf.
    async fn fetch_statement(&self, id: u32) -> Result<Vec<u8>>;
}
