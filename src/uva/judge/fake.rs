extern crate async_trait;

use super::{Judge, SubmitForm};
use crate::{
    error::{parse_error, Result},
    types::{Catalogue, ProblemInfo, TestVector},
};
use async_trait::async_trait;
use std::{
    cell::{Cell, RefCell},
    collections::VecDeque,
};

/// In-memory judge that records how it was used.
#[derive(Default)]
pub struct FakeJudge {
    pub catalogue: Catalogue,
    pub vector: Option<TestVector>,
    pub location: String,
    pub pages: RefCell<VecDeque<String>>,
    pub catalogue_calls: Cell<usize>,
    pub vector_calls: Cell<usize>,
    pub page_calls: Cell<usize>,
    pub posted: RefCell<Vec<(u32, u32, u32, String)>>,
}

pub fn problem(id: u32, true_id: u32, title: &str) -> ProblemInfo {
    ProblemInfo {
        id,
        true_id,
        title: title.to_string(),
        percentage: 42.5,
        total_submissions: 1234,
    }
}

/// A submissions listing whose first data row carries the given cells.
pub fn submissions_page(id: &str, verdict: &str, run_time: &str) -> String {
    format!(
        r#"<div id="col3_content_wrapper"><h1>My Submissions</h1>
<table cellpadding="4" cellspacing="0" border="0" width="100%">
<tr class="sectiontableheader"><td>#</td><td>Problem</td><td>Title</td><td>Verdict</td><td>Language</td><td>Run Time</td><td>Submission Date</td></tr>
<tr class="sectiontableentry1"><td>{}</td><td align="right"><a href="index.php?option=com_onlinejudge&amp;Itemid=8&amp;page=show_problem&amp;problem=36">100</a></td><td><a href="x">The 3n + 1 problem</a></td><td>{}</td><td>C++11</td><td>{}</td><td>2021-04-01 10:00:00</td></tr>
<tr class="sectiontableentry2"><td>1</td><td>100</td><td>x</td><td>Accepted</td><td>C++11</td><td>0.100</td><td>2021-03-01 10:00:00</td></tr>
</table></div>"#,
        id, verdict, run_time
    )
}

impl FakeJudge {
    pub fn with_problems<I: IntoIterator<Item = ProblemInfo>>(problems: I) -> Self {
        Self {
            catalogue: problems.into_iter().map(|p| (p.id, p)).collect(),
            ..Self::default()
        }
    }
}

#[async_trait(?Send)]
impl Judge for FakeJudge {
    async fn crawl_catalogue(&self) -> Result<Catalogue> {
        self.catalogue_calls.set(self.catalogue_calls.get() + 1);
        Ok(self.catalogue.clone())
    }
    async fn crawl_test_vector(&self, _id: u32) -> Result<TestVector> {
        self.vector_calls.set(self.vector_calls.get() + 1);
        self.vector
            .clone()
            .ok_or_else(|| parse_error("no sample input"))
    }
    async fn post_submission(&self, form: &SubmitForm<'_>) -> Result<String> {
        self.posted.borrow_mut().push((
            form.problem_id,
            form.category,
            form.language,
            form.code.to_string(),
        ));
        Ok(self.location.clone())
    }
    async fn submissions_page(&self) -> Result<String> {
        self.page_calls.set(self.page_calls.get() + 1);
        self.pages
            .borrow_mut()
            .pop_front()
            .ok_or_else(|| parse_error("no more pages"))
    }
    async fn fetch_statement(&self, id: u32) -> Result<Vec<u8>> {
        Ok(format!("%PDF statement {}", id).into_bytes())
    }
}
