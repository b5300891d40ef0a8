//! Submission pipeline: post a solution, then poll the listing page until
//! the judge leaves the queue.
extern crate regex;
extern crate tokio;

use crate::{
    cache::Cache,
    config::submit::{ID_MARKER, POLL_DELAY},
    error::{persistence_error, Error, Kind, Result},
    judge::{search::HtmlRegex, Judge, SubmitForm},
    types::{Language, Submission, Verdict},
};
use log::{debug, warn};
use regex::Regex;
use std::{path::Path, time::Duration};
use tokio::time::sleep;

const ID_COLUMN: usize = 0;
const VERDICT_COLUMN: usize = 3;
const RUN_TIME_COLUMN: usize = 5;

pub(crate) struct RegexSet {
    submission_id: Regex,
    listing: Regex,
    row: Regex,
    cell: Regex,
    html: HtmlRegex,
}
impl RegexSet {
    pub(crate) fn new() -> Self {
        Self {
            submission_id: Regex::new(&format!(r"{}(\d+)", regex::escape(ID_MARKER))).unwrap(),
            listing: Regex::new(r#"id\s*=\s*"col3_content_wrapper""#).unwrap(),
            row: Regex::new(r"(?is)<tr[^>]*>(.*?)</tr>").unwrap(),
            cell: Regex::new(r"(?is)<td[^>]*>(.*?)</td>").unwrap(),
            html: HtmlRegex::new(),
        }
    }
    pub(crate) fn submission_id(&self, location: &str) -> Result<String> {
        self.submission_id
            .captures(location)
            .and_then(|c| c.get(1))
            .map(|m| m.as_str().to_string())
            .ok_or_else(|| Error::with_description(Kind::SubmissionIdNotFound, location))
    }
    /// Cells of the first result row, i.e. the first row whose id column is a number.
    pub(crate) fn latest_row(&self, page: &str) -> Result<Vec<String>> {
        let start = self.listing.find(page).map_or(0, |m| m.end());
        self.row
            .captures_iter(&page[start..])
            .filter_map(|row| {
                let cells: Vec<String> = self
                    .cell
                    .captures_iter(row.get(1)?.as_str())
                    .filter_map(|c| c.get(1))
                    .map(|c| self.html.text(c.as_str()).trim().to_string())
                    .collect();
                let id = cells.get(ID_COLUMN)?;
                if !id.is_empty() && id.bytes().all(|b| b.is_ascii_digit()) {
                    Some(cells)
                } else {
                    None
                }
            })
            .next()
            .ok_or_else(|| Error::with_description(Kind::Parse, "no submission listed"))
    }
}

pub struct Submitter<'a, J: Judge + ?Sized> {
    judge: &'a J,
    cache: &'a Cache,
    delay: Duration,
    regex: RegexSet,
}
impl<'a, J: Judge + ?Sized> Submitter<'a, J> {
    pub fn new(judge: &'a J, cache: &'a Cache) -> Self {
        Self::with_delay(judge, cache, POLL_DELAY)
    }
    pub fn with_delay(judge: &'a J, cache: &'a Cache, delay: Duration) -> Self {
        Self {
            judge,
            cache,
            delay,
            regex: RegexSet::new(),
        }
    }

    /// Posts `file` as a solution to `problem` and returns the submission id.
    pub async fn submit(&self, problem: u32, file: &Path, language: Language) -> Result<String> {
        let info = self.cache.problem_info(self.judge, problem).await?;
        let raw = tokio::fs::read(file).await.map_err(persistence_error(file))?;
        let code = String::from_utf8_lossy(&raw);
        let location = self
            .judge
            .post_submission(&SubmitForm {
                problem_id: info.true_id,
                category: info.category(),
                language: language.code(),
                code: &code,
            })
            .await?;
        let id = self.regex.submission_id(&location)?;
        debug!("Submitted {} as {} ({})", info, id, language);
        Ok(id)
    }

    /// Reads the verdict of `id`, which must still be the latest submission.
    pub async fn poll(&self, id: &str) -> Result<Submission> {
        let row = self.regex.latest_row(&self.judge.submissions_page().await?)?;
        if row[ID_COLUMN] != id {
            return Err(Error::with_kind(Kind::StaleSubmission {
                expected: id.to_string(),
                found: row[ID_COLUMN].clone(),
            }));
        }
        let cell = |index: usize| {
            row.get(index).map(String::as_str).ok_or_else(|| {
                Error::with_description(Kind::Parse, format!("submission row has no column {}", index))
            })
        };
        let verdict = Verdict::from_text(cell(VERDICT_COLUMN)?);
        let run_time_text = cell(RUN_TIME_COLUMN)?;
        let run_time = run_time_text.parse::<f64>().unwrap_or_else(|_| {
            warn!("Can't parse run time {:?} of {}", run_time_text, id);
            0.0
        });
        debug!("Submission {}: {} ({})", id, verdict, run_time_text);
        Ok(Submission {
            id: id.to_string(),
            verdict,
            run_time,
        })
    }

    /// Polls until the submission leaves the judge queue. Never times out.
    pub async fn wait(&self, id: &str) -> Result<Submission> {
        loop {
            let ret = self.poll(id).await?;
            if ret.verdict != Verdict::Queued {
                return Ok(ret);
            }
            sleep(self.delay).await;
        }
    }

    pub async fn run(&self, problem: u32, file: &Path, language: Language) -> Result<Submission> {
        let id = self.submit(problem, file, language).await?;
        self.wait(&id).await
    }
}
