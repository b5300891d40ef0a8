//! Problem catalogue from the uHunt problem list api.
extern crate serde_json;

use super::Session;
use crate::{
    config::url::PROBLEM_LIST,
    error::{network_error, parse_error, Result},
    types::{Catalogue, ProblemInfo},
};
use log::debug;
use serde_json::Value;

const TRUE_ID: usize = 0;
const ID: usize = 1;
const TITLE: usize = 2;
/// Verdict counters, from "no verdict" up to and including "accepted".
const VERDICTS: std::ops::Range<usize> = 6..19;
const ACCEPTED: usize = 18;

fn field_u64(row: &[Value], index: usize) -> Result<u64> {
    row.get(index)
        .and_then(Value::as_u64)
        .ok_or_else(|| parse_error(format!("catalogue column {} is not a number", index)))
}

pub fn parse_row(row: &[Value]) -> Result<ProblemInfo> {
    let total = VERDICTS
        .map(|i| field_u64(row, i))
        .sum::<Result<u64>>()?;
    let accepted = field_u64(row, ACCEPTED)?;
    Ok(ProblemInfo {
        id: field_u64(row, ID)? as u32,
        true_id: field_u64(row, TRUE_ID)? as u32,
        title: row
            .get(TITLE)
            .and_then(Value::as_str)
            .ok_or_else(|| parse_error("catalogue title is not a string"))?
            .to_string(),
        percentage: if total == 0 {
            0.0
        } else {
            (accepted as f64 * 100.0 / total as f64) as f32
        },
        total_submissions: total,
    })
}

pub fn parse_catalogue(rows: &[Vec<Value>]) -> Result<Catalogue> {
    rows.iter()
        .map(|row| parse_row(row).map(|p| (p.id, p)))
        .collect()
}

impl Session {
    pub(super) async fn get_catalogue(&self) -> Result<Catalogue> {
        debug!("GET {}", PROBLEM_LIST);
        let rows: Vec<Vec<Value>> = self
            .client(super::Redirect::Follow)
            .get(PROBLEM_LIST)
            .send()
            .await
            .and_then(reqwest::Response::error_for_status)
            .map_err(network_error)?
            .json()
            .await
            .map_err(network_error)?;
        let ret = parse_catalogue(&rows)?;
        debug!("Crawled {} problems", ret.len());
        Ok(ret)
    }
}
