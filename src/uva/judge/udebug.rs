//! Sample test vectors from uDebug.
extern crate regex;
extern crate serde;

use super::{
    search::{search_text, unescape},
    Redirect, Session,
};
use crate::{
    config::url::{UDEBUG, UDEBUG_JUDGE},
    error::{network_error, parse_error, Result},
    types::TestVector,
};
use log::debug;
use regex::Regex;
use serde::Deserialize;

const INPUT_API: &str = "/udebug-custom-get-selected-input-ajax";
const GET_OUTPUT: &str = "Get Accepted Output";

pub(super) struct RegexSet {
    input_id: Regex,
    output: Regex,
}
impl RegexSet {
    pub(super) fn new() -> Self {
        Self {
            input_id: Regex::new(r#"class\s*=\s*"input_desc"[^>]*data-id\s*=\s*['"]?(\d+)"#)
                .unwrap(),
            output: Regex::new(r#"(?s)<textarea[^>]*id\s*=\s*"edit-output-data"[^>]*>(.*?)</textarea>"#)
                .unwrap(),
        }
    }
    fn first_input(&self, page: &str) -> Result<String> {
        search_text(page, &self.input_id)
            .ok_or_else(|| parse_error("uDebug lists no sample input"))
    }
    fn output(&self, page: &str) -> Result<String> {
        search_text(page, &self.output)
            .map(|x| unescape(&x))
            .ok_or_else(|| parse_error("uDebug returned no accepted output"))
    }
}

#[derive(Deserialize)]
struct InputValue {
    input_value: String,
}

fn problem_url(id: u32) -> String {
    format!("{}/{}/{}", UDEBUG, UDEBUG_JUDGE, id)
}

impl Session {
    pub(super) async fn get_test_vector(&self, id: u32) -> Result<TestVector> {
        let regex = RegexSet::new();
        let url = problem_url(id);
        let page = self.get_text(&url).await?;
        let input_id = regex.first_input(&page)?;
        debug!("uDebug input {} for problem {}", input_id, id);

        let input = self
            .post_form(
                &format!("{}{}", UDEBUG, INPUT_API),
                &[("input_nid", input_id.as_str())],
                Redirect::Follow,
            )
            .await?
            .error_for_status()
            .map_err(network_error)?
            .json::<InputValue>()
            .await
            .map_err(network_error)?
            .input_value;

        let mut form = self.regex.html.hidden_fields(&page);
        form.push(("input_data".to_string(), input.clone()));
        form.push(("op".to_string(), GET_OUTPUT.to_string()));
        let body = self
            .post_form(&url, &form, Redirect::Follow)
            .await?
            .error_for_status()
            .map_err(network_error)?
            .text()
            .await
            .map_err(network_error)?;
        Ok(TestVector {
            input,
            output: regex.output(&body)?,
        })
    }
}
