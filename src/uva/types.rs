extern crate serde;

use crate::error::{Error, Kind, Result};
use serde::{Deserialize, Serialize};
use std::{collections::BTreeMap, fmt, path::Path};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ProblemInfo {
    pub id: u32,
    pub true_id: u32,
    pub title: String,
    pub percentage: f32,
    pub total_submissions: u64,
}
impl ProblemInfo {
    /// Judge category the problem is filed under, used by the submit form.
    pub fn category(&self) -> u32 {
        self.id / 100
    }
    pub fn accepted(&self) -> u64 {
        (self.total_submissions as f64 * f64::from(self.percentage) / 100.0) as u64
    }
    pub fn filename(&self, ext: &str) -> String {
        format!("{}.{}.{}", self.id, slug(&self.title), ext)
    }
}
impl fmt::Display for ProblemInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} - {}", self.id, self.title)
    }
}

pub type Catalogue = BTreeMap<u32, ProblemInfo>;

fn slug(title: &str) -> String {
    let mut ret = String::with_capacity(title.len());
    for c in title.chars() {
        if c.is_alphanumeric() {
            ret.extend(c.to_lowercase());
        } else if !ret.is_empty() && !ret.ends_with('-') {
            ret.push('-');
        }
    }
    ret.truncate(ret.trim_end_matches('-').len());
    ret
}

/// Splits `<id>.<slug>.<ext>` (the slug may be absent) into its parts.
pub fn parse_filename(path: &Path) -> Result<(u32, String, String)> {
    let name = path
        .file_name()
        .and_then(|x| x.to_str())
        .ok_or_else(|| Error::with_kind(Kind::Filename(path.display().to_string())))?;
    let bad_name = || Error::with_kind(Kind::Filename(name.to_string()));
    let (stem, ext) = name.rsplit_once('.').ok_or_else(bad_name)?;
    let (id, slug) = match stem.split_once('.') {
        Some((id, slug)) => (id, slug),
        None => (stem, ""),
    };
    let id = id.parse::<u32>().map_err(|_| bad_name())?;
    Ok((id, slug.to_string(), ext.to_string()))
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TestVector {
    pub input: String,
    pub output: String,
}
impl TestVector {
    pub fn display_input(&self) -> &str {
        if self.input.is_empty() {
            "<No input>"
        } else {
            self.input.as_str()
        }
    }
}

/// One cookie as the judge set it, with the scope it was set for.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Cookie {
    pub name: String,
    pub value: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub domain: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
}
impl Cookie {
    pub fn new<N: Into<String>, V: Into<String>>(name: N, value: V) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
            domain: None,
            path: None,
        }
    }
    /// Parses a `Set-Cookie` value, keeping `Domain` and `Path`.
    pub fn from_set_cookie(header: &str) -> Option<Self> {
        let mut parts = header.split(';');
        let (name, value) = parts.next()?.trim().split_once('=')?;
        if name.trim().is_empty() {
            return None;
        }
        let mut ret = Self::new(name.trim(), value.trim());
        for attr in parts {
            let attr = attr.trim();
            let (key, val) = attr.split_once('=').unwrap_or((attr, ""));
            match key.trim().to_ascii_lowercase().as_str() {
                "domain" => ret.domain = Some(val.trim().trim_start_matches('.').to_string()),
                "path" => ret.path = Some(val.trim().to_string()),
                _ => (),
            }
        }
        Some(ret)
    }
    /// `Set-Cookie` value that puts the cookie back under its original scope.
    pub fn to_set_cookie(&self) -> String {
        let mut ret = format!(
            "{}={}; Path={}",
            self.name,
            self.value,
            self.path.as_deref().unwrap_or("/")
        );
        if let Some(domain) = &self.domain {
            ret.push_str("; Domain=");
            ret.push_str(domain);
        }
        ret
    }
    pub(crate) fn same_slot(&self, other: &Cookie) -> bool {
        self.name == other.name && self.domain == other.domain && self.path == other.path
    }
}
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct LoginInfo {
    pub username: String,
    pub cookies: Vec<Cookie>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Language {
    AnsiC,
    Java,
    Cpp,
    Pascal,
    Python3,
}
impl Language {
    pub fn from_extension(ext: &str) -> Result<Self> {
        match ext {
            "c" => Ok(Self::AnsiC),
            "java" => Ok(Self::Java),
            "cc" | "cpp" => Ok(Self::Cpp),
            "pas" => Ok(Self::Pascal),
            "py" => Ok(Self::Python3),
            _ => Err(Error::with_kind(Kind::Language(ext.to_string()))),
        }
    }
    /// Language code expected by the submission form.
    pub fn code(self) -> u32 {
        match self {
            Self::AnsiC => 1,
            Self::Java => 2,
            Self::Cpp => 3,
            Self::Pascal => 4,
            Self::Python3 => 6,
        }
    }
}
impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::AnsiC => "ANSI C",
            Self::Java => "Java",
            Self::Cpp => "C++",
            Self::Pascal => "Pascal",
            Self::Python3 => "Python 3",
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Verdict {
    Queued,
    Accepted,
    Rejected(String),
}
impl Verdict {
    pub fn from_text(text: &str) -> Self {
        match text.trim() {
            crate::config::submit::QUEUED => Self::Queued,
            "Accepted" => Self::Accepted,
            other => Self::Rejected(other.to_string()),
        }
    }
}
impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Queued => f.write_str(crate::config::submit::QUEUED),
            Self::Accepted => f.write_str("Accepted"),
            Self::Rejected(v) => f.write_str(v),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Submission {
    pub id: String,
    pub verdict: Verdict,
    pub run_time: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn info() -> ProblemInfo {
        ProblemInfo {
            id: 100,
            true_id: 36,
            title: "The 3n + 1 problem".to_string(),
            percentage: 25.0,
            total_submissions: 1000,
        }
    }

    #[test]
    fn filename_round_trips_through_parse() {
        let name = info().filename("cc");
        assert_eq!(name, "100.the-3n-1-problem.cc");
        let (id, slug, ext) = parse_filename(Path::new(&name)).unwrap();
        assert_eq!((id, slug.as_str(), ext.as_str()), (100, "the-3n-1-problem", "cc"));
    }

    #[test]
    fn parse_filename_accepts_directories_and_bare_ids() {
        let (id, slug, ext) = parse_filename(Path::new("work/10055.py")).unwrap();
        assert_eq!((id, slug.as_str(), ext.as_str()), (10055, "", "py"));
        assert!(parse_filename(Path::new("solution.cc")).is_err());
        assert!(parse_filename(Path::new("100")).is_err());
    }

    #[test]
    fn set_cookie_scope_is_kept() {
        let c = Cookie::from_set_cookie(
            "remember=x=y; expires=Fri, 01-Jan-2038 00:00:00 GMT; path=/; domain=.onlinejudge.org; HttpOnly",
        )
        .unwrap();
        assert_eq!(c.name, "remember");
        assert_eq!(c.value, "x=y");
        assert_eq!(c.domain.as_deref(), Some("onlinejudge.org"));
        assert_eq!(c.path.as_deref(), Some("/"));
        assert_eq!(c.to_set_cookie(), "remember=x=y; Path=/; Domain=onlinejudge.org");
        assert_eq!(Cookie::new("sid", "abc").to_set_cookie(), "sid=abc; Path=/");
        assert!(Cookie::from_set_cookie("=abc; path=/").is_none());
        assert!(Cookie::from_set_cookie("HttpOnly").is_none());
    }

    #[test]
    fn category_and_accepted() {
        assert_eq!(info().category(), 1);
        assert_eq!(info().accepted(), 250);
    }

    #[test]
    fn language_codes() {
        assert_eq!(Language::from_extension("cpp").unwrap().code(), 3);
        assert_eq!(Language::from_extension("py").unwrap(), Language::Python3);
        assert!(Language::from_extension("rs").is_err());
    }

    #[test]
    fn verdict_text() {
        assert_eq!(Verdict::from_text(" In judge queue "), Verdict::Queued);
        assert_eq!(Verdict::from_text("Accepted"), Verdict::Accepted);
        assert_eq!(
            Verdict::from_text("Wrong answer"),
            Verdict::Rejected("Wrong answer".to_string())
        );
    }

    #[test]
    fn empty_input_marker() {
        let v = TestVector {
            input: String::new(),
            output: "1\n".to_string(),
        };
        assert_eq!(v.display_input(), "<No input>");
    }
}
