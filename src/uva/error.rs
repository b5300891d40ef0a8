extern crate handlebars;
extern crate reqwest;
extern crate serde_yaml;

use std::{
    boxed::Box, convert::Into, error::Error as StdError, fmt, io, path::PathBuf,
    process::ExitStatus, result::Result as StdResult,
};

#[derive(Debug)]
pub(crate) enum Kind {
    NotAuthenticated,
    NotFound(u32),
    SubmissionIdNotFound,
    StaleSubmission { expected: String, found: String },
    BuildFailed(ExitStatus),
    ExecutionFailed(ExitStatus),
    ToolFailure(String, Option<i32>),
    Persistence(PathBuf, io::Error),
    Encoding(PathBuf, serde_yaml::Error),
    Process(String, io::Error),
    Network(reqwest::Error),
    Parse,
    Login,
    Filename(String),
    Language(String),
    Template(handlebars::TemplateRenderError),
}

/// Field-less mirror of the internal kind, for callers that branch on it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    NotAuthenticated,
    NotFound,
    SubmissionIdNotFound,
    StaleSubmission,
    BuildFailed,
    ExecutionFailed,
    ToolFailure,
    PersistenceFailure,
    Process,
    Network,
    Parse,
    Login,
    Filename,
    Language,
    Template,
}

#[derive(Debug)]
struct Inner {
    kind: Kind,
    description: Option<String>,
}

#[derive(Debug)]
pub struct Error(Box<Inner>);

pub type Result<T> = StdResult<T, Error>;

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.0.kind {
            Kind::NotAuthenticated => write!(f, "You are not logged in yet")?,
            Kind::NotFound(id) => write!(f, "Problem {} not found", id)?,
            Kind::SubmissionIdNotFound => write!(f, "Can't find submission id in judge response")?,
            Kind::StaleSubmission { expected, found } => write!(
                f,
                "Submission {} is no longer the latest one (found {})",
                expected, found
            )?,
            Kind::BuildFailed(status) => write!(f, "Build failed: {}", status)?,
            Kind::ExecutionFailed(status) => write!(f, "Program exited abnormally: {}", status)?,
            Kind::ToolFailure(program, Some(code)) => {
                write!(f, "{} exited with code {}", program, code)?
            }
            Kind::ToolFailure(program, None) => write!(f, "{} terminated by signal", program)?,
            Kind::Persistence(path, err) => write!(f, "Error accessing {}: {}", path.display(), err)?,
            Kind::Encoding(path, err) => write!(f, "Error processing {}: {}", path.display(), err)?,
            Kind::Process(program, err) => write!(f, "Error launching {}: {}", program, err)?,
            Kind::Network(err) => write!(f, "Error sending request: {}", err)?,
            Kind::Parse => write!(f, "Unexpected response from judge")?,
            Kind::Login => write!(f, "Failed to log into onlinejudge.org")?,
            Kind::Filename(name) => write!(f, "Can't parse file name {}", name)?,
            Kind::Language(ext) => write!(f, "Unsupported language {}", ext)?,
            Kind::Template(err) => write!(f, "Error rendering template: {}", err)?,
        };
        self.write_description(f)
    }
}
impl StdError for Error {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        match &self.0.kind {
            Kind::Persistence(_, e) | Kind::Process(_, e) => Some(e),
            Kind::Encoding(_, e) => Some(e),
            Kind::Network(e) => Some(e),
            Kind::Template(e) => Some(e),
            _ => None,
        }
    }
}
impl Error {
    pub(crate) fn with_kind(kind: Kind) -> Self {
        Self(Box::new(Inner {
            kind,
            description: None,
        }))
    }
    pub(crate) fn with_description<T: Into<String>>(kind: Kind, description: T) -> Self {
        Self(Box::new(Inner {
            kind,
            description: Some(description.into()),
        }))
    }
    fn write_description(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(d) = &self.0.description {
            write!(f, ": {}", d)
        } else {
            Ok(())
        }
    }

    pub fn kind(&self) -> ErrorKind {
        match &self.0.kind {
            Kind::NotAuthenticated => ErrorKind::NotAuthenticated,
            Kind::NotFound(_) => ErrorKind::NotFound,
            Kind::SubmissionIdNotFound => ErrorKind::SubmissionIdNotFound,
            Kind::StaleSubmission { .. } => ErrorKind::StaleSubmission,
            Kind::BuildFailed(_) => ErrorKind::BuildFailed,
            Kind::ExecutionFailed(_) => ErrorKind::ExecutionFailed,
            Kind::ToolFailure(..) => ErrorKind::ToolFailure,
            Kind::Persistence(..) | Kind::Encoding(..) => ErrorKind::PersistenceFailure,
            Kind::Process(..) => ErrorKind::Process,
            Kind::Network(_) => ErrorKind::Network,
            Kind::Parse => ErrorKind::Parse,
            Kind::Login => ErrorKind::Login,
            Kind::Filename(_) => ErrorKind::Filename,
            Kind::Language(_) => ErrorKind::Language,
            Kind::Template(_) => ErrorKind::Template,
        }
    }
}

pub fn tool_failure<P: Into<String>>(program: P, status: ExitStatus) -> Error {
    Error::with_kind(Kind::ToolFailure(program.into(), status.code()))
}
pub(crate) fn network_error(err: reqwest::Error) -> Error {
    Error::with_kind(Kind::Network(err))
}
pub(crate) fn parse_error<T: Into<String>>(description: T) -> Error {
    Error::with_description(Kind::Parse, description)
}
pub fn persistence_error<P: Into<PathBuf>>(path: P) -> impl FnOnce(io::Error) -> Error {
    let path = path.into();
    move |err| Error::with_kind(Kind::Persistence(path, err))
}
pub(crate) fn encoding_error<P: Into<PathBuf>>(path: P) -> impl FnOnce(serde_yaml::Error) -> Error {
    let path = path.into();
    move |err| Error::with_kind(Kind::Encoding(path, err))
}
pub fn process_error<P: Into<String>>(program: P) -> impl FnOnce(io::Error) -> Error {
    let program = program.into();
    move |err| Error::with_kind(Kind::Process(program, err))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stale_submission_message_names_both_ids() {
        let err = Error::with_kind(Kind::StaleSubmission {
            expected: "100".to_string(),
            found: "101".to_string(),
        });
        assert_eq!(err.kind(), ErrorKind::StaleSubmission);
        let text = err.to_string();
        assert!(text.contains("100") && text.contains("101"));
    }

    #[test]
    fn description_is_appended() {
        let err = parse_error("no catalogue rows");
        assert_eq!(err.kind(), ErrorKind::Parse);
        assert_eq!(err.to_string(), "Unexpected response from judge: no catalogue rows");
    }
}
