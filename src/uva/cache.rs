//! Local persistent caches.
//!
//! Every record is fetched from the judge on first use and served from disk
//! afterwards. Nothing is ever refreshed; deleting a file is the only way to
//! force a new fetch.
use crate::{
    config::storage::{
        BUILD_DIR, DIR, HOME_ENV, LOGIN_FILE, PDF_DIR, PROBLEMS_FILE, TEMPLATE_DIR,
        TEST_DATA_DIR, VECTOR_EXT,
    },
    error::{persistence_error, Result},
    types::ProblemInfo,
};
use std::{
    env, io,
    path::{Path, PathBuf},
};

pub mod meta;
pub mod session;
pub mod statement;
pub mod vector;

pub use session::SessionStore;

#[derive(Debug, Clone)]
pub struct Paths {
    root: PathBuf,
}
impl Paths {
    pub fn new<P: Into<PathBuf>>(root: P) -> Self {
        Self { root: root.into() }
    }
    /// `$UVA_CLI_HOME`, else `$XDG_DATA_HOME/uva-cli`, else `~/.local/share/uva-cli`.
    pub fn from_env() -> Result<Self> {
        if let Some(p) = env::var_os(HOME_ENV) {
            return Ok(Self::new(p));
        }
        if let Some(p) = env::var_os("XDG_DATA_HOME") {
            return Ok(Self::new(Path::new(&p).join(DIR)));
        }
        env::var_os("HOME")
            .map(|home| Self::new(Path::new(&home).join(".local/share").join(DIR)))
            .ok_or_else(|| {
                persistence_error("$HOME")(io::Error::new(
                    io::ErrorKind::NotFound,
                    "can't locate the data directory",
                ))
            })
    }
    pub fn root(&self) -> &Path {
        &self.root
    }
    pub fn problems_file(&self) -> PathBuf {
        self.root.join(PROBLEMS_FILE)
    }
    pub fn login_file(&self) -> PathBuf {
        self.root.join(LOGIN_FILE)
    }
    pub fn test_data_file(&self, info: &ProblemInfo) -> PathBuf {
        self.root.join(TEST_DATA_DIR).join(info.filename(VECTOR_EXT))
    }
    pub fn pdf_file(&self, info: &ProblemInfo) -> PathBuf {
        self.root.join(PDF_DIR).join(info.filename("pdf"))
    }
    pub fn template_file(&self, ext: &str) -> PathBuf {
        self.root.join(TEMPLATE_DIR).join(format!("{}.hbs", ext))
    }
    pub fn build_dir(&self) -> PathBuf {
        self.root.join(BUILD_DIR)
    }
}

/// Problem metadata, test vectors and statements, all keyed by problem id.
pub struct Cache {
    paths: Paths,
}
impl Cache {
    pub fn new(paths: Paths) -> Self {
        Self { paths }
    }
    pub fn paths(&self) -> &Paths {
        &self.paths
    }
}
