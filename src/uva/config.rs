pub mod url {
    pub const BASE: &str = "https://onlinejudge.org";
    pub const PROBLEM_LIST: &str = "https://uhunt.onlinejudge.org/api/p";
    pub const UDEBUG: &str = "https://www.udebug.com";
    pub const UDEBUG_JUDGE: &str = "UVa";
}
pub mod submit {
    use std::time::Duration;
    pub const POLL_DELAY: Duration = Duration::from_secs(1);
    pub const QUEUED: &str = "In judge queue";
    pub const ID_MARKER: &str = "Submission+received+with+ID+";
}
pub mod session {
    pub const VERBOSE: bool = false;
}
pub mod storage {
    pub const DIR: &str = "uva-cli";
    pub const HOME_ENV: &str = "UVA_CLI_HOME";
    pub const PROBLEMS_FILE: &str = "problems-info.yml.gz";
    pub const LOGIN_FILE: &str = "login-info.yml.gz";
    pub const VECTOR_EXT: &str = "yml.gz";
    pub const PDF_DIR: &str = "pdf";
    pub const TEST_DATA_DIR: &str = "test-data";
    pub const TEMPLATE_DIR: &str = "templates";
    pub const BUILD_DIR: &str = "build";
}
