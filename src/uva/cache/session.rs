use super::Paths;
use crate::{
    encoding,
    error::{Error, Kind, Result},
    types::LoginInfo,
};
use std::path::PathBuf;

/// Saved login of the local user.
pub struct SessionStore {
    path: PathBuf,
}
impl SessionStore {
    pub fn new(paths: &Paths) -> Self {
        Self {
            path: paths.login_file(),
        }
    }
    pub fn load(&self) -> Result<LoginInfo> {
        encoding::load(&self.path)?.ok_or_else(|| Error::with_kind(Kind::NotAuthenticated))
    }
    pub fn save(&self, info: &LoginInfo) -> Result<()> {
        encoding::store(&self.path, info)
    }
    pub fn clear(&self) -> Result<()> {
        encoding::remove(&self.path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{error::ErrorKind, types::Cookie};
    use tempfile::TempDir;

    #[test]
    fn login_lifecycle() {
        let dir = TempDir::new().unwrap();
        let store = SessionStore::new(&Paths::new(dir.path()));
        assert_eq!(store.load().unwrap_err().kind(), ErrorKind::NotAuthenticated);

        let info = LoginInfo {
            username: "alice".to_string(),
            cookies: vec![Cookie::from_set_cookie("sid=abc; Path=/; Domain=onlinejudge.org").unwrap()],
        };
        store.save(&info).unwrap();
        assert_eq!(store.load().unwrap(), info);

        store.clear().unwrap();
        assert_eq!(store.load().unwrap_err().kind(), ErrorKind::NotAuthenticated);
    }
}
