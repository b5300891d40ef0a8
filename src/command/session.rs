extern crate termcolor;

use crate::{
    read::{read_nonempty, read_password},
    write::write_result,
};
use std::io::Write;
use termcolor::{Color, StandardStream};
use uva::{
    cache::{Paths, SessionStore},
    error::{ErrorKind, Result},
    judge::Session,
};

/// Saved login if there is one, otherwise an anonymous session.
pub fn current_session(paths: &Paths) -> Result<Session> {
    match SessionStore::new(paths).load() {
        Ok(info) => Session::with_login(&info),
        Err(e) if e.kind() == ErrorKind::NotAuthenticated => Session::anonymous(),
        Err(e) => Err(e),
    }
}

#[allow(unused_must_use)]
pub async fn login(stdout: &mut StandardStream, paths: &Paths) -> Result<()> {
    let username = read_nonempty(stdout, "Username: ")?;
    let password = read_password(stdout, "Password: ")?;
    write_progress!(stdout, "Login", "Logging into onlinejudge.org as {}", username);
    let info = Session::anonymous()?
        .login(username.as_str(), password.as_str())
        .await?;
    write_result(
        stdout,
        SessionStore::new(paths).save(&info),
        &format!("Logged in as {}", info.username),
    )
}

#[allow(unused_must_use)]
pub fn logout(stdout: &mut StandardStream, paths: &Paths) -> Result<()> {
    write_result(stdout, SessionStore::new(paths).clear(), "Logged out")
}

#[allow(unused_must_use)]
pub fn whoami(stdout: &mut StandardStream, paths: &Paths) -> Result<()> {
    let info = SessionStore::new(paths).load()?;
    write_info!(stdout, "User", "You are now logged in as {}", info.username);
    Ok(())
}
