extern crate termcolor;

use std::{io::Write, path::Path};
use termcolor::{Color, StandardStream, WriteColor};
use uva::{
    cache::{Cache, Paths, SessionStore},
    error::Result,
    judge::Session,
    submitter::Submitter,
    types::{parse_filename, Language, Verdict},
};

#[allow(unused_must_use)]
pub async fn submit(stdout: &mut StandardStream, paths: &Paths, file: &Path) -> Result<()> {
    let (id, _, ext) = parse_filename(file)?;
    let language = Language::from_extension(&ext)?;
    let session = Session::with_login(&SessionStore::new(paths).load()?)?;
    let cache = Cache::new(paths.clone());
    let submitter = Submitter::new(&session, &cache);

    write_progress!(stdout, "Submit", "Sending code to judge ({})", language);
    let sid = submitter.submit(id, file, language).await?;
    write_progress!(stdout, "Judge", "Waiting for judge result of {}", sid);
    let ret = submitter.wait(&sid).await?;
    match ret.verdict {
        Verdict::Accepted => {
            write_bold!(stdout, Color::Cyan, "✔ Accepted ({:.3}s)\n", ret.run_time);
        }
        v => {
            write_bold!(stdout, Color::Red, "✘ {}\n", v);
        }
    }
    Ok(())
}
