extern crate termcolor;

use super::session::current_session;
use std::{io::Write, path::Path};
use termcolor::{Color, StandardStream, WriteColor};
use uva::{
    cache::{Cache, Paths},
    error::Result,
    tester::{test_file, Outcome},
};

#[allow(unused_must_use)]
pub async fn test(
    stdout: &mut StandardStream,
    paths: &Paths,
    file: &Path,
    show_input: bool,
) -> Result<()> {
    let session = current_session(paths)?;
    let cache = Cache::new(paths.clone());
    let color = stdout.supports_color();

    write_progress!(stdout, "Test", "Building and running {}", file.display());
    let report = test_file(&session, &cache, file, color).await?;
    write_info!(stdout, "Language", "{}", report.language);
    if let Some(w) = &report.warnings {
        write_bold!(stdout, Color::Magenta, "✘ Warnings\n\n");
        write!(stdout, "{}", w);
    }
    if show_input {
        write_bold!(stdout, Color::Green, "Input data:\n");
        writeln!(stdout, "{}", report.vector.display_input());
    }
    match &report.run.outcome {
        Outcome::Accepted => {
            write_bold!(
                stdout,
                Color::Cyan,
                "✔ Accepted ({:.3}s)\n",
                report.run.elapsed.as_secs_f32()
            );
        }
        Outcome::WrongAnswer(diff) => {
            write_bold!(stdout, Color::Red, "✘ Wrong answer\n");
            write!(stdout, "{}", diff);
        }
    }
    Ok(())
}
