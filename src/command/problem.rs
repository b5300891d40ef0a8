extern crate termcolor;
extern crate tokio;

use super::session::current_session;
use crate::write::short_count;
use std::{fs::OpenOptions, io::Write, path::Path};
use termcolor::{Color, StandardStream, WriteColor};
use tokio::process::Command;
use uva::{
    cache::{Cache, Paths},
    error::{persistence_error, process_error, tool_failure, Result},
    skeleton,
    types::ProblemInfo,
};

const WIDTH: usize = 108;
const INDENT: &str = "       ";
const SECTIONS: [&str; 4] = ["Input", "Output", "Sample Input", "Sample Output"];

async fn pdf_to_text(pdf: &Path) -> Result<String> {
    let output = Command::new("pdftotext")
        .arg(pdf)
        .arg("-")
        .output()
        .await
        .map_err(process_error("pdftotext"))?;
    if !output.status.success() {
        return Err(tool_failure("pdftotext", output.status));
    }
    Ok(String::from_utf8_lossy(&output.stdout).into_owned())
}

#[allow(unused_must_use)]
fn write_statement(stdout: &mut StandardStream, info: &ProblemInfo, description: &str) {
    let title = info.to_string();
    let padding = " ".repeat(WIDTH.saturating_sub(title.len()) / 2);
    write_bold!(stdout, Color::White, "{}{}\n\n", padding, title);

    write_bold!(stdout, Color::White, "Statistics\n");
    writeln!(stdout, "{}* Rate: {:.1} %", INDENT, info.percentage);
    writeln!(stdout, "{}* Total Accepted: {}", INDENT, short_count(info.accepted()));
    writeln!(
        stdout,
        "{}* Total Submissions: {}\n",
        INDENT,
        short_count(info.total_submissions)
    );

    write_bold!(stdout, Color::White, "Description\n");
    for line in description.trim().lines() {
        let line = line.trim_end();
        if SECTIONS.contains(&line.trim()) {
            write!(stdout, "{}", INDENT);
            write_bold!(stdout, Color::White, "{}\n", line.trim());
        } else {
            writeln!(stdout, "{}{}", INDENT, line);
        }
    }
}

pub async fn show(stdout: &mut StandardStream, paths: &Paths, id: u32, gui: bool) -> Result<()> {
    let session = current_session(paths)?;
    let cache = Cache::new(paths.clone());
    let info = cache.problem_info(&session, id).await?;
    let pdf = cache.statement(&session, &info).await?;
    if gui {
        let status = Command::new("evince")
            .arg(&pdf)
            .status()
            .await
            .map_err(process_error("evince"))?;
        if !status.success() {
            return Err(tool_failure("evince", status));
        }
    } else {
        write_statement(stdout, &info, &pdf_to_text(&pdf).await?);
    }
    Ok(())
}

#[allow(unused_must_use)]
pub async fn touch(stdout: &mut StandardStream, paths: &Paths, id: u32, lang: &str) -> Result<()> {
    let session = current_session(paths)?;
    let info = Cache::new(paths.clone()).problem_info(&session, id).await?;
    let name = info.filename(lang);
    let content = skeleton::render(paths, &info, lang)?;
    OpenOptions::new()
        .write(true)
        .create_new(true)
        .open(&name)
        .and_then(|mut f| f.write_all(content.as_bytes()))
        .map_err(persistence_error(name.as_str()))?;
    write_ok!(stdout, "Created", "Source code: {}", name);
    Ok(())
}
