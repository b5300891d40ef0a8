//! Local test runner: build a solution, feed it the cached sample input and
//! compare its output with the accepted one.
extern crate tempfile;
extern crate tokio;

pub mod command;

pub use command::TestCommand;

use crate::{
    cache::Cache,
    error::{persistence_error, process_error, tool_failure, Error, Kind, Result},
    judge::Judge,
    types::{parse_filename, Language, TestVector},
};
use log::debug;
use std::{
    ffi::OsString,
    fs,
    io::ErrorKind,
    path::Path,
    process::Stdio,
    time::{Duration, Instant},
};
use tempfile::Builder;
use tokio::{
    io::{AsyncWrite, AsyncWriteExt},
    process::Command,
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Accepted,
    WrongAnswer(String),
}

#[derive(Debug)]
pub struct Run {
    pub outcome: Outcome,
    pub elapsed: Duration,
}

#[derive(Debug)]
pub struct Report {
    pub language: Language,
    pub warnings: Option<String>,
    pub vector: TestVector,
    pub run: Run,
}

fn command(argv: &[OsString]) -> Result<Command> {
    let (program, rest) = argv
        .split_first()
        .ok_or_else(|| Error::with_description(Kind::Parse, "empty command line"))?;
    let mut ret = Command::new(program);
    ret.args(rest);
    Ok(ret)
}
fn program_name(argv: &[OsString]) -> String {
    argv.first()
        .map(|x| x.to_string_lossy().into_owned())
        .unwrap_or_default()
}

/// Writes `data` to a child's stdin; a child that exits without reading is fine.
async fn feed<W: AsyncWrite + Unpin>(mut stdin: W, data: &str, program: &str) -> Result<()> {
    match stdin.write_all(data.as_bytes()).await {
        Err(e) if e.kind() != ErrorKind::BrokenPipe => Err(process_error(program)(e)),
        _ => Ok(()),
    }
}

/// Runs the build step, returning its diagnostics when it succeeds with output.
pub async fn build(cmd: &TestCommand) -> Result<Option<String>> {
    let argv = match &cmd.compile {
        Some(v) => v,
        None => return Ok(None),
    };
    let name = program_name(argv);
    debug!("Building with {:?}", argv);
    let output = command(argv)?
        .stdin(Stdio::null())
        .output()
        .await
        .map_err(process_error(name))?;
    let mut text = String::from_utf8_lossy(&output.stdout).into_owned();
    text.push_str(&String::from_utf8_lossy(&output.stderr));
    if !output.status.success() {
        return Err(Error::with_description(Kind::BuildFailed(output.status), text));
    }
    Ok(if text.is_empty() { None } else { Some(text) })
}

/// Compares `actual` (a file) against `expected`, ignoring trailing whitespace.
pub async fn compare(actual: &Path, expected: &str, color: bool) -> Result<Outcome> {
    let mut child = Command::new("diff")
        .arg("-Z")
        .arg(if color { "--color=always" } else { "--color=never" })
        .arg(actual)
        .arg("-")
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .spawn()
        .map_err(process_error("diff"))?;
    let stdin = child.stdin.take();
    let (fed, output) = tokio::join!(
        async move {
            match stdin {
                Some(s) => feed(s, expected, "diff").await,
                None => Ok(()),
            }
        },
        child.wait_with_output()
    );
    fed?;
    let output = output.map_err(process_error("diff"))?;
    match output.status.code() {
        Some(0) | Some(1) => {
            let diff = String::from_utf8_lossy(&output.stdout).into_owned();
            Ok(if diff.is_empty() {
                Outcome::Accepted
            } else {
                Outcome::WrongAnswer(diff)
            })
        }
        _ => Err(tool_failure("diff", output.status)),
    }
}

/// Runs the program on `vector` and judges its output.
pub async fn execute(cmd: &TestCommand, vector: &TestVector, color: bool) -> Result<Run> {
    let scratch = Builder::new()
        .prefix("uva-")
        .suffix(".txt")
        .tempfile()
        .map_err(persistence_error(std::env::temp_dir()))?;
    let stdout = scratch.reopen().map_err(persistence_error(scratch.path()))?;
    let name = program_name(&cmd.run);
    let mut process = command(&cmd.run)?;
    process.stdout(Stdio::from(stdout)).stdin(if vector.input.is_empty() {
        Stdio::null()
    } else {
        Stdio::piped()
    });

    let start = Instant::now();
    let mut child = process.spawn().map_err(process_error(name.as_str()))?;
    if let Some(stdin) = child.stdin.take() {
        feed(stdin, &vector.input, &name).await?;
    }
    let status = child.wait().await.map_err(process_error(name.as_str()))?;
    let elapsed = start.elapsed();
    debug!("{} exited with {} after {:?}", name, status, elapsed);
    if !status.success() {
        return Err(Error::with_kind(Kind::ExecutionFailed(status)));
    }
    Ok(Run {
        outcome: compare(scratch.path(), &vector.output, color).await?,
        elapsed,
    })
}

/// Builds, fetches the sample and runs the solution in `source`.
///
/// The problem id and language come from the file name, e.g. `100.the-3n-1-problem.cc`.
pub async fn test_file<J: Judge + ?Sized>(
    judge: &J,
    cache: &Cache,
    source: &Path,
    color: bool,
) -> Result<Report> {
    let (id, _, ext) = parse_filename(source)?;
    let language = Language::from_extension(&ext)?;
    let build_dir = cache.paths().build_dir();
    fs::create_dir_all(&build_dir).map_err(persistence_error(&build_dir))?;
    let cmd = TestCommand::for_source(source, language, &build_dir);
    let warnings = build(&cmd).await?;
    let vector = cache.test_vector(judge, id).await?;
    let run = execute(&cmd, &vector, color).await?;
    Ok(Report {
        language,
        warnings,
        vector,
        run,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        cache::Paths,
        error::ErrorKind,
        judge::fake::{problem, FakeJudge},
    };
    use tempfile::TempDir;

    fn sh(script: &str) -> Vec<OsString> {
        vec!["sh".into(), "-c".into(), script.into()]
    }

    #[tokio::test]
    async fn build_warnings_are_returned() {
        let cmd = TestCommand::new(Some(sh("echo 'unused variable' >&2")), sh("true"));
        assert_eq!(build(&cmd).await.unwrap().as_deref(), Some("unused variable\n"));
        let quiet = TestCommand::new(Some(sh("true")), sh("true"));
        assert_eq!(build(&quiet).await.unwrap(), None);
    }

    #[tokio::test]
    async fn failing_build_is_fatal() {
        let cmd = TestCommand::new(Some(sh("echo 'syntax error' >&2; exit 1")), sh("true"));
        let err = build(&cmd).await.unwrap_err();
        assert_eq!(err.kind(), ErrorKind::BuildFailed);
        assert!(err.to_string().contains("syntax error"));
    }

    #[tokio::test]
    async fn trailing_whitespace_is_ignored() {
        let dir = TempDir::new().unwrap();
        let actual = dir.path().join("out.txt");
        fs::write(&actual, "1 2  \n3\n").unwrap();
        assert_eq!(
            compare(&actual, "1 2\n3   \n", false).await.unwrap(),
            Outcome::Accepted
        );
    }

    #[tokio::test]
    async fn diff_trouble_is_a_tool_failure() {
        let err = compare(Path::new("/nonexistent/uva-out.txt"), "1\n", false)
            .await
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::ToolFailure);
    }

    #[tokio::test]
    async fn empty_input_closes_stdin() {
        let vector = TestVector {
            input: String::new(),
            output: "0\n".to_string(),
        };
        let cmd = TestCommand::new(None, sh("wc -c | tr -d ' '"));
        let run = execute(&cmd, &vector, false).await.unwrap();
        assert_eq!(run.outcome, Outcome::Accepted);
    }

    fn summing_judge() -> FakeJudge {
        let mut judge = FakeJudge::with_problems(vec![problem(10055, 996, "Hashmat the brave warrior")]);
        judge.vector = Some(TestVector {
            input: "3\n1 2 3\n".to_string(),
            output: "6\n".to_string(),
        });
        judge
    }

    #[tokio::test]
    async fn test_file_builds_fetches_and_runs() {
        let dir = TempDir::new().unwrap();
        let cache = Cache::new(Paths::new(dir.path().join("data")));
        let judge = summing_judge();
        let source = dir.path().join("10055.hashmat-the-brave-warrior.c");
        fs::write(
            &source,
            "#include <stdio.h>\nint main(void) {\n  int n, x, s = 0;\n  scanf(\"%d\", &n);\n  while (n-- && scanf(\"%d\", &x) == 1) s += x;\n  printf(\"%d\\n\", s);\n  return 0;\n}\n",
        )
        .unwrap();
        let report = test_file(&judge, &cache, &source, false).await.unwrap();
        assert_eq!(report.language, Language::AnsiC);
        assert_eq!(report.run.outcome, Outcome::Accepted);
        assert_eq!(judge.vector_calls.get(), 1);
        assert!(cache.paths().build_dir().join("10055.hashmat-the-brave-warrior").exists());
    }

    #[tokio::test]
    async fn failed_build_skips_the_fetch() {
        let dir = TempDir::new().unwrap();
        let cache = Cache::new(Paths::new(dir.path().join("data")));
        let judge = summing_judge();
        let source = dir.path().join("10055.hashmat-the-brave-warrior.c");
        fs::write(&source, "int main(void) { return }\n").unwrap();
        let err = test_file(&judge, &cache, &source, false).await.unwrap_err();
        assert_eq!(err.kind(), ErrorKind::BuildFailed);
        assert_eq!(judge.vector_calls.get(), 0);
    }

    #[tokio::test]
    async fn test_file_resolves_problem_from_name() {
        let dir = TempDir::new().unwrap();
        let cache = Cache::new(Paths::new(dir.path().join("data")));
        let mut judge = FakeJudge::with_problems(vec![problem(100, 36, "The 3n + 1 problem")]);
        judge.vector = Some(TestVector {
            input: "1 10\n".to_string(),
            output: "1 10 20\n".to_string(),
        });
        let source = dir.path().join("100.the-3n-1-problem.rb");
        fs::write(&source, "").unwrap();
        let err = test_file(&judge, &cache, &source, false).await.unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Language);
        assert_eq!(judge.vector_calls.get(), 0);
    }
}
