use crate::types::Language;
use std::{
    ffi::{OsStr, OsString},
    path::Path,
};

/// How to build and launch one source file.
#[derive(Debug, Clone, PartialEq)]
pub struct TestCommand {
    pub compile: Option<Vec<OsString>>,
    pub run: Vec<OsString>,
}

fn args<I, S>(items: I) -> Vec<OsString>
where
    I: IntoIterator<Item = S>,
    S: AsRef<OsStr>,
{
    items.into_iter().map(|x| x.as_ref().to_owned()).collect()
}

impl TestCommand {
    pub fn new(compile: Option<Vec<OsString>>, run: Vec<OsString>) -> Self {
        Self { compile, run }
    }
    /// Commands for `source`; build outputs are placed in `build_dir`.
    pub fn for_source(source: &Path, language: Language, build_dir: &Path) -> Self {
        let stem = source.file_stem().unwrap_or_else(|| OsStr::new("main"));
        let binary = build_dir.join(stem);
        let src = source.as_os_str();
        match language {
            Language::AnsiC => Self::new(
                Some(args(vec![
                    OsStr::new("gcc"),
                    OsStr::new("-lm"),
                    OsStr::new("-O2"),
                    OsStr::new("-o"),
                    binary.as_os_str(),
                    src,
                ])),
                args(vec![binary.as_os_str()]),
            ),
            Language::Cpp => Self::new(
                Some(args(vec![
                    OsStr::new("g++"),
                    OsStr::new("-std=c++11"),
                    OsStr::new("-O2"),
                    OsStr::new("-o"),
                    binary.as_os_str(),
                    src,
                ])),
                args(vec![binary.as_os_str()]),
            ),
            Language::Java => Self::new(
                Some(args(vec![OsStr::new("javac"), OsStr::new("-d"), binary.as_os_str(), src])),
                args(vec![
                    OsStr::new("java"),
                    OsStr::new("-cp"),
                    binary.as_os_str(),
                    OsStr::new("Main"),
                ]),
            ),
            Language::Pascal => {
                let mut out = OsString::from("-o");
                out.push(binary.as_os_str());
                Self::new(
                    Some(args(vec![OsStr::new("fpc"), OsStr::new("-O2"), out.as_os_str(), src])),
                    args(vec![binary.as_os_str()]),
                )
            }
            Language::Python3 => Self::new(None, args(vec![OsStr::new("python3"), src])),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn compiled_languages_run_the_build_output() {
        let cmd = TestCommand::for_source(
            Path::new("100.the-3n-1-problem.cpp"),
            Language::Cpp,
            Path::new("/data/build"),
        );
        assert_eq!(
            cmd.compile.unwrap(),
            args(vec![
                "g++",
                "-std=c++11",
                "-O2",
                "-o",
                "/data/build/100.the-3n-1-problem",
                "100.the-3n-1-problem.cpp",
            ])
        );
        assert_eq!(cmd.run, args(vec!["/data/build/100.the-3n-1-problem"]));
    }

    #[test]
    fn scripts_have_no_build_step() {
        let cmd = TestCommand::for_source(Path::new("10055.py"), Language::Python3, Path::new("b"));
        assert!(cmd.compile.is_none());
        assert_eq!(cmd.run, args(vec!["python3", "10055.py"]));
    }

    #[test]
    fn pascal_output_flag_is_joined() {
        let cmd = TestCommand::for_source(Path::new("1.pas"), Language::Pascal, Path::new("b"));
        assert_eq!(cmd.compile.unwrap()[2], OsString::from("-ob/1"));
    }
}
