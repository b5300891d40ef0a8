//! Initial content of new source files, rendered from user templates.
extern crate handlebars;
extern crate serde;

use crate::{
    cache::Paths,
    error::{persistence_error, Error, Kind, Result},
    types::ProblemInfo,
};
use handlebars::Handlebars;
use serde::Serialize;
use std::{fs, io::ErrorKind};

#[derive(Serialize)]
struct Param<'a> {
    id: u32,
    true_id: u32,
    title: &'a str,
}

/// Renders `templates/<ext>.hbs` for `info`; empty if there is no template.
pub fn render(paths: &Paths, info: &ProblemInfo, ext: &str) -> Result<String> {
    let path = paths.template_file(ext);
    let template = match fs::read_to_string(&path) {
        Ok(v) => v,
        Err(e) if e.kind() == ErrorKind::NotFound => return Ok(String::new()),
        Err(e) => return Err(persistence_error(path)(e)),
    };
    let mut engine = Handlebars::new();
    engine.register_escape_fn(handlebars::no_escape);
    engine
        .render_template(
            &template,
            &Param {
                id: info.id,
                true_id: info.true_id,
                title: &info.title,
            },
        )
        .map_err(|e| Error::with_kind(Kind::Template(e)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{error::ErrorKind as Kinds, judge::fake::problem};
    use tempfile::TempDir;

    #[test]
    fn missing_template_gives_empty_file() {
        let dir = TempDir::new().unwrap();
        let info = problem(100, 36, "The 3n + 1 problem");
        assert_eq!(render(&Paths::new(dir.path()), &info, "cc").unwrap(), "");
    }

    #[test]
    fn template_sees_problem_fields() {
        let dir = TempDir::new().unwrap();
        let paths = Paths::new(dir.path());
        fs::create_dir_all(paths.template_file("cc").parent().unwrap()).unwrap();
        fs::write(paths.template_file("cc"), "// {{id}} - {{title}} ({{true_id}})\n").unwrap();
        let info = problem(100, 36, "The 3n + 1 problem");
        assert_eq!(
            render(&paths, &info, "cc").unwrap(),
            "// 100 - The 3n + 1 problem (36)\n"
        );
        fs::write(paths.template_file("cc"), "{{#if}}").unwrap();
        assert_eq!(render(&paths, &info, "cc").unwrap_err().kind(), Kinds::Template);
    }
}
