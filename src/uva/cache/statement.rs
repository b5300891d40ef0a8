use super::Cache;
use crate::{
    error::{persistence_error, Result},
    judge::Judge,
    types::ProblemInfo,
};
use log::info;
use std::{fs, io::Write, path::PathBuf};
use tempfile::NamedTempFile;

impl Cache {
    /// Path of the statement pdf, downloading it if it is not on disk yet.
    pub async fn statement<J: Judge + ?Sized>(&self, judge: &J, info: &ProblemInfo) -> Result<PathBuf> {
        let path = self.paths.pdf_file(info);
        if path.exists() {
            return Ok(path);
        }
        info!("Downloading {}", info.title);
        let data = judge.fetch_statement(info.id).await?;
        let dir = self.paths.root().join(crate::config::storage::PDF_DIR);
        fs::create_dir_all(&dir).map_err(persistence_error(&dir))?;
        let mut temp = NamedTempFile::new_in(&dir).map_err(persistence_error(&dir))?;
        temp.write_all(&data).map_err(persistence_error(temp.path()))?;
        temp.persist(&path)
            .map_err(|e| persistence_error(&path)(e.error))?;
        Ok(path)
    }
}

#[cfg(test)]
mod tests {
    use crate::{
        cache::{Cache, Paths},
        judge::fake::{problem, FakeJudge},
    };
    use tempfile::TempDir;

    #[tokio::test]
    async fn statement_is_downloaded_once() {
        let dir = TempDir::new().unwrap();
        let cache = Cache::new(Paths::new(dir.path()));
        let info = problem(100, 36, "The 3n + 1 problem");
        let path = cache.statement(&FakeJudge::default(), &info).await.unwrap();
        assert!(path.ends_with("pdf/100.the-3n-1-problem.pdf"));
        assert_eq!(std::fs::read(&path).unwrap(), b"%PDF statement 100");
        std::fs::write(&path, b"kept").unwrap();
        cache.statement(&FakeJudge::default(), &info).await.unwrap();
        assert_eq!(std::fs::read(&path).unwrap(), b"kept");
    }
}
