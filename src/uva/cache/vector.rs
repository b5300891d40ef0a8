use super::Cache;
use crate::{encoding, error::Result, judge::Judge, types::TestVector};
use log::{debug, info};

impl Cache {
    /// Sample input/output for `id`, fetched once and kept forever.
    pub async fn test_vector<J: Judge + ?Sized>(&self, judge: &J, id: u32) -> Result<TestVector> {
        let info = self.problem_info(judge, id).await?;
        let path = self.paths.test_data_file(&info);
        if let Some(v) = encoding::load::<TestVector>(&path)? {
            debug!("Loaded test data from {}", path.display());
            return Ok(v);
        }
        info!("Fetching test data for {}", info);
        let ret = judge.crawl_test_vector(id).await?;
        encoding::store(&path, &ret)?;
        Ok(ret)
    }
}
