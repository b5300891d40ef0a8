use super::Cache;
use crate::{
    encoding,
    error::{Error, Kind, Result},
    judge::Judge,
    types::{Catalogue, ProblemInfo},
};
use log::{debug, info};

impl Cache {
    /// The whole catalogue, crawled and saved on first use.
    pub async fn catalogue<J: Judge + ?Sized>(&self, judge: &J) -> Result<Catalogue> {
        let path = self.paths.problems_file();
        if let Some(v) = encoding::load::<Catalogue>(&path)? {
            debug!("Loaded {} problems from {}", v.len(), path.display());
            return Ok(v);
        }
        info!("Problem catalogue not cached, crawling");
        let ret = judge.crawl_catalogue().await?;
        encoding::store(&path, &ret)?;
        Ok(ret)
    }

    pub async fn problem_info<J: Judge + ?Sized>(&self, judge: &J, id: u32) -> Result<ProblemInfo> {
        self.catalogue(judge)
            .await?
            .remove(&id)
            .ok_or_else(|| Error::with_kind(Kind::NotFound(id)))
    }
}
