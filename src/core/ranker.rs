use tracing::debug;

use crate::core::engine::CompatibilityEngine;
use crate::error::EngineError;
use crate::models::{MatchResult, UserProfile};

/// Ranks a candidate set against a viewer profile
///
/// Pair scoring has no ordering dependency, so callers with large batches
/// can score candidates in parallel and only fan in for the final sort;
/// this ranker is the straightforward sequential form.
#[derive(Debug, Clone)]
pub struct MatchRanker {
    engine: CompatibilityEngine,
}

impl MatchRanker {
    pub fn new(engine: CompatibilityEngine) -> Self {
        Self { engine }
    }

    pub fn engine(&self) -> &CompatibilityEngine {
        &self.engine
    }

    /// Score every candidate, sort by descending final score, and truncate
    /// to `limit`
    ///
    /// The sort is stable: equal scores keep their input order. A limit of
    /// zero returns an empty list without scoring anything; there is no
    /// implicit cap beyond what the caller requests. Any comparison error
    /// aborts the whole ranking.
    pub fn rank(
        &self,
        viewer: &UserProfile,
        candidates: &[UserProfile],
        limit: usize,
    ) -> Result<Vec<MatchResult>, EngineError> {
        if limit == 0 {
            return Ok(Vec::new());
        }

        let mut results = Vec::with_capacity(candidates.len());
        for candidate in candidates {
            results.push(self.engine.compare(viewer, candidate)?);
        }

        // Vec::sort_by is stable, which is what keeps ties in input order
        results.sort_by(|a, b| b.score.cmp(&a.score));
        results.truncate(limit);

        debug!(
            viewer = %viewer.id,
            candidates = candidates.len(),
            returned = results.len(),
            "ranked candidates"
        );

        Ok(results)
    }
}
