//! Personalized listening-insight composer.
//!
//! Turns a user's aggregated listening statistics and a list of recommended
//! tracks into a short natural-language digest. Four stages, all pure:
//! aggregate numeric facts, classify them into a situation category, draw a
//! phrasing for each output slot, then assemble a bounded set of
//! observations. The composer holds no cross-call state and each invocation
//! owns its own random draws, so it is safe to call concurrently. Repeated
//! calls over the same input vary the wording on purpose.

mod category;
mod facts;
mod models;
mod phrasing;
mod picker;

pub use category::{classify, Category};
pub use facts::{aggregate, Facts, RecAlignment};
pub use models::{Insight, Recommendation, Stats, Track};
pub use phrasing::NO_RECOMMENDATIONS_CTA;

use picker::pick_n;
use rand::Rng;

/// Observation list bounds applied by the assembler.
const MIN_OBSERVATIONS: usize = 2;
const MAX_OBSERVATIONS: usize = 4;

/// Composes an insight from the given stats and recommendations, drawing
/// phrasings from the thread RNG. Returns `None` when there is not enough
/// data to say anything (no tracks, or unusable `tempo_avg`).
pub fn generate_insight(stats: &Stats, recommendations: &[Recommendation]) -> Option<Insight> {
    generate_insight_with_rng(stats, recommendations, &mut rand::rng())
}

/// Same as [`generate_insight`] but with an injected randomness source, so
/// callers can seed the draws.
pub fn generate_insight_with_rng<R: Rng + ?Sized>(
    stats: &Stats,
    recommendations: &[Recommendation],
    rng: &mut R,
) -> Option<Insight> {
    if stats.tracks.is_empty() {
        return None;
    }

    let facts = facts::aggregate(stats, recommendations)?;
    let category = category::classify(&facts);

    let headline = phrasing::headline(&facts, category, rng);
    let pool = phrasing::observation_pool(&facts, category, rng);
    let suggestion = phrasing::suggestion(&facts, rng);
    let cta = phrasing::cta(facts.rec_count > 0, rng);

    Some(assemble(&facts, headline, pool, suggestion, cta, rng))
}

/// Picks a bounded, non-repeating subset of the observation pool and puts
/// the final record together. An empty pool yields a single fallback
/// statement around the rounded BPM.
fn assemble<R: Rng + ?Sized>(
    facts: &Facts,
    headline: String,
    pool: Vec<String>,
    suggestion: String,
    cta: String,
    rng: &mut R,
) -> Insight {
    let observations = if pool.is_empty() {
        vec![format!(
            "Your top tracks sit around {} BPM with a balanced mix of energy and mood: no single note dominates.",
            facts.bpm
        )]
    } else {
        let want = pool.len().max(MIN_OBSERVATIONS).min(MAX_OBSERVATIONS);
        pick_n(rng, pool, want)
    };

    Insight {
        headline,
        observations,
        suggestion,
        cta,
    }
}
