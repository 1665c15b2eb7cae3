use serde::{Deserialize, Serialize};

/// A single track with the audio features the stats producer exposes.
#[derive(Clone, Serialize, Deserialize, Debug)]
pub struct Track {
    pub track_name: String,
    pub artist_name: String,
    /// Tempo in BPM.
    pub tempo: f64,
    pub energy: f64,
    pub valence: f64,
    pub danceability: f64,
}

/// Aggregated listening statistics, delivered already validated by the
/// stats producer. Extra fields it sends along (`track_count`, the
/// per-feature averages) are ignored here.
#[derive(Clone, Serialize, Deserialize, Debug, Default)]
pub struct Stats {
    #[serde(default)]
    pub tracks: Vec<Track>,
    /// Average tempo across the track list. Treated as insufficient data
    /// when missing or non-finite.
    #[serde(default)]
    pub tempo_avg: Option<f64>,
    /// Observed (min, max) tempo. When absent, a range of +/-15 BPM around
    /// `tempo_avg` is assumed.
    #[serde(default)]
    pub tempo_range: Option<(f64, f64)>,
}

/// A recommended track. Same shape as [`Track`], no match metadata.
pub type Recommendation = Track;

/// The composed digest: one headline, 1-4 observations, a suggestion
/// paragraph and a call-to-action line. Either every field is populated or
/// no insight is produced at all.
#[derive(Clone, Serialize, Deserialize, Debug)]
pub struct Insight {
    pub headline: String,
    pub observations: Vec<String>,
    pub suggestion: String,
    pub cta: String,
}
