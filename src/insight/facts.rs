//! Numeric aggregation over the track and recommendation lists.
//!
//! Everything here is deterministic and consults no randomness; the derived
//! facts feed the classifier and the phrasing rules downstream.

use super::models::{Recommendation, Stats, Track};

pub const HIGH_ENERGY_THRESHOLD: f64 = 0.7;
pub const HIGH_VALENCE_THRESHOLD: f64 = 0.6;
pub const HIGH_DANCE_THRESHOLD: f64 = 0.7;

/// Padding in BPM applied on each side of the user's tempo range when
/// counting recommendations that fall within it.
const REC_RANGE_PAD_BPM: f64 = 10.0;

/// Half-width of the tempo range assumed when the stats producer did not
/// include one.
const TEMPO_RANGE_FALLBACK_PAD: f64 = 15.0;

/// Facts derived from one `(stats, recommendations)` pair. Computed fresh
/// on every call, never persisted.
#[derive(Debug, Clone)]
pub struct Facts {
    /// Number of tracks in the stats.
    pub n: usize,
    /// Rounded average tempo.
    pub bpm: i32,
    pub tempo_min: f64,
    pub tempo_max: f64,
    /// Rounded width of the tempo range.
    pub tempo_span: i32,
    /// Most frequent artist and its occurrence count. Ties resolve to the
    /// artist encountered first in input order. `None` when there are no
    /// tracks.
    pub top_artist: Option<(String, usize)>,
    pub high_energy_count: usize,
    pub high_valence_count: usize,
    pub high_dance_count: usize,
    /// Track with the maximum energy (ties: first encountered).
    pub highest_energy_track: Option<Track>,
    pub lowest_tempo_track: Option<Track>,
    pub highest_tempo_track: Option<Track>,
    /// True when the tempo extremes are two distinct tracks.
    pub tempo_extremes_distinct: bool,
    pub rec_count: usize,
    /// Present only when the recommendation list is non-empty.
    pub rec_alignment: Option<RecAlignment>,
}

/// How the recommendation list sits relative to the user's tempo profile.
#[derive(Debug, Clone, Copy)]
pub struct RecAlignment {
    pub rec_tempo_avg: f64,
    /// Recommendations whose tempo falls within the user range padded by
    /// [`REC_RANGE_PAD_BPM`] on each side.
    pub recs_in_range: usize,
    /// Absolute difference between the recommendation tempo average and the
    /// user's tempo average.
    pub tempo_diff: f64,
}

/// Computes the derived facts. Returns `None` when `tempo_avg` is missing
/// or non-finite, which callers treat as insufficient data.
pub fn aggregate(stats: &Stats, recommendations: &[Recommendation]) -> Option<Facts> {
    let tempo_avg = stats.tempo_avg.filter(|t| t.is_finite())?;

    let tracks = &stats.tracks;
    let n = tracks.len();

    let (tempo_min, tempo_max) = stats.tempo_range.unwrap_or((
        tempo_avg - TEMPO_RANGE_FALLBACK_PAD,
        tempo_avg + TEMPO_RANGE_FALLBACK_PAD,
    ));
    let tempo_span = (tempo_max - tempo_min).round() as i32;
    let bpm = tempo_avg.round() as i32;

    // Insertion-ordered reduction so that count ties resolve to the artist
    // seen first in the input.
    let mut artist_counts: Vec<(String, usize)> = Vec::new();
    for track in tracks {
        match artist_counts
            .iter_mut()
            .find(|(name, _)| name == &track.artist_name)
        {
            Some((_, count)) => *count += 1,
            None => artist_counts.push((track.artist_name.clone(), 1)),
        }
    }
    let mut top_artist: Option<(String, usize)> = None;
    for (name, count) in &artist_counts {
        let is_better = match &top_artist {
            Some((_, best)) => count > best,
            None => true,
        };
        if is_better {
            top_artist = Some((name.clone(), *count));
        }
    }

    let high_energy_count = tracks
        .iter()
        .filter(|t| t.energy >= HIGH_ENERGY_THRESHOLD)
        .count();
    let high_valence_count = tracks
        .iter()
        .filter(|t| t.valence >= HIGH_VALENCE_THRESHOLD)
        .count();
    let high_dance_count = tracks
        .iter()
        .filter(|t| t.danceability >= HIGH_DANCE_THRESHOLD)
        .count();

    // Strict comparisons keep the first-encountered track on ties.
    let mut highest_energy_idx: Option<usize> = None;
    let mut lowest_tempo_idx: Option<usize> = None;
    let mut highest_tempo_idx: Option<usize> = None;
    for (idx, track) in tracks.iter().enumerate() {
        if highest_energy_idx.map_or(true, |best| track.energy > tracks[best].energy) {
            highest_energy_idx = Some(idx);
        }
        if lowest_tempo_idx.map_or(true, |best| track.tempo < tracks[best].tempo) {
            lowest_tempo_idx = Some(idx);
        }
        if highest_tempo_idx.map_or(true, |best| track.tempo > tracks[best].tempo) {
            highest_tempo_idx = Some(idx);
        }
    }
    let tempo_extremes_distinct = match (lowest_tempo_idx, highest_tempo_idx) {
        (Some(low), Some(high)) => low != high,
        _ => false,
    };

    let rec_count = recommendations.len();
    let rec_alignment = if rec_count > 0 {
        let rec_tempo_avg =
            recommendations.iter().map(|r| r.tempo).sum::<f64>() / rec_count as f64;
        let recs_in_range = recommendations
            .iter()
            .filter(|r| {
                r.tempo >= tempo_min - REC_RANGE_PAD_BPM && r.tempo <= tempo_max + REC_RANGE_PAD_BPM
            })
            .count();
        Some(RecAlignment {
            rec_tempo_avg,
            recs_in_range,
            tempo_diff: (rec_tempo_avg - tempo_avg).abs(),
        })
    } else {
        None
    };

    Some(Facts {
        n,
        bpm,
        tempo_min,
        tempo_max,
        tempo_span,
        top_artist,
        high_energy_count,
        high_valence_count,
        high_dance_count,
        highest_energy_track: highest_energy_idx.map(|i| tracks[i].clone()),
        lowest_tempo_track: lowest_tempo_idx.map(|i| tracks[i].clone()),
        highest_tempo_track: highest_tempo_idx.map(|i| tracks[i].clone()),
        tempo_extremes_distinct,
        rec_count,
        rec_alignment,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn track(name: &str, artist: &str, tempo: f64, energy: f64, valence: f64, dance: f64) -> Track {
        Track {
            track_name: name.to_string(),
            artist_name: artist.to_string(),
            tempo,
            energy,
            valence,
            danceability: dance,
        }
    }

    fn stats_with(tracks: Vec<Track>, tempo_avg: f64) -> Stats {
        Stats {
            tracks,
            tempo_avg: Some(tempo_avg),
            tempo_range: None,
        }
    }

    #[test]
    fn missing_tempo_avg_is_insufficient_data() {
        let stats = Stats {
            tracks: vec![track("A", "X", 120.0, 0.5, 0.5, 0.5)],
            tempo_avg: None,
            tempo_range: None,
        };
        assert!(aggregate(&stats, &[]).is_none());
    }

    #[test]
    fn non_finite_tempo_avg_is_insufficient_data() {
        let stats = Stats {
            tracks: vec![track("A", "X", 120.0, 0.5, 0.5, 0.5)],
            tempo_avg: Some(f64::NAN),
            tempo_range: None,
        };
        assert!(aggregate(&stats, &[]).is_none());
    }

    #[test]
    fn basic_aggregation() {
        let stats = Stats {
            tracks: vec![
                track("A", "X", 118.0, 0.8, 0.7, 0.8),
                track("B", "Y", 120.0, 0.6, 0.5, 0.4),
                track("C", "X", 122.0, 0.9, 0.65, 0.75),
            ],
            tempo_avg: Some(120.4),
            tempo_range: Some((118.0, 122.0)),
        };
        let facts = aggregate(&stats, &[]).unwrap();

        assert_eq!(facts.n, 3);
        assert_eq!(facts.bpm, 120);
        assert_eq!(facts.tempo_span, 4);
        assert_eq!(facts.top_artist, Some(("X".to_string(), 2)));
        assert_eq!(facts.high_energy_count, 2);
        assert_eq!(facts.high_valence_count, 2);
        assert_eq!(facts.high_dance_count, 2);
        assert_eq!(facts.highest_energy_track.as_ref().unwrap().track_name, "C");
        assert_eq!(facts.lowest_tempo_track.as_ref().unwrap().track_name, "A");
        assert_eq!(facts.highest_tempo_track.as_ref().unwrap().track_name, "C");
        assert!(facts.tempo_extremes_distinct);
        assert_eq!(facts.rec_count, 0);
        assert!(facts.rec_alignment.is_none());
    }

    #[test]
    fn tempo_range_falls_back_to_avg_padding() {
        let stats = stats_with(vec![track("A", "X", 100.0, 0.5, 0.5, 0.5)], 100.0);
        let facts = aggregate(&stats, &[]).unwrap();
        assert_eq!(facts.tempo_min, 85.0);
        assert_eq!(facts.tempo_max, 115.0);
        assert_eq!(facts.tempo_span, 30);
    }

    #[test]
    fn top_artist_tie_prefers_first_encountered() {
        let stats = stats_with(
            vec![
                track("A", "First", 100.0, 0.5, 0.5, 0.5),
                track("B", "Second", 100.0, 0.5, 0.5, 0.5),
                track("C", "Second", 100.0, 0.5, 0.5, 0.5),
                track("D", "First", 100.0, 0.5, 0.5, 0.5),
            ],
            100.0,
        );
        let facts = aggregate(&stats, &[]).unwrap();
        assert_eq!(facts.top_artist, Some(("First".to_string(), 2)));
    }

    #[test]
    fn extreme_ties_prefer_first_encountered() {
        let stats = stats_with(
            vec![
                track("A", "X", 100.0, 0.9, 0.5, 0.5),
                track("B", "Y", 100.0, 0.9, 0.5, 0.5),
            ],
            100.0,
        );
        let facts = aggregate(&stats, &[]).unwrap();
        assert_eq!(facts.highest_energy_track.as_ref().unwrap().track_name, "A");
        assert_eq!(facts.lowest_tempo_track.as_ref().unwrap().track_name, "A");
        assert_eq!(facts.highest_tempo_track.as_ref().unwrap().track_name, "A");
        // Same track holds both tempo extremes.
        assert!(!facts.tempo_extremes_distinct);
    }

    #[test]
    fn single_track_extremes_are_not_distinct() {
        let stats = stats_with(vec![track("A", "X", 100.0, 0.5, 0.5, 0.5)], 100.0);
        let facts = aggregate(&stats, &[]).unwrap();
        assert!(!facts.tempo_extremes_distinct);
    }

    #[test]
    fn empty_tracks_still_aggregate() {
        let stats = Stats {
            tracks: vec![],
            tempo_avg: Some(100.0),
            tempo_range: None,
        };
        let facts = aggregate(&stats, &[]).unwrap();
        assert_eq!(facts.n, 0);
        assert!(facts.top_artist.is_none());
        assert!(facts.highest_energy_track.is_none());
    }

    #[test]
    fn recommendation_alignment() {
        let stats = Stats {
            tracks: vec![track("A", "X", 120.0, 0.5, 0.5, 0.5)],
            tempo_avg: Some(120.0),
            tempo_range: Some((115.0, 125.0)),
        };
        let recs = vec![
            // Inside the padded range [105, 135].
            track("R1", "Z", 110.0, 0.5, 0.5, 0.5),
            track("R2", "Z", 130.0, 0.5, 0.5, 0.5),
            // Outside it.
            track("R3", "Z", 150.0, 0.5, 0.5, 0.5),
        ];
        let facts = aggregate(&stats, &recs).unwrap();
        assert_eq!(facts.rec_count, 3);

        let alignment = facts.rec_alignment.unwrap();
        assert!((alignment.rec_tempo_avg - 130.0).abs() < 1e-9);
        assert_eq!(alignment.recs_in_range, 2);
        assert!((alignment.tempo_diff - 10.0).abs() < 1e-9);
    }
}
