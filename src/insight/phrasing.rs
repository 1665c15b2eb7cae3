//! Candidate phrasings for every output slot and the data-gated rules that
//! decide which of them are on the table for a given set of facts.
//!
//! Every slot owns several equivalent phrasings and one is drawn uniformly,
//! so repeated calls over the same listening profile read differently.

use rand::Rng;

use super::category::Category;
use super::facts::Facts;
use super::picker::pick_one;

/// The one fixed CTA shown when no recommendations were supplied.
pub const NO_RECOMMENDATIONS_CTA: &str =
    "Load your recommendations to see picks that match this profile.";

fn draw<R: Rng + ?Sized>(rng: &mut R, candidates: Vec<String>) -> String {
    pick_one(rng, candidates).unwrap_or_default()
}

/// Picks one headline from the chosen category's phrasing set.
pub fn headline<R: Rng + ?Sized>(facts: &Facts, category: Category, rng: &mut R) -> String {
    let candidates = match category {
        Category::TightTempo => vec![
            format!(
                "You know what groove you like: your top tracks sit in a tight pocket around {} BPM.",
                facts.bpm
            ),
            format!(
                "Clear tempo lane: most of this set hovers around {} BPM. You've got a type.",
                facts.bpm
            ),
            format!(
                "Your top tracks share a similar pulse, right around {} BPM.",
                facts.bpm
            ),
        ],
        Category::WideTempo => vec![
            "Your taste runs the gamut, from slow burns to high-energy tracks, all in one rotation."
                .to_string(),
            format!(
                "You don't stick to one speed. This set goes from {} to {} BPM.",
                facts.tempo_min.round() as i32,
                facts.tempo_max.round() as i32
            ),
            "Wide range here: you like the contrast between laid-back and full throttle."
                .to_string(),
        ],
        Category::HighEnergy => vec![
            "Your top set leans into high energy, the kind of stuff that keeps the momentum up."
                .to_string(),
            "This is a high-octane set. Almost everything goes hard.".to_string(),
            "Energy is the throughline: your picks are consistently intense.".to_string(),
        ],
        Category::Upbeat => vec![
            "Your rotation skews upbeat, more bright than broody.".to_string(),
            "Most of these lean positive. Good-vibe territory.".to_string(),
            "Your top tracks tilt toward the brighter side of the mood spectrum.".to_string(),
        ],
        Category::Default => vec![
            format!(
                "From {} track{} we picked up a clear vibe: around {} BPM, with a mood that's distinctly yours.",
                facts.n,
                if facts.n == 1 { "" } else { "s" },
                facts.bpm
            ),
            format!(
                "This set has a personality: {} BPM on average, and a mood that fits.",
                facts.bpm
            ),
            format!(
                "Your top tracks hang around {} BPM. The rest is your call.",
                facts.bpm
            ),
        ],
    };
    draw(rng, candidates)
}

/// Builds the observation candidate pool by evaluating each data-gated rule
/// in turn; a rule that fires contributes one statement drawn from its own
/// phrasing set. The tempo-shape rules are suppressed when the chosen
/// category already makes the same claim in the headline; that check
/// compares categories, never the rendered headline text.
pub fn observation_pool<R: Rng + ?Sized>(
    facts: &Facts,
    category: Category,
    rng: &mut R,
) -> Vec<String> {
    let mut pool = Vec::new();

    if let Some((name, count)) = &facts.top_artist {
        if *count > 1 {
            let candidates = if *count >= 3 {
                vec![
                    format!(
                        "You keep coming back to {}: they show up {} times in this set.",
                        name, count
                    ),
                    format!("{} dominates this list. {} tracks.", name, count),
                    format!(
                        "Clear favorite in this set: {}, with {} appearances.",
                        name, count
                    ),
                ]
            } else {
                vec![
                    format!("{} shows up more than anyone else here.", name),
                    format!("If there's a star of this set, it's {}.", name),
                ]
            };
            pool.extend(pick_one(rng, candidates));
        }
    }

    if facts.tempo_span <= 25 && facts.n >= 3 && category != Category::TightTempo {
        let candidates = vec![
            "Your tempo range is pretty consistent. You've found a groove and stuck with it."
                .to_string(),
            "Not much spread in BPM: you know what pace you like.".to_string(),
            "Tight tempo range. This is a coherent groove.".to_string(),
        ];
        pool.extend(pick_one(rng, candidates));
    } else if facts.tempo_span > 50 && facts.n >= 3 && category != Category::WideTempo {
        let candidates = vec![
            "You don't lock into one speed: you like the contrast between slow and fast."
                .to_string(),
            "Big spread in tempo. You're not married to one BPM.".to_string(),
            "Slow and fast both get a seat at the table.".to_string(),
        ];
        pool.extend(pick_one(rng, candidates));
    }

    if facts.high_energy_count == facts.n && facts.n >= 3 {
        let candidates = vec![
            "Everything in this set goes hard. No filler.".to_string(),
            "Zero low-energy tracks. It's all gas.".to_string(),
            "This whole set is high energy. Consistently intense.".to_string(),
        ];
        pool.extend(pick_one(rng, candidates));
    } else if facts.high_energy_count >= 2 {
        if let Some(peak) = &facts.highest_energy_track {
            let candidates = vec![
                format!(
                    "The peak of the set might be \"{}\": it's the most intense of the bunch.",
                    peak.track_name
                ),
                format!(
                    "\"{}\" by {} is the highest-energy track here.",
                    peak.track_name, peak.artist_name
                ),
                format!(
                    "For pure intensity, \"{}\" leads the pack.",
                    peak.track_name
                ),
            ];
            pool.extend(pick_one(rng, candidates));
        }
    }

    // The mood-mix rule stays silent when the set is uniformly bright or
    // uniformly moody; in between it has three exclusive branches.
    if facts.high_valence_count > 0 && facts.high_valence_count < facts.n {
        let doubled = facts.high_valence_count * 2;
        let candidates = if doubled > facts.n {
            vec![
                "Most of these lean positive; a few bring the mood down in a good way.".to_string(),
                "Generally upbeat, with a couple of moodier cuts in the mix.".to_string(),
                "Bright overall, but not one-note: there's some shade in there.".to_string(),
            ]
        } else if doubled == facts.n {
            vec![
                "Dead even split between bright and moody. You play both sides.".to_string(),
                "Half of this set leans sunny, half leans dark. Balanced diet.".to_string(),
                "An even mix of light and heavy moods, right down the middle.".to_string(),
            ]
        } else {
            vec![
                "You've got a mix of moods: not all sunshine, which makes the brighter tracks hit harder.".to_string(),
                "A good balance of light and dark. The contrast works.".to_string(),
                "Mood-wise you're all over the map, in a good way.".to_string(),
            ]
        };
        pool.extend(pick_one(rng, candidates));
    }

    if facts.high_dance_count * 2 >= facts.n && facts.n > 0 {
        let candidates = vec![
            "This is move-your-body music. Very danceable.".to_string(),
            "Most of these are built for the floor.".to_string(),
            "High danceability across the set. You like to move.".to_string(),
        ];
        pool.extend(pick_one(rng, candidates));
    }

    if facts.tempo_extremes_distinct && facts.tempo_span > 40 {
        if let (Some(slow), Some(fast)) = (&facts.lowest_tempo_track, &facts.highest_tempo_track) {
            let slow_bpm = slow.tempo.round() as i32;
            let fast_bpm = fast.tempo.round() as i32;
            let candidates = vec![
                format!(
                    "You go from \"{}\" ({} BPM) all the way to \"{}\" ({} BPM): that's a real range.",
                    slow.track_name, slow_bpm, fast.track_name, fast_bpm
                ),
                format!(
                    "Slowest: \"{}\". Fastest: \"{}\". You cover a lot of ground.",
                    slow.track_name, fast.track_name
                ),
                format!(
                    "The spread from {} to {} BPM says you like variety in tempo.",
                    slow_bpm, fast_bpm
                ),
            ];
            pool.extend(pick_one(rng, candidates));
        }
    }

    pool
}

/// Picks the suggestion line based on how the recommendation list aligns
/// with the user's tempo profile.
pub fn suggestion<R: Rng + ?Sized>(facts: &Facts, rng: &mut R) -> String {
    let candidates = match &facts.rec_alignment {
        Some(alignment) if alignment.tempo_diff < 15.0 => {
            if alignment.recs_in_range as f64 >= 0.6 * facts.rec_count as f64 {
                vec![
                    "We kept the picks in your wheelhouse: same kind of groove, so they should feel familiar but fresh.".to_string(),
                    "The list below matches your tempo zone. Should slot in nicely.".to_string(),
                    "These sit in the same BPM neighborhood as what you already love.".to_string(),
                ]
            } else {
                vec![
                    "The list below mixes tracks that match your tempo with a few that nudge you slightly out of it.".to_string(),
                    "Most of these match your groove; a couple stretch the tempo a bit.".to_string(),
                    "We stayed close to your lane with a few curveballs.".to_string(),
                ]
            }
        }
        Some(_) => vec![
            "The recommendations sit in a similar zone to what you already love: same energy, similar pace.".to_string(),
            "These picks are tuned to your profile. Same vibe, new names.".to_string(),
            "We matched the energy and pace to what you're already playing.".to_string(),
        ],
        None => vec![
            "The picks below were chosen to match this profile so they should slot right into your taste.".to_string(),
            "Everything below is aligned with what we see in your top tracks.".to_string(),
            "These should feel like they belong in the same playlist.".to_string(),
        ],
    };
    draw(rng, candidates)
}

/// Picks the call-to-action line.
pub fn cta<R: Rng + ?Sized>(has_recommendations: bool, rng: &mut R) -> String {
    if !has_recommendations {
        return NO_RECOMMENDATIONS_CTA.to_string();
    }
    let candidates = vec![
        "Here are some picks we think you'll like:".to_string(),
        "Some recommendations based on this set:".to_string(),
        "Picks that match your vibe:".to_string(),
    ];
    draw(rng, candidates)
}
