use super::facts::Facts;

/// The single situation label that drives headline and observation
/// selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Category {
    TightTempo,
    WideTempo,
    HighEnergy,
    Upbeat,
    Default,
}

/// Maps facts to a category through an ordered decision list; the first
/// matching rule wins. Tempo-shape rules are checked before mood rules.
/// Pure function of the facts, stable across repeated calls.
pub fn classify(facts: &Facts) -> Category {
    let n = facts.n as f64;
    if facts.tempo_span <= 25 && facts.n >= 3 {
        Category::TightTempo
    } else if facts.tempo_span > 50 && facts.n >= 3 {
        Category::WideTempo
    } else if facts.high_energy_count as f64 >= 0.7 * n {
        Category::HighEnergy
    } else if facts.high_valence_count as f64 >= n / 2.0 {
        Category::Upbeat
    } else {
        Category::Default
    }
}
