//! Score rendering
//!
//! Splits a result string into period segments. The number of segments is
//! the current period; goals are counted across all segments.

use types::result::{AWAY_GOAL, HOME_GOAL, PERIOD_SEPARATOR};
use types::score::RenderedScore;

/// Derive score and current period from a result string
pub fn score(result: &str) -> RenderedScore {
    let mut score = RenderedScore {
        home: 0,
        away: 0,
        period: 0,
    };

    for segment in result.split(PERIOD_SEPARATOR) {
        score.period += 1;
        for c in segment.chars() {
            match c {
                HOME_GOAL => score.home += 1,
                AWAY_GOAL => score.away += 1,
                _ => {}
            }
        }
    }

    score
}

/// Render a result string as `"<home> : <away> (<period label>)"`
pub fn render(result: &str) -> String {
    score(result).to_string()
}
