use crate::types::scoring::{Rating, Score};

const POOR_BELOW: Score = 40.0;
const ACCEPTABLE_BELOW: Score = 60.0;
const GOOD_BELOW: Score = 80.0;

pub fn interpret(score: Score) -> Rating {
    if score < POOR_BELOW {
        Rating::Poor
    } else if score < ACCEPTABLE_BELOW {
        Rating::Acceptable
    } else if score < GOOD_BELOW {
        Rating::Good
    } else {
        Rating::Excellent
    }
}
