use serde::{Serialize, Serializer};

/// A catalog record annotated with its score and the sentences that produced it.
///
/// `reasons` serializes as a single space-joined `Recommendation Explanation` string; the order
/// is the order in which the rules fired.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Scored<R> {
    #[serde(flatten)]
    pub record: R,
    #[serde(rename = "Score")]
    pub score: f64,
    #[serde(rename = "Recommendation Explanation", serialize_with = "join_reasons")]
    pub reasons: Vec<String>,
}

impl<R> Scored<R> {
    pub fn explanation(&self) -> String {
        self.reasons.join(" ")
    }
}

fn join_reasons<S>(reasons: &[String], serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.serialize_str(&reasons.join(" "))
}

/// Accumulates rule contributions in rule order.
#[derive(Debug, Default)]
pub(crate) struct Tally {
    score: f64,
    reasons: Vec<String>,
}

impl Tally {
    pub(crate) fn add(&mut self, points: f64, reason: impl Into<String>) {
        self.score += points;
        self.reasons.push(reason.into());
    }

    pub(crate) fn finish<R>(self, record: R) -> Scored<R> {
        Scored {
            record,
            score: round_score(self.score),
            reasons: self.reasons,
        }
    }
}

/// Two decimal places.
pub fn round_score(score: f64) -> f64 {
    (score * 100.0).round() / 100.0
}
