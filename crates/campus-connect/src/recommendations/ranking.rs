use super::scored::Scored;

/// Organizations and events return at most this many results.
pub const TOP_RECOMMENDATIONS: usize = 7;

/// Sorts by score, highest first. Equal scores keep catalog order.
pub fn rank<R>(mut scored: Vec<Scored<R>>) -> Vec<Scored<R>> {
    scored.sort_by(|left, right| right.score.total_cmp(&left.score));
    scored
}

pub fn top<R>(scored: Vec<Scored<R>>, limit: usize) -> Vec<Scored<R>> {
    let mut ranked = rank(scored);
    ranked.truncate(limit);
    ranked
}

/// Drops non-positive scores, then ranks what remains.
pub fn positive<R>(scored: Vec<Scored<R>>) -> Vec<Scored<R>> {
    rank(
        scored
            .into_iter()
            .filter(|candidate| candidate.score > 0.0)
            .collect(),
    )
}
