use rand::Rng;

/// Default share of attendees eligible for messaging
pub const DEFAULT_PERCENTAGE: u8 = 10;

/// Default lower bound on the number of selected attendees
pub const DEFAULT_MIN_COUNT: usize = 1;

/// Select a random subset of attendees eligible for messaging
///
/// The subset size is `round(T * percentage / 100)` clamped to
/// `[min_count, T]` for `T` attendees. Identifiers are drawn without
/// replacement, uniformly over all subsets of that size, from the caller's
/// generator; an empty attendee list returns an empty subset without
/// touching the generator. No identifier appears twice.
pub fn select_recipients<R: Rng + ?Sized>(
    attendees: &[String],
    percentage: u8,
    min_count: usize,
    rng: &mut R,
) -> Vec<String> {
    if attendees.is_empty() {
        return Vec::new();
    }

    let total = attendees.len();
    let target = (total as f64 * percentage as f64 / 100.0).round() as usize;
    let count = target.max(min_count).min(total);

    let selected: Vec<String> = rand::seq::index::sample(rng, total, count)
        .iter()
        .map(|index| attendees[index].clone())
        .collect();

    tracing::trace!("Selected {} of {} attendees for messaging", count, total);

    selected
}
