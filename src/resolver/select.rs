//! Framework-specific group selection.

use crate::core::TargetProfile;
use crate::resolver::schema::DependencyGroup;

/// Pick the framework-scoped group a profile consumes.
///
/// Candidates are ordered by [`FrameworkMoniker::candidate_order`] and the
/// first one the profile accepts wins. This is not a nearest-match search:
/// with the descending version order it lands on the newest group that is
/// not newer than the profile.
///
/// [`FrameworkMoniker::candidate_order`]: crate::core::FrameworkMoniker::candidate_order
pub fn select_framework_group<'a>(
    groups: &'a [DependencyGroup],
    profile: &TargetProfile,
) -> Option<&'a DependencyGroup> {
    let mut candidates: Vec<_> = groups
        .iter()
        .filter_map(|group| group.moniker().map(|moniker| (moniker, group)))
        .collect();

    candidates.sort_by(|(a, _), (b, _)| a.candidate_order(b));

    let selected = candidates
        .into_iter()
        .find(|(moniker, _)| profile.accepts(moniker));

    match selected {
        Some((moniker, group)) => {
            tracing::debug!("Selected dependency group {} for {}", moniker, profile);
            Some(group)
        }
        None => {
            tracing::debug!("No framework-specific dependency group matches {}", profile);
            None
        }
    }
}
