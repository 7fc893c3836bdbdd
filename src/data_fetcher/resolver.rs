//! Team resolution against the fetched directory.

use tracing::debug;

use super::models::TeamInfo;
use crate::error::AppError;

/// Returns the first directory entry whose lowercase display name contains
/// the query as a substring, or whose lowercase abbreviation equals the
/// query exactly. Directory order is the tie-break: the scan is stable and
/// deterministic, not an edit-distance ranking, so an abbreviation-exact
/// entry later in the directory loses to an earlier name-substring entry.
pub fn resolve_team<'a>(query: &str, directory: &'a [TeamInfo]) -> Result<&'a TeamInfo, AppError> {
    let needle = query.trim().to_lowercase();
    if needle.is_empty() {
        return Err(AppError::team_not_found(query));
    }

    let resolved = directory.iter().find(|team| {
        team.display_name.to_lowercase().contains(&needle)
            || team.abbreviation.to_lowercase() == needle
    });

    match resolved {
        Some(team) => {
            debug!(
                "Resolved '{query}' to {} (id {})",
                team.display_name, team.id
            );
            Ok(team)
        }
        None => Err(AppError::team_not_found(query)),
    }
}
