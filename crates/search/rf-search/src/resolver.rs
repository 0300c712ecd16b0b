//! Parent resolution of matched codes.

use crate::{MatchSet, ReferentialIndex};
use rf_error::{Result, SearchError};
use rf_types::{NO_PARENT_LABEL, ParentPolicy, ResolvedEntry};
use tracing::warn;

/// Returns one resolved entry per code of `codes` found in `referential`,
/// sorted by code.
///
/// Codes absent from the referential are dropped. The parent label is looked
/// up once (no recursion); entries that are their own parent get `"N/A"`.
/// A parent code missing from the referential is handled by `policy`.
pub fn get_rome_details(
    codes: &MatchSet,
    referential: &ReferentialIndex,
    policy: ParentPolicy,
) -> Result<Vec<ResolvedEntry>> {
    let mut details = Vec::with_capacity(codes.len());

    for code in codes {
        let Some(entry) = referential.get(code) else {
            continue;
        };

        let parent_label = if entry.is_root() {
            NO_PARENT_LABEL.to_string()
        } else {
            match (referential.get(&entry.parent_code), policy) {
                (Some(parent), _) => parent.label.clone(),
                (None, ParentPolicy::Lenient) => {
                    warn!(
                        code = %entry.code,
                        parent = %entry.parent_code,
                        "Parent code not in referential, using N/A"
                    );
                    NO_PARENT_LABEL.to_string()
                }
                (None, ParentPolicy::Strict) => {
                    return Err(SearchError::KeyNotFound {
                        code: entry.code.clone(),
                        parent: entry.parent_code.clone(),
                    }
                    .into());
                }
            }
        };

        details.push(ResolvedEntry {
            code: entry.code.clone(),
            label: entry.label.clone(),
            parent_code: entry.parent_code.clone(),
            parent_label,
        });
    }

    details.sort_by(|a, b| a.code.cmp(&b.code));
    Ok(details)
}
