use crate::core::ledger::SwipeLedger;
use crate::core::registry::UserRegistry;
use crate::models::{Identity, User};

/// Check whether `candidate` may be shown to `requester`
///
/// The requester never sees themself or anyone they already swiped on.
#[inline]
pub fn is_matchable(ledger: &SwipeLedger, requester: &Identity, candidate: &User) -> bool {
    if &candidate.identity == requester {
        return false;
    }

    !ledger.has_swiped(requester, &candidate.identity)
}

/// Page of users `requester` can still swipe on
///
/// Lazily walks the registry in registration order. `offset` counts
/// candidates that survived filtering, so consecutive pages never overlap
/// as long as the requester does not swipe in between.
pub fn matchable_users<'a>(
    registry: &'a UserRegistry,
    ledger: &'a SwipeLedger,
    requester: &'a Identity,
    offset: usize,
    limit: usize,
) -> impl Iterator<Item = &'a User> + 'a {
    registry
        .iter()
        .filter(move |user| is_matchable(ledger, requester, user))
        .skip(offset)
        .take(limit)
}
