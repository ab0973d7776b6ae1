//! Cache policy declarations.

/// Caching strategy requested for a call.
///
/// The policy is carried on every descriptor so call sites can state their
/// intent, but no transport consults it: every request goes to the network.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum CachePolicy {
    /// Fetch from the URL only, never from the cache.
    #[default]
    RequestFromUrlNoCache,
    /// Serve from the cache first, then fetch from the URL and update the cache.
    RequestFromCacheFirstThenFromUrlAndUpdateInCache,
    /// Serve from the cache first, then fetch from the URL and update the
    /// cache only if the data changed.
    RequestFromCacheFirstThenFromUrlIfDifferentAndUpdateInCache,
    /// Serve from the cache if available, otherwise fetch from the URL and
    /// update the cache.
    RequestFromCacheIfAvailableOtherwiseFromUrlAndUpdateInCache,
    /// Fetch from the URL only and update the cache.
    RequestFromUrlAndUpdateInCache,
    /// Serve from the cache only, then refresh it from the URL in the background.
    RequestFromCacheOnlyThenCallUrlInBackgroundAndUpdateInCache,
}

impl CachePolicy {
    /// Every declared policy, in declaration order.
    pub const ALL: [Self; 6] = [
        Self::RequestFromUrlNoCache,
        Self::RequestFromCacheFirstThenFromUrlAndUpdateInCache,
        Self::RequestFromCacheFirstThenFromUrlIfDifferentAndUpdateInCache,
        Self::RequestFromCacheIfAvailableOtherwiseFromUrlAndUpdateInCache,
        Self::RequestFromUrlAndUpdateInCache,
        Self::RequestFromCacheOnlyThenCallUrlInBackgroundAndUpdateInCache,
    ];
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_policy_skips_cache() {
        assert_eq!(CachePolicy::default(), CachePolicy::RequestFromUrlNoCache);
    }

    #[test]
    fn all_policies_are_distinct() {
        let unique: std::collections::HashSet<_> = CachePolicy::ALL.iter().collect();
        assert_eq!(unique.len(), CachePolicy::ALL.len());
    }
}
