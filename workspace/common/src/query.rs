//! Request-keyed cache behind the dashboard's data fetching.
//!
//! A [`QueryCache`] is owned by exactly one fetching hook. Every request gets
//! a [`Ticket`] stamped with a generation; only the ticket of the latest
//! request may change what is displayed, so a slow response can never
//! overwrite the data of a newer one. Successful stale responses are still
//! kept under their own key for later reuse.

use std::collections::HashMap;
use std::fmt;

use tracing::debug;

/// Cache key derived only from request parameters.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RequestKey(String);

impl RequestKey {
    pub fn new(scope: &str, parts: &[&str]) -> Self {
        if parts.is_empty() {
            Self(scope.to_string())
        } else {
            Self(format!("{scope}:{}", parts.join("|")))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for RequestKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Parameters of a request that can be cached.
pub trait QueryParams {
    fn request_key(&self) -> RequestKey;
}

/// Handle of one in-flight request. Resolving consumes it.
#[derive(Debug, PartialEq, Eq)]
pub struct Ticket {
    key: RequestKey,
    generation: u64,
}

impl Ticket {
    pub fn key(&self) -> &RequestKey {
        &self.key
    }
}

#[derive(Debug, PartialEq, Eq)]
pub enum Begin {
    /// Data for the key is cached and now displayed.
    Cached,
    /// A request has to be made and resolved with this ticket.
    Fetch(Ticket),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution {
    /// Latest request succeeded; its data is displayed.
    Applied,
    /// Latest request failed; report the message once.
    Failed(String),
    /// Superseded request succeeded; cached but not displayed.
    Stored,
    /// Superseded request failed, or newer data for its key is already cached.
    Discarded,
}

/// Read-only snapshot handed to components.
#[derive(Debug, Clone, PartialEq)]
pub struct QueryView<T> {
    pub data: Option<T>,
    pub loading: bool,
    pub error: Option<String>,
    pub key: Option<RequestKey>,
}

impl<T> Default for QueryView<T> {
    fn default() -> Self {
        Self {
            data: None,
            loading: false,
            error: None,
            key: None,
        }
    }
}

/// Most keys kept before the oldest undisplayed entry is evicted.
pub const MAX_ENTRIES: usize = 16;

#[derive(Debug)]
pub struct QueryCache<T> {
    /// Data per key with the generation of the request that produced it.
    entries: HashMap<RequestKey, (u64, T)>,
    generation: u64,
    pending: Option<u64>,
    displayed: Option<RequestKey>,
    error: Option<String>,
}

impl<T> Default for QueryCache<T> {
    fn default() -> Self {
        Self {
            entries: HashMap::new(),
            generation: 0,
            pending: None,
            displayed: None,
            error: None,
        }
    }
}

impl<T: Clone> QueryCache<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts a request for `key`. Serves cached data unless `force` is set.
    ///
    /// Either way any request still in flight is superseded.
    pub fn begin(&mut self, key: RequestKey, force: bool) -> Begin {
        self.generation += 1;

        if !force && self.entries.contains_key(&key) {
            debug!(key = %key, "Serving cached query data");
            self.pending = None;
            self.displayed = Some(key);
            self.error = None;
            return Begin::Cached;
        }

        debug!(key = %key, generation = self.generation, "Starting query request");
        self.pending = Some(self.generation);
        Begin::Fetch(Ticket {
            key,
            generation: self.generation,
        })
    }

    /// Records the outcome of the request behind `ticket`.
    pub fn resolve(&mut self, ticket: Ticket, result: Result<T, String>) -> Resolution {
        let current = self.pending == Some(ticket.generation);

        match result {
            Ok(data) if current => {
                self.entries
                    .insert(ticket.key.clone(), (ticket.generation, data));
                self.pending = None;
                self.displayed = Some(ticket.key);
                self.error = None;
                self.evict();
                Resolution::Applied
            }
            Ok(data) => {
                let newer_cached = self
                    .entries
                    .get(&ticket.key)
                    .is_some_and(|(generation, _)| *generation > ticket.generation);
                if newer_cached {
                    debug!(key = %ticket.key, "Dropping late response, newer data cached");
                    return Resolution::Discarded;
                }
                self.entries
                    .insert(ticket.key, (ticket.generation, data));
                self.evict();
                Resolution::Stored
            }
            Err(message) => {
                if current {
                    self.pending = None;
                    self.error = Some(message.clone());
                    Resolution::Failed(message)
                } else {
                    Resolution::Discarded
                }
            }
        }
    }

    fn evict(&mut self) {
        while self.entries.len() > MAX_ENTRIES {
            let oldest = self
                .entries
                .iter()
                .filter(|(key, _)| self.displayed.as_ref() != Some(*key))
                .min_by_key(|(_, (generation, _))| *generation)
                .map(|(key, _)| key.clone());
            let Some(oldest) = oldest else { break };
            debug!(key = %oldest, "Evicting cached query data");
            self.entries.remove(&oldest);
        }
    }

    pub fn is_loading(&self) -> bool {
        self.pending.is_some()
    }

    pub fn data(&self) -> Option<&T> {
        self.displayed.as_ref().and_then(|key| self.get(key))
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn get(&self, key: &RequestKey) -> Option<&T> {
        self.entries.get(key).map(|(_, data)| data)
    }

    pub fn view(&self) -> QueryView<T> {
        QueryView {
            data: self.data().cloned(),
            loading: self.is_loading(),
            error: self.error.clone(),
            key: self.displayed.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(name: &str) -> RequestKey {
        RequestKey::new("test", &[name])
    }

    fn ticket(begin: Begin) -> Ticket {
        match begin {
            Begin::Fetch(ticket) => ticket,
            Begin::Cached => panic!("expected a fetch"),
        }
    }

    #[test]
    fn keys_are_built_from_parameters() {
        assert_eq!(RequestKey::new("datasets", &[]).as_str(), "datasets");
        assert_eq!(RequestKey::new("gst", &["1", "2"]).to_string(), "gst:1|2");
        assert_eq!(RequestKey::new("gst", &["1"]), RequestKey::new("gst", &["1"]));
    }

    #[test]
    fn lifecycle_goes_from_idle_to_loading_to_success() {
        let mut cache = QueryCache::<u32>::new();
        assert_eq!(cache.view(), QueryView::default());

        let first = ticket(cache.begin(key("a"), false));
        assert!(cache.is_loading());
        assert_eq!(cache.data(), None);

        assert_eq!(cache.resolve(first, Ok(7)), Resolution::Applied);
        let view = cache.view();
        assert!(!view.loading);
        assert_eq!(view.data, Some(7));
        assert_eq!(view.key, Some(key("a")));
        assert_eq!(view.error, None);
    }

    #[test]
    fn failure_keeps_previous_data_and_reports_once() {
        let mut cache = QueryCache::<u32>::new();
        let first = ticket(cache.begin(key("a"), false));
        cache.resolve(first, Ok(1));

        let second = ticket(cache.begin(key("b"), false));
        assert_eq!(
            cache.resolve(second, Err("boom".to_string())),
            Resolution::Failed("boom".to_string())
        );

        assert_eq!(cache.data(), Some(&1));
        assert_eq!(cache.error(), Some("boom"));
        assert!(!cache.is_loading());
    }

    #[test]
    fn stale_success_never_replaces_newer_data() {
        let mut cache = QueryCache::<&str>::new();
        let slow = ticket(cache.begin(key("old"), false));
        let fast = ticket(cache.begin(key("new"), false));

        assert_eq!(cache.resolve(fast, Ok("new data")), Resolution::Applied);
        assert_eq!(cache.resolve(slow, Ok("old data")), Resolution::Stored);

        assert_eq!(cache.data(), Some(&"new data"));
        assert_eq!(cache.get(&key("old")), Some(&"old data"));
    }

    #[test]
    fn stale_failure_is_discarded() {
        let mut cache = QueryCache::<u32>::new();
        let slow = ticket(cache.begin(key("old"), false));
        let fast = ticket(cache.begin(key("new"), false));

        assert_eq!(cache.resolve(slow, Err("late".into())), Resolution::Discarded);
        assert!(cache.is_loading());
        assert_eq!(cache.error(), None);

        assert_eq!(cache.resolve(fast, Ok(3)), Resolution::Applied);
    }

    #[test]
    fn cached_keys_are_served_without_fetching() {
        let mut cache = QueryCache::<u32>::new();
        let first = ticket(cache.begin(key("a"), false));
        cache.resolve(first, Ok(1));
        let second = ticket(cache.begin(key("b"), false));
        cache.resolve(second, Ok(2));

        assert_eq!(cache.begin(key("a"), false), Begin::Cached);
        assert_eq!(cache.data(), Some(&1));
        assert!(!cache.is_loading());
    }

    #[test]
    fn cache_hit_supersedes_request_in_flight() {
        let mut cache = QueryCache::<u32>::new();
        let first = ticket(cache.begin(key("a"), false));
        cache.resolve(first, Ok(1));

        let pending = ticket(cache.begin(key("b"), false));
        assert_eq!(cache.begin(key("a"), false), Begin::Cached);

        assert_eq!(cache.resolve(pending, Ok(2)), Resolution::Stored);
        assert_eq!(cache.data(), Some(&1));
    }

    #[test]
    fn forced_refetch_bypasses_cache() {
        let mut cache = QueryCache::<u32>::new();
        let first = ticket(cache.begin(key("a"), false));
        cache.resolve(first, Ok(1));

        let refetch = ticket(cache.begin(key("a"), true));
        assert!(cache.is_loading());
        assert_eq!(cache.data(), Some(&1));

        assert_eq!(cache.resolve(refetch, Ok(5)), Resolution::Applied);
        assert_eq!(cache.data(), Some(&5));
    }

    #[test]
    fn late_response_for_same_key_keeps_newer_data() {
        let mut cache = QueryCache::<&str>::new();
        let slow = ticket(cache.begin(key("a"), false));
        let other = ticket(cache.begin(key("b"), false));
        let fresh = ticket(cache.begin(key("a"), false));

        assert_eq!(cache.resolve(fresh, Ok("new")), Resolution::Applied);
        assert_eq!(cache.resolve(slow, Ok("old")), Resolution::Discarded);
        assert_eq!(cache.resolve(other, Ok("b")), Resolution::Stored);

        assert_eq!(cache.data(), Some(&"new"));
        assert_eq!(cache.get(&key("a")), Some(&"new"));
    }

    #[test]
    fn out_of_order_forced_refetches_display_latest() {
        let mut cache = QueryCache::<u32>::new();
        let first = ticket(cache.begin(key("a"), false));
        cache.resolve(first, Ok(0));

        let v1 = ticket(cache.begin(key("a"), true));
        let v2 = ticket(cache.begin(key("a"), true));

        assert_eq!(cache.resolve(v2, Ok(2)), Resolution::Applied);
        assert_eq!(cache.resolve(v1, Ok(1)), Resolution::Discarded);
        assert_eq!(cache.data(), Some(&2));
    }

    #[test]
    fn oldest_entries_are_evicted_but_displayed_data_stays() {
        let mut cache = QueryCache::<usize>::new();
        let first = ticket(cache.begin(key("shown"), false));
        cache.resolve(first, Ok(0));

        // Superseded requests fill the cache without changing what is displayed
        let pending: Vec<Ticket> = (0..MAX_ENTRIES + 4)
            .map(|i| ticket(cache.begin(key(&i.to_string()), false)))
            .collect();
        assert_eq!(cache.begin(key("shown"), false), Begin::Cached);
        for (i, t) in pending.into_iter().enumerate() {
            assert_eq!(cache.resolve(t, Ok(i + 1)), Resolution::Stored);
        }

        assert_eq!(cache.entries.len(), MAX_ENTRIES);
        assert_eq!(cache.data(), Some(&0));
        assert_eq!(cache.get(&key("0")), None);
        assert_eq!(cache.get(&key(&(MAX_ENTRIES + 3).to_string())), Some(&(MAX_ENTRIES + 4)));
    }
}
