use super::error::FetchError;
use super::model::{LoadState, Topic, TopicFilter, TopicQuery};
use crate::infrastructure::gateways::TopicGateway;
use parking_lot::Mutex;
use std::sync::{Arc, Weak};
use std::time::Duration;
use tokio::sync::watch;

/// Fixed number of topics requested per page.
pub const PAGE_SIZE: usize = 50;

/// Flat delay before a failed fetch is retried.
const RETRY_DELAY: Duration = Duration::from_secs(1);

/// Rendering surface of the topic list. The loader publishes discrete
/// state-change events; implementations toggle the matching affordance
/// (spinner, empty view, error view) and re-render rows.
pub trait TopicListPresenter: Send + Sync {
    fn on_items_changed(&self, count: usize);
    fn on_empty(&self, visible: bool);
    fn on_network_error(&self, visible: bool);
    fn on_loading_changed(&self, loading: bool);
}

/// Collection, load flag and exhaustion change together, so they live
/// under one lock.
struct ListState {
    topics: Vec<Topic>,
    load_state: LoadState,
    exhausted: bool,
    filter: TopicFilter,
    node_id: Option<i64>,
    // True after a failed fetch until one succeeds, so a reappearing
    // screen knows to recover even when the retry timer is gone.
    fetch_failed: bool,
    // Bumped whenever a fetch starts; pending retries carry the epoch
    // they were armed under and stand down once it moves on.
    retry_epoch: u64,
}

/// Paginated loader for the topic list.
///
/// Owns the ordered topic collection and the pagination cursor (count of
/// items held so far). At most one fetch is in flight at any time;
/// requests made while `Loading` are dropped, so responses are always
/// observed in request order. Failed fetches re-arm themselves on a flat
/// one-second timer until the network recovers or the loader is shut
/// down.
pub struct TopicListLoader {
    gateway: Arc<dyn TopicGateway>,
    presenter: Arc<dyn TopicListPresenter>,
    state: Mutex<ListState>,
    page_size: usize,
    retry_delay: Duration,
    shutdown_tx: watch::Sender<bool>,
    // Handed to retry timers so they never keep the loader alive.
    self_weak: Weak<Self>,
}

impl TopicListLoader {
    pub fn new(gateway: Arc<dyn TopicGateway>, presenter: Arc<dyn TopicListPresenter>) -> Arc<Self> {
        Self::with_paging(gateway, presenter, PAGE_SIZE, RETRY_DELAY)
    }

    pub fn with_paging(
        gateway: Arc<dyn TopicGateway>,
        presenter: Arc<dyn TopicListPresenter>,
        page_size: usize,
        retry_delay: Duration,
    ) -> Arc<Self> {
        let (shutdown_tx, _) = watch::channel(false);
        Arc::new_cyclic(|self_weak| Self {
            gateway,
            presenter,
            state: Mutex::new(ListState {
                topics: Vec::new(),
                load_state: LoadState::Idle,
                exhausted: false,
                filter: TopicFilter::default(),
                node_id: None,
                fetch_failed: false,
                retry_epoch: 0,
            }),
            page_size,
            retry_delay,
            shutdown_tx,
            self_weak: self_weak.clone(),
        })
    }

    /// Fetch the next page and merge it into the collection.
    ///
    /// A refresh discards the held items and starts over from offset 0;
    /// an incremental fetch appends from the current offset. Returns
    /// whether a fetch was actually issued: calls made while a fetch is
    /// already in flight are safe no-ops.
    pub async fn request_next_page(&self, is_refresh: bool) -> bool {
        let query = {
            let mut state = self.state.lock();
            if state.load_state == LoadState::Loading {
                tracing::debug!("fetch already in flight, ignoring request");
                return false;
            }
            state.load_state = LoadState::Loading;
            state.retry_epoch += 1;
            TopicQuery {
                filter: state.filter,
                node_id: state.node_id,
                limit: self.page_size,
                offset: if is_refresh { 0 } else { state.topics.len() },
            }
        };

        self.presenter.on_loading_changed(true);
        self.presenter.on_network_error(false);

        tracing::debug!(
            filter = %query.filter,
            node_id = ?query.node_id,
            offset = query.offset,
            "fetching topics page"
        );

        match self.gateway.fetch_topics(&query).await {
            Ok(page) => {
                let (count, empty) = {
                    let mut state = self.state.lock();
                    if is_refresh {
                        state.topics.clear();
                    }
                    state.exhausted = page.len() < self.page_size;
                    state.topics.extend(page);
                    state.load_state = LoadState::Idle;
                    state.fetch_failed = false;
                    (state.topics.len(), state.topics.is_empty())
                };
                self.presenter.on_empty(empty);
                self.presenter.on_items_changed(count);
                self.presenter.on_loading_changed(false);
            }
            Err(err) => {
                self.handle_failure(&err, is_refresh);
            }
        }
        true
    }

    fn handle_failure(&self, err: &FetchError, is_refresh: bool) {
        tracing::warn!(
            error = %err,
            retry_in = ?self.retry_delay,
            "topics fetch failed, scheduling retry"
        );
        {
            let mut state = self.state.lock();
            state.load_state = LoadState::Idle;
            state.fetch_failed = true;
        }
        self.presenter.on_network_error(true);
        self.presenter.on_loading_changed(false);
        self.schedule_retry(is_refresh);
    }

    /// Re-issue the identical request after the retry delay. The timer
    /// holds only a weak reference and races against the shutdown
    /// signal, so it never outlives the loader; it also stands down if
    /// another fetch started in the meantime (the epoch moved on).
    fn schedule_retry(&self, is_refresh: bool) {
        let loader = self.self_weak.clone();
        let mut shutdown_rx = self.shutdown_tx.subscribe();
        let delay = self.retry_delay;
        let epoch = self.state.lock().retry_epoch;
        tokio::spawn(async move {
            tokio::select! {
                _ = tokio::time::sleep(delay) => {
                    if let Some(loader) = loader.upgrade() {
                        if loader.state.lock().retry_epoch != epoch {
                            return;
                        }
                        loader.request_next_page(is_refresh).await;
                    }
                }
                _ = shutdown_rx.changed() => {}
            }
        });
    }

    /// Switch the sort mode, invalidating everything loaded so far.
    ///
    /// Dropped while a fetch is in flight, the way the original screen
    /// disables its filter control during a load; otherwise the
    /// in-flight response would land in the freshly cleared collection
    /// under the new filter's name. Returns whether the change was
    /// applied.
    pub async fn change_filter(&self, filter: TopicFilter) -> bool {
        {
            let mut state = self.state.lock();
            if state.load_state == LoadState::Loading {
                tracing::debug!("fetch in flight, ignoring filter change");
                return false;
            }
            state.filter = filter;
            state.topics.clear();
            state.exhausted = false;
        }
        self.presenter.on_items_changed(0);
        self.request_next_page(true).await;
        true
    }

    /// Scope the list to one node, or back to all nodes with `None`.
    /// Setting the node it already has is a no-op, and like
    /// `change_filter` the call is dropped while a fetch is in flight.
    pub async fn change_node(&self, node_id: Option<i64>) -> bool {
        {
            let mut state = self.state.lock();
            if state.node_id == node_id || state.load_state == LoadState::Loading {
                return false;
            }
            state.node_id = node_id;
            state.topics.clear();
            state.exhausted = false;
        }
        self.presenter.on_items_changed(0);
        self.request_next_page(true).await;
        true
    }

    /// Issue the initial refresh if nothing has been loaded yet for the
    /// current filter, or if the last fetch failed (covers a screen
    /// reappearing after its retry timer was cancelled by teardown).
    /// Safe to call on every screen appearance; a retry still pending
    /// when this fires stands down via the epoch check.
    pub async fn ensure_loaded(&self) {
        let needs_fetch = {
            let state = self.state.lock();
            state.load_state == LoadState::Idle
                && ((state.topics.is_empty() && !state.exhausted) || state.fetch_failed)
        };
        if needs_fetch {
            self.request_next_page(true).await;
        }
    }

    /// Drop one topic by id, for deletions that happen elsewhere in the
    /// app. Returns whether anything was removed; an unknown id leaves
    /// the collection unchanged.
    pub fn remove_topic(&self, id: i64) -> bool {
        let count = {
            let mut state = self.state.lock();
            let before = state.topics.len();
            state.topics.retain(|topic| topic.id != id);
            if state.topics.len() == before {
                return false;
            }
            state.topics.len()
        };
        self.presenter.on_items_changed(count);
        true
    }

    /// Infinite-scroll trigger: true only at the last row of a
    /// non-empty list while more pages remain.
    pub fn should_load_more(&self, visible_index: usize) -> bool {
        let state = self.state.lock();
        !state.exhausted && !state.topics.is_empty() && visible_index == state.topics.len() - 1
    }

    /// Cancel pending retry timers. Called on teardown of the owning
    /// screen; dropping the last handle has the same effect.
    pub fn shutdown(&self) {
        let _ = self.shutdown_tx.send(true);
    }

    pub fn len(&self) -> usize {
        self.state.lock().topics.len()
    }

    pub fn is_empty(&self) -> bool {
        self.state.lock().topics.is_empty()
    }

    pub fn topic(&self, index: usize) -> Option<Topic> {
        self.state.lock().topics.get(index).cloned()
    }

    /// Snapshot of the current collection, in server order.
    pub fn topics(&self) -> Vec<Topic> {
        self.state.lock().topics.clone()
    }

    pub fn is_exhausted(&self) -> bool {
        self.state.lock().exhausted
    }

    pub fn is_loading(&self) -> bool {
        self.state.lock().load_state == LoadState::Loading
    }

    pub fn filter(&self) -> TopicFilter {
        self.state.lock().filter
    }

    pub fn node_id(&self) -> Option<i64> {
        self.state.lock().node_id
    }
}

impl Drop for TopicListLoader {
    fn drop(&mut self) {
        let _ = self.shutdown_tx.send(true);
    }
}
