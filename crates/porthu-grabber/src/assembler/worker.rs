//! Detail-page workers
//!
//! Each worker owns its HTTP client, pinned to one provider endpoint, and its
//! rate limiter for its whole lifetime. Workers pull detail-url groups from a
//! shared queue and send parsed programmes back in completion order.

use std::collections::{HashSet, VecDeque};
use std::net::SocketAddr;
use std::sync::{Arc, Mutex, PoisonError};

use tokio::sync::mpsc;
use tokio::task::JoinSet;
use tracing::{Instrument, debug, error, info_span, warn};

use super::collect_programmes;
use super::progress::ProgressReporter;
use crate::errors::{AppResult, FetchError};
use crate::fetch::{ClientFactory, FetchPolicy, RateLimitedFetcher};
use crate::models::{Programme, RawEvent};
use crate::parser::{DetailPage, ProgramPageParser};

/// Listing entries sharing one detail page
#[derive(Debug, Clone, PartialEq)]
pub struct DetailGroup {
    /// Absolute detail-page URL
    pub url: String,
    pub events: Vec<RawEvent>,
}

impl DetailGroup {
    /// Programmes from listing data alone
    pub fn parse_basic(&self) -> Vec<AppResult<Programme>> {
        ProgramPageParser::parse(&self.events, None)
    }
}

/// Per-worker state, built once when the worker starts
pub struct WorkerContext {
    id: usize,
    fetcher: Option<RateLimitedFetcher>,
}

impl WorkerContext {
    /// A worker without a client still answers every group, with basic data
    pub fn new(
        id: usize,
        clients: &dyn ClientFactory,
        endpoint: Option<SocketAddr>,
        policy: FetchPolicy,
    ) -> Self {
        let fetcher = match clients.create(endpoint) {
            Ok(http) => {
                match endpoint {
                    Some(addr) => debug!("Worker {id} uses endpoint {addr}"),
                    None => debug!("Worker {id} uses system name resolution"),
                }
                Some(RateLimitedFetcher::new(http, policy))
            }
            Err(e) => {
                warn!("Worker {id} could not create an HTTP client: {e}. Using basic information.");
                None
            }
        };
        Self { id, fetcher }
    }

    pub fn id(&self) -> usize {
        self.id
    }

    /// Fetch and parse the detail page of `group`
    ///
    /// Every event of the group yields one result whatever happens to the
    /// request.
    pub async fn process(&mut self, group: &DetailGroup) -> Vec<AppResult<Programme>> {
        let Some(fetcher) = self.fetcher.as_mut() else {
            return group.parse_basic();
        };

        match fetcher.fetch_with_retry(&group.url).await {
            Ok(response) => {
                let page = DetailPage::from_html(&group.url, &response.body);
                ProgramPageParser::parse(&group.events, Some(&page))
            }
            Err(FetchError::Status { status, url }) => {
                warn!(
                    "Response code indicating failure: {status}. Retrieving program details \
                     failed. Url: {url} Using basic information."
                );
                group.parse_basic()
            }
            Err(e) => {
                warn!(
                    "Retrieving program details failed ({}). Url: {} Using basic information.",
                    e.error_type(),
                    e.url()
                );
                group.parse_basic()
            }
        }
    }
}

/// Groups waiting for a worker
#[derive(Clone, Default)]
struct WorkQueue {
    groups: Arc<Mutex<VecDeque<DetailGroup>>>,
}

impl WorkQueue {
    fn new(groups: Vec<DetailGroup>) -> Self {
        Self {
            groups: Arc::new(Mutex::new(groups.into())),
        }
    }

    fn next(&self) -> Option<DetailGroup> {
        self.groups
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .pop_front()
    }
}

struct GroupResult {
    url: String,
    programmes: Vec<AppResult<Programme>>,
}

/// A bounded set of workers, one per assigned endpoint
pub struct WorkerPool {
    clients: Arc<dyn ClientFactory>,
    policy: FetchPolicy,
}

impl WorkerPool {
    pub fn new(clients: Arc<dyn ClientFactory>, policy: FetchPolicy) -> Self {
        Self { clients, policy }
    }

    /// Enrich all groups with one worker per entry of `endpoints`
    ///
    /// Programmes come back in completion order. Groups a worker never
    /// reported back on (for instance after a panic) get basic data.
    pub async fn run(
        &self,
        groups: Vec<DetailGroup>,
        endpoints: Vec<Option<SocketAddr>>,
    ) -> Vec<Programme> {
        let mut progress = ProgressReporter::new(groups.len());
        let queue = WorkQueue::new(groups.clone());
        let (tx, mut rx) = mpsc::unbounded_channel();

        let mut workers = JoinSet::new();
        for (id, endpoint) in endpoints.into_iter().enumerate() {
            let context = WorkerContext::new(id, self.clients.as_ref(), endpoint, self.policy);
            workers.spawn(
                run_worker(context, queue.clone(), tx.clone()).instrument(info_span!("worker", id)),
            );
        }
        drop(tx);

        let mut programmes = Vec::new();
        let mut completed: HashSet<String> = HashSet::new();
        while let Some(result) = rx.recv().await {
            programmes.extend(collect_programmes(result.programmes));
            completed.insert(result.url);
            progress.advance(1);
        }

        while let Some(joined) = workers.join_next().await {
            if let Err(e) = joined {
                error!("Detail worker stopped unexpectedly: {e}");
            }
        }

        for group in groups.iter().filter(|group| !completed.contains(&group.url)) {
            warn!(
                "No details retrieved. Url: {} Using basic information.",
                group.url
            );
            programmes.extend(collect_programmes(group.parse_basic()));
            progress.advance(1);
        }

        programmes
    }
}

async fn run_worker(
    mut context: WorkerContext,
    queue: WorkQueue,
    results: mpsc::UnboundedSender<GroupResult>,
) {
    let mut handled = 0usize;
    while let Some(group) = queue.next() {
        let programmes = context.process(&group).await;
        handled += 1;
        let result = GroupResult {
            url: group.url,
            programmes,
        };
        if results.send(result).is_err() {
            break;
        }
    }
    debug!("Worker {} finished after {handled} page(s)", context.id());
}
