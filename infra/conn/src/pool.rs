use crate::error::ConnError;
use gate_domain::config::ConnConfig;
use gate_domain::constants::CONNECTION;
use gate_kernel::id::TaggedId;
use parking_lot::Mutex;
use std::sync::Arc;
use tracing::debug;

/// Shared record of completed releases, in the order they happened.
///
/// Exists so callers (and tests) can observe that every acquisition was
/// balanced by exactly one release.
#[derive(Default, Debug, Clone)]
pub struct ReleaseLog {
    entries: Arc<Mutex<Vec<String>>>,
}

impl ReleaseLog {
    fn record(&self, id: &TaggedId) {
        self.entries.lock().push(id.as_str().to_owned());
    }

    /// Snapshot of the released IDs, oldest first.
    #[must_use]
    pub fn entries(&self) -> Vec<String> {
        self.entries.lock().clone()
    }

    /// Number of releases recorded so far.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.lock().len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.lock().is_empty()
    }
}

#[derive(Debug)]
struct PoolInner {
    max_open: usize,
    open: Mutex<usize>,
    log: ReleaseLog,
}

/// A handle-lending pool with a fixed open-connection budget.
///
/// Clone-cheap: clones share the same budget and release log.
#[derive(Debug, Clone)]
pub struct ConnPool {
    inner: Arc<PoolInner>,
}

impl Default for ConnPool {
    fn default() -> Self {
        Self::new(&ConnConfig::default())
    }
}

impl ConnPool {
    /// Creates a pool with the configured open-handle limit.
    #[must_use]
    pub fn new(config: &ConnConfig) -> Self {
        Self {
            inner: Arc::new(PoolInner {
                max_open: config.max_open,
                open: Mutex::new(0),
                log: ReleaseLog::default(),
            }),
        }
    }

    /// Opens a new connection handle.
    ///
    /// # Errors
    /// Returns [`ConnError::Exhausted`] when the open-handle limit is reached,
    /// or [`ConnError::Internal`] if an ID cannot be minted.
    pub fn acquire(&self) -> Result<Conn, ConnError> {
        {
            let mut open = self.inner.open.lock();
            if *open >= self.inner.max_open {
                return Err(ConnError::Exhausted {
                    message: format!("{} handles already open", self.inner.max_open).into(),
                    context: None,
                });
            }
            *open += 1;
        }

        let id = TaggedId::mint(CONNECTION).map_err(|e| {
            // Roll the count back; the handle never existed.
            *self.inner.open.lock() -= 1;
            ConnError::Internal { message: e.to_string().into(), context: Some("Minting connection ID".into()) }
        })?;

        debug!(conn = %id, "Connection opened");

        Ok(Conn { id, pool: Arc::clone(&self.inner), active: true })
    }

    /// Runs `f` with a fresh handle, releasing it on success, error, and unwind.
    ///
    /// # Errors
    /// Propagates [`ConnError`] from acquisition (via `E: From<ConnError>`) and
    /// whatever `f` returns.
    pub fn scoped<T, E, F>(&self, f: F) -> Result<T, E>
    where
        F: FnOnce(&Conn) -> Result<T, E>,
        E: From<ConnError>,
    {
        let conn = self.acquire()?;
        f(&conn)
        // `conn` drops here on every path out of `f`.
    }

    /// Number of handles currently open.
    #[must_use]
    pub fn open_count(&self) -> usize {
        *self.inner.open.lock()
    }

    /// The shared release log.
    #[must_use]
    pub fn release_log(&self) -> ReleaseLog {
        self.inner.log.clone()
    }
}

/// A connection-like guard. Releasing is not the caller's job: dropping the
/// guard (or calling [`Conn::close`]) releases the handle exactly once.
#[derive(Debug)]
pub struct Conn {
    id: TaggedId,
    pool: Arc<PoolInner>,
    active: bool,
}

impl Conn {
    /// The handle's identifier.
    #[must_use]
    pub fn id(&self) -> &TaggedId {
        &self.id
    }

    /// Releases the handle now instead of at end of scope.
    pub fn close(mut self) {
        self.release();
    }

    fn release(&mut self) {
        if !self.active {
            return;
        }
        self.active = false;

        *self.pool.open.lock() -= 1;
        self.pool.log.record(&self.id);
        debug!(conn = %self.id, "Connection closed");
    }
}

impl Drop for Conn {
    fn drop(&mut self) {
        self.release();
    }
}
