use eyre::Result;

mod api;

pub use api::{Api, ApiResponse, GuestSession};
pub use hotel_core::{BookOutcome, Booking, CancelOutcome};

pub struct TestCtxBuilder {
    /// Number of rooms the hotel starts with
    pub rooms: u32,
    /// Count of mock transport worker threads
    pub worker_threads: u16,
}

impl TestCtxBuilder {
    /// Create a new test context builder with the service defaults
    pub fn new() -> Self {
        TestCtxBuilder {
            rooms: 5,
            worker_threads: 2,
        }
    }

    /// Set the number of rooms
    pub fn with_rooms(mut self, rooms: u32) -> Self {
        self.rooms = rooms;
        self
    }

    /// Set the number of mock transport worker threads to use
    pub fn with_worker_threads(mut self, threads: u16) -> Self {
        assert_ne!(threads, 0);
        self.worker_threads = threads;
        self
    }

    /// Get the [`hotel_core::Config`] for launching the booking service
    fn config(&self) -> hotel_core::Config {
        hotel_core::Config { rooms: self.rooms }
    }

    /// Build the test context
    pub async fn build(self) -> Result<TestCtx> {
        let (service, api) = api::mock::start(self.worker_threads, self.config()).await;

        Ok(TestCtx {
            api,
            service,
            rooms: self.rooms,
            worker_threads: self.worker_threads,
            drop_bomb: DropBomb,
        })
    }
}

impl Default for TestCtxBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Test context
pub struct TestCtx {
    /// API allowing to interact with the booking service
    pub api: Api,
    service: api::mock::MockService,
    /// Number of rooms
    pub rooms: u32,
    /// Number of mock transport worker threads
    pub worker_threads: u16,

    drop_bomb: DropBomb,
}

impl TestCtx {
    /// Shut down the booking service and finish the test
    pub async fn finish(self) {
        std::mem::forget(self.drop_bomb);
        drop(self.api);
        self.service.shutdown().await;
    }
}

struct DropBomb;

impl Drop for DropBomb {
    fn drop(&mut self) {
        eprintln!(
            "@TestAuthor: You should call `ctx.finish().await` to shut the booking service down"
        );
    }
}
