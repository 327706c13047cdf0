//! High-level LearnPortal client

use std::sync::Arc;

use crate::config::ClientConfig;
use crate::error::Result;
use crate::services::{AuthService, ClassService, ProgressService, StudentService};
use crate::session::SessionStore;
use crate::transport::Transport;

/// LearnPortal API client
///
/// Bundles the transport with the domain services. The session store is
/// injected so callers choose where the session lives (a file for the
/// dashboard, memory for tests).
#[derive(Debug, Clone)]
pub struct Client {
    transport: Arc<Transport>,
    auth: AuthService,
    classes: ClassService,
    students: StudentService,
    progress: ProgressService,
}

impl Client {
    /// Create a new client with the given configuration and session store
    pub fn new(config: ClientConfig, store: Arc<dyn SessionStore>) -> Result<Self> {
        let transport =
            Arc::new(Transport::new(&config)?.with_session_store(Arc::clone(&store)));

        Ok(Self {
            auth: AuthService::new(Arc::clone(&transport), store),
            classes: ClassService::new(Arc::clone(&transport)),
            students: StudentService::new(Arc::clone(&transport)),
            progress: ProgressService::new(Arc::clone(&transport), config.fetch_page_size),
            transport,
        })
    }

    /// Get the base URL
    pub fn base_url(&self) -> &str {
        self.transport.base_url()
    }

    /// Login/logout and session checks
    pub fn auth(&self) -> &AuthService {
        &self.auth
    }

    /// Class listing
    pub fn classes(&self) -> &ClassService {
        &self.classes
    }

    /// Class rosters
    pub fn students(&self) -> &StudentService {
        &self.students
    }

    /// Home-learning progress
    pub fn progress(&self) -> &ProgressService {
        &self.progress
    }
}
