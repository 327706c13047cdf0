//! Class listing service

use std::sync::Arc;

use crate::dto::{ClassSummary, GetClassesRequest, Paginated};
use crate::error::Result;
use crate::transport::Transport;

/// Lists the classes visible to the logged-in staff account
#[derive(Debug, Clone)]
pub struct ClassService {
    transport: Arc<Transport>,
}

impl ClassService {
    pub fn new(transport: Arc<Transport>) -> Self {
        Self { transport }
    }

    /// Get one server page of classes.
    pub async fn list(
        &self,
        token: &str,
        page: u32,
        page_size: u32,
    ) -> Result<Paginated<ClassSummary>> {
        let request = GetClassesRequest { token };
        self.transport
            .post(
                &format!("/api/Class?page={}&pageSize={}", page, page_size),
                &request,
                "Failed to fetch classes",
            )
            .await
    }
}
