//! Student roster service

use std::sync::Arc;

use crate::dto::{GetStudentsRequest, Paginated, StudentSummary};
use crate::error::Result;
use crate::transport::Transport;

/// Lists the students of a class
#[derive(Debug, Clone)]
pub struct StudentService {
    transport: Arc<Transport>,
}

impl StudentService {
    pub fn new(transport: Arc<Transport>) -> Self {
        Self { transport }
    }

    /// Get one server page of the class roster.
    pub async fn list(
        &self,
        token: &str,
        class_id: &str,
        page: u32,
        page_size: u32,
    ) -> Result<Paginated<StudentSummary>> {
        let request = GetStudentsRequest { token, class_id };
        self.transport
            .post(
                &format!("/api/Student?page={}&pageSize={}", page, page_size),
                &request,
                "Failed to fetch students",
            )
            .await
    }
}
