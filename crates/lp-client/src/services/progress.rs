//! Home-learning progress service
//!
//! Drives the paging core: exhaust the server's pages, order the union
//! with incomplete records first, slice into display pages.

use std::sync::Arc;

use chrono::NaiveDate;

use crate::dto::{GetHomeLearningRequest, HomeLearningRecord, Paginated};
use crate::error::Result;
use crate::paging::{fetch_all_pages, paginate, stable_partition, Page};
use crate::transport::Transport;

/// Fetches and orders home-learning records for a class and date
#[derive(Debug, Clone)]
pub struct ProgressService {
    transport: Arc<Transport>,
    fetch_page_size: u32,
}

impl ProgressService {
    pub fn new(transport: Arc<Transport>, fetch_page_size: u32) -> Self {
        Self {
            transport,
            fetch_page_size,
        }
    }

    /// Retrieve every record matching the query, in server page order.
    ///
    /// Pages are requested strictly sequentially; a failed page aborts
    /// the whole aggregation with no partial result.
    pub async fn fetch_all(
        &self,
        token: &str,
        class_id: &str,
        date: NaiveDate,
    ) -> Result<Vec<HomeLearningRecord>> {
        let page_size = self.fetch_page_size;
        fetch_all_pages(|page| {
            let transport = Arc::clone(&self.transport);
            let path = format!(
                "/api/Student/progress?page={}&pageSize={}",
                page, page_size
            );
            async move {
                let request = GetHomeLearningRequest {
                    token,
                    class_id,
                    choosen_date: date,
                };
                transport
                    .post::<_, Paginated<HomeLearningRecord>>(
                        &path,
                        &request,
                        "Failed to fetch home learning progress",
                    )
                    .await
            }
        })
        .await
    }

    /// The full record set, ordered with incomplete records first.
    ///
    /// The ordering is a stable partition: records still missing an app
    /// metric come first, relative order inside each group is the server
    /// order.
    pub async fn assemble(
        &self,
        token: &str,
        class_id: &str,
        date: NaiveDate,
    ) -> Result<Vec<HomeLearningRecord>> {
        let records = self.fetch_all(token, class_id, date).await?;
        Ok(stable_partition(records, HomeLearningRecord::is_incomplete))
    }

    /// One display page of the ordered record set.
    pub async fn page(
        &self,
        token: &str,
        class_id: &str,
        date: NaiveDate,
        page: u32,
        page_size: u32,
    ) -> Result<Page<HomeLearningRecord>> {
        let ordered = self.assemble(token, class_id, date).await?;
        paginate(&ordered, page, page_size)
    }
}
