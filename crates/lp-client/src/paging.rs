//! Client-side paging core
//!
//! The progress endpoint is paginated server-side, but the dashboard
//! orders records by a rule the backend does not implement (incomplete
//! metrics first). So the client exhausts the server's pages, reorders
//! the union locally, and re-slices it into display pages:
//!
//! 1. [`fetch_all_pages`] - sequential cursor loop until `totalPages` is
//!    reached; any page failure aborts the whole aggregation
//! 2. [`stable_partition`] - two-bucket partition preserving relative
//!    order within each bucket
//! 3. [`paginate`] - 1-indexed local slicing with recomputed page count

use std::future::Future;

use crate::dto::Paginated;
use crate::error::{Error, Result};

/// Page size for the fetch-all loop. Large to minimize round trips.
pub const FETCH_ALL_PAGE_SIZE: u32 = 1000;

/// A locally computed display page
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Page<T> {
    pub data: Vec<T>,
    /// 1-indexed page number that was requested
    pub page: u32,
    pub total_pages: u32,
}

/// Retrieve every page of a paginated endpoint and return the
/// concatenation in page order.
///
/// `fetch` is called with 1-indexed page numbers, strictly sequentially -
/// the total page count is only known after the first response. Any
/// single page failure aborts the whole operation with no partial
/// result; there is no retry.
pub async fn fetch_all_pages<T, F, Fut>(mut fetch: F) -> Result<Vec<T>>
where
    F: FnMut(u32) -> Fut,
    Fut: Future<Output = Result<Paginated<T>>>,
{
    let mut page = 1u32;
    let mut collected = Vec::new();

    loop {
        let mut response = fetch(page).await?;
        collected.append(&mut response.data);

        let has_more = page < response.total_pages;
        if !has_more {
            break;
        }
        page += 1;
    }

    Ok(collected)
}

/// Stable two-way partition: items matching `pred` first, then the rest,
/// relative order preserved within each bucket.
pub fn stable_partition<T, P>(items: Vec<T>, pred: P) -> Vec<T>
where
    P: Fn(&T) -> bool,
{
    // Vec::partition keeps encounter order in both buckets
    let (mut matching, rest): (Vec<T>, Vec<T>) = items.into_iter().partition(|item| pred(item));
    matching.extend(rest);
    matching
}

/// Slice an already-assembled sequence into a 1-indexed display page.
///
/// `total_pages` is recomputed as `ceil(len / page_size)`. A page number
/// past the end yields an empty slice, not an error. A zero page size or
/// page number is rejected.
pub fn paginate<T: Clone>(items: &[T], page: u32, page_size: u32) -> Result<Page<T>> {
    if page_size == 0 {
        return Err(Error::Validation(
            "page size must be greater than zero".to_string(),
        ));
    }
    if page == 0 {
        return Err(Error::Validation("pages are 1-indexed".to_string()));
    }

    let total = items.len();
    let size = page_size as usize;
    let total_pages = (total.div_ceil(size)) as u32;

    let start = (page as usize - 1) * size;
    let data = if start >= total {
        Vec::new()
    } else {
        items[start..(start + size).min(total)].to_vec()
    };

    Ok(Page {
        data,
        page,
        total_pages,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use parking_lot::Mutex;

    fn paged(data: Vec<i32>, total_pages: u32) -> Paginated<i32> {
        Paginated {
            data,
            page: 1,
            page_size: 2,
            total: 0,
            total_pages,
        }
    }

    #[tokio::test]
    async fn fetch_all_concatenates_every_page_in_order() {
        let requested = Mutex::new(Vec::new());

        let collected = fetch_all_pages(|page| {
            requested.lock().push(page);
            let response = match page {
                1 => paged(vec![1, 2], 3),
                2 => paged(vec![3, 4], 3),
                3 => paged(vec![5], 3),
                _ => unreachable!("page {page} must not be requested"),
            };
            async move { Ok(response) }
        })
        .await
        .unwrap();

        assert_eq!(collected, vec![1, 2, 3, 4, 5]);
        assert_eq!(*requested.lock(), vec![1, 2, 3]);
    }

    #[tokio::test]
    async fn fetch_all_single_page() {
        let collected = fetch_all_pages(|page| {
            assert_eq!(page, 1);
            async { Ok(paged(vec![7, 8], 1)) }
        })
        .await
        .unwrap();
        assert_eq!(collected, vec![7, 8]);
    }

    #[tokio::test]
    async fn fetch_all_empty_result() {
        // totalPages == 0 terminates after the first request
        let collected: Vec<i32> = fetch_all_pages(|_| async { Ok(paged(vec![], 0)) })
            .await
            .unwrap();
        assert!(collected.is_empty());
    }

    #[tokio::test]
    async fn fetch_all_aborts_on_failure_with_no_partial_result() {
        let result: Result<Vec<i32>> = fetch_all_pages(|page| async move {
            match page {
                1 => Ok(paged(vec![1, 2], 3)),
                _ => Err(Error::Server("boom".to_string())),
            }
        })
        .await;

        assert!(matches!(result, Err(Error::Server(_))));
    }

    #[test]
    fn partition_is_stable() {
        // indices 0 and 2 are flagged; expected order [0, 2, 1, 3]
        let items = vec![(0, true), (1, false), (2, true), (3, false)];
        let ordered = stable_partition(items, |&(_, flagged)| flagged);
        let indices: Vec<i32> = ordered.into_iter().map(|(i, _)| i).collect();
        assert_eq!(indices, vec![0, 2, 1, 3]);
    }

    #[test]
    fn partition_all_one_bucket() {
        let all_match = stable_partition(vec![1, 2, 3], |_| true);
        assert_eq!(all_match, vec![1, 2, 3]);
        let none_match = stable_partition(vec![1, 2, 3], |_| false);
        assert_eq!(none_match, vec![1, 2, 3]);
    }

    #[test]
    fn paginate_slices_and_counts() {
        let items: Vec<u32> = (0..25).collect();

        let first = paginate(&items, 1, 10).unwrap();
        assert_eq!(first.data, (0..10).collect::<Vec<_>>());
        assert_eq!(first.total_pages, 3);

        let last = paginate(&items, 3, 10).unwrap();
        assert_eq!(last.data, (20..25).collect::<Vec<_>>());
        assert_eq!(last.data.len(), 5);

        let past_end = paginate(&items, 4, 10).unwrap();
        assert!(past_end.data.is_empty());
        assert_eq!(past_end.total_pages, 3);
    }

    #[test]
    fn paginate_empty_input() {
        let page = paginate::<u32>(&[], 1, 10).unwrap();
        assert!(page.data.is_empty());
        assert_eq!(page.total_pages, 0);
    }

    #[test]
    fn paginate_rejects_zero_page_size() {
        let err = paginate(&[1, 2, 3], 1, 0).unwrap_err();
        assert!(matches!(err, Error::Validation(_)));
    }

    #[test]
    fn paginate_rejects_page_zero() {
        let err = paginate(&[1, 2, 3], 0, 10).unwrap_err();
        assert!(matches!(err, Error::Validation(_)));
    }

    #[test]
    fn repagination_round_trips() {
        let items: Vec<u32> = (0..25).collect();
        let total_pages = paginate(&items, 1, 10).unwrap().total_pages;

        let mut reassembled = Vec::new();
        for page in 1..=total_pages {
            reassembled.extend(paginate(&items, page, 10).unwrap().data);
        }

        assert_eq!(reassembled, items);
    }
}
