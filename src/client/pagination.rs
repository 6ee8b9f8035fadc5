use crate::client::applied_store::AppliedSet;
use crate::models::job::Job;

pub const DEFAULT_PAGE_SIZE: usize = 10;

/// Jobs still to show: the raw result list minus everything marked applied.
pub fn filter_applied<'a>(jobs: &'a [Job], applied: &AppliedSet) -> Vec<&'a Job> {
    jobs.iter().filter(|job| !applied.contains(&job.id)).collect()
}

/// Number of pages for `count` items; an empty list still has one page.
pub fn total_pages(count: usize, page_size: usize) -> usize {
    count.div_ceil(page_size.max(1)).max(1)
}

pub fn clamp_page(page: usize, total_pages: usize) -> usize {
    page.clamp(1, total_pages.max(1))
}

#[derive(Debug, Clone, PartialEq)]
pub struct Page<'a> {
    pub items: Vec<&'a Job>,
    /// 1-based, already clamped into range.
    pub number: usize,
    pub total_pages: usize,
    /// Size of the filtered list the page was cut from.
    pub total_items: usize,
}

impl<'a> Page<'a> {
    pub fn has_previous(&self) -> bool {
        self.number > 1
    }

    pub fn has_next(&self) -> bool {
        self.number < self.total_pages
    }
}

/// Cuts page `page_number` out of an already filtered list.
pub fn paginate<'a>(filtered: &[&'a Job], page_number: usize, page_size: usize) -> Page<'a> {
    let page_size = page_size.max(1);
    let total_pages = total_pages(filtered.len(), page_size);
    let number = clamp_page(page_number, total_pages);

    let start = (number - 1) * page_size;
    let end = (start + page_size).min(filtered.len());
    let items = filtered.get(start..end).unwrap_or_default().to_vec();

    Page {
        items,
        number,
        total_pages,
        total_items: filtered.len(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn jobs(count: usize) -> Vec<Job> {
        (1..=count)
            .map(|i| {
                serde_json::from_value(serde_json::json!({
                    "id": i.to_string(),
                    "title": format!("Job {}", i),
                }))
                .unwrap()
            })
            .collect()
    }

    fn ids(page: &Page<'_>) -> Vec<String> {
        page.items.iter().map(|j| j.id.clone()).collect()
    }

    #[test]
    fn empty_list_is_one_page_with_no_navigation() {
        let page = paginate(&[], 1, 10);
        assert_eq!(page.total_pages, 1);
        assert_eq!(page.number, 1);
        assert!(page.items.is_empty());
        assert!(!page.has_previous());
        assert!(!page.has_next());
    }

    #[test]
    fn twenty_three_items_make_three_pages() {
        let all = jobs(23);
        let filtered = filter_applied(&all, &AppliedSet::new());

        let first = paginate(&filtered, 1, 10);
        assert_eq!(first.total_pages, 3);
        assert_eq!(first.items.len(), 10);
        assert!(!first.has_previous());
        assert!(first.has_next());

        let last = paginate(&filtered, 3, 10);
        assert_eq!(last.items.len(), 3);
        assert_eq!(ids(&last), ["21", "22", "23"]);
        assert!(last.has_previous());
        assert!(!last.has_next());
    }

    #[test]
    fn out_of_range_pages_are_clamped() {
        let all = jobs(5);
        let filtered = filter_applied(&all, &AppliedSet::new());
        assert_eq!(paginate(&filtered, 0, 2).number, 1);
        assert_eq!(paginate(&filtered, 99, 2).number, 3);
        assert_eq!(ids(&paginate(&filtered, 99, 2)), ["5"]);
    }

    #[test]
    fn applied_jobs_are_filtered_before_paging() {
        let all = jobs(4);
        let applied: AppliedSet = ["2".to_string(), "missing".to_string()].into();

        let filtered = filter_applied(&all, &applied);
        let visible: Vec<_> = filtered.iter().map(|j| j.id.as_str()).collect();
        assert_eq!(visible, ["1", "3", "4"]);

        let page = paginate(&filtered, 2, 2);
        assert_eq!(page.total_items, 3);
        assert_eq!(ids(&page), ["4"]);
    }

    #[test]
    fn page_count_rounds_up() {
        assert_eq!(total_pages(0, 10), 1);
        assert_eq!(total_pages(10, 10), 1);
        assert_eq!(total_pages(11, 10), 2);
        assert_eq!(total_pages(3, 0), 3);
    }
}
