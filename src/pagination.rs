use serde::Serialize;

fn get_pages(
    total_pages: usize,
    current_page: usize,
    left_edge: usize,
    left_current: usize,
    right_current: usize,
    right_edge: usize,
) -> Vec<Option<usize>> {
    let last_page = total_pages;

    if last_page == 0 {
        return vec![];
    }

    let mut pages = Vec::new();

    let left_end = (1 + left_edge).min(last_page + 1);
    pages.extend((1..left_end).map(Some));

    let mid_start = left_end.max(current_page.saturating_sub(left_current));
    let mid_end = (current_page + right_current + 1).min(last_page + 1);

    if mid_start > left_end {
        pages.push(None);
    }
    pages.extend((mid_start..mid_end).map(Some));

    let right_start = mid_end.max(last_page.saturating_sub(right_edge) + 1);

    if right_start > mid_end {
        pages.push(None);
    }
    pages.extend((right_start..=last_page).map(Some));

    pages
}

/// One page of a list view plus the windowed page links rendered under the
/// table (`None` marks an ellipsis).
#[derive(Serialize)]
pub struct Paginated<T> {
    pub items: Vec<T>,
    pub pages: Vec<Option<usize>>,
    pub page: usize,
    pub total_pages: usize,
}

impl<T> Paginated<T> {
    pub fn new(items: Vec<T>, current_page: usize, total_pages: usize) -> Self {
        let current_page = if current_page == 0 { 1 } else { current_page };

        let pages = get_pages(total_pages, current_page, 2, 2, 4, 2);

        Self {
            items,
            pages,
            page: current_page,
            total_pages,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_list_has_no_page_links() {
        let paginated: Paginated<i32> = Paginated::new(vec![], 1, 0);
        assert!(paginated.pages.is_empty());
        assert_eq!(paginated.page, 1);
    }

    #[test]
    fn window_elides_middle_pages() {
        let paginated: Paginated<i32> = Paginated::new(vec![], 10, 20);
        assert_eq!(paginated.total_pages, 20);
        assert!(paginated.pages.contains(&None));
        assert!(paginated.pages.contains(&Some(1)));
        assert!(paginated.pages.contains(&Some(10)));
        assert!(paginated.pages.contains(&Some(20)));
    }

    // The templates hide the page nav when total_pages <= 1.
    #[test]
    fn single_page_keeps_total_pages() {
        let paginated: Paginated<i32> = Paginated::new(vec![1, 2, 3], 1, 1);
        assert_eq!(paginated.total_pages, 1);
        assert_eq!(paginated.pages, vec![Some(1)]);
    }
}
