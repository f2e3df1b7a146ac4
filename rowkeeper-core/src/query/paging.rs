//! Page slicing.

use rowkeeper_model::PageRequest;

/// Slice `[(page-1)*limit, page*limit)` of `items`. Pages past the end
/// yield an empty slice.
pub fn paginate<'a, T>(items: &'a [T], request: &PageRequest) -> &'a [T] {
    let len = items.len() as u64;
    let start = request.offset().min(len);
    let end = start.saturating_add(request.limit).min(len);
    // Both bounds are clamped to `len`, which came from a usize.
    &items[start as usize..end as usize]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(page: u64, limit: u64) -> PageRequest {
        PageRequest::new(page, limit, "").unwrap()
    }

    #[test]
    fn slices_requested_window() {
        let data: Vec<u32> = (1..=45).collect();
        assert_eq!(paginate(&data, &request(1, 20)), &data[0..20]);
        assert_eq!(paginate(&data, &request(2, 20)), &data[20..40]);
        assert_eq!(paginate(&data, &request(3, 20)), &data[40..45]);
    }

    #[test]
    fn out_of_range_page_is_empty() {
        let data: Vec<u32> = (1..=45).collect();
        assert!(paginate(&data, &request(4, 20)).is_empty());
        assert!(paginate(&data, &request(u64::MAX, 20)).is_empty());
    }

    #[test]
    fn huge_limit_returns_everything() {
        let data: Vec<u32> = (1..=5).collect();
        assert_eq!(paginate(&data, &request(1, u64::MAX)), &data[..]);
    }
}
