/// Page size shared by the question listing and search endpoints.
pub const QUESTIONS_PER_PAGE: usize = 10;

/// Fixed-size slicing over an ordered collection.
///
/// Pages are 1-based. A page below 1 never wraps from the end of the
/// collection; it yields an empty slice, as does a page past the end.
/// The last page may be shorter than `per_page`.
pub fn paginate<T>(items: &[T], page: i64, per_page: usize) -> &[T] {
    if page < 1 {
        return &[];
    }

    let start = (page as usize - 1).saturating_mul(per_page);
    if start >= items.len() {
        return &[];
    }

    let end = (start + per_page).min(items.len());
    &items[start..end]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pages_reconstruct_the_sequence() {
        let items: Vec<i64> = (1..=23).collect();

        for per_page in [1usize, 2, 3, 5, 10, 23, 40] {
            let mut collected = Vec::new();
            let mut page = 1;
            loop {
                let slice = paginate(&items, page, per_page);
                if slice.is_empty() {
                    break;
                }
                if (page as usize) * per_page < items.len() {
                    assert_eq!(slice.len(), per_page, "non-final page must be full");
                }
                collected.extend_from_slice(slice);
                page += 1;
            }
            assert_eq!(collected, items, "per_page {}", per_page);
        }
    }

    #[test]
    fn test_last_page_holds_the_remainder() {
        let items: Vec<i64> = (1..=23).collect();
        assert_eq!(paginate(&items, 3, 10), &[21, 22, 23]);
    }

    #[test]
    fn test_page_past_the_end_is_empty() {
        let items: Vec<i64> = (1..=23).collect();
        assert!(paginate(&items, 4, 10).is_empty());
        assert!(paginate(&items, 1000, 10).is_empty());
    }

    #[test]
    fn test_page_zero_and_negative_are_empty() {
        let items: Vec<i64> = (1..=5).collect();
        assert!(paginate(&items, 0, 10).is_empty());
        assert!(paginate(&items, -1, 10).is_empty());
        assert!(paginate(&items, i64::MIN, 10).is_empty());
    }

    #[test]
    fn test_empty_sequence_is_empty_at_any_page() {
        let items: Vec<i64> = Vec::new();
        for page in [-1, 0, 1, 2, 99] {
            assert!(paginate(&items, page, 10).is_empty());
        }
    }

    #[test]
    fn test_huge_page_numbers_do_not_overflow() {
        let items: Vec<i64> = (1..=5).collect();
        assert!(paginate(&items, i64::MAX, QUESTIONS_PER_PAGE).is_empty());
    }
}
