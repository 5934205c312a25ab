//! Property tests for the pagination engine

use proptest::prelude::*;

use catalog::pagination::{
    Connection, Cursor, PageLimits, PaginationArgs, connection_from_slice,
};

fn offsets<T>(conn: &Connection<T>) -> Vec<usize> {
    conn.edges
        .iter()
        .map(|e| e.cursor.offset().unwrap())
        .collect()
}

proptest! {
    #[test]
    fn first_n_returns_min_n_total(total in 0usize..200, n in 0i32..150) {
        let items: Vec<usize> = (0..total).collect();
        let conn = connection_from_slice(&items, &PaginationArgs::forward(n), PageLimits::default())
            .unwrap();

        let expected = (n as usize).min(total).min(PageLimits::default().max_page_size);
        prop_assert_eq!(conn.len(), expected);
        prop_assert_eq!(conn.page_info.has_next_page, expected < total);
        prop_assert!(!conn.page_info.has_previous_page);
    }

    #[test]
    fn after_cursor_starts_at_next_offset(total in 0usize..100, k in 0usize..120, n in 1i32..20) {
        let items: Vec<usize> = (0..total).collect();
        let args = PaginationArgs::forward(n).after(Cursor::encode(k).into_string());
        let conn = connection_from_slice(&items, &args, PageLimits::default()).unwrap();

        match conn.edges.first() {
            Some(edge) => prop_assert_eq!(edge.node, k + 1),
            None => prop_assert!(k + 1 >= total),
        }
    }

    #[test]
    fn forward_traversal_visits_every_item_once(total in 0usize..120, page in 1i32..25) {
        let items: Vec<usize> = (0..total).collect();
        let limits = PageLimits::default();
        let mut seen = Vec::new();
        let mut args = PaginationArgs::forward(page);

        loop {
            let conn = connection_from_slice(&items, &args, limits).unwrap();
            seen.extend(offsets(&conn));
            if !conn.page_info.has_next_page {
                break;
            }
            let end = conn.page_info.end_cursor.unwrap();
            args = PaginationArgs::forward(page).after(end.into_string());
        }

        prop_assert_eq!(seen, items);
    }

    #[test]
    fn backward_traversal_visits_every_item_once(total in 0usize..120, page in 1i32..25) {
        let items: Vec<usize> = (0..total).collect();
        let limits = PageLimits::default();
        let mut pages = Vec::new();
        let mut args = PaginationArgs::backward(page);

        loop {
            let conn = connection_from_slice(&items, &args, limits).unwrap();
            pages.push(offsets(&conn));
            if !conn.page_info.has_previous_page {
                break;
            }
            let start = conn.page_info.start_cursor.unwrap();
            args = PaginationArgs::backward(page).before(start.into_string());
        }

        let seen: Vec<usize> = pages.into_iter().rev().flatten().collect();
        prop_assert_eq!(seen, items);
    }

    #[test]
    fn flags_match_edge_offsets(total in 1usize..80, start in 0usize..80, n in 1i32..30) {
        let items: Vec<usize> = (0..total).collect();
        let args = if start == 0 {
            PaginationArgs::forward(n)
        } else {
            PaginationArgs::forward(n).after(Cursor::encode(start - 1).into_string())
        };
        let conn = connection_from_slice(&items, &args, PageLimits::default()).unwrap();

        if let (Some(first), Some(last)) = (conn.edges.first(), conn.edges.last()) {
            prop_assert_eq!(conn.page_info.has_previous_page, first.node != 0);
            prop_assert_eq!(conn.page_info.has_next_page, last.node != total - 1);
        }
    }

    #[test]
    fn arbitrary_cursor_strings_never_panic(token in ".*") {
        let items = [1, 2, 3];
        let args = PaginationArgs::forward(2).after(token);
        let _ = connection_from_slice(&items, &args, PageLimits::default());
    }
}
