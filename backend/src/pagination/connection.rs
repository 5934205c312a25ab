//! Connection, edge and page info values

use super::cursor::Cursor;
use super::window::Window;

/// Information about pagination in a connection
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PageInfo {
    /// Are there items after the last edge?
    pub has_next_page: bool,
    /// Are there items before the first edge?
    pub has_previous_page: bool,
    /// Cursor of the first item in this page
    pub start_cursor: Option<Cursor>,
    /// Cursor of the last item in this page
    pub end_cursor: Option<Cursor>,
}

/// An item paired with the cursor of its position
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Edge<T> {
    pub node: T,
    pub cursor: Cursor,
}

/// A page of results in Relay connection form
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Connection<T> {
    /// Edges in the collection's natural order
    pub edges: Vec<Edge<T>>,
    pub page_info: PageInfo,
    /// Size of the whole collection when the page was resolved
    pub total_count: usize,
}

impl<T> Connection<T> {
    /// Create an empty connection
    pub fn empty() -> Self {
        Self {
            edges: Vec::new(),
            page_info: PageInfo::default(),
            total_count: 0,
        }
    }

    /// Build a connection from the items fetched for `window`.
    ///
    /// `items[i]` must sit at offset `window.start + i`. Extra items are
    /// dropped. A short fetch (rows removed between count and fetch) yields a
    /// short page whose flags still describe what was returned.
    pub fn from_window(mut items: Vec<T>, window: &Window) -> Self {
        items.truncate(window.len());

        let start = window.start;
        let has_next_page = start + items.len() < window.total;
        let has_previous_page = start > 0;

        let edges: Vec<Edge<T>> = items
            .into_iter()
            .enumerate()
            .map(|(i, node)| Edge {
                cursor: Cursor::encode(start + i),
                node,
            })
            .collect();

        let page_info = PageInfo {
            has_next_page,
            has_previous_page,
            start_cursor: edges.first().map(|e| e.cursor.clone()),
            end_cursor: edges.last().map(|e| e.cursor.clone()),
        };

        Self {
            edges,
            page_info,
            total_count: window.total,
        }
    }

    /// Convert every node, keeping cursors and page info.
    pub fn map<U>(self, mut f: impl FnMut(T) -> U) -> Connection<U> {
        Connection {
            edges: self
                .edges
                .into_iter()
                .map(|e| Edge {
                    node: f(e.node),
                    cursor: e.cursor,
                })
                .collect(),
            page_info: self.page_info,
            total_count: self.total_count,
        }
    }

    pub fn nodes(&self) -> impl Iterator<Item = &T> {
        self.edges.iter().map(|e| &e.node)
    }

    pub fn len(&self) -> usize {
        self.edges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }
}
