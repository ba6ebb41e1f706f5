use store::config::LayoutConfig;
use store::Directory;
use tracing::debug;

use super::{filter_by_label, CrudList, ListController};

/// State of the directory screen.
///
/// On top of the shared list it keeps a search query with its filtered view,
/// recomputed whenever the items or the query change, and the grid column
/// count derived from the viewport width.
#[derive(Clone, Debug)]
pub struct DirectoryListController {
    list: CrudList<Directory>,
    search_query: String,
    filtered: Vec<Directory>,
    layout: LayoutConfig,
    columns: usize,
}

impl Default for DirectoryListController {
    fn default() -> Self {
        Self::new(LayoutConfig::default())
    }
}

impl DirectoryListController {
    /// Starts with the narrow column count until a viewport width is known.
    pub fn new(layout: LayoutConfig) -> Self {
        Self {
            list: CrudList::new(),
            search_query: String::new(),
            filtered: Vec::new(),
            columns: layout.narrow_columns,
            layout,
        }
    }

    pub fn search_query(&self) -> &str {
        &self.search_query
    }

    pub fn filtered_items(&self) -> &[Directory] {
        &self.filtered
    }

    pub fn set_search_query(&mut self, query: impl Into<String>) {
        self.search_query = query.into();
        self.refilter();
    }

    fn refilter(&mut self) {
        self.filtered = filter_by_label(self.list.items(), &self.search_query);
    }

    pub fn columns(&self) -> usize {
        self.columns
    }

    /// Recompute the column count. Returns true if it changed.
    pub fn set_viewport_width(&mut self, width: f64) -> bool {
        let columns = self.layout.columns_for(width);
        if columns == self.columns {
            return false;
        }
        debug!(width, columns, "directory grid columns changed");
        self.columns = columns;
        true
    }
}

impl ListController for DirectoryListController {
    type Entity = Directory;
    type Scope = ();

    fn list(&self) -> &CrudList<Directory> {
        &self.list
    }

    fn list_mut(&mut self) -> &mut CrudList<Directory> {
        &mut self.list
    }

    fn scope(&self) {}

    fn items_replaced(&mut self) {
        self.refilter();
    }
}
