//! Request parameters for a single page fetch

use tracing::debug;

/// Query parameter carrying the page size
pub const PAGE_SIZE_PARAM: &str = "pageSize";
/// Query parameter asking the API to report `totalCount`
pub const COUNT_TOTAL_PARAM: &str = "countTotal";
/// Condition search (not free-text `query.term`)
pub const SEARCH_PARAM: &str = "query.cond";
/// Opaque cursor returned by the previous page
pub const PAGE_TOKEN_PARAM: &str = "pageToken";

/// Parameters for one `/studies` request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageRequestParams {
    /// Number of studies per page
    pub page_size: u32,
    /// Ask the API to include `totalCount` in the response
    pub count_total: bool,
    /// Condition search expression, omitted when empty
    pub search: Option<String>,
    /// Cursor for the page to fetch, omitted on the first page
    pub page_token: Option<String>,
}

impl PageRequestParams {
    /// Build the parameters for one page
    ///
    /// `start_date` is accepted as a hook for future date-range filtering and
    /// does not affect the produced parameters.
    pub fn build(
        search: &str,
        page_size: u32,
        page_token: Option<&str>,
        start_date: Option<&str>,
    ) -> Self {
        if let Some(date) = start_date {
            debug!("start date {date} given; date filtering is not applied");
        }

        Self {
            page_size,
            count_total: true,
            search: (!search.is_empty()).then(|| search.to_string()),
            page_token: page_token.filter(|t| !t.is_empty()).map(str::to_string),
        }
    }

    /// Whether this request is for the first page
    pub fn is_first_page(&self) -> bool {
        self.page_token.is_none()
    }

    /// Render as ordered query pairs
    pub fn to_query(&self) -> Vec<(&'static str, String)> {
        let mut query = vec![
            (PAGE_SIZE_PARAM, self.page_size.to_string()),
            (COUNT_TOTAL_PARAM, self.count_total.to_string()),
        ];
        if let Some(search) = &self.search {
            query.push((SEARCH_PARAM, search.clone()));
        }
        if let Some(token) = &self.page_token {
            query.push((PAGE_TOKEN_PARAM, token.clone()));
        }
        query
    }
}
