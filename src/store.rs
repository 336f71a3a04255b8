//! Owned state container for the fund views.
//!
//! All mutation goes through the update methods; views borrow the store
//! and derive their display data on demand. Nothing here is shared or
//! global.

use crate::api::{Fund, FundSortKey, PortfolioItem};
use crate::core::paginate::Pagination;
use crate::core::sort::{SortState, sorted_view};

pub struct FundsStore {
    funds: Vec<Fund>,
    portfolio: Vec<PortfolioItem>,
    sort: SortState<FundSortKey>,
    pagination: Pagination,
}

/// One page of the funds table, after sorting and pagination.
#[derive(Debug)]
pub struct FundsView {
    pub funds: Vec<Fund>,
    pub current_page: usize,
    pub total_pages: usize,
    pub total_funds: usize,
}

impl FundsStore {
    pub fn new(items_per_page: usize) -> Self {
        FundsStore {
            funds: Vec::new(),
            portfolio: Vec::new(),
            sort: SortState::unsorted(),
            pagination: Pagination::new(items_per_page),
        }
    }

    pub fn set_funds(&mut self, funds: Vec<Fund>) {
        self.funds = funds;
    }

    pub fn set_portfolio(&mut self, portfolio: Vec<PortfolioItem>) {
        self.portfolio = portfolio;
    }

    /// Advances the tri-state sort cycle for a column.
    pub fn toggle_sort(&mut self, key: FundSortKey) {
        self.sort.advance(key);
    }

    pub fn set_page(&mut self, page: usize) {
        self.pagination.set_page(page);
    }

    pub fn set_items_per_page(&mut self, items_per_page: usize) {
        self.pagination.set_items_per_page(items_per_page);
    }

    pub fn funds(&self) -> &[Fund] {
        &self.funds
    }

    pub fn portfolio(&self) -> &[PortfolioItem] {
        &self.portfolio
    }

    pub fn sort_state(&self) -> &SortState<FundSortKey> {
        &self.sort
    }

    pub fn pagination(&self) -> &Pagination {
        &self.pagination
    }

    /// Derives the current funds page: sort first, then slice.
    pub fn current_view(&self) -> FundsView {
        let sorted = sorted_view(&self.funds, &self.sort);
        let page = self.pagination.slice(&sorted).to_vec();
        FundsView {
            current_page: self.pagination.current_page(),
            total_pages: self.pagination.total_pages(sorted.len()),
            total_funds: sorted.len(),
            funds: page,
        }
    }
}
