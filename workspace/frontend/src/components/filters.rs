mod tenure_filter;
mod tin_selector;

pub use tenure_filter::TenureFilter;
pub use tin_selector::TinSelector;
