pub mod aggregator;
pub mod catalogue;

pub use aggregator::SearchAggregator;
