mod cache;

pub use cache::PrefetchCache;
