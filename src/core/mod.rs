pub mod aggregator;
pub mod extractor;
pub mod ingest;
pub mod log;
pub mod month_age;
pub mod vocabulary;
