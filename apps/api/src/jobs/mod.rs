// Job catalog: listing plus the two search contracts.
// /jobs/search is the keyword search consumed by bot integrations (display strings);
// /jobs/filter is the structured skill + experience filter (job objects).

pub mod catalog;
pub mod handlers;
pub mod matching;
