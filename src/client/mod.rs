//! The job-search front end as a library: a UI binding drives [`app::JobSearchApp`]
//! and displays the [`render::TableView`] it produces.

pub mod app;
pub mod applied_store;
pub mod error;
pub mod pagination;
pub mod render;
pub mod search_client;
pub mod storage;
