pub mod client;
pub mod pagination;
pub mod resource;

pub use client::{JiraClient, JiraConfig};
pub use pagination::{fetch_all, Page, PageSource};
pub use resource::Resource;
