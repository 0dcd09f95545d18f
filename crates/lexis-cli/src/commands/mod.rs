pub mod dispatch;
pub mod fact;
pub mod quiz;
pub mod schema;
pub mod search;
pub mod shared;
pub mod sources;
pub mod theme;
pub mod today;
pub mod word;
