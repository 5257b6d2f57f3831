pub mod documents;
pub mod items;
pub mod uploads;
