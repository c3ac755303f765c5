pub mod labels;
pub mod page;
