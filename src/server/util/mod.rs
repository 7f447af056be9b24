pub mod markdown;
pub mod pagination;
pub mod validation;
