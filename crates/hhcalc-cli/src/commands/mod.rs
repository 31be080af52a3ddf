pub mod estimate;
pub mod options;
pub mod validate;
