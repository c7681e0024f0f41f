pub mod complete;
pub mod warnings;
