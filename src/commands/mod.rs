pub mod new;

pub use new::cmd_new;
