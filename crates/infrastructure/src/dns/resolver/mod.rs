pub mod iterative;
mod trail;

pub use iterative::IterativeResolver;
