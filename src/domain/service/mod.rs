pub mod aggregator;
pub use aggregator::*;

pub mod classifier;
pub use classifier::*;

pub mod formatter;
pub use formatter::*;

pub mod label_matcher;
pub use label_matcher::*;

pub mod partitioner;
pub use partitioner::*;

pub mod periodic;
pub use periodic::*;
