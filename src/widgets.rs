mod priority;
pub mod table;

pub use priority::PriorityStrip;
