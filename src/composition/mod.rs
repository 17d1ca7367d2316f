mod counts;
mod frequency_table;

pub use counts::*;
pub use frequency_table::*;
