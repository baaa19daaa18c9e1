pub mod amount;
pub mod colors;
pub mod date;
pub mod formatting;
pub mod path;
pub mod table;

pub use amount::format_money;
pub use formatting::pad_right;
