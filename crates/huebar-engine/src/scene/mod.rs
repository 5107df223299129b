//! Draw stream produced by a frame of widget code.
//!
//! Commands are recorded in paint order (back to front); the host renders them
//! as-is. No batching or sorting happens here.

mod cmd;
mod list;

pub mod shapes;

pub use cmd::DrawCmd;
pub use list::DrawList;
pub use shapes::outline::RectOutlineCmd;
pub use shapes::rect::RectCmd;
pub use shapes::text::TextCmd;
pub use shapes::triangle::TriangleCmd;
