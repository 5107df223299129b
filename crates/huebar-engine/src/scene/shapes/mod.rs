pub(crate) mod outline;
pub(crate) mod rect;
pub(crate) mod text;
pub(crate) mod triangle;
