mod batch;
mod item;
mod product;

pub use batch::*;
pub use item::*;
pub use product::*;
