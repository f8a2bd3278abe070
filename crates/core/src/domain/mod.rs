pub mod item;
pub mod trip;
