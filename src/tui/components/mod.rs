pub mod item;
pub mod multi_dropdown;
