pub mod bottom;
pub mod header;
pub mod multi_dropdown;
