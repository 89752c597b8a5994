pub mod cards;
pub mod charts;
pub mod header;
pub mod map;
pub mod palette;
pub mod popup;
pub mod tables;
