pub mod form;
pub mod header;
pub mod loading;
pub mod menu;
pub mod notice;
pub mod parallax;
pub mod scroll_top;
