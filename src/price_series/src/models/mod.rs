pub mod bar;
pub mod series;
pub mod window;
