pub mod backend;
pub mod display_list;
pub mod field;
pub mod raster;
