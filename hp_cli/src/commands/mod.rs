pub mod cities;
pub mod form;
pub mod predict;
