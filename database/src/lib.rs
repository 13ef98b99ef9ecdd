pub mod consts;
pub mod model;
pub mod persistence;
pub mod service;
pub mod validation;
