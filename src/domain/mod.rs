// Domain module: calculator model, form, session and solver contract

pub mod form;
pub mod interaction;
pub mod models;
pub mod pages;
pub mod report;
pub mod session;
pub mod solver_service;
pub mod value_objects;

pub use form::*;
pub use interaction::*;
pub use models::*;
pub use pages::*;
pub use report::*;
pub use session::*;
pub use solver_service::*;
pub use value_objects::*;
