//! CrudService: generic CRUD over any resource, using the safe SQL builder.

mod crud;
mod validation;
pub use crud::CrudService;
pub use validation::RequestValidator;
