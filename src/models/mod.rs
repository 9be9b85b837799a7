mod product;
mod requests;
mod validator;

pub use product::*;
pub use requests::*;
pub use validator::*;
