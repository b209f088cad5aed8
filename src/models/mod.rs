pub mod sale;
pub mod token;

pub use sale::SaleRecord;
pub use token::TokenBundle;
