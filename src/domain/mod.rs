pub mod key;
pub mod structure;
pub mod vendor_product;

pub use key::*;
pub use structure::*;
pub use vendor_product::*;
