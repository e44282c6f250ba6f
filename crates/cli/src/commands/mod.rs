pub mod checkout;
pub mod estimate;
pub mod prerender;
pub mod preview;
pub mod validate;
