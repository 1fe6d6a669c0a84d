pub mod nav;
pub mod orderForm;
pub mod tables;
pub mod toast;
