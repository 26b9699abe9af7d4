//! Row models, one module per table.

pub mod cart;
pub mod contact;
pub mod drone;
pub mod faq;
pub mod position;
pub mod review;
pub mod user;
pub mod wishlist;
