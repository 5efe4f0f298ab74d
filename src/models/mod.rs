mod cart_item;
mod menu_item;
mod payment;
mod review;
mod user;

pub use cart_item::*;
pub use menu_item::*;
pub use payment::*;
pub use review::*;
pub use user::*;
