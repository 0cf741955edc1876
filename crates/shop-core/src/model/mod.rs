pub mod order;
pub mod product;
pub mod user;

pub use order::{Order, OrderLine, OrderWithUser, UserOrderCount};
pub use product::{PriceChange, Product};
pub use user::User;
