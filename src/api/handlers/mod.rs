pub mod fallback;
pub mod health;
pub mod logout;
pub mod pages;
