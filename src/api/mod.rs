//! API handlers for the Bookshelf REST endpoints

pub mod authors;
pub mod books;
pub mod health;
pub mod openapi;
pub mod pulldown;
