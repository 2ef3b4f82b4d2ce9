pub mod authors;
pub mod books;
pub mod meetups;
pub mod reads;
pub mod users;
