use super::authors::Author;
use crate::schema::books;
use common_macros::hash_map;
use std::collections::HashMap;
use store::Entity;

// To query data from the database
#[derive(Debug, Clone, Identifiable, Queryable, Associations)]
#[belongs_to(Author)]
pub struct Book {
    pub id: i32,
    pub title: String,
    pub author_id: i32,
}

impl Entity for Book {
    type Id = i32;

    fn get_id(&self) -> Self::Id {
        self.id
    }

    fn get_name(&self) -> Option<&str> {
        Some(&self.title)
    }

    fn get_data(&self) -> HashMap<String, String> {
        hash_map! {
            "title".into() => self.title.clone(),
            "author_id".into() => self.author_id.to_string()
        }
    }
}

// To insert a new book into the database
#[derive(Debug, Clone, Insertable)]
#[table_name = "books"]
pub struct NewBook<'a> {
    pub title: &'a str,
    pub author_id: i32,
}
