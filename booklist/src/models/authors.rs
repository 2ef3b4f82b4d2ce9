use crate::schema::authors;
use common_macros::hash_map;
use std::collections::HashMap;
use store::Entity;

// To query data from the database
#[derive(Debug, Clone, Identifiable, Queryable)]
pub struct Author {
    pub id: i32,
    pub name: String,
}

impl Entity for Author {
    type Id = i32;

    fn get_id(&self) -> Self::Id {
        self.id
    }

    fn get_name(&self) -> Option<&str> {
        Some(&self.name)
    }

    fn get_data(&self) -> HashMap<String, String> {
        hash_map! {
            "name".into() => self.name.clone()
        }
    }
}

// To insert a new author into the database
#[derive(Debug, Clone, Insertable)]
#[table_name = "authors"]
pub struct NewAuthor<'a> {
    pub name: &'a str,
}
