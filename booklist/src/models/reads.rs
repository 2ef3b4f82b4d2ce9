// Copyright (c) 2020 White Leaf
//
// This software is released under the MIT License.
// https://opensource.org/licenses/MIT

use super::books::Book;
use super::users::User;
use crate::schema::reads;
use common_macros::hash_map;
use std::collections::HashMap;
use store::Entity;

// A read is current-state per (user, book): one row, reaction overwritten
// on every re-rating. Reaction is NULL until the first rating lands.
#[derive(Debug, Clone, Identifiable, Queryable, Associations)]
#[belongs_to(User)]
#[belongs_to(Book)]
pub struct Read {
    pub id: i32,
    pub user_id: i32,
    pub book_id: i32,
    pub reaction: Option<i32>,
}

impl Entity for Read {
    type Id = i32;

    fn get_id(&self) -> Self::Id {
        self.id
    }

    fn get_data(&self) -> HashMap<String, String> {
        let mut map = hash_map! {
            "user_id".into() => self.user_id.to_string(),
            "book_id".into() => self.book_id.to_string(),
        };

        if let Some(reaction) = self.reaction {
            map.insert("reaction".into(), reaction.to_string());
        }

        map
    }
}

// To insert a new read into the database
#[derive(Debug, Clone, Insertable)]
#[table_name = "reads"]
pub struct NewRead {
    pub user_id: i32,
    pub book_id: i32,
}
