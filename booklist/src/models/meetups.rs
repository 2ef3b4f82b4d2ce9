use super::books::Book;
use super::users::User;
use crate::schema::meetups;
use chrono::NaiveDateTime;
use common_macros::hash_map;
use std::collections::HashMap;
use store::Entity;

// To query data from the database
#[derive(Debug, Clone, Identifiable, Queryable, Associations)]
#[belongs_to(Book)]
#[belongs_to(User, foreign_key = "host_id")]
pub struct Meetup {
    pub id: i32,
    pub location: String,
    pub description: String,
    pub date_time: NaiveDateTime,
    pub book_id: i32,
    pub host_id: i32,
}

impl Entity for Meetup {
    type Id = i32;

    fn get_id(&self) -> Self::Id {
        self.id
    }

    fn get_name(&self) -> Option<&str> {
        Some(&self.location)
    }

    fn get_data(&self) -> HashMap<String, String> {
        hash_map! {
            "location".into() => self.location.clone(),
            "description".into() => self.description.clone(),
            "date_time".into() => self.date_time.to_string(),
            "book_id".into() => self.book_id.to_string(),
            "host_id".into() => self.host_id.to_string(),
        }
    }
}

// To insert a new meetup into the database
#[derive(Debug, Clone, Insertable)]
#[table_name = "meetups"]
pub struct NewMeetup<'a> {
    pub location: &'a str,
    pub description: &'a str,
    pub date_time: NaiveDateTime,
    pub book_id: i32,
    pub host_id: i32,
}
