use crate::schema::users;
use common_macros::hash_map;
use std::collections::HashMap;
use store::Entity;

// To query data from the database
#[derive(Debug, Clone, Identifiable, Queryable)]
pub struct User {
    pub id: i32,
    pub amz_auth_id: String,
}

impl Entity for User {
    type Id = i32;

    fn get_id(&self) -> Self::Id {
        self.id
    }

    fn get_data(&self) -> HashMap<String, String> {
        hash_map! {
            "amz_auth_id".into() => self.amz_auth_id.clone()
        }
    }
}

// To insert a new user into the database
#[derive(Debug, Clone, Insertable)]
#[table_name = "users"]
pub struct NewUser<'a> {
    pub amz_auth_id: &'a str,
}
