// Copyright (c) 2020 White Leaf
//
// This software is released under the MIT License.
// https://opensource.org/licenses/MIT

#[macro_use]
extern crate diesel;

pub mod models;
pub mod schema;

use crate::models::authors::{Author, NewAuthor};
use crate::models::books::{Book, NewBook};
use crate::models::meetups::{Meetup, NewMeetup};
use crate::models::reads::{NewRead, Read};
use crate::models::users::{NewUser, User};
use crate::schema::{attendances, authors, books, meetups, reads, users};
use diesel::pg::PgConnection;
use diesel::sql_types::{BigInt, Double, Integer, Nullable, Text};
use diesel::{insert_into, prelude::*, sql_query};
use std::collections::HashMap;
use store::error::ErrorKind;
use store::{AuthorRef, ProfileRef, RankedBook, Result, Store, Value};

pub fn establish_connection(url: &str) -> Result<PgConnection> {
    Ok(PgConnection::establish(&url)?)
}

/// Natural-key get-or-insert against one table.
///
/// The insert is conflict-aware: the natural keys carry unique indexes, so
/// when a concurrent identical insert commits first ours inserts nothing
/// and the winner's row is fetched instead of duplicating it.
macro_rules! find_or_create {
    ($conn:expr, $table:expr, $filter:expr, $new:expr) => {{
        match $table.filter($filter).first($conn).optional()? {
            Some(found) => Ok(found),
            None => {
                let inserted = insert_into($table)
                    .values($new)
                    .on_conflict_do_nothing()
                    .get_result($conn)
                    .optional()?;

                match inserted {
                    Some(created) => Ok(created),
                    None => Ok($table.filter($filter).first($conn)?),
                }
            }
        }
    }};
}

fn require<'m, 'k>(attrs: &'m HashMap<&'k str, Value>, key: &'static str) -> Result<&'m Value> {
    attrs
        .get(key)
        .ok_or_else(|| ErrorKind::MissingAttribute(key).into())
}

const RANKED_BOOKS: &str =
    "SELECT books.id, books.title, authors.name, \
     AVG(reads.reaction)::float8 AS avg_reaction \
     FROM books \
     INNER JOIN reads ON reads.book_id = books.id \
     INNER JOIN authors ON authors.id = books.author_id \
     WHERE reads.reaction > 0 \
     GROUP BY books.id, authors.name \
     ORDER BY avg_reaction DESC \
     LIMIT $1";

const RANKED_BOOKS_EXCEPT: &str =
    "SELECT books.id, books.title, authors.name, \
     AVG(reads.reaction)::float8 AS avg_reaction \
     FROM books \
     INNER JOIN reads ON reads.book_id = books.id \
     INNER JOIN authors ON authors.id = books.author_id \
     WHERE reads.reaction > 0 AND reads.user_id <> $1 \
     GROUP BY books.id, authors.name \
     ORDER BY avg_reaction DESC \
     LIMIT $2";

const RATED_BOOKS: &str =
    "SELECT books.id, books.title, authors.name, reads.reaction \
     FROM books \
     INNER JOIN reads ON reads.book_id = books.id \
     INNER JOIN authors ON authors.id = books.author_id \
     WHERE reads.user_id = $1 \
     ORDER BY books.id ASC";

// Rows coming back from the ranking statements, author name still flat.
#[derive(Debug, QueryableByName)]
struct RankedRow {
    #[sql_type = "Integer"]
    id: i32,
    #[sql_type = "Text"]
    title: String,
    #[sql_type = "Text"]
    name: String,
    #[sql_type = "Double"]
    avg_reaction: f64,
}

#[derive(Debug, QueryableByName)]
struct RatedRow {
    #[sql_type = "Integer"]
    id: i32,
    #[sql_type = "Text"]
    title: String,
    #[sql_type = "Text"]
    name: String,
    #[sql_type = "Nullable<Integer>"]
    reaction: Option<i32>,
}

impl From<RankedRow> for RankedBook {
    fn from(row: RankedRow) -> Self {
        RankedBook {
            id: row.id,
            title: row.title,
            author: AuthorRef { name: row.name },
            avg_reaction: Some(row.avg_reaction),
            reaction: None,
        }
    }
}

impl From<RatedRow> for RankedBook {
    fn from(row: RatedRow) -> Self {
        RankedBook {
            id: row.id,
            title: row.title,
            author: AuthorRef { name: row.name },
            avg_reaction: None,
            reaction: row.reaction,
        }
    }
}

pub struct BooklistController {
    pg_conn: PgConnection,
}

impl BooklistController {
    pub fn new() -> Result<Self> {
        Self::with_url("postgres://postgres:@localhost/booklist")
    }

    pub fn with_url(url: &str) -> Result<Self> {
        let pg_conn = establish_connection(url)?;
        Ok(Self { pg_conn })
    }
}

impl Store for BooklistController {
    type Author = Author;
    type Book = Book;
    type User = User;
    type Read = Read;
    type Meetup = Meetup;

    fn find_or_create_author<'a>(&self, attrs: HashMap<&'a str, Value>) -> Result<Author> {
        let name = require(&attrs, "name")?.as_string()?;
        log::debug!("find_or_create author name({})", name);

        find_or_create!(
            &self.pg_conn,
            authors::table,
            authors::name.eq(name),
            NewAuthor { name }
        )
    }

    fn find_or_create_book<'a>(&self, attrs: HashMap<&'a str, Value>) -> Result<Book> {
        let title = require(&attrs, "title")?.as_string()?;
        let author_id = require(&attrs, "author_id")?.as_i32()?;
        log::debug!("find_or_create book title({})", title);

        find_or_create!(
            &self.pg_conn,
            books::table,
            books::title.eq(title).and(books::author_id.eq(author_id)),
            NewBook { title, author_id }
        )
    }

    fn find_or_create_user<'a>(&self, attrs: HashMap<&'a str, Value>) -> Result<User> {
        let amz_auth_id = require(&attrs, "amz_auth_id")?.as_string()?;
        log::debug!("find_or_create user auth_id({})", amz_auth_id);

        find_or_create!(
            &self.pg_conn,
            users::table,
            users::amz_auth_id.eq(amz_auth_id),
            NewUser { amz_auth_id }
        )
    }

    fn find_or_create_read<'a>(&self, attrs: HashMap<&'a str, Value>) -> Result<Read> {
        let user_id = require(&attrs, "user_id")?.as_i32()?;
        let book_id = require(&attrs, "book_id")?.as_i32()?;
        log::debug!("find_or_create read user({}) book({})", user_id, book_id);

        find_or_create!(
            &self.pg_conn,
            reads::table,
            reads::user_id.eq(user_id).and(reads::book_id.eq(book_id)),
            NewRead { user_id, book_id }
        )
    }

    fn find_or_create_meetup<'a>(&self, attrs: HashMap<&'a str, Value>) -> Result<Meetup> {
        let location = require(&attrs, "location")?.as_string()?;
        let description = require(&attrs, "description")?.as_string()?;
        let date_time = require(&attrs, "date_time")?.as_date_time()?;
        let book_id = require(&attrs, "book_id")?.as_i32()?;
        let host_id = require(&attrs, "host_id")?.as_i32()?;
        log::debug!("find_or_create meetup at({}) book({})", location, book_id);

        find_or_create!(
            &self.pg_conn,
            meetups::table,
            meetups::location
                .eq(location)
                .and(meetups::description.eq(description))
                .and(meetups::date_time.eq(date_time))
                .and(meetups::book_id.eq(book_id))
                .and(meetups::host_id.eq(host_id)),
            NewMeetup {
                location,
                description,
                date_time,
                book_id,
                host_id,
            }
        )
    }

    fn user_by(&self, by: &ProfileRef) -> Result<User> {
        let user = match by {
            ProfileRef::Id(id) => users::table.find(*id).first(&self.pg_conn).optional()?,
            ProfileRef::AuthId(auth_id) => users::table
                .filter(users::amz_auth_id.eq(auth_id))
                .first(&self.pg_conn)
                .optional()?,
        };

        user.ok_or_else(|| ErrorKind::NoUserFound.into())
    }

    fn meetup_by_id(&self, id: i32) -> Result<Meetup> {
        let meetup = meetups::table.find(id).first(&self.pg_conn).optional()?;
        meetup.ok_or_else(|| ErrorKind::NotFoundById(id.to_string()).into())
    }

    fn book_of(&self, meetup: &Meetup) -> Result<Book> {
        let book = books::table
            .find(meetup.book_id)
            .first(&self.pg_conn)
            .optional()?;

        book.ok_or_else(|| ErrorKind::NotFoundById(meetup.book_id.to_string()).into())
    }

    fn set_reaction(&self, read: &Read, reaction: i32) -> Result<Read> {
        Ok(diesel::update(reads::table.find(read.id))
            .set(reads::reaction.eq(reaction))
            .get_result(&self.pg_conn)?)
    }

    fn ranked_books(&self, limit: i64) -> Result<Vec<RankedBook>> {
        let rows: Vec<RankedRow> = sql_query(RANKED_BOOKS)
            .bind::<BigInt, _>(limit)
            .load(&self.pg_conn)?;

        Ok(rows.into_iter().map(Into::into).collect())
    }

    fn ranked_books_except(&self, user_id: i32, limit: i64) -> Result<Vec<RankedBook>> {
        let rows: Vec<RankedRow> = sql_query(RANKED_BOOKS_EXCEPT)
            .bind::<Integer, _>(user_id)
            .bind::<BigInt, _>(limit)
            .load(&self.pg_conn)?;

        Ok(rows.into_iter().map(Into::into).collect())
    }

    fn rated_books(&self, user_id: i32) -> Result<Vec<RankedBook>> {
        let rows: Vec<RatedRow> = sql_query(RATED_BOOKS)
            .bind::<Integer, _>(user_id)
            .load(&self.pg_conn)?;

        Ok(rows.into_iter().map(Into::into).collect())
    }

    fn meetups_for_book(&self, book_id: i32) -> Result<Vec<Meetup>> {
        Ok(meetups::table
            .filter(meetups::book_id.eq(book_id))
            .load(&self.pg_conn)?)
    }

    fn meetups_joined_by(&self, user_id: i32) -> Result<Vec<Meetup>> {
        Ok(meetups::table
            .inner_join(attendances::table)
            .filter(attendances::user_id.eq(user_id))
            .select(meetups::all_columns)
            .load(&self.pg_conn)?)
    }
}
