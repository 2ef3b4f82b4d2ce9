// Copyright (c) 2020 White Leaf
//
// This software is released under the MIT License.
// https://opensource.org/licenses/MIT

pub mod ranking;

use anyhow::Context;
use chrono::NaiveDateTime;
use common_macros::hash_map;
use std::collections::HashMap;
use store::{Entity, ProfileRef, RankedBook, Result, Store, Value};

/// Payload returned by [`Club::add_book`].
#[derive(Debug, Clone, PartialEq)]
pub struct AddedBook {
    pub book: BookSummary,
    pub author: AuthorSummary,
    pub reaction: i32,
}

#[derive(Debug, Clone, PartialEq)]
pub struct BookSummary {
    pub id: i32,
    pub title: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct AuthorSummary {
    pub id: i32,
    pub name: String,
}

/// A user's personal shelf: every book they have rated.
#[derive(Debug, Clone)]
pub struct Profile {
    pub books: Vec<RankedBook>,
}

/// A meetup with its book embedded.
pub struct MeetupDetails<S: Store> {
    pub meetup: S::Meetup,
    pub book: S::Book,
}

/// The book club workflows, written against any [`Store`]. The store handle
/// is passed in explicitly and borrowed for the club's lifetime.
///
/// None of the multi-step workflows run inside a transaction: a step that
/// fails leaves the writes of earlier steps in place, and the error names
/// the step that failed.
pub struct Club<'a, S> {
    store: &'a S,
}

impl<'a, S: Store> Club<'a, S> {
    pub fn with_store(store: &'a S) -> Self {
        Self { store }
    }

    /// Record a reader's reaction to a book, creating the author, the book
    /// and the read on first sight.
    ///
    /// The reader is resolved by lookup, not upsert: an unknown reader fails
    /// the workflow (after the author and book upserts have already run).
    /// The reaction is written unconditionally, so submitting a new score
    /// for an already-read book re-rates it.
    pub fn add_book<'b>(
        &self,
        author: HashMap<&'b str, Value>,
        mut book: HashMap<&'b str, Value>,
        reaction: i32,
        reader: &ProfileRef,
    ) -> Result<AddedBook> {
        let author = self
            .store
            .find_or_create_author(author)
            .context("upserting author")?;

        book.insert("author_id", Value::Int32(author.get_id()));
        let book = self
            .store
            .find_or_create_book(book)
            .context("upserting book")?;

        let reader = self.store.user_by(reader).context("resolving reader")?;

        let read = self
            .store
            .find_or_create_read(hash_map! {
                "user_id" => Value::Int32(reader.get_id()),
                "book_id" => Value::Int32(book.get_id()),
            })
            .context("upserting read")?;

        self.store
            .set_reaction(&read, reaction)
            .context("recording reaction")?;

        log::debug!(
            "user({}) reacted {} to book({})",
            reader.get_id(),
            reaction,
            book.get_id()
        );

        Ok(AddedBook {
            book: BookSummary {
                id: book.get_id(),
                title: book.get_name().unwrap_or_default().to_owned(),
            },
            author: AuthorSummary {
                id: author.get_id(),
                name: author.get_name().unwrap_or_default().to_owned(),
            },
            reaction,
        })
    }

    /// The crowd's top books by average reaction, best first.
    pub fn get_books(&self, limit: i64) -> Result<Vec<RankedBook>> {
        self.store.ranked_books(limit)
    }

    /// The ranking a signed-in user sees: the crowd's averages without the
    /// user's own reads, merged with the user's own books (see
    /// [`ranking::merge_rankings`]). An unknown auth id gets a fresh user
    /// row, signed-in browsing must not fail for someone who never saved a
    /// profile.
    pub fn get_books_signed_in(&self, limit: i64, auth_id: &str) -> Result<Vec<RankedBook>> {
        let user = self
            .store
            .find_or_create_user(hash_map! {
                "amz_auth_id" => Value::String(auth_id.to_owned()),
            })
            .context("resolving requesting user")?;

        let peer = self.store.ranked_books_except(user.get_id(), limit)?;
        let own = self.store.rated_books(user.get_id())?;

        Ok(ranking::merge_rankings(peer, own))
    }

    /// Get or create the user behind an external auth id.
    pub fn save_profile(&self, auth_id: &str) -> Result<S::User> {
        self.store
            .find_or_create_user(hash_map! {
                "amz_auth_id" => Value::String(auth_id.to_owned()),
            })
            .context("upserting profile")
    }

    /// Every book a user has rated, ordered by book id. Fails with
    /// [`store::error::ErrorKind::NoUserFound`] when the reference matches
    /// nobody; an unknown profile is an error, not an empty shelf.
    pub fn get_profile(&self, profile: &ProfileRef) -> Result<Profile> {
        let user = self.store.user_by(profile)?;
        let books = self.store.rated_books(user.get_id())?;

        Ok(Profile { books })
    }

    /// Create a meetup for a book, hosted by an existing user. An identical
    /// (location, description, time, book, host) tuple resolves to the
    /// already existing meetup.
    pub fn add_meetup(
        &self,
        location: &str,
        description: &str,
        date_time: NaiveDateTime,
        book_id: i32,
        host: &ProfileRef,
    ) -> Result<S::Meetup> {
        let host = self.store.user_by(host).context("resolving host")?;

        self.store
            .find_or_create_meetup(hash_map! {
                "location" => Value::String(location.to_owned()),
                "description" => Value::String(description.to_owned()),
                "date_time" => Value::DateTime(date_time),
                "book_id" => Value::Int32(book_id),
                "host_id" => Value::Int32(host.get_id()),
            })
            .context("upserting meetup")
    }

    /// All meetups around a book.
    pub fn get_meetups(&self, book_id: i32) -> Result<Vec<S::Meetup>> {
        self.store.meetups_for_book(book_id)
    }

    /// A meetup by id, with its book embedded.
    pub fn get_meetup_details(&self, meetup_id: i32) -> Result<MeetupDetails<S>> {
        let meetup = self.store.meetup_by_id(meetup_id)?;
        let book = self.store.book_of(&meetup)?;

        Ok(MeetupDetails { meetup, book })
    }

    /// All meetups a user has joined.
    pub fn get_users_meetups(&self, user_id: i32) -> Result<Vec<S::Meetup>> {
        self.store.meetups_joined_by(user_id)
    }
}
