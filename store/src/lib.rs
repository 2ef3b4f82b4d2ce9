// Copyright (c) 2020 White Leaf
//
// This software is released under the MIT License.
// https://opensource.org/licenses/MIT

pub mod entity;
pub mod error;
pub mod profile;
pub mod ranking;
pub mod values;

use anyhow::Error;
use std::collections::HashMap;

pub use entity::{Entity, ToTable};
pub use profile::ProfileRef;
pub use ranking::{AuthorRef, RankedBook};
pub use values::{Field, Type, Value};

pub type Result<T> = std::result::Result<T, Error>;

/// The relational store behind the book club: typed accessors for the five
/// entities, keyed upserts, lookups and the ranking/meetup query surface.
///
/// Upserts ("resolve-or-create") take an attribute map that must contain the
/// entity's natural key; lookups ("resolve-or-fail") fail with a not-found
/// error instead of creating anything. The two are deliberately separate
/// operations.
pub trait Store {
    type Author: Entity<Id = i32>;
    type Book: Entity<Id = i32>;
    type User: Entity<Id = i32>;
    type Read: Entity<Id = i32>;
    type Meetup: Entity<Id = i32>;

    /// Get or insert an author, keyed by `name`
    fn find_or_create_author<'a>(&self, attrs: HashMap<&'a str, Value>) -> Result<Self::Author>;

    /// Get or insert a book, keyed by `title` and `author_id`
    fn find_or_create_book<'a>(&self, attrs: HashMap<&'a str, Value>) -> Result<Self::Book>;

    /// Get or insert a user, keyed by `amz_auth_id`
    fn find_or_create_user<'a>(&self, attrs: HashMap<&'a str, Value>) -> Result<Self::User>;

    /// Get or insert a read, keyed by `user_id` and `book_id`; a fresh read
    /// has no reaction until [`Store::set_reaction`] records one
    fn find_or_create_read<'a>(&self, attrs: HashMap<&'a str, Value>) -> Result<Self::Read>;

    /// Get or insert a meetup; every attribute is part of the key, identical
    /// tuples resolve to the same meetup
    fn find_or_create_meetup<'a>(&self, attrs: HashMap<&'a str, Value>) -> Result<Self::Meetup>;

    /// Resolve a user or fail with [`error::ErrorKind::NoUserFound`]
    fn user_by(&self, by: &ProfileRef) -> Result<Self::User>;

    /// Resolve a meetup by id or fail
    fn meetup_by_id(&self, id: i32) -> Result<Self::Meetup>;

    /// Resolve the book a meetup is about, or fail
    fn book_of(&self, meetup: &Self::Meetup) -> Result<Self::Book>;

    /// Overwrite the reaction of a read; reads are current-state per
    /// (user, book), not history
    fn set_reaction(&self, read: &Self::Read, reaction: i32) -> Result<Self::Read>;

    /// Books ranked by average positive reaction, best first, at most
    /// `limit` of them; books nobody reacted positively to are absent
    fn ranked_books(&self, limit: i64) -> Result<Vec<RankedBook>>;

    /// Same ranking, but the given user's reads don't count towards the
    /// averages
    fn ranked_books_except(&self, user_id: i32, limit: i64) -> Result<Vec<RankedBook>>;

    /// Every book the user has read, carrying the user's own reaction,
    /// ordered by book id
    fn rated_books(&self, user_id: i32) -> Result<Vec<RankedBook>>;

    /// All meetups for a book
    fn meetups_for_book(&self, book_id: i32) -> Result<Vec<Self::Meetup>>;

    /// All meetups a user has joined
    fn meetups_joined_by(&self, user_id: i32) -> Result<Vec<Self::Meetup>>;
}
