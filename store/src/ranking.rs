// Copyright (c) 2020 White Leaf
//
// This software is released under the MIT License.
// https://opensource.org/licenses/MIT

use crate::entity::Entity;
use std::collections::HashMap;

/// A book joined with its author, as produced by the ranking and profile
/// queries. The author's name is carried nested instead of as a raw joined
/// column. `avg_reaction` is the crowd's average over positive reactions,
/// `reaction` the requesting user's own score; which of the two is present
/// depends on the query that produced the row.
#[derive(Debug, Clone, PartialEq)]
pub struct RankedBook {
    pub id: i32,
    pub title: String,
    pub author: AuthorRef,
    pub avg_reaction: Option<f64>,
    pub reaction: Option<i32>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct AuthorRef {
    pub name: String,
}

impl Entity for RankedBook {
    type Id = i32;

    fn get_id(&self) -> Self::Id {
        self.id
    }

    fn get_name(&self) -> Option<&str> {
        Some(&self.title)
    }

    fn get_data(&self) -> HashMap<String, String> {
        let mut data = HashMap::new();
        data.insert("title".into(), self.title.clone());
        data.insert("author".into(), self.author.name.clone());

        if let Some(avg) = self.avg_reaction {
            data.insert("avg_reaction".into(), format!("{:.2}", avg));
        }

        if let Some(reaction) = self.reaction {
            data.insert("reaction".into(), reaction.to_string());
        }

        data
    }
}
