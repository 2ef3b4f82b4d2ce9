// Copyright (c) 2020 White Leaf
//
// This software is released under the MIT License.
// https://opensource.org/licenses/MIT

use store::RankedBook;

/// Merge the crowd's ranking with the requesting user's own books into one
/// deduplicated list, best first.
///
/// The own-books query doesn't compute averages, so a book present in both
/// sets keeps its own-entry (with the user's reaction) and borrows the
/// crowd's average for sorting. Books only the user has read sort by the
/// user's own reaction instead. The sort is stable: entries with equal
/// values keep their relative order, unique crowd entries first, then the
/// user's own.
pub fn merge_rankings(peer: Vec<RankedBook>, mut own: Vec<RankedBook>) -> Vec<RankedBook> {
    let mut merged = Vec::with_capacity(peer.len() + own.len());

    for book in peer {
        match own.iter_mut().find(|b| b.id == book.id) {
            Some(own_book) => own_book.avg_reaction = book.avg_reaction,
            None => merged.push(book),
        }
    }

    merged.append(&mut own);

    for book in &mut merged {
        if book.avg_reaction.is_none() {
            book.avg_reaction = book.reaction.map(f64::from);
        }
    }

    merged.sort_by(|a, b| {
        let a = a.avg_reaction.unwrap_or(0.0);
        let b = b.avg_reaction.unwrap_or(0.0);
        b.partial_cmp(&a).unwrap_or(std::cmp::Ordering::Equal)
    });

    merged
}

#[cfg(test)]
mod tests {
    use super::*;
    use store::AuthorRef;

    fn peer(id: i32, title: &str, avg: f64) -> RankedBook {
        RankedBook {
            id,
            title: title.into(),
            author: AuthorRef {
                name: "George Orwell".into(),
            },
            avg_reaction: Some(avg),
            reaction: None,
        }
    }

    fn own(id: i32, title: &str, reaction: i32) -> RankedBook {
        RankedBook {
            id,
            title: title.into(),
            author: AuthorRef {
                name: "George Orwell".into(),
            },
            avg_reaction: None,
            reaction: Some(reaction),
        }
    }

    #[test]
    fn every_id_appears_once() {
        let merged = merge_rankings(
            vec![peer(1, "1984", 4.5), peer(2, "Animal Farm", 4.0)],
            vec![own(2, "Animal Farm", 2), own(3, "Coming Up for Air", 5)],
        );

        let mut ids: Vec<_> = merged.iter().map(|b| b.id).collect();
        ids.sort_unstable();
        assert_eq!(ids, vec![1, 2, 3]);
    }

    #[test]
    fn shared_book_sorts_by_crowd_average() {
        let merged = merge_rankings(
            vec![peer(1, "1984", 3.0)],
            vec![own(1, "1984", 5), own(2, "Animal Farm", 4)],
        );

        // The user loved 1984, but the crowd's 3.0 decides its place.
        assert_eq!(merged[0].id, 2);
        assert_eq!(merged[1].id, 1);
        assert_eq!(merged[1].avg_reaction, Some(3.0));
        assert_eq!(merged[1].reaction, Some(5));
    }

    #[test]
    fn own_reaction_stands_in_for_missing_average() {
        let merged = merge_rankings(vec![], vec![own(7, "Burmese Days", 4)]);

        assert_eq!(merged[0].avg_reaction, Some(4.0));
        assert_eq!(merged[0].reaction, Some(4));
    }

    #[test]
    fn sorted_descending() {
        let merged = merge_rankings(
            vec![peer(1, "1984", 2.5), peer(2, "Animal Farm", 4.5)],
            vec![own(3, "Coming Up for Air", 3)],
        );

        let values: Vec<_> = merged.iter().map(|b| b.avg_reaction.unwrap()).collect();
        assert_eq!(values, vec![4.5, 3.0, 2.5]);
    }

    #[test]
    fn ties_keep_prior_order() {
        let merged = merge_rankings(
            vec![peer(1, "1984", 4.0), peer(2, "Animal Farm", 4.0)],
            vec![own(3, "Coming Up for Air", 4)],
        );

        // Equal values: unique crowd entries first, in their order, then own.
        let ids: Vec<_> = merged.iter().map(|b| b.id).collect();
        assert_eq!(ids, vec![1, 2, 3]);
    }

    #[test]
    fn unrated_read_sinks_to_the_bottom() {
        let mut never_rated = own(4, "Keep the Aspidistra Flying", 0);
        never_rated.reaction = None;

        let merged = merge_rankings(vec![peer(1, "1984", 1.5)], vec![never_rated]);

        assert_eq!(merged.last().unwrap().id, 4);
    }

    #[test]
    fn empty_sets() {
        assert!(merge_rankings(vec![], vec![]).is_empty());
    }
}
