table! {
    authors (id) {
        id -> Int4,
        name -> Varchar,
    }
}

table! {
    books (id) {
        id -> Int4,
        title -> Varchar,
        author_id -> Int4,
    }
}

table! {
    users (id) {
        id -> Int4,
        amz_auth_id -> Varchar,
    }
}

table! {
    reads (id) {
        id -> Int4,
        user_id -> Int4,
        book_id -> Int4,
        reaction -> Nullable<Int4>,
    }
}

table! {
    meetups (id) {
        id -> Int4,
        location -> Varchar,
        description -> Varchar,
        date_time -> Timestamp,
        book_id -> Int4,
        host_id -> Int4,
    }
}

table! {
    attendances (id) {
        id -> Int4,
        meetup_id -> Int4,
        user_id -> Int4,
    }
}

joinable!(books -> authors (author_id));
joinable!(reads -> books (book_id));
joinable!(reads -> users (user_id));
joinable!(meetups -> books (book_id));
joinable!(meetups -> users (host_id));
joinable!(attendances -> meetups (meetup_id));
joinable!(attendances -> users (user_id));

allow_tables_to_appear_in_same_query!(
    authors,
    books,
    users,
    reads,
    meetups,
    attendances,
);
