use nom::{alt, char, delimited, opt, tag, take_while, take_while1, tuple, IResult};
use store::ProfileRef;

#[derive(Debug, Clone, Eq, PartialEq)]
pub enum Statement {
    TopBooks(Option<i64>),
    MyBooks(i64, String),
    Profile(ProfileRef),
    SaveProfile(String),
    AddBook,
    Meetups(i32),
    MeetupDetails(i32),
    MyMeetups(i32),
    AddMeetup,
}

#[inline(always)]
fn ident(c: char) -> bool {
    c.is_alphanumeric() || c == '_' || c == '-' || c == '.'
}

fn parse_ident(input: &str) -> IResult<&str, &str> {
    take_while1!(input, ident)
}

fn parse_number(input: &str) -> IResult<&str, &str> {
    take_while1!(input, |c: char| c.is_ascii_digit())
}

fn parse_separator(input: &str) -> IResult<&str, &str> {
    delimited!(
        input,
        take_while!(|c: char| c == ' '),
        tag!(","),
        take_while!(|c: char| c == ' ')
    )
}

fn parse_profile_ref(input: &str) -> IResult<&str, ProfileRef> {
    let (input, ref_type) = alt! {
        input,
        tag!("auth_id") |
        tag!("id")
    }?;

    let (input, profile) = match ref_type {
        "id" => {
            let (input, id) = delimited!(input, char!('('), parse_number, char!(')'))?;
            (
                input,
                ProfileRef::Id(id.parse().expect("Parsing a number should not fail")),
            )
        }

        "auth_id" => {
            let (input, auth_id) = delimited!(input, char!('('), parse_ident, char!(')'))?;
            (input, ProfileRef::auth_id(auth_id))
        }

        _ => unreachable!(),
    };

    Ok((input, profile))
}

fn parse_statement(input: &str) -> IResult<&str, Statement> {
    let (input, statement_type) = alt! {
        input,
        tag!("top_books")    |
        tag!("my_books")     |
        tag!("my_meetups")   |
        tag!("save_profile") |
        tag!("profile")      |
        tag!("add_book")     |
        tag!("add_meetup")   |
        tag!("meetups")      |
        tag!("meetup")
    }?;

    let (input, statement) = match statement_type {
        "top_books" => {
            let (input, limit) = opt!(input, delimited!(char!('('), parse_number, char!(')')))?;
            let limit = limit.map(|l| l.parse().expect("Parsing a number should not fail"));
            (input, Statement::TopBooks(limit))
        }

        "my_books" => {
            let (input, (limit, _, auth_id)) = delimited!(
                input,
                char!('('),
                tuple!(parse_number, parse_separator, parse_ident),
                char!(')')
            )?;

            (
                input,
                Statement::MyBooks(limit.parse().unwrap(), auth_id.into()),
            )
        }

        "profile" => {
            let (input, profile) = delimited!(input, char!('('), parse_profile_ref, char!(')'))?;
            (input, Statement::Profile(profile))
        }

        "save_profile" => {
            let (input, auth_id) = delimited!(input, char!('('), parse_ident, char!(')'))?;
            (input, Statement::SaveProfile(auth_id.into()))
        }

        "add_book" => (input, Statement::AddBook),

        "add_meetup" => (input, Statement::AddMeetup),

        "meetups" => {
            let (input, book_id) = delimited!(input, char!('('), parse_number, char!(')'))?;
            (input, Statement::Meetups(book_id.parse().unwrap()))
        }

        "meetup" => {
            let (input, meetup_id) = delimited!(input, char!('('), parse_number, char!(')'))?;
            (input, Statement::MeetupDetails(meetup_id.parse().unwrap()))
        }

        "my_meetups" => {
            let (input, user_id) = delimited!(input, char!('('), parse_number, char!(')'))?;
            (input, Statement::MyMeetups(user_id.parse().unwrap()))
        }

        function => todo!("Function {}", function),
    };

    Ok((input, statement))
}

pub fn parse_line(input: &str) -> Option<Statement> {
    let input = input.trim();
    let (rest, statement) = parse_statement(input).ok()?;

    if rest.is_empty() {
        Some(statement)
    } else {
        None
    }
}
