//! View descriptions
//!
//! Pure functions from stored state to what the UI shows. The UI rebuilds
//! these from scratch after every change; nothing here is patched in place.

use uuid::Uuid;

use crate::site::SessionState;
use crate::types::{format_timestamp, Review, User};

#[derive(Debug, Clone, PartialEq)]
pub struct CommentLine {
    pub author: String,
    pub text: String,
    pub created_at: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ReviewCard {
    pub id: Uuid,
    /// Position in the feed; the delete action targets this
    pub display_index: usize,
    /// Position in storage; the comment action targets this
    pub storage_index: usize,
    pub drink_name: String,
    pub description: String,
    pub photo: String,
    pub author: String,
    pub created_at: String,
    /// Oldest first
    pub comments: Vec<CommentLine>,
}

/// Review feed, newest first.
pub fn review_cards(reviews: &[Review]) -> Vec<ReviewCard> {
    let len = reviews.len();
    reviews
        .iter()
        .enumerate()
        .rev()
        .enumerate()
        .map(|(display_index, (storage_index, review))| {
            debug_assert_eq!(storage_index, len - 1 - display_index);
            ReviewCard {
                id: review.id,
                display_index,
                storage_index,
                drink_name: review.drink_name.clone(),
                description: review.description.clone(),
                photo: review.photo.clone(),
                author: review.author.clone(),
                created_at: format_timestamp(&review.created_at),
                comments: review
                    .comments
                    .iter()
                    .map(|c| CommentLine {
                        author: c.author.clone(),
                        text: c.text.clone(),
                        created_at: format_timestamp(&c.created_at),
                    })
                    .collect(),
            }
        })
        .collect()
}

#[derive(Debug, Clone, PartialEq)]
pub struct UserRow {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub age: u32,
}

#[derive(Debug, Clone, PartialEq)]
pub enum UserList {
    Empty { message: &'static str },
    Rows(Vec<UserRow>),
}

/// Registered users in registration order. Credentials are never exposed.
pub fn user_list(users: &[User]) -> UserList {
    if users.is_empty() {
        return UserList::Empty {
            message: "No hay usuarios registrados.",
        };
    }
    UserList::Rows(
        users
            .iter()
            .map(|u| UserRow {
                name: u.name.clone(),
                email: u.email.clone(),
                phone: u.phone.clone(),
                age: u.age,
            })
            .collect(),
    )
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Welcome {
    Greeting { name: String },
    Invitation,
}

pub fn welcome(display_name: Option<String>) -> Welcome {
    match display_name {
        Some(name) => Welcome::Greeting { name },
        None => Welcome::Invitation,
    }
}

/// Which navigation entries are visible.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavView {
    pub show_login: bool,
    pub show_register: bool,
    pub show_logout: bool,
}

pub fn nav(session: &SessionState) -> NavView {
    let logged_in = session.is_authenticated();
    NavView {
        show_login: !logged_in,
        show_register: !logged_in,
        show_logout: logged_in,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Comment;

    fn review(name: &str) -> Review {
        Review::new(name, "desc", "images/tragos.jpg", "Ana")
    }

    #[test]
    fn test_reviews_newest_first() {
        let cards = review_cards(&[review("A"), review("B")]);
        let names: Vec<_> = cards.iter().map(|c| c.drink_name.as_str()).collect();
        assert_eq!(names, vec!["B", "A"]);

        assert_eq!(cards[0].display_index, 0);
        assert_eq!(cards[0].storage_index, 1);
        assert_eq!(cards[1].display_index, 1);
        assert_eq!(cards[1].storage_index, 0);
    }

    #[test]
    fn test_comments_oldest_first() {
        let mut r = review("A");
        r.comments.push(Comment::new("Bob", "X"));
        r.comments.push(Comment::new("Eva", "Y"));
        let cards = review_cards(&[r]);
        let texts: Vec<_> = cards[0].comments.iter().map(|c| c.text.as_str()).collect();
        assert_eq!(texts, vec!["X", "Y"]);
    }

    #[test]
    fn test_empty_feed() {
        assert!(review_cards(&[]).is_empty());
    }

    #[test]
    fn test_user_list() {
        assert!(matches!(user_list(&[]), UserList::Empty { .. }));

        let users = vec![User {
            name: "Ana".into(),
            email: "ana@x.com".into(),
            phone: "555".into(),
            age: 20,
            password: "secret".into(),
        }];
        match user_list(&users) {
            UserList::Rows(rows) => {
                assert_eq!(rows.len(), 1);
                assert_eq!(rows[0].name, "Ana");
                assert_eq!(rows[0].age, 20);
            }
            UserList::Empty { .. } => panic!("expected rows"),
        }
    }

    #[test]
    fn test_welcome_and_nav() {
        assert_eq!(welcome(None), Welcome::Invitation);
        assert_eq!(
            welcome(Some("Ana".into())),
            Welcome::Greeting { name: "Ana".into() }
        );

        let anon = nav(&SessionState::Anonymous);
        assert!(anon.show_login && anon.show_register && !anon.show_logout);

        let authed = nav(&SessionState::Authenticated { email: "ana@x.com".into() });
        assert!(!authed.show_login && !authed.show_register && authed.show_logout);
    }
}
