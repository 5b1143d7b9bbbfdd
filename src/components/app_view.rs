//! Routes of the player and the listener query they carry.

use std::fmt;

use dioxus::prelude::*;
use dioxus::router::FromQuery;

use crate::components::views::{PageNotFound, Queue};
use crate::components::AppShell;

const USER_ID_PARAM: &str = "userId";

#[derive(Routable, Clone, PartialEq, Debug)]
#[rustfmt::skip]
pub enum AppView {
    #[layout(AppShell)]
        #[route("/queue?:..query")]
        Queue { query: ListenerQuery },
    #[end_layout]
    #[route("/:..segments")]
    PageNotFound { segments: Vec<String> },
}

/// Query string of the queue page. Only `userId` is read; other pairs are
/// ignored.
#[derive(Clone, PartialEq, Default, Debug)]
pub struct ListenerQuery {
    user_id: Option<String>,
}

impl ListenerQuery {
    /// The listener whose queue is shown; `None` when absent or blank.
    pub fn user_id(&self) -> Option<String> {
        self.user_id.clone()
    }
}

impl FromQuery for ListenerQuery {
    fn from_query(query: &str) -> Self {
        let user_id = query
            .trim_start_matches('?')
            .split('&')
            .filter_map(|pair| pair.split_once('=').or(Some((pair, ""))))
            .find(|(key, _)| *key == USER_ID_PARAM)
            .map(|(_, value)| {
                let value = value.replace('+', " ");
                urlencoding::decode(&value)
                    .map(|decoded| decoded.into_owned())
                    .unwrap_or(value)
            })
            .map(|value| value.trim().to_string())
            .filter(|value| !value.is_empty());
        Self { user_id }
    }
}

impl fmt::Display for ListenerQuery {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.user_id {
            Some(user_id) => write!(f, "{USER_ID_PARAM}={}", urlencoding::encode(user_id)),
            None => Ok(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reads_user_id_among_other_pairs() {
        let query = ListenerQuery::from_query("theme=dark&userId=u-42&x=1");
        assert_eq!(query.user_id().as_deref(), Some("u-42"));
    }

    #[test]
    fn decodes_percent_and_plus() {
        let query = ListenerQuery::from_query("userId=ana%40example+one");
        assert_eq!(query.user_id().as_deref(), Some("ana@example one"));
    }

    #[test]
    fn missing_or_blank_user_id_is_none() {
        assert_eq!(ListenerQuery::from_query("").user_id(), None);
        assert_eq!(ListenerQuery::from_query("foo=bar").user_id(), None);
        assert_eq!(ListenerQuery::from_query("userId=").user_id(), None);
        assert_eq!(ListenerQuery::from_query("userId=%20%20").user_id(), None);
        assert_eq!(ListenerQuery::from_query("userId").user_id(), None);
    }

    #[test]
    fn display_writes_back_the_query() {
        let query = ListenerQuery::from_query("userId=a+b");
        assert_eq!(query.to_string(), "userId=a%20b");
        assert_eq!(ListenerQuery::from_query(&query.to_string()), query);
        assert_eq!(ListenerQuery::default().to_string(), "");
    }
}
