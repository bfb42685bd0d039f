use crate::{components::common::ButtonVariant, config::ArticleIdEncoding};
use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};

pub const LOGIN_PATH: &str = "/users/login";
pub const ARTICLE_LIST_PATH: &str = "/articles/list";
pub const ARTICLE_EDIT_PATH: &str = "/articles/edit";
pub const ARTICLE_VIEW_PATH: &str = "/articles/view";

pub const DEFAULT_ARTICLE_ID: &str = "1";

// RFC 3986 unreserved characters stay literal.
const QUERY_VALUE: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'.')
    .remove(b'_')
    .remove(b'~');

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NavLink {
    pub href: &'static str,
    pub label_key: &'static str,
    pub icon: &'static str,
    pub variant: ButtonVariant,
}

pub const STATIC_NAV_LINKS: [NavLink; 3] = [
    NavLink {
        href: LOGIN_PATH,
        label_key: "landing.login",
        icon: "fa-user",
        variant: ButtonVariant::Primary,
    },
    NavLink {
        href: ARTICLE_LIST_PATH,
        label_key: "landing.article_list",
        icon: "fa-book-open",
        variant: ButtonVariant::Outline,
    },
    NavLink {
        href: ARTICLE_EDIT_PATH,
        label_key: "landing.write_article",
        icon: "fa-pen-to-square",
        variant: ButtonVariant::Outline,
    },
];

pub fn view_article_href(article_id: &str, encoding: ArticleIdEncoding) -> String {
    match encoding {
        ArticleIdEncoding::Verbatim => format!("{}?id={}", ARTICLE_VIEW_PATH, article_id),
        ArticleIdEncoding::Percent => format!(
            "{}?id={}",
            ARTICLE_VIEW_PATH,
            utf8_percent_encode(article_id, QUERY_VALUE)
        ),
    }
}
