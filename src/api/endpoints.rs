//! Endpoint table

use super::method::{ApiMethod, ParamSpec, ParamType};
use crate::parser::EntityKind;
use crate::types::Method;

const INTEGER: &[ParamType] = &[ParamType::Integer];
const TEXT: &[ParamType] = &[ParamType::Text];
const BOOLEAN: &[ParamType] = &[ParamType::Boolean];
const TIMESTAMP: &[ParamType] = &[ParamType::Timestamp];
const TAGS: &[ParamType] = &[ParamType::TextList, ParamType::Text];

/// Sites of the authenticated account
pub const GET_SITES: ApiMethod = ApiMethod {
    path: "getsites",
    method: Method::GET,
    params: &[],
    requires_auth: true,
    result: EntityKind::Site,
    list: true,
};

/// One page of posts from a site
pub const READ_POSTS: ApiMethod = ApiMethod {
    path: "readposts",
    method: Method::GET,
    params: &[
        ParamSpec::optional("site_id", INTEGER),
        ParamSpec::optional("hostname", TEXT),
        ParamSpec::optional("num_posts", INTEGER),
        ParamSpec::optional("page", INTEGER),
        ParamSpec::optional("tag", TEXT),
    ],
    requires_auth: false,
    result: EntityKind::Post,
    list: true,
};

/// Create a post
pub const NEW_POST: ApiMethod = ApiMethod {
    path: "newpost",
    method: Method::POST,
    params: &[
        ParamSpec::optional("site_id", INTEGER),
        ParamSpec::optional("title", TEXT),
        ParamSpec::optional("body", TEXT),
        ParamSpec::optional("autopost", BOOLEAN),
        ParamSpec::optional("private", BOOLEAN),
        ParamSpec::optional("date", TIMESTAMP),
        ParamSpec::optional("tags", TAGS),
        ParamSpec::optional("source", TEXT),
        ParamSpec::optional("sourceLink", TEXT),
    ],
    requires_auth: true,
    result: EntityKind::Post,
    list: false,
};

/// Add a comment to a post
pub const NEW_COMMENT: ApiMethod = ApiMethod {
    path: "newcomment",
    method: Method::POST,
    params: &[
        ParamSpec::required("post_id", INTEGER),
        ParamSpec::required("comment", TEXT),
        ParamSpec::optional("name", TEXT),
        ParamSpec::optional("email", TEXT),
        ParamSpec::optional("date", TIMESTAMP),
    ],
    requires_auth: true,
    result: EntityKind::Comment,
    list: false,
};

/// Tags used on a site
pub const GET_TAGS: ApiMethod = ApiMethod {
    path: "gettags",
    method: Method::GET,
    params: &[
        ParamSpec::optional("site_id", INTEGER),
        ParamSpec::optional("hostname", TEXT),
    ],
    requires_auth: false,
    result: EntityKind::Tag,
    list: true,
};
