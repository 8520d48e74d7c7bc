//! Reviewer comment record.

use serde::{Deserialize, Serialize};

/// One reviewer comment from the comments part.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CommentRecord {
    /// Sequential 1-based id in part order.
    pub id: usize,

    /// Text the comment is anchored to. Anchor reconstruction from the
    /// document markup is out of scope, so this may be empty; the report
    /// omits the anchor line in that case.
    pub anchor: String,

    /// Author attribute, verbatim.
    pub author: String,

    /// Date attribute, verbatim.
    pub date: String,

    /// Comment body text.
    pub text: String,
}
