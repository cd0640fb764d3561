//! Thread detail assembly.
//!
//! Folds a thread header and its flat comment and reply lists into one
//! nested tree. Input lists are already ordered by creation date; that order
//! is preserved for comments and, within each comment, for replies.

use std::collections::HashMap;

use serde::Serialize;
use serde_json::json;

use crate::domain::{
    CommentRow, EntryView, GetComments, GetReplies, GetThread, InvariantError, ReplyRow,
    ThreadRow,
};

/// A thread with its comments and their replies.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ThreadDetail {
    pub id: String,
    pub title: String,
    pub body: String,
    pub date: String,
    pub username: String,
    pub comments: Vec<CommentDetail>,
}

/// A comment with the replies attached to it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CommentDetail {
    pub id: String,
    pub username: String,
    pub date: String,
    pub content: String,
    pub replies: Vec<EntryView>,
}

impl CommentDetail {
    fn new(comment: EntryView, replies: Vec<EntryView>) -> Self {
        Self {
            id: comment.id,
            username: comment.username,
            date: comment.date,
            content: comment.content,
            replies,
        }
    }
}

/// Build the thread tree from the three fetched collections.
///
/// Rows pass through [`GetThread`], [`GetComments`] and [`GetReplies`], so
/// deleted comments and replies keep their position with masked content.
/// Replies whose comment is not in `comments` are dropped.
pub fn assemble(
    thread: &ThreadRow,
    comments: &[CommentRow],
    replies: &[ReplyRow],
) -> Result<ThreadDetail, InvariantError> {
    let header = GetThread::new(&thread.to_payload())?;

    let comment_views = GetComments::new(&json!({
        "comments": comments.iter().map(CommentRow::to_payload).collect::<Vec<_>>(),
    }))?
    .comments;

    let reply_views = GetReplies::new(&json!({
        "replies": replies.iter().map(ReplyRow::to_payload).collect::<Vec<_>>(),
    }))?
    .replies;

    // Views come back in input order, so each row pairs with its view.
    let mut replies_by_comment: HashMap<&str, Vec<EntryView>> = HashMap::new();
    for (row, view) in replies.iter().zip(reply_views) {
        replies_by_comment
            .entry(row.comment_id.as_str())
            .or_default()
            .push(view);
    }

    let comments = comments
        .iter()
        .zip(comment_views)
        .map(|(row, view)| {
            let replies = replies_by_comment
                .remove(row.id.as_str())
                .unwrap_or_default();
            CommentDetail::new(view, replies)
        })
        .collect();

    Ok(ThreadDetail {
        id: header.id,
        title: header.title,
        body: header.body,
        date: header.date,
        username: header.username,
        comments,
    })
}
