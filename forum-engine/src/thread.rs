//! Comment thread reconstruction.
//!
//! Storage keeps comments flat, each carrying an optional parent reference.
//! `build_tree` turns one subject's flat list into a display-ordered tree:
//! top-level comments follow the caller's sort toggle, while replies under a
//! parent always read oldest first at every depth. A comment whose declared
//! parent is absent from the input is an orphan and is dropped from the
//! output, never promoted to the top level.
use std::collections::HashMap;

use forum_shared::{Comment, SortOrder};
use uuid::Uuid;

/// One node of the reconstructed thread. Owns its comment and its replies;
/// this shape exists only in the read path, storage stays flat.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CommentNode {
    pub comment: Comment,
    pub replies: Vec<CommentNode>,
}

/// Builds the reply tree for one subject's comments.
///
/// Total over any finite input: malformed parent references produce dropped
/// nodes, never errors, and the empty input yields an empty tree. Duplicate
/// ids are not expected from storage; if present, the last occurrence wins.
/// Runs in O(n log n) for the sorts, O(n) for indexing and assembly.
pub fn build_tree(comments: Vec<Comment>, order: SortOrder) -> Vec<CommentNode> {
    // Index by id, keeping input order as the tiebreaker for equal
    // timestamps. Last occurrence wins on duplicate ids.
    let mut last_position: HashMap<Uuid, usize> = HashMap::with_capacity(comments.len());
    for (position, comment) in comments.iter().enumerate() {
        last_position.insert(comment.id, position);
    }

    let mut roots: Vec<Comment> = Vec::new();
    let mut children: HashMap<Uuid, Vec<Comment>> = HashMap::new();
    for (position, comment) in comments.into_iter().enumerate() {
        if last_position[&comment.id] != position {
            continue;
        }
        match comment.parent_comment_id {
            None => roots.push(comment),
            Some(parent_id) if last_position.contains_key(&parent_id) => {
                children.entry(parent_id).or_default().push(comment);
            }
            // Orphan: declared parent not in this comment set.
            Some(_) => {}
        }
    }

    roots.sort_by(|a, b| match order {
        SortOrder::Newest => b.created_at.cmp(&a.created_at),
        SortOrder::Oldest => a.created_at.cmp(&b.created_at),
    });

    roots
        .into_iter()
        .map(|root| attach_replies(root, &mut children))
        .collect()
}

/// Recursively pulls a comment's replies out of the grouping map, oldest
/// first. Each group is taken at most once, so reference cycles among
/// non-root comments simply stay unreachable and fall out of the output.
fn attach_replies(comment: Comment, children: &mut HashMap<Uuid, Vec<Comment>>) -> CommentNode {
    let mut replies = children.remove(&comment.id).unwrap_or_default();
    replies.sort_by(|a, b| a.created_at.cmp(&b.created_at));
    CommentNode {
        replies: replies
            .into_iter()
            .map(|reply| attach_replies(reply, children))
            .collect(),
        comment,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{DateTime, TimeZone, Utc};
    use forum_shared::VoteSets;

    fn ts(seconds: i64) -> DateTime<Utc> {
        Utc.timestamp_opt(seconds, 0).unwrap()
    }

    fn id(n: u128) -> Uuid {
        Uuid::from_u128(n)
    }

    fn make_comment(comment_id: u128, parent: Option<u128>, seconds: i64) -> Comment {
        Comment {
            id: id(comment_id),
            subject_id: id(1000),
            parent_comment_id: parent.map(id),
            content: format!("comment {comment_id}"),
            author_id: "author".to_string(),
            author_username: "author".to_string(),
            like_count: 0,
            votes: VoteSets::default(),
            created_at: ts(seconds),
            updated_at: ts(seconds),
        }
    }

    fn root_ids(tree: &[CommentNode]) -> Vec<Uuid> {
        tree.iter().map(|node| node.comment.id).collect()
    }

    #[test]
    fn test_empty_input_yields_empty_tree() {
        assert_eq!(build_tree(Vec::new(), SortOrder::Newest), Vec::new());
    }

    #[test]
    fn test_roots_replies_and_orphans() {
        let comments = vec![
            make_comment(1, None, 10),
            make_comment(2, Some(1), 20),
            make_comment(3, None, 5),
            make_comment(4, Some(99), 30), // parent 99 does not exist
        ];

        let tree = build_tree(comments, SortOrder::Newest);

        assert_eq!(root_ids(&tree), vec![id(1), id(3)]);
        assert_eq!(tree[0].replies.len(), 1);
        assert_eq!(tree[0].replies[0].comment.id, id(2));
        assert!(tree[1].replies.is_empty());
    }

    #[test]
    fn test_oldest_toggle_reverses_roots_only() {
        let comments = vec![
            make_comment(1, None, 10),
            make_comment(2, Some(1), 20),
            make_comment(3, None, 5),
        ];

        let tree = build_tree(comments, SortOrder::Oldest);

        assert_eq!(root_ids(&tree), vec![id(3), id(1)]);
        // Reply ordering under a parent is independent of the toggle.
        assert_eq!(tree[1].replies[0].comment.id, id(2));
    }

    #[test]
    fn test_replies_read_oldest_first_under_newest_roots() {
        let comments = vec![
            make_comment(1, None, 10),
            make_comment(2, Some(1), 30),
            make_comment(3, Some(1), 20),
            make_comment(4, None, 40),
        ];

        let tree = build_tree(comments, SortOrder::Newest);

        assert_eq!(root_ids(&tree), vec![id(4), id(1)]);
        let replies: Vec<Uuid> = tree[1].replies.iter().map(|r| r.comment.id).collect();
        assert_eq!(replies, vec![id(3), id(2)]);
    }

    #[test]
    fn test_ascending_reply_rule_applies_at_every_depth() {
        let comments = vec![
            make_comment(1, None, 10),
            make_comment(2, Some(1), 20),
            make_comment(3, Some(2), 50),
            make_comment(4, Some(2), 40),
            make_comment(5, Some(2), 60),
        ];

        let tree = build_tree(comments, SortOrder::Newest);

        let nested: Vec<Uuid> = tree[0].replies[0]
            .replies
            .iter()
            .map(|r| r.comment.id)
            .collect();
        assert_eq!(nested, vec![id(4), id(3), id(5)]);
    }

    #[test]
    fn test_descendants_of_orphans_are_dropped() {
        let comments = vec![
            make_comment(1, None, 10),
            make_comment(2, Some(99), 20), // orphan
            make_comment(3, Some(2), 30),  // child of the orphan
        ];

        let tree = build_tree(comments, SortOrder::Newest);

        assert_eq!(root_ids(&tree), vec![id(1)]);
        assert!(tree[0].replies.is_empty());
    }

    #[test]
    fn test_reference_cycles_fall_out_of_the_output() {
        let comments = vec![
            make_comment(1, None, 10),
            make_comment(2, Some(3), 20),
            make_comment(3, Some(2), 30),
            make_comment(4, Some(4), 40), // self-referencing
        ];

        let tree = build_tree(comments, SortOrder::Newest);

        assert_eq!(root_ids(&tree), vec![id(1)]);
    }

    #[test]
    fn test_duplicate_ids_last_occurrence_wins() {
        let mut duplicate = make_comment(2, Some(1), 20);
        duplicate.content = "first write".to_string();
        let mut latest = make_comment(2, Some(1), 25);
        latest.content = "second write".to_string();

        let comments = vec![make_comment(1, None, 10), duplicate, latest];
        let tree = build_tree(comments, SortOrder::Newest);

        assert_eq!(tree[0].replies.len(), 1);
        assert_eq!(tree[0].replies[0].comment.content, "second write");
    }

    #[test]
    fn test_equal_timestamps_keep_input_order() {
        let comments = vec![
            make_comment(1, None, 10),
            make_comment(2, None, 10),
            make_comment(3, None, 10),
        ];

        let tree = build_tree(comments, SortOrder::Oldest);

        assert_eq!(root_ids(&tree), vec![id(1), id(2), id(3)]);
    }

    #[test]
    fn test_no_depth_limit() {
        // A chain of 50 nested replies survives intact.
        let mut comments = vec![make_comment(1, None, 1)];
        for n in 2..=50u128 {
            comments.push(make_comment(n, Some(n - 1), n as i64));
        }

        let tree = build_tree(comments, SortOrder::Newest);

        let mut depth = 0;
        let mut node = &tree[0];
        while let Some(next) = node.replies.first() {
            node = next;
            depth += 1;
        }
        assert_eq!(depth, 49);
    }
}
