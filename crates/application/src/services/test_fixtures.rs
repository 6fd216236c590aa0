//! Fixture records shared by the strategy unit tests

use domain::{
    Comment, CommentId, EmailAddress, FetchError, Post, PostId, Profile, ProfileId, ResourceKind,
};

pub(crate) fn profile() -> Profile {
    Profile::new(
        ProfileId::new(1),
        "Erin",
        EmailAddress::new("erin@example.com").unwrap(),
    )
}

pub(crate) fn posts() -> Vec<Post> {
    vec![
        Post::new(PostId::new(101), ProfileId::new(1), "First Post"),
        Post::new(PostId::new(102), ProfileId::new(1), "Second Post"),
    ]
}

pub(crate) fn comments(post_id: PostId) -> Vec<Comment> {
    vec![
        Comment::new(CommentId::new(201), post_id, "I liked your post!"),
        Comment::new(CommentId::new(202), post_id, "Good job."),
    ]
}

pub(crate) fn failure(resource: ResourceKind) -> FetchError {
    let detail = match resource {
        ResourceKind::Profile => "Network issue while fetching user profile.",
        ResourceKind::Posts => "Database timeout while fetching posts.",
        ResourceKind::Comments => "API limit exceeded while fetching comments.",
    };
    FetchError::new(resource, detail)
}
