use blogdesk::domain::entities::{Author, Post};
use blogdesk::util::text::{DEFAULT_PREVIEW_CHARS, truncate};

pub fn post_line(post: &Post) -> String {
    let id = post
        .id
        .map_or_else(|| "-".to_string(), |id| id.to_string());
    let author = post.author.as_deref().unwrap_or("-");
    format!(
        "{id}\t{status}\t{title}\t{author}\t{preview}",
        status = post.status,
        title = post.title,
        preview = truncate(&post.content, DEFAULT_PREVIEW_CHARS),
    )
}

pub fn posts(posts: &[&Post]) {
    if posts.is_empty() {
        println!("no posts");
        return;
    }
    for post in posts {
        println!("{}", post_line(post));
    }
}

pub fn authors(authors: &[Author]) {
    for author in authors {
        println!("{}\t{}", author.id, author.name);
    }
}

/// Form errors, one per line, on stderr.
pub fn form_errors(errors: &[String]) {
    for message in errors {
        eprintln!("{message}");
    }
}
