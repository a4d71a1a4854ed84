//! Cache key definitions.
//!
//! A cache key is the relative endpoint path handed to the API client. The
//! HTTP method is not part of the key.

/// Post collection; also the key every write invalidates.
pub const BLOGS: &str = "blogs";

/// Author collection used by the post form.
pub const AUTHORS: &str = "authors";

/// Single post endpoint, `blogs/{id}`.
pub fn blog(id: i64) -> String {
    format!("{BLOGS}/{id}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_post_key_nests_under_collection() {
        assert_eq!(blog(12), "blogs/12");
    }
}
