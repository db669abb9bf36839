use crate::models::Repository;

/// The `limit` most-starred repositories. Equal star counts keep their input order.
pub fn top_repositories(repos: &[Repository], limit: usize) -> Vec<&Repository> {
    let mut ranked: Vec<&Repository> = repos.iter().collect();
    // sort_by is stable
    ranked.sort_by(|a, b| b.stargazers_count.cmp(&a.stargazers_count));
    ranked.truncate(limit);
    ranked
}
