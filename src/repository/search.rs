//! Predicate builder shared by the list queries
//!
//! Accumulates SQL conditions and their positional text parameters. Callers
//! render the WHERE clause into both the count and the page query, then bind
//! the parameters in order onto each.

/// A set of AND-ed conditions over text parameters
#[derive(Debug, Default)]
pub struct Predicate {
    conditions: Vec<String>,
    params: Vec<String>,
}

impl Predicate {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a free-text search condition: the term must be a case-insensitive
    /// substring of at least one of the given fields. A missing or blank term
    /// adds nothing, so it behaves as match-all. LIKE metacharacters in the
    /// term match themselves, not wildcards.
    pub fn search(&mut self, term: Option<&str>, fields: &[&str]) {
        let Some(term) = term else { return };
        let term = term.trim();
        if term.is_empty() {
            return;
        }

        self.params
            .push(format!("%{}%", escape_like(&term.to_lowercase())));
        let n = self.params.len();
        let group = fields
            .iter()
            .map(|field| format!("LOWER({}) LIKE ${} ESCAPE '\\'", field, n))
            .collect::<Vec<_>>()
            .join(" OR ");
        self.conditions.push(format!("({})", group));
    }

    /// Add a case-insensitive equality filter. A missing or blank value adds
    /// nothing: absence of a filter means no constraint.
    pub fn equals_ci(&mut self, field: &str, value: Option<&str>) {
        let Some(value) = value else { return };
        let value = value.trim();
        if value.is_empty() {
            return;
        }

        self.params.push(value.to_lowercase());
        self.conditions
            .push(format!("LOWER({}) = ${}", field, self.params.len()));
    }

    /// Render the WHERE clause, or an empty string when unconstrained
    pub fn where_clause(&self) -> String {
        if self.conditions.is_empty() {
            String::new()
        } else {
            format!("WHERE {}", self.conditions.join(" AND "))
        }
    }

    /// Parameters to bind, in positional order
    pub fn params(&self) -> &[String] {
        &self.params
    }
}

fn escape_like(term: &str) -> String {
    term.replace('\\', "\\\\")
        .replace('%', "\\%")
        .replace('_', "\\_")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_predicate_matches_all() {
        let predicate = Predicate::new();
        assert_eq!(predicate.where_clause(), "");
        assert!(predicate.params().is_empty());
    }

    #[test]
    fn blank_search_term_is_unconstrained() {
        let mut predicate = Predicate::new();
        predicate.search(None, &["name"]);
        predicate.search(Some(""), &["name"]);
        predicate.search(Some("   "), &["name"]);
        assert_eq!(predicate.where_clause(), "");
    }

    #[test]
    fn search_ors_fields_over_one_parameter() {
        let mut predicate = Predicate::new();
        predicate.search(Some("Bolt"), &["name", "code", "category"]);
        assert_eq!(
            predicate.where_clause(),
            "WHERE (LOWER(name) LIKE $1 ESCAPE '\\' OR LOWER(code) LIKE $1 ESCAPE '\\' \
             OR LOWER(category) LIKE $1 ESCAPE '\\')"
        );
        assert_eq!(predicate.params(), &["%bolt%".to_string()]);
    }

    #[test]
    fn like_metacharacters_are_matched_literally() {
        let mut predicate = Predicate::new();
        predicate.search(Some("100%_a\\b"), &["name"]);
        assert_eq!(predicate.params(), &["%100\\%\\_a\\\\b%".to_string()]);
    }

    #[test]
    fn filters_are_anded_after_search() {
        let mut predicate = Predicate::new();
        predicate.search(Some("abc"), &["name", "code"]);
        predicate.equals_ci("status", Some("Open"));
        assert_eq!(
            predicate.where_clause(),
            "WHERE (LOWER(name) LIKE $1 ESCAPE '\\' OR LOWER(code) LIKE $1 ESCAPE '\\') \
             AND LOWER(status) = $2"
        );
        assert_eq!(predicate.params(), &["%abc%".to_string(), "open".to_string()]);
    }

    #[test]
    fn absent_filter_adds_no_constraint() {
        let mut predicate = Predicate::new();
        predicate.equals_ci("status", None);
        predicate.equals_ci("category", Some("  "));
        assert_eq!(predicate.where_clause(), "");
    }

    #[test]
    fn filter_only_predicate() {
        let mut predicate = Predicate::new();
        predicate.equals_ci("category", Some("Fasteners"));
        assert_eq!(predicate.where_clause(), "WHERE LOWER(category) = $1");
        assert_eq!(predicate.params(), &["fasteners".to_string()]);
    }
}
