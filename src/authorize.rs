//! Role-based authorization gate.
//!
//! A command may be restricted to actors with a specific author association
//! (the platform-reported relationship between a user and the repository,
//! e.g. `OWNER`, `MEMBER`, `CONTRIBUTOR`). The check is an exact,
//! case-sensitive string comparison with no role hierarchy.

/// The wildcard role: every actor is authorized.
pub const ROLE_ALL: &str = "ALL";

/// Decides whether an actor with the given author association may execute
/// the command.
///
/// Authorized iff the required role is [`ROLE_ALL`], or the association is
/// present and exactly equals the required role.
pub fn is_authorized(author_association: Option<&str>, required_role: &str) -> bool {
    required_role == ROLE_ALL || author_association == Some(required_role)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn exact_match_is_authorized() {
        assert!(is_authorized(Some("OWNER"), "OWNER"));
        assert!(is_authorized(Some("MEMBER"), "MEMBER"));
    }

    #[test]
    fn mismatch_is_rejected() {
        assert!(!is_authorized(Some("MEMBER"), "OWNER"));
        assert!(!is_authorized(Some("CONTRIBUTOR"), "MEMBER"));
    }

    #[test]
    fn missing_association_is_rejected_unless_all() {
        assert!(!is_authorized(None, "OWNER"));
        assert!(is_authorized(None, ROLE_ALL));
    }

    #[test]
    fn comparison_is_case_sensitive() {
        assert!(!is_authorized(Some("owner"), "OWNER"));
        assert!(!is_authorized(Some("OWNER"), "owner"));
    }

    proptest! {
        /// The ALL wildcard admits every association, including none.
        #[test]
        fn all_admits_everything(assoc in proptest::option::of("[A-Z]{1,12}")) {
            prop_assert!(is_authorized(assoc.as_deref(), ROLE_ALL));
        }

        /// Without the wildcard, authorization implies exact equality.
        #[test]
        fn authorized_implies_exact_equality(
            assoc in proptest::option::of("[A-Za-z]{1,12}"),
            role in "[A-Za-z]{1,12}",
        ) {
            prop_assume!(role != ROLE_ALL);
            let authorized = is_authorized(assoc.as_deref(), &role);
            prop_assert_eq!(authorized, assoc.as_deref() == Some(role.as_str()));
        }
    }
}
