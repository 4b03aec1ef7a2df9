use crate::error::AppError;

pub fn check_role(necessary: &[&str], given: &str) -> Result<(), AppError> {
    if necessary.contains(&given) {
        Ok(())
    } else {
        Err(AppError::Unauthorized("not enough rights".to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::check_role;

    #[test]
    fn member_of_set_is_allowed() {
        assert!(check_role(&["A", "B"], "A").is_ok());
        assert!(check_role(&["A", "B"], "B").is_ok());
    }

    #[test]
    fn non_member_is_denied() {
        assert!(check_role(&["A", "B"], "C").is_err());
    }

    #[test]
    fn empty_set_denies_everyone() {
        assert!(check_role(&[], "A").is_err());
    }

    #[test]
    fn matching_is_exact_not_substring() {
        assert!(check_role(&["Courier manager"], "Courier").is_err());
        assert!(check_role(&["Courier"], "Courier manager").is_err());
        assert!(check_role(&["Superadmin", "Courier manager"], "manager").is_err());
    }
}
