//! Signed-in user.

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub name: String,
    pub email: String,
}

impl User {
    pub fn new(name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
        }
    }

    /// Uppercase initials for avatar-style rendering ("John Doe" -> "JD").
    pub fn initials(&self) -> String {
        self.name
            .split_whitespace()
            .filter_map(|word| word.chars().next())
            .map(|c| c.to_ascii_uppercase())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn initials_from_full_name() {
        let user = User::new("John Doe", "john@example.com");
        assert_eq!(user.initials(), "JD");
    }

    #[test]
    fn initials_from_single_name() {
        let user = User::new("Priya", "priya@example.com");
        assert_eq!(user.initials(), "P");
    }
}
