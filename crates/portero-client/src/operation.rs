//! CRUD operation to HTTP verb mapping

use reqwest::Method;
use std::fmt;

/// The four operations the API's REST convention recognizes.
///
/// Every request the client sends is classified as one of these before it
/// is built, and the verb on the wire always comes from
/// [`Operation::method`]. The mapping is an exhaustive match, so adding an
/// operation without deciding its verb does not compile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    Create,
    Read,
    Update,
    Delete,
}

impl Operation {
    /// HTTP verb carrying this operation.
    pub fn method(self) -> Method {
        match self {
            Operation::Create => Method::POST,
            Operation::Read => Method::GET,
            Operation::Update => Method::PUT,
            Operation::Delete => Method::DELETE,
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Operation::Create => "create",
            Operation::Read => "read",
            Operation::Update => "update",
            Operation::Delete => "delete",
        };
        write!(f, "{}", name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_method_mapping() {
        assert_eq!(Operation::Create.method(), Method::POST);
        assert_eq!(Operation::Read.method(), Method::GET);
        assert_eq!(Operation::Update.method(), Method::PUT);
        assert_eq!(Operation::Delete.method(), Method::DELETE);
    }

    #[test]
    fn test_display_names() {
        assert_eq!(Operation::Create.to_string(), "create");
        assert_eq!(Operation::Delete.to_string(), "delete");
    }
}
