use uuid::Uuid;

use super::error::LedgerError;

pub type ClientId = Uuid;

/// A person owning zero or more accounts. Immutable once registered.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Client {
    id: ClientId,
    first_name: String,
    last_name: String,
}

impl Client {
    /// Validates both names and issues a fresh identifier.
    pub(super) fn new(first_name: String, last_name: String) -> Result<Self, LedgerError> {
        if first_name.is_empty() {
            return Err(LedgerError::InvalidName {
                field: "first name",
            });
        }
        if last_name.is_empty() {
            return Err(LedgerError::InvalidName { field: "last name" });
        }
        Ok(Self {
            id: Uuid::new_v4(),
            first_name,
            last_name,
        })
    }

    pub fn id(&self) -> ClientId {
        self.id
    }

    pub fn first_name(&self) -> &str {
        &self.first_name
    }

    pub fn last_name(&self) -> &str {
        &self.last_name
    }
}

impl std::fmt::Display for Client {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.first_name, self.last_name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_client_keeps_names() {
        let client = Client::new("Lilian".into(), "Sinsau".into()).unwrap();
        assert_eq!(client.first_name(), "Lilian");
        assert_eq!(client.last_name(), "Sinsau");
        assert_eq!(client.to_string(), "Lilian Sinsau");
    }

    #[test]
    fn test_rejects_empty_first_name() {
        let err = Client::new(String::new(), "Sinsau".into()).unwrap_err();
        assert_eq!(
            err,
            LedgerError::InvalidName {
                field: "first name"
            }
        );
    }

    #[test]
    fn test_rejects_empty_last_name() {
        let err = Client::new("Lilian".into(), String::new()).unwrap_err();
        assert_eq!(err, LedgerError::InvalidName { field: "last name" });
    }

    #[test]
    fn test_whitespace_name_is_not_empty() {
        let client = Client::new(" ".into(), "Sinsau".into()).unwrap();
        assert_eq!(client.first_name(), " ");
    }

    #[test]
    fn test_ids_are_unique() {
        let a = Client::new("A".into(), "B".into()).unwrap();
        let b = Client::new("A".into(), "B".into()).unwrap();
        assert_ne!(a.id(), b.id());
    }
}
