use serde::Deserialize;
use std::fmt;
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContactField {
    Name,
    Email,
    Subject,
    Message,
}

impl ContactField {
    pub const ALL: [ContactField; 4] = [Self::Name, Self::Email, Self::Subject, Self::Message];

    pub fn label(self) -> &'static str {
        match self {
            Self::Name => "Name",
            Self::Email => "Email",
            Self::Subject => "Subject",
            Self::Message => "Message",
        }
    }
}

impl fmt::Display for ContactField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ContactError {
    #[error("{0} is required")]
    Missing(ContactField),
    #[error("Please enter a valid email address")]
    InvalidEmail,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

impl ContactForm {
    pub fn get(&self, field: ContactField) -> &str {
        match field {
            ContactField::Name => &self.name,
            ContactField::Email => &self.email,
            ContactField::Subject => &self.subject,
            ContactField::Message => &self.message,
        }
    }

    pub fn set(&mut self, field: ContactField, value: impl Into<String>) {
        let slot = match field {
            ContactField::Name => &mut self.name,
            ContactField::Email => &mut self.email,
            ContactField::Subject => &mut self.subject,
            ContactField::Message => &mut self.message,
        };
        *slot = value.into();
    }

    pub fn validate(&self) -> Result<(), ContactError> {
        if let Some(field) = ContactField::ALL
            .into_iter()
            .find(|f| self.get(*f).trim().is_empty())
        {
            return Err(ContactError::Missing(field));
        }
        match self.email.trim().split_once('@') {
            Some((user, domain)) if !user.is_empty() && !domain.is_empty() => Ok(()),
            _ => Err(ContactError::InvalidEmail),
        }
    }

    /// Accepts the message. There is no delivery backend; the submission is
    /// only logged.
    pub fn submit(&self) -> Result<(), ContactError> {
        self.validate()?;
        log::info!(
            "contact form submitted: name={:?} email={:?} subject={:?} ({} chars)",
            self.name,
            self.email,
            self.subject,
            self.message.chars().count()
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled() -> ContactForm {
        let mut form = ContactForm::default();
        form.set(ContactField::Name, "Grace");
        form.set(ContactField::Email, "grace@example.com");
        form.set(ContactField::Subject, "Hello");
        form.set(ContactField::Message, "Let's build something.");
        form
    }

    #[test]
    fn test_valid_form_submits() {
        let form = filled();
        assert_eq!(form.validate(), Ok(()));
        assert_eq!(form.submit(), Ok(()));
    }

    #[test]
    fn test_first_missing_field_reported() {
        let mut form = filled();
        form.set(ContactField::Subject, "   ");
        form.set(ContactField::Message, "");
        assert_eq!(
            form.validate(),
            Err(ContactError::Missing(ContactField::Subject))
        );
        assert_eq!(
            ContactForm::default().submit(),
            Err(ContactError::Missing(ContactField::Name))
        );
    }

    #[test]
    fn test_invalid_email() {
        let mut form = filled();
        for bad in ["grace", "@example.com", "grace@"] {
            form.set(ContactField::Email, bad);
            assert_eq!(form.validate(), Err(ContactError::InvalidEmail));
        }
    }

    #[test]
    fn test_error_messages() {
        assert_eq!(
            ContactError::Missing(ContactField::Email).to_string(),
            "Email is required"
        );
    }
}
