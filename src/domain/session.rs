// Request-scoped session and the toy login gate in front of the calculator

/// The single configured demo account. Not an authentication system.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

impl Credentials {
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            password: password.into(),
        }
    }
}

impl Default for Credentials {
    fn default() -> Self {
        Self::new("example@example.com", "password")
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LoginError {
    #[error("Email and password are required.")]
    MissingCredentials,

    #[error("Invalid credentials!")]
    InvalidCredentials,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Session {
    pub logged_in: bool,
    pub email: String,
}

impl Session {
    pub fn anonymous() -> Self {
        Self::default()
    }

    pub fn login(
        &mut self,
        email: &str,
        password: &str,
        account: &Credentials,
    ) -> Result<(), LoginError> {
        if email.trim().is_empty() || password.trim().is_empty() {
            return Err(LoginError::MissingCredentials);
        }
        if email != account.email || password != account.password {
            return Err(LoginError::InvalidCredentials);
        }

        self.logged_in = true;
        self.email = email.to_string();
        Ok(())
    }

    pub fn logout(&mut self) {
        *self = Self::anonymous();
    }
}
