//! Element ids of the sign-in and sign-up forms.

/// Sign-in email input
pub const EMAIL: &str = "email";

/// Sign-in password input
pub const PASSWORD: &str = "psw";

/// Sign-up email input
pub const REGISTER_EMAIL: &str = "email_reg";

/// Sign-up password input
pub const REGISTER_PASSWORD: &str = "psw_reg";

/// Sign-up password confirmation input
pub const REGISTER_PASSWORD_REPEAT: &str = "psw2";

/// Panel holding the sign-in form, hidden after a successful login
pub const SIGN_IN_PANEL: &str = "id01";

/// Panel holding the sign-up form, hidden after a successful registration
pub const SIGN_UP_PANEL: &str = "id02";
